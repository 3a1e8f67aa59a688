#![forbid(unsafe_code)]
//! Build-support checks for Xcode-style localization resource folders.
//!
//! This crate holds the print-free primitives behind two small command-line
//! tools:
//!
//! - comparing two trees of per-language `.strings` tables for completeness
//!   and placeholder consistency (see [`compare`], [`table`], [`placeholder`]);
//! - locating a dependency checkout folder near the working directory
//!   (see [`locate`]).
//!
//! All file contents are read fully into memory and parsed into
//! [`StringsTable`] maps; nothing is persisted between runs.

pub mod comments;
pub mod compare;
pub mod error;
pub mod locate;
pub mod placeholder;
pub mod table;

pub use comments::strip_comments;
pub use compare::{
    BASE_LANGUAGE, FILES_TO_COPY, KeyDelta, LANGUAGE_FOLDER_EXT, LanguageDelta, MAX_ERRORS,
    STRINGS_FILE, cap_errors, compare_keys, language_folders_in, placeholder_mismatches,
    reconcile_languages,
};
pub use error::Error;
pub use locate::{DEPENDENCY_FOLDER, locate_dependency_folder};
pub use placeholder::first_placeholder;
pub use table::StringsTable;
