//! Comparison primitives for localized resource folder trees.
//!
//! These functions are pure with respect to output: they return deltas and
//! error lists, and leave the fatal-error policy (what aborts the run, what
//! is merely printed) to the command layer.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::{error::Error, placeholder::first_placeholder, table::StringsTable};

/// Suffix of per-language resource folders.
pub const LANGUAGE_FOLDER_EXT: &str = ".lproj";
/// The reference locale folder, also the fallback source when copying.
pub const BASE_LANGUAGE: &str = "Base.lproj";
/// The primary string table inside each language folder.
pub const STRINGS_FILE: &str = "Localizable.strings";
/// Files copied into a destination tree; anything else is ignored.
pub const FILES_TO_COPY: [&str; 3] = [
    "Localizable.strings",
    "Localizable.stringsdict",
    "InfoPlist.strings",
];
/// Placeholder mismatches reported before the list is truncated.
pub const MAX_ERRORS: usize = 20;

/// Lists the language folders directly under `root`, in sorted order.
pub fn language_folders_in(root: &Path) -> Result<BTreeSet<String>, Error> {
    let mut languages = BTreeSet::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(LANGUAGE_FOLDER_EXT) && entry.path().is_dir() {
            languages.insert(name);
        }
    }
    Ok(languages)
}

/// Set differences between the language folders of two resource roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDelta {
    /// Languages present in the original tree but absent from the modified one.
    pub missing: BTreeSet<String>,
    /// Languages present in the modified tree but absent from the original one.
    pub extra: BTreeSet<String>,
}

pub fn reconcile_languages(
    original: &BTreeSet<String>,
    modified: &BTreeSet<String>,
) -> LanguageDelta {
    LanguageDelta {
        missing: original.difference(modified).cloned().collect(),
        extra: modified.difference(original).cloned().collect(),
    }
}

/// Key-set differences between the two sides of one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDelta {
    /// Keys of the original table absent from the modified one.
    pub missing: Vec<String>,
    /// Keys of the modified table absent from the original one.
    pub extra: Vec<String>,
}

impl KeyDelta {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

pub fn compare_keys(original: &StringsTable, modified: &StringsTable) -> KeyDelta {
    let original_keys = original.key_set();
    let modified_keys = modified.key_set();
    KeyDelta {
        missing: original_keys
            .difference(&modified_keys)
            .map(|key| key.to_string())
            .collect(),
        extra: modified_keys
            .difference(&original_keys)
            .map(|key| key.to_string())
            .collect(),
    }
}

/// Describes every shared key whose first placeholder differs between the
/// two tables.
///
/// All keys are inspected before anything is reported, so a single run
/// surfaces every mismatch of a language. Keys absent from the modified
/// table are skipped; key-set parity is checked separately.
pub fn placeholder_mismatches(
    language: &str,
    original: &StringsTable,
    modified: &StringsTable,
) -> Vec<String> {
    let mut errors = Vec::new();
    for (key, original_value) in original.iter() {
        let Some(modified_value) = modified.get(key) else {
            continue;
        };
        if first_placeholder(original_value) != first_placeholder(modified_value) {
            errors.push(format!(
                "Mismatch for key '{}' in '{}':\noriginal: {}\nmodified: {}",
                key, language, original_value, modified_value
            ));
        }
    }
    errors
}

/// Truncates `errors` to `max` entries, appending a marker when more existed.
pub fn cap_errors(mut errors: Vec<String>, max: usize) -> Vec<String> {
    if errors.len() > max {
        errors.truncate(max);
        errors.push(format!("... showing only the first {} errors", max));
    }
    errors
}
