//! Error types for the l10ncheck crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("can not parse line:\n\t{0}")]
    ParseLine(String),
}
