//! Parsing of Apple `.strings` tables into key/value maps.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{comments::strip_comments, error::Error};

lazy_static! {
    // "key" = "value"; -- key may not contain '=', value runs to the last ";
    static ref ENTRY_REGEX: Regex = Regex::new(r#"^"([^=]+)"\s*=\s*"(.*)";$"#).unwrap();
}

/// The parsed contents of one `.strings` file: a key to value map.
///
/// Keys are unique within a file; when the same key appears twice, the last
/// occurrence wins. Iteration order is the sorted key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringsTable {
    entries: BTreeMap<String, String>,
}

impl StringsTable {
    /// Parses raw `.strings` text.
    ///
    /// Comments are stripped first, then every remaining non-blank trimmed
    /// line must have the form `"key" = "value";`. A line that does not
    /// match fails the whole parse with [`Error::ParseLine`].
    pub fn parse(text: &str) -> Result<Self, Error> {
        let stripped = strip_comments(text);
        let mut entries = BTreeMap::new();
        for line in stripped.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let caps = ENTRY_REGEX
                .captures(trimmed)
                .ok_or_else(|| Error::ParseLine(trimmed.to_string()))?;
            entries.insert(caps[1].to_string(), caps[2].to_string());
        }
        Ok(StringsTable { entries })
    }

    /// Reads and parses a `.strings` file.
    ///
    /// Apple resource files are frequently UTF-16 with a BOM; the decoder
    /// honors a BOM when present and otherwise assumes UTF-8.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding_rs::UTF_8))
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded)?;

        Self::parse(&decoded)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn key_set(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
