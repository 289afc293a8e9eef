//! Synset reference to sense key resolution.
use std::fmt;
use std::num::ParseIntError;

use super::SenseTable;

/// References meaning "no synset".
///
/// `\N` from the picto table is normalized to `"0"` when the table is loaded.
pub const NO_SYNSET: [&str; 4] = ["", "0", "None", "closed"];

/// A synset reference could not be turned into a synset offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    reference: String,
    source: ParseIntError,
}

impl FormatError {
    /// Get a reference to the offending synset reference.
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid synset reference {:?}: {}",
            self.reference, self.source
        )
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Parsed synset reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynsetRef {
    /// One of [NO_SYNSET].
    Absent,
    Offset(u64),
}

impl SynsetRef {
    /// Parse `12345`, `12345-n` or any of [NO_SYNSET].
    ///
    /// Only the part before the first `-` is parsed, the qualifier is ignored.
    pub fn parse(reference: &str) -> Result<Self, FormatError> {
        if NO_SYNSET.contains(&reference) {
            return Ok(SynsetRef::Absent);
        }

        let offset = reference.split('-').next().unwrap_or_default();
        offset
            .trim()
            .parse()
            .map(SynsetRef::Offset)
            .map_err(|source| FormatError {
                reference: reference.to_string(),
                source,
            })
    }
}

/// Get every sense key of the synset pointed by `reference`, in table order.
///
/// Returns an empty vector for sentinels and for synsets with no sense in the table.
pub fn resolve(reference: &str, table: &SenseTable) -> Result<Vec<String>, FormatError> {
    match SynsetRef::parse(reference)? {
        SynsetRef::Absent => Ok(Vec::new()),
        SynsetRef::Offset(offset) => Ok(table
            .with_synset(offset)
            .map(|r| r.sense_key().to_string())
            .collect()),
    }
}

/// Get the first sense key of the synset pointed by `reference`,
/// or an empty string if there is none.
pub fn resolve_first(reference: &str, table: &SenseTable) -> Result<String, FormatError> {
    match SynsetRef::parse(reference)? {
        SynsetRef::Absent => Ok(String::new()),
        SynsetRef::Offset(offset) => Ok(table
            .with_synset(offset)
            .next()
            .map(|r| r.sense_key().to_string())
            .unwrap_or_default()),
    }
}
