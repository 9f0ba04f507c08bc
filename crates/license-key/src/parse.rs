//! Structural parsing of candidate keys.

use crate::config::KeyFormat;
use crate::error::FormatError;

/// Segments extracted from a structurally valid key.
///
/// Segment contents are not checked against the alphabet here; a foreign
/// character simply fails the checksum comparison later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey<'a> {
    /// Random payload segments, in key order.
    pub payload: Vec<&'a str>,
    /// The trailing checksum segment.
    pub checksum: &'a str,
}

/// Parse a key string into its payload and checksum segments.
///
/// # Arguments
/// * `candidate` - The full key string (e.g., "AWRF-ABCD-EFGH-JKLM-BJUE")
/// * `format` - The layout the key must follow
///
/// # Returns
/// * `ParsedKey` borrowing the segments from `candidate`
/// * `FormatError` if the part count or prefix is wrong
pub fn parse<'a>(candidate: &'a str, format: &KeyFormat) -> Result<ParsedKey<'a>, FormatError> {
    let mut parts: Vec<&str> = candidate.split(format.separator()).collect();

    let expected = 1 + format.total_segments();
    if parts.len() != expected {
        return Err(FormatError::WrongSegmentCount {
            expected,
            found: parts.len(),
        });
    }

    if parts[0] != format.prefix() {
        return Err(FormatError::WrongPrefix);
    }

    // Length checked above, so there is always a last part.
    let checksum = parts.pop().unwrap_or_default();
    parts.remove(0);

    Ok(ParsedKey {
        payload: parts,
        checksum,
    })
}
