//! Key format parameters shared by generation, parsing and checksums.

use crate::error::ConfigError;

/// Symbols used for payload and checksum segments (no `I`, `O`, `0`, `1`).
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Product prefix of issued keys.
pub const DEFAULT_PREFIX: &str = "AWRF";

const DEFAULT_SEGMENT_LENGTH: usize = 4;
const DEFAULT_PAYLOAD_SEGMENTS: usize = 3;
const DEFAULT_SEPARATOR: char = '-';

/// Immutable description of a key layout.
///
/// The same value must be used to issue and to verify a key. Several formats
/// can coexist in one process since nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFormat {
    prefix: String,
    alphabet: Vec<u8>,
    segment_length: usize,
    payload_segments: usize,
    separator: char,
}

impl Default for KeyFormat {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            alphabet: DEFAULT_ALPHABET.as_bytes().to_vec(),
            segment_length: DEFAULT_SEGMENT_LENGTH,
            payload_segments: DEFAULT_PAYLOAD_SEGMENTS,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl KeyFormat {
    /// Create a format with the given prefix and default sizing.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        Self::default().with_prefix(prefix)
    }

    /// Replace the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if prefix.contains(self.separator) {
            return Err(ConfigError::PrefixContainsSeparator(self.separator));
        }
        self.prefix = prefix;
        Ok(self)
    }

    /// Replace the number of characters per segment.
    pub fn with_segment_length(mut self, segment_length: usize) -> Result<Self, ConfigError> {
        if segment_length == 0 {
            return Err(ConfigError::ZeroSegmentLength);
        }
        self.segment_length = segment_length;
        Ok(self)
    }

    /// Replace the number of random segments preceding the checksum.
    pub fn with_payload_segments(mut self, payload_segments: usize) -> Result<Self, ConfigError> {
        if payload_segments == 0 {
            return Err(ConfigError::NoPayloadSegments);
        }
        self.payload_segments = payload_segments;
        Ok(self)
    }

    /// Replace the alphabet. Its length becomes the encoding modulus.
    pub fn with_alphabet(mut self, alphabet: &str) -> Result<Self, ConfigError> {
        let len = alphabet.chars().count();
        if !(2..=256).contains(&len) {
            return Err(ConfigError::AlphabetSize(len));
        }

        let mut seen = [false; 128];
        for c in alphabet.chars() {
            if !c.is_ascii_graphic() || c == self.separator {
                return Err(ConfigError::AlphabetCharacter(c));
            }
            let slot = &mut seen[c as usize];
            if *slot {
                return Err(ConfigError::DuplicateAlphabetCharacter(c));
            }
            *slot = true;
        }

        self.alphabet = alphabet.as_bytes().to_vec();
        Ok(self)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn segment_length(&self) -> usize {
        self.segment_length
    }

    pub fn payload_segments(&self) -> usize {
        self.payload_segments
    }

    /// Payload segments plus the checksum segment.
    pub fn total_segments(&self) -> usize {
        self.payload_segments + 1
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Length in bytes of every key in this format.
    pub fn key_len(&self) -> usize {
        let segments = self.total_segments();
        self.prefix.len() + segments * (self.segment_length + self.separator.len_utf8())
    }

    /// Whether `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.alphabet.contains(&(c as u8))
    }
}
