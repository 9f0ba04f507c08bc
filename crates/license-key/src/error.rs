//! Error types for license key operations.

use thiserror::Error;

/// Structural problems with a candidate key string.
///
/// These are ordinary outcomes of checking user input and are reported as an
/// invalid key, never as a failure of the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Splitting on the separator did not yield prefix + all segments.
    #[error("Invalid key format: expected {expected} parts, got {found}")]
    WrongSegmentCount { expected: usize, found: usize },

    /// The first part is not the configured prefix.
    #[error("Invalid key prefix")]
    WrongPrefix,
}

/// The issuing secret is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SecretError {
    /// An empty secret would make every checksum public.
    #[error("License secret must not be empty")]
    Empty,
}

/// Invalid key format parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Prefix must not be empty")]
    EmptyPrefix,

    #[error("Prefix must not contain the separator '{0}'")]
    PrefixContainsSeparator(char),

    #[error("Segment length must be at least 1")]
    ZeroSegmentLength,

    #[error("At least one payload segment is required")]
    NoPayloadSegments,

    #[error("Alphabet must contain between 2 and 256 ASCII characters, got {0}")]
    AlphabetSize(usize),

    #[error("Alphabet must be ASCII without the separator, found '{0}'")]
    AlphabetCharacter(char),

    #[error("Alphabet contains '{0}' more than once")]
    DuplicateAlphabetCharacter(char),
}
