//! Key verification with constant-time comparison.

use crate::checksum::{compute_checksum, verify_checksum};
use crate::config::KeyFormat;
use crate::error::FormatError;
use crate::parse::parse;
use crate::secret::LicenseSecret;
use crate::segment::message;

/// Why a candidate key was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The string is not shaped like a key of this format.
    Format(FormatError),
    /// The checksum segment does not match the payload under this secret.
    ChecksumMismatch,
}

/// Outcome of checking a candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Valid,
    Invalid(Rejection),
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<FormatError> for Verification {
    fn from(err: FormatError) -> Self {
        Self::Invalid(Rejection::Format(err))
    }
}

/// Verify a candidate key offline.
///
/// This function:
/// 1. Parses the candidate to extract payload and checksum segments
/// 2. Recomputes the checksum over the prefix and payload
/// 3. Compares it against the supplied checksum in constant time
///
/// Malformed input is an ordinary `Invalid` result, never an error.
pub fn verify(candidate: &str, secret: &LicenseSecret, format: &KeyFormat) -> Verification {
    let parsed = match parse(candidate, format) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::debug!("License key rejected: {}", err);
            return err.into();
        }
    };

    let unsigned = message(format.prefix(), &parsed.payload, format.separator());
    let expected = compute_checksum(&unsigned, secret, format);

    if verify_checksum(parsed.checksum, &expected) {
        Verification::Valid
    } else {
        log::debug!("License key rejected: checksum mismatch");
        Verification::Invalid(Rejection::ChecksumMismatch)
    }
}
