//! The shared issuing secret.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::SecretError;

/// Key material for the checksum HMAC.
///
/// There is no default: callers must supply a non-empty secret, so a
/// misconfigured issuer cannot fall back to a well-known value.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct LicenseSecret(Vec<u8>);

impl LicenseSecret {
    /// Wrap secret bytes, rejecting an empty secret.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SecretError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(bytes))
    }

    /// Get a reference to the secret bytes.
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for LicenseSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LicenseSecret([REDACTED])")
    }
}
