//! Self-verifying license keys with a keyed checksum segment.
//!
//! This crate provides functionality for:
//! - Generating license keys from random payload segments and an HMAC-derived checksum
//! - Parsing candidate keys into their structural parts
//! - Verifying keys offline against a shared secret using constant-time comparison
//!
//! # Key Format
//!
//! Keys follow the format: `{prefix}-{payload}-{payload}-{payload}-{checksum}`
//!
//! Example: `AWRF-7KQM-X3DP-HN4W-BJUE`
//!
//! Every segment is drawn from a 32-symbol alphabet without the look-alike
//! glyphs `I`, `O`, `0` and `1`. The checksum is the first 16 bits of
//! HMAC-SHA256 over the prefix and payload, re-encoded into that alphabet.
//!
//! # Security Properties
//!
//! - Payload characters come from the operating system CSPRNG
//! - Checksums are compared in constant time
//! - The secret is zeroized on drop and redacted from `Debug` output
//! - The 16-bit checksum detects typos and casual tampering; it is not a
//!   signature, and anyone holding the secret can mint valid keys
//!
//! # Example
//!
//! ```rust
//! use license_key::{KeyFormat, LicenseSecret, generate, verify};
//!
//! let format = KeyFormat::default();
//! let secret = LicenseSecret::new(b"issuer-secret".to_vec()).unwrap();
//!
//! let key = generate(&secret, &format);
//! assert!(key.as_str().starts_with("AWRF-"));
//!
//! assert!(verify(key.as_str(), &secret, &format).is_valid());
//! assert!(!verify("AWRF-XXXX", &secret, &format).is_valid());
//! ```

mod checksum;
mod config;
mod error;
mod key;
mod parse;
mod secret;
mod segment;
mod verify;

// Public re-exports
pub use checksum::{compute_checksum, verify_checksum};
pub use config::{DEFAULT_ALPHABET, DEFAULT_PREFIX, KeyFormat};
pub use error::{ConfigError, FormatError, SecretError};
pub use key::{LicenseKey, generate};
pub use parse::{ParsedKey, parse};
pub use secret::LicenseSecret;
pub use segment::{assemble, generate_segment, message};
pub use verify::{Rejection, Verification, verify};
