//! License key generation.

use std::fmt;

use crate::checksum::compute_checksum;
use crate::config::KeyFormat;
use crate::secret::LicenseSecret;
use crate::segment::{assemble, generate_segment, message};

/// A generated license key, e.g. `AWRF-7KQM-X3DP-HN4W-ACX5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicenseKey(String);

impl LicenseKey {
    /// The full key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LicenseKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a new license key.
///
/// The key contains:
/// - The format prefix
/// - `payload_segments` random segments from the OS CSPRNG
/// - A checksum segment over the prefix and payload, keyed with `secret`
pub fn generate(secret: &LicenseSecret, format: &KeyFormat) -> LicenseKey {
    let payload: Vec<String> = (0..format.payload_segments())
        .map(|_| generate_segment(format))
        .collect();

    let unsigned = message(format.prefix(), &payload, format.separator());
    let checksum = compute_checksum(&unsigned, secret, format);
    let key = assemble(format.prefix(), &payload, &checksum, format.separator());

    debug_assert!(
        crate::verify::verify(&key, secret, format).is_valid(),
        "generated key failed its own verification: {key}"
    );

    LicenseKey(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> LicenseSecret {
        LicenseSecret::new("unit-test-secret").unwrap()
    }

    #[test]
    fn test_generate_key_format() {
        let format = KeyFormat::default();
        let key = generate(&secret(), &format);

        assert!(key.as_str().starts_with("AWRF-"));
        assert_eq!(key.as_str().len(), format.key_len());

        let parts: Vec<&str> = key.as_str().split('-').collect();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0], "AWRF");
        for part in &parts[1..] {
            assert_eq!(part.len(), 4);
            assert!(part.chars().all(|c| format.contains(c)));
        }
    }

    #[test]
    fn test_generate_checksum_matches_payload() {
        let format = KeyFormat::default();
        let s = secret();
        let key = generate(&s, &format);

        let (unsigned, checksum) = key.as_str().rsplit_once('-').unwrap();
        assert_eq!(compute_checksum(unsigned, &s, &format), checksum);
    }

    #[test]
    fn test_generate_unique_keys() {
        let format = KeyFormat::default();
        let s = secret();
        let key1 = generate(&s, &format);
        let key2 = generate(&s, &format);
        // 60 bits of payload; a repeat here would point at a broken RNG
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_generate_custom_format() {
        let format = KeyFormat::new("ACME")
            .and_then(|f| f.with_payload_segments(5))
            .and_then(|f| f.with_segment_length(6))
            .unwrap();
        let key = generate(&secret(), &format);
        assert_eq!(key.as_str().split('-').count(), 7);
        assert_eq!(key.as_str().len(), format.key_len());
    }

    #[test]
    fn test_display_and_into_string() {
        let key = generate(&secret(), &KeyFormat::default());
        let shown = key.to_string();
        assert_eq!(shown, key.as_str());
        assert_eq!(key.into_string(), shown);
    }
}
