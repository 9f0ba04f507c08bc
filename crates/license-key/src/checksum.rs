//! HMAC-SHA256 checksum segment.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::KeyFormat;
use crate::secret::LicenseSecret;

type HmacSha256 = Hmac<Sha256>;

/// Compute the checksum segment for `message`.
///
/// The first 16 bits of `HMAC-SHA256(secret, message)` are written in the
/// format's alphabet as a fixed-width, most-significant-first number of
/// `segment_length` digits. Two messages share a checksum whenever their
/// digests share those 16 bits, so this detects typos and tampering but is
/// not a signature.
pub fn compute_checksum(message: &str, secret: &LicenseSecret, format: &KeyFormat) -> String {
    // HMAC accepts keys of any length; this never fails for a secret.
    let mut mac = HmacSha256::new_from_slice(secret.expose())
        .expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let digest = mac.finalize().into_bytes();

    // First four hex digits of the digest, i.e. its first two bytes big-endian.
    let value = u16::from_be_bytes([digest[0], digest[1]]);

    encode(u32::from(value), format)
}

fn encode(mut value: u32, format: &KeyFormat) -> String {
    let alphabet = format.alphabet();
    let base = alphabet.len() as u32;
    let mut digits = vec![0u8; format.segment_length()];
    for slot in digits.iter_mut().rev() {
        *slot = alphabet[(value % base) as usize];
        value /= base;
    }
    digits.into_iter().map(char::from).collect()
}

/// Constant-time comparison of a supplied checksum against the expected one.
pub fn verify_checksum(candidate: &str, expected: &str) -> bool {
    candidate.as_bytes().ct_eq(expected.as_bytes()).into()
}
