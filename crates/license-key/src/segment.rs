//! Random segments and textual assembly of keys.

use rand::Rng;
use rand::rngs::OsRng;

use crate::config::KeyFormat;

/// Draw one payload segment from the operating system CSPRNG.
///
/// Each character is sampled independently and uniformly from the alphabet.
pub fn generate_segment(format: &KeyFormat) -> String {
    let alphabet = format.alphabet();
    let mut rng = OsRng;
    (0..format.segment_length())
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Join the prefix and payload segments: the input to the checksum.
pub fn message<S: AsRef<str>>(prefix: &str, payload: &[S], separator: char) -> String {
    let len = payload
        .iter()
        .map(|segment| separator.len_utf8() + segment.as_ref().len())
        .sum::<usize>();
    let mut out = String::with_capacity(prefix.len() + len);
    out.push_str(prefix);
    for segment in payload {
        out.push(separator);
        out.push_str(segment.as_ref());
    }
    out
}

/// Join prefix, payload segments and checksum into a full key string.
pub fn assemble<S: AsRef<str>>(
    prefix: &str,
    payload: &[S],
    checksum: &str,
    separator: char,
) -> String {
    let mut out = message(prefix, payload, separator);
    out.push(separator);
    out.push_str(checksum);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_length_and_alphabet() {
        let format = KeyFormat::default();
        for _ in 0..200 {
            let segment = generate_segment(&format);
            assert_eq!(segment.len(), 4);
            assert!(segment.chars().all(|c| format.contains(c)));
        }
    }

    #[test]
    fn test_segment_respects_custom_format() {
        let format = KeyFormat::default()
            .with_alphabet("XY")
            .and_then(|f| f.with_segment_length(9))
            .unwrap();
        let segment = generate_segment(&format);
        assert_eq!(segment.len(), 9);
        assert!(segment.chars().all(|c| c == 'X' || c == 'Y'));
    }

    #[test]
    fn test_message_with_uneven_segments() {
        let joined = message("ACME", &["ABCDEFGH", "JK"], '·');
        assert_eq!(joined, "ACME·ABCDEFGH·JK");
        assert_eq!(joined.len(), 4 + 8 + 2 + 2 * '·'.len_utf8());
        assert_eq!(message::<&str>("ACME", &[], '-'), "ACME");
    }

    #[test]
    fn test_segments_cover_alphabet() {
        let format = KeyFormat::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.extend(generate_segment(&format).chars());
        }
        // 8000 draws over 32 symbols; missing one has probability ~32 * e^-250
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_message() {
        assert_eq!(message("AWRF", &["ABCD", "EFGH", "JKLM"], '-'), "AWRF-ABCD-EFGH-JKLM");
    }

    #[test]
    fn test_assemble_orders_checksum_last() {
        let key = assemble("AWRF", &["ABCD", "EFGH", "JKLM"], "BJUE", '-');
        assert_eq!(key, "AWRF-ABCD-EFGH-JKLM-BJUE");
    }

    #[test]
    fn test_assemble_accepts_owned_segments() {
        let payload = vec!["2345".to_string(), "6789".to_string()];
        assert_eq!(assemble("K", &payload, "ZZZZ", '.'), "K.2345.6789.ZZZZ");
    }
}
