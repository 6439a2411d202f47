// ============================================================
// TEXT DECODING
// ============================================================
// Decode raw file bytes into a string before parsing

use encoding_rs::{Encoding, UTF_8};

/// Decode raw bytes into text. A BOM selects the encoding when present;
/// otherwise the bytes are treated as UTF-8 with lossy replacement of
/// invalid sequences.
pub fn decode_text(bytes: &[u8]) -> String {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .unwrap_or(UTF_8);

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = encoding.name(),
            "Input contained invalid byte sequences, replaced during decoding"
        );
    }

    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        assert_eq!(decode_text("a,b\n1,2\n".as_bytes()), "a,b\n1,2\n");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let bytes = [0xEF, 0xBB, 0xBF, b'a', b',', b'b'];
        assert_eq!(decode_text(&bytes), "a,b");
    }

    #[test]
    fn test_utf16le_bom() {
        // "a,b" in UTF-16LE with BOM
        let bytes = [0xFF, 0xFE, b'a', 0x00, b',', 0x00, b'b', 0x00];
        assert_eq!(decode_text(&bytes), "a,b");
    }

    #[test]
    fn test_invalid_bytes_are_replaced() {
        let decoded = decode_text(&[b'a', 0xFF, b'b']);
        assert!(decoded.starts_with('a'));
        assert!(decoded.ends_with('b'));
    }
}
