//! Text to codeword stream.

use super::codeword::Codeword;
use super::stream::BitStream;
use crate::error::Result;
use log::debug;

/// Encodes one character into its codeword.
///
/// # Errors
///
/// Returns [`Error::CodePointTooLarge`](crate::Error::CodePointTooLarge) for
/// code points of 2048 and above.
pub fn encode_char(c: char) -> Result<Codeword> {
    Codeword::from_data(u32::from(c))
}

/// Encodes text into a stream of 16-bit codewords, one per character, in
/// input order.
///
/// The whole batch fails on the first character that does not fit in 11
/// bits; no partial stream is returned.
pub fn encode(text: &str) -> Result<BitStream> {
    let stream = text.chars().map(encode_char).collect::<Result<BitStream>>()?;
    debug!(
        "encoded {} characters into {} bits",
        stream.codeword_count(),
        stream.len()
    );
    Ok(stream)
}

/// Encodes text straight into its `'0'`/`'1'` wire form
pub fn encode_to_string(text: &str) -> Result<String> {
    encode(text).map(|stream| stream.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_encode_letter_a() {
        assert_eq!(encode_to_string("A").unwrap(), "0010100001000001");
    }

    #[test]
    fn test_encode_length() {
        let text = "feed my 2 cats";
        let stream = encode(text).unwrap();
        assert_eq!(stream.len(), 16 * text.chars().count());
        assert!(stream.codewords().unwrap().all(|c| c.is_valid()));
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode("").unwrap().is_empty());
    }

    #[test]
    fn test_encode_eleven_bit_code_points() {
        // U+07FF is the widest code point a codeword can hold
        let codeword = encode_char('\u{07FF}').unwrap();
        assert_eq!(codeword.data(), 0x7FF);
        assert!(encode("\u{00E9}\u{0416}").is_ok());
    }

    #[test]
    fn test_encode_rejects_wide_code_points() {
        assert_eq!(
            encode("ok \u{0800}"),
            Err(Error::CodePointTooLarge { code_point: 0x800 })
        );
        assert_eq!(
            encode_char('€'),
            Err(Error::CodePointTooLarge { code_point: 0x20AC })
        );
    }
}
