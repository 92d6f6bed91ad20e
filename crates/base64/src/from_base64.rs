//! Strict standard base64 decoding.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::Base64Error;

/// Reverse lookup table: sextet value per input byte, -1 for bytes outside
/// the alphabet.
static REV: [i16; 256] = {
    let mut table = [-1i16; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i16;
        i += 1;
    }
    table
};

/// Decodes a standard padded base64 string to bytes.
///
/// The input length must be a multiple of four, every character must come
/// from `[A-Za-z0-9+/=]`, and `=` may only appear as the final one or two
/// characters. Empty input yields empty bytes.
///
/// # Example
///
/// ```
/// use msgpack_bridge_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = encoded.as_bytes();
    let length = bytes.len();
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }

    // Count trailing padding, then reject '=' anywhere else.
    let padding = if bytes[length - 1] == PAD {
        if bytes[length - 2] == PAD {
            2
        } else {
            1
        }
    } else {
        0
    };
    if bytes[..length - padding].contains(&PAD) {
        return Err(Base64Error::InvalidPadding);
    }

    let main_length = if padding > 0 { length - 4 } else { length };
    let mut out = Vec::with_capacity((length / 4) * 3);

    let mut i = 0;
    while i < main_length {
        let s0 = REV[bytes[i] as usize];
        let s1 = REV[bytes[i + 1] as usize];
        let s2 = REV[bytes[i + 2] as usize];
        let s3 = REV[bytes[i + 3] as usize];
        if s0 < 0 || s1 < 0 || s2 < 0 || s3 < 0 {
            return Err(Base64Error::InvalidCharacter);
        }
        let (s0, s1, s2, s3) = (s0 as u8, s1 as u8, s2 as u8, s3 as u8);
        out.push((s0 << 2) | (s1 >> 4));
        out.push((s1 << 4) | (s2 >> 2));
        out.push((s2 << 6) | s3);
        i += 4;
    }

    if padding == 2 {
        let s0 = REV[bytes[main_length] as usize];
        let s1 = REV[bytes[main_length + 1] as usize];
        if s0 < 0 || s1 < 0 {
            return Err(Base64Error::InvalidCharacter);
        }
        out.push(((s0 as u8) << 2) | ((s1 as u8) >> 4));
    } else if padding == 1 {
        let s0 = REV[bytes[main_length] as usize];
        let s1 = REV[bytes[main_length + 1] as usize];
        let s2 = REV[bytes[main_length + 2] as usize];
        if s0 < 0 || s1 < 0 || s2 < 0 {
            return Err(Base64Error::InvalidCharacter);
        }
        let (s0, s1, s2) = (s0 as u8, s1 as u8, s2 as u8);
        out.push((s0 << 2) | (s1 >> 4));
        out.push((s1 << 4) | (s2 >> 2));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_base64;

    #[test]
    fn known_vectors() {
        assert_eq!(from_base64("").unwrap(), b"");
        assert_eq!(from_base64("Zg==").unwrap(), b"f");
        assert_eq!(from_base64("Zm8=").unwrap(), b"fo");
        assert_eq!(from_base64("Zm9v").unwrap(), b"foo");
        assert_eq!(from_base64("Zm9vYmFy").unwrap(), b"foobar");
    }

    #[test]
    fn round_trips_all_lengths() {
        let data: Vec<u8> = (0..=255).collect();
        for end in 0..data.len() {
            let encoded = to_base64(&data[..end]);
            assert_eq!(from_base64(&encoded).unwrap(), &data[..end]);
        }
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(from_base64("Zg="), Err(Base64Error::InvalidLength));
        assert_eq!(from_base64("Z"), Err(Base64Error::InvalidLength));
    }

    #[test]
    fn rejects_foreign_characters() {
        assert_eq!(from_base64("Zm9!"), Err(Base64Error::InvalidCharacter));
        assert_eq!(from_base64("Zm9v!!!!"), Err(Base64Error::InvalidCharacter));
    }

    #[test]
    fn rejects_misplaced_padding() {
        assert_eq!(from_base64("===="), Err(Base64Error::InvalidPadding));
        assert_eq!(from_base64("Zg==Zg=="), Err(Base64Error::InvalidPadding));
        assert_eq!(from_base64("=g=="), Err(Base64Error::InvalidPadding));
    }
}
