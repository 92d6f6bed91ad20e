//! Standard base64 encoding.

use crate::constants::ALPHABET_BYTES;

/// Pre-computed two-character lookup table: each entry holds the two base64
/// characters for a 12-bit group.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            table[i * 64 + j][0] = ALPHABET_BYTES[i];
            table[i * 64 + j][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Encodes a byte slice to a standard padded base64 string.
///
/// Empty input yields an empty string.
///
/// # Example
///
/// ```
/// use msgpack_bridge_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(data: &[u8]) -> String {
    let length = data.len();
    let mut out = String::with_capacity((length * 4 / 3) + 4);

    let extra = length % 3;
    let base = length - extra;

    let mut i = 0;
    while i < base {
        let o1 = data[i];
        let o2 = data[i + 1];
        let o3 = data[i + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        out.push(TABLE2[v1][0] as char);
        out.push(TABLE2[v1][1] as char);
        out.push(TABLE2[v2][0] as char);
        out.push(TABLE2[v2][1] as char);
        i += 3;
    }

    match extra {
        0 => {}
        1 => {
            let o1 = data[base];
            let v1 = (o1 as usize) << 4;
            out.push(TABLE2[v1][0] as char);
            out.push(TABLE2[v1][1] as char);
            out.push('=');
            out.push('=');
        }
        _ => {
            let o1 = data[base];
            let o2 = data[base + 1];
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;

            out.push(TABLE2[v1][0] as char);
            out.push(TABLE2[v1][1] as char);
            out.push(ALPHABET_BYTES[v2] as char);
            out.push('=');
        }
    }

    out
}
