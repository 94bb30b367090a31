//! Lookup tables and the decoder for the 8-4-4-4-12 hexadecimal representation.

use crate::ParseError;

/// Two-digit lowercase hexadecimal representation of every byte value.
pub(crate) static LOWER: [[u8; 2]; 256] = byte_table(b"0123456789abcdef");

/// Two-digit uppercase hexadecimal representation of every byte value.
pub(crate) static UPPER: [[u8; 2]; 256] = byte_table(b"0123456789ABCDEF");

/// Value of every ASCII hexadecimal digit, case-insensitively; `INVALID` for any other byte.
static NIBBLES: [u8; 256] = nibble_table();

const INVALID: u8 = 0xff;

/// Byte offsets of the hyphens in the canonical string.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Byte offset of the first of the two digits that represent each byte of a UUID.
pub(crate) const DIGIT_POSITIONS: [usize; 16] =
    [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

/// Byte offset of the version digit.
const VERSION_POSITION: usize = 14;

/// Byte offset of the variant digit.
const VARIANT_POSITION: usize = 19;

const fn byte_table(digits: &[u8; 16]) -> [[u8; 2]; 256] {
    let mut table = [[0u8; 2]; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = [digits[i >> 4], digits[i & 15]];
        i += 1;
    }
    table
}

const fn nibble_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
}

/// Decodes the 8-4-4-4-12 representation into 16 bytes, accepting both letter cases.
///
/// Checks the length first, then the hyphen positions, and then every digit from left to right,
/// reporting the first violation found.
pub(crate) fn decode(src: &str) -> Result<[u8; 16], ParseError> {
    if src.len() != 36 {
        return Err(ParseError::InvalidLength { len: src.len() });
    }
    if let Some(&index) = HYPHENS.iter().find(|&&i| src.as_bytes()[i] != b'-') {
        return Err(ParseError::MissingHyphen { index });
    }

    let mut dst = [0u8; 16];
    for (e, &pos) in dst.iter_mut().zip(DIGIT_POSITIONS.iter()) {
        *e = (nibble(src, pos)? << 4) | nibble(src, pos + 1)?;
    }
    Ok(dst)
}

/// Reads the digit at `index`.
///
/// Digits are read from left to right and every byte before `index` is ASCII, so `index` always
/// starts a whole character when the digit is invalid.
fn nibble(src: &str, index: usize) -> Result<u8, ParseError> {
    match NIBBLES[src.as_bytes()[index] as usize] {
        INVALID => Err(ParseError::InvalidDigit {
            index,
            found: src
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        }),
        n => Ok(n),
    }
}

/// Tests if `src` is a well-formed 8-4-4-4-12 string and, if `version` is given, if the version
/// digit reads `version`. For versions 3 and 4 the variant digit must also be one of `8`, `9`,
/// `a`, or `b` in either case.
pub(crate) fn is_valid_str(src: &str, version: Option<u8>) -> bool {
    if decode(src).is_err() {
        return false;
    }
    let Some(version) = version else {
        return true;
    };

    let src = src.as_bytes();
    if NIBBLES[src[VERSION_POSITION] as usize] != version {
        return false;
    }
    match version {
        3 | 4 => matches!(NIBBLES[src[VARIANT_POSITION] as usize], 0x8..=0xb),
        _ => true,
    }
}
