//! Deterministic base-62 encoding of recipe IDs.
//!
//! Codes are the big-endian base-62 digits of the recipe ID, nothing is stored. The
//! alphabet order is part of every published link and must never change.

use crate::server::error::short_code::ShortCodeError;

/// Digit alphabet, the value of a symbol is its index
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: i32 = 62;

/// Encodes a recipe ID, `0` encodes as `"0"`
pub fn encode_id(id: i32) -> Result<String, ShortCodeError> {
    if id < 0 {
        return Err(ShortCodeError::InvalidCode(id.to_string()));
    }

    if id == 0 {
        return Ok("0".to_string());
    }

    let mut value = id;
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    digits.reverse();

    Ok(digits.into_iter().map(char::from).collect())
}

/// Decodes a code back into a recipe ID
///
/// Rejects the empty string, symbols outside [`ALPHABET`], leading zeros (so every ID
/// has exactly one code) and values that do not fit in a recipe ID.
pub fn decode_code(code: &str) -> Result<i32, ShortCodeError> {
    let invalid = || ShortCodeError::InvalidCode(code.to_string());

    if code.is_empty() || (code.len() > 1 && code.starts_with('0')) {
        return Err(invalid());
    }

    code.bytes().try_fold(0i32, |value, symbol| {
        let digit = digit_value(symbol).ok_or_else(invalid)?;

        value
            .checked_mul(BASE)
            .and_then(|value| value.checked_add(digit))
            .ok_or_else(invalid)
    })
}

fn digit_value(symbol: u8) -> Option<i32> {
    match symbol {
        b'0'..=b'9' => Some((symbol - b'0') as i32),
        b'a'..=b'z' => Some((symbol - b'a') as i32 + 10),
        b'A'..=b'Z' => Some((symbol - b'A') as i32 + 36),
        _ => None,
    }
}
