// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Character ↔ ternary digit transcoding.
//!
//! Each character becomes exactly [`DIGIT_WIDTH`] base-3 digits, most
//! significant first, left-padded with zeros. With the default width of 7
//! this covers code points `0..=2186`.

use super::error::{Result, TernaryError};
use super::{DIGIT_WIDTH, MAX_CODE_POINT, RADIX};

/// Encode `text` as a fixed-width ternary digit stream.
///
/// # Errors
/// [`TernaryError::UnsupportedCodePoint`] for the first character whose
/// code point exceeds [`MAX_CODE_POINT`].
pub fn encode(text: &str) -> Result<Vec<u8>> {
    let width = DIGIT_WIDTH as usize;
    let mut digits = Vec::with_capacity(text.len() * width);

    for (index, ch) in text.chars().enumerate() {
        let mut value = ch as u32;
        if value > MAX_CODE_POINT {
            return Err(TernaryError::UnsupportedCodePoint { ch, index });
        }
        let start = digits.len();
        digits.resize(start + width, 0);
        // Fill the group from its least significant end.
        for slot in digits[start..].iter_mut().rev() {
            *slot = (value % RADIX as u32) as u8;
            value /= RADIX as u32;
        }
    }

    Ok(digits)
}

/// Decode a ternary digit stream back into text.
///
/// # Errors
/// - [`TernaryError::MisalignedDigits`] if the length is not a multiple of
///   [`DIGIT_WIDTH`].
/// - [`TernaryError::InvalidDigit`] if any element is greater than 2.
/// - [`TernaryError::InvalidCodePoint`] if a group is not a Unicode scalar
///   value (only reachable with a widened digit width).
pub fn decode(digits: &[u8]) -> Result<String> {
    let width = DIGIT_WIDTH as usize;
    if digits.len() % width != 0 {
        return Err(TernaryError::MisalignedDigits { len: digits.len() });
    }

    let mut text = String::with_capacity(digits.len() / width);
    for (group_idx, group) in digits.chunks_exact(width).enumerate() {
        let mut value = 0u32;
        for (offset, &d) in group.iter().enumerate() {
            if d >= RADIX {
                return Err(TernaryError::InvalidDigit {
                    index: group_idx * width + offset,
                    value: d,
                });
            }
            value = value * RADIX as u32 + d as u32;
        }
        let ch = char::from_u32(value).ok_or(TernaryError::InvalidCodePoint(value))?;
        text.push(ch);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_values() {
        // 'H' = 72 = 2200 (base 3) → 0002200
        assert_eq!(encode("H").unwrap(), vec![0, 0, 0, 2, 2, 0, 0]);
        // 'I' = 73 = 2201 (base 3) → 0002201
        assert_eq!(encode("I").unwrap(), vec![0, 0, 0, 2, 2, 0, 1]);
        assert_eq!(encode("\0").unwrap(), vec![0; 7]);
    }

    #[test]
    fn encode_is_width_times_chars() {
        let digits = encode("HI").unwrap();
        assert_eq!(digits.len(), 14);
    }

    #[test]
    fn max_code_point_is_all_twos() {
        let top = char::from_u32(MAX_CODE_POINT).unwrap();
        assert_eq!(encode(&top.to_string()).unwrap(), vec![2; 7]);
    }

    #[test]
    fn code_point_above_range_rejected() {
        let over = char::from_u32(MAX_CODE_POINT + 1).unwrap();
        let text = format!("ab{over}");
        match encode(&text) {
            Err(TernaryError::UnsupportedCodePoint { ch, index }) => {
                assert_eq!(ch, over);
                assert_eq!(index, 2);
            }
            other => panic!("expected UnsupportedCodePoint, got {other:?}"),
        }
        assert!(encode("emoji 🔐").is_err());
    }

    #[test]
    fn roundtrip_mixed_text() {
        let text = "Hello, wörld! Ωμέγα ЖЩ ա";
        assert!(text.chars().all(|c| (c as u32) <= MAX_CODE_POINT));
        assert_eq!(decode(&encode(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn decode_empty() {
        assert_eq!(decode(&[]).unwrap(), "");
    }

    #[test]
    fn decode_misaligned() {
        assert_eq!(
            decode(&[0, 1, 2]),
            Err(TernaryError::MisalignedDigits { len: 3 })
        );
    }

    #[test]
    fn decode_rejects_non_trit() {
        assert_eq!(
            decode(&[0, 0, 0, 2, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0]),
            Err(TernaryError::InvalidDigit { index: 9, value: 3 })
        );
    }
}
