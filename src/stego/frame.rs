// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Text framing for the image-free transport path.
//!
//! The framed artifact is plain ASCII:
//!
//! ```text
//! BEGIN_ENCRYPTED_DATA<digits 0/1/2>END_ENCRYPTED_DATA
//! ```
//!
//! There is no length field or checksum; the markers alone delimit the
//! payload.

use crate::stego::error::StegoError;
use crate::ternary::{check_trits, TernaryError};

/// Marker preceding the ciphertext digits.
pub const BEGIN_MARKER: &str = "BEGIN_ENCRYPTED_DATA";

/// Marker following the ciphertext digits.
pub const END_MARKER: &str = "END_ENCRYPTED_DATA";

/// Wrap a ciphertext digit stream in the begin/end markers.
///
/// # Errors
/// [`StegoError::Ternary`] with `InvalidDigit` if a digit is not in `0..=2`;
/// such a stream could not be recovered by [`unframe`].
pub fn frame(digits: &[u8]) -> Result<String, StegoError> {
    let body = digits_to_string(digits)?;
    Ok([BEGIN_MARKER, body.as_str(), END_MARKER].concat())
}

/// Recover the ciphertext digit stream from framed text.
///
/// Text before the begin marker and after the end marker is ignored, so a
/// pasted block with surrounding whitespace still parses.
///
/// # Errors
/// [`StegoError::MalformedFrame`] if either marker is missing, the end
/// marker does not follow the begin marker, or the enclosed text contains
/// anything other than `0`, `1`, `2`.
pub fn unframe(text: &str) -> Result<Vec<u8>, StegoError> {
    let start = text.find(BEGIN_MARKER).ok_or(StegoError::MalformedFrame)? + BEGIN_MARKER.len();
    let len = text[start..].find(END_MARKER).ok_or(StegoError::MalformedFrame)?;
    digits_from_str(&text[start..start + len]).ok_or(StegoError::MalformedFrame)
}

/// Render a digit stream as ASCII `0`/`1`/`2`.
///
/// # Errors
/// [`TernaryError::InvalidDigit`] for the first digit outside `0..=2`.
pub fn digits_to_string(digits: &[u8]) -> Result<String, TernaryError> {
    check_trits(digits)?;
    Ok(digits.iter().map(|&d| char::from(b'0' + d)).collect())
}

/// Parse an ASCII `0`/`1`/`2` string; `None` on any other character.
pub fn digits_from_str(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| match b {
            b'0'..=b'2' => Some(b - b'0'),
            _ => None,
        })
        .collect()
}
