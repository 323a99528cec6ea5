// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Carrier capacity estimation.
//!
//! Every pixel after the 32-pixel length header carries one ciphertext
//! digit, and every message character costs [`DIGIT_WIDTH`] digits.

use crate::stego::carrier::PixelBuffer;
use crate::stego::embed::HEADER_PIXELS;
use crate::stego::error::StegoError;
use crate::ternary::DIGIT_WIDTH;

/// Maximum number of ciphertext digits `buffer` can hold.
pub fn capacity_digits(buffer: &PixelBuffer) -> usize {
    buffer.pixel_count().saturating_sub(HEADER_PIXELS)
}

/// Maximum number of message characters `buffer` can hold.
pub fn capacity_chars(buffer: &PixelBuffer) -> usize {
    capacity_digits(buffer) / DIGIT_WIDTH as usize
}

/// Decode `image_bytes` and return its capacity in message characters.
///
/// # Errors
/// [`StegoError::InvalidImage`] if the image cannot be decoded.
pub fn estimate_capacity(image_bytes: &[u8]) -> Result<usize, StegoError> {
    let buffer = PixelBuffer::from_image_bytes(image_bytes)?;
    Ok(capacity_chars(&buffer))
}
