// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Red-channel LSB embedding of ternary digit streams.
//!
//! Carrier layout (pixel indices, red channel only):
//!
//! ```text
//! [pixels 0..32   ] payload length, 1 bit per pixel in bit 0, MSB first
//! [pixels 32..32+n] one ternary digit per pixel in bits 0..3
//! ```
//!
//! Green, blue and alpha samples are never touched, nor are the top 7 bits
//! (header) or top 5 bits (payload) of the red sample. The embedder is
//! oblivious to the cipher; it only sees an opaque digit stream.

use crate::stego::carrier::{PixelBuffer, CHANNELS};
use crate::stego::error::{CarrierDefect, StegoError};
use crate::ternary::{check_trits, RADIX};

/// Pixels occupied by the 32-bit length header.
pub const HEADER_PIXELS: usize = 32;

/// Red-channel bits used by a header pixel.
pub const HEADER_MASK: u8 = 0x01;

/// Red-channel bits used by a payload pixel.
pub const PAYLOAD_MASK: u8 = 0x07;

/// Offset of the red sample within a pixel.
const RED: usize = 0;

/// Embed `digits` into `buffer` in place.
///
/// Capacity and digit validity are checked before any sample is written,
/// so on error the buffer is unchanged.
///
/// # Errors
/// - [`StegoError::CapacityExceeded`] if `32 + digits.len()` exceeds the
///   pixel count or the length does not fit the 32-bit header.
/// - [`StegoError::Ternary`] with `InvalidDigit` if a digit is not in `0..=2`.
pub fn embed(buffer: &mut PixelBuffer, digits: &[u8]) -> Result<(), StegoError> {
    let available = buffer.pixel_count();
    let needed = HEADER_PIXELS.saturating_add(digits.len());
    let length = match u32::try_from(digits.len()) {
        Ok(n) if needed <= available => n,
        _ => {
            log::warn!("carrier of {available} pixels cannot hold {} digits", digits.len());
            return Err(StegoError::CapacityExceeded { needed, available });
        }
    };
    check_trits(digits)?;

    let samples = buffer.as_raw_mut();
    let (header, payload) = samples.split_at_mut(HEADER_PIXELS * CHANNELS);

    for (i, pixel) in header.chunks_exact_mut(CHANNELS).enumerate() {
        let bit = ((length >> (31 - i)) & 1) as u8;
        pixel[RED] = (pixel[RED] & !HEADER_MASK) | bit;
    }

    write_payload(&mut payload[..digits.len() * CHANNELS], digits);

    log::debug!("embedded {} digits into {available} pixels", digits.len());
    Ok(())
}

/// Extract the digit stream from `buffer`.
///
/// # Errors
/// [`StegoError::CorruptCarrier`] if the buffer is smaller than the header,
/// the declared length exceeds the remaining pixels, or a payload pixel does
/// not hold a ternary digit.
pub fn extract(buffer: &PixelBuffer) -> Result<Vec<u8>, StegoError> {
    let pixels = buffer.pixel_count();
    if pixels < HEADER_PIXELS {
        return Err(StegoError::CorruptCarrier(CarrierDefect::TooFewPixels(pixels)));
    }

    let samples = buffer.as_raw();
    let (header, payload) = samples.split_at(HEADER_PIXELS * CHANNELS);

    let declared = header
        .chunks_exact(CHANNELS)
        .fold(0u32, |acc, pixel| (acc << 1) | (pixel[RED] & HEADER_MASK) as u32);

    let available = pixels - HEADER_PIXELS;
    let len = declared as usize;
    if len > available {
        log::warn!("carrier declares {declared} digits but only {available} pixels remain");
        return Err(StegoError::CorruptCarrier(CarrierDefect::LengthOverflow {
            declared: declared as u64,
            available,
        }));
    }

    let digits = read_payload(&payload[..len * CHANNELS]);
    if let Some((i, &value)) = digits.iter().enumerate().find(|&(_, &d)| d >= RADIX) {
        return Err(StegoError::CorruptCarrier(CarrierDefect::InvalidDigit {
            pixel: HEADER_PIXELS + i,
            value,
        }));
    }

    log::debug!("extracted {len} digits from {pixels} pixels");
    Ok(digits)
}

#[cfg(not(feature = "parallel"))]
fn write_payload(samples: &mut [u8], digits: &[u8]) {
    for (pixel, &d) in samples.chunks_exact_mut(CHANNELS).zip(digits) {
        pixel[RED] = (pixel[RED] & !PAYLOAD_MASK) | d;
    }
}

#[cfg(feature = "parallel")]
fn write_payload(samples: &mut [u8], digits: &[u8]) {
    use rayon::prelude::*;

    samples
        .par_chunks_exact_mut(CHANNELS)
        .zip(digits.par_iter())
        .for_each(|(pixel, &d)| pixel[RED] = (pixel[RED] & !PAYLOAD_MASK) | d);
}

#[cfg(not(feature = "parallel"))]
fn read_payload(samples: &[u8]) -> Vec<u8> {
    samples
        .chunks_exact(CHANNELS)
        .map(|pixel| pixel[RED] & PAYLOAD_MASK)
        .collect()
}

#[cfg(feature = "parallel")]
fn read_payload(samples: &[u8]) -> Vec<u8> {
    use rayon::prelude::*;

    samples
        .par_chunks_exact(CHANNELS)
        .map(|pixel| pixel[RED] & PAYLOAD_MASK)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ternary::TernaryError;

    /// A buffer whose samples are all 0xFF, so every cleared bit is visible.
    fn white(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(width, height, vec![0xFF; (width * height) as usize * CHANNELS]).unwrap()
    }

    #[test]
    fn header_is_big_endian_lsb() {
        let mut buf = white(10, 10);
        let digits = vec![1u8; 14]; // 14 = 0b1110
        embed(&mut buf, &digits).unwrap();
        let raw = buf.as_raw();
        let header_bits: Vec<u8> = (0..32).map(|i| raw[i * 4] & 1).collect();
        let mut expected = vec![0u8; 28];
        expected.extend_from_slice(&[1, 1, 1, 0]);
        assert_eq!(header_bits, expected);
        // Upper bits of header red samples are preserved.
        assert!((0..32).all(|i| raw[i * 4] & 0xFE == 0xFE));
    }

    #[test]
    fn payload_uses_low_three_bits() {
        let mut buf = white(10, 10);
        embed(&mut buf, &[0, 1, 2]).unwrap();
        let raw = buf.as_raw();
        assert_eq!(raw[32 * 4], 0xF8);
        assert_eq!(raw[33 * 4], 0xF9);
        assert_eq!(raw[34 * 4], 0xFA);
        // Pixel after the payload is untouched.
        assert_eq!(raw[35 * 4], 0xFF);
    }

    #[test]
    fn other_channels_untouched() {
        let mut buf = white(8, 8);
        embed(&mut buf, &[2; 20]).unwrap();
        for pixel in buf.as_raw().chunks_exact(4) {
            assert_eq!(&pixel[1..], &[0xFF, 0xFF, 0xFF]);
        }
    }

    #[test]
    fn roundtrip() {
        let mut buf = white(10, 10);
        let digits: Vec<u8> = (0..68).map(|i| (i * 7 % 3) as u8).collect();
        embed(&mut buf, &digits).unwrap();
        assert_eq!(extract(&buf).unwrap(), digits);
    }

    #[test]
    fn exact_fit() {
        let mut buf = white(10, 10);
        let digits = vec![2u8; 100 - HEADER_PIXELS];
        embed(&mut buf, &digits).unwrap();
        assert_eq!(extract(&buf).unwrap(), digits);
    }

    #[test]
    fn empty_payload() {
        let mut buf = white(6, 6);
        embed(&mut buf, &[]).unwrap();
        assert!(extract(&buf).unwrap().is_empty());
    }

    #[test]
    fn capacity_exceeded_leaves_buffer_untouched() {
        let mut buf = white(10, 10);
        let before = buf.clone();
        let digits = vec![1u8; 100 - HEADER_PIXELS + 1];
        match embed(&mut buf, &digits) {
            Err(StegoError::CapacityExceeded { needed, available }) => {
                assert_eq!(needed, 101);
                assert_eq!(available, 100);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn non_trit_digit_leaves_buffer_untouched() {
        let mut buf = white(10, 10);
        let before = buf.clone();
        match embed(&mut buf, &[0, 3]) {
            Err(StegoError::Ternary(TernaryError::InvalidDigit { index, value })) => {
                assert_eq!(index, 1);
                assert_eq!(value, 3);
            }
            other => panic!("expected InvalidDigit, got {other:?}"),
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn extract_too_few_pixels() {
        let buf = white(5, 6);
        assert!(matches!(
            extract(&buf),
            Err(StegoError::CorruptCarrier(CarrierDefect::TooFewPixels(30)))
        ));
    }

    #[test]
    fn extract_length_overflow() {
        // All-white header declares 0xFFFF_FFFF digits.
        let buf = white(10, 10);
        match extract(&buf) {
            Err(StegoError::CorruptCarrier(CarrierDefect::LengthOverflow { declared, available })) => {
                assert_eq!(declared, u32::MAX as u64);
                assert_eq!(available, 68);
            }
            other => panic!("expected LengthOverflow, got {other:?}"),
        }
    }

    #[test]
    fn extract_rejects_non_trit_pixel() {
        let mut buf = white(10, 10);
        embed(&mut buf, &[0, 1, 2, 0]).unwrap();
        // Pixel 34 → low bits 7.
        buf.as_raw_mut()[34 * 4] |= PAYLOAD_MASK;
        match extract(&buf) {
            Err(StegoError::CorruptCarrier(CarrierDefect::InvalidDigit { pixel, value })) => {
                assert_eq!(pixel, 34);
                assert_eq!(value, 7);
            }
            other => panic!("expected InvalidDigit, got {other:?}"),
        }
    }
}
