// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Carrier pixel buffers.
//!
//! A [`PixelBuffer`] is `width × height × 4` interleaved 8-bit samples
//! (R, G, B, A), row-major. Images of any format the `image` crate can
//! decode are converted to RGBA8 on load; output is always PNG so that the
//! low bits survive.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::stego::error::StegoError;

/// Samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Maximum width or height of a carrier.
pub const MAX_DIMENSION: u32 = 16_384;

/// Maximum pixel count of a carrier (64 Mi).
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Validate carrier dimensions.
///
/// # Errors
/// [`StegoError::ImageTooLarge`] if either side exceeds [`MAX_DIMENSION`]
/// or the pixel count exceeds [`MAX_PIXELS`].
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), StegoError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION || width as u64 * height as u64 > MAX_PIXELS {
        return Err(StegoError::ImageTooLarge);
    }
    Ok(())
}

/// An owned RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA samples.
    ///
    /// # Errors
    /// - [`StegoError::InvalidBuffer`] if `data.len() != width * height * 4`.
    /// - [`StegoError::ImageTooLarge`] if the dimensions are out of bounds.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, StegoError> {
        validate_dimensions(width, height)?;
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(StegoError::InvalidBuffer { width, height, len: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Decode an encoded image (PNG, JPEG, BMP, GIF, WebP) into RGBA8.
    ///
    /// # Errors
    /// - [`StegoError::InvalidImage`] if the bytes cannot be decoded.
    /// - [`StegoError::ImageTooLarge`] if the image is out of bounds.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        let img = image::load_from_memory(bytes)?;
        validate_dimensions(img.width(), img.height())?;
        Ok(Self::from(img.to_rgba8()))
    }

    /// Encode as PNG (lossless, so embedded low bits are preserved).
    pub fn to_png(&self) -> Result<Vec<u8>, StegoError> {
        let img = RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or(
            StegoError::InvalidBuffer {
                width: self.width,
                height: self.height,
                len: self.data.len(),
            },
        )?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width × height`).
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Raw interleaved RGBA samples.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw samples. The length cannot change through this view.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height, data: img.into_raw() }
    }
}
