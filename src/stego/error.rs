// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers every failure from text transcoding through
//! carrier decoding and payload extraction. Every error aborts the
//! pipeline; no partial output is ever returned.

use core::fmt;

use crate::ternary::TernaryError;

/// Why a carrier could not yield an embedded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierDefect {
    /// The carrier has fewer pixels than the length header needs.
    TooFewPixels(usize),
    /// The header declares more payload digits than there are pixels left.
    LengthOverflow { declared: u64, available: usize },
    /// A payload pixel holds a value that is not a ternary digit.
    InvalidDigit { pixel: usize, value: u8 },
}

impl fmt::Display for CarrierDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPixels(n) => write!(f, "only {n} pixels, too few for the length header"),
            Self::LengthOverflow { declared, available } => write!(
                f,
                "declared payload of {declared} digits exceeds the {available} available pixels"
            ),
            Self::InvalidDigit { pixel, value } => {
                write!(f, "pixel {pixel} carries {value}, not a ternary digit")
            }
        }
    }
}

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// Transcoding or key failure (unsupported character, invalid key, ...).
    Ternary(TernaryError),
    /// Encryption was asked to process an empty message.
    EmptyMessage,
    /// The text artifact lacks its start or end marker, or holds non-digits.
    MalformedFrame,
    /// The cover image cannot hold the header plus payload.
    CapacityExceeded { needed: usize, available: usize },
    /// The carrier does not contain a readable payload.
    CorruptCarrier(CarrierDefect),
    /// The image could not be decoded or encoded.
    InvalidImage(image::ImageError),
    /// A raw pixel buffer does not match its declared dimensions.
    InvalidBuffer { width: u32, height: u32, len: usize },
    /// The image dimensions exceed the supported maximum.
    ImageTooLarge,
}

impl StegoError {
    /// Returns `true` if the failure is a rejected key.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::Ternary(TernaryError::InvalidKey(_)))
    }
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ternary(e) => write!(f, "{e}"),
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::MalformedFrame => write!(
                f,
                "encrypted text is malformed (missing BEGIN_ENCRYPTED_DATA/END_ENCRYPTED_DATA markers or non-digit content)"
            ),
            Self::CapacityExceeded { needed, available } => write!(
                f,
                "cover image too small: needs {needed} pixels, has {available}"
            ),
            Self::CorruptCarrier(d) => write!(f, "corrupt carrier: {d}"),
            Self::InvalidImage(e) => write!(f, "corrupt carrier: cannot process image: {e}"),
            Self::InvalidBuffer { width, height, len } => write!(
                f,
                "pixel buffer of {len} bytes does not match {width}x{height} RGBA"
            ),
            Self::ImageTooLarge => write!(f, "image too large (max 16384px / 64MP)"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ternary(e) => Some(e),
            Self::InvalidImage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TernaryError> for StegoError {
    fn from(e: TernaryError) -> Self {
        Self::Ternary(e)
    }
}

impl From<image::ImageError> for StegoError {
    fn from(e: image::ImageError) -> Self {
        Self::InvalidImage(e)
    }
}
