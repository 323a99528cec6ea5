// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Pipeline progress reporting.
//!
//! The pipelines report each stage to a caller-supplied
//! [`ProgressObserver`]. Reporting is fire-and-forget: observers cannot
//! influence the result, and the pipeline keeps no progress state of its own.
//! Any `FnMut(Stage, u8)` closure is an observer; pass [`NoProgress`] to
//! ignore updates.

use core::fmt;

/// A checkpoint in the encrypt or decrypt pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Text → ternary digits.
    ConvertingToTernary,
    /// Applying the keyed cipher.
    Encrypting,
    /// Decoding the cover image into pixels.
    ProcessingCover,
    /// Writing digits into the pixel buffer.
    Embedding,
    /// Wrapping the ciphertext in text markers.
    Framing,
    /// Decoding the stego image into pixels.
    ReadingImage,
    /// Pulling the ciphertext out of framed text.
    ExtractingText,
    /// Reading digits out of the pixel buffer.
    Extracting,
    /// Reversing the keyed cipher.
    Decrypting,
    /// Ternary digits → text.
    ConvertingToText,
    /// The pipeline finished successfully.
    Complete,
}

impl Stage {
    /// Human-readable label for status displays.
    pub fn label(self) -> &'static str {
        match self {
            Self::ConvertingToTernary => "Converting to ternary",
            Self::Encrypting => "Applying ternary encryption",
            Self::ProcessingCover => "Processing cover image",
            Self::Embedding => "Embedding encrypted data",
            Self::Framing => "Generating encrypted format",
            Self::ReadingImage => "Reading encrypted image",
            Self::ExtractingText => "Extracting encrypted data",
            Self::Extracting => "Extracting embedded data",
            Self::Decrypting => "Decrypting ternary data",
            Self::ConvertingToText => "Converting to text",
            Self::Complete => "Complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives stage updates from a running pipeline.
pub trait ProgressObserver {
    /// Called when the pipeline enters `stage`; `percent` is in `0..=100`
    /// and never decreases within one pipeline run.
    fn report(&mut self, stage: Stage, percent: u8);
}

impl<F: FnMut(Stage, u8)> ProgressObserver for F {
    fn report(&mut self, stage: Stage, percent: u8) {
        self(stage, percent)
    }
}

/// Observer that discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn report(&mut self, _stage: Stage, _percent: u8) {}
}

/// Report a stage and mirror it to the debug log.
pub(crate) fn report(observer: &mut dyn ProgressObserver, stage: Stage, percent: u8) {
    log::debug!("[{percent:>3}%] {stage}");
    observer.report(stage, percent);
}
