//! Conversion request and codec defaults.
//!
//! A [`ConversionRequest`] is built once per invocation by the consumer
//! (chfmt-cli) and handed to the tree converter. It is never modified
//! afterwards.

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};
use crate::format::Format;

// ---- Standard library imports ----
use std::io;
use std::path::PathBuf;

/// JPEG quality used when encoding, on the encoder's 1-100 scale.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Immutable description of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Directory whose tree is searched for source images.
    pub root: PathBuf,
    /// Only files of this format (by extension and by content) are converted.
    pub src: Format,
    /// Format the converted copies are written in.
    pub dst: Format,
}

impl ConversionRequest {
    pub fn new(root: impl Into<PathBuf>, src: Format, dst: Format) -> Self {
        Self {
            root: root.into(),
            src,
            dst,
        }
    }

    /// Checks the request before any file is touched.
    ///
    /// An `Unknown` destination is rejected: its derived path would be the
    /// source path itself, so the original would be truncated before the
    /// encoder could refuse it.
    pub fn validate(&self) -> CoreResult<()> {
        if self.dst.extension().is_none() {
            return Err(CoreError::UnsupportedFormat(self.dst));
        }

        if !self.root.is_dir() {
            return Err(CoreError::fs(
                &self.root,
                io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            ));
        }

        Ok(())
    }
}
