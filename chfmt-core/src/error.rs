//! Error types for the chfmt core library.
//!
//! - [`CoreError`]: everything that can stop a conversion run
//! - [`CodecError`]: failures raised by an `ImageCodec` implementation
//! - [`CoreResult`]: result alias used across the crate
//!
//! Every error is fatal for the run that produced it; the first one
//! encountered is returned to the caller unchanged.

// ---- Internal crate imports ----
use crate::format::Format;

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::path::PathBuf;

/// Errors raised by a codec while decoding or encoding a single image.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The stream looked like a supported encoding but could not be decoded.
    #[error("decode failed: {0}")]
    Decode(#[source] image::ImageError),

    /// The stream is not one of the encodings chfmt understands.
    #[error("unrecognized image encoding")]
    UnknownEncoding,

    #[error("encode failed: {0}")]
    Encode(#[source] image::ImageError),

    /// The requested output format has no encoder.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(Format),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// True for the failures that mean "this data could not be read as an image".
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, CodecError::Decode(_) | CodecError::UnknownEncoding)
    }
}

/// Errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    /// Opening, creating, flushing or closing a file failed.
    #[error("{}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// A conversion was requested into a format that cannot be encoded.
    #[error("Unsupported destination format: {0}")]
    UnsupportedFormat(Format),
}

impl CoreError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CoreError::FileSystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn codec(path: impl Into<PathBuf>, source: CodecError) -> Self {
        CoreError::Codec {
            path: path.into(),
            source,
        }
    }
}

/// Result type for chfmt-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
