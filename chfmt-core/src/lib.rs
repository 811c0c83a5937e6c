//! Core library for recursive image format conversion.
//!
//! This crate maps file extensions to image formats, wraps the `image` crate
//! behind a small codec interface, and walks a directory tree converting every
//! image of one format into another.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use chfmt_core::{ConversionRequest, Format, ImageCrateCodec, convert_with};
//!
//! let request = ConversionRequest::new("/path/to/photos", Format::Jpeg, Format::Png);
//! request.validate().unwrap();
//!
//! let report = convert_with(&ImageCrateCodec::default(), &request).unwrap();
//! for file in &report.converted {
//!     println!("{} -> {}", file.source.display(), file.destination.display());
//! }
//! ```

pub mod codec;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;

// Re-exports for public API
pub use codec::{ImageCodec, ImageCrateCodec, decode, encode};
pub use config::{ConversionRequest, DEFAULT_JPEG_QUALITY};
pub use convert::{ConversionReport, ConvertedFile, convert, convert_with};
pub use error::{CodecError, CoreError, CoreResult};
pub use format::{Format, change_extension};
