//! Codec adapter: a uniform decode/encode interface keyed by format tag.
//!
//! The tree converter only ever talks to an [`ImageCodec`]. The default
//! implementation delegates to the `image` crate, built with just the
//! jpeg, png and gif codecs; tests can inject their own implementation to
//! exercise failure paths.

// ---- Internal crate imports ----
use crate::config::DEFAULT_JPEG_QUALITY;
use crate::error::CodecError;
use crate::format::Format;

// ---- External crate imports ----
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, Frame, ImageFormat, ImageReader};

// ---- Standard library imports ----
use std::io::{BufRead, Seek, Write};

/// Decode and encode capabilities used by the tree converter.
pub trait ImageCodec {
    /// Decodes an image, auto-detecting its encoding from the stream.
    ///
    /// Returns the decoded image together with the format the stream was
    /// actually encoded in, which may differ from what the file name claims.
    fn decode<R: BufRead + Seek>(&self, reader: R) -> Result<(DynamicImage, Format), CodecError>;

    /// Encodes `image` into `writer` using the encoder for `format`.
    fn encode<W: Write>(&self, writer: W, image: &DynamicImage, format: Format) -> Result<(), CodecError>;
}

/// [`ImageCodec`] backed by the `image` crate.
#[derive(Debug, Clone, Copy)]
pub struct ImageCrateCodec {
    pub jpeg_quality: u8,
}

impl Default for ImageCrateCodec {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ImageCodec for ImageCrateCodec {
    fn decode<R: BufRead + Seek>(&self, reader: R) -> Result<(DynamicImage, Format), CodecError> {
        let reader = ImageReader::new(reader).with_guessed_format()?;

        let format = match reader.format() {
            Some(ImageFormat::Jpeg) => Format::Jpeg,
            Some(ImageFormat::Png) => Format::Png,
            Some(ImageFormat::Gif) => Format::Gif,
            other => {
                log::debug!("Unrecognized encoding (guessed: {:?})", other);
                return Err(CodecError::UnknownEncoding);
            }
        };

        let image = reader.decode().map_err(CodecError::Decode)?;
        Ok((image, format))
    }

    fn encode<W: Write>(&self, writer: W, image: &DynamicImage, format: Format) -> Result<(), CodecError> {
        match format {
            Format::Png => image
                .write_with_encoder(PngEncoder::new(writer))
                .map_err(CodecError::Encode),
            Format::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(writer, self.jpeg_quality);
                // The JPEG encoder has no alpha channel support.
                let result = match image {
                    DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => {
                        image.write_with_encoder(encoder)
                    }
                    _ => DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder),
                };
                result.map_err(CodecError::Encode)
            }
            Format::Gif => {
                // The trailer is written when the encoder drops at the end of this arm.
                let mut encoder = GifEncoder::new(writer);
                encoder
                    .encode_frame(Frame::new(image.to_rgba8()))
                    .map_err(CodecError::Encode)
            }
            Format::Unknown => Err(CodecError::UnsupportedFormat(format)),
        }
    }
}

/// Decodes with the default [`ImageCrateCodec`].
pub fn decode<R: BufRead + Seek>(reader: R) -> Result<(DynamicImage, Format), CodecError> {
    ImageCrateCodec::default().decode(reader)
}

/// Encodes with the default [`ImageCrateCodec`].
pub fn encode<W: Write>(writer: W, image: &DynamicImage, format: Format) -> Result<(), CodecError> {
    ImageCrateCodec::default().encode(writer, image, format)
}
