//! Tree conversion: walk a directory and rewrite every image of one format
//! into another, next to the original.
//!
//! The walk is fail-fast. The first error anywhere (traversal, open, decode,
//! create, encode, flush) stops the run and is returned as-is; files already
//! written stay on disk.

use crate::codec::{ImageCodec, ImageCrateCodec};
use crate::config::ConversionRequest;
use crate::error::{CoreError, CoreResult};
use crate::format::{Format, change_extension};

use log::{debug, info};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// One image written by a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// What a successful run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub converted: Vec<ConvertedFile>,
    /// Files whose extension matched the source format but whose content did not.
    pub mismatched: Vec<PathBuf>,
}

enum FileOutcome {
    Converted(ConvertedFile),
    Mismatched(Format),
}

/// Converts every `src` image under `root` into `dst` using the `image` crate.
///
/// # Examples
///
/// ```rust,no_run
/// use chfmt_core::{Format, convert};
///
/// let report = convert("/path/to/photos", Format::Jpeg, Format::Png).unwrap();
/// println!("{} file(s) converted", report.converted.len());
/// ```
pub fn convert(root: impl Into<PathBuf>, src: Format, dst: Format) -> CoreResult<ConversionReport> {
    convert_with(&ImageCrateCodec::default(), &ConversionRequest::new(root, src, dst))
}

/// Runs `request` with a caller-supplied codec.
pub fn convert_with<C: ImageCodec>(codec: &C, request: &ConversionRequest) -> CoreResult<ConversionReport> {
    request.validate()?;

    if request.src == Format::Unknown {
        info!("Source format is unknown; no files will be selected");
    }

    debug!(
        "Converting {} -> {} under {}",
        request.src,
        request.dst,
        request.root.display()
    );

    let mut report = ConversionReport::default();

    // Sorting makes walkdir read each directory fully before yielding from it,
    // so files written during the walk are never picked up.
    for entry in WalkDir::new(&request.root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if request.src == Format::Unknown || Format::from_extension(path) != request.src {
            continue;
        }

        match convert_file(codec, path, request)? {
            FileOutcome::Converted(file) => {
                info!(
                    "Converted {} -> {} ({}x{})",
                    file.source.display(),
                    file.destination.display(),
                    file.width,
                    file.height
                );
                report.converted.push(file);
            }
            FileOutcome::Mismatched(found) => {
                debug!(
                    "Skipping {}: content is {}, not {}",
                    path.display(),
                    found,
                    request.src
                );
                report.mismatched.push(path.to_path_buf());
            }
        }
    }

    Ok(report)
}

fn convert_file<C: ImageCodec>(
    codec: &C,
    path: &Path,
    request: &ConversionRequest,
) -> CoreResult<FileOutcome> {
    // The source handle is closed before the destination is created.
    let (image, detected) = {
        let source = File::open(path).map_err(|e| CoreError::fs(path, e))?;
        codec
            .decode(BufReader::new(source))
            .map_err(|e| CoreError::codec(path, e))?
    };

    if detected != request.src {
        return Ok(FileOutcome::Mismatched(detected));
    }

    let destination = change_extension(path, request.dst);
    let file = File::create(&destination).map_err(|e| CoreError::fs(&destination, e))?;
    let mut writer = BufWriter::new(file);

    // On an encode error the writer is just dropped; a flush failure there
    // must not replace the encode error.
    codec
        .encode(&mut writer, &image, request.dst)
        .map_err(|e| CoreError::codec(&destination, e))?;

    let file = writer
        .into_inner()
        .map_err(|e| CoreError::fs(&destination, e.into_error()))?;
    file.sync_all().map_err(|e| CoreError::fs(&destination, e))?;

    Ok(FileOutcome::Converted(ConvertedFile {
        source: path.to_path_buf(),
        destination,
        width: image.width(),
        height: image.height(),
    }))
}
