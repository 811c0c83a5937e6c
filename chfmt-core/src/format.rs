//! Mapping between file extensions and image format tags.
//!
//! A [`Format`] is recomputed for every file from its extension, and compared
//! against whatever the codec reports after decoding. Nothing here touches
//! the file system.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Logical image encoding understood by chfmt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Jpeg,
    Png,
    Gif,
    /// Anything chfmt cannot read or write.
    Unknown,
}

impl Format {
    /// Derives the format from the extension of `path`, ignoring case.
    ///
    /// `.jpg` and `.jpeg` both map to [`Format::Jpeg`]; a missing or
    /// unrecognised extension maps to [`Format::Unknown`]. A bare dotfile
    /// such as `.jpg` counts as having that extension.
    ///
    /// ```
    /// use chfmt_core::Format;
    ///
    /// assert_eq!(Format::from_extension("photos/IMG.JPG"), Format::Jpeg);
    /// assert_eq!(Format::from_extension("notes.txt"), Format::Unknown);
    /// ```
    #[must_use]
    pub fn from_extension(path: impl AsRef<Path>) -> Format {
        extension_of(path.as_ref())
            .map_or(Format::Unknown, |ext| match ext.to_ascii_lowercase().as_str() {
                "jpg" | "jpeg" => Format::Jpeg,
                "png" => Format::Png,
                "gif" => Format::Gif,
                _ => Format::Unknown,
            })
    }

    /// Extension written for files of this format, without the leading dot.
    #[must_use]
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Format::Jpeg => Some("jpeg"),
            Format::Png => Some("png"),
            Format::Gif => Some("gif"),
            Format::Unknown => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.extension().unwrap_or("unknown")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a user-supplied format name. Never fails: names chfmt does not
/// know become [`Format::Unknown`].
impl FromStr for Format {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Format::Jpeg,
            "png" => Format::Png,
            "gif" => Format::Gif,
            _ => Format::Unknown,
        })
    }
}

/// Extension of `path` without the dot. Unlike [`Path::extension`], a file
/// name made only of a leading dot and a suffix (`.jpg`) yields that suffix.
fn extension_of(path: &Path) -> Option<&str> {
    match path.extension() {
        Some(ext) => ext.to_str(),
        None => bare_dotfile_suffix(path),
    }
}

fn bare_dotfile_suffix(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix('.'))
        .filter(|suffix| !suffix.is_empty())
}

/// Replaces the extension of `path` with the one for `target`.
///
/// A path without an extension gets one appended, and a bare dotfile
/// (`.jpg`) is renamed to the new extension alone (`.png`). When `target`
/// is [`Format::Unknown`] the path is returned unchanged.
#[must_use]
pub fn change_extension(path: impl AsRef<Path>, target: Format) -> PathBuf {
    let path = path.as_ref();
    match target.extension() {
        Some(ext) if path.extension().is_none() && bare_dotfile_suffix(path).is_some() => {
            path.with_file_name(format!(".{ext}"))
        }
        Some(ext) => path.with_extension(ext),
        None => path.to_path_buf(),
    }
}
