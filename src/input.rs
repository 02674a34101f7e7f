//! Reading recognized text handed over by the recognition service.

use crate::errors::{error_logging, AppError, AppResult};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Upper bound on recognized text accepted from one source (4 MiB)
pub const MAX_TEXT_BYTES: u64 = 4 * 1024 * 1024;

/// Where the recognized text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` or `-` means stdin, anything else is a file path
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole source as UTF-8 text
    pub fn read_text(&self) -> AppResult<String> {
        match self {
            InputSource::Stdin => read_limited(std::io::stdin().lock()),
            InputSource::File(path) => read_recognized_text(path),
        }
    }
}

/// Read recognized text from a file
pub fn read_recognized_text(path: &Path) -> AppResult<String> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        error_logging::log_filesystem_error(&e, "stat", path.to_str(), None);
        AppError::FileSystem(format!("Cannot access '{}': {}", path.display(), e))
    })?;

    if !metadata.is_file() {
        return Err(AppError::FileSystem(format!(
            "'{}' is not a regular file",
            path.display()
        )));
    }

    if metadata.len() > MAX_TEXT_BYTES {
        error_logging::log_filesystem_error(
            &"file too large",
            "read",
            path.to_str(),
            Some(metadata.len()),
        );
        return Err(AppError::FileSystem(format!(
            "'{}' is larger than {} bytes",
            path.display(),
            MAX_TEXT_BYTES
        )));
    }

    let file = std::fs::File::open(path)?;
    let text = read_limited(file)?;
    debug!(path = %path.display(), bytes = text.len(), "Read recognized text");
    Ok(text)
}

fn read_limited(reader: impl Read) -> AppResult<String> {
    let mut text = String::new();
    let read = reader.take(MAX_TEXT_BYTES + 1).read_to_string(&mut text)?;
    if read as u64 > MAX_TEXT_BYTES {
        return Err(AppError::FileSystem(format!(
            "Input is larger than {} bytes",
            MAX_TEXT_BYTES
        )));
    }
    Ok(text)
}
