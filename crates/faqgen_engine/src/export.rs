use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use faqgen_logging::faq_info;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("download directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("invalid export filename {0:?}")]
    InvalidFilename(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the download directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Saves `content` as `{dir}/{filename}`, replacing any previous download of the same name.
///
/// The bytes go to a temporary file in `dir` first. That temporary file is
/// removed when it goes out of scope unless it was persisted under the final name.
pub fn save_export(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
    if Path::new(filename).file_name().and_then(|n| n.to_str()) != Some(filename) {
        return Err(ExportError::InvalidFilename(filename.to_string()));
    }
    ensure_output_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    tmp.persist(&target).map_err(|e| ExportError::Io(e.error))?;
    faq_info!("export saved to {:?} ({} bytes)", target, content.len());
    Ok(target)
}
