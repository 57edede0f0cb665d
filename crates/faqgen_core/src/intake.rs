use std::fmt;
use std::path::PathBuf;

pub type ReadId = u64;

/// A file offered by a drop or a browse pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub path: PathBuf,
    /// Media type as declared by whoever offered the file, e.g. `text/plain`.
    pub declared_type: Option<String>,
}

impl PickedFile {
    pub fn new(path: impl Into<PathBuf>, declared_type: Option<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path,
            declared_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeFailure {
    UnsupportedType { declared_type: Option<String> },
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Empty,
    Read { message: String },
}

impl fmt::Display for IntakeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeFailure::UnsupportedType {
                declared_type: Some(ty),
            } => write!(f, "unsupported file type {ty}; use a .txt or .pdf file"),
            IntakeFailure::UnsupportedType {
                declared_type: None,
            } => write!(f, "unknown file type; use a .txt or .pdf file"),
            IntakeFailure::TooLarge { max_bytes, actual } => match actual {
                Some(actual) => write!(f, "file too large ({actual} bytes, max {max_bytes})"),
                None => write!(f, "file too large (max {max_bytes} bytes)"),
            },
            IntakeFailure::Empty => write!(f, "file is empty"),
            IntakeFailure::Read { message } => write!(f, "could not read file: {message}"),
        }
    }
}
