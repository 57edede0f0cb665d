use std::path::PathBuf;

pub type ReadId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub declared_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ReadProgress {
        read_id: ReadId,
        bytes: u64,
    },
    ReadCompleted {
        read_id: ReadId,
        result: Result<String, IntakeError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("unsupported media type {declared_type:?}")]
    UnsupportedType { declared_type: Option<String> },
    #[error("file too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("file is empty")]
    Empty,
    #[error("io error: {0}")]
    Io(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        IntakeError::Io(err.to_string())
    }
}
