//! FAQ generator engine: document intake IO and export writing.
mod decode;
mod engine;
mod export;
mod intake;
mod media;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use export::{ensure_output_dir, save_export, ExportError};
pub use intake::{
    ChannelProgressSink, DocumentReader, FsDocumentReader, IntakeSettings, ProgressSink,
    PDF_PLACEHOLDER,
};
pub use media::{declared_type_for_path, MediaType};
pub use types::{EngineEvent, IntakeError, ReadId, SourceFile};
