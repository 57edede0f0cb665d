use std::sync::mpsc;

use bytes::BytesMut;
use faqgen_logging::{faq_debug, faq_info};
use futures_util::StreamExt;
use tokio_util::io::ReaderStream;

use crate::{decode_text, EngineEvent, IntakeError, MediaType, ReadId, SourceFile};

/// Text placed in the document buffer for PDFs, which are not parsed.
pub const PDF_PLACEHOLDER: &str =
    "PDF content would be extracted here. For this demo, please paste text or upload a .txt file.";

#[derive(Debug, Clone)]
pub struct IntakeSettings {
    pub max_bytes: u64,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait DocumentReader: Send + Sync {
    async fn read(
        &self,
        read_id: ReadId,
        file: &SourceFile,
        sink: &dyn ProgressSink,
    ) -> Result<String, IntakeError>;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsDocumentReader {
    settings: IntakeSettings,
}

impl FsDocumentReader {
    pub fn new(settings: IntakeSettings) -> Self {
        Self { settings }
    }

    async fn read_plain_text(
        &self,
        read_id: ReadId,
        file: &SourceFile,
        sink: &dyn ProgressSink,
    ) -> Result<String, IntakeError> {
        let max_bytes = self.settings.max_bytes;
        let handle = tokio::fs::File::open(&file.path).await?;

        if let Ok(meta) = handle.metadata().await {
            if meta.len() > max_bytes {
                return Err(IntakeError::TooLarge {
                    max_bytes,
                    actual: Some(meta.len()),
                });
            }
        }

        sink.emit(EngineEvent::ReadProgress { read_id, bytes: 0 });

        let mut buffer = BytesMut::new();
        let mut stream = ReaderStream::new(handle);
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            let next_len = buffer.len() as u64 + chunk.len() as u64;
            // The file may grow while being read.
            if next_len > max_bytes {
                return Err(IntakeError::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                });
            }
            buffer.extend_from_slice(&chunk);
            sink.emit(EngineEvent::ReadProgress {
                read_id,
                bytes: buffer.len() as u64,
            });
        }

        let bytes = buffer.freeze();
        if bytes.is_empty() {
            return Err(IntakeError::Empty);
        }

        let decoded = decode_text(&bytes, file.declared_type.as_deref())
            .map_err(|err| IntakeError::Decode(err.to_string()))?;
        faq_debug!(
            "read_id={} decoded {} bytes as {}",
            read_id,
            bytes.len(),
            decoded.encoding_label
        );
        Ok(decoded.text)
    }
}

#[async_trait::async_trait]
impl DocumentReader for FsDocumentReader {
    async fn read(
        &self,
        read_id: ReadId,
        file: &SourceFile,
        sink: &dyn ProgressSink,
    ) -> Result<String, IntakeError> {
        match MediaType::classify(file.declared_type.as_deref()) {
            MediaType::PlainText => self.read_plain_text(read_id, file, sink).await,
            MediaType::Pdf => {
                faq_info!("read_id={} pdf not extracted; using placeholder", read_id);
                Ok(PDF_PLACEHOLDER.to_string())
            }
            MediaType::Other(_) | MediaType::Unknown => Err(IntakeError::UnsupportedType {
                declared_type: file.declared_type.clone(),
            }),
        }
    }
}
