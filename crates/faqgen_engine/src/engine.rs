use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use faqgen_logging::{faq_info, faq_warn};

use crate::intake::{ChannelProgressSink, DocumentReader, FsDocumentReader, IntakeSettings};
use crate::{EngineEvent, ReadId, SourceFile};

enum EngineCommand {
    Read { read_id: ReadId, file: SourceFile },
}

/// Runs intake jobs on a background tokio runtime and reports `EngineEvent`s.
///
/// Jobs are independent: a later read may complete before an earlier one.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: IntakeSettings) -> io::Result<Self> {
        Self::with_reader(Arc::new(FsDocumentReader::new(settings)))
    }

    pub fn with_reader(reader: Arc<dyn DocumentReader>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("faqgen-engine")
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("faqgen-engine-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let reader = reader.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(reader.as_ref(), command, event_tx).await;
                    });
                }
                // All handles dropped; in-flight reads are abandoned with the runtime.
            })?;

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn enqueue_read(&self, read_id: ReadId, file: SourceFile) {
        if self
            .cmd_tx
            .send(EngineCommand::Read { read_id, file })
            .is_err()
        {
            faq_warn!("engine stopped; dropping read_id={}", read_id);
        }
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    reader: &dyn DocumentReader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Read { read_id, file } => {
            faq_info!(
                "read_id={} path={:?} declared_type={:?}",
                read_id,
                file.path,
                file.declared_type
            );
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = reader.read(read_id, &file, &sink).await;
            if let Err(err) = &result {
                faq_warn!("read_id={} failed: {}", read_id, err);
            }
            let _ = event_tx.send(EngineEvent::ReadCompleted { read_id, result });
        }
    }
}
