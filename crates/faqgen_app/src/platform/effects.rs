use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use faqgen_core::{Effect, IntakeFailure, Msg};
use faqgen_engine::{save_export, EngineEvent, EngineHandle, IntakeError, SourceFile};
use faqgen_logging::{faq_error, faq_info};

use super::app::AppInput;

pub struct EffectRunner {
    engine: EngineHandle,
    download_dir: PathBuf,
    input_tx: mpsc::Sender<AppInput>,
    stop: Arc<AtomicBool>,
    event_loop: Option<JoinHandle<()>>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        download_dir: PathBuf,
        input_tx: mpsc::Sender<AppInput>,
    ) -> Self {
        let mut runner = Self {
            engine,
            download_dir,
            input_tx,
            stop: Arc::new(AtomicBool::new(false)),
            event_loop: None,
        };
        runner.event_loop = Some(runner.spawn_event_loop());
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ReadFile { read_id, file } => {
                    faq_info!(
                        "ReadFile read_id={} name={} declared_type={:?}",
                        read_id,
                        file.name,
                        file.declared_type
                    );
                    self.engine.enqueue_read(
                        read_id,
                        SourceFile {
                            path: file.path,
                            declared_type: file.declared_type,
                        },
                    );
                }
                Effect::SaveExport { filename, content } => {
                    let result = save_export(&self.download_dir, &filename, &content)
                        .map(|path| path.display().to_string())
                        .map_err(|err| {
                            faq_error!("Failed to save {}: {}", filename, err);
                            err.to_string()
                        });
                    let _ = self
                        .input_tx
                        .send(AppInput::Msg(Msg::ExportFinished { result }));
                }
            }
        }
    }

    fn spawn_event_loop(&self) -> JoinHandle<()> {
        let engine = self.engine.clone();
        let input_tx = self.input_tx.clone();
        let stop = self.stop.clone();
        thread::spawn(move || loop {
            if stop.load(Ordering::Relaxed) {
                break;
            }
            let Some(event) = engine.recv_timeout(Duration::from_millis(100)) else {
                continue;
            };
            let msg = match event {
                EngineEvent::ReadProgress { read_id, bytes } => Msg::ReadProgress { read_id, bytes },
                EngineEvent::ReadCompleted { read_id, result } => Msg::ReadCompleted {
                    read_id,
                    result: result.map_err(map_failure),
                },
            };
            if input_tx.send(AppInput::Msg(msg)).is_err() {
                break;
            }
        })
    }
}

impl Drop for EffectRunner {
    // The event loop holds an engine handle; it must exit for the engine to shut down.
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.event_loop.take() {
            let _ = handle.join();
        }
    }
}

fn map_failure(err: IntakeError) -> IntakeFailure {
    match err {
        IntakeError::UnsupportedType { declared_type } => {
            IntakeFailure::UnsupportedType { declared_type }
        }
        IntakeError::TooLarge { max_bytes, actual } => IntakeFailure::TooLarge { max_bytes, actual },
        IntakeError::Empty => IntakeFailure::Empty,
        IntakeError::Io(message) | IntakeError::Decode(message) => IntakeFailure::Read { message },
    }
}
