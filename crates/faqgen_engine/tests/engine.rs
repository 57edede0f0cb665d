use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use faqgen_engine::{
    DocumentReader, EngineEvent, EngineHandle, IntakeError, IntakeSettings, ProgressSink, ReadId,
    SourceFile,
};
use tempfile::TempDir;

fn wait_for_completion(engine: &EngineHandle, read_id: ReadId) -> Result<String, IntakeError> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(EngineEvent::ReadCompleted { read_id: id, result }) =
            engine.recv_timeout(Duration::from_millis(50))
        {
            if id == read_id {
                return result;
            }
        }
    }
    panic!("read {read_id} did not complete");
}

#[test]
fn engine_reads_file_in_background() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("doc.txt");
    std::fs::write(&path, "background text").unwrap();

    let engine = EngineHandle::new(IntakeSettings::default()).unwrap();
    engine.enqueue_read(
        1,
        SourceFile {
            path,
            declared_type: Some("text/plain".to_string()),
        },
    );

    assert_eq!(wait_for_completion(&engine, 1).unwrap(), "background text");
}

struct DelayedReader;

#[async_trait::async_trait]
impl DocumentReader for DelayedReader {
    async fn read(
        &self,
        _read_id: ReadId,
        file: &SourceFile,
        _sink: &dyn ProgressSink,
    ) -> Result<String, IntakeError> {
        let name = file.path.display().to_string();
        if name == "slow" {
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        Ok(name)
    }
}

#[test]
fn later_read_can_complete_first() {
    let engine = EngineHandle::with_reader(Arc::new(DelayedReader)).unwrap();
    for (read_id, name) in [(1, "slow"), (2, "fast")] {
        engine.enqueue_read(
            read_id,
            SourceFile {
                path: PathBuf::from(name),
                declared_type: None,
            },
        );
    }

    let mut completed = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    while completed.len() < 2 && Instant::now() < deadline {
        if let Some(EngineEvent::ReadCompleted { read_id, .. }) =
            engine.recv_timeout(Duration::from_millis(50))
        {
            completed.push(read_id);
        }
    }
    assert_eq!(completed, vec![2, 1]);
}
