use crate::{
    export_text, generate, parse_count, AppState, Effect, Msg, Notice, PickedFile, ADVISORY_COUNT,
    EXPORT_FILENAME, FIXTURE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextEdited(text) => {
            state.set_text(text);
            Vec::new()
        }
        Msg::DragEntered => {
            state.set_drag_over(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drag_over(false);
            Vec::new()
        }
        Msg::FilesDropped(files) => {
            state.set_drag_over(false);
            start_intake(&mut state, files)
        }
        Msg::FilesPicked(files) => start_intake(&mut state, files),
        Msg::CountChanged(raw) => {
            let count = parse_count(&raw);
            state.set_count(count);
            let notice = if count < *ADVISORY_COUNT.start() {
                Some(Notice::Warning(format!(
                    "Count {count} is below {}; nothing will be generated.",
                    ADVISORY_COUNT.start()
                )))
            } else if count > *ADVISORY_COUNT.end() {
                Some(Notice::Warning(format!(
                    "Count {count} is above {}; at most {} questions are available.",
                    ADVISORY_COUNT.end(),
                    FIXTURE.len()
                )))
            } else {
                None
            };
            state.set_notice(notice);
            Vec::new()
        }
        Msg::OutputTypeChanged(output_type) => {
            state.set_output_type(output_type);
            Vec::new()
        }
        Msg::GenerateClicked => {
            // The button is disabled for blank documents; a stray click is ignored.
            if state.can_generate() {
                let items = generate(state.document_text(), state.settings());
                state.replace_generated(items);
                state.set_notice(None);
            }
            Vec::new()
        }
        Msg::DownloadClicked => {
            if state.generated().is_empty() {
                Vec::new()
            } else {
                vec![Effect::SaveExport {
                    filename: EXPORT_FILENAME.to_string(),
                    content: export_text(state.generated()),
                }]
            }
        }
        Msg::ReadProgress { read_id, bytes } => {
            state.apply_read_progress(read_id, bytes);
            Vec::new()
        }
        Msg::ReadCompleted { read_id, result } => {
            let name = state
                .finish_read(read_id)
                .unwrap_or_else(|| format!("read #{read_id}"));
            match result {
                // Reads are not cancelled; whichever completes last owns the buffer.
                Ok(text) => {
                    state.apply_intake(text);
                    state.set_notice(None);
                }
                Err(failure) => {
                    state.set_notice(Some(Notice::Warning(format!("{name}: {failure}"))));
                }
            }
            Vec::new()
        }
        Msg::ExportFinished { result } => {
            let notice = match result {
                Ok(location) => Notice::Info(format!("Saved {location}")),
                Err(message) => Notice::Warning(format!("Download failed: {message}")),
            };
            state.set_notice(Some(notice));
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_intake(state: &mut AppState, files: Vec<PickedFile>) -> Vec<Effect> {
    let ignored = files.len().saturating_sub(1);
    let Some(file) = files.into_iter().next() else {
        return Vec::new();
    };

    let notice = (ignored > 0).then(|| {
        Notice::Info(format!(
            "Only one document at a time: using {}, ignored {ignored} other file(s).",
            file.name
        ))
    });
    state.set_notice(notice);

    let read_id = state.begin_read(&file);
    vec![Effect::ReadFile { read_id, file }]
}
