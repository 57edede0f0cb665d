use crate::{IntakeFailure, OutputType, PickedFile, ReadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the document text area; carries the full new value.
    TextEdited(String),
    /// A drag entered the drop target.
    DragEntered,
    /// A drag left the drop target without dropping.
    DragLeft,
    /// Files were dropped on the drop target.
    FilesDropped(Vec<PickedFile>),
    /// Files were chosen through the browse dialog.
    FilesPicked(Vec<PickedFile>),
    /// Raw text of the count input.
    CountChanged(String),
    /// User selected an output type.
    OutputTypeChanged(OutputType),
    /// User clicked Generate.
    GenerateClicked,
    /// User clicked Download.
    DownloadClicked,
    /// Engine progress for an in-flight read.
    ReadProgress { read_id: ReadId, bytes: u64 },
    /// Engine completion for a read.
    ReadCompleted {
        read_id: ReadId,
        result: Result<String, IntakeFailure>,
    },
    /// Outcome of a `SaveExport` effect: the saved location or an error message.
    ExportFinished { result: Result<String, String> },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
