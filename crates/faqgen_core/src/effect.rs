use crate::{PickedFile, ReadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the given file into the document buffer; completion arrives as `Msg::ReadCompleted`.
    ReadFile { read_id: ReadId, file: PickedFile },
    /// Save the serialized list as a downloadable text file.
    SaveExport { filename: String, content: String },
}
