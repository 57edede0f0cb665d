use crate::{Notice, OutputType, Phase, ReadId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub document_text: String,
    pub count: i64,
    pub count_in_advisory_range: bool,
    pub output_type: OutputType,
    pub generate_enabled: bool,
    pub generate_label: String,
    pub items: Vec<QaCardView>,
    /// The document changed after the list was generated.
    pub output_stale: bool,
    pub download_available: bool,
    pub drag_over: bool,
    pub pending_reads: Vec<PendingReadView>,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaCardView {
    /// 1-based position in the list.
    pub number: usize,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReadView {
    pub read_id: ReadId,
    pub name: String,
    pub bytes: u64,
}
