use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::view_model::{AppViewModel, PendingReadView, QaCardView};
use crate::{PickedFile, ReadId};

/// Range suggested by the count input. Values outside it are accepted and warned about.
pub const ADVISORY_COUNT: RangeInclusive<i64> = 1..=20;

const DEFAULT_COUNT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    #[default]
    Faqs,
    Interview,
}

impl OutputType {
    pub fn label(self) -> &'static str {
        match self {
            OutputType::Faqs => "FAQs",
            OutputType::Interview => "Interview Questions",
        }
    }

    /// Parses the selector value (`faqs` / `interview`).
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "faqs" | "faq" => Some(OutputType::Faqs),
            "interview" => Some(OutputType::Interview),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    pub count: i64,
    pub output_type: OutputType,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output_type: OutputType::Faqs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaItem {
    pub question: String,
    pub answer: String,
}

impl QaItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Inline message shown next to the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Ready,
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingRead {
    name: String,
    bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    document_text: String,
    settings: GenerationSettings,
    generated: Vec<QaItem>,
    output_stale: bool,
    drag_over: bool,
    pending_reads: BTreeMap<ReadId, PendingRead>,
    next_read_id: ReadId,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: GenerationSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn document_text(&self) -> &str {
        &self.document_text
    }

    pub fn settings(&self) -> GenerationSettings {
        self.settings
    }

    pub fn generated(&self) -> &[QaItem] {
        &self.generated
    }

    pub fn can_generate(&self) -> bool {
        !self.document_text.trim().is_empty()
    }

    pub fn phase(&self) -> Phase {
        if !self.generated.is_empty() && !self.output_stale {
            Phase::Generated
        } else if self.can_generate() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn view(&self) -> AppViewModel {
        let output_type = self.settings.output_type;
        AppViewModel {
            phase: self.phase(),
            document_text: self.document_text.clone(),
            count: self.settings.count,
            count_in_advisory_range: ADVISORY_COUNT.contains(&self.settings.count),
            output_type,
            generate_enabled: self.can_generate(),
            generate_label: format!("Generate {}", output_type.label()),
            items: self
                .generated
                .iter()
                .enumerate()
                .map(|(index, item)| QaCardView {
                    number: index + 1,
                    question: item.question.clone(),
                    answer: item.answer.clone(),
                })
                .collect(),
            output_stale: self.output_stale,
            download_available: !self.generated.is_empty(),
            drag_over: self.drag_over,
            pending_reads: self
                .pending_reads
                .iter()
                .map(|(read_id, read)| PendingReadView {
                    read_id: *read_id,
                    name: read.name.clone(),
                    bytes: read.bytes,
                })
                .collect(),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        if self.document_text == text {
            return;
        }
        self.document_text = text;
        if !self.generated.is_empty() {
            self.output_stale = true;
        }
        self.mark_dirty();
    }

    /// Loads text from a completed read. Unlike an edit, this always counts as
    /// a new document, even when the content is unchanged.
    pub(crate) fn apply_intake(&mut self, text: String) {
        self.document_text = text;
        if !self.generated.is_empty() {
            self.output_stale = true;
        }
        self.mark_dirty();
    }

    pub(crate) fn set_drag_over(&mut self, drag_over: bool) {
        if self.drag_over != drag_over {
            self.drag_over = drag_over;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_count(&mut self, count: i64) {
        self.settings.count = count;
        self.mark_dirty();
    }

    pub(crate) fn set_output_type(&mut self, output_type: OutputType) {
        self.settings.output_type = output_type;
        self.mark_dirty();
    }

    pub(crate) fn replace_generated(&mut self, items: Vec<QaItem>) {
        self.generated = items;
        self.output_stale = false;
        self.mark_dirty();
    }

    pub(crate) fn begin_read(&mut self, file: &PickedFile) -> ReadId {
        self.next_read_id += 1;
        let read_id = self.next_read_id;
        self.pending_reads.insert(
            read_id,
            PendingRead {
                name: file.name.clone(),
                bytes: 0,
            },
        );
        self.mark_dirty();
        read_id
    }

    pub(crate) fn apply_read_progress(&mut self, read_id: ReadId, bytes: u64) {
        if let Some(read) = self.pending_reads.get_mut(&read_id) {
            read.bytes = bytes;
            self.mark_dirty();
        }
    }

    /// Removes a pending read and returns its display name, if it was known.
    pub(crate) fn finish_read(&mut self, read_id: ReadId) -> Option<String> {
        let read = self.pending_reads.remove(&read_id)?;
        self.mark_dirty();
        Some(read.name)
    }

    pub(crate) fn set_notice(&mut self, notice: Option<Notice>) {
        if self.notice != notice {
            self.notice = notice;
            self.mark_dirty();
        }
    }
}

/// Parses the count widget text the way a numeric input reports it:
/// surrounding whitespace is ignored and anything unparsable counts as zero.
pub fn parse_count(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}
