use crate::{GenerationSettings, QaItem};

/// Fixed question/answer pairs served in place of real generation.
pub const FIXTURE: [(&str, &str); 5] = [
    (
        "What is the primary purpose of this document?",
        "Based on the source document, this outlines the key principles and methodologies for ensuring content traceability in AI-generated outputs.",
    ),
    (
        "How does source-grounding differ from traditional generation?",
        "Source-grounding locks the AI to specific document passages, preventing hallucination and ensuring every statement can be traced back to the original text.",
    ),
    (
        "What file formats are supported?",
        "The system currently supports PDF and TXT file formats for document ingestion and processing.",
    ),
    (
        "Can the output be customized?",
        "Yes, users can specify the number of questions and choose between FAQ or interview question formats.",
    ),
    (
        "What guarantees are provided for accuracy?",
        "Each generated response includes source traceability markers, ensuring all content is directly derived from the input document.",
    ),
];

/// Produces question/answer pairs for a document.
pub trait QuestionSource {
    fn questions(&self, document_text: &str, settings: GenerationSettings) -> Vec<QaItem>;
}

/// Serves a prefix of [`FIXTURE`], independent of document content and output type.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSource;

impl QuestionSource for FixtureSource {
    fn questions(&self, _document_text: &str, settings: GenerationSettings) -> Vec<QaItem> {
        let take = usize::try_from(settings.count.max(0))
            .unwrap_or(usize::MAX)
            .min(FIXTURE.len());
        FIXTURE[..take]
            .iter()
            .map(|(question, answer)| QaItem::new(*question, *answer))
            .collect()
    }
}

/// Returns the first `min(count, fixture size)` fixture items; non-positive counts yield none.
///
/// Callers are expected to only invoke this for non-blank documents.
pub fn generate(document_text: &str, settings: GenerationSettings) -> Vec<QaItem> {
    FixtureSource.questions(document_text, settings)
}
