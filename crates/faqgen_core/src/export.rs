use crate::QaItem;

/// Name of the downloadable export.
pub const EXPORT_FILENAME: &str = "strict-faqs.txt";

const ITEM_SEPARATOR: &str = "---\n\n";

/// Serializes items as numbered `Q{n}`/`A{n}` blocks joined by a `---` line.
pub fn export_text(items: &[QaItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let n = index + 1;
            format!("Q{n}: {}\n\nA{n}: {}\n\n", item.question, item.answer)
        })
        .collect::<Vec<_>>()
        .join(ITEM_SEPARATOR)
}
