use faqgen_core::{export_text, QaItem, EXPORT_FILENAME};
use pretty_assertions::assert_eq;

#[test]
fn two_items_use_separator_and_one_based_numbers() {
    let items = vec![QaItem::new("q1", "a1"), QaItem::new("q2", "a2")];

    assert_eq!(
        export_text(&items),
        "Q1: q1\n\nA1: a1\n\n---\n\nQ2: q2\n\nA2: a2\n\n"
    );
}

#[test]
fn single_item_has_no_separator() {
    let items = vec![QaItem::new("Why?", "Because.")];
    assert_eq!(export_text(&items), "Q1: Why?\n\nA1: Because.\n\n");
}

#[test]
fn empty_list_exports_empty_text() {
    assert_eq!(export_text(&[]), "");
}

#[test]
fn content_is_written_verbatim() {
    let items = vec![QaItem::new("Line\nbreak: ok?", "---")];
    assert_eq!(export_text(&items), "Q1: Line\nbreak: ok?\n\nA1: ---\n\n");
}

#[test]
fn export_filename_is_fixed() {
    assert_eq!(EXPORT_FILENAME, "strict-faqs.txt");
}
