use std::fmt::Write;

use faqgen_core::{AppViewModel, Notice, Phase, ADVISORY_COUNT};

const PREVIEW_CHARS: usize = 60;

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let phase = match view.phase {
        Phase::Idle => "Idle",
        Phase::Ready => "Ready",
        Phase::Generated => "Generated",
    };
    let _ = writeln!(out, "== Source document [{phase}] ==");

    if view.drag_over {
        let _ = writeln!(out, "  >> Drop your file here <<");
    }
    for read in &view.pending_reads {
        let _ = writeln!(
            out,
            "  Reading {} ... {}",
            read.name,
            format_bytes(read.bytes)
        );
    }
    let _ = writeln!(out, "  {}", document_summary(&view.document_text));

    let count_hint = if view.count_in_advisory_range {
        String::new()
    } else {
        format!(" (suggested {}-{})", ADVISORY_COUNT.start(), ADVISORY_COUNT.end())
    };
    let _ = writeln!(
        out,
        "  Count: {}{count_hint} | Output: {}",
        view.count,
        view.output_type.label()
    );

    if view.generate_enabled {
        let _ = writeln!(out, "  [{}]  (:generate)", view.generate_label);
    } else {
        let _ = writeln!(
            out,
            "  ({} disabled: paste text or upload a document first)",
            view.generate_label
        );
    }

    match &view.notice {
        Some(Notice::Info(text)) => {
            let _ = writeln!(out, "  i {text}");
        }
        Some(Notice::Warning(text)) => {
            let _ = writeln!(out, "  ! {text}");
        }
        None => {}
    }

    if !view.items.is_empty() {
        let stale = if view.output_stale {
            " (document changed since generation)"
        } else {
            ""
        };
        let _ = writeln!(out, "== Generated {}{stale} ==", view.output_type.label());
        for card in &view.items {
            let _ = writeln!(out, "  {}. {}", card.number, card.question);
            let _ = writeln!(out, "     {}", card.answer);
        }
        if view.download_available {
            let _ = writeln!(out, "  [Download as TXT]  (:download)");
        }
    }

    out
}

fn document_summary(text: &str) -> String {
    if text.is_empty() {
        return "Paste your document text here...".to_string();
    }
    let chars = text.chars().count();
    let first_line = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    let mut preview: String = first_line.trim().chars().take(PREVIEW_CHARS).collect();
    if first_line.trim().chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    format!("{chars} chars: \"{preview}\"")
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqgen_core::{update, AppState, Msg};

    fn view_after(msgs: Vec<Msg>) -> AppViewModel {
        let mut state = AppState::new();
        for msg in msgs {
            state = update(state, msg).0;
        }
        state.view()
    }

    #[test]
    fn idle_page_shows_disabled_button() {
        let text = render(&AppState::new().view());
        assert!(text.contains("[Idle]"));
        assert!(text.contains("Generate FAQs disabled"));
        assert!(!text.contains("Download"));
    }

    #[test]
    fn generated_page_lists_numbered_cards() {
        let view = view_after(vec![
            Msg::TextEdited("Some document".into()),
            Msg::CountChanged("2".into()),
            Msg::GenerateClicked,
        ]);
        let text = render(&view);
        assert!(text.contains("[Generated]"));
        assert!(text.contains("  1. What is the primary purpose of this document?"));
        assert!(text.contains("  2. How does source-grounding"));
        assert!(!text.contains("  3. "));
        assert!(text.contains("[Download as TXT]"));
    }

    #[test]
    fn out_of_range_count_is_hinted() {
        let view = view_after(vec![Msg::CountChanged("40".into())]);
        assert!(render(&view).contains("Count: 40 (suggested 1-20)"));
    }

    #[test]
    fn long_first_line_is_truncated() {
        let line = "x".repeat(100);
        let summary = document_summary(&format!("\n{line}\nmore"));
        assert!(summary.starts_with("106 chars:"));
        assert!(summary.ends_with("...\""));
    }

    #[test]
    fn byte_counts_are_humanized() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
    }
}
