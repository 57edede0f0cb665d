use std::sync::Once;

use faqgen_core::{
    update, AppState, Effect, Msg, Notice, OutputType, Phase, EXPORT_FILENAME, FIXTURE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(faqgen_logging::initialize_for_tests);
}

fn with_text(text: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::TextEdited(text.to_string()));
    state
}

fn with_count(state: AppState, count: &str) -> AppState {
    let (state, _) = update(state, Msg::CountChanged(count.to_string()));
    state
}

#[test]
fn starts_idle_with_generate_disabled() {
    init_logging();
    let view = AppState::new().view();

    assert_eq!(view.phase, Phase::Idle);
    assert!(!view.generate_enabled);
    assert_eq!(view.count, 5);
    assert_eq!(view.generate_label, "Generate FAQs");
    assert!(view.items.is_empty());
    assert!(!view.download_available);
}

#[test]
fn generate_requires_non_blank_text() {
    init_logging();
    for blank in ["", "   ", "\n\t \n"] {
        let state = with_text(blank);
        assert!(!state.view().generate_enabled);
        assert_eq!(state.view().phase, Phase::Idle);

        let (next, effects) = update(state, Msg::GenerateClicked);
        assert!(next.generated().is_empty());
        assert!(effects.is_empty());
    }

    for text in ["a", "  hello  ", "\nline\n"] {
        let state = with_text(text);
        assert!(state.view().generate_enabled);
        assert_eq!(state.view().phase, Phase::Ready);
    }
}

#[test]
fn generate_returns_min_of_count_and_fixture_regardless_of_type() {
    init_logging();
    for output_type in [OutputType::Faqs, OutputType::Interview] {
        for count in [1_i64, 3, 5, 6, 20] {
            let state = with_count(with_text("source"), &count.to_string());
            let (state, _) = update(state, Msg::OutputTypeChanged(output_type));
            let (state, effects) = update(state, Msg::GenerateClicked);

            let expected = (count as usize).min(FIXTURE.len());
            assert_eq!(state.generated().len(), expected);
            assert!(effects.is_empty());
            for (item, (question, answer)) in state.generated().iter().zip(FIXTURE.iter()) {
                assert_eq!(item.question, *question);
                assert_eq!(item.answer, *answer);
            }
            assert_eq!(state.view().phase, Phase::Generated);
        }
    }
}

#[test]
fn repeated_generate_replaces_list() {
    init_logging();
    let state = with_count(with_text("source"), "4");
    let (state, _) = update(state, Msg::GenerateClicked);
    assert_eq!(state.generated().len(), 4);

    let state = with_count(state, "2");
    let (state, _) = update(state, Msg::GenerateClicked);
    assert_eq!(state.generated().len(), 2);
    assert_eq!(state.view().items[1].number, 2);

    let (state, _) = update(state, Msg::GenerateClicked);
    assert_eq!(state.generated().len(), 2);
}

#[test]
fn non_positive_count_generates_nothing_and_warns() {
    init_logging();
    for raw in ["0", "-2", "", "abc"] {
        let state = with_count(with_text("source"), raw);
        assert!(!state.view().count_in_advisory_range);
        assert!(matches!(state.view().notice, Some(Notice::Warning(_))));

        let (state, _) = update(state, Msg::GenerateClicked);
        assert!(state.generated().is_empty());
        assert_eq!(state.view().phase, Phase::Ready);
    }
}

#[test]
fn count_above_advisory_range_is_kept_unclamped() {
    init_logging();
    let state = with_count(AppState::new(), "50");
    let view = state.view();

    assert_eq!(view.count, 50);
    assert!(!view.count_in_advisory_range);
    assert!(matches!(view.notice, Some(Notice::Warning(_))));

    let state = with_count(state, "12");
    assert_eq!(state.view().notice, None);
}

#[test]
fn output_type_changes_label_only() {
    init_logging();
    let (state, _) = update(with_text("source"), Msg::GenerateClicked);
    let before = state.generated().to_vec();

    let (state, _) = update(state, Msg::OutputTypeChanged(OutputType::Interview));
    assert_eq!(state.view().generate_label, "Generate Interview Questions");

    let (state, _) = update(state, Msg::GenerateClicked);
    assert_eq!(state.generated(), before.as_slice());
}

#[test]
fn text_edit_after_generation_keeps_list_but_marks_it_stale() {
    init_logging();
    let (state, _) = update(with_text("source"), Msg::GenerateClicked);
    let count = state.generated().len();

    let (state, _) = update(state, Msg::TextEdited("different source".to_string()));
    let view = state.view();

    assert_eq!(view.items.len(), count);
    assert!(view.output_stale);
    assert!(view.download_available);
    assert_eq!(view.phase, Phase::Ready);

    let (state, _) = update(state, Msg::GenerateClicked);
    assert!(!state.view().output_stale);
    assert_eq!(state.view().phase, Phase::Generated);
}

#[test]
fn download_emits_export_effect() {
    init_logging();
    let state = with_count(with_text("source"), "2");
    let (state, _) = update(state, Msg::GenerateClicked);
    let before = state.view();

    let (next, effects) = update(state, Msg::DownloadClicked);

    let expected = format!(
        "Q1: {}\n\nA1: {}\n\n---\n\nQ2: {}\n\nA2: {}\n\n",
        FIXTURE[0].0, FIXTURE[0].1, FIXTURE[1].0, FIXTURE[1].1
    );
    assert_eq!(
        effects,
        vec![Effect::SaveExport {
            filename: EXPORT_FILENAME.to_string(),
            content: expected,
        }]
    );
    assert_eq!(next.view(), before);
}

#[test]
fn download_without_output_is_ignored() {
    init_logging();
    let (_state, effects) = update(with_text("source"), Msg::DownloadClicked);
    assert!(effects.is_empty());
}

#[test]
fn export_outcome_is_reported_without_touching_list() {
    init_logging();
    let (state, _) = update(with_text("source"), Msg::GenerateClicked);
    let items = state.generated().to_vec();

    let (state, _) = update(
        state,
        Msg::ExportFinished {
            result: Ok("/tmp/strict-faqs.txt".to_string()),
        },
    );
    assert_eq!(
        state.view().notice,
        Some(Notice::Info("Saved /tmp/strict-faqs.txt".to_string()))
    );

    let (state, _) = update(
        state,
        Msg::ExportFinished {
            result: Err("disk full".to_string()),
        },
    );
    assert!(matches!(state.view().notice, Some(Notice::Warning(_))));
    assert_eq!(state.generated(), items.as_slice());
}

#[test]
fn dirty_flag_tracks_visible_changes() {
    init_logging();
    let mut state = with_text("source");
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::TextEdited("source".to_string()));
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::GenerateClicked);
    assert!(state.consume_dirty());
}
