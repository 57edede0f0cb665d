//! FAQ generator core: pure session state machine and view-model helpers.
mod effect;
mod export;
mod generate;
mod intake;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use export::{export_text, EXPORT_FILENAME};
pub use generate::{generate, FixtureSource, QuestionSource, FIXTURE};
pub use intake::{IntakeFailure, PickedFile, ReadId};
pub use msg::Msg;
pub use state::{
    parse_count, AppState, GenerationSettings, Notice, OutputType, Phase, QaItem, ADVISORY_COUNT,
};
pub use update::update;
pub use view_model::{AppViewModel, PendingReadView, QaCardView};
