use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use faqgen_core::{update, AppState, GenerationSettings, Msg};
use faqgen_engine::{EngineHandle, IntakeSettings};
use faqgen_logging::{faq_debug, faq_info};

use super::effects::EffectRunner;
use super::ui::commands::{parse_command, resolve, Action, HELP};
use super::ui::render::render;
use crate::config::{AppConfig, CONFIG_FILENAME};

const TICK: Duration = Duration::from_millis(75);

/// Everything the main loop reacts to.
pub enum AppInput {
    Line(String),
    Msg(Msg),
    EndOfInput,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load(Path::new(CONFIG_FILENAME)).context("loading configuration")?;
    faqgen_logging::initialize(
        config.log_destination.into(),
        faqgen_logging::parse_level(&config.log_level),
    );
    faq_info!("Starting with {:?}", config);

    let engine = EngineHandle::new(IntakeSettings {
        max_bytes: config.max_upload_bytes,
    })
    .context("starting document engine")?;

    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let runner = EffectRunner::new(engine, config.download_dir.clone(), input_tx.clone());
    spawn_stdin_reader(input_tx);

    let mut state = AppState::with_settings(GenerationSettings {
        count: config.default_count,
        ..GenerationSettings::default()
    });
    let mut stdout = io::stdout();
    writeln!(stdout, "{HELP}\n")?;
    write!(stdout, "{}", render(&state.view()))?;
    stdout.flush()?;

    let mut input_closed = false;
    loop {
        let (input, idle) = match input_rx.recv_timeout(TICK) {
            Ok(input) => (input, false),
            Err(mpsc::RecvTimeoutError::Timeout) => (AppInput::Msg(Msg::Tick), true),
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        // Engine messages only update state; rendering waits for a tick or user input.
        let render_now = match input {
            AppInput::Msg(msg) => {
                let is_tick = matches!(msg, Msg::Tick);
                state = dispatch(state, msg, &runner);
                is_tick
            }
            AppInput::Line(line) => match resolve(parse_command(&line), state.document_text()) {
                Action::Dispatch(msgs) => {
                    for msg in msgs {
                        state = dispatch(state, msg, &runner);
                    }
                    true
                }
                Action::Show => {
                    write!(stdout, "{}", render(&state.view()))?;
                    false
                }
                Action::Help => {
                    writeln!(stdout, "{HELP}")?;
                    false
                }
                Action::Invalid(message) => {
                    writeln!(stdout, "{message}")?;
                    false
                }
                Action::Quit => break,
            },
            AppInput::EndOfInput => {
                input_closed = true;
                false
            }
        };

        if render_now && state.consume_dirty() {
            write!(stdout, "{}", render(&state.view()))?;
        }
        stdout.flush()?;

        // Piped input: let in-flight reads land before leaving.
        if input_closed && idle && state.view().pending_reads.is_empty() {
            break;
        }
    }

    faq_info!("Session ended");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    faq_debug!("dispatch {:?}", msg);
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(AppInput::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(AppInput::EndOfInput);
    });
}
