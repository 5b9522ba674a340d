//! Shell message loop: frame clock and console input in, rendering and
//! effect execution out.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use flourish_core::{update, Msg, PageState};
use flourish_engine::{EngineConfig, LookupSettings};
use flourish_logging::flourish_info;

use super::demo;
use super::effects::EffectRunner;
use super::logging::{initialize, LogDestination};
use super::ui;

/// Interval between frame messages, roughly a display refresh.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    Core(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    initialize(LogDestination::File);

    let config = EngineConfig {
        lookup: LookupSettings {
            endpoint: endpoint_from_args().unwrap_or_else(|| LookupSettings::default().endpoint),
            ..LookupSettings::default()
        },
    };
    flourish_info!("check endpoint: {}", config.lookup.endpoint);

    let mut state = PageState::attach(&demo::demo_document());

    let (msg_tx, msg_rx) = mpsc::channel::<AppMsg>();
    let runner = EffectRunner::new(msg_tx.clone(), config);
    spawn_frame_clock(msg_tx.clone());
    spawn_input_reader(msg_tx);

    println!("{}", ui::render::HELP);
    let mut frame: u64 = 0;
    let mut drawn_lines = 0;
    while let Ok(msg) = msg_rx.recv() {
        let msg = match msg {
            AppMsg::Core(msg) => msg,
            AppMsg::Quit => break,
        };
        if matches!(msg, Msg::Frame { .. }) {
            frame += 1;
            flourish_logging::set_frame_tick(frame);
        }

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.enqueue(effects);

        if state.consume_dirty() {
            drawn_lines = ui::render::redraw(&state.view(), drawn_lines)?;
        }
    }

    flourish_info!("shell loop ended after {} frames", frame);
    Ok(())
}

/// First CLI argument, if any: the base URL of the check backend.
fn endpoint_from_args() -> Option<String> {
    std::env::args().nth(1)
}

fn spawn_frame_clock(msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        let started = Instant::now();
        loop {
            let now = started.elapsed().as_secs_f64() * 1000.0;
            if msg_tx.send(AppMsg::Core(Msg::Frame { now })).is_err() {
                break;
            }
            thread::sleep(FRAME_INTERVAL);
        }
    });
}

fn spawn_input_reader(msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let Some(msg) = parse_command(&line) else {
                continue;
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

/// Maps a console line to a message: `copy <n>`, `check <asn>`, `quit`.
/// Unrecognized lines are ignored.
fn parse_command(line: &str) -> Option<AppMsg> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    match verb {
        "quit" | "q" => Some(AppMsg::Quit),
        "copy" => rest
            .trim()
            .parse::<usize>()
            .ok()
            .map(|control| AppMsg::Core(Msg::CopyClicked { control })),
        // The raw value goes through; validation lives in the form.
        "check" => Some(AppMsg::Core(Msg::LookupSubmitted {
            input: rest.to_string(),
        })),
        _ => None,
    }
}
