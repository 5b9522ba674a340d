use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use flourish_core::{Effect, LookupOutcome, Msg};
use flourish_engine::{EngineConfig, EngineEvent, EngineHandle};
use flourish_logging::{flourish_info, flourish_warn};

use super::app::AppMsg;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<AppMsg>, config: EngineConfig) -> Self {
        let (engine, events) = EngineHandle::new(config);
        spawn_event_pump(events, msg_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::WriteClipboard { control, text } => {
                    flourish_info!("WriteClipboard control={} text_len={}", control, text.len());
                    self.engine.copy(control, text);
                }
                Effect::ScheduleRevert { control, delay_ms } => {
                    self.engine
                        .schedule_revert(control, Duration::from_millis(delay_ms));
                }
                Effect::SubmitLookup { asn } => {
                    flourish_info!("SubmitLookup asn={}", asn);
                    self.engine.lookup(asn);
                }
            }
        }
    }
}

fn spawn_event_pump(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if msg_tx.send(AppMsg::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

/// Maps engine events onto core messages. Every lookup failure collapses
/// into the single failed outcome; a failed clipboard write stays
/// unhandled beyond a log line, like the page it models.
fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CopyWritten { control } => Msg::CopyConfirmed { control },
        EngineEvent::CopyFailed { control, message } => {
            flourish_warn!("copy for control {} failed: {}", control, message);
            Msg::NoOp
        }
        EngineEvent::RevertElapsed { control } => Msg::CopyRevertElapsed { control },
        EngineEvent::LookupFinished { result } => match result {
            Ok(reply) if reply.affected => Msg::LookupCompleted {
                outcome: LookupOutcome::Affected,
            },
            Ok(_) => Msg::LookupCompleted {
                outcome: LookupOutcome::Safe,
            },
            Err(err) => {
                flourish_warn!("lookup failed: {} ({})", err.kind, err.message);
                Msg::LookupCompleted {
                    outcome: LookupOutcome::Failed,
                }
            }
        },
    }
}
