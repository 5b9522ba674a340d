use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use flourish_logging::{flourish_debug, flourish_warn};

use crate::clipboard::{ArboardClipboard, ClipboardWriter};
use crate::lookup::{LookupClient, LookupSettings, ReqwestLookupClient};
use crate::types::EngineEvent;

/// Engine-wide configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub lookup: LookupSettings,
}

enum EngineCommand {
    Copy { control: usize, text: String },
    ScheduleRevert { control: usize, delay: Duration },
    Lookup { asn: String },
}

/// Handle to the engine thread: commands in, events out.
///
/// Commands never block the caller. There is no cancellation: lookups
/// run to completion and revert timers always fire, matching the page
/// behavior this executes.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the engine thread with the real clipboard and HTTP client.
    pub fn new(config: EngineConfig) -> (Self, mpsc::Receiver<EngineEvent>) {
        let client = Arc::new(ReqwestLookupClient::new(config.lookup));
        let clipboard = Arc::new(ArboardClipboard::default());
        Self::with_parts(client, clipboard)
    }

    /// Spawns the engine thread with injected seams; used by tests.
    pub fn with_parts(
        client: Arc<dyn LookupClient>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let clipboard = clipboard.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), clipboard, command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn copy(&self, control: usize, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Copy {
            control,
            text: text.into(),
        });
    }

    pub fn schedule_revert(&self, control: usize, delay: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ScheduleRevert { control, delay });
    }

    pub fn lookup(&self, asn: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Lookup { asn: asn.into() });
    }
}

async fn handle_command(
    client: &dyn LookupClient,
    clipboard: Arc<dyn ClipboardWriter>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Copy { control, text } => {
            // arboard is synchronous; keep it off the runtime workers.
            let outcome = tokio::task::spawn_blocking(move || clipboard.write_text(&text)).await;
            let event = match outcome {
                Ok(Ok(())) => EngineEvent::CopyWritten { control },
                Ok(Err(err)) => {
                    flourish_warn!("clipboard write for control {} failed: {}", control, err);
                    EngineEvent::CopyFailed {
                        control,
                        message: err.to_string(),
                    }
                }
                Err(err) => {
                    flourish_warn!("clipboard task for control {} died: {}", control, err);
                    EngineEvent::CopyFailed {
                        control,
                        message: err.to_string(),
                    }
                }
            };
            let _ = event_tx.send(event);
        }
        EngineCommand::ScheduleRevert { control, delay } => {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(EngineEvent::RevertElapsed { control });
        }
        EngineCommand::Lookup { asn } => {
            flourish_debug!("checking asn={}", asn);
            let result = client.check(&asn).await;
            if let Err(err) = &result {
                flourish_warn!("check for asn={} failed: {} ({})", asn, err.kind, err.message);
            }
            let _ = event_tx.send(EngineEvent::LookupFinished { result });
        }
    }
}
