//! Flourish engine: effect execution for the page runtime.
mod clipboard;
mod engine;
mod lookup;
mod types;

pub use clipboard::{ArboardClipboard, ClipboardError, ClipboardWriter};
pub use engine::{EngineConfig, EngineHandle};
pub use lookup::{LookupClient, LookupSettings, ReqwestLookupClient, CHECK_AS_PATH};
pub use types::{CheckReply, CheckRequest, EngineEvent, LookupError, LookupFailureKind};
