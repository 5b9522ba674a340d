use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body sent to the check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRequest {
    pub asn: String,
}

/// Reply body of the check endpoint. Only `affected` drives the page;
/// the remaining fields exist on the wire but are informational.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckReply {
    pub affected: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub asn: Option<u64>,
}

/// Events delivered back to the shell from the engine thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The clipboard write for `control` resolved.
    CopyWritten { control: usize },
    /// The clipboard write for `control` failed. The page treats this as
    /// unhandled; the event exists so the shell can log it.
    CopyFailed { control: usize, message: String },
    /// A scheduled revert delay elapsed.
    RevertElapsed { control: usize },
    /// A check request finished.
    LookupFinished {
        result: Result<CheckReply, LookupError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    pub kind: LookupFailureKind,
    pub message: String,
}

impl LookupError {
    pub(crate) fn new(kind: LookupFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for LookupFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupFailureKind::InvalidUrl => write!(f, "invalid url"),
            LookupFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            LookupFailureKind::Timeout => write!(f, "timeout"),
            LookupFailureKind::Network => write!(f, "network error"),
            LookupFailureKind::Decode => write!(f, "malformed reply"),
        }
    }
}
