use crate::counter::TimeMs;
use crate::lookup::LookupOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Scheduler tick carrying the injected timestamp.
    Frame { now: TimeMs },
    /// User activated the copy button at `control`.
    CopyClicked { control: usize },
    /// The asynchronous clipboard write for `control` resolved.
    CopyConfirmed { control: usize },
    /// A revert timer scheduled after a confirmed copy fired.
    CopyRevertElapsed { control: usize },
    /// User submitted the AS checker form with the raw input value.
    LookupSubmitted { input: String },
    /// A check request finished; the shell collapsed the wire result.
    LookupCompleted { outcome: LookupOutcome },
    /// Fallback for placeholder wiring.
    NoOp,
}
