//! State machine for the AS checker form's result display.

/// Message shown when the submitted value is not a plain decimal number.
pub const MSG_INVALID_INPUT: &str = "Please enter a valid AS number.";
/// Message shown when the checked AS is affected.
pub const MSG_AFFECTED: &str = "Your AS is affected by routing loops!";
/// Message shown when the checked AS is not affected.
pub const MSG_SAFE: &str = "Your AS is not affected!";
/// Message shown for any HTTP, transport or decode failure.
pub const MSG_CHECK_FAILED: &str = "Unable to check the AS right now. Please try again later.";

/// Result states of the checker display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupState {
    /// Nothing submitted yet; the result box is hidden.
    #[default]
    Idle,
    Affected,
    Safe,
    Error,
}

/// Completion outcome delivered by the shell once a check finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Affected,
    Safe,
    /// Any HTTP, transport or decode failure, collapsed by the shell.
    Failed,
}

/// The checker form. Holds only the transient result display; every new
/// result fully replaces the previous one.
///
/// There is no in-flight tracking: submitting again while a request is
/// pending is allowed, and a stale late completion overwrites a fresher
/// result. That matches the page this models.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupForm {
    state: LookupState,
    message: String,
    visible: bool,
}

impl LookupForm {
    /// Validates a submitted value. Returns the digit string to send when
    /// the trimmed input is one or more decimal digits; otherwise shows
    /// the validation error and returns `None` (no request is made).
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let value = input.trim();
        if !is_decimal(value) {
            self.show(MSG_INVALID_INPUT, LookupState::Error);
            return None;
        }
        Some(value.to_string())
    }

    /// Applies a completed check to the display.
    pub fn complete(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Affected => self.show(MSG_AFFECTED, LookupState::Affected),
            LookupOutcome::Safe => self.show(MSG_SAFE, LookupState::Safe),
            LookupOutcome::Failed => self.show(MSG_CHECK_FAILED, LookupState::Error),
        }
    }

    fn show(&mut self, message: &str, state: LookupState) {
        self.message = message.to_string();
        self.visible = true;
        self.state = state;
    }

    pub fn state(&self) -> LookupState {
        self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the result box has ever shown a result. It never hides
    /// again once visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
