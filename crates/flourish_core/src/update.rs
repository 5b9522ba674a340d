use crate::copy::COPY_REVERT_DELAY_MS;
use crate::{Effect, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::Frame { now } => {
            state.advance_frame(now);
            Vec::new()
        }
        Msg::CopyClicked { control } => match state.copy_snippet(control) {
            // No state change on the click itself; the confirmation only
            // arrives once the asynchronous write resolves.
            Some(text) => vec![Effect::WriteClipboard { control, text }],
            None => Vec::new(),
        },
        Msg::CopyConfirmed { control } => {
            if state.confirm_copy(control) {
                vec![Effect::ScheduleRevert {
                    control,
                    delay_ms: COPY_REVERT_DELAY_MS,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::CopyRevertElapsed { control } => {
            state.revert_copy(control);
            Vec::new()
        }
        Msg::LookupSubmitted { input } => match state.submit_lookup(&input) {
            Some(asn) => vec![Effect::SubmitLookup { asn }],
            None => Vec::new(),
        },
        Msg::LookupCompleted { outcome } => {
            state.complete_lookup(outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
