//! Flourish core: pure page state machine and view-model helpers.
mod copy;
mod counter;
mod document;
mod easing;
mod effect;
mod format;
mod lookup;
mod msg;
mod ring;
mod state;
mod update;
mod view_model;

pub use copy::{CopyControl, COPIED_LABEL, COPY_REVERT_DELAY_MS};
pub use counter::{
    CounterKind, CounterTask, TimeMs, ANIMATION_DURATION_MS, COUNTER_STAGGER_MS,
};
pub use document::{CounterElement, PageDocument, ReferenceEntry, RingElement};
pub use easing::ease_out_expo;
pub use effect::Effect;
pub use format::{format_count, format_percentage};
pub use lookup::{
    LookupForm, LookupOutcome, LookupState, MSG_AFFECTED, MSG_CHECK_FAILED, MSG_INVALID_INPUT,
    MSG_SAFE,
};
pub use msg::Msg;
pub use ring::{baseline_style, RingStyle, RingTask};
pub use state::PageState;
pub use update::update;
pub use view_model::{CopyButtonView, CounterView, LookupResultView, PageViewModel, RingView};
