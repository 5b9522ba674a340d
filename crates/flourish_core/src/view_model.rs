#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageViewModel {
    pub counters: Vec<CounterView>,
    pub rings: Vec<RingView>,
    pub copy_buttons: Vec<CopyButtonView>,
    /// `None` when the page hosts no checker form.
    pub lookup: Option<LookupResultView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingView {
    pub label: String,
    pub dash_array: (f64, f64),
    pub dash_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButtonView {
    pub key: String,
    pub markup: String,
    pub copied: bool,
}

/// The checker result box. The `affected` and `safe` markers are mutually
/// exclusive; both are clear in the error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResultView {
    pub message: String,
    pub visible: bool,
    pub affected: bool,
    pub safe: bool,
}
