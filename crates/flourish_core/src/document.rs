//! Static description of the host page handed to [`crate::PageState::attach`].
//!
//! This is the explicit stand-in for the markup query contract: the shell
//! builds it once from whatever hosts the page and the core never touches
//! anything global.

/// Everything on the page the runtime animates or wires up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageDocument {
    /// Numeric display elements, in document order.
    pub counters: Vec<CounterElement>,
    /// Circular-arc progress elements, in document order.
    pub rings: Vec<RingElement>,
    /// Citation entries with copy buttons, in document order.
    pub references: Vec<ReferenceEntry>,
    /// Whether the page hosts the AS checker form.
    pub lookup_form: bool,
}

/// A numeric display element with a target attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterElement {
    pub label: String,
    /// Raw target attribute; a missing attribute behaves like `"0"`.
    pub target: Option<String>,
    /// Marker for the percentage formatting kind.
    pub percentage: bool,
    /// Text rendered by the host before any animation frame runs.
    pub text: String,
}

/// A circular-arc element with a target percentage attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct RingElement {
    pub label: String,
    /// Raw percentage attribute; a missing attribute behaves like `"0"`.
    pub percentage: Option<String>,
    /// Native radius of the arc.
    pub radius: f64,
}

/// A citation entry: the snippet its button copies and the button content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub key: String,
    /// Text content of the code child; `None` copies the empty string.
    pub snippet: Option<String>,
    /// Original button content, restored verbatim after a copy reverts.
    pub button_markup: String,
}
