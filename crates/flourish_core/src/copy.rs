use crate::document::ReferenceEntry;

/// Literal shown on a copy button while the copied marker is active.
pub const COPIED_LABEL: &str = "Copied!";

/// Delay before a confirmed copy reverts to the original button content.
pub const COPY_REVERT_DELAY_MS: u64 = 1200;

/// One copy button and the snippet it copies.
///
/// Re-entrancy is deliberately unguarded: every confirmed copy schedules
/// its own revert, and a timer left over from an earlier click will still
/// fire and restore the original content. The restore is idempotent, so
/// the visible effect of overlapping clicks is an early revert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyControl {
    key: String,
    snippet: String,
    original_markup: String,
    markup: String,
    copied: bool,
}

impl CopyControl {
    pub fn new(entry: &ReferenceEntry) -> Self {
        Self {
            key: entry.key.clone(),
            snippet: entry.snippet.clone().unwrap_or_default(),
            original_markup: entry.button_markup.clone(),
            markup: entry.button_markup.clone(),
            copied: false,
        }
    }

    /// The text a click sends to the clipboard (empty when the entry has
    /// no code child).
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Applies the confirmation state once the clipboard write resolved.
    pub fn confirm(&mut self) {
        self.copied = true;
        self.markup = COPIED_LABEL.to_string();
    }

    /// Restores the original button content and clears the marker.
    pub fn revert(&mut self) {
        self.copied = false;
        self.markup = self.original_markup.clone();
    }

    /// Content currently shown on the button.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Whether the copied visual marker is set.
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
