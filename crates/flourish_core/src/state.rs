use crate::copy::CopyControl;
use crate::counter::{CounterKind, CounterTask, TimeMs};
use crate::document::PageDocument;
use crate::lookup::{LookupForm, LookupOutcome, LookupState};
use crate::ring::{baseline_style, RingStyle, RingTask};
use crate::view_model::{
    CopyButtonView, CounterView, LookupResultView, PageViewModel, RingView,
};

/// The whole page: every animation task, copy control and the checker
/// form. Built once by [`PageState::attach`]; advanced only through
/// [`crate::update`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    counters: Vec<CounterSlot>,
    rings: Vec<RingSlot>,
    copies: Vec<CopyControl>,
    lookup: Option<LookupForm>,
    dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct CounterSlot {
    label: String,
    text: String,
    /// `None` for skipped elements and for tasks that already finished.
    task: Option<CounterTask>,
}

#[derive(Debug, Clone, PartialEq)]
struct RingSlot {
    label: String,
    style: RingStyle,
    task: Option<RingTask>,
}

impl PageState {
    /// Explicit initialization entry point: builds all slots and tasks
    /// from the host document. Counters keep the host-rendered text until
    /// their first advancing frame; rings get their empty baseline style
    /// immediately, whether or not their target parses.
    pub fn attach(document: &PageDocument) -> Self {
        let counters = document
            .counters
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let kind = if element.percentage {
                    CounterKind::Percentage
                } else {
                    CounterKind::Count
                };
                CounterSlot {
                    label: element.label.clone(),
                    text: element.text.clone(),
                    task: CounterTask::from_attribute(element.target.as_deref(), kind, index),
                }
            })
            .collect();
        let rings = document
            .rings
            .iter()
            .map(|element| RingSlot {
                label: element.label.clone(),
                style: baseline_style(element.radius),
                task: RingTask::from_attribute(element.percentage.as_deref(), element.radius),
            })
            .collect();
        let copies = document.references.iter().map(CopyControl::new).collect();
        let lookup = document.lookup_form.then(LookupForm::default);

        Self {
            counters,
            rings,
            copies,
            lookup,
            dirty: true,
        }
    }

    /// Advances every live animation task to `now`. Finished tasks are
    /// discarded so they never reschedule.
    pub(crate) fn advance_frame(&mut self, now: TimeMs) {
        for slot in &mut self.counters {
            let mut finished = false;
            if let Some(task) = slot.task.as_mut() {
                if let Some(text) = task.tick(now) {
                    slot.text = text;
                    self.dirty = true;
                }
                finished = task.is_finished();
            }
            if finished {
                slot.task = None;
            }
        }
        for slot in &mut self.rings {
            let mut finished = false;
            if let Some(task) = slot.task.as_mut() {
                if let Some(offset) = task.tick(now) {
                    slot.style.dash_offset = offset;
                    self.dirty = true;
                }
                finished = task.is_finished();
            }
            if finished {
                slot.task = None;
            }
        }
    }

    /// Snippet text for the copy button at `control`, if it exists.
    pub(crate) fn copy_snippet(&self, control: usize) -> Option<String> {
        self.copies.get(control).map(|copy| copy.snippet().to_string())
    }

    /// Marks the copy at `control` as confirmed. Returns false for an
    /// unknown control index.
    pub(crate) fn confirm_copy(&mut self, control: usize) -> bool {
        match self.copies.get_mut(control) {
            Some(copy) => {
                copy.confirm();
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub(crate) fn revert_copy(&mut self, control: usize) {
        if let Some(copy) = self.copies.get_mut(control) {
            copy.revert();
            self.dirty = true;
        }
    }

    /// Runs form validation. Returns the digit string to submit, or
    /// `None` when validation failed (the error is already displayed) or
    /// when the page has no form.
    pub(crate) fn submit_lookup(&mut self, input: &str) -> Option<String> {
        let form = self.lookup.as_mut()?;
        match form.submit(input) {
            Some(asn) => Some(asn),
            None => {
                self.dirty = true;
                None
            }
        }
    }

    pub(crate) fn complete_lookup(&mut self, outcome: LookupOutcome) {
        if let Some(form) = self.lookup.as_mut() {
            form.complete(outcome);
            self.dirty = true;
        }
    }

    /// Returns and clears the dirty flag; the shell renders when true.
    pub fn consume_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            counters: self
                .counters
                .iter()
                .map(|slot| CounterView {
                    label: slot.label.clone(),
                    text: slot.text.clone(),
                })
                .collect(),
            rings: self
                .rings
                .iter()
                .map(|slot| RingView {
                    label: slot.label.clone(),
                    dash_array: slot.style.dash_array,
                    dash_offset: slot.style.dash_offset,
                })
                .collect(),
            copy_buttons: self
                .copies
                .iter()
                .map(|copy| CopyButtonView {
                    key: copy.key().to_string(),
                    markup: copy.markup().to_string(),
                    copied: copy.is_copied(),
                })
                .collect(),
            lookup: self.lookup.as_ref().map(|form| LookupResultView {
                message: form.message().to_string(),
                visible: form.is_visible(),
                affected: form.state() == LookupState::Affected,
                safe: form.state() == LookupState::Safe,
            }),
        }
    }
}
