//! Single-select / two-way compare state machine and the live-region text
//! derived from it.
//!
//! Internally the machine is an ordered list of at most two skill ids:
//! empty = Idle, one = Selected, two = Comparing. Compare toggles append and
//! evict FIFO, so a third toggle drops the oldest member.

use smallvec::SmallVec;

use crate::skills::SkillStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Idle,
    Selected(String),
    Comparing(String, String),
}

#[derive(Default)]
pub struct SelectionStateMachine {
    slots: SmallVec<[String; 2]>,
}

impl SelectionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Selection {
        match self.slots.as_slice() {
            [] => Selection::Idle,
            [a] => Selection::Selected(a.clone()),
            [a, b, ..] => Selection::Comparing(a.clone(), b.clone()),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        matches!(self.slots.as_slice(), [a] if a == id)
    }

    /// Whether `id` is part of the current compare pair.
    pub fn is_comparing(&self, id: &str) -> bool {
        self.slots.len() == 2 && self.slots.iter().any(|s| s == id)
    }

    /// Primary activation: toggles off an already-selected id, otherwise the
    /// clicked id becomes the sole selection.
    pub fn click(&mut self, id: &str) {
        if self.is_selected(id) {
            self.slots.clear();
        } else {
            self.slots.clear();
            self.slots.push(id.to_string());
        }
    }

    /// Membership toggle on the compare set: removes a present id, appends
    /// an absent one, evicting the oldest member when the set is full.
    pub fn compare_toggle(&mut self, id: &str) {
        if let Some(pos) = self.slots.iter().position(|s| s == id) {
            self.slots.remove(pos);
        } else {
            if self.slots.len() == 2 {
                self.slots.remove(0);
            }
            self.slots.push(id.to_string());
        }
    }

    /// Back to Idle from any state; reports whether anything was cleared.
    pub fn escape(&mut self) -> bool {
        let cleared = !self.slots.is_empty();
        self.slots.clear();
        cleared
    }
}

/// Live-region sentence for the current selection. Pure; recomputed after
/// every transition. Unknown ids fall back to the raw id.
pub fn announcement(selection: &Selection, store: &SkillStore) -> String {
    match selection {
        Selection::Idle => "Skills overview".to_string(),
        Selection::Selected(id) => format!("Selected {}", store.name_of(id)),
        Selection::Comparing(a, b) => {
            format!("Comparing {} and {}", store.name_of(a), store.name_of(b))
        }
    }
}
