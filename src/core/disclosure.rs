//! Exclusive-open disclosure state for accordion panel groups.
//!
//! One `DisclosureSet` tracks which single panel (if any) of a rendered
//! question/answer group is expanded. The open slot is `Option<usize>`, so
//! "at most one open" holds by construction rather than by bookkeeping.
//! State is transient UI state: a fresh set starts all-closed and nothing
//! here is ever persisted with the page document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureSet {
    len: usize,
    open: Option<usize>,
    interactive: bool,
}

impl DisclosureSet {
    /// A live, clickable panel group with every panel closed.
    pub fn interactive(len: usize) -> Self {
        Self {
            len,
            open: None,
            interactive: true,
        }
    }

    /// An authoring-mode preview: panels render closed and toggling is
    /// disabled entirely. Same state machine, rendering-mode flag off.
    pub fn inert(len: usize) -> Self {
        Self {
            len,
            open: None,
            interactive: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Index of the currently expanded panel, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// The header icon is rotated exactly when the panel is open; the visual
    /// state is derived here and carries no storage of its own.
    pub fn is_rotated(&self, index: usize) -> bool {
        self.is_open(index)
    }

    /// Handle a click on panel `index`'s header. Clicking the open panel
    /// collapses it; clicking any other panel collapses the current one and
    /// expands the clicked one. Out-of-range clicks and clicks on an inert
    /// set change nothing. Returns whether the state changed.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.interactive || index >= self.len {
            return false;
        }
        if self.open == Some(index) {
            self.open = None;
        } else {
            self.open = Some(index);
        }
        true
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(set: &DisclosureSet) -> usize {
        (0..set.len()).filter(|&i| set.is_open(i)).count()
    }

    #[test]
    fn test_starts_all_closed() {
        let set = DisclosureSet::interactive(3);
        assert_eq!(set.open_index(), None);
        assert_eq!(open_count(&set), 0);
    }

    #[test]
    fn test_exclusive_open_across_click_sequence() {
        let mut set = DisclosureSet::interactive(3);
        assert!(set.toggle(1));
        assert!(set.is_open(1));
        assert_eq!(open_count(&set), 1);

        assert!(set.toggle(2));
        assert!(set.is_open(2));
        assert!(!set.is_open(1));
        assert_eq!(open_count(&set), 1);

        assert!(set.toggle(2));
        assert_eq!(open_count(&set), 0);
    }

    #[test]
    fn test_double_click_restores_prior_state() {
        let mut set = DisclosureSet::interactive(4);
        set.toggle(0);
        let before = set.clone();
        set.toggle(3);
        set.toggle(3);
        // panel 3 is back to closed; panel 0 stayed untouched by the pair
        assert!(!set.is_open(3));
        assert_eq!(set.is_open(0), before.is_open(0));
    }

    #[test]
    fn test_icon_follows_open_state() {
        let mut set = DisclosureSet::interactive(2);
        set.toggle(0);
        assert!(set.is_rotated(0));
        assert!(!set.is_rotated(1));
        set.toggle(0);
        assert!(!set.is_rotated(0));
    }

    #[test]
    fn test_inert_set_never_opens() {
        let mut set = DisclosureSet::inert(3);
        assert!(!set.toggle(0));
        assert!(!set.toggle(2));
        assert_eq!(set.open_index(), None);
    }

    #[test]
    fn test_out_of_range_click_is_noop() {
        let mut set = DisclosureSet::interactive(2);
        set.toggle(1);
        assert!(!set.toggle(2));
        assert!(set.is_open(1));
    }
}
