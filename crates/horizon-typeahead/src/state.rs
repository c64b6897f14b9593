//! The interaction state and its transitions.
//!
//! [`InteractionState`] is owned by the controller and only changes through
//! the transition methods here. Each method is one atomic update performed
//! in response to one event; none of them call host code.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::candidate::Candidate;

/// Direction of a keyboard navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Result of a navigation step.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Navigation {
    /// An option is now highlighted.
    Highlighted { candidate: Candidate, index: usize },
    /// Selection moved past an end of the list and the input text came back.
    Restored { value: String },
    /// Nothing to navigate.
    Ignored,
}

/// Snapshot of everything the controller tracks about the current interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub(crate) value: String,
    pub(crate) cached_value: String,
    pub(crate) selected_index: Option<usize>,
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) list_open: bool,
    pub(crate) touch_scrolling: bool,
}

/// State shared between the controller and outstanding lookup completions.
#[derive(Debug, Default)]
pub(crate) struct SharedState {
    pub(crate) interaction: InteractionState,
    /// Bumped for every manual-mode lookup issued.
    pub(crate) lookup_generation: u64,
}

pub(crate) type SharedStateHandle = Arc<Mutex<SharedState>>;

impl InteractionState {
    /// Create a state showing `value` with the list closed.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// The currently displayed text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text to restore when navigation returns to the input.
    pub fn cached_value(&self) -> &str {
        &self.cached_value
    }

    /// The highlighted candidate index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// The current suggestion list.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Whether the suggestion list is visible.
    pub fn is_list_open(&self) -> bool {
        self.list_open
    }

    /// Whether a touch gesture over the list has turned into a drag.
    pub fn is_touch_scrolling(&self) -> bool {
        self.touch_scrolling
    }

    /// The highlighted candidate, if any.
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.selected_index.and_then(|i| self.candidates.get(i))
    }

    /// The text list items should highlight as the user's query.
    ///
    /// While an option is highlighted the input shows the option's text, so
    /// the query is the text the user typed before navigating.
    pub fn query(&self) -> &str {
        if self.selected_index.is_some() {
            &self.cached_value
        } else {
            &self.value
        }
    }

    /// Whether keyboard navigation and confirmation apply right now.
    pub(crate) fn is_navigable(&self) -> bool {
        self.list_open && !self.candidates.is_empty()
    }

    /// Invalidate the previous list and show the new raw text.
    pub(crate) fn begin_input(&mut self, value: &str) {
        self.value = value.to_string();
        self.cached_value.clear();
        self.selected_index = None;
        self.candidates.clear();
        self.list_open = false;
    }

    /// Install a new candidate list; the list opens iff it is non-empty.
    ///
    /// A selection that falls outside the new list is dropped and the typed
    /// text comes back, as if navigation had stepped off the list.
    pub(crate) fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.list_open = !candidates.is_empty();
        self.candidates = candidates;
        if self.selected_index.is_some_and(|i| i >= self.candidates.len()) {
            self.selected_index = None;
            self.value = std::mem::take(&mut self.cached_value);
        }
    }

    /// Hide the list without discarding its contents.
    pub(crate) fn hide_list(&mut self) {
        self.list_open = false;
    }

    /// Move the highlight one step in `direction`.
    pub(crate) fn navigate(&mut self, direction: Direction) -> Navigation {
        let len = self.candidates.len();
        if len == 0 {
            return Navigation::Ignored;
        }

        let target = match (self.selected_index, direction) {
            (None, Direction::Up) => {
                self.cached_value = self.value.clone();
                len - 1
            }
            (None, Direction::Down) => {
                self.cached_value = self.value.clone();
                0
            }
            (Some(0), Direction::Up) => return self.restore_cached(),
            (Some(i), Direction::Down) if i + 1 >= len => return self.restore_cached(),
            (Some(i), Direction::Up) => i - 1,
            (Some(i), Direction::Down) => i + 1,
        };

        self.selected_index = Some(target);
        let candidate = self.candidates[target].clone();
        if let Some(value) = candidate.commit_value() {
            self.value = value.to_string();
        }

        Navigation::Highlighted {
            candidate,
            index: target,
        }
    }

    fn restore_cached(&mut self) -> Navigation {
        self.selected_index = None;
        self.value = std::mem::take(&mut self.cached_value);
        Navigation::Restored {
            value: self.value.clone(),
        }
    }

    /// Finalize the candidate at `index` as the current value.
    ///
    /// Returns `None` without changing anything if `index` is out of range.
    /// With `retain_candidates` the list contents survive the close.
    pub(crate) fn commit(&mut self, index: usize, retain_candidates: bool) -> Option<Candidate> {
        let candidate = self.candidates.get(index)?.clone();

        self.list_open = false;
        self.selected_index = None;
        self.cached_value.clear();
        if !retain_candidates {
            self.candidates.clear();
        }
        if let Some(value) = candidate.commit_value() {
            self.value = value.to_string();
        }

        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateItem;

    fn open_state(value: &str, items: &[&str]) -> InteractionState {
        let mut state = InteractionState::with_value(value);
        state.set_candidates(items.iter().map(|s| Candidate::text(*s)).collect());
        state
    }

    #[test]
    fn test_down_from_none_selects_first_and_caches() {
        let mut state = open_state("ap", &["apple", "apricot"]);

        let nav = state.navigate(Direction::Down);
        assert_eq!(
            nav,
            Navigation::Highlighted {
                candidate: Candidate::text("apple"),
                index: 0
            }
        );
        assert_eq!(state.value(), "apple");
        assert_eq!(state.cached_value(), "ap");
        assert_eq!(state.query(), "ap");
    }

    #[test]
    fn test_up_from_none_wraps_to_last() {
        let mut state = open_state("ap", &["apple", "apricot"]);

        state.navigate(Direction::Up);
        assert_eq!(state.selected_index(), Some(1));
        assert_eq!(state.value(), "apricot");
    }

    #[test]
    fn test_up_from_first_restores() {
        let mut state = open_state("ap", &["apple", "apricot"]);
        state.navigate(Direction::Down);

        let nav = state.navigate(Direction::Up);
        assert_eq!(
            nav,
            Navigation::Restored {
                value: "ap".to_string()
            }
        );
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.value(), "ap");
        assert_eq!(state.cached_value(), "");
    }

    #[test]
    fn test_down_from_last_restores() {
        let mut state = open_state("ap", &["apple", "apricot"]);
        state.navigate(Direction::Up);

        state.navigate(Direction::Down);
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.value(), "ap");
    }

    #[test]
    fn test_single_candidate_round_trip() {
        let mut state = open_state("x", &["xylophone"]);

        state.navigate(Direction::Down);
        assert_eq!(state.selected_index(), Some(0));
        state.navigate(Direction::Down);
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.value(), "x");
    }

    #[test]
    fn test_navigate_onto_malformed_item_keeps_value() {
        let mut state = InteractionState::with_value("q");
        state.set_candidates(vec![Candidate::Item(CandidateItem::without_value())]);

        state.navigate(Direction::Down);
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.value(), "q");
    }

    #[test]
    fn test_commit_retains_or_clears_candidates() {
        let mut state = open_state("ap", &["apple", "apricot"]);
        let committed = state.commit(1, false);
        assert_eq!(committed, Some(Candidate::text("apricot")));
        assert_eq!(state.value(), "apricot");
        assert!(!state.is_list_open());
        assert!(state.candidates().is_empty());

        let mut state = open_state("ap", &["apple", "apricot"]);
        state.commit(0, true);
        assert_eq!(state.candidates().len(), 2);
        assert!(!state.is_list_open());
    }

    #[test]
    fn test_commit_out_of_range_is_noop() {
        let mut state = open_state("ap", &["apple"]);
        let before = state.clone();

        assert_eq!(state.commit(5, false), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_candidates_clamps_selection() {
        let mut state = open_state("a", &["a1", "a2", "a3"]);
        state.navigate(Direction::Up);
        assert_eq!(state.selected_index(), Some(2));

        state.set_candidates(vec![Candidate::text("b1")]);
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.value(), "a");
        assert_eq!(state.cached_value(), "");

        state.set_candidates(Vec::new());
        assert!(!state.is_list_open());
    }

    #[test]
    fn test_navigation_after_clamp_restores_typed_text() {
        let mut state = open_state("ap", &["apple", "apricot"]);
        state.navigate(Direction::Up);
        assert_eq!(state.value(), "apricot");

        state.set_candidates(vec![Candidate::text("only")]);
        assert_eq!(state.value(), "ap");

        state.navigate(Direction::Down);
        assert_eq!(state.value(), "only");
        assert_eq!(state.cached_value(), "ap");
        state.navigate(Direction::Down);
        assert_eq!(state.value(), "ap");
    }

    #[test]
    fn test_set_candidates_keeps_in_range_selection() {
        let mut state = open_state("ap", &["apple", "apricot"]);
        state.navigate(Direction::Down);

        state.set_candidates(vec![Candidate::text("apex"), Candidate::text("apron")]);
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(state.value(), "apple");
        assert_eq!(state.cached_value(), "ap");
    }

    #[test]
    fn test_begin_input_resets() {
        let mut state = open_state("ap", &["apple"]);
        state.navigate(Direction::Down);

        state.begin_input("b");
        assert_eq!(state.value(), "b");
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.cached_value(), "");
        assert!(state.candidates().is_empty());
        assert!(!state.is_list_open());
    }
}
