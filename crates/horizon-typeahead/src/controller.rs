//! The typeahead interaction controller.
//!
//! [`Typeahead`] wraps a text source and a candidate list source and turns
//! raw input events into suggestion-list behavior:
//!
//! - typing filters a static list (auto mode) or asks the host for
//!   candidates (manual mode)
//! - Up/Down walk the list, wrapping back to the typed text past either end
//! - Enter, Tab, a click or a tap commit the highlighted candidate
//! - Escape and blur close the list
//!
//! # Example
//!
//! ```
//! use horizon_typeahead::{Key, KeyPressEvent, TextChangeEvent, Typeahead};
//!
//! let mut typeahead = Typeahead::new(vec!["apple", "apricot", "banana"]);
//!
//! typeahead.option_selected.connect(|(candidate, index)| {
//!     println!("Selected {:?} at {}", candidate.commit_value(), index);
//! });
//!
//! typeahead.handle_text_change(&TextChangeEvent::new("ap"));
//! assert_eq!(typeahead.candidates().len(), 2);
//!
//! typeahead.handle_key_press(&mut KeyPressEvent::key(Key::ArrowDown));
//! assert_eq!(typeahead.value(), "apple");
//!
//! typeahead.handle_key_press(&mut KeyPressEvent::key(Key::Enter));
//! assert!(!typeahead.is_list_open());
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_typeahead_core::Signal;
use horizon_typeahead_core::logging::targets;

use crate::candidate::Candidate;
use crate::config::TypeaheadConfig;
use crate::events::{BlurEvent, Key, KeyPressEvent, PointerPressEvent, TextChangeEvent};
use crate::hooks::{HoverProbe, TextSource};
use crate::model::{CandidateListModel, CaseSensitivity};
use crate::presentation::{self, InputProps, ListItemTemplate};
use crate::source::{CandidateLookup, Completion, StaleCompletionPolicy};
use crate::state::{Direction, InteractionState, Navigation, SharedState, SharedStateHandle};

/// Where candidates come from.
enum CandidateSource {
    /// The controller filters a static list itself.
    Auto(CandidateListModel),
    /// The host looks candidates up and completes asynchronously.
    Manual(Box<dyn CandidateLookup>),
}

/// What a key press resolved to, decided under the state lock.
enum KeyAction {
    Pass,
    Close,
    Navigated(Navigation),
    Commit(usize),
}

/// An autocomplete controller for a single text input.
///
/// # Signals
///
/// - `value_changed(String)`: Emitted on every text change in auto mode
/// - `option_selected((Candidate, usize))`: Emitted when a candidate is committed
/// - `arrow_navigation((Candidate, usize))`: Emitted when the keyboard highlights a candidate
/// - `value_reset(String)`: Emitted when navigation returns to the typed text
pub struct Typeahead {
    shared: SharedStateHandle,
    source: CandidateSource,
    case_sensitivity: CaseSensitivity,
    stale_policy: StaleCompletionPolicy,
    text_source: Option<Box<dyn TextSource>>,
    hover_probe: Option<Box<dyn HoverProbe>>,

    // Signals
    /// Signal emitted with the new text after each auto-mode text change.
    pub value_changed: Signal<String>,

    /// Signal emitted when a candidate is committed.
    pub option_selected: Signal<(Candidate, usize)>,

    /// Signal emitted when keyboard navigation highlights a candidate.
    pub arrow_navigation: Signal<(Candidate, usize)>,

    /// Signal emitted with the restored text when navigation leaves the list.
    pub value_reset: Signal<String>,
}

impl Typeahead {
    fn with_source(source: CandidateSource) -> Self {
        Self {
            shared: Arc::new(Mutex::new(SharedState::default())),
            source,
            case_sensitivity: CaseSensitivity::default(),
            stale_policy: StaleCompletionPolicy::default(),
            text_source: None,
            hover_probe: None,
            value_changed: Signal::new(),
            option_selected: Signal::new(),
            arrow_navigation: Signal::new(),
            value_reset: Signal::new(),
        }
    }

    /// Create an auto-mode controller over a static candidate list.
    pub fn new(items: impl Into<CandidateListModel>) -> Self {
        Self::with_source(CandidateSource::Auto(items.into()))
    }

    /// Create a manual-mode controller that delegates lookups to the host.
    pub fn manual(lookup: impl CandidateLookup + 'static) -> Self {
        Self::with_source(CandidateSource::Manual(Box::new(lookup)))
    }

    /// Create an auto-mode controller from a configuration.
    pub fn from_config(config: TypeaheadConfig) -> Self {
        Self::new(CandidateListModel::empty()).with_config(config)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Apply every setting in `config`.
    ///
    /// A non-empty candidate list replaces the auto-mode list; manual
    /// controllers ignore it, as they do the initial value in auto mode.
    pub fn with_config(self, config: TypeaheadConfig) -> Self {
        let TypeaheadConfig {
            case_sensitivity,
            stale_completions,
            initial_value,
            candidates,
        } = config;

        let mut this = self
            .with_case_sensitivity(case_sensitivity)
            .with_stale_completion_policy(stale_completions);
        if !candidates.is_empty() {
            this.set_items(candidates);
        }
        match initial_value {
            Some(value) => this.with_initial_value(value),
            None => this,
        }
    }

    /// Seed the input text. Only manual mode accepts an initial value.
    pub fn with_initial_value(self, value: impl Into<String>) -> Self {
        if self.is_manual() {
            self.shared.lock().interaction.value = value.into();
        } else {
            tracing::debug!(target: targets::CONTROLLER, "initial value ignored in auto mode");
        }
        self
    }

    /// Set case sensitivity for the auto-mode filter using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }

    /// Set the stale-completion policy using builder pattern.
    pub fn with_stale_completion_policy(mut self, policy: StaleCompletionPolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    /// Attach the host's own input handlers using builder pattern.
    pub fn with_text_source(mut self, text_source: impl TextSource + 'static) -> Self {
        self.text_source = Some(Box::new(text_source));
        self
    }

    /// Attach the hover capability used by the blur heuristic.
    pub fn with_hover_probe(mut self, probe: impl HoverProbe + 'static) -> Self {
        self.hover_probe = Some(Box::new(probe));
        self
    }

    /// Get the case sensitivity setting.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Get the stale-completion policy.
    pub fn stale_completion_policy(&self) -> StaleCompletionPolicy {
        self.stale_policy
    }

    /// Whether the host performs candidate lookup.
    pub fn is_manual(&self) -> bool {
        matches!(self.source, CandidateSource::Manual(_))
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// The currently displayed text.
    pub fn value(&self) -> String {
        self.shared.lock().interaction.value.clone()
    }

    /// The text that navigation will restore, if an option is highlighted.
    pub fn cached_value(&self) -> String {
        self.shared.lock().interaction.cached_value.clone()
    }

    /// The highlighted candidate index.
    pub fn selected_index(&self) -> Option<usize> {
        self.shared.lock().interaction.selected_index
    }

    /// The current suggestion list.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.shared.lock().interaction.candidates.clone()
    }

    /// Whether the suggestion list is visible.
    pub fn is_list_open(&self) -> bool {
        self.shared.lock().interaction.list_open
    }

    /// Whether the current touch gesture has turned into a scroll.
    pub fn is_touch_scrolling(&self) -> bool {
        self.shared.lock().interaction.touch_scrolling
    }

    /// A copy of the whole interaction state.
    pub fn snapshot(&self) -> InteractionState {
        self.shared.lock().interaction.clone()
    }

    // =========================================================================
    // Host Updates
    // =========================================================================

    /// Replace the static auto-mode list. Returns `false` in manual mode.
    ///
    /// Takes effect on the next text change.
    pub fn set_items(&mut self, items: impl Into<CandidateListModel>) -> bool {
        match &mut self.source {
            CandidateSource::Auto(model) => {
                *model = items.into();
                true
            }
            CandidateSource::Manual(_) => false,
        }
    }

    /// Push a candidate list from the host. Manual mode only.
    ///
    /// The list opens iff `candidates` is non-empty.
    pub fn set_candidates(&self, candidates: Vec<Candidate>) -> bool {
        if !self.is_manual() {
            tracing::debug!(target: targets::CONTROLLER, "set_candidates ignored in auto mode");
            return false;
        }
        self.shared.lock().interaction.set_candidates(candidates);
        true
    }

    /// Push the input text from the host. Manual mode only.
    pub fn set_value(&self, value: impl Into<String>) -> bool {
        if !self.is_manual() {
            tracing::debug!(target: targets::CONTROLLER, "set_value ignored in auto mode");
            return false;
        }
        self.shared.lock().interaction.value = value.into();
        true
    }

    // =========================================================================
    // Text Input
    // =========================================================================

    /// Handle an edit of the input text.
    #[tracing::instrument(skip_all, target = "horizon_typeahead::controller", level = "trace")]
    pub fn handle_text_change(&mut self, event: &TextChangeEvent) {
        if let Some(text_source) = self.text_source.as_mut() {
            text_source.changed(event);
        }

        let value = event.value.clone();
        match &mut self.source {
            CandidateSource::Auto(model) => {
                let matches = model.matches(&value, self.case_sensitivity);
                {
                    let mut shared = self.shared.lock();
                    shared.interaction.begin_input(&value);
                    if !matches.is_empty() {
                        shared.interaction.set_candidates(matches);
                    }
                    tracing::debug!(
                        target: targets::CONTROLLER,
                        value = %value,
                        candidates = shared.interaction.candidates.len(),
                        "filtered candidates"
                    );
                }
                self.value_changed.emit(value);
            }
            CandidateSource::Manual(lookup) => {
                let generation = {
                    let mut shared = self.shared.lock();
                    shared.interaction.begin_input(&value);
                    shared.lookup_generation += 1;
                    shared.lookup_generation
                };
                tracing::debug!(target: targets::CONTROLLER, value = %value, generation, "requesting candidates");

                let completion = Completion::new(
                    Arc::downgrade(&self.shared),
                    value.clone(),
                    generation,
                    self.stale_policy,
                );
                lookup.lookup(&value, completion);
            }
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Handle a key press in the input.
    ///
    /// The host's own key handler always sees the event first. Returns `true`
    /// if the controller handled the key, in which case the event's default
    /// action has been suppressed.
    #[tracing::instrument(skip_all, target = "horizon_typeahead::controller", level = "trace")]
    pub fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        if let Some(text_source) = self.text_source.as_mut() {
            text_source.key_pressed(event);
        }

        let action = {
            let mut shared = self.shared.lock();
            let state = &mut shared.interaction;
            if !state.is_navigable() {
                KeyAction::Pass
            } else {
                match event.key {
                    Key::Escape => {
                        state.hide_list();
                        KeyAction::Close
                    }
                    key if key.is_navigation() => {
                        let direction = if key == Key::ArrowUp {
                            Direction::Up
                        } else {
                            Direction::Down
                        };
                        KeyAction::Navigated(state.navigate(direction))
                    }
                    key if key.is_confirm() => match state.selected_index {
                        Some(index) => KeyAction::Commit(index),
                        None => KeyAction::Pass,
                    },
                    _ => KeyAction::Pass,
                }
            }
        };

        match action {
            KeyAction::Pass => false,
            KeyAction::Close => {
                event.base.prevent_default();
                tracing::debug!(target: targets::CONTROLLER, "escape closed list");
                true
            }
            KeyAction::Navigated(navigation) => {
                event.base.prevent_default();
                match navigation {
                    Navigation::Highlighted { candidate, index } => {
                        tracing::trace!(target: targets::CONTROLLER, index, "highlighted candidate");
                        self.arrow_navigation.emit((candidate, index));
                    }
                    Navigation::Restored { value } => {
                        tracing::trace!(target: targets::CONTROLLER, value = %value, "navigation returned to input");
                        self.value_reset.emit(value);
                    }
                    Navigation::Ignored => {}
                }
                true
            }
            KeyAction::Commit(index) => {
                event.base.prevent_default();
                self.commit(index);
                true
            }
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Commit the candidate at `index` as the input value.
    ///
    /// Closes the list; in auto mode the candidates are discarded as well,
    /// while manual mode keeps them since the host owns their lifecycle.
    /// Returns `false` and changes nothing if `index` is out of range.
    pub fn commit(&self, index: usize) -> bool {
        let retain_candidates = self.is_manual();
        let committed = self.shared.lock().interaction.commit(index, retain_candidates);

        match committed {
            Some(candidate) => {
                tracing::debug!(
                    target: targets::CONTROLLER,
                    index,
                    value = candidate.commit_value().unwrap_or_default(),
                    "committed candidate"
                );
                self.option_selected.emit((candidate, index));
                true
            }
            None => {
                tracing::warn!(target: targets::CONTROLLER, index, "commit index out of range");
                false
            }
        }
    }

    /// Close the suggestion list, keeping its contents.
    pub fn hide_list(&self) {
        self.shared.lock().interaction.hide_list();
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Handle the input losing focus.
    ///
    /// If the hover probe reports the pointer inside the controller's region,
    /// the blur came from an interaction with the list itself (e.g. dragging
    /// its scrollbar) and is ignored. Returns `true` if the blur was handled
    /// as a real one.
    pub fn handle_blur(&mut self, event: &BlurEvent) -> bool {
        if self
            .hover_probe
            .as_ref()
            .is_some_and(|probe| probe.is_pointer_within())
        {
            tracing::debug!(target: targets::CONTROLLER, "blur with pointer inside typeahead, keeping list");
            return false;
        }

        if let Some(text_source) = self.text_source.as_mut() {
            text_source.blurred(event);
        }
        self.hide_list();
        true
    }

    // =========================================================================
    // Pointer and Touch
    // =========================================================================

    /// Handle a pointer press anywhere inside the suggestion list.
    ///
    /// While the list is open the press's default action is suppressed so
    /// focus stays in the input until the click completes.
    pub fn handle_list_pointer_press(&self, event: &mut PointerPressEvent) {
        if self.is_list_open() {
            event.base.prevent_default();
        }
    }

    /// Handle a pointer press on the candidate at `index`: commits it.
    pub fn handle_item_pointer_press(&self, index: usize, event: &mut PointerPressEvent) -> bool {
        self.handle_list_pointer_press(event);
        self.commit(index)
    }

    /// Handle a touch moving over a candidate: the gesture is a scroll.
    pub fn handle_item_touch_move(&self, _index: usize) {
        self.shared.lock().interaction.touch_scrolling = true;
    }

    /// Handle a touch ending over the candidate at `index`.
    ///
    /// Commits unless the gesture moved. The scroll flag is reset either way.
    /// Returns whether a commit happened.
    pub fn handle_item_touch_end(&self, index: usize) -> bool {
        let was_scrolling = std::mem::take(&mut self.shared.lock().interaction.touch_scrolling);
        if was_scrolling {
            tracing::trace!(target: targets::CONTROLLER, index, "touch ended a scroll, not a tap");
            return false;
        }
        self.commit(index)
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Instructions for the text source.
    pub fn input_props(&self) -> InputProps {
        let shared = self.shared.lock();
        InputProps {
            value: shared.interaction.value.clone(),
            list_open: shared.interaction.list_open,
        }
    }

    /// Render every visible candidate through `template`.
    ///
    /// Returns an empty list while the suggestion list is closed. The
    /// template runs on a snapshot, so it may call back into the controller.
    pub fn render_items<T: ListItemTemplate>(&self, template: &T) -> Vec<T::Output> {
        let snapshot = self.snapshot();
        presentation::render_items(&snapshot, template)
    }
}

impl std::fmt::Debug for Typeahead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shared = self.shared.lock();
        f.debug_struct("Typeahead")
            .field("manual", &self.is_manual())
            .field("case_sensitivity", &self.case_sensitivity)
            .field("stale_policy", &self.stale_policy)
            .field("value", &shared.interaction.value)
            .field("selected_index", &shared.interaction.selected_index)
            .field("list_open", &shared.interaction.list_open)
            .field("candidates_count", &shared.interaction.candidates.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(items: Vec<&str>, text: &str) -> Typeahead {
        let mut typeahead = Typeahead::new(items);
        typeahead.handle_text_change(&TextChangeEvent::new(text));
        typeahead
    }

    #[test]
    fn test_empty_text_closes_list() {
        let mut typeahead = typed(vec!["apple"], "a");
        assert!(typeahead.is_list_open());

        typeahead.handle_text_change(&TextChangeEvent::new(""));
        assert!(!typeahead.is_list_open());
        assert!(typeahead.candidates().is_empty());
        assert_eq!(typeahead.value(), "");
    }

    #[test]
    fn test_no_match_keeps_list_closed() {
        let typeahead = typed(vec!["apple"], "z");
        assert!(!typeahead.is_list_open());
        assert_eq!(typeahead.value(), "z");
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut typeahead = typed(vec!["apple"], "z");

        let mut event = KeyPressEvent::key(Key::ArrowDown);
        assert!(!typeahead.handle_key_press(&mut event));
        assert!(!event.base.is_default_prevented());
        assert_eq!(typeahead.selected_index(), None);

        let mut event = KeyPressEvent::key(Key::Escape);
        assert!(!typeahead.handle_key_press(&mut event));
        assert!(!event.base.is_default_prevented());
    }

    #[test]
    fn test_enter_without_selection_passes_through() {
        let mut typeahead = typed(vec!["apple"], "a");

        let mut event = KeyPressEvent::key(Key::Enter);
        assert!(!typeahead.handle_key_press(&mut event));
        assert!(!event.base.is_default_prevented());
        assert!(typeahead.is_list_open());
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut typeahead = typed(vec!["apple"], "a");
        typeahead.handle_key_press(&mut KeyPressEvent::key(Key::ArrowDown));

        let mut event = KeyPressEvent::key(Key::Character('x'));
        assert!(!typeahead.handle_key_press(&mut event));
        assert!(!event.base.is_default_prevented());
        assert_eq!(typeahead.selected_index(), Some(0));
    }

    #[test]
    fn test_initial_value_only_in_manual_mode() {
        let auto = Typeahead::new(vec!["a"]).with_initial_value("seed");
        assert_eq!(auto.value(), "");

        let manual = Typeahead::manual(|_: &str, completion: Completion| {
            let _ = completion.close();
        })
        .with_initial_value("seed");
        assert_eq!(manual.value(), "seed");
    }

    #[test]
    fn test_host_updates_rejected_in_auto_mode() {
        let mut typeahead = Typeahead::new(vec!["a"]);
        assert!(!typeahead.set_candidates(vec![Candidate::text("x")]));
        assert!(!typeahead.set_value("x"));
        assert!(typeahead.set_items(vec!["b"]));

        typeahead.handle_text_change(&TextChangeEvent::new("b"));
        assert_eq!(typeahead.candidates(), vec![Candidate::text("b")]);
    }

    #[test]
    fn test_commit_out_of_range() {
        let typeahead = typed(vec!["apple"], "a");
        assert!(!typeahead.commit(3));
        assert!(typeahead.is_list_open());
    }

    #[test]
    fn test_case_sensitive_filter() {
        let mut typeahead =
            Typeahead::new(vec!["Apple", "apple"]).with_case_sensitivity(CaseSensitivity::CaseSensitive);
        typeahead.handle_text_change(&TextChangeEvent::new("a"));
        assert_eq!(typeahead.candidates(), vec![Candidate::text("apple")]);
    }

    #[test]
    fn test_input_props() {
        let typeahead = typed(vec!["apple"], "ap");
        assert_eq!(
            typeahead.input_props(),
            InputProps {
                value: "ap".to_string(),
                list_open: true
            }
        );
    }
}
