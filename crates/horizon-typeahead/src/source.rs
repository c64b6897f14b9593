//! Manual-mode candidate lookup.
//!
//! In manual mode the host owns filtering. On every text change the
//! controller calls [`CandidateLookup::lookup`] with the new text and a
//! single-use [`Completion`]. The host finishes the completion whenever its
//! result is ready, on any thread:
//!
//! ```
//! use horizon_typeahead::{Candidate, Completion, Typeahead};
//!
//! let typeahead = Typeahead::manual(|query: &str, completion: Completion| {
//!     let upper = query.to_uppercase();
//!     completion.resolve(vec![Candidate::text(upper)]);
//! });
//! # drop(typeahead);
//! ```
//!
//! # Stale results
//!
//! Lookups are never cancelled. A slow result for an old keystroke can land
//! after newer input and reopen the list with outdated candidates. By default
//! the last completion to arrive wins; [`StaleCompletionPolicy`] lets the
//! controller discard such results instead.

use std::sync::Weak;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use horizon_typeahead_core::logging::targets;

use crate::candidate::Candidate;
use crate::state::SharedState;

/// The host's candidate lookup for manual mode.
pub trait CandidateLookup: Send {
    /// Start a lookup for `query`. `completion` must eventually be finished
    /// to show results; dropping it leaves the list closed.
    fn lookup(&mut self, query: &str, completion: Completion);
}

impl<F> CandidateLookup for F
where
    F: FnMut(&str, Completion) + Send,
{
    fn lookup(&mut self, query: &str, completion: Completion) {
        self(query, completion)
    }
}

/// Which lookup completions are allowed to update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleCompletionPolicy {
    /// Every completion applies; the last one to arrive wins.
    #[default]
    AcceptAll,
    /// Discard completions whose query no longer equals the current value.
    MatchingValue,
    /// Discard completions for any lookup but the most recently issued one.
    LatestRequest,
}

/// What happened when a completion was finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The result was applied to the controller's state.
    Applied,
    /// The stale-completion policy discarded the result.
    Stale,
    /// The controller no longer exists.
    Detached,
}

/// Single-use handle for delivering one lookup's result.
///
/// Finishing consumes the handle, so each lookup can complete at most once.
#[must_use = "the suggestion list stays closed until the completion is finished"]
pub struct Completion {
    state: Weak<Mutex<SharedState>>,
    query: String,
    generation: u64,
    policy: StaleCompletionPolicy,
}

impl Completion {
    pub(crate) fn new(
        state: Weak<Mutex<SharedState>>,
        query: String,
        generation: u64,
        policy: StaleCompletionPolicy,
    ) -> Self {
        Self {
            state,
            query,
            generation,
            policy,
        }
    }

    /// The text this lookup was issued for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Deliver the lookup result.
    ///
    /// `Some(list)` replaces the candidates and opens the list iff `list` is
    /// non-empty. `None` closes the list and keeps the previous candidates.
    pub fn complete(self, candidates: Option<Vec<Candidate>>) -> CompletionOutcome {
        let Some(state) = self.state.upgrade() else {
            tracing::debug!(target: targets::COMPLETION, query = %self.query, "controller dropped, completion detached");
            return CompletionOutcome::Detached;
        };
        let mut shared = state.lock();

        let stale = match self.policy {
            StaleCompletionPolicy::AcceptAll => false,
            StaleCompletionPolicy::MatchingValue => shared.interaction.value != self.query,
            StaleCompletionPolicy::LatestRequest => shared.lookup_generation != self.generation,
        };
        if stale {
            tracing::debug!(
                target: targets::COMPLETION,
                query = %self.query,
                generation = self.generation,
                latest = shared.lookup_generation,
                "discarding stale completion"
            );
            return CompletionOutcome::Stale;
        }

        match candidates {
            Some(candidates) => {
                tracing::trace!(target: targets::COMPLETION, query = %self.query, count = candidates.len(), "applying completion");
                shared.interaction.set_candidates(candidates);
            }
            None => {
                tracing::trace!(target: targets::COMPLETION, query = %self.query, "completion closed list");
                shared.interaction.hide_list();
            }
        }
        CompletionOutcome::Applied
    }

    /// Deliver a candidate list. An empty list closes the suggestion list.
    pub fn resolve(self, candidates: Vec<Candidate>) -> CompletionOutcome {
        self.complete(Some(candidates))
    }

    /// Close the suggestion list without replacing its candidates.
    pub fn close(self) -> CompletionOutcome {
        self.complete(None)
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("query", &self.query)
            .field("generation", &self.generation)
            .field("policy", &self.policy)
            .finish()
    }
}
