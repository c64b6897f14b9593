//! Prelude module for Horizon Typeahead.
//!
//! ```
//! use horizon_typeahead::prelude::*;
//! ```

// ============================================================================
// Controller
// ============================================================================

pub use crate::controller::Typeahead;
pub use crate::config::TypeaheadConfig;

// ============================================================================
// Candidates
// ============================================================================

pub use crate::candidate::{Candidate, CandidateItem};
pub use crate::model::{CandidateListModel, CaseSensitivity};
pub use crate::source::{CandidateLookup, Completion, CompletionOutcome, StaleCompletionPolicy};

// ============================================================================
// Events and Host Hooks
// ============================================================================

pub use crate::events::{BlurEvent, Key, KeyPressEvent, PointerPressEvent, TextChangeEvent};
pub use crate::hooks::{HoverProbe, HoverTracker, TextSource};

// ============================================================================
// Presentation
// ============================================================================

pub use crate::presentation::{InputProps, ItemProps, ListItemTemplate, PlainItemTemplate};

// ============================================================================
// Signals
// ============================================================================

pub use horizon_typeahead_core::{ConnectionId, Signal};
