//! Horizon Typeahead - a headless autocomplete controller.
//!
//! [`Typeahead`] sits between a host-rendered text input and a host-rendered
//! suggestion list. It owns the interaction state (the displayed text, the
//! highlighted option, list visibility) and tells the host what to draw,
//! while the host keeps full control over how inputs and items look.
//!
//! Two sourcing modes are supported:
//!
//! - **Auto**: the controller filters a static [`CandidateListModel`] by
//!   prefix on every keystroke.
//! - **Manual**: the host performs lookups through a [`CandidateLookup`] and
//!   delivers results asynchronously via a [`Completion`].
//!
//! # Example
//!
//! ```
//! use horizon_typeahead::prelude::*;
//!
//! let mut typeahead = Typeahead::new(vec!["apple", "apricot", "banana"]);
//! typeahead.handle_text_change(&TextChangeEvent::new("ap"));
//!
//! let items = typeahead.render_items(&PlainItemTemplate);
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0].text, "apple");
//! ```

pub mod candidate;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod hooks;
pub mod model;
pub mod prelude;
pub mod presentation;
pub mod source;
pub mod state;

pub use horizon_typeahead_core::{ConnectionId, Signal, logging};

pub use candidate::{Candidate, CandidateFields, CandidateItem};
pub use config::TypeaheadConfig;
pub use controller::Typeahead;
pub use error::{Error, Result};
pub use events::{
    BlurEvent, EventBase, Key, KeyPressEvent, KeyboardModifiers, PointerPressEvent,
    TextChangeEvent,
};
pub use hooks::{HoverProbe, HoverTracker, TextSource};
pub use model::{CandidateListModel, CaseSensitivity};
pub use presentation::{
    ITEM_TAB_INDEX, InputProps, ItemProps, ItemRole, ListItemTemplate, PlainItem,
    PlainItemTemplate,
};
pub use source::{CandidateLookup, Completion, CompletionOutcome, StaleCompletionPolicy};
pub use state::{Direction, InteractionState};
