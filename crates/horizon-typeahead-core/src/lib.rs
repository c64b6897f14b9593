//! Core systems for Horizon Typeahead.
//!
//! This crate provides the foundational pieces shared by the typeahead
//! controller:
//!
//! - **Signal/Slot System**: Type-safe notifications from controller to host
//! - **Logging**: `tracing` target names for filtering controller output
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_typeahead_core::Signal;
//!
//! let value_reset = Signal::<String>::new();
//!
//! let conn_id = value_reset.connect(|restored| {
//!     println!("Input restored to: {}", restored);
//! });
//!
//! value_reset.emit("ap".to_string());
//! value_reset.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
