//! Logging facilities for Horizon Typeahead.
//!
//! Horizon Typeahead uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_typeahead=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_typeahead_core::signal";
    /// Interaction controller target (text changes, navigation, commits).
    pub const CONTROLLER: &str = "horizon_typeahead::controller";
    /// Candidate loading.
    pub const CANDIDATE: &str = "horizon_typeahead::candidate";
    /// Manual-mode lookup completions.
    pub const COMPLETION: &str = "horizon_typeahead::completion";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_typeahead::config";
}
