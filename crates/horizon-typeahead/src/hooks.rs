//! Host-side capabilities the controller calls into.
//!
//! - [`TextSource`] carries the host's own handlers for the input surface.
//!   Raw events reach these before the controller acts on them.
//! - [`HoverProbe`] answers whether the pointer is currently over any part of
//!   the controller's rendered region. The blur heuristic needs this to tell a
//!   scrollbar drag inside the suggestion list from a real loss of focus.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::events::{BlurEvent, KeyPressEvent, TextChangeEvent};

/// The host's own handlers on the text input surface.
///
/// All methods default to no-ops, so implement only what you need.
pub trait TextSource: Send {
    /// Called with every text change before the controller updates its state.
    fn changed(&mut self, _event: &TextChangeEvent) {}

    /// Called with every key press before the controller handles it.
    fn key_pressed(&mut self, _event: &mut KeyPressEvent) {}

    /// Called on a real blur, before the list closes.
    ///
    /// Not called when the blur was attributed to a pointer interaction
    /// within the controller's own region.
    fn blurred(&mut self, _event: &BlurEvent) {}
}

/// Reports whether the pointer is over the controller's rendered region.
pub trait HoverProbe: Send {
    /// Returns `true` if any part of the input or suggestion list is hovered.
    fn is_pointer_within(&self) -> bool;
}

impl<F> HoverProbe for F
where
    F: Fn() -> bool + Send,
{
    fn is_pointer_within(&self) -> bool {
        self()
    }
}

/// Explicit hover-tracking state shared between host and controller.
///
/// Clone it, hand one copy to the controller with
/// [`Typeahead::with_hover_probe`](crate::Typeahead::with_hover_probe), and
/// flip the other from your pointer enter/leave handlers.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    hovered: Arc<AtomicBool>,
}

impl HoverTracker {
    /// Create a tracker with the pointer outside the region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the pointer entered (`true`) or left (`false`) the region.
    pub fn set_hovered(&self, hovered: bool) {
        self.hovered.store(hovered, Ordering::SeqCst);
    }

    /// Whether the pointer is currently inside the region.
    pub fn is_hovered(&self) -> bool {
        self.hovered.load(Ordering::SeqCst)
    }
}

impl HoverProbe for HoverTracker {
    fn is_pointer_within(&self) -> bool {
        self.is_hovered()
    }
}
