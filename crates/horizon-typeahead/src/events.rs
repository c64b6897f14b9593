//! Raw input events consumed by the typeahead controller.
//!
//! The host's input layer translates whatever its toolkit delivers into these
//! types. Keys are semantic identifiers, not keycodes, so the controller does
//! not depend on any particular event encoding.

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Common data for all typeahead events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    default_prevented: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Suppress the toolkit's default action (caret movement, focus change, ...).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action has been suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Semantic key identifiers resolved by the host input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    ArrowUp,
    ArrowDown,
    /// A printable character.
    Character(char),
    /// Any other key, identified by a host-specific code.
    Unknown(u16),
}

impl Key {
    /// Check if this key moves the highlighted option.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Key::ArrowUp | Key::ArrowDown)
    }

    /// Check if this key commits the highlighted option.
    pub fn is_confirm(&self) -> bool {
        matches!(self, Key::Enter | Key::Tab)
    }
}

/// Text change event, sent when the text source's content is edited.
#[derive(Debug, Clone)]
pub struct TextChangeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The new raw text.
    pub value: String,
}

impl TextChangeEvent {
    /// Create a new text change event.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            base: EventBase::new(),
            value: value.into(),
        }
    }
}

/// Key press event, sent when a key goes down in the text source.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }

    /// Create a key press event with no modifiers held.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }
}

/// Blur event, sent when the text source loses focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlurEvent {
    /// Base event data.
    pub base: EventBase,
}

impl BlurEvent {
    /// Create a new blur event.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pointer press event, sent when a mouse button or pen goes down.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerPressEvent {
    /// Base event data.
    pub base: EventBase,
}

impl PointerPressEvent {
    /// Create a new pointer press event.
    pub fn new() -> Self {
        Self::default()
    }
}
