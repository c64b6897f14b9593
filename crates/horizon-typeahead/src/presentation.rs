//! Presentation binding for host-rendered inputs and list items.
//!
//! The controller never renders. It computes a bundle of instructions per
//! visible candidate ([`ItemProps`]) and hands it to a host-supplied
//! [`ListItemTemplate`], which merges the instructions into whatever render
//! unit its toolkit uses. Item events are routed back through
//! [`Typeahead::handle_item_pointer_press`](crate::Typeahead::handle_item_pointer_press),
//! [`handle_item_touch_move`](crate::Typeahead::handle_item_touch_move) and
//! [`handle_item_touch_end`](crate::Typeahead::handle_item_touch_end), keyed
//! by [`ItemProps::index`].

use crate::candidate::Candidate;
use crate::state::InteractionState;

/// Accessibility role assigned to list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemRole {
    #[default]
    Button,
}

/// List items are reachable by pointer and arrow keys only, never by Tab.
pub const ITEM_TAB_INDEX: i32 = -1;

/// Instructions for the text source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    /// The text the input must display.
    pub value: String,
    /// Whether the suggestion list is currently shown below the input.
    pub list_open: bool,
}

/// Instructions for rendering one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProps<'a> {
    /// Stable key for the render unit.
    pub key: usize,
    /// Position in the candidate list; pass it back with item events.
    pub index: usize,
    /// The candidate itself, including any extra item fields.
    pub candidate: &'a Candidate,
    /// The candidate's display text, if it has one.
    pub text: Option<&'a str>,
    /// Whether this candidate is the highlighted one.
    pub selected: bool,
    pub role: ItemRole,
    pub tab_index: i32,
    /// The user's query for match highlighting.
    ///
    /// Only provided to non-primitive templates.
    pub query: Option<&'a str>,
}

/// A host-described render unit for list items.
pub trait ListItemTemplate {
    /// What rendering one item produces.
    type Output;

    /// Primitive templates (bare toolkit elements) do not accept a query.
    fn is_primitive(&self) -> bool {
        false
    }

    /// Merge the controller's instructions into a render unit.
    fn render(&self, props: ItemProps<'_>) -> Self::Output;
}

/// A plain rendered item, produced by [`PlainItemTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainItem {
    pub key: usize,
    pub text: String,
    pub selected: bool,
}

/// The default primitive template: text plus a selection flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainItemTemplate;

impl ListItemTemplate for PlainItemTemplate {
    type Output = PlainItem;

    fn is_primitive(&self) -> bool {
        true
    }

    fn render(&self, props: ItemProps<'_>) -> PlainItem {
        PlainItem {
            key: props.key,
            text: props.text.unwrap_or_default().to_string(),
            selected: props.selected,
        }
    }
}

impl<F, T> ListItemTemplate for F
where
    F: Fn(ItemProps<'_>) -> T,
{
    type Output = T;

    fn render(&self, props: ItemProps<'_>) -> T {
        self(props)
    }
}

/// Build item props for every candidate of an open list.
pub(crate) fn render_items<T: ListItemTemplate>(
    state: &InteractionState,
    template: &T,
) -> Vec<T::Output> {
    if !state.is_list_open() {
        return Vec::new();
    }

    let query = (!template.is_primitive()).then(|| state.query());
    state
        .candidates()
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            template.render(ItemProps {
                key: index,
                index,
                candidate,
                text: candidate.commit_value(),
                selected: state.selected_index() == Some(index),
                role: ItemRole::Button,
                tab_index: ITEM_TAB_INDEX,
                query,
            })
        })
        .collect()
}
