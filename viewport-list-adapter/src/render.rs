use alloc::vec::Vec;

use viewport_list::VisibleRange;

/// What the host should draw for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderPlan<K, R> {
    /// The collection is empty and nothing is loading: draw the empty-state component instead
    /// of the list.
    Empty,
    List(ListFrame<K, R>),
}

impl<K, R> RenderPlan<K, R> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_list(&self) -> Option<&ListFrame<K, R>> {
        match self {
            Self::Empty => None,
            Self::List(frame) => Some(frame),
        }
    }
}

/// One frame of a non-empty (or loading) list.
///
/// Layering, bottom to top: a spacer of `total_height`, the windowed `rows` positioned
/// absolutely at their `top`, then the `sticky` overlay pinned to the container. A pinned row
/// may appear in both layers; the windowed copy stays in normal flow underneath.
#[derive(Clone, Debug, PartialEq)]
pub struct ListFrame<K, R> {
    pub total_height: f64,
    /// The overscanned range `rows` was built from.
    pub window: VisibleRange,
    /// Overlay rows; `top` is relative to the container, stacked one row height apart.
    pub sticky: Vec<RenderedRow<K, R>>,
    /// Windowed rows; `top` is relative to the start of the content.
    pub rows: Vec<RenderedRow<K, R>>,
    /// Append the loading component below the windowed content.
    pub loading: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedRow<K, R> {
    pub key: K,
    pub index: usize,
    pub top: f64,
    /// Whether the row intersects the viewport (as opposed to being overscan).
    pub is_visible: bool,
    pub content: R,
}
