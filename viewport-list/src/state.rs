use crate::ScrollDirection;

/// A lightweight snapshot of the live scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_top: f64,
    pub is_scrolling: bool,
    pub scroll_direction: Option<ScrollDirection>,
}
