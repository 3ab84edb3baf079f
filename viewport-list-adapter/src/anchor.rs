use core::fmt;

use viewport_list::{Geometry, ItemSource, window};

/// A scroll anchor that can be used to preserve visual position across data changes.
///
/// Typical use case: a chat transcript loads older messages above the current ones. Without
/// anchoring, every prepended row pushes the messages the user is reading down by one row height.
#[derive(Clone, PartialEq)]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Distance from the anchor row's top to the scroll offset.
    pub offset_in_row: f64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_row", &self.offset_in_row)
            .finish()
    }
}

/// Captures an anchor for the row at the top of the viewport.
///
/// Returns `None` for an empty collection.
pub fn capture_first_visible_anchor<S, K>(
    items: &S,
    geometry: &Geometry,
    scroll_top: f64,
    key_fn: impl FnOnce(&S::Item, usize) -> K,
) -> Option<ScrollAnchor<K>>
where
    S: ItemSource + ?Sized,
{
    let index = window::index_at_offset(scroll_top, geometry.item_height, items.len())?;
    let item = items.get(index)?;
    let top = window::item_top(index, geometry.item_height);
    Some(ScrollAnchor {
        key: key_fn(item, index),
        offset_in_row: (scroll_top.max(0.0) - top).max(0.0),
    })
}

/// Computes the scroll offset that puts a previously captured anchor back in place.
///
/// The host provides a `key_to_index` mapping for the *current* collection. Returns `None`
/// when the anchored item is gone. The result is clamped to the scrollable range.
pub fn anchor_offset<K>(
    anchor: &ScrollAnchor<K>,
    geometry: &Geometry,
    item_count: usize,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> Option<f64> {
    let index = key_to_index(&anchor.key).filter(|&i| i < item_count)?;
    let target = window::item_top(index, geometry.item_height) + anchor.offset_in_row;
    Some(target.clamp(0.0, geometry.max_scroll_top(item_count)))
}
