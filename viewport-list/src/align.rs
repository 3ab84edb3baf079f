use crate::{Align, window};

/// Scroll offset that brings row `index` to `align`, clamped to the scrollable range.
///
/// With `item_top = index * item_height`:
/// - `Start`: `item_top`
/// - `Center`: `item_top - (container_height - item_height) / 2`
/// - `End`: `item_top - container_height + item_height`
///
/// The target is clamped to `0..=max(0, total_height - container_height)`. Returns `None` for
/// indexes outside `0..item_count`; stale requests are expected while data is in flight.
pub fn scroll_offset_for_index(
    index: usize,
    align: Align,
    item_height: f64,
    container_height: f64,
    item_count: usize,
) -> Option<f64> {
    if index >= item_count {
        return None;
    }

    let item_top = window::item_top(index, item_height);
    let target = match align {
        Align::Start => item_top,
        Align::Center => item_top - (container_height - item_height) / 2.0,
        Align::End => item_top - container_height + item_height,
    };

    let total = window::total_height(item_height, item_count);
    let max = window::max_scroll_top(total, container_height);
    Some(target.clamp(0.0, max))
}
