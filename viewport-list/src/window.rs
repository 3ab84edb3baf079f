//! Fixed-height windowing arithmetic.
//!
//! Every function here is pure: the result depends only on the arguments. Offsets are `f64`
//! pixels so sub-pixel scroll positions from native containers pass through untouched.

use crate::VisibleRange;

/// Computes the overscanned window of rows to materialize.
///
/// `raw_start = floor(scroll_top / item_height)`, `raw_end = raw_start + ceil(container_height /
/// item_height) + 1`. The extra row covers sub-pixel scroll positions where the viewport
/// straddles one more row than `ceil` accounts for. Both ends are then widened by `overscan`
/// and clamped to `0..=item_count`.
///
/// Negative (over-scroll) and NaN offsets count as 0. A non-positive `item_height` is a caller
/// contract violation; the result is then some in-bounds range, never a panic.
pub fn compute_visible_range(
    scroll_top: f64,
    item_height: f64,
    container_height: f64,
    overscan: usize,
    item_count: usize,
) -> VisibleRange {
    if item_count == 0 {
        return VisibleRange::EMPTY;
    }

    let scroll_top = clamp_scroll_top(scroll_top);
    let raw_start = floor_to_index(scroll_top / item_height);
    let rows_in_view = ceil_to_index(container_height.max(0.0) / item_height);
    let raw_end = raw_start.saturating_add(rows_in_view).saturating_add(1);

    VisibleRange {
        start_index: raw_start.saturating_sub(overscan).min(item_count),
        end_index: raw_end.saturating_add(overscan).min(item_count),
    }
}

/// Rows whose span overlaps `[scroll_top, scroll_top + container_height)`.
///
/// Unlike [`compute_visible_range`] this has no overscan and no slack row; it answers "is this
/// row on screen right now".
pub fn viewport_range(
    scroll_top: f64,
    item_height: f64,
    container_height: f64,
    item_count: usize,
) -> VisibleRange {
    if item_count == 0 {
        return VisibleRange::EMPTY;
    }

    let scroll_top = clamp_scroll_top(scroll_top);
    let bottom = scroll_top + container_height.max(0.0);
    let start = floor_to_index(scroll_top / item_height).min(item_count);
    let end = ceil_to_index(bottom / item_height).min(item_count);

    VisibleRange {
        start_index: start,
        end_index: end.max(start),
    }
}

/// Height the host must reserve (e.g. with a spacer) so the native scrollbar spans every row.
pub fn total_height(item_height: f64, item_count: usize) -> f64 {
    item_count as f64 * item_height
}

pub fn item_top(index: usize, item_height: f64) -> f64 {
    index as f64 * item_height
}

/// Largest reachable scroll offset; 0 when the content fits inside the container.
pub fn max_scroll_top(total_height: f64, container_height: f64) -> f64 {
    (total_height - container_height).max(0.0)
}

/// The row under `offset`, clamped to the last row.
pub fn index_at_offset(offset: f64, item_height: f64, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let index = floor_to_index(clamp_scroll_top(offset) / item_height);
    Some(index.min(item_count - 1))
}

pub(crate) fn clamp_scroll_top(scroll_top: f64) -> f64 {
    // NaN fails the comparison as well.
    if scroll_top > 0.0 { scroll_top } else { 0.0 }
}

// `as` saturates: NaN maps to 0 and +inf to usize::MAX. Inputs are already non-negative.
fn floor_to_index(v: f64) -> usize {
    v as usize
}

fn ceil_to_index(v: f64) -> usize {
    let t = v as usize;
    if (t as f64) < v { t.saturating_add(1) } else { t }
}
