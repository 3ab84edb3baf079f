use crate::{Align, ConfigError, VisibleRange, align, window};

pub const DEFAULT_OVERSCAN: usize = 5;
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 0.8;
pub const DEFAULT_IDLE_DELAY_MS: u64 = 150;

/// Fixed-height list geometry.
///
/// Every row has the same `item_height`. `overscan` is the number of extra rows materialized on
/// each side of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub item_height: f64,
    pub container_height: f64,
    pub overscan: usize,
}

impl Geometry {
    pub fn new(item_height: f64, container_height: f64) -> Self {
        Self {
            item_height,
            container_height,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            return Err(ConfigError::ItemHeight(self.item_height));
        }
        if !(self.container_height.is_finite() && self.container_height >= 0.0) {
            return Err(ConfigError::ContainerHeight(self.container_height));
        }
        Ok(())
    }

    pub fn total_height(&self, item_count: usize) -> f64 {
        window::total_height(self.item_height, item_count)
    }

    pub fn max_scroll_top(&self, item_count: usize) -> f64 {
        window::max_scroll_top(self.total_height(item_count), self.container_height)
    }

    /// The overscanned range to materialize at `scroll_top`.
    pub fn visible_range(&self, scroll_top: f64, item_count: usize) -> VisibleRange {
        window::compute_visible_range(
            scroll_top,
            self.item_height,
            self.container_height,
            self.overscan,
            item_count,
        )
    }

    /// The rows physically intersecting the viewport at `scroll_top` (no overscan, no slack).
    pub fn viewport_range(&self, scroll_top: f64, item_count: usize) -> VisibleRange {
        window::viewport_range(
            scroll_top,
            self.item_height,
            self.container_height,
            item_count,
        )
    }

    /// See [`align::scroll_offset_for_index`].
    pub fn scroll_offset_for_index(
        &self,
        index: usize,
        alignment: Align,
        item_count: usize,
    ) -> Option<f64> {
        align::scroll_offset_for_index(
            index,
            alignment,
            self.item_height,
            self.container_height,
            item_count,
        )
    }
}

/// Configuration for one virtualized list.
///
/// Every tunable is spelled out here with its default; nothing is substituted implicitly.
///
/// | field | default |
/// |---|---|
/// | `geometry.overscan` | 5 |
/// | `end_reached_threshold` | 0.8 |
/// | `idle_delay_ms` | 150 |
/// | `scroll_to_alignment` | [`Align::Start`] |
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListOptions {
    pub geometry: Geometry,
    /// Fraction of the scrollable distance that triggers the end-reached signal.
    pub end_reached_threshold: f64,
    /// Quiet window after the last scroll event before the list is considered idle.
    pub idle_delay_ms: u64,
    /// Alignment used for `scroll_to_index` requests that do not name one.
    pub scroll_to_alignment: Align,
}

impl ListOptions {
    pub fn new(item_height: f64, container_height: f64) -> Self {
        Self {
            geometry: Geometry::new(item_height, container_height),
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            idle_delay_ms: DEFAULT_IDLE_DELAY_MS,
            scroll_to_alignment: Align::Start,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.geometry.overscan = overscan;
        self
    }

    pub fn with_container_height(mut self, container_height: f64) -> Self {
        self.geometry.container_height = container_height;
        self
    }

    pub fn with_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    pub fn with_idle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.idle_delay_ms = delay_ms;
        self
    }

    pub fn with_scroll_to_alignment(mut self, align: Align) -> Self {
        self.scroll_to_alignment = align;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        if !(0.0..=1.0).contains(&self.end_reached_threshold) {
            return Err(ConfigError::EndReachedThreshold(self.end_reached_threshold));
        }
        Ok(())
    }
}
