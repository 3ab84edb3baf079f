use core::ops::Range;

/// Where a row lands inside the container after a scroll-to-index request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// The row's top edge meets the container's top edge.
    #[default]
    Start,
    /// The row is centered in the container.
    Center,
    /// The row's bottom edge meets the container's bottom edge.
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    Scrolling,
}

/// A contiguous, half-open span of row indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// Identity of one item collection.
///
/// A new generation begins every time the host replaces the collection. State that must not
/// outlive a page of data (the end-reached latch) is keyed by it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Native scroll metrics reported by the scroll container with each scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    /// The container's scroll offset. May be negative during inertial over-scroll.
    pub scroll_top: f64,
    /// Height of the visible part of the container.
    pub client_height: f64,
    /// Height of the full scrollable content.
    pub scroll_height: f64,
}

impl ScrollEvent {
    pub fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }
}

/// What a single scroll event changed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOutcome {
    pub scroll_top: f64,
    pub direction: ScrollDirection,
    /// `true` only for the event that latched the end-reached flag of the current generation.
    pub end_reached: bool,
}
