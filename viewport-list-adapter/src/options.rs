use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use viewport_list::ListOptions;

use crate::Easing;

/// Maps an item and its index to a stable identity.
///
/// Must be injective over the collection and return the same key for the same logical item
/// across re-renders, otherwise hosts will recycle the wrong rows.
pub type KeyExtractor<T, K> = Arc<dyn Fn(&T, usize) -> K + Send + Sync>;

/// Fired on every scroll event with the new scroll offset. Not debounced.
pub type OnScrollCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Fired at most once per item-collection generation when the end-reached threshold is crossed.
pub type OnEndReachedCallback = Arc<dyn Fn() + Send + Sync>;

/// How a scroll-to-index request moves the container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump straight to the target on the next tick.
    Instant,
    /// Ease towards the target over `duration_ms`.
    ///
    /// A scroll event within `echo_tolerance_px` of an offset the animation wrote is its echo;
    /// anything else is user input and cancels the animation. Hosts that round offsets to
    /// device pixels need at least one device pixel here.
    Smooth {
        duration_ms: u64,
        easing: Easing,
        echo_tolerance_px: f64,
    },
}

/// Default `echo_tolerance_px` of [`ScrollBehavior::Smooth`].
pub const DEFAULT_ECHO_TOLERANCE_PX: f64 = 1.0;

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self::Smooth {
            duration_ms: 300,
            easing: Easing::SmoothStep,
            echo_tolerance_px: DEFAULT_ECHO_TOLERANCE_PX,
        }
    }
}

/// Configuration for [`crate::VirtualList`].
///
/// Heavy fields are stored in `Arc`s so hosts can clone the options, change a field and hand
/// them back through `VirtualList::set_options` without reallocating closures.
pub struct VirtualListOptions<T, K = String> {
    /// Geometry, overscan, end-reached threshold, idle delay and default alignment.
    pub list: ListOptions,
    pub key_extractor: KeyExtractor<T, K>,
    pub on_scroll: Option<OnScrollCallback>,
    pub on_end_reached: Option<OnEndReachedCallback>,
    /// Rows always rendered in the overlay layer, in stacking order.
    pub sticky_indices: Vec<usize>,
    pub scroll_behavior: ScrollBehavior,
}

impl<T, K> Clone for VirtualListOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            key_extractor: Arc::clone(&self.key_extractor),
            on_scroll: self.on_scroll.clone(),
            on_end_reached: self.on_end_reached.clone(),
            sticky_indices: self.sticky_indices.clone(),
            scroll_behavior: self.scroll_behavior,
        }
    }
}

impl<T, K> VirtualListOptions<T, K> {
    pub fn new(
        list: ListOptions,
        key_extractor: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            list,
            key_extractor: Arc::new(key_extractor),
            on_scroll: None,
            on_end_reached: None,
            sticky_indices: Vec::new(),
            scroll_behavior: ScrollBehavior::default(),
        }
    }

    pub fn with_list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }

    pub fn with_key_extractor(
        mut self,
        key_extractor: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.key_extractor = Arc::new(key_extractor);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_end_reached(
        mut self,
        on_end_reached: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = on_end_reached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_sticky_indices(mut self, sticky_indices: impl IntoIterator<Item = usize>) -> Self {
        self.sticky_indices = sticky_indices.into_iter().collect();
        self
    }

    pub fn with_scroll_behavior(mut self, scroll_behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = scroll_behavior;
        self
    }
}

impl<T, K> core::fmt::Debug for VirtualListOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualListOptions")
            .field("list", &self.list)
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_end_reached", &self.on_end_reached.is_some())
            .field("sticky_indices", &self.sticky_indices)
            .field("scroll_behavior", &self.scroll_behavior)
            .finish_non_exhaustive()
    }
}
