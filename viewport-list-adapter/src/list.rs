use alloc::string::String;
use alloc::vec::Vec;

use viewport_list::{
    Align, Generation, Geometry, ItemSource, ScrollDirection, ScrollEvent, ScrollOutcome,
    ScrollStateMachine, ViewportState, VisibleRange, compose_sticky, window,
};

use crate::smooth::SmoothScroll;
use crate::{
    ListFrame, RenderPlan, RenderedRow, ScrollAnchor, ScrollBehavior, VirtualListOptions,
    anchor_offset, capture_first_visible_anchor,
};

/// What [`VirtualList::tick`] asks of the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    /// Write this offset to the native scroll container. The container's resulting scroll
    /// events must be fed back through [`VirtualList::on_scroll_event`].
    pub scroll_to: Option<f64>,
    /// The list settled from scrolling to idle on this tick.
    pub became_idle: bool,
}

/// A framework-neutral virtual list component.
///
/// It owns the item collection, the host callbacks and one [`ScrollStateMachine`], and holds no
/// UI objects. Hosts drive it by calling:
/// - `on_scroll_event` / `on_scroll` for every native scroll event,
/// - `tick(now_ms)` each frame or timer wakeup (idle debouncing, smooth scrolling),
/// - `render(render_item)` to get the rows to draw.
///
/// Programmatic scrolling never touches the viewport state directly: `tick` hands the host an
/// offset to write to its container, and the container's scroll events flow back through
/// `on_scroll_event` exactly like user scrolling.
///
/// Nothing runs in the background: the idle timer is a deadline polled by `tick`, so dropping
/// the list is all the teardown it needs.
pub struct VirtualList<S: ItemSource, K = String> {
    options: VirtualListOptions<S::Item, K>,
    items: S,
    loading: bool,
    scroll: ScrollStateMachine,
    smooth: Option<SmoothScroll>,
    pending_jump: Option<f64>,
    scroll_request: Option<(usize, Align)>,
}

impl<S: ItemSource, K> VirtualList<S, K> {
    pub fn new(items: S, options: VirtualListOptions<S::Item, K>) -> Self {
        vdebug!(
            count = items.len(),
            item_height = options.list.geometry.item_height,
            container_height = options.list.geometry.container_height,
            overscan = options.list.geometry.overscan,
            "VirtualList::new"
        );
        Self {
            scroll: ScrollStateMachine::new(&options.list),
            options,
            items,
            loading: false,
            smooth: None,
            pending_jump: None,
            scroll_request: None,
        }
    }

    pub fn options(&self) -> &VirtualListOptions<S::Item, K> {
        &self.options
    }

    pub fn set_options(&mut self, options: VirtualListOptions<S::Item, K>) {
        self.scroll.set_options(&options.list);
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualListOptions<S::Item, K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Container resize.
    pub fn set_container_height(&mut self, container_height: f64) {
        self.options.list.geometry.container_height = container_height;
    }

    pub fn set_sticky_indices(&mut self, sticky_indices: impl IntoIterator<Item = usize>) {
        self.options.sticky_indices = sticky_indices.into_iter().collect();
    }

    pub fn items(&self) -> &S {
        &self.items
    }

    /// Replaces the item collection, e.g. when a new page of data arrives.
    ///
    /// Every replacement starts a new [`Generation`]: the end-reached latch resets and a pending
    /// idle transition is cancelled. The scroll offset is kept.
    pub fn set_items(&mut self, items: S) -> Generation {
        vdebug!(
            prev = self.items.len(),
            next = items.len(),
            "VirtualList::set_items"
        );
        self.items = items;
        self.scroll.advance_generation()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn generation(&self) -> Generation {
        self.scroll.generation()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn geometry(&self) -> Geometry {
        self.options.list.geometry
    }

    pub fn total_height(&self) -> f64 {
        self.geometry().total_height(self.items.len())
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll.scroll_top()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_scrolling()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll.scroll_direction()
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.scroll.viewport_state()
    }

    /// When the next idle transition is due, for hosts that schedule their own wakeups.
    pub fn idle_deadline(&self) -> Option<u64> {
        self.scroll.idle_deadline()
    }

    /// The overscanned range of rows to materialize.
    pub fn visible_range(&self) -> VisibleRange {
        self.geometry()
            .visible_range(self.scroll.scroll_top(), self.items.len())
    }

    /// Rows on screen right now, without overscan.
    pub fn viewport_range(&self) -> VisibleRange {
        self.geometry()
            .viewport_range(self.scroll.scroll_top(), self.items.len())
    }

    /// Feeds one native scroll event.
    ///
    /// Fires `on_scroll` every time and `on_end_reached` at most once per generation. An event
    /// that does not echo the running smooth scroll is user input and cancels it. A jump still
    /// queued for the next `tick` is dropped: the user's scroll wins.
    pub fn on_scroll_event(&mut self, event: ScrollEvent, now_ms: u64) -> ScrollOutcome {
        let is_user_input = self
            .smooth
            .as_mut()
            .is_some_and(|smooth| !smooth.accept_echo(event.scroll_top));
        if is_user_input {
            vtrace!(scroll_top = event.scroll_top, "user scroll cancels smooth scroll");
            self.smooth = None;
        }
        if let Some(_offset) = self.pending_jump.take() {
            vtrace!(jump = _offset, "user scroll drops queued jump");
        }

        let outcome = self.scroll.on_scroll(event, now_ms);

        if let Some(cb) = &self.options.on_scroll {
            cb(outcome.scroll_top);
        }
        if outcome.end_reached {
            vdebug!(
                generation = self.scroll.generation().0,
                count = self.items.len(),
                "on_end_reached"
            );
            if let Some(cb) = &self.options.on_end_reached {
                cb();
            }
        }
        outcome
    }

    /// Same as `on_scroll_event`, with client and scroll height derived from the geometry.
    pub fn on_scroll(&mut self, scroll_top: f64, now_ms: u64) -> ScrollOutcome {
        let g = self.geometry();
        let event = ScrollEvent::new(
            scroll_top,
            g.container_height,
            self.total_height().max(g.container_height),
        );
        self.on_scroll_event(event, now_ms)
    }

    /// Advances timers: pending jumps, smooth scrolling and idle debouncing.
    pub fn tick(&mut self, now_ms: u64) -> Tick {
        let scroll_to = if let Some(offset) = self.pending_jump.take() {
            Some(offset)
        } else if let Some(smooth) = &mut self.smooth {
            let offset = smooth.advance(now_ms);
            if smooth.is_done(now_ms) {
                self.smooth = None;
            }
            Some(offset)
        } else {
            None
        };

        Tick {
            scroll_to,
            became_idle: self.scroll.poll_idle(now_ms),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.smooth.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.smooth = None;
    }

    /// Starts scrolling row `index` to `align`.
    ///
    /// Returns the clamped target offset, or `None` (and does nothing) when `index` is out of
    /// bounds. The movement itself is delivered through [`Self::tick`].
    pub fn scroll_to_item(&mut self, index: usize, align: Align, now_ms: u64) -> Option<f64> {
        let count = self.items.len();
        let Some(target) = self.geometry().scroll_offset_for_index(index, align, count) else {
            vdebug!(index, count, "scroll_to_item: index out of bounds, ignored");
            return None;
        };
        vtrace!(index, ?align, target, "scroll_to_item");

        match self.options.scroll_behavior {
            ScrollBehavior::Instant => {
                self.cancel_animation();
                self.pending_jump = Some(target);
            }
            ScrollBehavior::Smooth {
                duration_ms,
                easing,
                echo_tolerance_px,
            } => {
                self.pending_jump = None;
                match &mut self.smooth {
                    Some(smooth) => {
                        smooth.retarget(now_ms, target, duration_ms, easing, echo_tolerance_px);
                    }
                    None => {
                        self.smooth = Some(SmoothScroll::start(
                            self.scroll.scroll_top(),
                            target,
                            now_ms,
                            duration_ms,
                            easing,
                            echo_tolerance_px,
                        ));
                    }
                }
            }
        }
        Some(target)
    }

    /// The `scroll_to_index` prop: call with the host's current value on every render.
    ///
    /// A request fires when it differs from the last one that fired, using the configured
    /// `scroll_to_alignment`. Out-of-bounds requests are ignored without being remembered, so
    /// the same request fires once the data catches up. `None` clears the request.
    pub fn set_scroll_to_index(&mut self, index: Option<usize>, now_ms: u64) -> Option<f64> {
        let Some(index) = index else {
            self.scroll_request = None;
            return None;
        };
        let request = (index, self.options.list.scroll_to_alignment);
        if self.scroll_request == Some(request) {
            return None;
        }
        let target = self.scroll_to_item(request.0, request.1, now_ms)?;
        self.scroll_request = Some(request);
        Some(target)
    }

    /// Captures the row at the top of the viewport by key.
    pub fn capture_anchor(&self) -> Option<ScrollAnchor<K>> {
        let key = &self.options.key_extractor;
        capture_first_visible_anchor(
            &self.items,
            &self.options.list.geometry,
            self.scroll.scroll_top(),
            |item, index| key(item, index),
        )
    }

    /// Queues a jump that puts `anchor` back where it was captured.
    ///
    /// Call after `set_items` with a `key_to_index` mapping for the new collection. Returns the
    /// queued offset, or `None` when the anchored item is gone.
    pub fn restore_anchor(
        &mut self,
        anchor: &ScrollAnchor<K>,
        key_to_index: impl FnMut(&K) -> Option<usize>,
    ) -> Option<f64> {
        let offset = anchor_offset(
            anchor,
            &self.options.list.geometry,
            self.items.len(),
            key_to_index,
        )?;
        self.cancel_animation();
        self.pending_jump = Some(offset);
        Some(offset)
    }

    /// Plans the current frame.
    ///
    /// `render_item(item, index, is_visible)` is called once per sticky row (with
    /// `is_visible = true`), then once per windowed row.
    pub fn render<R>(
        &self,
        mut render_item: impl FnMut(&S::Item, usize, bool) -> R,
    ) -> RenderPlan<K, R> {
        let count = self.items.len();
        if count == 0 && !self.loading {
            return RenderPlan::Empty;
        }

        let g = self.geometry();
        let scroll_top = self.scroll.scroll_top();
        let key = &self.options.key_extractor;

        let sticky = compose_sticky(&self.options.sticky_indices, &self.items, |item, index| {
            key(item, index)
        })
        .into_iter()
        .enumerate()
        .map(|(slot, s)| RenderedRow {
            content: render_item(s.item, s.index, true),
            key: s.key,
            index: s.index,
            top: window::item_top(slot, g.item_height),
            is_visible: true,
        })
        .collect();

        let range = g.visible_range(scroll_top, count);
        let on_screen = g.viewport_range(scroll_top, count);
        let mut rows = Vec::with_capacity(range.len());
        for index in range.indices() {
            let Some(item) = self.items.get(index) else {
                continue;
            };
            let is_visible = on_screen.contains(index);
            rows.push(RenderedRow {
                key: key(item, index),
                index,
                top: window::item_top(index, g.item_height),
                is_visible,
                content: render_item(item, index, is_visible),
            });
        }

        RenderPlan::List(ListFrame {
            total_height: g.total_height(count),
            window: range,
            sticky,
            rows,
            loading: self.loading,
        })
    }
}

impl<S, K> core::fmt::Debug for VirtualList<S, K>
where
    S: ItemSource,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualList")
            .field("options", &self.options)
            .field("item_count", &self.items.len())
            .field("loading", &self.loading)
            .field("scroll", &self.scroll)
            .field("smooth", &self.smooth)
            .field("pending_jump", &self.pending_jump)
            .finish_non_exhaustive()
    }
}
