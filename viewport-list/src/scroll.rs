use crate::timer::IdleTimer;
use crate::window::clamp_scroll_top;
use crate::{
    Generation, ListOptions, ScrollDirection, ScrollEvent, ScrollOutcome, ScrollPhase,
    ViewportState,
};

/// Tracks scroll offset, scrolling/idle phase and direction from a stream of scroll events.
///
/// Transitions:
/// - any scroll event: `Idle | Scrolling -> Scrolling`, idle timer restarted;
/// - idle timer fires with no event in between: `Scrolling -> Idle`, direction cleared.
///
/// It also owns the end-reached latch. The latch is keyed by [`Generation`]: it is set at most
/// once per generation and implicitly cleared when [`Self::advance_generation`] starts a new one.
///
/// Nothing here clamps `scroll_top` against the content height; the native container does that.
#[derive(Clone, Debug)]
pub struct ScrollStateMachine {
    scroll_top: f64,
    phase: ScrollPhase,
    direction: Option<ScrollDirection>,
    idle_timer: IdleTimer,
    idle_delay_ms: u64,
    end_reached_threshold: f64,
    generation: Generation,
    end_reached_latch: Option<Generation>,
}

impl ScrollStateMachine {
    pub fn new(options: &ListOptions) -> Self {
        Self {
            scroll_top: 0.0,
            phase: ScrollPhase::Idle,
            direction: None,
            idle_timer: IdleTimer::new(),
            idle_delay_ms: options.idle_delay_ms,
            end_reached_threshold: options.end_reached_threshold,
            generation: Generation::default(),
            end_reached_latch: None,
        }
    }

    /// Picks up a changed threshold or idle delay. Live state is kept.
    pub fn set_options(&mut self, options: &ListOptions) {
        self.idle_delay_ms = options.idle_delay_ms;
        self.end_reached_threshold = options.end_reached_threshold;
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_scrolling(&self) -> bool {
        self.phase == ScrollPhase::Scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn end_reached_latched(&self) -> bool {
        self.end_reached_latch == Some(self.generation)
    }

    /// When the pending idle transition is due, if any. Hosts with their own timers can
    /// schedule a wakeup for this instant and then call [`Self::poll_idle`].
    pub fn idle_deadline(&self) -> Option<u64> {
        self.idle_timer.deadline_ms()
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            scroll_top: self.scroll_top,
            is_scrolling: self.is_scrolling(),
            scroll_direction: self.direction,
        }
    }

    /// Applies one native scroll event.
    pub fn on_scroll(&mut self, event: ScrollEvent, now_ms: u64) -> ScrollOutcome {
        let scroll_top = clamp_scroll_top(event.scroll_top);
        let direction = if scroll_top > self.scroll_top {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        };
        vtrace!(scroll_top, now_ms, ?direction, "on_scroll");

        self.scroll_top = scroll_top;
        self.direction = Some(direction);
        self.phase = ScrollPhase::Scrolling;
        self.idle_timer.arm(now_ms, self.idle_delay_ms);

        let end_reached = self.check_end_reached(scroll_top, &event);

        ScrollOutcome {
            scroll_top,
            direction,
            end_reached,
        }
    }

    fn check_end_reached(&mut self, scroll_top: f64, event: &ScrollEvent) -> bool {
        if self.end_reached_latched() {
            return false;
        }
        if !(event.scroll_height > 0.0) {
            return false;
        }
        let fraction = (scroll_top + event.client_height) / event.scroll_height;
        if fraction < self.end_reached_threshold {
            return false;
        }
        vdebug!(
            fraction,
            generation = self.generation.0,
            "end reached; latching until the next generation"
        );
        self.end_reached_latch = Some(self.generation);
        true
    }

    /// Settles to idle if the quiet window has elapsed.
    ///
    /// Returns `true` exactly once per quiet window: on the call that performs the transition.
    pub fn poll_idle(&mut self, now_ms: u64) -> bool {
        if !self.idle_timer.fire(now_ms) {
            return false;
        }
        vtrace!(now_ms, "scroll idle");
        self.settle();
        true
    }

    /// Starts a new item-collection generation.
    ///
    /// Clears the end-reached latch and cancels a pending idle transition. The scroll offset is
    /// kept so new pages append seamlessly under the user's current position.
    pub fn advance_generation(&mut self) -> Generation {
        self.generation = self.generation.next();
        vdebug!(generation = self.generation.0, "advance_generation");
        self.cancel();
        self.generation
    }

    /// Teardown: cancels the idle timer and settles to idle.
    pub fn cancel(&mut self) {
        self.idle_timer.cancel();
        self.settle();
    }

    fn settle(&mut self) {
        self.phase = ScrollPhase::Idle;
        self.direction = None;
    }
}
