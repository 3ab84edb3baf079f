/// Eased interpolation between two scroll offsets over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    /// A zero `duration_ms` is treated as one millisecond.
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Fraction of the duration elapsed at `now_ms`, within `0.0..=1.0`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms).min(self.duration_ms);
        elapsed as f64 / self.duration_ms as f64
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Offset at `now_ms`; exactly `to` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        (self.from + (self.to - self.from) * eased).max(0.0)
    }

    /// Heads for `to` from wherever the tween is at `now_ms`, keeping the path continuous.
    pub fn retarget(&mut self, now_ms: u64, to: f64, duration_ms: u64) {
        self.from = self.sample(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms.max(1);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress to eased progress. `t` is clamped to `0.0..=1.0`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
    }
}

/// A programmatic scroll in flight, and the offsets it has handed to the host.
///
/// Native scroll events arrive asynchronously, so the echo of a written offset can trail the
/// newest sample by several ticks. Every offset written since the host last reported the newest
/// sample lies within `pending_low..=pending_high`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SmoothScroll {
    tween: Tween,
    echo_tolerance_px: f64,
    pending_low: f64,
    pending_high: f64,
    latest: f64,
}

impl SmoothScroll {
    pub(crate) fn start(
        from: f64,
        to: f64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
        echo_tolerance_px: f64,
    ) -> Self {
        Self {
            tween: Tween::new(from, to, now_ms, duration_ms, easing),
            echo_tolerance_px: echo_tolerance_px.max(0.0),
            pending_low: from,
            pending_high: from,
            latest: from,
        }
    }

    /// Redirects the running scroll; offsets already written stay recognizable as echoes.
    pub(crate) fn retarget(
        &mut self,
        now_ms: u64,
        to: f64,
        duration_ms: u64,
        easing: Easing,
        echo_tolerance_px: f64,
    ) {
        self.tween.retarget(now_ms, to, duration_ms);
        self.tween.easing = easing;
        self.echo_tolerance_px = echo_tolerance_px.max(0.0);
    }

    /// Samples the tween and records the offset as written to the host.
    pub(crate) fn advance(&mut self, now_ms: u64) -> f64 {
        let offset = self.tween.sample(now_ms);
        self.pending_low = self.pending_low.min(offset);
        self.pending_high = self.pending_high.max(offset);
        self.latest = offset;
        offset
    }

    pub(crate) fn is_done(&self, now_ms: u64) -> bool {
        self.tween.is_done(now_ms)
    }

    /// Whether `scroll_top` is the container reporting an offset this scroll wrote.
    pub(crate) fn accept_echo(&mut self, scroll_top: f64) -> bool {
        let tol = self.echo_tolerance_px;
        if !(self.pending_low - tol..=self.pending_high + tol).contains(&scroll_top) {
            return false;
        }
        if (self.latest - tol..=self.latest + tol).contains(&scroll_top) {
            // Caught up.
            self.pending_low = self.latest;
            self.pending_high = self.latest;
        }
        true
    }
}
