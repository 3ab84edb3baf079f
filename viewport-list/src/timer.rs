/// A single cancel-and-restart deadline.
///
/// The host's clock drives it: `arm` records a deadline, `fire` reports (once) that the deadline
/// has passed. Re-arming replaces the previous deadline, so at most one is ever pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdleTimer {
    deadline_ms: Option<u64>,
}

impl IdleTimer {
    pub fn new() -> Self {
        Self { deadline_ms: None }
    }

    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.cancel();
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns `true` and disarms if the deadline has passed at `now_ms`.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
