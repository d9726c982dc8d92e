/// A cancellable repeating deadline, driven by the host's event loop.
///
/// The dial starts the ticker when a gesture begins and stops it when the
/// gesture ends, so no recurring work outlives a gesture. The host asks
/// [`Ticker::next_due_ms`] when to call back and then calls the dial's
/// `tick`, which fires the ticker; firing rearms it one period out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticker {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl Ticker {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            next_due_ms: None,
        }
    }

    /// Arms the ticker to fire immediately.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms);
    }

    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// True when the deadline has arrived; rearms for the following period.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms + self.period_ms);
                true
            }
            _ => false,
        }
    }
}
