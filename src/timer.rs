use std::time::Duration;

/// Handle of one scheduled repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

pub trait Timer {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

impl<T: Timer + ?Sized> Timer for &mut T {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        (**self).schedule_repeating(period)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: TimerId,
    period: Duration,
    elapsed: Duration,
}

/// Timer driven by the host's frame loop: nothing fires until `advance` is
/// called with the time that passed since the previous frame.
#[derive(Debug, Default)]
pub struct FrameTimer {
    entries: Vec<Entry>,
    next_id: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward and returns the ids that fired, in firing order.
    /// A timer whose period elapsed several times fires once per period.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        for entry in self.entries.iter_mut() {
            entry.elapsed += dt;
            if entry.period.is_zero() {
                continue;
            }
            while entry.elapsed >= entry.period {
                entry.elapsed -= entry.period;
                fired.push(entry.id);
            }
        }
        fired
    }

    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Time left before `id` fires next.
    pub fn remaining(&self, id: TimerId) -> Option<Duration> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.period.saturating_sub(e.elapsed))
    }
}

impl Timer for FrameTimer {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.entries.push(Entry { id, period, elapsed: Duration::ZERO });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|e| e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_elapsed_period() {
        let mut timer = FrameTimer::new();
        let id = timer.schedule_repeating(Duration::from_millis(100));

        assert!(timer.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(timer.advance(Duration::from_millis(1)), vec![id]);
        assert_eq!(timer.advance(Duration::from_millis(250)), vec![id, id]);
        assert_eq!(timer.remaining(id), Some(Duration::from_millis(50)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = FrameTimer::new();
        let id = timer.schedule_repeating(Duration::from_millis(10));
        timer.cancel(id);

        assert_eq!(timer.active_count(), 0);
        assert!(timer.advance(Duration::from_secs(1)).is_empty());
        // cancelling twice is harmless
        timer.cancel(id);
    }

    #[test]
    fn ids_are_unique() {
        let mut timer = FrameTimer::new();
        let a = timer.schedule_repeating(Duration::from_millis(10));
        timer.cancel(a);
        let b = timer.schedule_repeating(Duration::from_millis(10));
        assert_ne!(a, b);
        assert!(timer.is_active(b));
        assert!(!timer.is_active(a));
    }

    #[test]
    fn zero_period_does_not_spin() {
        let mut timer = FrameTimer::new();
        timer.schedule_repeating(Duration::ZERO);
        assert!(timer.advance(Duration::from_millis(5)).is_empty());
    }
}
