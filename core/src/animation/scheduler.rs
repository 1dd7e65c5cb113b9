use std::collections::BTreeMap;

/// Handle for a repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Source of repeating timers. The browser backs this with real intervals;
/// tests drive [`ManualScheduler`] by hand.
pub trait Scheduler {
    fn schedule_repeating(&mut self, interval_ms: u32) -> TimerId;

    /// Cancelling an unknown or already-cancelled timer is a no-op
    fn cancel(&mut self, timer: TimerId);
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    interval_ms: u64,
    next_due: u64,
}

/// Logical-time scheduler. Nothing fires until [`advance`](Self::advance)
/// is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    timers: BTreeMap<TimerId, Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// Moves the clock forward and returns each firing in time order. A
    /// timer due several times within the window appears once per firing.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerId> {
        let target = self.now_ms + ms;
        let mut fired = Vec::new();

        loop {
            let due = self
                .timers
                .iter()
                .filter(|(_, pending)| pending.next_due <= target)
                .min_by_key(|(id, pending)| (pending.next_due, **id))
                .map(|(id, _)| *id);

            let Some(id) = due else { break };
            if let Some(pending) = self.timers.get_mut(&id) {
                self.now_ms = pending.next_due;
                pending.next_due += pending.interval_ms;
            }
            fired.push(id);
        }

        self.now_ms = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, interval_ms: u32) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let interval_ms = u64::from(interval_ms.max(1));
        self.timers.insert(
            id,
            Pending {
                interval_ms,
                next_due: self.now_ms + interval_ms,
            },
        );
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.remove(&timer);
    }
}
