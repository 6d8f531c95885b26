//! Timer Queue - cooperative timeouts, intervals and debouncing
//!
//! All timing runs on the page's single logical thread. Time is virtual:
//! the host advances the clock and due timers are popped in deadline order
//! (ties in scheduling order). Nothing runs between pops, so a handler sees
//! a consistent world.
//!
//! # Pattern
//!
//! - `set_timeout` - fire once after a delay
//! - `set_interval` - fire every period until cleared; re-armed *before*
//!   the handler sees it, so the handler may clear its own interval
//! - [`Debouncer`] - cancel-and-reschedule, one firing per quiet window
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use spark_carousel::timer::Scheduler;
//!
//! let mut timers = Scheduler::new();
//! let id = timers.set_interval(Duration::from_millis(100), "tick");
//!
//! let mut fired = 0;
//! let until = timers.now() + Duration::from_millis(350);
//! while let Some((_, task)) = timers.pop_due(until) {
//!     assert_eq!(task, "tick");
//!     fired += 1;
//! }
//! assert_eq!(fired, 3);
//! timers.clear(id);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    task: T,
    period: Option<Duration>,
}

/// Deadline-ordered timer queue over a virtual clock.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), Entry<T>>,
    keys: HashMap<TimerId, (Duration, u64)>,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            next_id: 0,
            queue: BTreeMap::new(),
            keys: HashMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once, `delay` from now.
    pub fn set_timeout(&mut self, delay: Duration, task: T) -> TimerId {
        let id = self.allocate_id();
        self.insert(self.now + delay, Entry { id, task, period: None });
        id
    }

    /// Run `task` every `period` until cleared.
    ///
    /// A zero period is bumped to one millisecond so the queue always
    /// makes progress.
    pub fn set_interval(&mut self, period: Duration, task: T) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        let id = self.allocate_id();
        self.insert(
            self.now + period,
            Entry {
                id,
                task,
                period: Some(period),
            },
        );
        id
    }

    /// Cancel a timer. Returns false if it already fired or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        match self.keys.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.keys.contains_key(&id)
    }

    /// Number of pending timers.
    pub fn active_count(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the next timer, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the next timer due at or before `until`, moving the clock to its
    /// deadline. Returns `None` (and moves the clock to `until`) when
    /// nothing else is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let key = match self.queue.keys().next() {
            Some(key) if key.0 <= until => *key,
            _ => {
                self.now = self.now.max(until);
                return None;
            }
        };

        let entry = self.queue.remove(&key)?;
        self.keys.remove(&entry.id);
        self.now = self.now.max(key.0);

        if let Some(period) = entry.period {
            self.insert(
                key.0 + period,
                Entry {
                    id: entry.id,
                    task: entry.task.clone(),
                    period: Some(period),
                },
            );
        }
        Some((entry.id, entry.task))
    }

    fn allocate_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, deadline: Duration, entry: Entry<T>) {
        let key = (deadline, self.next_seq);
        self.next_seq += 1;
        self.keys.insert(entry.id, key);
        self.queue.insert(key, entry);
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// DEBOUNCER
// =============================================================================

/// Collapses bursts of calls into one timer firing after `delay` of quiet.
///
/// Every [`call`](Self::call) cancels the pending timer and schedules a new
/// one. The owner routes the firing back through [`fired`](Self::fired).
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<TimerId>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Restart the quiet window.
    pub fn call<T: Clone>(&mut self, timers: &mut Scheduler<T>, task: T) -> TimerId {
        self.cancel(timers);
        let id = timers.set_timeout(self.delay, task);
        self.pending = Some(id);
        id
    }

    /// Consume a firing. False for stale timer ids.
    pub fn fired(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel<T: Clone>(&mut self, timers: &mut Scheduler<T>) {
        if let Some(id) = self.pending.take() {
            timers.clear(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(
        timers: &mut Scheduler<&'static str>,
        until: Duration,
    ) -> Vec<(Duration, &'static str)> {
        let mut fired = Vec::new();
        while let Some((_, task)) = timers.pop_due(until) {
            fired.push((timers.now(), task));
        }
        fired
    }

    #[test]
    fn test_timeouts_fire_in_deadline_order() {
        let mut timers = Scheduler::new();
        timers.set_timeout(ms(300), "late");
        timers.set_timeout(ms(100), "early");
        timers.set_timeout(ms(100), "early-second");

        let fired = drain(&mut timers, ms(1000));
        assert_eq!(
            fired,
            vec![(ms(100), "early"), (ms(100), "early-second"), (ms(300), "late")]
        );
        assert_eq!(timers.now(), ms(1000));
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_not_due_yet() {
        let mut timers = Scheduler::new();
        timers.set_timeout(ms(500), "x");
        assert!(drain(&mut timers, ms(499)).is_empty());
        assert_eq!(timers.now(), ms(499));
        assert_eq!(drain(&mut timers, ms(500)), vec![(ms(500), "x")]);
    }

    #[test]
    fn test_interval_rearms_and_clears() {
        let mut timers = Scheduler::new();
        let id = timers.set_interval(ms(100), "tick");

        assert_eq!(drain(&mut timers, ms(250)).len(), 2);
        assert!(timers.is_active(id));

        assert!(timers.clear(id));
        assert!(!timers.clear(id));
        assert!(drain(&mut timers, ms(1000)).is_empty());
    }

    #[test]
    fn test_interval_can_clear_itself_mid_fire() {
        let mut timers = Scheduler::new();
        let id = timers.set_interval(ms(100), "tick");
        let (fired_id, _) = timers.pop_due(ms(100)).unwrap();
        assert_eq!(fired_id, id);
        assert!(timers.clear(fired_id));
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_cleared_timeout_never_fires() {
        let mut timers = Scheduler::new();
        let id = timers.set_timeout(ms(10), "x");
        assert!(timers.clear(id));
        assert!(!timers.is_active(id));
        assert!(drain(&mut timers, ms(100)).is_empty());
    }

    #[test]
    fn test_debouncer_collapses_burst() {
        let mut timers = Scheduler::new();
        let mut debounce = Debouncer::new(ms(250));

        debounce.call(&mut timers, "resize");
        drain(&mut timers, ms(100));
        debounce.call(&mut timers, "resize");
        drain(&mut timers, ms(200));
        let last = debounce.call(&mut timers, "resize");
        assert_eq!(timers.active_count(), 1);

        // Quiet window restarts at 200ms: nothing before 450ms
        assert!(drain(&mut timers, ms(449)).is_empty());
        let (id, _) = timers.pop_due(ms(450)).unwrap();
        assert_eq!(id, last);
        assert!(debounce.fired(id));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_debouncer_ignores_stale_ids() {
        let mut timers: Scheduler<&str> = Scheduler::new();
        let mut debounce = Debouncer::new(ms(250));
        let first = debounce.call(&mut timers, "a");
        debounce.call(&mut timers, "a");
        assert!(!debounce.fired(first));
        assert!(debounce.is_pending());

        debounce.cancel(&mut timers);
        assert_eq!(timers.active_count(), 0);
    }
}
