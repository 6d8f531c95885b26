//! Autoplay timer.
//!
//! At most one interval per carousel: `start` always clears the previous
//! timer before arming a new one, so hover enter/leave bursts and drag
//! restarts never stack advances.

use std::time::Duration;

use crate::timer::{Scheduler, TimerId};

#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    interval: Option<Duration>,
    timer: Option<TimerId>,
}

impl Autoplay {
    /// `None` disables autoplay; `start` is then a no-op.
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            timer: None,
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether `id` is this autoplay's timer.
    pub fn owns(&self, id: TimerId) -> bool {
        self.timer == Some(id)
    }

    /// (Re)arm the interval. Returns false when autoplay is disabled.
    pub fn start<T: Clone>(&mut self, timers: &mut Scheduler<T>, task: T) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        self.stop(timers);
        self.timer = Some(timers.set_interval(interval, task));
        true
    }

    pub fn stop<T: Clone>(&mut self, timers: &mut Scheduler<T>) {
        if let Some(id) = self.timer.take() {
            timers.clear(id);
        }
    }
}
