//! Repeating timers.
//!
//! Ticks are plain closures so the slideshow can be driven either by a
//! browser interval or by hand from a frame loop or a test.

use std::time::Duration;

pub type Tick = Box<dyn FnMut()>;

/// Arms repeating tasks and hands back a handle for each one.
pub trait Scheduler {
    type Handle;

    fn every(&mut self, period: Duration, tick: Tick) -> Self::Handle;
}

/// Tracks elapsed time for one repeating task.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingTask {
    period: Duration,
    elapsed: Duration, // Time since the last tick
    fired: u64,        // Ticks run so far
}

impl RepeatingTask {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            fired: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Adds `dt` and returns how many periods completed.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            due += 1;
        }
        self.fired += due;
        due
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(usize);

/// Scheduler whose clock only moves when [`ManualScheduler::advance`] is called.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Vec<(RepeatingTask, Tick)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward, running every tick that came due in arming order.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        let mut ran = 0;
        for (task, tick) in self.tasks.iter_mut() {
            let due = task.advance(dt);
            for _ in 0..due {
                tick();
            }
            ran += due;
        }
        ran
    }

    pub fn task(&self, id: TaskId) -> Option<&RepeatingTask> {
        self.tasks.get(id.0).map(|(task, _)| task)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TaskId;

    fn every(&mut self, period: Duration, tick: Tick) -> TaskId {
        self.tasks.push((RepeatingTask::new(period), tick));
        TaskId(self.tasks.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn task_fires_once_per_period() {
        let mut task = RepeatingTask::new(Duration::from_millis(4000));
        assert_eq!(task.advance(Duration::from_millis(3999)), 0);
        assert_eq!(task.advance(Duration::from_millis(1)), 1);
        assert_eq!(task.advance(Duration::from_millis(8000)), 2);
        assert_eq!(task.fired(), 3);
    }

    #[test]
    fn zero_period_never_fires() {
        let mut task = RepeatingTask::new(Duration::ZERO);
        assert_eq!(task.advance(Duration::from_secs(10)), 0);
    }

    #[test]
    fn manual_scheduler_runs_due_ticks() {
        let count = Rc::new(Cell::new(0));
        let mut scheduler = ManualScheduler::new();
        let counter = count.clone();
        let id = scheduler.every(Duration::from_millis(100), Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(count.get(), 0);
        scheduler.advance(Duration::from_millis(260));
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.task(id).map(RepeatingTask::fired), Some(3));
    }
}
