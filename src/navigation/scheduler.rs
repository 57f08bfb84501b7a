//! Cooperative timer and frame-callback queue driven by a host clock.
//!
//! Nothing here sleeps or spawns: the host calls [`Scheduler::begin_frame`]
//! once per display refresh and runs whatever tasks come back. Timers fire on
//! the first frame at or after their due time; frame callbacks fire on the
//! next frame after they were requested.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Trigger {
    At(f64),
    NextFrame,
}

#[derive(Debug)]
struct Entry<T> {
    handle: TaskHandle,
    trigger: Trigger,
    task: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: f64,
    next_id: u64,
    pending: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn set_timeout(&mut self, delay_ms: f64, task: T) -> TaskHandle {
        let due = self.now + delay_ms.max(0.0);
        self.push(Trigger::At(due), task)
    }

    pub fn request_frame(&mut self, task: T) -> TaskHandle {
        self.push(Trigger::NextFrame, task)
    }

    /// Returns false if the task already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.handle != handle);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advances the clock and collects this frame's work: due timers in due
    /// order, then every frame callback requested before this call.
    pub fn begin_frame(&mut self, now: f64) -> Vec<T> {
        if now > self.now {
            self.now = now;
        }

        let mut timers = self.drain_where(|t| matches!(t, Trigger::At(due) if *due <= now));
        timers.sort_by(|a, b| due_of(a).total_cmp(&due_of(b)).then(a.handle.cmp(&b.handle)));

        let frames = self.drain_where(|t| matches!(t, Trigger::NextFrame));

        timers
            .into_iter()
            .chain(frames)
            .map(|e| e.task)
            .collect()
    }

    /// Timers that became due while this frame's tasks were running.
    pub fn take_due_timers(&mut self) -> Vec<T> {
        let now = self.now;
        let mut timers = self.drain_where(|t| matches!(t, Trigger::At(due) if *due <= now));
        timers.sort_by(|a, b| due_of(a).total_cmp(&due_of(b)).then(a.handle.cmp(&b.handle)));
        timers.into_iter().map(|e| e.task).collect()
    }

    fn push(&mut self, trigger: Trigger, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            handle,
            trigger,
            task,
        });
        handle
    }

    fn drain_where(&mut self, pred: impl Fn(&Trigger) -> bool) -> Vec<Entry<T>> {
        let mut taken = Vec::new();
        let mut kept = Vec::with_capacity(self.pending.len());
        for entry in self.pending.drain(..) {
            if pred(&entry.trigger) {
                taken.push(entry);
            } else {
                kept.push(entry);
            }
        }
        self.pending = kept;
        taken
    }
}

fn due_of<T>(entry: &Entry<T>) -> f64 {
    match entry.trigger {
        Trigger::At(due) => due,
        Trigger::NextFrame => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_in_due_order() {
        let mut s = Scheduler::new();
        s.set_timeout(50.0, "late");
        s.set_timeout(10.0, "early");
        assert!(s.begin_frame(5.0).is_empty());
        assert_eq!(s.begin_frame(60.0), vec!["early", "late"]);
        assert!(s.is_idle());
    }

    #[test]
    fn frame_requested_mid_frame_waits_for_next() {
        let mut s = Scheduler::new();
        s.request_frame(1);
        assert_eq!(s.begin_frame(16.0), vec![1]);
        s.request_frame(2);
        assert!(s.take_due_timers().is_empty());
        assert_eq!(s.begin_frame(32.0), vec![2]);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let mut s = Scheduler::new();
        let h = s.set_timeout(10.0, "gone");
        assert!(s.cancel(h));
        assert!(!s.cancel(h));
        assert!(s.begin_frame(100.0).is_empty());
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut s: Scheduler<()> = Scheduler::new();
        s.begin_frame(100.0);
        s.begin_frame(40.0);
        assert_eq!(s.now(), 100.0);
    }
}
