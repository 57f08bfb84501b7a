use super::animation::ScrollAnimation;
use super::scheduler::{Scheduler, TaskHandle};
use crate::config::AnimationTiming;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavPhase {
    Idle,
    Animating(ScrollAnimation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavTask {
    AnimationFrame { generation: u64 },
    RestoreSnap { generation: u64 },
    RunQueued(usize),
    AutoAdvance(usize),
    ResetYield { frames_left: u8 },
    ResetGoTo,
}

/// Which stacked face is in view, and how the view moves between faces.
///
/// At most one transition is in flight. A request made while animating is
/// parked in a single queue slot (last write wins) and run shortly after the
/// current transition lands.
#[derive(Debug)]
pub struct FaceNavigator {
    face_count: usize,
    timing: AnimationTiming,
    active_face: usize,
    phase: NavPhase,
    snap_enabled: bool,
    queued: Option<usize>,
    scroll_offset: f64,
    face_height: f64,
    generation: u64,
    disposed: bool,
    scheduler: Scheduler<NavTask>,
    /// Pending debounced advance and the face it will go to.
    auto_advance: Option<(TaskHandle, usize)>,
    pending_reset: Option<TaskHandle>,
}

impl FaceNavigator {
    pub fn new(face_count: usize, timing: AnimationTiming) -> Self {
        Self {
            face_count: face_count.max(1),
            timing,
            active_face: 0,
            phase: NavPhase::Idle,
            snap_enabled: true,
            queued: None,
            scroll_offset: 0.0,
            face_height: 0.0,
            generation: 0,
            disposed: false,
            scheduler: Scheduler::new(),
            auto_advance: None,
            pending_reset: None,
        }
    }

    pub fn active_face(&self) -> usize {
        self.active_face
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, NavPhase::Animating(_))
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    pub fn queued_target(&self) -> Option<usize> {
        self.queued
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn face_count(&self) -> usize {
        self.face_count
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    /// True while any timer, frame callback or animation is outstanding.
    pub fn has_pending_work(&self) -> bool {
        !self.scheduler.is_idle() || self.is_animating()
    }

    /// Distance between the tops of consecutive faces in the scroll container.
    pub fn set_face_height(&mut self, height: f64) {
        if height.is_finite() && height >= 0.0 {
            self.face_height = height;
        }
    }

    pub fn face_offset(&self, face: usize) -> f64 {
        face as f64 * self.face_height
    }

    fn clamp_face(&self, face: usize) -> usize {
        face.min(self.face_count - 1)
    }

    /// The face the view is at, or heading to when a transition is running.
    pub fn destination_face(&self) -> usize {
        match self.phase {
            NavPhase::Animating(anim) => anim.to_face,
            NavPhase::Idle => self.active_face,
        }
    }

    pub fn go_to_face(&mut self, target: usize) {
        if self.disposed {
            return;
        }
        let target = self.clamp_face(target);

        if self.is_animating() {
            debug!(target, "transition in flight, queueing");
            self.queued = Some(target);
            return;
        }

        let now = self.scheduler.now();
        let anim = ScrollAnimation {
            from_face: self.active_face,
            to_face: target,
            from_offset: self.scroll_offset,
            to_offset: self.face_offset(target),
            start_ms: now,
            duration_ms: self.timing.scroll_duration_ms,
        };
        debug!(from = anim.from_face, to = target, "starting face transition");

        self.generation += 1;
        self.snap_enabled = false;
        self.phase = NavPhase::Animating(anim);
        self.scheduler.request_frame(NavTask::AnimationFrame {
            generation: self.generation,
        });
    }

    /// Debounced advance past `hit_face`. Requests inside the debounce window
    /// coalesce onto the furthest target, so quick hits on consecutive faces
    /// still land one past the last face hit.
    pub fn request_auto_advance(&mut self, hit_face: usize) {
        if self.disposed {
            return;
        }
        let mut target = self.clamp_face(hit_face.max(self.destination_face()) + 1);
        if let Some((handle, pending)) = self.auto_advance.take() {
            self.scheduler.cancel(handle);
            target = target.max(pending);
        }
        debug!(hit_face, target, "auto-advance requested");
        let handle = self
            .scheduler
            .set_timeout(self.timing.auto_advance_ms, NavTask::AutoAdvance(target));
        self.auto_advance = Some((handle, target));
    }

    /// Schedules the return to face 0 when an end is cleared.
    pub fn request_reset(&mut self) {
        if self.disposed {
            return;
        }
        if let Some((handle, _)) = self.auto_advance.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = self.pending_reset.take() {
            self.scheduler.cancel(handle);
        }
        debug!("new end, scheduling reset to face 0");
        self.pending_reset = Some(
            self.scheduler
                .request_frame(NavTask::ResetYield { frames_left: 2 }),
        );
    }

    /// Scroll events from the user; ignored while a transition owns the scroll position.
    pub fn on_user_scroll(&mut self, offset: f64) {
        if self.disposed || self.is_animating() || !offset.is_finite() {
            return;
        }
        self.scroll_offset = offset;
        if self.face_height > 0.0 {
            let nearest = (offset / self.face_height).round().max(0.0) as usize;
            self.active_face = self.clamp_face(nearest);
        }
    }

    /// Runs one display frame at host time `now`.
    pub fn frame(&mut self, now: f64) {
        if self.disposed {
            return;
        }
        let mut batch = self.scheduler.begin_frame(now);
        while !batch.is_empty() {
            for task in batch {
                self.run(task);
                if self.disposed {
                    return;
                }
            }
            batch = self.scheduler.take_due_timers();
        }
    }

    /// Stops all scheduled work. Later calls are no-ops.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.scheduler.cancel_all();
        self.auto_advance = None;
        self.pending_reset = None;
    }

    fn run(&mut self, task: NavTask) {
        match task {
            NavTask::AnimationFrame { generation } => self.step_animation(generation),
            NavTask::RestoreSnap { generation } => {
                if generation == self.generation && !self.is_animating() {
                    self.snap_enabled = true;
                }
            }
            NavTask::RunQueued(target) => self.go_to_face(target),
            NavTask::AutoAdvance(target) => {
                self.auto_advance = None;
                self.go_to_face(target);
            }
            NavTask::ResetYield { frames_left } => {
                self.pending_reset = Some(if frames_left > 1 {
                    self.scheduler.request_frame(NavTask::ResetYield {
                        frames_left: frames_left - 1,
                    })
                } else {
                    self.scheduler
                        .set_timeout(self.timing.reset_settle_ms, NavTask::ResetGoTo)
                });
            }
            NavTask::ResetGoTo => {
                self.pending_reset = None;
                self.go_to_face(0);
            }
        }
    }

    fn step_animation(&mut self, generation: u64) {
        let NavPhase::Animating(anim) = self.phase else {
            return;
        };
        if generation != self.generation {
            return;
        }

        let now = self.scheduler.now();
        self.scroll_offset = anim.offset_at(now);
        trace!(offset = self.scroll_offset, "animation frame");

        if anim.is_finished(now) {
            self.finish(anim);
        } else {
            self.scheduler
                .request_frame(NavTask::AnimationFrame { generation });
        }
    }

    fn finish(&mut self, anim: ScrollAnimation) {
        self.active_face = anim.to_face;
        self.scroll_offset = anim.to_offset;
        self.phase = NavPhase::Idle;
        debug!(face = self.active_face, "face transition complete");

        self.scheduler.set_timeout(
            self.timing.snap_restore_ms,
            NavTask::RestoreSnap {
                generation: self.generation,
            },
        );

        if let Some(next) = self.queued.take() {
            if next != self.active_face {
                self.scheduler
                    .set_timeout(self.timing.queue_delay_ms, NavTask::RunQueued(next));
            }
        }
    }
}
