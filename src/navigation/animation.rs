/// Ease-out cubic: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Scroll from one face to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from_face: usize,
    pub to_face: usize,
    pub from_offset: f64,
    pub to_offset: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    /// Linear progress in [0,1].
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn offset_at(&self, now: f64) -> f64 {
        let eased = ease_out_cubic(self.progress(now));
        self.from_offset + (self.to_offset - self.from_offset) * eased
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
