use serde::{Deserialize, Serialize};

/// Width and height of a face in logical units, whatever its on-screen size.
pub const LOGICAL_SPAN: f64 = 200.0;
/// Outer radius of the scoring area in logical units.
pub const LOGICAL_RADIUS: f64 = LOGICAL_SPAN / 2.0;
pub const FACE_CENTER: LocalPoint = LocalPoint {
    x: LOGICAL_RADIUS,
    y: LOGICAL_RADIUS,
};

/// Axis-aligned box in client coordinates (same space as pointer events).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Edges are inclusive. Degenerate boxes contain nothing.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// A point on the face in logical units: (0,0) top-left, (200,200) bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maps a client-space pointer into logical face units.
    pub fn from_client(rect: &Rect, px: f64, py: f64) -> Self {
        Self {
            x: (px - rect.left) / rect.width * LOGICAL_SPAN,
            y: (py - rect.top) / rect.height * LOGICAL_SPAN,
        }
    }

    pub fn from_pct(x_pct: f64, y_pct: f64) -> Self {
        Self {
            x: x_pct / 100.0 * LOGICAL_SPAN,
            y: y_pct / 100.0 * LOGICAL_SPAN,
        }
    }

    /// Normalized position in [0,100] on both axes, clamped for edge-of-box rounding.
    pub fn to_pct(self) -> (f64, f64) {
        (
            (self.x / LOGICAL_SPAN * 100.0).clamp(0.0, 100.0),
            (self.y / LOGICAL_SPAN * 100.0).clamp(0.0, 100.0),
        )
    }

    pub fn distance_from_center(self) -> f64 {
        let dx = self.x - FACE_CENTER.x;
        let dy = self.y - FACE_CENTER.y;
        (dx * dx + dy * dy).sqrt()
    }
}
