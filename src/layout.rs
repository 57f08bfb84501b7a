use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Bounding boxes of the rendered faces, keyed by face index.
///
/// The rendering layer registers boxes here on layout and resize so scoring
/// can resolve a face without searching rendered output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceLayout {
    rects: Vec<Option<Rect>>,
}

impl FaceLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Square faces stacked vertically, `gap` apart.
    pub fn stacked(left: f64, top: f64, size: f64, gap: f64, count: usize) -> Self {
        let mut layout = Self::new();
        for i in 0..count {
            let y = top + i as f64 * (size + gap);
            layout.register(i, Rect::new(left, y, size, size));
        }
        layout
    }

    pub fn register(&mut self, face_index: usize, rect: Rect) {
        if self.rects.len() <= face_index {
            self.rects.resize(face_index + 1, None);
        }
        self.rects[face_index] = Some(rect);
    }

    pub fn get(&self, face_index: usize) -> Option<Rect> {
        self.rects.get(face_index).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.iter().all(Option::is_none)
    }

    /// Vertical pitch between face 0 and face 1, if both are known.
    pub fn face_pitch(&self) -> Option<f64> {
        match (self.get(0), self.get(1)) {
            (Some(a), Some(b)) => Some((b.top - a.top).abs()),
            (Some(a), None) => Some(a.height),
            _ => None,
        }
    }
}
