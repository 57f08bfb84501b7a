use super::rings::RingScheme;
use super::types::ArrowInput;
use crate::geometry::{LocalPoint, Rect, LOGICAL_RADIUS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub score: ArrowInput,
    pub x_pct: f64,
    pub y_pct: f64,
    /// Distance from the centre in logical units.
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOutcome {
    Hit(Hit),
    OutOfBounds,
}

impl ScoreOutcome {
    pub fn hit(self) -> Option<Hit> {
        match self {
            Self::Hit(h) => Some(h),
            Self::OutOfBounds => None,
        }
    }
}

/// Maps a client-space pointer on a face's bounding box to a score.
///
/// Pointers outside the box are rejected. Inside the box but beyond the
/// outermost ring scores a miss.
pub fn score_at(px: f64, py: f64, face: &Rect, scheme: &RingScheme) -> ScoreOutcome {
    if !face.contains(px, py) {
        return ScoreOutcome::OutOfBounds;
    }

    let local = LocalPoint::from_client(face, px, py);
    let (x_pct, y_pct) = local.to_pct();

    ScoreOutcome::Hit(Hit {
        score: score_local(local, scheme),
        x_pct,
        y_pct,
        distance: local.distance_from_center(),
    })
}

/// Pure ring lookup on logical coordinates.
pub fn score_local(point: LocalPoint, scheme: &RingScheme) -> ArrowInput {
    score_distance(point.distance_from_center(), scheme)
}

pub fn score_distance(dist: f64, scheme: &RingScheme) -> ArrowInput {
    // Exact radius must not round into the outer ring.
    if dist >= LOGICAL_RADIUS {
        return ArrowInput::Miss;
    }
    let ring_index = (dist / scheme.ring_width()).floor();
    if !ring_index.is_finite() || ring_index < 0.0 {
        return ArrowInput::Miss;
    }
    scheme.score_for_ring(ring_index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_unit_box_is_inner_ten() {
        let face = Rect::new(0.0, 0.0, 1.0, 1.0);
        let hit = score_at(0.5, 0.5, &face, &RingScheme::standard())
            .hit()
            .unwrap();
        assert_eq!(hit.score, ArrowInput::X);
        assert_eq!((hit.x_pct, hit.y_pct), (50.0, 50.0));
    }

    #[test]
    fn nan_pointer_is_rejected() {
        let face = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(
            score_at(f64::NAN, 10.0, &face, &RingScheme::triple()),
            ScoreOutcome::OutOfBounds
        );
    }
}
