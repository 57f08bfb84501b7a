//! Presentation model for the scoring surface and an SVG writer for it.
//!
//! All positions are logical face units (0..200) so the view redraws
//! correctly at any pixel size.

use crate::geometry::{LocalPoint, FACE_CENTER, LOGICAL_SPAN};
use crate::navigation::FaceNavigator;
use crate::scorer::{ArrowInput, PlacedArrow, RingColor, RingScheme, SpotType};
use serde::Serialize;

/// Marker position for misses, off the scoring area in the top-right corner.
pub const MISS_MARKER_PCT: (f64, f64) = (92.0, 8.0);

const MARKER_RADIUS: f64 = 4.0;
const CROSSHAIR_HALF: f64 = 6.0;
const FACE_GAP: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingBand {
    pub score: String,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub is_miss: bool,
    /// Order within the end, starting at 1.
    pub sequence: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceView {
    pub index: usize,
    pub active: bool,
    pub filled: bool,
    pub rings: Vec<RingBand>,
    pub crosshair: (f64, f64),
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorerView {
    pub spot: SpotType,
    pub active_face: usize,
    pub snap_enabled: bool,
    pub scroll_offset: f64,
    pub faces: Vec<FaceView>,
}

pub fn ring_bands(scheme: &RingScheme) -> Vec<RingBand> {
    (0..scheme.ring_count())
        .filter_map(|i| {
            let (inner, outer) = scheme.band(i)?;
            let color = scheme.color(i).unwrap_or(RingColor::White);
            Some(RingBand {
                score: scheme.score_for_ring(i).to_string(),
                inner_radius: inner,
                outer_radius: outer,
                fill: color.fill(),
                stroke: color.stroke(),
            })
        })
        .collect()
}

pub fn marker_for(arrow: &PlacedArrow, sequence: usize) -> Marker {
    let (x_pct, y_pct) = if arrow.score == ArrowInput::Miss {
        MISS_MARKER_PCT
    } else {
        (arrow.x_pct, arrow.y_pct)
    };
    let p = LocalPoint::from_pct(x_pct, y_pct);
    Marker {
        label: arrow.score.to_string(),
        x: p.x,
        y: p.y,
        is_miss: arrow.score.is_miss(),
        sequence,
    }
}

pub fn build_view(
    spot: SpotType,
    scheme: &RingScheme,
    arrows: &[PlacedArrow],
    active_face: usize,
    navigator: &FaceNavigator,
) -> ScorerView {
    let rings = ring_bands(scheme);
    let faces = (0..spot.face_count())
        .map(|index| {
            let markers: Vec<Marker> = arrows
                .iter()
                .enumerate()
                .filter(|(_, a)| a.face_index == index)
                .map(|(seq, a)| marker_for(a, seq + 1))
                .collect();
            FaceView {
                index,
                active: index == active_face,
                filled: spot == SpotType::Triple && !markers.is_empty(),
                rings: rings.clone(),
                crosshair: (FACE_CENTER.x, FACE_CENTER.y),
                markers,
            }
        })
        .collect();

    ScorerView {
        spot,
        active_face,
        snap_enabled: navigator.snap_enabled(),
        scroll_offset: navigator.scroll_offset(),
        faces,
    }
}

/// Writes every face stacked vertically into one SVG document.
pub fn render_svg(view: &ScorerView) -> String {
    let count = view.faces.len().max(1) as f64;
    let height = LOGICAL_SPAN * count + FACE_GAP * (count - 1.0);
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n",
        w = LOGICAL_SPAN,
        h = height
    ));

    for face in &view.faces {
        let top = face.index as f64 * (LOGICAL_SPAN + FACE_GAP);
        out.push_str(&format!(
            "  <g class=\"face{}\" data-face=\"{}\" transform=\"translate(0 {})\">\n",
            if face.active { " active" } else { "" },
            face.index,
            top
        ));

        // Outermost first so inner rings paint over.
        for ring in face.rings.iter().rev() {
            out.push_str(&format!(
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{:.3}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0.5\" data-score=\"{}\"/>\n",
                FACE_CENTER.x, FACE_CENTER.y, ring.outer_radius, ring.fill, ring.stroke, ring.score
            ));
        }

        let (cx, cy) = face.crosshair;
        out.push_str(&format!(
            "    <path d=\"M{} {} H{} M{} {} V{}\" stroke=\"#1A1A1A\" stroke-width=\"0.6\" class=\"crosshair\"/>\n",
            cx - CROSSHAIR_HALF,
            cy,
            cx + CROSSHAIR_HALF,
            cx,
            cy - CROSSHAIR_HALF,
            cy + CROSSHAIR_HALF
        ));

        for m in &face.markers {
            let class = if m.is_miss { "marker miss" } else { "marker" };
            out.push_str(&format!(
                "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"#39FF14\" stroke=\"#000\" stroke-width=\"0.8\" class=\"{}\" data-score=\"{}\" data-seq=\"{}\"/>\n",
                m.x, m.y, MARKER_RADIUS, class, m.label, m.sequence
            ));
        }

        out.push_str("  </g>\n");
    }

    out.push_str("</svg>\n");
    out
}
