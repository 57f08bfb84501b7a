use crate::config::Config;
use crate::end::{EndState, EndTransition};
use crate::geometry::Rect;
use crate::haptics::{Haptics, NoHaptics};
use crate::layout::FaceLayout;
use crate::navigation::FaceNavigator;
use crate::render::{self, ScorerView, MISS_MARKER_PCT};
use crate::scorer::{score_at, ArrowInput, PlacedArrow, RingScheme, ScoreOutcome, SpotType};
use tracing::debug;

/// Host-driven placement from raw client coordinates, decoupled from the
/// element under the pointer (crosshair-style aiming).
pub trait PreciseScoringInput {
    fn place_at(&mut self, x: f64, y: f64) -> PlacementOutcome;
}

/// Result of a placement attempt. Only `Accepted` reaches the host callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    Accepted(PlacedArrow),
    /// The end already holds `arrows_per_end` arrows. No pulse.
    EndFull,
    /// Triple-spot face already holds its arrow.
    FaceFilled(usize),
    OutOfBounds,
    /// No bounding box registered for the face.
    Unresolved,
    Disposed,
}

impl PlacementOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn arrow(&self) -> Option<PlacedArrow> {
        match self {
            Self::Accepted(a) => Some(*a),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorerProps {
    pub arrows_per_end: usize,
    pub spot: SpotType,
    pub enforce_precise_limit: bool,
    pub haptic_pulse_ms: u32,
}

impl From<&Config> for ScorerProps {
    fn from(config: &Config) -> Self {
        Self {
            arrows_per_end: config.scorer.arrows_per_end,
            spot: SpotType::from_flag(config.scorer.triple_spot),
            enforce_precise_limit: config.scorer.enforce_precise_limit,
            haptic_pulse_ms: config.timing.haptic_pulse_ms,
        }
    }
}

/// Interactive scoring surface for one end at a time.
///
/// The host owns the arrow history and pushes it back through
/// [`sync_end`](Self::sync_end); the scorer keeps a mirror so occupancy and
/// capacity checks hold between syncs.
pub struct TargetFaceScorer<F, H = NoHaptics>
where
    F: FnMut(PlacedArrow),
    H: Haptics,
{
    props: ScorerProps,
    scheme: RingScheme,
    layout: FaceLayout,
    navigator: FaceNavigator,
    arrows: Vec<PlacedArrow>,
    synced_revision: Option<u64>,
    on_select: F,
    haptics: H,
}

impl<F: FnMut(PlacedArrow)> TargetFaceScorer<F, NoHaptics> {
    pub fn without_haptics(config: &Config, on_select: F) -> Self {
        Self::new(config, on_select, NoHaptics)
    }
}

impl<F, H> TargetFaceScorer<F, H>
where
    F: FnMut(PlacedArrow),
    H: Haptics,
{
    pub fn new(config: &Config, on_select: F, haptics: H) -> Self {
        let props = ScorerProps::from(config);
        Self {
            scheme: RingScheme::for_spot(props.spot),
            navigator: FaceNavigator::new(props.spot.face_count(), config.timing.clone()),
            layout: FaceLayout::new(),
            arrows: Vec::new(),
            synced_revision: None,
            props,
            on_select,
            haptics,
        }
    }

    pub fn spot(&self) -> SpotType {
        self.props.spot
    }

    pub fn navigator(&self) -> &FaceNavigator {
        &self.navigator
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    pub fn current_arrows(&self) -> &[PlacedArrow] {
        &self.arrows
    }

    pub fn active_face(&self) -> usize {
        match self.props.spot {
            SpotType::Single => 0,
            SpotType::Triple => self.navigator.active_face(),
        }
    }

    fn is_triple(&self) -> bool {
        self.props.spot == SpotType::Triple
    }

    /// Layout hook: the renderer reports where a face sits on screen.
    pub fn register_face(&mut self, face_index: usize, rect: Rect) {
        self.layout.register(face_index, rect);
        if let Some(pitch) = self.layout.face_pitch() {
            self.navigator.set_face_height(pitch);
        }
    }

    pub fn set_layout(&mut self, layout: FaceLayout) {
        self.layout = layout;
        if let Some(pitch) = self.layout.face_pitch() {
            self.navigator.set_face_height(pitch);
        }
    }

    /// Takes the host's view of the end. Unchanged revisions are ignored.
    pub fn sync_end(&mut self, end: &EndState) {
        if self.synced_revision == Some(end.revision()) {
            return;
        }
        self.synced_revision = Some(end.revision());
        self.apply_end(end.arrows(), end.transition());
    }

    /// Replaces the arrow mirror for hosts that track the end themselves.
    /// `previous_len` is the arrow count before this change.
    pub fn set_current_arrows(&mut self, arrows: &[PlacedArrow], previous_len: usize) {
        let transition = EndTransition {
            previous_len,
            current_len: arrows.len(),
        };
        self.apply_end(arrows, transition);
    }

    /// A new end sends the triple-spot view back to face 0.
    fn apply_end(&mut self, arrows: &[PlacedArrow], transition: EndTransition) {
        self.arrows = arrows.to_vec();
        if self.is_triple() && transition.is_new_end() {
            self.navigator.request_reset();
        }
    }

    /// Direct click: `face_rect` is the element under the pointer.
    pub fn click(
        &mut self,
        face_index: usize,
        x: f64,
        y: f64,
        face_rect: Rect,
    ) -> PlacementOutcome {
        let rect = (face_index < self.props.spot.face_count()).then_some(face_rect);
        self.place(face_index, rect, x, y, true)
    }

    /// Direct click resolved against the registered layout.
    pub fn click_at(&mut self, x: f64, y: f64) -> PlacementOutcome {
        let hit = (0..self.props.spot.face_count())
            .find_map(|i| self.layout.get(i).filter(|r| r.contains(x, y)).map(|r| (i, r)));
        match hit {
            Some((face, rect)) => self.click(face, x, y, rect),
            None => {
                let face = self.active_face();
                let rect = self.layout.get(face);
                self.place(face, rect, x, y, true)
            }
        }
    }

    /// Miss button: records "M" on the active face without any geometry.
    pub fn record_miss(&mut self) -> PlacementOutcome {
        if self.navigator.is_disposed() {
            return PlacementOutcome::Disposed;
        }
        if self.is_end_full() {
            return PlacementOutcome::EndFull;
        }
        let face = self.active_face();
        if self.is_face_filled(face) {
            return self.reject(PlacementOutcome::FaceFilled(face));
        }
        self.pulse();
        let (x_pct, y_pct) = MISS_MARKER_PCT;
        self.accept(PlacedArrow {
            score: ArrowInput::Miss,
            x_pct,
            y_pct,
            face_index: face,
        })
    }

    /// Manual jump, e.g. tapping a face indicator.
    pub fn select_face(&mut self, face_index: usize) {
        if self.is_triple() {
            self.navigator.go_to_face(face_index);
        }
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.navigator.on_user_scroll(offset);
    }

    /// Drive animations and timers; call once per display refresh.
    pub fn frame(&mut self, now: f64) {
        self.navigator.frame(now);
    }

    /// Teardown: stops frame scheduling; every later call is a no-op.
    pub fn dispose(&mut self) {
        self.navigator.dispose();
    }

    pub fn view(&self) -> ScorerView {
        render::build_view(
            self.props.spot,
            &self.scheme,
            &self.arrows,
            self.active_face(),
            &self.navigator,
        )
    }

    pub fn is_end_full(&self) -> bool {
        self.arrows.len() >= self.props.arrows_per_end
    }

    pub fn is_face_filled(&self, face_index: usize) -> bool {
        self.is_triple() && self.arrows.iter().any(|a| a.face_index == face_index)
    }

    fn place(
        &mut self,
        face: usize,
        rect: Option<Rect>,
        x: f64,
        y: f64,
        guard_capacity: bool,
    ) -> PlacementOutcome {
        if self.navigator.is_disposed() {
            return PlacementOutcome::Disposed;
        }
        if guard_capacity && self.is_end_full() {
            debug!(arrows = self.arrows.len(), "end full, placement suppressed");
            return PlacementOutcome::EndFull;
        }
        // Occupancy is checked before any geometry.
        if self.is_face_filled(face) {
            return self.reject(PlacementOutcome::FaceFilled(face));
        }
        let Some(rect) = rect else {
            return self.reject(PlacementOutcome::Unresolved);
        };

        match score_at(x, y, &rect, &self.scheme) {
            ScoreOutcome::OutOfBounds => self.reject(PlacementOutcome::OutOfBounds),
            ScoreOutcome::Hit(hit) => {
                self.pulse();
                self.accept(PlacedArrow {
                    score: hit.score,
                    x_pct: hit.x_pct,
                    y_pct: hit.y_pct,
                    face_index: face,
                })
            }
        }
    }

    fn accept(&mut self, arrow: PlacedArrow) -> PlacementOutcome {
        debug!(score = %arrow.score, face = arrow.face_index, "arrow placed");
        self.arrows.push(arrow);
        (self.on_select)(arrow);
        if self.is_triple() {
            self.navigator.request_auto_advance(arrow.face_index);
        }
        PlacementOutcome::Accepted(arrow)
    }

    fn reject(&mut self, outcome: PlacementOutcome) -> PlacementOutcome {
        debug!(?outcome, "placement rejected");
        self.pulse();
        outcome
    }

    fn pulse(&mut self) {
        self.haptics.pulse(self.props.haptic_pulse_ms);
    }
}

impl<F, H> PreciseScoringInput for TargetFaceScorer<F, H>
where
    F: FnMut(PlacedArrow),
    H: Haptics,
{
    fn place_at(&mut self, x: f64, y: f64) -> PlacementOutcome {
        let face = self.active_face();
        let rect = self.layout.get(face);
        let guard = self.props.enforce_precise_limit;
        self.place(face, rect, x, y, guard)
    }
}
