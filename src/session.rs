//! Scripted sessions: timestamped input events replayed through a scorer
//! with a simulated 60 Hz display.

use crate::component::{PlacementOutcome, PreciseScoringInput, TargetFaceScorer};
use crate::config::Config;
use crate::end::{EndState, EndSummary};
use crate::error::{TargetFaceError, TfResult};
use crate::geometry::Rect;
use crate::haptics::PulseCounter;
use crate::render::ScorerView;
use crate::scorer::PlacedArrow;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

pub const FRAME_MS: f64 = 1000.0 / 60.0;
/// Upper bound on the post-script settle phase.
const SETTLE_LIMIT_MS: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Click { x: f64, y: f64 },
    Precise { x: f64, y: f64 },
    Miss,
    SelectFace { face: usize },
    Scroll { offset: f64 },
    Undo,
    NewEnd,
    Dispose,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub at_ms: f64,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionScript {
    pub config: Option<Config>,
    /// Face bounding boxes in client coordinates, by face index.
    pub faces: Vec<Rect>,
    pub events: Vec<TimedEvent>,
}

impl SessionScript {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TfResult<Self> {
        let content = fs::read_to_string(path)?;
        let script: SessionScript = serde_json::from_str(&content)?;
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> TfResult<()> {
        if let Some(config) = &self.config {
            config.validate()?;
        }
        if let Some(e) = self.events.iter().find(|e| !e.at_ms.is_finite()) {
            return Err(TargetFaceError::Validation(format!(
                "event {:?} has a non-finite timestamp",
                e.event
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayEntry {
    pub at_ms: f64,
    pub event: ScriptEvent,
    pub outcome: Option<String>,
    pub active_face: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayLog {
    pub entries: Vec<ReplayEntry>,
    /// Closed ends followed by the end in progress (if it holds arrows).
    pub ends: Vec<Vec<PlacedArrow>>,
    pub pulses: usize,
    pub active_face: usize,
    pub final_view: ScorerView,
}

impl ReplayLog {
    pub fn end_summaries(&self) -> Vec<EndSummary> {
        self.ends.iter().map(|e| EndSummary::from_arrows(e)).collect()
    }

    pub fn total(&self) -> EndSummary {
        let mut total = EndSummary::default();
        for s in self.end_summaries() {
            total.merge(&s);
        }
        total
    }
}

fn describe(outcome: &PlacementOutcome) -> String {
    match outcome {
        PlacementOutcome::Accepted(a) => format!("accepted {} on face {}", a.score, a.face_index),
        PlacementOutcome::EndFull => "end full".to_string(),
        PlacementOutcome::FaceFilled(f) => format!("face {} filled", f),
        PlacementOutcome::OutOfBounds => "out of bounds".to_string(),
        PlacementOutcome::Unresolved => "face unresolved".to_string(),
        PlacementOutcome::Disposed => "disposed".to_string(),
    }
}

/// Runs `script` against a fresh scorer. The script's own config wins over `base`.
pub fn replay(script: &SessionScript, base: &Config) -> TfResult<ReplayLog> {
    script.validate()?;
    let config = script.config.clone().unwrap_or_else(|| base.clone());
    config.validate()?;

    let inbox: RefCell<Vec<PlacedArrow>> = RefCell::new(Vec::new());
    let mut scorer = TargetFaceScorer::new(
        &config,
        |a: PlacedArrow| inbox.borrow_mut().push(a),
        PulseCounter::default(),
    );

    if script.faces.is_empty() {
        warn!("script registers no faces; every placement will be unresolved");
    }
    for (i, rect) in script.faces.iter().enumerate() {
        scorer.register_face(i, *rect);
    }

    let mut events = script.events.clone();
    events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));

    let mut end = EndState::new();
    let mut closed: Vec<Vec<PlacedArrow>> = Vec::new();
    let mut entries = Vec::with_capacity(events.len());
    let mut clock = 0.0;
    scorer.sync_end(&end);
    scorer.frame(clock);

    info!(
        events = events.len(),
        spot = %scorer.spot(),
        "replaying session"
    );

    for TimedEvent { at_ms, event } in events {
        while clock + FRAME_MS <= at_ms {
            clock += FRAME_MS;
            scorer.frame(clock);
        }
        if at_ms > clock {
            clock = at_ms;
            scorer.frame(clock);
        }

        let outcome = match &event {
            ScriptEvent::Click { x, y } => Some(scorer.click_at(*x, *y)),
            ScriptEvent::Precise { x, y } => Some(scorer.place_at(*x, *y)),
            ScriptEvent::Miss => Some(scorer.record_miss()),
            ScriptEvent::SelectFace { face } => {
                scorer.select_face(*face);
                None
            }
            ScriptEvent::Scroll { offset } => {
                scorer.on_scroll(*offset);
                None
            }
            ScriptEvent::Undo => {
                end.undo();
                None
            }
            ScriptEvent::NewEnd => {
                closed.push(end.begin_new_end());
                None
            }
            ScriptEvent::Dispose => {
                scorer.dispose();
                None
            }
        };

        for arrow in inbox.borrow_mut().drain(..) {
            end.record(arrow);
        }
        scorer.sync_end(&end);

        debug!(at_ms, ?event, ?outcome, "event applied");
        entries.push(ReplayEntry {
            at_ms,
            event,
            outcome: outcome.as_ref().map(describe),
            active_face: scorer.active_face(),
        });
    }

    let deadline = clock + SETTLE_LIMIT_MS;
    while scorer.navigator().has_pending_work() && !scorer.navigator().is_disposed() {
        if clock >= deadline {
            warn!("navigation did not settle within {} ms", SETTLE_LIMIT_MS);
            break;
        }
        clock += FRAME_MS;
        scorer.frame(clock);
    }

    if !end.is_empty() {
        closed.push(end.arrows().to_vec());
    }

    info!(ends = closed.len(), "replay finished");
    Ok(ReplayLog {
        entries,
        ends: closed,
        pulses: scorer.haptics().pulses,
        active_face: scorer.active_face(),
        final_view: scorer.view(),
    })
}

#[derive(Debug, Serialize)]
struct CsvRow {
    end: usize,
    arrow: usize,
    face: usize,
    score: String,
    value: u32,
    x_pct: f64,
    y_pct: f64,
}

/// One row per arrow, ends and arrows numbered from 1.
pub fn write_csv<W: Write>(writer: W, ends: &[Vec<PlacedArrow>]) -> TfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (e, arrows) in ends.iter().enumerate() {
        for (i, a) in arrows.iter().enumerate() {
            wtr.serialize(CsvRow {
                end: e + 1,
                arrow: i + 1,
                face: a.face_index,
                score: a.score.to_string(),
                value: a.score.value(),
                x_pct: a.x_pct,
                y_pct: a.y_pct,
            })?;
        }
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
