use std::fs;
use std::io::{self, Write};
use targetface::config::Config;
use targetface::error::TargetFaceError;
use targetface::geometry::Rect;
use targetface::scorer::ArrowInput;
use targetface::session::{replay, write_csv, ScriptEvent, SessionScript, TimedEvent};

const TRIPLE_SCRIPT: &str = r#"{
    "config": { "scorer": { "triple_spot": true, "arrows_per_end": 3 } },
    "faces": [
        { "left": 0, "top": 0,   "width": 300, "height": 300 },
        { "left": 0, "top": 320, "width": 300, "height": 300 },
        { "left": 0, "top": 640, "width": 300, "height": 300 }
    ],
    "events": [
        { "at_ms": 0,    "type": "click", "x": 150, "y": 150 },
        { "at_ms": 1000, "type": "click", "x": 150, "y": 470 },
        { "at_ms": 2000, "type": "click", "x": 150, "y": 790 }
    ]
}"#;

fn triple_script() -> SessionScript {
    serde_json::from_str(TRIPLE_SCRIPT).expect("script parses")
}

fn at(at_ms: f64, event: ScriptEvent) -> TimedEvent {
    TimedEvent { at_ms, event }
}

#[test]
fn test_triple_end_walks_all_faces() {
    let log = replay(&triple_script(), &Config::default()).unwrap();

    assert_eq!(log.ends.len(), 1);
    let faces: Vec<usize> = log.ends[0].iter().map(|a| a.face_index).collect();
    assert_eq!(faces, vec![0, 1, 2]);
    assert!(log.ends[0].iter().all(|a| a.score == ArrowInput::X));
    assert_eq!(log.active_face, 2);
    assert_eq!(log.pulses, 3);
    assert_eq!(log.total().total, 30);
    assert_eq!(log.total().x_count, 3);
    assert_eq!(
        log.entries[1].outcome.as_deref(),
        Some("accepted X on face 1")
    );
}

#[test]
fn test_new_end_returns_to_first_face() {
    let mut script = triple_script();
    script.events.push(at(3000.0, ScriptEvent::NewEnd));
    let log = replay(&script, &Config::default()).unwrap();

    assert_eq!(log.ends.len(), 1);
    assert_eq!(log.active_face, 0);
    assert!(log.final_view.faces.iter().all(|f| f.markers.is_empty()));
}

#[test]
fn test_second_arrow_on_filled_face_is_refused() {
    let mut script = triple_script();
    script.events.truncate(1);
    script.events.push(at(50.0, ScriptEvent::Click { x: 160.0, y: 160.0 }));
    let log = replay(&script, &Config::default()).unwrap();

    assert_eq!(log.entries[1].outcome.as_deref(), Some("face 0 filled"));
    assert_eq!(log.ends[0].len(), 1);
    assert_eq!(log.pulses, 2);
}

#[test]
fn test_events_replay_in_time_order() {
    let mut script = triple_script();
    script.events.reverse();
    let log = replay(&script, &Config::default()).unwrap();
    let times: Vec<f64> = log.entries.iter().map(|e| e.at_ms).collect();
    assert_eq!(times, vec![0.0, 1000.0, 2000.0]);
}

#[test]
fn test_undo_frees_the_face() {
    let script = SessionScript {
        config: None,
        faces: vec![Rect::new(0.0, 0.0, 200.0, 200.0)],
        events: vec![
            at(0.0, ScriptEvent::Miss),
            at(10.0, ScriptEvent::Undo),
            at(20.0, ScriptEvent::Click { x: 100.0, y: 100.0 }),
        ],
    };
    let log = replay(&script, &Config::default()).unwrap();
    assert_eq!(log.ends.len(), 1);
    assert_eq!(log.ends[0].len(), 1);
    assert_eq!(log.ends[0][0].score, ArrowInput::X);
}

#[test]
fn test_script_without_faces_is_unresolved() {
    let script = SessionScript {
        config: None,
        faces: Vec::new(),
        events: vec![at(0.0, ScriptEvent::Precise { x: 1.0, y: 1.0 })],
    };
    let log = replay(&script, &Config::default()).unwrap();
    assert_eq!(log.entries[0].outcome.as_deref(), Some("face unresolved"));
    assert!(log.ends.is_empty());
}

#[test]
fn test_dispose_stops_input() {
    let mut script = triple_script();
    script.events.insert(1, at(500.0, ScriptEvent::Dispose));
    let log = replay(&script, &Config::default()).unwrap();
    assert_eq!(log.ends[0].len(), 1);
    assert_eq!(log.entries[2].outcome.as_deref(), Some("disposed"));
    assert_eq!(log.active_face, 0);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, TRIPLE_SCRIPT).unwrap();
    let script = SessionScript::load_from_file(&path).unwrap();
    assert_eq!(script.faces.len(), 3);
    assert_eq!(script.events.len(), 3);
    assert!(script.config.unwrap().scorer.triple_spot);
}

#[test]
fn test_invalid_script_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(
        &path,
        r#"{ "config": { "scorer": { "arrows_per_end": 0 } }, "events": [] }"#,
    )
    .unwrap();
    assert!(SessionScript::load_from_file(&path).is_err());
}

#[test]
fn test_csv_has_one_row_per_arrow() {
    let log = replay(&triple_script(), &Config::default()).unwrap();
    let mut buf = Vec::new();
    write_csv(&mut buf, &log.ends).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "end,arrow,face,score,value,x_pct,y_pct");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1,1,0,X,10,"));
    assert!(lines[3].starts_with("1,3,2,X,10,"));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn test_csv_write_failure_is_reported_as_export_error() {
    let log = replay(&triple_script(), &Config::default()).unwrap();
    let err = write_csv(BrokenPipe, &log.ends).unwrap_err();
    assert!(matches!(err, TargetFaceError::Csv(_)));
    assert!(err.to_string().starts_with("CSV export failed"));
}
