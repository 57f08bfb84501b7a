use rstest::rstest;
use targetface::geometry::Rect;
use targetface::scorer::{
    score_at, score_distance, ArrowInput, RingColor, RingScheme, ScoreOutcome,
};

fn s(label: &str) -> ArrowInput {
    label.parse().unwrap()
}

// --- STANDARD FACE (11 rings, width 100/11) ---
#[rstest]
#[case(0.0, "X")]
#[case(9.0, "X")]
#[case(9.2, "10")]
#[case(18.3, "9")]
#[case(50.0, "6")]
#[case(60.0, "5")]
#[case(90.8, "2")]
#[case(91.0, "1")]
#[case(99.9, "1")]
#[case(100.0, "M")]
#[case(100.1, "M")]
#[case(141.0, "M")]
fn test_standard_ring_mapping(#[case] dist: f64, #[case] expected: &str) {
    let scheme = RingScheme::standard();
    assert_eq!(score_distance(dist, &scheme), s(expected), "distance {}", dist);
}

// --- TRIPLE FACE (6 rings, width 100/6) ---
#[rstest]
#[case(0.0, "X")]
#[case(16.0, "X")]
#[case(17.0, "10")]
#[case(40.0, "9")]
#[case(55.0, "8")]
#[case(70.0, "7")]
#[case(99.0, "6")]
#[case(100.5, "M")]
fn test_triple_ring_mapping(#[case] dist: f64, #[case] expected: &str) {
    let scheme = RingScheme::triple();
    assert_eq!(score_distance(dist, &scheme), s(expected), "distance {}", dist);
}

#[test]
fn test_scheme_shapes() {
    let standard = RingScheme::standard();
    assert_eq!(standard.ring_count(), 11);
    assert_eq!(standard.rings()[0], ArrowInput::X);
    assert_eq!(standard.rings()[10], ArrowInput::Ring(1));

    let triple = RingScheme::triple();
    assert_eq!(triple.ring_count(), 6);
    assert_eq!(triple.rings()[5], ArrowInput::Ring(6));
    assert!((triple.ring_width() - 100.0 / 6.0).abs() < 1e-12);
    assert_eq!(triple.band(6), None);
}

// Pointer mapping through a box that is neither at the origin nor 200px wide.
#[rstest]
#[case(250.0, 300.0, "X")] // dead centre
#[case(250.0, 480.0, "2")] // 180px down at 2px per unit = 90 logical
#[case(440.0, 300.0, "1")] // 190px right = 95 logical
#[case(310.0, 300.0, "8")] // 60px right = 30 logical
#[case(51.0, 101.0, "M")] // corner: inside the box, outside the rings
fn test_score_at_scales_box(#[case] x: f64, #[case] y: f64, #[case] expected: &str) {
    let face = Rect::new(50.0, 100.0, 400.0, 400.0);
    let hit = score_at(x, y, &face, &RingScheme::standard())
        .hit()
        .expect("point is inside the box");
    assert_eq!(hit.score, s(expected));
}

#[rstest]
#[case(49.9, 300.0)]
#[case(450.1, 300.0)]
#[case(250.0, 99.0)]
#[case(250.0, 501.0)]
fn test_score_at_rejects_outside_box(#[case] x: f64, #[case] y: f64) {
    let face = Rect::new(50.0, 100.0, 400.0, 400.0);
    assert_eq!(
        score_at(x, y, &face, &RingScheme::standard()),
        ScoreOutcome::OutOfBounds
    );
}

#[test]
fn test_hit_reports_normalized_position() {
    let face = Rect::new(10.0, 10.0, 100.0, 100.0);
    let hit = score_at(35.0, 85.0, &face, &RingScheme::triple())
        .hit()
        .unwrap();
    assert!((hit.x_pct - 25.0).abs() < 1e-9);
    assert!((hit.y_pct - 75.0).abs() < 1e-9);
}

#[rstest]
#[case("X", 10, true)]
#[case("10", 10, true)]
#[case("9", 9, false)]
#[case("1", 1, false)]
#[case("M", 0, false)]
fn test_arrow_values(#[case] label: &str, #[case] value: u32, #[case] is_ten: bool) {
    let a = s(label);
    assert_eq!(a.value(), value);
    assert_eq!(a.is_ten(), is_ten);
    assert_eq!(a.to_string(), label);
}

#[rstest]
#[case("0")]
#[case("11")]
#[case("ten")]
#[case("")]
fn test_invalid_arrow_labels(#[case] label: &str) {
    assert!(label.parse::<ArrowInput>().is_err());
}

#[test]
fn test_arrow_serde_uses_labels() {
    let json = serde_json::to_string(&vec![ArrowInput::X, ArrowInput::Ring(7), ArrowInput::Miss])
        .unwrap();
    assert_eq!(json, r#"["X","7","M"]"#);
    let back: Vec<ArrowInput> = serde_json::from_str(&json).unwrap();
    assert_eq!(back[1], ArrowInput::Ring(7));
    assert!(serde_json::from_str::<ArrowInput>(r#""12""#).is_err());
}

#[rstest]
#[case("X", RingColor::Gold)]
#[case("9", RingColor::Gold)]
#[case("8", RingColor::Red)]
#[case("5", RingColor::Blue)]
#[case("3", RingColor::Black)]
#[case("1", RingColor::White)]
fn test_ring_colors(#[case] label: &str, #[case] color: RingColor) {
    assert_eq!(RingColor::for_score(s(label)), color);
}
