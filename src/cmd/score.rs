use crate::reports;
use clap::Args;
use targetface::config::Config;
use targetface::error::TfResult;
use targetface::geometry::Rect;
use targetface::scorer::{score_at, RingScheme, ScoreOutcome, SpotType};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Pointer X in client coordinates.
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,
    /// Pointer Y in client coordinates.
    #[arg(long, allow_negative_numbers = true)]
    pub y: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub left: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub top: f64,
    /// Face box edge length; faces are square.
    #[arg(long, default_value_t = 200.0)]
    pub size: f64,
}

pub fn run(args: &ScoreArgs, config: &Config) -> TfResult<()> {
    let spot = SpotType::from_flag(config.scorer.triple_spot);
    let scheme = RingScheme::for_spot(spot);
    let face = Rect::new(args.left, args.top, args.size, args.size);

    match score_at(args.x, args.y, &face, &scheme) {
        ScoreOutcome::Hit(hit) => reports::print_hit(spot, &hit),
        ScoreOutcome::OutOfBounds => {
            println!("Out of bounds: ({}, {}) is outside {:?}", args.x, args.y, face)
        }
    }
    Ok(())
}
