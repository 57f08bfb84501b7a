use clap::Args;
use std::fs;
use targetface::config::Config;
use targetface::error::TfResult;
use targetface::layout::FaceLayout;
use targetface::render::render_svg;
use targetface::session::{self, SessionScript};
use targetface::TargetFaceScorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,

    /// Replay this script first and draw its final state.
    #[arg(short, long)]
    pub script: Option<String>,

    #[arg(short, long, default_value = "target.svg")]
    pub output: String,
}

pub fn run(args: &RenderArgs, config: &Config) -> TfResult<()> {
    let view = match &args.script {
        Some(path) => {
            let script = SessionScript::load_from_file(path)?;
            session::replay(&script, config)?.final_view
        }
        None => {
            let mut scorer = TargetFaceScorer::without_haptics(config, |_| {});
            let faces = scorer.spot().face_count();
            scorer.set_layout(FaceLayout::stacked(0.0, 0.0, 200.0, 12.0, faces));
            scorer.view()
        }
    };

    fs::write(&args.output, render_svg(&view))?;
    info!("Wrote SVG: {}", args.output);
    println!("Rendered {} face(s) to {}", view.faces.len(), args.output);
    Ok(())
}
