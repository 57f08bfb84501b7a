use crate::reports;
use clap::Args;
use std::fs::File;
use targetface::config::Config;
use targetface::error::TfResult;
use targetface::session::{self, SessionScript};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Session script (JSON).
    #[arg(short, long)]
    pub script: String,

    /// Export every placed arrow as CSV.
    #[arg(long)]
    pub csv: Option<String>,

    /// Print the full replay log as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SimulateArgs, config: &Config) -> TfResult<()> {
    info!("Loading script: {}", args.script);
    let script = SessionScript::load_from_file(&args.script)?;
    let log = session::replay(&script, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&log)?);
    } else {
        reports::print_event_log(&log.entries);
        reports::print_end_summaries(&log);
        println!(
            "Active face: {}  Haptic pulses: {}",
            log.active_face, log.pulses
        );
    }

    if let Some(path) = &args.csv {
        let file = File::create(path)?;
        session::write_csv(file, &log.ends)?;
        info!("Wrote CSV: {}", path);
    }
    Ok(())
}
