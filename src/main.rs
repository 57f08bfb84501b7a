use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use targetface::config::Config;
use targetface::error::TfResult;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config; flags typed on the command line override its values.
    #[arg(global = true, long)]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one pointer position against one face box.
    Score(cmd::score::ScoreArgs),
    /// Replay a session script and report the ends it produced.
    Simulate(cmd::simulate::SimulateArgs),
    /// Write an SVG of the scoring surface.
    Render(cmd::render::RenderArgs),
}

fn resolve_config(cli: &Cli, flags: &Config, sub_matches: &ArgMatches) -> TfResult<Config> {
    match &cli.config_file {
        Some(path) => {
            info!("Loading config from: {}", path);
            let mut config = Config::load_from_file(path)?;
            config.merge_from_cli(flags, sub_matches);
            config.validate()?;
            Ok(config)
        }
        None => {
            flags.validate()?;
            Ok(flags.clone())
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (flags, name) = match &cli.command {
        Commands::Score(args) => (&args.config, "score"),
        Commands::Simulate(args) => (&args.config, "simulate"),
        Commands::Render(args) => (&args.config, "render"),
    };
    let Some(sub_matches) = matches.subcommand_matches(name) else {
        error!("missing subcommand matches for '{}'", name);
        process::exit(2);
    };

    let config = resolve_config(&cli, flags, sub_matches).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let result = match &cli.command {
        Commands::Score(args) => cmd::score::run(args, &config),
        Commands::Simulate(args) => cmd::simulate::run(args, &config),
        Commands::Render(args) => cmd::render::run(args, &config),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
