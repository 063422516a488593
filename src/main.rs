use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use lockforge::config::{Config, ScoringWeights};
use lockforge::error::LfResult;
use lockforge::store::PatternStore;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring weights; explicit --weight-* flags still win.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value = "data/saved_patterns.json")]
    store: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Canonicalize a tap sequence and report its features, score and attack time.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Score the built-in example patterns side by side.
    Presets(cmd::presets::PresetsArgs),
    /// Attack-time estimate for a bare score.
    Estimate(cmd::estimate::EstimateArgs),
    /// Save a pattern under a name.
    Save(cmd::saved::SaveArgs),
    /// List saved patterns.
    List,
    /// Delete one saved pattern.
    Delete(cmd::saved::DeleteArgs),
    /// Delete every saved pattern.
    ClearSaved,
}

/// Layers the weights file (if any) under the explicit CLI weight flags.
fn resolve_weights(path: &str, config: &mut Config, sub_matches: &ArgMatches) -> LfResult<()> {
    info!("⚖️  Loading Weights from: {}", path);
    let mut file_weights = ScoringWeights::load_from_file(path)?;
    file_weights.merge_from_cli(&config.weights, sub_matches);
    config.weights = file_weights;
    Ok(())
}

fn run(cli: Cli, matches: &ArgMatches) -> LfResult<()> {
    let store = PatternStore::new(&cli.store);

    let mut command = cli.command;
    let config_and_matches = match &mut command {
        Commands::Analyze(args) => Some((&mut args.config, "analyze")),
        Commands::Presets(args) => Some((&mut args.config, "presets")),
        Commands::Save(args) => Some((&mut args.config, "save")),
        _ => None,
    };

    if let (Some(path), Some((config, name))) = (&cli.weights, config_and_matches) {
        if let Some(sub_matches) = matches.subcommand_matches(name) {
            resolve_weights(path, config, sub_matches)?;
        }
    }

    match command {
        Commands::Analyze(args) => cmd::analyze::run(args)?,
        Commands::Presets(args) => cmd::presets::run(args),
        Commands::Estimate(args) => cmd::estimate::run(args),
        Commands::Save(args) => cmd::saved::save(args, &store)?,
        Commands::List => cmd::saved::list(&store),
        Commands::Delete(args) => cmd::saved::delete(args, &store)?,
        Commands::ClearSaved => cmd::saved::clear(&store)?,
    }
    Ok(())
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("{}", e);
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
