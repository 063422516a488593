use crate::reports;
use clap::Args;
use lockforge::api::TrainerState;
use lockforge::config::{Config, PadParams};
use lockforge::error::LfResult;
use lockforge::geometry::parse_points;
use lockforge::pattern::{parse_taps, Pattern};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Node taps in order, e.g. "0,8,2" (skipped middles are filled in).
    #[arg(short, long, required_unless_present = "points", conflicts_with = "points")]
    pub taps: Option<String>,

    /// Pointer positions on the pad in pixels, e.g. "42,38; 150,150".
    /// Positions outside every node's hit radius are ignored.
    #[arg(long)]
    pub points: Option<String>,

    #[command(flatten)]
    pub pad: PadParams,

    /// Print the evaluation as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> LfResult<()> {
    let mut config = args.config;
    config.pad = args.pad;
    let mut state = TrainerState::new(config);

    if let Some(points) = args.points.as_deref() {
        state.config.pad.validate()?;
        for (x, y) in parse_points(points)? {
            state.tap_point(x, y);
        }
        debug!("points {:?} resolved to {:?}", points, state.pattern.nodes());
    } else if let Some(taps) = args.taps.as_deref() {
        let taps = parse_taps(taps)?;
        state.pattern = Pattern::from_taps(taps.iter().copied());
        debug!("taps {:?} canonicalized to {:?}", taps, state.pattern.nodes());
    }

    let pattern = &state.pattern;
    let eval = state.evaluate();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
        return Ok(());
    }

    println!("\n🔎 === PATTERN ANALYSIS === 🔎");
    reports::print_pattern_grid("input", pattern);
    reports::print_feature_report(&eval);
    reports::print_score_report(&eval);
    reports::print_radar_report(&eval.radar);
    reports::print_attack_report(&eval);
    Ok(())
}
