use crate::reports;
use clap::Args;
use lockforge::api::evaluate_pattern;
use lockforge::config::Config;
use lockforge::presets::get_all_presets;

#[derive(Args, Debug, Clone)]
pub struct PresetsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only show presets whose name contains this text.
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Draw each preset's grid before the summary table.
    #[arg(long, default_value_t = false)]
    pub grids: bool,
}

pub fn run(args: PresetsArgs) {
    let mut results = Vec::new();

    println!("\n📚 === EXAMPLE PATTERNS === 📚");
    for (preset, pattern) in get_all_presets() {
        let name = preset.to_string();
        if let Some(ref filter) = args.pattern {
            if !name.to_lowercase().contains(&filter.to_lowercase()) {
                continue;
            }
        }
        if args.grids {
            reports::print_pattern_grid(&name, &pattern);
        }
        results.push((name, evaluate_pattern(&pattern, &args.config)));
    }

    // Strongest first
    results.sort_by(|a, b| b.1.score.cmp(&a.1.score).then_with(|| a.0.cmp(&b.0)));

    reports::print_preset_report(&results, &args.config.weights);
}
