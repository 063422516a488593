use clap::Args;
use lockforge::config::AttackParams;
use lockforge::estimator::{format_count, AttackEstimate};
use lockforge::scorer::StrengthRating;

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub attack: AttackParams,

    /// Strength score (0-100).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub score: u8,
}

pub fn run(args: EstimateArgs) {
    let est = AttackEstimate::from_score(args.score, args.attack.attempts_per_second);
    println!(
        "Score {} ({}): {} tries, {} @ {}/s",
        args.score,
        StrengthRating::from_score(args.score),
        format_count(est.tries),
        est.duration,
        format_count(est.attempts_per_second)
    );
}
