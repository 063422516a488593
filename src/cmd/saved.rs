use crate::reports;
use clap::Args;
use lockforge::api::TrainerState;
use lockforge::config::Config;
use lockforge::error::LfResult;
use lockforge::pattern::{parse_taps, Pattern};
use lockforge::store::PatternStore;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct SaveArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub taps: String,

    /// Entry name; defaults to the next free "Pattern N".
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Position in the saved list (see `list`).
    #[arg(short, long)]
    pub index: usize,
}

pub fn save(args: SaveArgs, store: &PatternStore) -> LfResult<()> {
    let taps = parse_taps(&args.taps)?;
    let state = TrainerState {
        pattern: Pattern::from_taps(taps),
        config: args.config,
    };
    let entry = state.save(store, args.name.as_deref())?;
    println!(
        "✅ Saved '{}' ({} nodes, score {})",
        entry.name, entry.len, entry.score
    );
    Ok(())
}

pub fn list(store: &PatternStore) {
    reports::print_saved_list(&store.load());
}

pub fn delete(args: DeleteArgs, store: &PatternStore) -> LfResult<()> {
    match store.remove(args.index)? {
        Some(entry) => println!("🗑️  Deleted '{}'", entry.name),
        None => warn!("No saved pattern at index {}", args.index),
    }
    Ok(())
}

pub fn clear(store: &PatternStore) -> LfResult<()> {
    store.clear_all()?;
    println!("🗑️  All saved patterns removed");
    Ok(())
}
