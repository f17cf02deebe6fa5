//! `progress` subcommand.

use super::Context;
use anyhow::Result;
use voicebank_core::session::{RecordedSetRepository, progress};

const BAR_WIDTH: usize = 30;

/// Prints the contributor's position on the milestone ladder.
pub async fn run(context: &Context) -> Result<()> {
    let total = context.journal.total().await?;
    let ladder = progress(total);

    let filled = (ladder.percent / 100.0 * BAR_WIDTH as f32).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));

    println!("Recorded: {} sentences", total);
    println!(
        "[{}] {:.0}%  ({} -> {})",
        bar, ladder.percent, ladder.previous, ladder.next
    );
    println!("Next milestone at {} recordings.", ladder.next);

    Ok(())
}
