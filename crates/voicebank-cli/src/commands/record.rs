//! `record` subcommand.

use super::Context;
use anyhow::{Result, bail};
use voicebank_core::session::{RecordedSetRepository, is_milestone};

/// Confirms recordings in the journal and reports milestone hits.
pub async fn run(context: &Context, ids: &[String]) -> Result<()> {
    // Reject unknown ids up front so a typo doesn't half-apply the batch.
    for id in ids {
        if !context.corpus.contains(id) {
            bail!("Unknown sentence id: '{}'", id);
        }
    }

    let mut already = context.journal.load().await?;
    for id in ids {
        if already.contains(id) {
            println!("{}: already recorded", id);
            continue;
        }

        let total = context.journal.record(id).await?;
        already.insert(id.clone());
        println!("{}: recorded ({} total)", id, total);

        if is_milestone(total) {
            println!("Milestone reached: {} recordings!", total);
        }
    }

    Ok(())
}
