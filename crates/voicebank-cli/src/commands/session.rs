//! `session` subcommands.

use super::Context;
use anyhow::Result;
use voicebank_core::session::{RecordedSetRepository, RecordingSession, SessionSelector};

/// Builds and prints the next session batch.
pub async fn next(context: &Context, count: Option<usize>) -> Result<()> {
    let recorded = context.journal.load().await?;
    let target = count.unwrap_or(context.config.session.target_size);
    let selector = SessionSelector::with_target_size(context.corpus.clone(), target);

    let mut session = RecordingSession::new(selector.next_batch(&recorded));
    if session.is_empty() {
        println!("Nothing to record: every sentence in the corpus is done.");
        return Ok(());
    }

    println!("Next session ({} sentences):", session.len());
    while let Some(sentence) = session.current() {
        let marker = if sentence.is_anchor() { "  [anchor]" } else { "" };
        let min_secs = context.config.session.min_recording_secs(sentence);
        println!(
            "{:>3}. {}  ({}, min {:.1}s){}",
            session.position() + 1,
            sentence.text,
            sentence.id,
            min_secs,
            marker
        );
        session.advance();
    }

    Ok(())
}
