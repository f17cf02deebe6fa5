//! `corpus` subcommands.

use super::Context;
use anyhow::Result;
use std::collections::BTreeMap;
use voicebank_core::session::RecordedSetRepository;

/// Prints corpus statistics and recorded coverage.
pub async fn stats(context: &Context) -> Result<()> {
    let corpus = &context.corpus;
    let recorded = context.journal.load().await?;

    println!(
        "Sentences: {} ({} anchors, {} pool)",
        corpus.len(),
        corpus.anchors().len(),
        corpus.pool().len()
    );

    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for sentence in corpus.iter() {
        *by_category.entry(sentence.category.to_string()).or_default() += 1;
    }
    for (category, count) in &by_category {
        println!("  {:<10} {}", category, count);
    }

    let covered = corpus.iter().filter(|s| recorded.contains(&s.id)).count();
    println!(
        "Recorded: {}/{} ({} remaining)",
        covered,
        corpus.len(),
        corpus.len() - covered
    );

    Ok(())
}
