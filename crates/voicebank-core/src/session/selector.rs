//! Session batch construction.
//!
//! The selector answers one question: given everything the contributor has
//! already recorded, which sentences do we present next? Unrecorded anchors
//! always come first, in corpus order. The remainder of the batch is a
//! randomized selection from the pool that avoids repeats while fresh
//! material exists and degrades to repeats once the pool is exhausted,
//! so a contributor is never blocked by a finite corpus.

use crate::corpus::{Corpus, Sentence};
use crate::session::shuffle::shuffled;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

/// Target number of sentences in one session batch.
pub const DEFAULT_SESSION_SIZE: usize = 20;

/// Builds session batches from an immutable, shared corpus.
///
/// The selector is stateless apart from its corpus handle and target size:
/// each call recomputes the batch wholesale from the recorded-id set the
/// caller passes in. It never mutates the corpus or the input set, and it
/// has no failure path (see the repeat fallback in [`Self::build_batch`]).
pub struct SessionSelector {
    /// Shared read-only corpus, partitioned into anchors and pool.
    corpus: Arc<Corpus>,
    /// Batch size the pool selection fills up to.
    target_size: usize,
}

impl SessionSelector {
    /// Creates a selector with the default session size.
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_target_size(corpus, DEFAULT_SESSION_SIZE)
    }

    /// Creates a selector with an explicit target batch size.
    pub fn with_target_size(corpus: Arc<Corpus>, target_size: usize) -> Self {
        Self {
            corpus,
            target_size,
        }
    }

    /// Returns the configured target batch size.
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Returns the corpus this selector draws from.
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    /// Builds the next session batch using the thread-local generator.
    ///
    /// Convenience wrapper over [`Self::build_batch`] for production
    /// callers that do not need deterministic output.
    pub fn next_batch(&self, recorded: &HashSet<String>) -> Vec<Sentence> {
        self.build_batch(recorded, &mut rand::thread_rng())
    }

    /// Builds the next session batch.
    ///
    /// # Arguments
    ///
    /// * `recorded` - Lifetime set of sentence ids the contributor has
    ///   already recorded. Only read, never mutated.
    /// * `rng` - Random source for pool shuffling. Pass a seeded generator
    ///   for deterministic output.
    ///
    /// # Selection policy
    ///
    /// 1. Every unrecorded anchor is included, in corpus order, unshuffled.
    /// 2. The batch is filled up to the target size with pool sentences:
    ///    a slice of a shuffled unrecorded pool while enough fresh material
    ///    exists, padded from repeated shuffles of the full pool (repeats
    ///    allowed) once it does not.
    /// 3. If unrecorded anchors alone exceed the target size, the batch
    ///    grows beyond the target and contains no pool sentences.
    ///
    /// An empty pool never loops: the batch is then anchors-only.
    pub fn build_batch<R: Rng + ?Sized>(
        &self,
        recorded: &HashSet<String>,
        rng: &mut R,
    ) -> Vec<Sentence> {
        let anchors: Vec<&Sentence> = self
            .corpus
            .anchors()
            .iter()
            .filter(|s| !recorded.contains(&s.id))
            .collect();

        let needed = self.target_size.saturating_sub(anchors.len());

        let fresh: Vec<&Sentence> = self
            .corpus
            .pool()
            .iter()
            .filter(|s| !recorded.contains(&s.id))
            .collect();

        let mut picks: Vec<&Sentence>;
        if fresh.len() >= needed {
            // Enough unseen material: a shuffle slice guarantees no repeats.
            picks = shuffled(&fresh, rng);
            picks.truncate(needed);
        } else {
            // Unseen material exhausted: take all of it, then pad from the
            // full pool. Repeats are acceptable here; the corpus is finite
            // and must not block progress.
            picks = shuffled(&fresh, rng);
            let full: Vec<&Sentence> = self.corpus.pool().iter().collect();
            while picks.len() < needed && !full.is_empty() {
                for sentence in shuffled(&full, rng) {
                    if picks.len() == needed {
                        break;
                    }
                    picks.push(sentence);
                }
            }
        }

        anchors.into_iter().chain(picks).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::SentenceCategory;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sentence(id: &str, category: SentenceCategory) -> Sentence {
        Sentence {
            id: id.to_string(),
            text: format!("text for {}", id),
            category,
            word_count: 4,
            emotion: None,
            context: None,
        }
    }

    /// Corpus with anchors a1..aN and pool sentences p1..pM.
    fn corpus(anchor_count: usize, pool_count: usize) -> Arc<Corpus> {
        let mut sentences = Vec::new();
        for i in 1..=anchor_count {
            sentences.push(sentence(&format!("a{}", i), SentenceCategory::Anchor));
        }
        for i in 1..=pool_count {
            sentences.push(sentence(&format!("p{}", i), SentenceCategory::Everyday));
        }
        Arc::new(Corpus::new(sentences).unwrap())
    }

    fn recorded(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn ids(batch: &[Sentence]) -> Vec<&str> {
        batch.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_unrecorded_anchors_lead_in_corpus_order() {
        let selector = SessionSelector::new(corpus(4, 30));
        let mut rng = StdRng::seed_from_u64(11);

        let batch = selector.build_batch(&recorded(&["a2"]), &mut rng);

        assert_eq!(&ids(&batch)[..3], &["a1", "a3", "a4"]);
        assert!(batch[3..].iter().all(|s| !s.is_anchor()));
    }

    #[test]
    fn test_batch_reaches_target_size() {
        let selector = SessionSelector::new(corpus(3, 40));
        let mut rng = StdRng::seed_from_u64(5);

        let batch = selector.build_batch(&HashSet::new(), &mut rng);

        assert_eq!(batch.len(), DEFAULT_SESSION_SIZE);
    }

    #[test]
    fn test_no_duplicates_while_fresh_pool_suffices() {
        let selector = SessionSelector::new(corpus(2, 50));
        let mut rng = StdRng::seed_from_u64(21);
        let already = recorded(&["p1", "p2", "p3"]);

        let batch = selector.build_batch(&already, &mut rng);

        assert_eq!(batch.len(), DEFAULT_SESSION_SIZE);
        let pool_ids: Vec<&str> = ids(&batch)[2..].to_vec();
        let unique: HashSet<&str> = pool_ids.iter().copied().collect();
        assert_eq!(unique.len(), pool_ids.len(), "pool picks must not repeat");
        assert!(pool_ids.iter().all(|id| !already.contains(*id)));
    }

    #[test]
    fn test_anchors_beyond_target_suppress_pool_picks() {
        // More unrecorded anchors than the target: the batch grows past the
        // target and contains every pending anchor, nothing else.
        let selector = SessionSelector::new(corpus(25, 10));
        let mut rng = StdRng::seed_from_u64(3);

        let batch = selector.build_batch(&HashSet::new(), &mut rng);

        assert_eq!(batch.len(), 25);
        assert!(batch.iter().all(|s| s.is_anchor()));
    }

    #[test]
    fn test_repeat_fallback_fills_batch() {
        // 3 anchors, 5 pool, recorded = {a1, p1, p2}: only 3 fresh pool
        // sentences remain against a need of 18
        let selector = SessionSelector::new(corpus(3, 5));
        let mut rng = StdRng::seed_from_u64(77);
        let already = recorded(&["a1", "p1", "p2"]);

        let batch = selector.build_batch(&already, &mut rng);

        assert_eq!(batch.len(), DEFAULT_SESSION_SIZE);
        assert_eq!(&ids(&batch)[..2], &["a2", "a3"]);

        // the three fresh pool sentences come first, in some order
        let fresh: HashSet<&str> = ids(&batch)[2..5].iter().copied().collect();
        assert_eq!(fresh, ["p3", "p4", "p5"].into_iter().collect());

        // the rest is padded from the full pool, repeats included
        let padding = &ids(&batch)[2..];
        assert_eq!(padding.len(), 18);
        for id in ["p1", "p2", "p3", "p4", "p5"] {
            assert!(padding.contains(&id), "{} missing from padded batch", id);
        }
        assert!(batch[2..].iter().all(|s| !s.is_anchor()));
    }

    #[test]
    fn test_fully_recorded_corpus_still_yields_full_batch() {
        let selector = SessionSelector::new(corpus(3, 5));
        let mut rng = StdRng::seed_from_u64(13);
        let everything = recorded(&["a1", "a2", "a3", "p1", "p2", "p3", "p4", "p5"]);

        let batch = selector.build_batch(&everything, &mut rng);

        assert_eq!(batch.len(), DEFAULT_SESSION_SIZE);
        assert!(batch.iter().all(|s| !s.is_anchor()));
    }

    #[test]
    fn test_anchor_only_corpus_never_loops() {
        let selector = SessionSelector::new(corpus(5, 0));

        let open = selector.build_batch(&HashSet::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(ids(&open), vec!["a1", "a2", "a3", "a4", "a5"]);

        let done = selector.build_batch(
            &recorded(&["a1", "a2", "a3", "a4", "a5"]),
            &mut StdRng::seed_from_u64(1),
        );
        assert!(done.is_empty());
    }

    #[test]
    fn test_seeded_batches_are_deterministic() {
        let selector = SessionSelector::new(corpus(2, 30));
        let already = recorded(&["p5", "p6"]);

        let a = selector.build_batch(&already, &mut StdRng::seed_from_u64(42));
        let b = selector.build_batch(&already, &mut StdRng::seed_from_u64(42));
        let c = selector.build_batch(&already, &mut StdRng::seed_from_u64(43));

        assert_eq!(ids(&a), ids(&b));
        assert_ne!(ids(&a), ids(&c));
    }

    #[test]
    fn test_custom_target_size() {
        let selector = SessionSelector::with_target_size(corpus(1, 20), 5);

        let batch = selector.build_batch(&HashSet::new(), &mut StdRng::seed_from_u64(9));

        assert_eq!(selector.target_size(), 5);
        assert_eq!(batch.len(), 5);
        assert_eq!(batch[0].id, "a1");
    }

    #[test]
    fn test_next_batch_uses_ambient_randomness() {
        let selector = SessionSelector::new(corpus(2, 40));

        let batch = selector.next_batch(&HashSet::new());

        assert_eq!(batch.len(), DEFAULT_SESSION_SIZE);
        assert_eq!(&ids(&batch)[..2], &["a1", "a2"]);
    }
}
