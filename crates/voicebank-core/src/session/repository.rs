//! Recorded-set repository trait.
//!
//! Defines the interface for recorded-id persistence.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// An abstract repository for the contributor's lifetime recorded-id set.
///
/// This trait decouples the selection logic from the storage mechanism
/// (local journal file, platform API, ...). The set only ever grows:
/// implementations confirm recordings one id at a time and callers reload
/// the full set rather than patching a cached copy, so every batch build
/// sees a consistent value.
#[async_trait]
pub trait RecordedSetRepository: Send + Sync {
    /// Loads the full set of recorded sentence ids.
    ///
    /// # Returns
    ///
    /// - `Ok(set)`: the lifetime recorded-id set (possibly empty)
    /// - `Err(_)`: error occurred during retrieval
    async fn load(&self) -> Result<HashSet<String>>;

    /// Confirms one recording and returns the updated lifetime total.
    ///
    /// Recording an id that is already present is a no-op; the returned
    /// total always counts distinct ids.
    ///
    /// # Arguments
    ///
    /// * `sentence_id` - The id of the recorded sentence
    async fn record(&self, sentence_id: &str) -> Result<u32>;

    /// Returns the lifetime count of distinct recorded ids.
    async fn total(&self) -> Result<u32>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // In-memory repository exercising the trait contract
    struct MockRecordedSetRepository {
        ids: Mutex<HashSet<String>>,
    }

    impl MockRecordedSetRepository {
        fn new() -> Self {
            Self {
                ids: Mutex::new(HashSet::new()),
            }
        }
    }

    #[async_trait]
    impl RecordedSetRepository for MockRecordedSetRepository {
        async fn load(&self) -> Result<HashSet<String>> {
            Ok(self.ids.lock().unwrap().clone())
        }

        async fn record(&self, sentence_id: &str) -> Result<u32> {
            let mut ids = self.ids.lock().unwrap();
            ids.insert(sentence_id.to_string());
            Ok(ids.len() as u32)
        }

        async fn total(&self) -> Result<u32> {
            Ok(self.ids.lock().unwrap().len() as u32)
        }
    }

    #[tokio::test]
    async fn test_record_is_idempotent_and_total_counts_distinct_ids() {
        let repository = MockRecordedSetRepository::new();

        assert_eq!(repository.record("s1").await.unwrap(), 1);
        assert_eq!(repository.record("s2").await.unwrap(), 2);
        assert_eq!(repository.record("s1").await.unwrap(), 2);

        assert_eq!(repository.total().await.unwrap(), 2);
        let set = repository.load().await.unwrap();
        assert!(set.contains("s1") && set.contains("s2"));
    }
}
