//! Session domain module.
//!
//! Everything that decides what a contributor sees next and how far along
//! they are:
//!
//! - `selector`: batch construction (`SessionSelector`)
//! - `shuffle`: Fisher-Yates shuffling over an injected generator
//! - `milestone`: reward-milestone ladder arithmetic
//! - `model`: the in-flight batch (`RecordingSession`)
//! - `repository`: persistence trait for the recorded-id set

mod milestone;
mod model;
mod repository;
mod selector;
mod shuffle;

// Re-export public API
pub use milestone::{
    FIRST_MILESTONE, MILESTONE_INTERVAL, MilestoneProgress, SECOND_MILESTONE, is_milestone,
    next_milestone, prev_milestone, progress,
};
pub use model::RecordingSession;
pub use repository::RecordedSetRepository;
pub use selector::{DEFAULT_SESSION_SIZE, SessionSelector};
pub use shuffle::{shuffle, shuffled};
