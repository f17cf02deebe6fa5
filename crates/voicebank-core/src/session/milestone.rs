//! Milestone ladder arithmetic.
//!
//! Reward milestones sit at 5, 20, and then every 50 recordings
//! (70, 120, 170, ...). The functions here map a lifetime recorded count to
//! the surrounding ladder breakpoints; the surrounding application uses them
//! to gate token rewards and render the progress bar. Pure arithmetic, no
//! failure paths.

use serde::Serialize;

/// First milestone: the warm-up goal.
pub const FIRST_MILESTONE: u32 = 5;
/// Second milestone: end of the onboarding ramp.
pub const SECOND_MILESTONE: u32 = 20;
/// Ladder spacing after the second milestone.
pub const MILESTONE_INTERVAL: u32 = 50;

/// Returns the next milestone strictly above `total_recorded`.
pub fn next_milestone(total_recorded: u32) -> u32 {
    if total_recorded < FIRST_MILESTONE {
        FIRST_MILESTONE
    } else if total_recorded < SECOND_MILESTONE {
        SECOND_MILESTONE
    } else {
        let steps = (total_recorded - SECOND_MILESTONE) / MILESTONE_INTERVAL + 1;
        SECOND_MILESTONE + MILESTONE_INTERVAL * steps
    }
}

/// Returns the last milestone at or below `total_recorded`.
pub fn prev_milestone(total_recorded: u32) -> u32 {
    if total_recorded < FIRST_MILESTONE {
        0
    } else if total_recorded < SECOND_MILESTONE {
        FIRST_MILESTONE
    } else {
        let steps = (total_recorded - SECOND_MILESTONE) / MILESTONE_INTERVAL;
        SECOND_MILESTONE + MILESTONE_INTERVAL * steps
    }
}

/// Returns true when `total_recorded` sits exactly on the ladder.
///
/// This is the reward-trigger signal: it fires on 5, 20, 70, 120, ... and
/// never on zero.
pub fn is_milestone(total_recorded: u32) -> bool {
    total_recorded > 0 && prev_milestone(total_recorded) == total_recorded
}

/// Position between the surrounding milestones, for progress rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MilestoneProgress {
    /// Last milestone at or below the current count.
    pub previous: u32,
    /// Next milestone strictly above the current count.
    pub next: u32,
    /// Percentage of the current ladder segment covered, clamped to [0, 100].
    pub percent: f32,
}

/// Computes the contributor's position on the milestone ladder.
pub fn progress(total_recorded: u32) -> MilestoneProgress {
    let previous = prev_milestone(total_recorded);
    let next = next_milestone(total_recorded);
    let percent =
        ((total_recorded - previous) as f32 / (next - previous) as f32 * 100.0).clamp(0.0, 100.0);
    MilestoneProgress {
        previous,
        next,
        percent,
    }
}
