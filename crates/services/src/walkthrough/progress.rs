use quest_core::model::{STEP_COUNT, Walkthrough};

/// Aggregated view of walkthrough progress for the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkthroughProgress {
    pub total_steps: usize,
    pub completed: usize,
    pub percent: u8,
    pub is_complete: bool,
}

impl WalkthroughProgress {
    #[must_use]
    pub fn of(walkthrough: &Walkthrough) -> Self {
        let ordinal = walkthrough.current_step().ordinal();
        let percent = (ordinal * 100 / (STEP_COUNT - 1)) as u8;
        Self {
            total_steps: STEP_COUNT,
            completed: walkthrough.completed_steps().len(),
            percent,
            is_complete: walkthrough.is_complete(),
        }
    }
}
