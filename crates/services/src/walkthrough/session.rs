use chrono::{DateTime, Utc};

use quest_core::model::{Step, Walkthrough};

/// One in-flight pass through the walkthrough, plus its timestamps.
///
/// The step/score state machine itself lives in `quest_core`; this wrapper
/// adds the start timestamp and stamps completion when the terminal screen is
/// first reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughSession {
    walkthrough: Walkthrough,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl WalkthroughSession {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            walkthrough: Walkthrough::new(),
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn walkthrough(&self) -> &Walkthrough {
        &self.walkthrough
    }

    pub(crate) fn walkthrough_mut(&mut self) -> &mut Walkthrough {
        &mut self.walkthrough
    }

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.walkthrough.current_step()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.walkthrough.is_complete()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Set once, the first time the results screen is reached this pass.
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub(crate) fn stamp_completion(&mut self, at: DateTime<Utc>) {
        if self.walkthrough.is_complete() && self.completed_at.is_none() {
            self.completed_at = Some(at);
        }
    }

    pub(crate) fn reset(&mut self, started_at: DateTime<Utc>) {
        self.walkthrough.restart();
        self.started_at = started_at;
        self.completed_at = None;
    }
}
