use std::sync::Arc;

use quest_core::Clock;
use quest_core::model::{ModuleIndex, WalkthroughSummary};

use crate::course_service::CourseService;
use crate::error::WalkthroughError;

use super::session::WalkthroughSession;

/// Result of recording one module's grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleResult {
    pub module_index: ModuleIndex,
    pub is_correct: bool,
    pub is_complete: bool,
}

/// Orchestrates walkthrough passes: navigation, score recording, summary.
#[derive(Clone)]
pub struct WalkthroughService {
    clock: Clock,
    course: Arc<CourseService>,
}

impl WalkthroughService {
    #[must_use]
    pub fn new(clock: Clock, course: Arc<CourseService>) -> Self {
        Self { clock, course }
    }

    #[must_use]
    pub fn course(&self) -> Arc<CourseService> {
        Arc::clone(&self.course)
    }

    /// Begins a fresh pass on the intro screen.
    #[must_use]
    pub fn start(&self) -> WalkthroughSession {
        let session = WalkthroughSession::new(self.clock.now());
        tracing::info!(course = self.course.catalog().title(), "walkthrough started");
        session
    }

    /// Marks the current step completed and moves forward.
    pub fn advance(&self, session: &mut WalkthroughSession) {
        session.walkthrough_mut().advance();
        session.stamp_completion(self.clock.now());
    }

    /// Moves back one step, floored at the intro screen.
    pub fn retreat(&self, session: &mut WalkthroughSession) {
        session.walkthrough_mut().retreat();
    }

    /// Records a reported module grade and advances past the module.
    ///
    /// The grade is whatever the module runner computed against the static
    /// answer key; within a pass the first recorded grade wins.
    pub fn record_module_result(
        &self,
        session: &mut WalkthroughSession,
        module_index: ModuleIndex,
        is_correct: bool,
    ) -> ModuleResult {
        session
            .walkthrough_mut()
            .record_score(module_index, is_correct);
        session.stamp_completion(self.clock.now());

        let is_complete = session.is_complete();
        tracing::debug!(module = %module_index, is_correct, "module graded");
        if is_complete {
            tracing::info!(
                correct = session.walkthrough().total_correct(),
                "walkthrough complete"
            );
        }

        ModuleResult {
            module_index,
            is_correct,
            is_complete,
        }
    }

    /// Starts the pass over: step, scores and completed set reset together.
    pub fn restart(&self, session: &mut WalkthroughSession) {
        session.reset(self.clock.now());
        tracing::info!("walkthrough restarted");
    }

    /// Builds the pass summary once the results screen has been reached.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::NotComplete` before the terminal step, and
    /// propagates `SummaryError` if the recorded state is inconsistent.
    pub fn summary(
        &self,
        session: &WalkthroughSession,
    ) -> Result<WalkthroughSummary, WalkthroughError> {
        let completed_at = session
            .completed_at()
            .ok_or(WalkthroughError::NotComplete)?;
        let summary = WalkthroughSummary::from_scores(
            session.started_at(),
            completed_at,
            session.walkthrough().scores(),
        )?;
        Ok(summary)
    }
}
