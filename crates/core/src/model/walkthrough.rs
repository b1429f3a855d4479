use std::collections::{BTreeMap, BTreeSet};

use crate::model::ids::{MODULE_COUNT, ModuleIndex};
use crate::model::step::Step;

/// The module progression and scoring state machine.
///
/// Owns the current step, the set of steps advanced past, and the per-module
/// correctness map. All operations are infallible: inputs come from trusted
/// UI events, and out-of-sequence requests degrade to no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    current: Step,
    completed: BTreeSet<Step>,
    scores: BTreeMap<ModuleIndex, bool>,
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self::new()
    }
}

impl Walkthrough {
    /// A fresh pass positioned on the intro screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Step::first(),
            completed: BTreeSet::new(),
            scores: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.current
    }

    /// Steps that have been advanced past. Grows monotonically within a pass.
    #[must_use]
    pub fn completed_steps(&self) -> &BTreeSet<Step> {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, step: Step) -> bool {
        self.completed.contains(&step)
    }

    /// Correctness recorded for a module, if it has been graded this pass.
    #[must_use]
    pub fn score(&self, index: ModuleIndex) -> Option<bool> {
        self.scores.get(&index).copied()
    }

    #[must_use]
    pub fn scores(&self) -> &BTreeMap<ModuleIndex, bool> {
        &self.scores
    }

    /// Number of modules graded correct so far.
    #[must_use]
    pub fn total_correct(&self) -> usize {
        self.scores.values().filter(|correct| **correct).count()
    }

    #[must_use]
    pub fn graded_count(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn all_graded(&self) -> bool {
        self.scores.len() == MODULE_COUNT
    }

    /// True once the walkthrough sits on the terminal results screen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current.is_terminal()
    }

    /// Marks the current step completed and moves to the next one.
    ///
    /// Advancing from the terminal step is a no-op.
    pub fn advance(&mut self) {
        if self.current.is_terminal() {
            return;
        }
        self.completed.insert(self.current);
        self.current = self.current.next();
    }

    /// Moves back one step, floored at the intro screen.
    pub fn retreat(&mut self) {
        self.current = self.current.prev();
    }

    /// Records a module grade and advances.
    ///
    /// A score is written once per module per pass: re-running an already
    /// graded module keeps the first grade, though the step still advances.
    pub fn record_score(&mut self, index: ModuleIndex, is_correct: bool) {
        self.scores.entry(index).or_insert(is_correct);
        self.advance();
    }

    /// Starts a new pass: step back to intro, scores and completed set
    /// cleared together.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}
