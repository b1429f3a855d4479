use crate::model::ids::{MODULE_COUNT, ModuleIndex};

/// Number of screens in the walkthrough: intro, one per module, results.
pub const STEP_COUNT: usize = MODULE_COUNT + 2;

/// A single screen in the five-screen sequence.
///
/// Ordinals run 0..STEP_COUNT: `Intro` is 0, `Module(m)` is `1 + m`,
/// `Results` is the terminal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Intro,
    Module(ModuleIndex),
    Results,
}

impl Step {
    /// The first screen of a pass.
    #[must_use]
    pub fn first() -> Self {
        Self::Intro
    }

    /// Ordinal position in the sequence.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        match self {
            Step::Intro => 0,
            Step::Module(index) => 1 + index.value(),
            Step::Results => STEP_COUNT - 1,
        }
    }

    /// Inverse of [`Step::ordinal`].
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Step::Intro),
            n if n < STEP_COUNT - 1 => ModuleIndex::new(n - 1).ok().map(Step::Module),
            n if n == STEP_COUNT - 1 => Some(Step::Results),
            _ => None,
        }
    }

    /// The following step; the terminal step yields itself.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::from_ordinal(self.ordinal() + 1).unwrap_or(*self)
    }

    /// The preceding step, floored at `Intro`.
    #[must_use]
    pub fn prev(&self) -> Self {
        match self.ordinal() {
            0 => *self,
            n => Self::from_ordinal(n - 1).unwrap_or(*self),
        }
    }

    /// True for the results screen.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Results)
    }
}
