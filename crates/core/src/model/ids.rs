use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of video+quiz modules in the walkthrough.
pub const MODULE_COUNT: usize = 3;

/// Index of a video+quiz module, always in `0..MODULE_COUNT`.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct ModuleIndex(usize);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("module index {0} out of range 0..{MODULE_COUNT}")]
pub struct InvalidModuleIndex(pub usize);

impl ModuleIndex {
    /// Creates a validated `ModuleIndex`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidModuleIndex` if `value >= MODULE_COUNT`.
    pub fn new(value: usize) -> Result<Self, InvalidModuleIndex> {
        if value < MODULE_COUNT {
            Ok(Self(value))
        } else {
            Err(InvalidModuleIndex(value))
        }
    }

    /// Returns the underlying index.
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    /// All module indices in walkthrough order.
    #[must_use]
    pub fn all() -> [Self; MODULE_COUNT] {
        [Self(0), Self(1), Self(2)]
    }
}

impl TryFrom<usize> for ModuleIndex {
    type Error = InvalidModuleIndex;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleIndex> for usize {
    fn from(index: ModuleIndex) -> Self {
        index.0
    }
}

impl fmt::Debug for ModuleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleIndex({})", self.0)
    }
}

impl fmt::Display for ModuleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `ModuleIndex` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModuleIndexError;

impl fmt::Display for ParseModuleIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse module index from string")
    }
}

impl std::error::Error for ParseModuleIndexError {}

impl FromStr for ModuleIndex {
    type Err = ParseModuleIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.parse::<usize>().map_err(|_| ParseModuleIndexError)?;
        Self::new(raw).map_err(|_| ParseModuleIndexError)
    }
}
