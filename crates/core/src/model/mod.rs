mod ids;
mod module;
mod quiz;
mod step;
mod summary;
mod walkthrough;

pub use ids::{InvalidModuleIndex, MODULE_COUNT, ModuleIndex, ParseModuleIndexError};
pub use module::{CourseModule, VideoInfo};
pub use quiz::{QuizDefinition, QuizError};
pub use step::{STEP_COUNT, Step};
pub use summary::{SummaryError, WalkthroughSummary};
pub use walkthrough::Walkthrough;
