#![forbid(unsafe_code)]

pub mod course_service;
pub mod error;
pub mod walkthrough;

pub use quest_core::Clock;

pub use course_service::{CourseCatalog, CourseService};
pub use error::{CatalogError, WalkthroughError};
pub use walkthrough::{
    ModuleResult, WalkthroughProgress, WalkthroughService, WalkthroughSession,
};
