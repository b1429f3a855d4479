use serde::Deserialize;

use quest_core::model::{CourseModule, ModuleIndex, QuizDefinition, VideoInfo};

use crate::error::CatalogError;

const COURSE_JSON: &str = include_str!("../assets/course.json");

#[derive(Debug, Deserialize)]
struct RawCourse {
    title: String,
    tagline: String,
    modules: Vec<RawModule>,
}

#[derive(Debug, Deserialize)]
struct RawModule {
    title: String,
    short_label: String,
    video_title: String,
    video_description: String,
    question: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

/// The full course: app title, tagline and the validated module list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCatalog {
    title: String,
    tagline: String,
    modules: Vec<CourseModule>,
}

impl CourseCatalog {
    /// Parses and validates a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the JSON is malformed, the module count is
    /// wrong, or a quiz fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCourse = serde_json::from_str(json)?;
        let expected = quest_core::model::MODULE_COUNT;
        if raw.modules.len() != expected {
            return Err(CatalogError::WrongModuleCount {
                got: raw.modules.len(),
                expected,
            });
        }

        let mut modules = Vec::with_capacity(raw.modules.len());
        for (position, row) in raw.modules.into_iter().enumerate() {
            let index = ModuleIndex::new(position)?;
            let quiz = QuizDefinition::new(
                row.question,
                row.options,
                row.correct_option,
                row.explanation,
            )
            .map_err(|source| CatalogError::InvalidQuiz {
                index: position,
                source,
            })?;
            modules.push(CourseModule::new(
                index,
                row.title,
                row.short_label,
                VideoInfo::new(row.video_title, row.video_description),
                quiz,
            ));
        }

        Ok(Self {
            title: raw.title,
            tagline: raw.tagline,
            modules,
        })
    }

    /// The catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded JSON fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(COURSE_JSON)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    #[must_use]
    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }
}

/// Read access to course content for the UI and the walkthrough workflow.
#[derive(Debug, Clone)]
pub struct CourseService {
    catalog: CourseCatalog,
}

impl CourseService {
    #[must_use]
    pub fn new(catalog: CourseCatalog) -> Self {
        Self { catalog }
    }

    /// Service over the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded JSON fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(CourseCatalog::builtin()?))
    }

    #[must_use]
    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn module(&self, index: ModuleIndex) -> &CourseModule {
        &self.catalog.modules[index.value()]
    }

    /// Grades a selection for a module against its static answer key.
    #[must_use]
    pub fn grade(&self, index: ModuleIndex, selected: usize) -> bool {
        self.module(index).quiz().grade(selected)
    }
}
