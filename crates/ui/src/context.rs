use std::sync::Arc;
use std::time::Duration;

use services::{CourseService, WalkthroughService};

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    /// Simulated playback time before a video counts as watched.
    fn watch_delay(&self) -> Duration;

    fn course(&self) -> Arc<CourseService>;
    fn walkthroughs(&self) -> Arc<WalkthroughService>;
}

#[derive(Clone)]
pub struct AppContext {
    watch_delay: Duration,
    course: Arc<CourseService>,
    walkthroughs: Arc<WalkthroughService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            watch_delay: app.watch_delay(),
            course: app.course(),
            walkthroughs: app.walkthroughs(),
        }
    }

    #[must_use]
    pub fn watch_delay(&self) -> Duration {
        self.watch_delay
    }

    #[must_use]
    pub fn course(&self) -> Arc<CourseService> {
        Arc::clone(&self.course)
    }

    #[must_use]
    pub fn walkthroughs(&self) -> Arc<WalkthroughService> {
        Arc::clone(&self.walkthroughs)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
