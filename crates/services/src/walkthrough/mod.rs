mod progress;
mod session;
mod workflow;

pub use progress::WalkthroughProgress;
pub use session::WalkthroughSession;
pub use workflow::{ModuleResult, WalkthroughService};
