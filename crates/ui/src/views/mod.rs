mod intro;
mod module;
mod results;
mod walkthrough;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use intro::IntroView;
pub use module::ModuleView;
pub use results::ResultsView;
pub use walkthrough::WalkthroughView;
