use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quest_core::Clock;
use services::{CourseService, WalkthroughService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_WATCH_DELAY_MS: u64 = 3_000;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidWatchDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidWatchDelay { raw } => {
                write!(f, "invalid --watch-delay-ms value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--watch-delay-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --watch-delay-ms {DEFAULT_WATCH_DELAY_MS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUEST_WATCH_DELAY_MS");
}

struct Args {
    watch_delay: Duration,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut watch_delay_ms = std::env::var("QUEST_WATCH_DELAY_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_WATCH_DELAY_MS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--watch-delay-ms" => {
                    let value = require_value(args, "--watch-delay-ms")?;
                    watch_delay_ms = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidWatchDelay { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            watch_delay: Duration::from_millis(watch_delay_ms),
        })
    }
}

struct DesktopApp {
    watch_delay: Duration,
    course: Arc<CourseService>,
    walkthroughs: Arc<WalkthroughService>,
}

impl UiApp for DesktopApp {
    fn watch_delay(&self) -> Duration {
        self.watch_delay
    }

    fn course(&self) -> Arc<CourseService> {
        Arc::clone(&self.course)
    }

    fn walkthroughs(&self) -> Arc<WalkthroughService> {
        Arc::clone(&self.walkthroughs)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // The course content is embedded; a validation failure here is a build
    // problem, not a user problem, so surfacing it once at startup is enough.
    let course = Arc::new(CourseService::builtin()?);
    let walkthroughs = Arc::new(WalkthroughService::new(
        Clock::system(),
        Arc::clone(&course),
    ));
    tracing::info!(
        course = course.catalog().title(),
        watch_delay_ms = parsed.watch_delay.as_millis() as u64,
        "starting desktop app"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        watch_delay: parsed.watch_delay,
        course,
        walkthroughs,
    });
    let context = build_app_context(&app);

    // Explicitly not always-on-top; some dev setups default to it on macOS.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("RCT Quest")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
