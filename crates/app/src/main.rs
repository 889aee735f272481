use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{StoryFeedService, source_from_location};
use stories_core::playback::PlaybackSettings;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSource { raw: String },
    InvalidStoryMs { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSource { raw } => write!(f, "invalid --source value: {raw}"),
            ArgsError::InvalidStoryMs { raw } => {
                write!(f, "invalid --story-ms value (expected milliseconds > 0): {raw}")
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

struct DesktopApp {
    playback_settings: PlaybackSettings,
    story_feed: Arc<StoryFeedService>,
}

impl UiApp for DesktopApp {
    fn playback_settings(&self) -> PlaybackSettings {
        self.playback_settings
    }

    fn story_feed(&self) -> Arc<StoryFeedService> {
        Arc::clone(&self.story_feed)
    }
}

struct Args {
    source: String,
    story_duration: Duration,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--source <path|url>] [--story-ms <millis>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source stories.json");
    eprintln!("  --story-ms 5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STORIES_SOURCE, STORIES_STORY_MS, RUST_LOG");
}

fn parse_story_ms(raw: String) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ArgsError::InvalidStoryMs { raw }),
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut source =
            std::env::var("STORIES_SOURCE").unwrap_or_else(|_| "stories.json".into());
        let mut story_duration = match std::env::var("STORIES_STORY_MS") {
            Ok(raw) => parse_story_ms(raw)?,
            Err(_) => stories_core::playback::STORY_DURATION,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => {
                    let value = require_value(args, "--source")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSource { raw: value });
                    }
                    source = value;
                }
                "--story-ms" => {
                    story_duration = parse_story_ms(require_value(args, "--story-ms")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            source,
            story_duration,
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(parsed) => parsed,
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    let playback_settings = PlaybackSettings::default().with_story_duration(parsed.story_duration)?;
    let source = source_from_location(&parsed.source)?;
    info!(source = %parsed.source, story_ms = parsed.story_duration.as_millis(), "starting stories viewer");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        playback_settings,
        story_feed: Arc::new(StoryFeedService::new(source)),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Stories")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
