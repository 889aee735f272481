use std::fmt;
use std::path::PathBuf;

use storage::repository::{StoryItemRecord, UserRecord, render_users};

#[derive(Debug, Clone)]
struct Args {
    out: PathBuf,
    users: u32,
    items: u32,
    image_base: String,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUsers { raw: String },
    InvalidItems { raw: String },
    InvalidOut { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUsers { raw } => write!(f, "invalid --users value: {raw}"),
            ArgsError::InvalidItems { raw } => write!(f, "invalid --items value: {raw}"),
            ArgsError::InvalidOut { raw } => write!(f, "invalid --out value: {raw}"),
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

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut out = std::env::var("STORIES_SEED_OUT")
            .map_or_else(|_| PathBuf::from("stories.json"), PathBuf::from);
        let mut users = 3;
        let mut items = 3;
        let mut image_base = "https://picsum.photos/seed".to_string();

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => {
                    let value = require_value(&mut args, "--out")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidOut { raw: value });
                    }
                    out = PathBuf::from(value);
                }
                "--users" => {
                    let value = require_value(&mut args, "--users")?;
                    users = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidUsers { raw: value.clone() })?;
                }
                "--items" => {
                    let value = require_value(&mut args, "--items")?;
                    items = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidItems { raw: value.clone() })?;
                }
                "--image-base" => {
                    image_base = require_value(&mut args, "--image-base")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            out,
            users,
            items,
            image_base,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out <path>          Stories document to write (default: stories.json)");
    eprintln!("  --users <n>           Number of users (default: 3)");
    eprintln!("  --items <n>           Story items per user (default: 3)");
    eprintln!("  --image-base <url>    Placeholder image host (default: https://picsum.photos/seed)");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STORIES_SEED_OUT");
}

fn sample_users(args: &Args) -> Vec<UserRecord> {
    let base = args.image_base.trim_end_matches('/');
    (1..=args.users)
        .map(|user| UserRecord {
            user_name: format!("user{user}"),
            user_thumbnail: format!("{base}/user{user}/96/96"),
            story_items: Some(
                (1..=args.items)
                    .map(|item| StoryItemRecord {
                        image_url: Some(format!("{base}/user{user}-{item}/720/1280")),
                    })
                    .collect(),
            ),
        })
        .collect()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse()?;
    let document = render_users(&sample_users(&args))?;
    if let Some(parent) = args.out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&args.out, document)?;
    eprintln!(
        "seed: wrote {} users x {} items to {}",
        args.users,
        args.items,
        args.out.display()
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(2);
    }
}
