use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use remote::Remote;
use services::{AppServices, CatalogService, LeaderboardService, QuizLoopService};
use ui::{App, UiApp, build_app_context};

const DEFAULT_API_URL: &str = "http://localhost:5000";
const API_URL_ENV: &str = "TRIVIA_API_URL";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyApiUrl,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyApiUrl => write!(f, "--api-url must not be empty"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }

    fn leaderboard(&self) -> Arc<LeaderboardService> {
        self.services.leaderboard()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    api_url: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Ui(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {DEFAULT_API_URL}");
    eprintln!();
    eprintln!("Environment (a .env file is read if present):");
    eprintln!("  {API_URL_ENV}, RUST_LOG");
}

impl Args {
    /// The flag wins over the environment, which wins over the default.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_api_url: Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut api_url = env_api_url
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyApiUrl);
                    }
                    api_url = value;
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Ui(Self {
            api_url: api_url.trim().to_string(),
        }))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let command = Args::parse(&mut argv, std::env::var(API_URL_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let args = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Ui(args) => args,
    };

    let remote = Remote::http(&args.api_url)?;
    log::info!("using trivia service at {}", args.api_url);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: AppServices::new(&remote),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
