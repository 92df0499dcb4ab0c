mod demo;
mod paths;
mod settings;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use quill::prelude::*;
use quill::{ArticleError, RuntimeError};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use settings::{LogLevel, Settings, SettingsError};

/// Read interactive articles in the terminal.
#[derive(Parser, Debug)]
#[command(name = "quill-reader", version, about)]
struct Cli {
    /// Article to open (JSON). Opens the built-in demo when omitted.
    article: Option<PathBuf>,

    /// Show revealed content immediately instead of fading it in
    #[arg(long)]
    reduced_motion: bool,

    /// Print the rendered article to stdout instead of opening the reader
    #[arg(long)]
    dump: bool,

    /// Page width used with --dump
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Expand a disclosure (e.g. details-4) before showing the article
    #[arg(long = "expand", value_name = "ID")]
    expand: Vec<String>,

    /// Fade duration in milliseconds
    #[arg(long, value_name = "MS")]
    fade_ms: Option<u64>,

    /// Log verbosity
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Article(#[from] ArticleError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("failed to set up logging: {0}")]
    Logging(String),
}

impl Cli {
    /// Command-line flags take precedence over the settings file.
    fn apply(&self, mut settings: Settings) -> Settings {
        if self.reduced_motion {
            settings.reduced_motion = true;
        }
        if let Some(ms) = self.fade_ms {
            settings.fade_duration_ms = ms;
        }
        if let Some(level) = self.log_level {
            settings.log_level = level;
        }
        settings
    }
}

fn init_logging(level: LevelFilter) -> Result<(), AppError> {
    let (Some(cache), Some(log_path)) = (paths::cache_dir(), paths::log_file()) else {
        // No home directory: run without a log file
        return Ok(());
    };

    fs::create_dir_all(&cache).map_err(|e| AppError::Logging(e.to_string()))?;
    paths::rotate_logs(&cache);

    let log_file = File::create(&log_path).map_err(|e| AppError::Logging(e.to_string()))?;
    WriteLogger::init(level, Config::default(), log_file)
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn expand(view: &mut ArticleView, id: &str) {
    if let Some(disclosure) = view.disclosure_mut(id) {
        disclosure.toggle_open();
    } else if !view.activate(id) {
        warn!("--expand {id}: no such disclosure");
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let settings = match paths::settings_file() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let settings = cli.apply(settings);

    init_logging(settings.log_level.into())?;
    info!("quill-reader {} starting", env!("CARGO_PKG_VERSION"));

    let article = match &cli.article {
        Some(path) => Article::load(path)?,
        None => demo::demo_article()?,
    };

    let mut view = ArticleView::new(article);
    for id in &cli.expand {
        expand(&mut view, id);
    }

    if cli.dump {
        for line in render_snapshot(&view, cli.width, &InstantPresenter) {
            println!("{line}");
        }
        return Ok(());
    }

    let config = RuntimeConfig::new()
        .reduced_motion(settings.reduced_motion)
        .fade_duration(settings.fade_duration());
    let mut runtime = Runtime::new(config)?;
    runtime.run(&mut view).await?;

    info!("quill-reader exiting");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
