// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::Write;
use std::path::PathBuf;

use epgtidy::app_config::{self, Config};
use epgtidy::app_controller::Controller;
use epgtidy::errors;
use epgtidy::sources::SourceLocation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify programmes and report rule violations without changing anything
    Inspect {
        /// Guide to read (path or http(s) URL); defaults to the configured source
        #[arg(value_name = "SOURCE", env = "EPGTIDY_SOURCE")]
        source: Option<String>,
    },

    /// Rewrite programme titles and descriptions and write a compressed guide
    Normalize {
        /// Guide to read (path or http(s) URL); defaults to the configured source
        #[arg(value_name = "SOURCE", env = "EPGTIDY_SOURCE")]
        source: Option<String>,

        /// Output file; defaults to the configured output path
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Log one line per rewritten programme
        #[arg(long)]
        log_entries: Option<bool>,
    },

    /// Generate shell completions for epgtidy
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// epgtidy - classify and normalize XMLTV programme guides
#[derive(Parser, Debug)]
#[command(name = "epgtidy")]
#[command(version)]
#[command(about = "Classify and normalize programme listings in gzip-compressed XMLTV guides")]
#[command(long_about = "epgtidy reads a gzip-compressed XMLTV guide, classifies every programme as a
sport event, a movie or a serial episode, and rewrites titles and descriptions
into a consistent format.

EXAMPLES:
    epgtidy inspect ./public/epg6_modified.xml.gz     # Report rule violations
    epgtidy normalize                                 # Normalize the configured source
    epgtidy normalize guide.xml.gz -o out/guide.xml.gz
    epgtidy --log-level debug normalize https://example.com/epg.xml.gz
    epgtidy completions bash > epgtidy.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
                now,
                tag,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // The logger accepts everything; the effective level is set via max_level
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Err(e) = run(cli).await {
        error!("[{}] {:#}", errors::kind_of(&e), e);
        std::process::exit(1);
    }
}

async fn run(cli: CommandLineOptions) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "epgtidy", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;

    // Override config with CLI options if provided
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    match cli.command {
        Commands::Inspect { source } => {
            if let Some(source) = source {
                config.source = source;
            }
            let controller = Controller::with_config(config)?;
            let location: SourceLocation = controller.config().source_location()?;
            controller.run_inspect(&location).await?;
        }
        Commands::Normalize {
            source,
            output,
            log_entries,
        } => {
            if let Some(source) = source {
                config.source = source;
            }
            if let Some(output) = output {
                config.output_path = output.to_string_lossy().into_owned();
            }
            if let Some(log_entries) = log_entries {
                config.log_entries = log_entries;
            }
            let controller = Controller::with_config(config)?;
            let location = controller.config().source_location()?;
            let output_path = PathBuf::from(&controller.config().output_path);
            controller.run_normalize(&location, &output_path).await?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
