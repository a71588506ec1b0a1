// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use lengua_validator::app_config::{self, Config, ValidationStrategy};
use lengua_validator::{Controller, ValidationRequest};

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an answer by back-translation and edit distance
    #[command(alias = "classic")]
    Validate(ValidateArgs),

    /// Validate an answer with the generative model
    #[command(alias = "ai")]
    ValidateAi(ValidateArgs),

    /// Generate shell completions for lengua-validator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Spanish prompt shown to the learner
    #[arg(short, long)]
    original: String,

    /// Learner's Quechua answer
    #[arg(short, long, default_value = "")]
    answer: String,

    /// Reference Quechua translation, echoed back in the response
    #[arg(short, long, default_value = "")]
    reference: String,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Translation service API key
    #[arg(long, env = "GOOGLE_TRANSLATE_API_KEY", hide_env_values = true)]
    translate_api_key: Option<String>,

    /// Generative model API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Generative model name (e.g., 'gemini-2.5-flash')
    #[arg(short, long)]
    model: Option<String>,
}

/// Lengua Validator - grade Spanish to Quechua translations
///
/// Checks a learner's Quechua answer either by back-translating it and
/// measuring the edit distance to the Spanish prompt, or by asking a
/// generative model for a structured judgement.
#[derive(Parser, Debug)]
#[command(name = "lengua-validator")]
#[command(version)]
#[command(about = "Spanish to Quechua answer validation")]
#[command(long_about = "Lengua Validator grades learner translations from Spanish to Quechua.

EXAMPLES:
    lengua-validator validate -o Hola -a Allinllachu              # Back-translation check
    lengua-validator validate-ai -o Adiós -a Tupananchiskama      # Generative model check
    lengua-validator validate -o Hola -a Allinllachu -l debug     # Verbose logging
    lengua-validator completions bash > lengua-validator.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. API keys may also come from the
    GOOGLE_TRANSLATE_API_KEY and GEMINI_API_KEY environment variables.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // set_max_level may raise verbosity after init
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lengua-validator", &mut std::io::stdout());
            Ok(())
        }
        Commands::Validate(args) => run_validate(args, ValidationStrategy::Classic).await,
        Commands::ValidateAi(args) => run_validate(args, ValidationStrategy::Ai).await,
    }
}

async fn run_validate(options: ValidateArgs, strategy: ValidationStrategy) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let mut config = Config::load_or_create(&options.config_path)
        .with_context(|| format!("Failed to load config file: {}", options.config_path.display()))?;

    // Override config with CLI options if provided
    if let Some(key) = &options.translate_api_key {
        config.translation.api_key = key.clone();
    }
    if let Some(key) = &options.gemini_api_key {
        config.generative.api_key = key.clone();
    }
    if let Some(model) = &options.model {
        config.generative.model = model.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate(strategy)
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    let request = ValidationRequest::new(options.original, options.answer, options.reference);
    debug!("Request: {:?}", request);

    let json = controller.run_to_json(strategy, &request).await?;
    println!("{}", json);

    Ok(())
}
