use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use apidemo_core::{
    ApiClient, Config, Dispatcher, Endpoints, LineSource, ReaderSource, ReqwestTransport, render,
};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};

use crate::input::InquireSource;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "apidemo", version, about = "Query public REST APIs from an interactive menu")]
pub struct Cli {
    /// Read configuration from this file instead of the platform default.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menu (the default).
    Menu,

    /// GET a path on the fake-data API and print the status and raw body.
    Fetch {
        /// Path below the API root, e.g. "posts/1" or "users".
        path: String,
    },

    /// Interactively set endpoint URLs and the request timeout.
    Configure,

    /// Inspect or reset the stored configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print where the config file lives.
    Path,
    /// Print the effective configuration as TOML.
    Show,
    /// Overwrite the config file with defaults.
    Reset,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let path = match self.config_file {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        tracing::debug!(path = %path.display(), "using config file");

        match self.command.unwrap_or(Command::Menu) {
            Command::Menu => {
                let config = Config::load_from(&path)?;
                run_menu(&config).await
            }
            Command::Fetch { path: resource } => {
                let config = Config::load_from(&path)?;
                fetch(&config, &resource).await
            }
            Command::Configure => configure(&path),
            Command::Config(ConfigCommand::Path) => {
                println!("{}", path.display());
                Ok(())
            }
            Command::Config(ConfigCommand::Show) => {
                print!("{}", Config::load_from(&path)?.to_toml()?);
                Ok(())
            }
            Command::Config(ConfigCommand::Reset) => {
                Config::default().save_to(&path)?;
                println!("Configuration reset: {}", path.display());
                Ok(())
            }
        }
    }
}

fn client(config: &Config) -> Result<ApiClient<ReqwestTransport>> {
    let transport = ReqwestTransport::new(config.timeout())?;
    ApiClient::new(&config.endpoints, transport).context("Invalid endpoint in configuration")
}

async fn run_menu(config: &Config) -> Result<()> {
    let dispatcher = Dispatcher::new(client(config)?);

    let stdin = io::stdin();
    let mut input: Box<dyn LineSource> = if stdin.is_terminal() {
        Box::new(InquireSource)
    } else {
        Box::new(ReaderSource::new(stdin.lock()))
    };

    let mut out = io::stdout();
    dispatcher.run(input.as_mut(), &mut out).await.context("Menu session failed")
}

async fn fetch(config: &Config, resource: &str) -> Result<()> {
    let (url, response) = client(config)?.raw(resource).await?;
    render::raw_response(&mut io::stdout().lock(), &url, &response)?;
    Ok(())
}

fn configure(path: &Path) -> Result<()> {
    let mut config = Config::load_from(path)?;
    println!("Configuring endpoints ({})", path.display());

    let current = config.endpoints.clone();
    let endpoints = Endpoints {
        fake_api: ask_url("Fake-data API root:", &current.fake_api)?,
        tickers: ask_url("Ticker API root:", &current.tickers)?,
        geocoding: ask_url("Geocoding search URL:", &current.geocoding)?,
        forecast: ask_url("Forecast URL:", &current.forecast)?,
    };
    endpoints.validate().context("Refusing to save an unusable endpoint")?;

    config.endpoints = endpoints;
    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Failed to read timeout")?;

    config.save_to(path)?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn ask_url(message: &str, current: &str) -> Result<String> {
    let answer = Text::new(message)
        .with_default(current)
        .prompt()
        .with_context(|| format!("Failed to read '{message}'"))?;
    Ok(answer.trim().to_string())
}
