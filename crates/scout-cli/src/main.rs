mod research;
mod serve;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};
use scout_core::config::DEFAULT_CONFIG_FILE;
use scout_core::{Config, ReportRequester, LLM};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Company research reports from a chat-completion model", long_about = None)]
struct Cli {
    /// Config file to use instead of scout.toml / ~/.config/scout/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Model to use, overriding the config
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Research a company and print the report
    Research {
        /// Company name
        #[arg(required = true)]
        company: Vec<String>,
        /// Request the long-form deep research report
        #[arg(long, short)]
        detailed: bool,
    },
    /// Serve the research form in the browser
    Serve {
        /// Port to listen on
        #[arg(long, short)]
        port: Option<u16>,
        /// Do not open the browser
        #[arg(long)]
        no_open: bool,
    },
    /// Write a scout.toml with the default settings
    Init {
        /// Overwrite an existing scout.toml
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Research { company, detailed } => {
            let (_, requester) = setup(cli.config.as_deref(), cli.model)?;
            research::run(&requester, &company.join(" "), detailed).await
        }
        Commands::Serve { port, no_open } => {
            let (config, requester) = setup(cli.config.as_deref(), cli.model)?;
            let serve_config = serve::ServeConfig {
                port: port.unwrap_or(config.server.port),
                open_browser: config.server.open_browser && !no_open,
            };
            serve::start_server(requester, serve_config).await
        }
        Commands::Init { force } => init(force),
    }
}

/// Loads configuration and builds the requester.
///
/// A missing API key is fatal here, before any request is attempted.
fn setup(
    config_path: Option<&Path>,
    model: Option<String>,
) -> Result<(Config, ReportRequester<Box<dyn LLM>>)> {
    let mut config = match config_path {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("loading {}", path.display()))?,
        None => Config::load().wrap_err("loading configuration")?,
    };
    if let Some(model) = model {
        config.llm.model = Some(model);
    }

    match ReportRequester::from_config(&config) {
        Ok(requester) => Ok((config, requester)),
        Err(e) => bail!("{e}"),
    }
}

/// Writes the default config to ./scout.toml.
fn init(force: bool) -> Result<()> {
    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    std::fs::write(&path, Config::default_config_string())
        .wrap_err_with(|| format!("writing {}", path.display()))?;

    println!("Wrote {}", path.display());
    println!("Set OPENAI_API_KEY in your environment, or add api_key under [llm].");
    Ok(())
}
