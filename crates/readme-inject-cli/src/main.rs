use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use readme_inject_config::{Config, DEFAULT_CONFIG_FILE};
use readme_inject_engine::{io, render, run};
use std::path::PathBuf;
use std::process;

mod jobs;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Parser)]
#[command(
    name = "readme-inject",
    version,
    about = "Render READMEs to HTML and inject them into OpenAPI specs and the docs landing page"
)]
struct Cli {
    /// Config file [default: readme-inject.toml in the working directory]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Site root, overriding the one in the config file
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inject READMEs into every configured spec and the index page
    Inject {
        /// API directory name or glob, relative to the root (repeatable; replaces the configured list)
        #[arg(long = "api", value_name = "DIR")]
        apis: Vec<String>,

        /// Leave the index page alone
        #[arg(long)]
        no_index: bool,
    },
    /// Print the HTML fragment rendered from a Markdown file
    Render {
        /// Markdown file to render
        file: PathBuf,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => match Config::load()? {
            Some(config) => {
                log::info!("Loaded config from {DEFAULT_CONFIG_FILE}");
                config
            }
            None => {
                log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                Config::default()
            }
        },
    };

    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    log::debug!("Site root: {}", config.root.display());

    Ok(config)
}

fn inject(mut config: Config, apis: Vec<String>, no_index: bool) -> Result<bool> {
    if !apis.is_empty() {
        config.apis = apis;
    }
    if no_index {
        config.index.enabled = false;
    }

    let jobs = jobs::build_jobs(&config)?;

    println!("Injecting README content into OpenAPI specifications and index.html...");
    println!("{}", "-".repeat(RULE_WIDTH));

    let summary = run(&jobs);

    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "Completed: {} successful, {} failed",
        summary.succeeded, summary.failed
    );

    Ok(summary.is_success())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Inject { apis, no_index } => {
            let config = load_config(&cli)?;
            if !inject(config, apis.clone(), *no_index)? {
                process::exit(1);
            }
        }
        Command::Render { file } => {
            let markdown = io::read_file(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            println!("{}", render(&markdown));
        }
    }

    Ok(())
}
