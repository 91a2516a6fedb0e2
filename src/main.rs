use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use postreview::config::{Config, Overrides};
use postreview::review::{ReviewClient, ReviewRequest, Reviewer};
use postreview::ui::{self, App};
use postreview::{logging, output, FormController, Platform};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "postreview")]
#[command(about = "Review a social media post for tone, platform limits and improvements")]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the review service, e.g. http://localhost:5000
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a single post and print the result
    Review {
        /// Target platform
        #[arg(short, long, value_enum, ignore_case = true)]
        platform: Option<Platform>,

        /// Post text; read from stdin when omitted
        #[arg(short, long)]
        text: Option<String>,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default config file
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::InitConfig) => init_config(cli.config),
        Some(Commands::Review {
            platform,
            text,
            json,
        }) => {
            logging::init_stderr();
            let config = load_config(cli.config, cli.url, cli.timeout, platform)?;
            review_once(&config, text, json).await
        }
        None => {
            let config = load_config(cli.config, cli.url, cli.timeout, None)?;
            if let Some(path) = config.log_file() {
                logging::init_file(&path)?;
            }
            run_tui(&config).await
        }
    }
}

fn load_config(
    path: Option<PathBuf>,
    url: Option<String>,
    timeout_secs: Option<u64>,
    platform: Option<Platform>,
) -> Result<Config> {
    let mut config = Config::load(path.as_deref())?;
    config.apply(Overrides {
        url,
        timeout_secs,
        platform,
    })?;
    Ok(config)
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path().context("could not determine config directory")?,
    };
    Config::write_default(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

async fn review_once(config: &Config, text: Option<String>, json: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read post text from stdin")?;
            strip_line_ending(buf)
        }
    };

    let client = ReviewClient::new(&config.service)?;
    let request = ReviewRequest {
        text,
        platform: config.form.default_platform,
    };
    let result = client.review(&request).await?;

    if json {
        println!("{}", output::format_json(&result)?);
    } else {
        let width = if io::stdout().is_terminal() {
            crossterm::terminal::size()
                .map(|(w, _)| w as usize)
                .unwrap_or(80)
        } else {
            80
        };
        print!("{}", output::format_result(&result, width));
    }
    Ok(())
}

/// Drop the single line ending a shell pipe appends (`\n` or `\r\n`).
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

async fn run_tui(config: &Config) -> Result<()> {
    let client = ReviewClient::new(&config.service)?;
    let endpoint = client.endpoint().to_string();
    tracing::info!(%endpoint, "starting post reviewer");

    let form = FormController::new(config.form.default_platform);
    let app = App::new(form, Arc::new(client), &endpoint);
    ui::run(app).await
}
