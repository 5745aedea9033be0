//! zotero-scholar - Entry Point
//!
//! Runs the interactive terminal view (default) or a one-shot search.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use zotero_scholar::config::{Config, Library, LibraryId, api};
use zotero_scholar::models::{LibraryKind, ResponseFormat};
use zotero_scholar::{SearchController, formatters, tui};

#[derive(Parser, Debug)]
#[command(name = "zotero-scholar")]
#[command(about = "Search a Zotero library and show Semantic Scholar citation counts")]
#[command(version)]
struct Cli {
    /// Zotero user or group ID whose library is searched
    #[arg(long, env = "ZOTERO_LIBRARY_ID", default_value = "")]
    library_id: String,

    /// Library kind: user or group
    #[arg(long, env = "ZOTERO_LIBRARY_KIND", default_value = "user")]
    library_kind: LibraryKind,

    /// Zotero API base URL
    #[arg(long, env = "ZOTERO_API_URL", default_value = api::ZOTERO_API)]
    zotero_api_url: String,

    /// Semantic Scholar v1 API base URL
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_URL", default_value = api::SEMANTIC_SCHOLAR_API)]
    semantic_scholar_api_url: String,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Write logs to this file (the interactive view discards logs otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive search screen (default)
    Tui,
    /// Run one search and print the results
    Search {
        /// Free-text query; may be empty
        #[arg(default_value = "")]
        query: String,

        /// Also fetch citation metadata for the N-th result (1-based)
        #[arg(long)]
        select: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: ResponseFormat,
    },
}

fn init_tracing(cli: &Cli, interactive: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let writer = match (&cli.log_file, interactive) {
        (Some(path), _) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        (None, true) => BoxMakeWriter::new(std::io::sink),
        (None, false) => BoxMakeWriter::new(std::io::stderr),
    };

    let ansi = cli.log_file.is_none() && !interactive;
    let subscriber = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(writer)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_ansi(ansi).with_writer(writer))
            .init();
    }

    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let library = Library { kind: cli.library_kind, id: LibraryId::parse(&cli.library_id)? };

    let mut config = Config::new(library);
    config.zotero_api_url.clone_from(&cli.zotero_api_url);
    config.semantic_scholar_api_url.clone_from(&cli.semantic_scholar_api_url);
    config.request_timeout = cli.request_timeout_secs.map(Duration::from_secs);
    config.validate()?;

    Ok(config)
}

async fn run_search(
    mut controller: SearchController,
    query: String,
    select: Option<usize>,
    format: ResponseFormat,
) -> anyhow::Result<ExitCode> {
    controller.state_mut().set_query(query);
    controller.search().await;

    if let Some(n) = select {
        let item = n
            .checked_sub(1)
            .and_then(|i| controller.state().results().get(i))
            .cloned();
        match item {
            Some(item) => {
                controller.select(item).await;
            }
            None if controller.notifications().is_empty() => {
                anyhow::bail!(
                    "--select {n} is out of range ({} results)",
                    controller.state().results().len()
                );
            }
            None => {}
        }
    }

    for notification in controller.notifications().all() {
        eprintln!("{}", formatters::format_notification(notification));
    }

    match format {
        ResponseFormat::Markdown => print!("{}", formatters::format_view_markdown(controller.state())),
        ResponseFormat::Json => {
            let report = formatters::report_json(controller.state(), controller.notifications().all());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(if controller.notifications().is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Command::Tui));

    init_tracing(&cli, interactive)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), interactive, "Starting zotero-scholar");

    let config = build_config(&cli)?;
    tracing::info!(library = %config.library.path(), "Configuration loaded");
    let controller = SearchController::from_config(&config)?;

    match cli.command {
        None | Some(Command::Tui) => {
            tui::run(controller).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Search { query, select, format }) => {
            run_search(controller, query, select, format).await
        }
    }
}
