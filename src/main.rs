//! Data Handler - Command Line Demo
//!
//! Loads rows from a JSON array, applies optional parameters and a search term,
//! then logs the first page.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use data_handler::{DataHandler, Event, PagesOptions, Params, load_rows};
use serde_json::Value as Json;

#[derive(Parser)]
#[command(
    name = "data-handler",
    version,
    about = "Filter, search, sort and paginate a JSON table"
)]
struct Cli {
    /// JSON file holding an array of row objects.
    #[arg(value_name = "ROWS_JSON")]
    rows: PathBuf,

    /// TOML file with table parameters (rows per page, strings, selection scope).
    #[arg(value_name = "PARAMS_TOML")]
    params: Option<PathBuf>,

    /// Global search term applied before printing.
    search: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let params = match &cli.params {
        Some(path) => {
            Params::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Params::default(),
    };
    let rows: Vec<Json> =
        load_rows(&cli.rows).with_context(|| format!("loading {}", cli.rows.display()))?;
    tracing::info!(rows = rows.len(), ?params, "Loaded rows");

    let mut handler = DataHandler::new(rows, params);
    handler.on(Event::Search, |state| {
        tracing::info!(term = %state.search, "Search applied");
        Ok(())
    });
    if let Some(term) = &cli.search {
        handler.search(term)?;
    }

    let pages: Vec<String> = handler
        .pages(PagesOptions { ellipsis: true })
        .get()
        .iter()
        .map(|item| item.number().map_or_else(|| "...".to_string(), |n| n.to_string()))
        .collect();
    tracing::info!(pages = %pages.join(" "), "{}", handler.row_count_text());

    for row in handler.paged_rows().get() {
        tracing::info!("{row}");
    }
    Ok(())
}
