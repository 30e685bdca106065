//! `warta`: dashboard collections in the terminal.
//!
//! Reads a JSON export of one collection, applies the collection's table
//! preset plus any configuration file and command-line overrides, then
//! prints the searched and filtered table as text or JSON.

pub mod cli;
pub mod collections;
pub mod dates;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use wartaboard::{DataTable, Record, TableConfig};

pub use cli::{Cli, Format};
pub use collections::{Collection, Document, Event, Member, Role};

/// Runs one invocation and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let config = resolve_config(cli)?;
    log::debug!("table config: {:?}", config);

    match cli.collection {
        Collection::Warta => {
            let data = load(&cli.data)?;
            present(collections::document_table(data, &config), cli, &config)
        }
        Collection::Event => {
            let data = load(&cli.data)?;
            present(collections::event_table(data, &config), cli, &config)
        }
        Collection::Member => {
            let data = load(&cli.data)?;
            present(collections::member_table(data, &config), cli, &config)
        }
    }
}

/// Layers collection defaults, the configuration file and flags.
fn resolve_config(cli: &Cli) -> Result<TableConfig> {
    let mut config = cli.collection.defaults();
    if let Some(path) = &cli.config {
        let file = TableConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        config = config.merge(file);
    }
    Ok(config.merge(cli.overrides()))
}

fn load<R: DeserializeOwned>(path: &Path) -> Result<Arc<Vec<R>>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<R> = serde_json::from_str(&source)
        .with_context(|| format!("invalid records in {}", path.display()))?;
    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(Arc::new(records))
}

fn present<R: Record>(mut table: DataTable<R>, cli: &Cli, config: &TableConfig) -> Result<String> {
    if let Some(search) = &cli.search {
        table.set_search(search.as_str());
    }
    for filter in &cli.filters {
        table
            .add_filter_str(filter)
            .with_context(|| format!("bad --filter {}", filter))?;
    }

    let rendered = table.render();
    match cli.format {
        Format::Json => Ok(serde_json::to_string_pretty(&rendered)?),
        Format::Text => Ok(config
            .text_table()
            .bold_header(true)
            .summary(cli.summary)
            .render(&rendered)),
    }
}
