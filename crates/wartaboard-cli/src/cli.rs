//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wartaboard::{BorderStyle, TableConfig};

use crate::collections::Collection;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned text table.
    #[default]
    Text,
    /// The rendered table as JSON.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "warta", author, version, about = "Browse dashboard collections as filterable tables")]
pub struct Cli {
    /// Collection the data file holds
    #[arg(value_enum)]
    pub collection: Collection,

    /// JSON file with an array of records
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Case-insensitive text matched against every column
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter rule, repeatable; all rules must match
    #[arg(short, long = "filter", value_name = "COLUMN:RULE:VALUE")]
    pub filters: Vec<String>,

    /// Hide a column, repeatable
    #[arg(long, value_name = "KEY")]
    pub hide: Vec<String>,

    /// Show only these columns, in this order
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    pub include: Vec<String>,

    /// Leave these columns out, replacing the collection's defaults
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    pub omit: Vec<String>,

    /// Table configuration file (.yaml, .yml or .json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Border style: none, ascii, light, heavy, double or rounded
    #[arg(long)]
    pub border: Option<BorderStyle>,

    /// Truncate cells wider than this
    #[arg(long, value_name = "COLUMNS")]
    pub max_width: Option<usize>,

    /// Print active filters and the row count below the table
    #[arg(long)]
    pub summary: bool,

    /// Debug mode
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Table settings given on the command line.
    pub fn overrides(&self) -> TableConfig {
        TableConfig {
            include: self.include.clone(),
            omit: self.omit.clone(),
            hidden: self.hide.clone(),
            border: self.border.unwrap_or_default(),
            max_width: self.max_width,
            ..TableConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_filters_and_lists() {
        let cli = Cli::parse_from([
            "warta",
            "event",
            "--data",
            "events.json",
            "-f",
            "location:contains:hall",
            "--filter",
            "eventName:startsWith:ibadah",
            "--omit",
            "description,posterImage",
            "--border",
            "Rounded",
        ]);
        assert_eq!(cli.collection, Collection::Event);
        assert_eq!(cli.filters.len(), 2);
        assert_eq!(cli.omit, vec!["description", "posterImage"]);
        assert_eq!(cli.border, Some(BorderStyle::Rounded));
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn overrides_carry_hidden_columns() {
        let cli = Cli::parse_from([
            "warta", "member", "--data", "m.json", "--hide", "email", "--hide", "role",
        ]);
        let config = cli.overrides();
        assert_eq!(config.hidden, vec!["email", "role"]);
        assert!(config.omit.is_empty());
        assert_eq!(config.target, None);
    }

    #[test]
    fn rejects_unknown_collection() {
        assert!(Cli::try_parse_from(["warta", "sermon", "--data", "x.json"]).is_err());
    }
}
