//! Table configuration files.
//!
//! A [`TableConfig`] carries everything about a table that is not code:
//! which columns to show, their labels, the link namespace and the text
//! layout. It is read from YAML or JSON:
//!
//! ```yaml
//! omit: [id, content]
//! labels:
//!   heroImage: Banner
//! hidden: [seoDescription]
//! target: /dashboard/warta
//! border: rounded
//! max_width: 40
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::column::ColumnConfig;
use crate::error::{Result, TableError};
use crate::text::{BorderStyle, TextTable};

/// Declarative table settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Exclusive column allow-list.
    pub include: Vec<String>,
    /// Column deny-list, ignored when `include` is set.
    pub omit: Vec<String>,
    /// Header label overrides.
    pub labels: IndexMap<String, String>,
    /// Columns that start hidden.
    pub hidden: Vec<String>,
    /// Namespace for first-column row links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Border of the text layout.
    pub border: BorderStyle,
    /// Cell truncation width of the text layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
}

impl TableConfig {
    /// Parses a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a configuration file, choosing the parser by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str,
            "json" => Self::from_json_str,
            _ => {
                return Err(TableError::UnsupportedConfigFormat(
                    path.display().to_string(),
                ))
            }
        };

        let source = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading table config from {}", path.display());
        parse(&source)
    }

    /// Returns the column projection settings.
    pub fn column_config(&self) -> ColumnConfig {
        ColumnConfig {
            include: self.include.clone(),
            omit: self.omit.clone(),
            labels: self.labels.clone(),
        }
    }

    /// Returns a text layout with this border and truncation width.
    pub fn text_table(&self) -> TextTable {
        TextTable::new()
            .border(self.border)
            .max_width(self.max_width)
    }

    /// Overlays `other` on top of this configuration.
    ///
    /// Non-empty lists and present options of `other` win; labels merge
    /// key by key. The border is taken from `other` unless it is the
    /// default.
    pub fn merge(mut self, other: TableConfig) -> Self {
        if !other.include.is_empty() {
            self.include = other.include;
        }
        if !other.omit.is_empty() {
            self.omit = other.omit;
        }
        self.labels.extend(other.labels);
        self.hidden.extend(other.hidden);
        if other.target.is_some() {
            self.target = other.target;
        }
        if other.border != BorderStyle::default() {
            self.border = other.border;
        }
        if other.max_width.is_some() {
            self.max_width = other.max_width;
        }
        self
    }
}
