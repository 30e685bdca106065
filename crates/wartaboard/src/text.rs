//! Terminal rendering of a [`RenderedTable`].
//!
//! # Example
//!
//! ```rust
//! use wartaboard::{BorderStyle, Column, RenderedCell, RenderedRow, RenderedTable, TableStatus, TextTable};
//!
//! let table = RenderedTable {
//!     headers: vec![Column::new("name", "Name")],
//!     rows: vec![RenderedRow {
//!         index: 0,
//!         cells: vec![RenderedCell { key: "name".into(), text: "Alice".into(), href: None }],
//!     }],
//!     status: TableStatus::Rows,
//!     column_count: 1,
//!     total_count: 1,
//!     filter_summary: None,
//! };
//!
//! let text = TextTable::new().border(BorderStyle::Ascii).render(&table);
//! assert_eq!(text, "+-------+\n| Name  |\n+-------+\n| Alice |\n+-------+");
//! ```

use std::fmt;
use std::str::FromStr;

use console::{measure_text_width, pad_str, style, truncate_str, Alignment};
use serde::{Deserialize, Serialize};

use crate::render::RenderedTable;

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No borders.
    #[default]
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    /// All styles, in the order they are listed to users.
    pub const ALL: [BorderStyle; 6] = [
        BorderStyle::None,
        BorderStyle::Ascii,
        BorderStyle::Light,
        BorderStyle::Heavy,
        BorderStyle::Double,
        BorderStyle::Rounded,
    ];

    /// Returns the configuration name of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Ascii => "ascii",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
        }
    }

    fn chars(&self) -> Option<BorderChars> {
        let chars = match self {
            BorderStyle::None => return None,
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        };
        Some(chars)
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BorderStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown border style '{}': expected none, ascii, light, heavy, double or rounded",
                    s
                )
            })
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

#[derive(Clone, Copy)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

/// Lays out a [`RenderedTable`] as fixed-width text.
#[derive(Clone, Debug, Default)]
pub struct TextTable {
    border: BorderStyle,
    max_width: Option<usize>,
    bold_header: bool,
    summary: bool,
}

impl TextTable {
    /// Creates a borderless layout without truncation.
    pub fn new() -> Self {
        TextTable::default()
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Truncate cells wider than `width` columns with `…`.
    pub fn max_width(mut self, width: Option<usize>) -> Self {
        self.max_width = width.filter(|w| *w > 0);
        self
    }

    /// Style the header row bold when the terminal supports it.
    pub fn bold_header(mut self, enable: bool) -> Self {
        self.bold_header = enable;
        self
    }

    /// Append the active filters and a "Showing X of Y" line.
    pub fn summary(mut self, enable: bool) -> Self {
        self.summary = enable;
        self
    }

    /// Renders the whole table.
    pub fn render(&self, table: &RenderedTable) -> String {
        let headers: Vec<String> = table.headers.iter().map(|c| self.fit(&c.label)).collect();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.cells.iter().map(|c| self.fit(&c.text)).collect())
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }

        let message = table.message();
        if let Some(message) = message {
            let needed = measure_text_width(message);
            let inner = self.inner_width(&widths);
            if needed > inner {
                if let Some(last) = widths.last_mut() {
                    *last += needed - inner;
                }
            }
        }

        let mut output = Vec::new();
        let frame = if widths.is_empty() {
            vec![message.map_or(0, measure_text_width)]
        } else {
            widths.clone()
        };

        if let Some(top) = self.horizontal_line(&frame, LineType::Top) {
            output.push(top);
        }

        if !headers.is_empty() {
            output.push(self.header_row(&headers, &widths));
            if let Some(sep) = self.horizontal_line(&widths, LineType::Middle) {
                output.push(sep);
            }
        }

        for row in &rows {
            output.push(self.row(row, &widths));
        }

        if let Some(message) = message {
            let inner = self.inner_width(&frame);
            output.push(self.wrap(&pad(message, inner)));
        }

        if let Some(bottom) = self.horizontal_line(&frame, LineType::Bottom) {
            output.push(bottom);
        }

        if self.summary {
            if let Some(filters) = &table.filter_summary {
                output.push(format!("Filtered by: {}", filters));
            }
            output.push(format!(
                "Showing {} of {}",
                table.rows.len(),
                table.total_count
            ));
        }

        output.join("\n")
    }

    fn fit(&self, text: &str) -> String {
        let flat = text.replace(['\r', '\n'], " ");
        match self.max_width {
            Some(max) => truncate_str(&flat, max, "…").into_owned(),
            None => flat,
        }
    }

    fn separator(&self) -> String {
        match self.border.chars() {
            Some(chars) => format!(" {} ", chars.vertical),
            None => "  ".to_string(),
        }
    }

    fn inner_width(&self, widths: &[usize]) -> usize {
        let sep = measure_text_width(&self.separator());
        widths.iter().sum::<usize>() + sep * widths.len().saturating_sub(1)
    }

    fn header_row(&self, headers: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = headers
            .iter()
            .zip(widths)
            .map(|(header, width)| {
                let padded = pad(header, *width);
                if self.bold_header {
                    style(padded).bold().to_string()
                } else {
                    padded
                }
            })
            .collect();
        self.wrap(&cells.join(&self.separator()))
    }

    fn row(&self, cells: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        self.wrap(&cells.join(&self.separator()))
    }

    fn wrap(&self, content: &str) -> String {
        match self.border.chars() {
            Some(chars) => format!("{} {} {}", chars.vertical, content, chars.vertical),
            None => content.trim_end().to_string(),
        }
    }

    fn horizontal_line(&self, widths: &[usize], line_type: LineType) -> Option<String> {
        let chars = self.border.chars()?;
        let (left, joint, right) = match line_type {
            LineType::Top => (chars.top_left, chars.top_t, chars.top_right),
            LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
            LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
        };

        let segments: Vec<String> = widths
            .iter()
            .map(|w| std::iter::repeat_n(chars.horizontal, w + 2).collect())
            .collect();
        Some(format!(
            "{}{}{}",
            left,
            segments.join(&joint.to_string()),
            right
        ))
    }
}

fn pad(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Left, None).into_owned()
}
