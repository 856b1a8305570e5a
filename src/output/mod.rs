//! Output formatting for calculation results.
//!
//! - [`csv`] - subnet list as CSV
//! - [`json`] - full record as JSON
//! - [`terminal`] - human readable report with colors

mod csv;
mod json;
mod terminal;

use crate::models::NetworkInfo;
use std::error::Error;
use std::str::FromStr;

pub use csv::render_csv;
pub use json::render_json;
pub use terminal::{format_field, render_text, PLACEHOLDER};

/// Output format selected on the command line or in the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Render `info` in `format`. `None` renders the empty/placeholder form.
pub fn render(format: OutputFormat, info: Option<&NetworkInfo>) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Text => render_text(info),
        OutputFormat::Json => render_json(info)?,
        OutputFormat::Csv => render_csv(info),
    };
    Ok(out)
}
