//! Graph renderers
//!
//! Formatters write a finished [`ResourceGraph`] to any [`Write`] sink.

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::{TableFormatter, colorize_status, format_age, format_details, truncate};

use crate::error::{Error, Result};
use crate::graph::ResourceGraph;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format selected with `-o`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    /// Accepted for compatibility; rendered as a table
    Tree,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Tree => "tree",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidOutputFormat(other.to_string())),
        }
    }
}

/// Renders a graph
pub trait Formatter {
    fn format(&self, graph: &ResourceGraph, out: &mut dyn Write) -> Result<()>;
}

/// Build the formatter for an output format
pub fn create_formatter(format: OutputFormat, color: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table | OutputFormat::Tree => Box::new(TableFormatter::new(color)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("tree".parse::<OutputFormat>().unwrap(), OutputFormat::Tree);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);

        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, Error::InvalidOutputFormat(ref f) if f == "yaml"));
    }

    #[test]
    fn test_format_round_trips_through_display() {
        for format in [OutputFormat::Table, OutputFormat::Tree, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
