use super::Formatter;
use crate::error::Result;
use crate::graph::ResourceGraph;
use std::io::Write;

/// Pretty-printed `{root, resources, edges}` document
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, graph: &ResourceGraph, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, graph)?;
        writeln!(out)?;
        Ok(())
    }
}
