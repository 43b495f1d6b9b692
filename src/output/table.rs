//! Human-readable table output

use super::Formatter;
use crate::error::Result;
use crate::graph::{Details, Resource, ResourceGraph};
use crate::models::ResourceType;
use crossterm::style::Stylize;
use std::io::Write;
use std::time::Duration;

const NAME_WIDTH: usize = 40;
const STATUS_WIDTH: usize = 15;
const AGE_WIDTH: usize = 10;
const RULE_WIDTH: usize = 100;

/// Sections printed under the root header, in order
const SECTIONS: &[ResourceType] = &[
    ResourceType::Runtime,
    ResourceType::Pod,
    ResourceType::PersistentVolumeClaim,
    ResourceType::Service,
];

/// Root header followed by one table per populated resource type
pub struct TableFormatter {
    color: bool,
}

impl TableFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn write_header(&self, root: &Resource, out: &mut dyn Write) -> Result<()> {
        let title = format!("📦 {}: {}", root.resource_type, root.name);
        if self.color {
            writeln!(out, "{}", title.cyan().bold())?;
        } else {
            writeln!(out, "{}", title)?;
        }
        writeln!(out, "   Namespace: {}", root.namespace)?;
        writeln!(
            out,
            "   Status: {}",
            colorize_status(&root.status, 0, self.color)
        )?;
        writeln!(out, "   Age: {}", format_age(root.age))?;

        let entries = root.details.entries();
        if !entries.is_empty() {
            writeln!(out, "   Details:")?;
            for (key, value) in entries {
                writeln!(out, "     {}: {}", key, value)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_section(
        &self,
        resource_type: ResourceType,
        resources: &[Resource],
        out: &mut dyn Write,
    ) -> Result<()> {
        if resources.is_empty() {
            return Ok(());
        }

        let title = format!("🔧 {} ({})", resource_type.section_title(), resources.len());
        if self.color {
            writeln!(out, "{}", title.yellow().bold())?;
        } else {
            writeln!(out, "{}", title)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "  {:<NAME_WIDTH$} {:<STATUS_WIDTH$} {:<AGE_WIDTH$} DETAILS",
            "NAME", "STATUS", "AGE"
        )?;
        writeln!(out, "  {}", "-".repeat(RULE_WIDTH))?;

        for res in resources {
            let row = format!(
                "  {:<NAME_WIDTH$} {} {:<AGE_WIDTH$} {}",
                truncate(&res.name, NAME_WIDTH),
                colorize_status(&res.status, STATUS_WIDTH, self.color),
                format_age(res.age),
                format_details(res),
            );
            writeln!(out, "{}", row.trim_end())?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl Formatter for TableFormatter {
    fn format(&self, graph: &ResourceGraph, out: &mut dyn Write) -> Result<()> {
        self.write_header(graph.root(), out)?;
        for &resource_type in SECTIONS {
            self.write_section(resource_type, graph.resources(resource_type), out)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Status text padded to `width` columns, colored by phase
///
/// Padding is applied outside the escape codes so columns stay aligned.
pub fn colorize_status(status: &str, width: usize, color: bool) -> String {
    let padding = " ".repeat(width.saturating_sub(status.chars().count()));
    if !color {
        return format!("{}{}", status, padding);
    }
    let painted = match status {
        "Running" | "Bound" | "Active" | "Ready" => status.green().to_string(),
        "Pending" | "Creating" => status.yellow().to_string(),
        "Failed" | "Error" | "CrashLoopBackOff" => status.red().to_string(),
        _ => status.to_string(),
    };
    format!("{}{}", painted, padding)
}

/// Compact age: `2d3h`, `1h30m` or `45m`
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    let days = secs / 86_400;
    let hours = (secs / 3_600) % 24;
    let minutes = (secs / 60) % 60;

    if days > 0 {
        format!("{}d{}h", days, hours)
    } else if hours > 0 {
        format!("{}h{}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Cut `s` to `max` characters, ending in `...` when shortened
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// One-line summary shown in the DETAILS column
pub fn format_details(res: &Resource) -> String {
    match &res.details {
        Details::Pod(d) if d.restarts > 0 => format!("restarts: {}", d.restarts),
        Details::PersistentVolumeClaim(d) if !d.capacity.is_empty() => {
            format!("capacity: {}", d.capacity)
        }
        Details::Service(d) if !d.ports.is_empty() => format!("ports: {}", d.ports),
        Details::Runtime(d) => d.runtime_type.clone(),
        _ => String::new(),
    }
}
