//! Timeline Text Exporter
//!
//! Renders a trace report as an indented push/pop timeline for terminals
//! and logs.

use crate::domain::trace::{TraceEventKind, TraceReport};
use crate::ports::TraceExporter;

pub struct TimelineExporter;

impl TraceExporter for TimelineExporter {
    fn export(&self, report: &TraceReport, path: &str) -> anyhow::Result<()> {
        std::fs::write(path, Self::to_text(report))?;
        Ok(())
    }
}

impl TimelineExporter {
    /// Convert a report to its text timeline.
    pub fn to_text(report: &TraceReport) -> String {
        let mut lines = Vec::new();

        match &report.recursive_function {
            Some(f) => lines.push(format!(
                "recursive function: {}({}) at line {}",
                f.name,
                f.parameters.join(", "),
                f.line
            )),
            None => lines.push("recursive function: none".to_string()),
        }

        if !report.symbols.is_empty() {
            lines.push(format!("symbols: {}", report.symbols.len()));
            for sym in &report.symbols {
                lines.push(format!(
                    "  {} {} (scope: {}, line {})",
                    sym.kind.name(),
                    sym.name,
                    sym.scope,
                    sym.line
                ));
            }
        }

        lines.push(format!("events: {}", report.trace.len()));
        for event in &report.trace {
            let indent = "  ".repeat(event.frame.depth as usize);
            let arrow = match event.kind {
                TraceEventKind::Push => "->",
                TraceEventKind::Pop => "<-",
            };
            lines.push(format!("{}{} {}", indent, arrow, event.description));
        }

        lines.push(String::new());
        lines.join("\n")
    }
}
