use crate::domain::ast::AstNode;
use crate::domain::trace::TraceReport;

pub mod timeline_exporter;

/// Where ASTs come from. `Ok(None)` means the provider had no tree to give,
/// which is a valid analysis input (empty trace), not a failure.
pub trait AstSource {
    fn load(&self, path: &str) -> anyhow::Result<Option<AstNode>>;
}

/// Where finished reports go.
pub trait TraceExporter {
    fn export(&self, report: &TraceReport, path: &str) -> anyhow::Result<()>;
}
