use crate::domain::trace::{self, TraceReport};
use crate::ports::{AstSource, TraceExporter};

pub struct SynthesizeUsecase<'a> {
    pub source: &'a dyn AstSource,
    pub exporter: &'a dyn TraceExporter,
}

impl<'a> SynthesizeUsecase<'a> {
    /// Load the AST, run the analysis, export, and hand the report back for
    /// callers that also want to print or inspect it.
    pub fn run(
        &self,
        input_path: &str,
        starting_value: i64,
        max_depth: u32,
        output_path: &str,
    ) -> anyhow::Result<TraceReport> {
        let ast = self.source.load(input_path)?;
        let report = trace::analyze(ast.as_ref(), starting_value, max_depth);
        self.exporter.export(&report, output_path)?;
        Ok(report)
    }
}
