use serde::{Deserialize, Serialize};

use crate::domain::symbols::Symbol;
use crate::domain::trace::{
    RecursiveFunctionSummary, StackFrame, TraceEvent, TraceEventKind, TraceReport,
};

/// Envelope consumers receive, shaped like the parse backend's responses
/// so existing clients can switch transports without reshaping.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportDto {
    pub success: bool,
    pub trace: Vec<TraceEventDto>,
    pub recursive_function: Option<SummaryDto>,
    pub symbols: Vec<SymbolDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TraceEventDto {
    /// "push" or "pop".
    pub kind: String,
    pub frame: FrameDto,
    pub stack: Vec<FrameDto>,
    pub is_base_case: bool,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FrameDto {
    pub function: String,
    pub line: u32,
    pub depth: u32,
    pub parameter: String,
    pub argument: i64,
    pub return_value: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryDto {
    pub name: String,
    pub parameters: Vec<String>,
    pub line: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SymbolDto {
    pub name: String,
    pub kind: String,
    pub scope: String,
    pub line: u32,
    pub column: u32,
}

impl From<&StackFrame> for FrameDto {
    fn from(f: &StackFrame) -> Self {
        FrameDto {
            function: f.function.clone(),
            line: f.line,
            depth: f.depth,
            parameter: f.parameter.clone(),
            argument: f.argument,
            return_value: f.return_value,
        }
    }
}

impl From<&TraceEvent> for TraceEventDto {
    fn from(e: &TraceEvent) -> Self {
        TraceEventDto {
            kind: match e.kind {
                TraceEventKind::Push => "push".to_string(),
                TraceEventKind::Pop => "pop".to_string(),
            },
            frame: FrameDto::from(&e.frame),
            stack: e.stack.iter().map(FrameDto::from).collect(),
            is_base_case: e.is_base_case,
            description: e.description.clone(),
        }
    }
}

impl From<&RecursiveFunctionSummary> for SummaryDto {
    fn from(s: &RecursiveFunctionSummary) -> Self {
        SummaryDto {
            name: s.name.clone(),
            parameters: s.parameters.clone(),
            line: s.line,
        }
    }
}

impl From<&Symbol> for SymbolDto {
    fn from(s: &Symbol) -> Self {
        SymbolDto {
            name: s.name.clone(),
            kind: s.kind.name().to_string(),
            scope: s.scope.clone(),
            line: s.line,
            column: s.column,
        }
    }
}

impl From<&TraceReport> for ReportDto {
    fn from(report: &TraceReport) -> Self {
        ReportDto {
            success: true,
            trace: report.trace.iter().map(TraceEventDto::from).collect(),
            recursive_function: report.recursive_function.as_ref().map(SummaryDto::from),
            symbols: report.symbols.iter().map(SymbolDto::from).collect(),
        }
    }
}
