//! Trace Simulator
//!
//! Drives the function table, call resolution, step inference and the
//! closed-form evaluator into an ordered, bounded sequence of stack
//! push/pop events suitable for step-by-step animation.
//!
//! The whole computation is synchronous and pure: every call rebuilds its
//! state from the AST, so repeated and concurrent invocations over
//! independent inputs are safe.

use tracing::debug;

use crate::domain::ast::AstNode;
use crate::domain::callgraph::{find_self_call, resolve_calls};
use crate::domain::closed_form::ClosedFormTable;
use crate::domain::function_table::{FunctionRecord, FunctionTable};
use crate::domain::step_rule::StepRule;
use crate::domain::symbols::{collect_symbols, Symbol};

/// Hard cap on simulated stack height, independent of the depth limit.
pub const MAX_STACK_FRAMES: usize = 20;

/// Inclusive range both the starting value and the depth limit are clamped
/// into. The caller is expected to clamp already; we clamp again defensively.
pub const VALUE_RANGE: (i64, i64) = (1, 20);

/// One simulated call's state at the moment of entry or completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub function: String,
    pub line: u32,
    pub depth: u32,
    pub parameter: String,
    pub argument: i64,
    pub return_value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEventKind {
    Push,
    Pop,
}

/// A stack transition. `stack` is a full snapshot taken at emission time:
/// including the new frame on push, excluding the finished frame on pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub kind: TraceEventKind,
    pub frame: StackFrame,
    pub stack: Vec<StackFrame>,
    pub is_base_case: bool,
    pub description: String,
}

/// Summary of the first detected self-recursive function. `None` means
/// "simulation unavailable", not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursiveFunctionSummary {
    pub name: String,
    pub parameters: Vec<String>,
    pub line: u32,
}

/// Everything one analysis pass produces, bundled for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceReport {
    pub trace: Vec<TraceEvent>,
    pub recursive_function: Option<RecursiveFunctionSummary>,
    pub symbols: Vec<Symbol>,
}

/// Synthesize the push/pop event sequence for the first self-recursive
/// function in the AST. Absent AST yields an empty trace; an AST without
/// recursion yields the `main` fallback or an empty trace.
pub fn synthesize_trace(
    ast: Option<&AstNode>,
    starting_value: i64,
    max_depth: u32,
) -> Vec<TraceEvent> {
    let Some(root) = ast else {
        return Vec::new();
    };
    let mut table = FunctionTable::build(root);
    resolve_calls(&mut table);
    synthesize_from_table(&table, starting_value, max_depth)
}

/// Summary query for consumers deciding whether to offer the simulation.
pub fn describe_recursive_function(ast: Option<&AstNode>) -> Option<RecursiveFunctionSummary> {
    let root = ast?;
    let mut table = FunctionTable::build(root);
    resolve_calls(&mut table);
    summary_from_table(&table)
}

/// One-shot analysis bundling the trace, the summary and the symbol table.
pub fn analyze(ast: Option<&AstNode>, starting_value: i64, max_depth: u32) -> TraceReport {
    let Some(root) = ast else {
        return TraceReport {
            trace: Vec::new(),
            recursive_function: None,
            symbols: Vec::new(),
        };
    };
    let mut table = FunctionTable::build(root);
    resolve_calls(&mut table);
    TraceReport {
        trace: synthesize_from_table(&table, starting_value, max_depth),
        recursive_function: summary_from_table(&table),
        symbols: collect_symbols(root),
    }
}

fn summary_from_table(table: &FunctionTable<'_>) -> Option<RecursiveFunctionSummary> {
    table.first_recursive().map(|rec| RecursiveFunctionSummary {
        name: rec.name.clone(),
        parameters: rec.parameters.clone(),
        line: rec.line,
    })
}

fn synthesize_from_table(
    table: &FunctionTable<'_>,
    starting_value: i64,
    max_depth: u32,
) -> Vec<TraceEvent> {
    let start = starting_value.clamp(VALUE_RANGE.0, VALUE_RANGE.1);
    let depth_limit = (max_depth as i64).clamp(VALUE_RANGE.0, VALUE_RANGE.1) as u32;

    let mut events = Vec::new();

    let Some(record) = table.first_recursive() else {
        if let Some(main) = table.get("main") {
            fallback_main_trace(main, start, &mut events);
        }
        return events;
    };

    debug!(function = %record.name, start, depth_limit, "simulating recursion");

    let rule = find_self_call(record.decl, &record.name)
        .map(StepRule::infer)
        .unwrap_or_default();
    let closed = ClosedFormTable::default();

    let mut stack = Vec::new();
    descend(
        record,
        rule,
        &closed,
        start,
        0,
        depth_limit,
        &mut stack,
        &mut events,
    );
    events
}

/// Recursive descent mirroring the recursion it simulates. Safe to express
/// as genuine recursion: both bounds cap the depth at 21 frames.
fn descend(
    record: &FunctionRecord<'_>,
    rule: StepRule,
    closed: &ClosedFormTable,
    argument: i64,
    depth: u32,
    depth_limit: u32,
    stack: &mut Vec<StackFrame>,
    events: &mut Vec<TraceEvent>,
) {
    // Either bound halts further descent. Silent truncation, not an error.
    if depth > depth_limit || stack.len() > MAX_STACK_FRAMES {
        debug!(depth, stack_len = stack.len(), "descent truncated");
        return;
    }

    let parameter = record
        .parameters
        .first()
        .cloned()
        .unwrap_or_default();
    let frame = StackFrame {
        function: record.name.clone(),
        line: record.line,
        depth,
        parameter,
        argument,
        return_value: closed.evaluate(&record.name, argument),
    };

    stack.push(frame.clone());
    events.push(TraceEvent {
        kind: TraceEventKind::Push,
        frame: frame.clone(),
        stack: stack.clone(),
        is_base_case: false,
        description: format!(
            "push {}({} = {}) at depth {}",
            frame.function, frame.parameter, frame.argument, frame.depth
        ),
    });

    let base_case = argument <= 1;
    if !base_case && record.is_recursive {
        let mut next = rule.apply(argument);
        // Non-decreasing updates would never reach the base case; force a
        // decrement so the simulation terminates.
        if next >= argument {
            next = argument - 1;
        }
        descend(
            record,
            rule,
            closed,
            next,
            depth + 1,
            depth_limit,
            stack,
            events,
        );
    }

    stack.pop();
    events.push(TraceEvent {
        kind: TraceEventKind::Pop,
        frame: frame.clone(),
        stack: stack.clone(),
        is_base_case: base_case,
        description: format!(
            "pop {}({} = {}) -> {}{}",
            frame.function,
            frame.parameter,
            frame.argument,
            frame.return_value,
            if base_case { " [base case]" } else { "" }
        ),
    });
}

/// Two-event trace for a recursion-free unit that still has a `main`.
fn fallback_main_trace(main: &FunctionRecord<'_>, argument: i64, events: &mut Vec<TraceEvent>) {
    debug!("no self-recursive function; emitting main fallback");
    let frame = StackFrame {
        function: main.name.clone(),
        line: main.line,
        depth: 0,
        parameter: main.parameters.first().cloned().unwrap_or_default(),
        argument,
        return_value: 0,
    };
    events.push(TraceEvent {
        kind: TraceEventKind::Push,
        frame: frame.clone(),
        stack: vec![frame.clone()],
        is_base_case: false,
        description: format!("push {}() at depth 0", frame.function),
    });
    events.push(TraceEvent {
        kind: TraceEventKind::Pop,
        frame: frame.clone(),
        stack: Vec::new(),
        is_base_case: true,
        description: format!("pop {}() -> 0", frame.function),
    });
}
