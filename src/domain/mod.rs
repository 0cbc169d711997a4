// Domain layer for StackScope: pure analysis over an externally parsed AST.
// No I/O happens here; everything is recomputed per analysis call.

pub mod ast;
pub mod callgraph;
pub mod closed_form;
pub mod function_table;
pub mod step_rule;
pub mod symbols;
pub mod trace;
