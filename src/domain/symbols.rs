//! Symbol table extraction: functions and their parameters, with scopes.
//! A lightweight companion to the trace so consumers can label frames
//! without re-walking the AST themselves.

use crate::domain::ast::{AstNode, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Parameter,
}

impl SymbolKind {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Parameter => "parameter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// "global" for functions, the enclosing function's name for parameters.
    pub scope: String,
    pub line: u32,
    pub column: u32,
}

/// Collect function and parameter symbols in traversal order.
pub fn collect_symbols(root: &AstNode) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    root.walk(&mut |node| {
        if node.kind() != NodeKind::FunctionDecl || node.name.is_empty() {
            return;
        }
        symbols.push(Symbol {
            name: node.name.clone(),
            kind: SymbolKind::Function,
            scope: "global".to_string(),
            line: node.line,
            column: node.column,
        });
        for child in &node.children {
            if child.kind() == NodeKind::ParmDecl && !child.name.is_empty() {
                symbols.push(Symbol {
                    name: child.name.clone(),
                    kind: SymbolKind::Parameter,
                    scope: node.name.clone(),
                    line: child.line,
                    column: child.column,
                });
            }
        }
    });
    symbols
}
