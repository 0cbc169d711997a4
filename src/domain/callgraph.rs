//! Call Graph Resolver
//!
//! Finds call expressions in each function body, resolves callee names, and
//! flags self-recursion.

use tracing::debug;

use crate::domain::ast::{AstNode, NodeKind};
use crate::domain::function_table::{CallSite, FunctionTable};

/// Resolve call sites for every record in the table and mark recursion.
///
/// Calls whose resolved name is not itself in the table are dropped: the
/// analyzed unit routinely calls into headers and libraries we never saw.
pub fn resolve_calls(table: &mut FunctionTable<'_>) {
    let known: Vec<String> = table.records.iter().map(|r| r.name.clone()).collect();

    for record in &mut table.records {
        let mut calls: Vec<CallSite> = Vec::new();
        record.decl.walk(&mut |node| {
            if node.kind() != NodeKind::CallExpr {
                return;
            }
            let Some(callee) = resolve_callee(node) else {
                return;
            };
            if !known.iter().any(|n| *n == callee) {
                return;
            }
            let site = CallSite {
                callee,
                line: node.line,
            };
            // Dedup by (name, line): the same source call can surface more
            // than once in the tree.
            if !calls.contains(&site) {
                debug!(caller = %record.name, callee = %site.callee, line = site.line, "resolved call");
                calls.push(site);
            }
        });

        record.is_recursive = calls.iter().any(|c| c.callee == record.name);
        record.calls = calls;
    }
}

/// Resolve the callee name of a call-expression node.
///
/// Only the first child is searched, depth-first: a DECL_REF_EXPR name wins,
/// otherwise the first descendant with a non-empty name. The remaining
/// children are argument expressions and are deliberately never searched, so
/// an argument that mentions a function by name cannot be mistaken for the
/// callee.
pub fn resolve_callee(call: &AstNode) -> Option<String> {
    let head = call.children.first()?;

    let mut decl_ref = None;
    head.walk(&mut |n| {
        if decl_ref.is_none() && n.kind() == NodeKind::DeclRefExpr && !n.name.is_empty() {
            decl_ref = Some(n.name.clone());
        }
    });
    if decl_ref.is_some() {
        return decl_ref;
    }

    let mut named = None;
    head.walk(&mut |n| {
        if named.is_none() && !n.name.is_empty() {
            named = Some(n.name.clone());
        }
    });
    named
}

/// First call-expression in `decl` whose callee resolves to `name`, in
/// depth-first order. Used by step inference to locate the self-call.
pub fn find_self_call<'a>(decl: &'a AstNode, name: &str) -> Option<&'a AstNode> {
    let mut found: Option<&'a AstNode> = None;
    decl.walk(&mut |node| {
        if found.is_none()
            && node.kind() == NodeKind::CallExpr
            && resolve_callee(node).as_deref() == Some(name)
        {
            found = Some(node);
        }
    });
    found
}
