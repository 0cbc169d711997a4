//! Step Inference
//!
//! Guesses how a recursive call rewrites its first argument between one
//! invocation and the next.

use tracing::debug;

use crate::domain::ast::{AstNode, NodeKind};

/// Arithmetic operator of a step rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl StepOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            StepOp::Add => "+",
            StepOp::Sub => "-",
            StepOp::Mul => "*",
            StepOp::Div => "/",
        }
    }
}

/// The inferred per-call argument update. One rule is computed per analysis,
/// from the first recursive call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRule {
    pub op: StepOp,
    pub operand: i64,
}

impl Default for StepRule {
    fn default() -> Self {
        StepRule {
            op: StepOp::Sub,
            operand: 1,
        }
    }
}

impl StepRule {
    /// Infer the rule from a call expression known to be a recursive
    /// self-call. Child 0 is the callee reference; child 1 is the first
    /// positional argument.
    ///
    /// The tree shape does not reliably carry the operator spelling, so the
    /// operator is always reported as subtraction regardless of the source.
    /// Known heuristic limitation, kept on purpose.
    pub fn infer(call: &AstNode) -> StepRule {
        let rule = match call.children.get(1) {
            Some(arg) if arg.kind() == NodeKind::BinaryOperator => {
                match first_integer_literal(arg) {
                    Some(operand) => StepRule {
                        op: StepOp::Sub,
                        operand,
                    },
                    None => StepRule::default(),
                }
            }
            _ => StepRule::default(),
        };
        debug!(op = rule.op.symbol(), operand = rule.operand, "inferred step rule");
        rule
    }

    /// Apply the rule to an argument value.
    pub fn apply(&self, argument: i64) -> i64 {
        match self.op {
            StepOp::Add => argument.saturating_add(self.operand),
            StepOp::Sub => argument.saturating_sub(self.operand),
            StepOp::Mul => argument.saturating_mul(self.operand),
            StepOp::Div => {
                if self.operand == 0 {
                    argument
                } else {
                    argument / self.operand
                }
            }
        }
    }
}

/// First integer literal under `node` (subtree search) whose spelling parses.
fn first_integer_literal(node: &AstNode) -> Option<i64> {
    let mut value = None;
    node.walk(&mut |n| {
        if value.is_none() && n.kind() == NodeKind::IntegerLiteral {
            if let Ok(v) = n.name.parse::<i64>() {
                value = Some(v);
            }
        }
    });
    value
}
