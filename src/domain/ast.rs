// AST data structures for StackScope.
// The tree is produced by an external libclang-based parser and delivered as
// JSON; StackScope only ever reads it.

use serde::{Deserialize, Serialize};

/// A node in the abstract syntax tree, as shipped by the AST provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstNode {
    pub id: String,
    /// Cursor-kind tag, e.g. "FUNCTION_DECL" or "CALL_EXPR".
    #[serde(rename = "type")]
    pub tag: String,
    /// Spelling of the cursor. Empty for nodes without one.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
    #[serde(default)]
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_tag(&self.tag)
    }

    /// Depth-first pre-order walk over this subtree, including `self`.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a AstNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Node tags StackScope assigns meaning to. Everything else is traversed
/// through as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    FunctionDecl,
    ParmDecl,
    CallExpr,
    DeclRefExpr,
    BinaryOperator,
    IntegerLiteral,
    Other,
}

impl NodeKind {
    /// Parse a provider tag string into a kind.
    pub fn from_tag(tag: &str) -> NodeKind {
        match tag {
            "FUNCTION_DECL" => NodeKind::FunctionDecl,
            "PARM_DECL" => NodeKind::ParmDecl,
            "CALL_EXPR" => NodeKind::CallExpr,
            "DECL_REF_EXPR" => NodeKind::DeclRefExpr,
            "BINARY_OPERATOR" => NodeKind::BinaryOperator,
            "INTEGER_LITERAL" => NodeKind::IntegerLiteral,
            _ => NodeKind::Other,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::FunctionDecl => "FUNCTION_DECL",
            NodeKind::ParmDecl => "PARM_DECL",
            NodeKind::CallExpr => "CALL_EXPR",
            NodeKind::DeclRefExpr => "DECL_REF_EXPR",
            NodeKind::BinaryOperator => "BINARY_OPERATOR",
            NodeKind::IntegerLiteral => "INTEGER_LITERAL",
            NodeKind::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
