//! Function Table Builder
//!
//! One pass over the AST collecting every named function declaration,
//! with parameter names in encounter order.

use crate::domain::ast::{AstNode, NodeKind};

/// A call site resolved inside a function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub callee: String,
    pub line: u32,
}

/// One function declaration found in the AST.
///
/// `decl` borrows the declaration node from the provider's tree; records
/// never outlive the analysis pass that created them.
#[derive(Debug, Clone)]
pub struct FunctionRecord<'a> {
    pub name: String,
    pub line: u32,
    pub parameters: Vec<String>,
    pub decl: &'a AstNode,
    pub is_recursive: bool,
    pub calls: Vec<CallSite>,
}

/// All functions in one translation unit, in traversal order.
///
/// Traversal order matters downstream: the simulator picks the *first*
/// self-recursive function, so this is a Vec rather than a map.
#[derive(Debug, Default)]
pub struct FunctionTable<'a> {
    pub records: Vec<FunctionRecord<'a>>,
}

impl<'a> FunctionTable<'a> {
    /// Build the table from the AST root. Unnamed declarations are skipped;
    /// an AST without functions yields an empty table.
    pub fn build(root: &'a AstNode) -> FunctionTable<'a> {
        let mut table = FunctionTable::default();
        root.walk(&mut |node| {
            if node.kind() == NodeKind::FunctionDecl && !node.name.is_empty() {
                let parameters = node
                    .children
                    .iter()
                    .filter(|c| c.kind() == NodeKind::ParmDecl && !c.name.is_empty())
                    .map(|c| c.name.clone())
                    .collect();
                table.records.push(FunctionRecord {
                    name: node.name.clone(),
                    line: node.line,
                    parameters,
                    decl: node,
                    is_recursive: false,
                    calls: Vec::new(),
                });
            }
        });
        table
    }

    pub fn get(&self, name: &str) -> Option<&FunctionRecord<'a>> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    /// First function flagged self-recursive, in traversal order.
    pub fn first_recursive(&self) -> Option<&FunctionRecord<'a>> {
        self.records.iter().find(|r| r.is_recursive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(tag: &str, name: &str, line: u32, children: Vec<AstNode>) -> AstNode {
        AstNode {
            id: format!("{}:{}", tag, line),
            tag: tag.to_string(),
            name: name.to_string(),
            line,
            column: 1,
            children,
        }
    }

    #[test]
    fn test_collects_functions_with_parameters_in_order() {
        let root = node(
            "TRANSLATION_UNIT",
            "",
            0,
            vec![node(
                "FUNCTION_DECL",
                "add",
                2,
                vec![
                    node("PARM_DECL", "a", 2, vec![]),
                    node("PARM_DECL", "b", 2, vec![]),
                    node("COMPOUND_STMT", "", 2, vec![]),
                ],
            )],
        );

        let table = FunctionTable::build(&root);
        assert_eq!(table.records.len(), 1);
        let rec = table.get("add").unwrap();
        assert_eq!(rec.line, 2);
        assert_eq!(rec.parameters, vec!["a", "b"]);
        assert!(!rec.is_recursive);
    }

    #[test]
    fn test_skips_unnamed_declarations() {
        let root = node(
            "TRANSLATION_UNIT",
            "",
            0,
            vec![
                node("FUNCTION_DECL", "", 1, vec![]),
                node("FUNCTION_DECL", "main", 3, vec![]),
            ],
        );

        let table = FunctionTable::build(&root);
        assert_eq!(table.records.len(), 1);
        assert!(table.contains("main"));
    }

    #[test]
    fn test_empty_ast_yields_empty_table() {
        let root = node("TRANSLATION_UNIT", "", 0, vec![]);
        let table = FunctionTable::build(&root);
        assert!(table.records.is_empty());
        assert!(table.first_recursive().is_none());
    }

    #[test]
    fn test_traversal_order_preserved() {
        let root = node(
            "TRANSLATION_UNIT",
            "",
            0,
            vec![
                node("FUNCTION_DECL", "first", 1, vec![]),
                node("FUNCTION_DECL", "second", 5, vec![]),
                node("FUNCTION_DECL", "third", 9, vec![]),
            ],
        );

        let table = FunctionTable::build(&root);
        let names: Vec<&str> = table.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
