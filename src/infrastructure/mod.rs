// Infrastructure implementations for StackScope: JSON in, JSON out.

use anyhow::Context;
use serde_json::Value;

use crate::api::dto::ReportDto;
use crate::domain::ast::AstNode;
use crate::domain::trace::TraceReport;
use crate::ports::{AstSource, TraceExporter};

/// Loads an AST from a JSON file.
///
/// Accepts either a bare AST node or the parse backend's envelope
/// `{ "success": ..., "ast": ..., ... }`. A JSON `null` tree (the backend's
/// parse-failure shape) loads as `None`.
pub struct JsonAstLoader;

impl AstSource for JsonAstLoader {
    fn load(&self, path: &str) -> anyhow::Result<Option<AstNode>> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read AST file: {}", path))?;
        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid JSON in AST file: {}", path))?;

        let tree = match value {
            Value::Object(mut obj) if obj.contains_key("ast") => {
                obj.remove("ast").unwrap_or(Value::Null)
            }
            other => other,
        };
        if tree.is_null() {
            return Ok(None);
        }
        let node: AstNode = serde_json::from_value(tree)
            .with_context(|| format!("AST file does not match the node contract: {}", path))?;
        Ok(Some(node))
    }
}

/// Writes the report envelope as pretty-printed JSON.
pub struct JsonTraceExporter;

impl TraceExporter for JsonTraceExporter {
    fn export(&self, report: &TraceReport, path: &str) -> anyhow::Result<()> {
        let dto = ReportDto::from(report);
        let json = serde_json::to_string_pretty(&dto)?;
        std::fs::write(path, json)
            .with_context(|| format!("Cannot write trace to: {}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_load_bare_node() {
        let dir = tempdir().unwrap();
        let path = write_file(
            &dir,
            "ast.json",
            r#"{"id": "1", "type": "TRANSLATION_UNIT", "name": "", "line": 0, "column": 0, "children": []}"#,
        );
        let ast = JsonAstLoader.load(&path).unwrap();
        assert!(ast.is_some());
        assert_eq!(ast.unwrap().tag, "TRANSLATION_UNIT");
    }

    #[test]
    fn test_load_parse_envelope() {
        let dir = tempdir().unwrap();
        let path = write_file(
            &dir,
            "parsed.json",
            r#"{"success": true, "ast": {"id": "1", "type": "TRANSLATION_UNIT", "children": []}, "errors": []}"#,
        );
        let ast = JsonAstLoader.load(&path).unwrap();
        assert!(ast.is_some());
    }

    #[test]
    fn test_load_null_ast_as_none() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "failed.json", r#"{"success": false, "ast": null}"#);
        let ast = JsonAstLoader.load(&path).unwrap();
        assert!(ast.is_none());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = JsonAstLoader.load("/definitely/not/here.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_export_writes_envelope() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("trace.json");
        let report = TraceReport {
            trace: vec![],
            recursive_function: None,
            symbols: vec![],
        };

        JsonTraceExporter
            .export(&report, out.to_str().unwrap())
            .unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["success"], true);
        assert!(value["trace"].as_array().unwrap().is_empty());
    }
}
