//! Serialization of parsed expressions.
//!
//! Two views of the same AST:
//!
//! - **Source form** via [`to_source()`] - round-trippable program text.
//!   Re-parsing the output of `to_source` yields a structurally equal
//!   AST; nested pipelines and applications are re-parenthesized where
//!   the grammar requires it.
//! - **JSON description** via [`to_json()`] and [`to_json_pretty()`] -
//!   a tagged-object rendering of the tree for host tooling and
//!   debugging, built on `serde_json`. References carry their full
//!   `path` array; object keys are sorted so output is deterministic.
//!
//! # Examples
//!
//! ```
//! use flume_lang::output::to_source;
//!
//! let expr = flume_lang::parse_or_panic("hello | (there | hi)");
//! assert_eq!(to_source(&expr), "hello | (there | hi)");
//! ```

use serde_json::Value as Json;

use crate::ast::{Expr, Literal};

/// Re-serialize an expression to source text.
///
/// The output is minimal: single spaces between application terms,
/// ` | ` between pipeline stages, and parentheses only where the
/// grammar would otherwise regroup the tree.
pub fn to_source(expr: &Expr) -> String {
    match expr {
        Expr::Literal(literal) => literal_source(literal),
        Expr::Reference { path } => path.join("."),
        Expr::Application {
            function,
            arguments,
        } => {
            let mut terms = vec![operand_source(function)];
            terms.extend(arguments.iter().map(operand_source));
            terms.join(" ")
        }
        Expr::Pipeline { stages } => stages
            .iter()
            .map(stage_source)
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

/// An expression in function or argument position. Applications and
/// pipelines both bind looser than juxtaposition, so they need parens.
fn operand_source(expr: &Expr) -> String {
    match expr {
        Expr::Application { .. } | Expr::Pipeline { .. } => format!("({})", to_source(expr)),
        _ => to_source(expr),
    }
}

/// An expression in pipeline-stage position. Only a nested pipeline
/// needs parens; an application stage reads back unambiguously.
fn stage_source(expr: &Expr) -> String {
    match expr {
        Expr::Pipeline { .. } => format!("({})", to_source(expr)),
        _ => to_source(expr),
    }
}

fn literal_source(literal: &Literal) -> String {
    match literal {
        Literal::Null => "null".to_string(),
        Literal::Boolean(b) => b.to_string(),
        Literal::Number(n) => n.to_string(),
        Literal::String(s) => format!("\"{}\"", escape_string(s)),
        Literal::Array(elements) => {
            let items: Vec<String> = elements.iter().map(to_source).collect();
            format!("[{}]", items.join(", "))
        }
        Literal::Object(entries) => {
            // Sort keys for deterministic output
            let mut keys: Vec<_> = entries.keys().collect();
            keys.sort();

            let items: Vec<String> = keys
                .iter()
                .filter_map(|k| {
                    entries
                        .get(*k)
                        .map(|v| format!("\"{}\": {}", escape_string(k), to_source(v)))
                })
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}

/// Escape exactly the sequences the lexer understands, so escaped
/// strings read back to the same value.
fn escape_string(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '"' => vec!['\\', '"'],
            '\\' => vec!['\\', '\\'],
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            c => vec![c],
        })
        .collect()
}

/// Describe an expression as compact JSON.
///
/// Each node becomes a tagged object: `{"type": "literal", "valueType":
/// ..., "value": ...}`, `{"type": "reference", "path": [...]}`,
/// `{"type": "application", "function": ..., "arguments": [...]}`, or
/// `{"type": "pipeline", "stages": [...]}`.
pub fn to_json(expr: &Expr) -> String {
    describe(expr).to_string()
}

/// Describe an expression as pretty-printed JSON.
pub fn to_json_pretty(expr: &Expr) -> String {
    format!("{:#}", describe(expr))
}

fn describe(expr: &Expr) -> Json {
    match expr {
        Expr::Literal(literal) => {
            let mut node = serde_json::Map::new();
            node.insert("type".to_string(), Json::from("literal"));
            node.insert("valueType".to_string(), Json::from(literal.value_type()));
            node.insert("value".to_string(), describe_literal(literal));
            Json::Object(node)
        }
        Expr::Reference { path } => {
            let mut node = serde_json::Map::new();
            node.insert("type".to_string(), Json::from("reference"));
            node.insert("path".to_string(), Json::from(path.clone()));
            Json::Object(node)
        }
        Expr::Application {
            function,
            arguments,
        } => {
            let mut node = serde_json::Map::new();
            node.insert("type".to_string(), Json::from("application"));
            node.insert("function".to_string(), describe(function));
            node.insert(
                "arguments".to_string(),
                Json::Array(arguments.iter().map(describe).collect()),
            );
            Json::Object(node)
        }
        Expr::Pipeline { stages } => {
            let mut node = serde_json::Map::new();
            node.insert("type".to_string(), Json::from("pipeline"));
            node.insert(
                "stages".to_string(),
                Json::Array(stages.iter().map(describe).collect()),
            );
            Json::Object(node)
        }
    }
}

fn describe_literal(literal: &Literal) -> Json {
    match literal {
        Literal::Null => Json::Null,
        Literal::Boolean(b) => Json::from(*b),
        Literal::Number(n) => Json::from(*n),
        Literal::String(s) => Json::from(s.clone()),
        Literal::Array(elements) => Json::Array(elements.iter().map(describe).collect()),
        Literal::Object(entries) => {
            // Sorted for determinism, same as the source form
            let mut keys: Vec<_> = entries.keys().collect();
            keys.sort();

            let mut object = serde_json::Map::new();
            for key in keys {
                if let Some(value) = entries.get(key) {
                    object.insert(key.clone(), describe(value));
                }
            }
            Json::Object(object)
        }
    }
}
