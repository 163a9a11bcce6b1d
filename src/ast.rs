//! # Flume Expression Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the flume
//! expression language, a small language built around values flowing
//! left-to-right through pipelines of function applications.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, references,
//!   applications, pipelines)
//!
//! ## Quick Start
//!
//! ```text
//! @.orders | filter_paid | total
//! ```
//!
//! This program threads the root value's `orders` field through two
//! function stages.
//!
//! ## Core Concepts
//!
//! ### The Four Node Kinds
//!
//! Every parsed program is a tree of exactly four node kinds:
//!
//! - **Literal** - numbers, strings, booleans, null, arrays, objects
//! - **Reference** - a dotted path of names, optionally rooted at `@`
//! - **Application** - a function juxtaposed with its arguments
//! - **Pipeline** - two or more stages chained with `|`
//!
//! ### Precedence
//!
//! Application binds tighter than pipe, and parentheses override both:
//!
//! ```text
//! sup nernd | hi there      // (sup nernd) | (hi there)
//! sup (nernd | hi) there    // one application, pipeline argument
//! ```
//!
//! A pipe always closes the argument list of the application to its
//! left; parentheses are the only way to nest a pipeline inside an
//! argument or another stage.
//!
//! ### Structural Invariants
//!
//! - A `Pipeline` has at least two stages; single-stage groupings unwrap.
//! - An `Application` has at least one argument; a bare reference stands
//!   alone.
//! - A `Reference` path is never empty, and only its first segment may
//!   be the root marker `@`.
//! - Parentheses never appear in the tree; grouping is resolved at parse
//!   time.
//!
//! ## Examples
//!
//! ### Pipeline of Applications
//!
//! ```text
//! load "users.json" | filter active | map @.name
//! ```
//!
//! ### Nested Grouping
//!
//! ```text
//! hello | (there | hi) | (whatup)
//! ```
//!
//! ### Literals Containing Expressions
//!
//! ```text
//! {"first": head @.items, "rest": tail @.items}
//! ```
pub mod expressions;
pub mod tokens;

pub use expressions::{Expr, Literal};
pub use tokens::{Token, TokenKind};
