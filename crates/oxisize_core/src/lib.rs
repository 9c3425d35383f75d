//! Shared building blocks for oxisize tools.
//!
//! This crate provides:
//! - A parser front-end that turns a JavaScript bundle into an owned [`SyntaxTree`]
//! - The span model: byte spans, parent links and node kinds for every node
//! - Human readable byte sizes

mod parser;
mod size;
mod syntax;

// Re-export public API
pub use oxc_span::SourceType;
pub use parser::{ParseError, parse_bundle, source_type_for};
pub use size::pretty_size;
pub use syntax::{NodeId, NodeKind, SyntaxNode, SyntaxTree};
