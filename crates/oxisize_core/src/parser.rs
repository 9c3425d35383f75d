use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast_visit::{Visit, walk};
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::{GetSpan, SourceType};
use std::path::Path;
use thiserror::Error;

use crate::syntax::{NodeKind, SyntaxTree, TreeBuilder};

#[derive(Debug, Error)]
#[error("failed to parse bundle: {}", .diagnostics.join("; "))]
pub struct ParseError {
    pub diagnostics: Vec<String>,
}

/// Parses `source` and converts the AST into an owned [`SyntaxTree`].
///
/// Any diagnostic reported by the parser is fatal: a bundle that does not parse
/// cleanly produces no tree.
pub fn parse_bundle(source: &str, source_type: SourceType) -> Result<SyntaxTree<'_>, ParseError> {
    trace!("Parsing {} bytes as {:?}", source.len(), source_type);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(&allocator, source, source_type).parse();

    if panicked || !errors.is_empty() {
        let mut diagnostics: Vec<String> = errors.iter().map(|e| format!("{}", e)).collect();
        if diagnostics.is_empty() {
            diagnostics.push("parser aborted".to_string());
        }
        debug!("Parser reported {} diagnostics", diagnostics.len());
        return Err(ParseError { diagnostics });
    }

    let mut builder = TreeBuilder::new(source);
    builder.enter(NodeKind::Program, program.span);
    builder.visit_program(&program);
    builder.leave();
    let tree = builder.finish();

    debug!("Built syntax tree with {} nodes", tree.len());
    Ok(tree)
}

/// Bundles are scripts unless they carry the `.mjs` extension or the caller forces module goal.
pub fn source_type_for(path: &Path, force_module: bool) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());
    SourceType::default().with_module(force_module || matches!(ext, Some("mjs")))
}

fn classify(expr: &Expression<'_>) -> NodeKind {
    match expr {
        Expression::NumericLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::BigIntLiteral(_)
        | Expression::RegExpLiteral(_) => NodeKind::Literal,
        Expression::ObjectExpression(_) => NodeKind::ObjectLiteral,
        Expression::ArrayExpression(_) => NodeKind::ArrayLiteral,
        Expression::FunctionExpression(func) => {
            NodeKind::FunctionExpression { params: parameter_count(&func.params) }
        }
        Expression::ArrowFunctionExpression(arrow) => {
            NodeKind::FunctionExpression { params: parameter_count(&arrow.params) }
        }
        _ => NodeKind::Other,
    }
}

fn parameter_count(params: &FormalParameters<'_>) -> usize {
    params.items.len() + usize::from(params.rest.is_some())
}

// Statements, expressions, declarators, cases, catch clauses, parameters and
// default values become nodes. Everything else is transparent and its
// descendants attach to the nearest recorded ancestor.
impl<'a> Visit<'a> for TreeBuilder<'_> {
    fn visit_statement(&mut self, it: &Statement<'a>) {
        self.enter(NodeKind::Other, it.span());
        walk::walk_statement(self, it);
        self.leave();
    }

    fn visit_expression(&mut self, it: &Expression<'a>) {
        match it {
            Expression::StringLiteral(lit) => self.visit_string_literal(lit),
            _ => {
                self.enter(classify(it), it.span());
                walk::walk_expression(self, it);
                self.leave();
            }
        }
    }

    // Also reached directly for import/export sources and directives
    fn visit_string_literal(&mut self, it: &StringLiteral<'a>) {
        self.leaf(NodeKind::StringLiteral, it.span);
    }

    fn visit_directive(&mut self, it: &Directive<'a>) {
        self.enter(NodeKind::Other, it.span);
        walk::walk_directive(self, it);
        self.leave();
    }

    fn visit_variable_declarator(&mut self, it: &VariableDeclarator<'a>) {
        self.enter(NodeKind::Other, it.span);
        walk::walk_variable_declarator(self, it);
        self.leave();
    }

    fn visit_switch_case(&mut self, it: &SwitchCase<'a>) {
        self.enter(NodeKind::Other, it.span);
        walk::walk_switch_case(self, it);
        self.leave();
    }

    fn visit_catch_clause(&mut self, it: &CatchClause<'a>) {
        self.enter(NodeKind::Other, it.span);
        walk::walk_catch_clause(self, it);
        self.leave();
    }

    fn visit_formal_parameter(&mut self, it: &FormalParameter<'a>) {
        self.enter(NodeKind::Other, it.span);
        walk::walk_formal_parameter(self, it);
        self.leave();
    }

    fn visit_assignment_pattern(&mut self, it: &AssignmentPattern<'a>) {
        self.enter(NodeKind::Other, it.span);
        walk::walk_assignment_pattern(self, it);
        self.leave();
    }

    fn visit_property_definition(&mut self, it: &PropertyDefinition<'a>) {
        self.enter(NodeKind::Other, it.span);
        walk::walk_property_definition(self, it);
        self.leave();
    }

    fn visit_object_property(&mut self, it: &ObjectProperty<'a>) {
        self.enter(NodeKind::Property, it.span);
        walk::walk_object_property(self, it);
        self.leave();
    }

    fn visit_property_key(&mut self, it: &PropertyKey<'a>) {
        match it.as_expression() {
            Some(expr) => self.visit_expression(expr),
            None => walk::walk_property_key(self, it),
        }
    }

    fn visit_array_expression_element(&mut self, it: &ArrayExpressionElement<'a>) {
        match it {
            ArrayExpressionElement::SpreadElement(spread) => {
                self.enter(NodeKind::Other, spread.span);
                self.visit_spread_element(spread);
                self.leave();
            }
            ArrayExpressionElement::Elision(hole) => {
                self.leaf(NodeKind::Other, hole.span);
            }
            _ => {
                if let Some(expr) = it.as_expression() {
                    self.visit_expression(expr);
                }
            }
        }
    }
}
