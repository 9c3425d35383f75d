use log::{debug, info, trace};
use oxisize_core::{NodeId, NodeKind, SyntaxTree};

use crate::{config::MatchMode, record::literal_body, types::MatchStrategy};

/// Module wrappers are always called with `(require, module, exports)`.
const WRAPPER_PARAMS: usize = 3;

/// A literal confirmed as a module path, and the node whose span measures the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModuleEntry {
    pub(crate) literal: NodeId,
    pub(crate) entry: NodeId,
}

/// Finds module-table entries in pre-order, resolving `auto` to the strategy that applies.
pub(crate) fn match_modules(
    tree: &SyntaxTree<'_>,
    source_dir: &str,
    mode: MatchMode,
) -> (Vec<ModuleEntry>, MatchStrategy) {
    match mode {
        MatchMode::Strict => {
            (find_entries(tree, source_dir, MatchStrategy::Strict), MatchStrategy::Strict)
        }
        MatchMode::Loose => {
            (find_entries(tree, source_dir, MatchStrategy::Loose), MatchStrategy::Loose)
        }
        MatchMode::Auto => {
            let strict = find_entries(tree, source_dir, MatchStrategy::Strict);
            if !strict.is_empty() {
                return (strict, MatchStrategy::Strict);
            }
            let loose = find_entries(tree, source_dir, MatchStrategy::Loose);
            if loose.is_empty() {
                (strict, MatchStrategy::Strict)
            } else {
                info!(
                    "No module-table entries matched the strict shape, falling back to loose matching ({} literals)",
                    loose.len()
                );
                (loose, MatchStrategy::Loose)
            }
        }
    }
}

pub(crate) fn find_entries(
    tree: &SyntaxTree<'_>,
    source_dir: &str,
    strategy: MatchStrategy,
) -> Vec<ModuleEntry> {
    let entries: Vec<ModuleEntry> = tree
        .iter()
        .filter(|&id| mentions_source_dir(tree, id, source_dir))
        .filter_map(|literal| {
            let entry = match strategy {
                MatchStrategy::Strict => strict_entry(tree, literal),
                MatchStrategy::Loose => tree.parent(literal),
            };
            if entry.is_none() {
                trace!(
                    "Skipping literal {} at depth {}: not a module-table entry",
                    tree.source_span(literal),
                    tree.ancestors(literal).count()
                );
            }
            entry.map(|entry| ModuleEntry { literal, entry })
        })
        .collect();

    debug!("Matched {} module entries using {:?} strategy", entries.len(), strategy);
    entries
}

fn mentions_source_dir(tree: &SyntaxTree<'_>, id: NodeId, source_dir: &str) -> bool {
    tree.kind(id) == NodeKind::StringLiteral
        && tree.raw_text(id).is_some_and(|raw| literal_body(raw).contains(source_dir))
}

/// Returns the entry array when `literal` is the key of `"path": [function(a, b, c) {}, ...]`.
fn strict_entry(tree: &SyntaxTree<'_>, literal: NodeId) -> Option<NodeId> {
    let property = tree.parent(literal).filter(|&p| tree.kind(p) == NodeKind::Property)?;

    // The value is always the last child of a property
    let value = tree.children(property).last().copied()?;
    if value == literal || tree.kind(value) != NodeKind::ArrayLiteral {
        return None;
    }

    let wrapper = tree.children(value).first().copied()?;
    match tree.kind(wrapper) {
        NodeKind::FunctionExpression { params } if params == WRAPPER_PARAMS => Some(value),
        _ => None,
    }
}
