use oxisize_core::SyntaxTree;

use crate::{matcher::ModuleEntry, types::ModuleRecord};

pub(crate) fn build_record(
    tree: &SyntaxTree<'_>,
    entry: &ModuleEntry,
    source_dir: &str,
) -> ModuleRecord {
    let raw = tree.raw_text(entry.literal).unwrap_or_default();
    ModuleRecord {
        name: strip_source_dir(literal_body(raw), source_dir),
        source_length: u64::from(tree.span_len(entry.entry)),
    }
}

/// Removes only the first occurrence, so names that repeat the dir keep the rest.
pub(crate) fn strip_source_dir(path: &str, source_dir: &str) -> String {
    path.replacen(source_dir, "", 1)
}

/// Raw literal text without its quote delimiters. Escapes are kept as written.
pub(crate) fn literal_body(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(body) = raw.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return body;
        }
    }
    raw
}
