use oxc_span::Span;

/// Index of a node inside a [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    StringLiteral,
    /// Numeric, boolean, null, bigint and regexp literals
    Literal,
    /// A key/value pair inside an object literal
    Property,
    ArrayLiteral,
    ObjectLiteral,
    /// Function expressions and arrow functions, with their parameter count (rest included)
    FunctionExpression { params: usize },
    Other,
}

impl NodeKind {
    pub fn is_literal(self) -> bool {
        matches!(self, NodeKind::StringLiteral | NodeKind::Literal)
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Owned syntax tree over a source buffer.
///
/// Nodes are stored in pre-order, so iterating the arena visits them in the
/// order they appear in the source. Every node's span lies within its parent's
/// span.
#[derive(Debug)]
pub struct SyntaxTree<'s> {
    source: &'s str,
    nodes: Vec<SyntaxNode>,
}

impl<'s> SyntaxTree<'s> {
    pub(crate) fn new(source: &'s str, nodes: Vec<SyntaxNode>) -> Self {
        Self { source, nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Walks the parent chain, nearest ancestor first, ending at the program node.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// All node ids in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Exact source text covered by the node, descendants included.
    pub fn source_span(&self, id: NodeId) -> &'s str {
        self.nodes[id.0].span.source_text(self.source)
    }

    pub fn span_len(&self, id: NodeId) -> u32 {
        self.nodes[id.0].span.size()
    }

    /// Source text of literal nodes; `None` for everything else.
    pub fn raw_text(&self, id: NodeId) -> Option<&'s str> {
        self.kind(id).is_literal().then(|| self.source_span(id))
    }
}

/// Incrementally builds a [`SyntaxTree`] while a visitor descends the AST.
#[derive(Debug)]
pub(crate) struct TreeBuilder<'s> {
    source: &'s str,
    nodes: Vec<SyntaxNode>,
    stack: Vec<NodeId>,
}

impl<'s> TreeBuilder<'s> {
    pub(crate) fn new(source: &'s str) -> Self {
        Self { source, nodes: Vec::new(), stack: Vec::new() }
    }

    pub(crate) fn enter(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.stack.last().copied();
        if let Some(p) = parent {
            let parent_span = self.nodes[p.0].span;
            debug_assert!(
                parent_span.start <= span.start && span.end <= parent_span.end,
                "child span {span:?} escapes parent span {parent_span:?}"
            );
            self.nodes[p.0].children.push(id);
        }
        self.nodes.push(SyntaxNode { kind, span, parent, children: Vec::new() });
        self.stack.push(id);
        id
    }

    pub(crate) fn leave(&mut self) {
        self.stack.pop();
    }

    pub(crate) fn leaf(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = self.enter(kind, span);
        self.leave();
        id
    }

    pub(crate) fn finish(self) -> SyntaxTree<'s> {
        debug_assert!(self.stack.is_empty(), "unbalanced enter/leave");
        SyntaxTree::new(self.source, self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SyntaxTree<'static> {
        // {"a":[1]}
        let src = r#"{"a":[1]}"#;
        let mut b = TreeBuilder::new(src);
        b.enter(NodeKind::Program, Span::new(0, 9));
        b.enter(NodeKind::ObjectLiteral, Span::new(0, 9));
        b.enter(NodeKind::Property, Span::new(1, 8));
        b.leaf(NodeKind::StringLiteral, Span::new(1, 4));
        b.enter(NodeKind::ArrayLiteral, Span::new(5, 8));
        b.leaf(NodeKind::Literal, Span::new(6, 7));
        b.leave();
        b.leave();
        b.leave();
        b.leave();
        b.finish()
    }

    #[test]
    fn test_source_span_and_raw_text() {
        let tree = sample();
        let key = NodeId(3);
        assert_eq!(tree.source_span(key), r#""a""#);
        assert_eq!(tree.raw_text(key), Some(r#""a""#));
        assert_eq!(tree.source_span(NodeId(4)), "[1]");
        assert_eq!(tree.raw_text(NodeId(4)), None);
        assert_eq!(tree.span_len(NodeId(2)), 7);
    }

    #[test]
    fn test_parent_links_and_children() {
        let tree = sample();
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.parent(NodeId(3)), Some(NodeId(2)));
        assert_eq!(tree.children(NodeId(2)), &[NodeId(3), NodeId(4)]);
        assert_eq!(tree.kind(NodeId(5)), NodeKind::Literal);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let tree = sample();
        let chain: Vec<NodeId> = tree.ancestors(NodeId(5)).collect();
        assert_eq!(chain, vec![NodeId(4), NodeId(2), NodeId(1), NodeId(0)]);
        assert_eq!(tree.ancestors(tree.root()).count(), 0);
    }

    #[test]
    fn test_iter_is_preorder() {
        let tree = sample();
        let kinds: Vec<NodeKind> = tree.iter().map(|id| tree.kind(id)).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Program,
                NodeKind::ObjectLiteral,
                NodeKind::Property,
                NodeKind::StringLiteral,
                NodeKind::ArrayLiteral,
                NodeKind::Literal,
            ]
        );
        assert_eq!(tree.len(), 6);
    }
}
