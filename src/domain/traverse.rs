use crate::domain::ledger::{NodeId, TreeNode};

/// In-order walk over the date nodes of a ledger, smallest date first.
///
/// Uses an explicit stack instead of recursion, since insertion order alone
/// decides the tree shape and dates inserted in sorted order degrade it into a
/// list.
pub(crate) struct InOrder<'a> {
    nodes: &'a [TreeNode],
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(nodes: &'a [TreeNode], root: Option<NodeId>) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            cursor: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.nodes[id].left;
        }
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.cursor = node.right;
        Some(node)
    }
}
