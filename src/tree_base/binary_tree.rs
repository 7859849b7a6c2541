use std::mem;

use super::{
    audit::{AuditReport, Violations},
    iter::{InOrderIter, LevelOrderIter, PostOrderIter, PreOrderIter},
    node::{BinaryNode, NodeId, Side},
    tree_stats::TreeStats,
    tree_traits::{KeyComparator, TreeParams},
};
use crate::error::StructureError;

pub type Node<T> = BinaryNode<<T as TreeParams>::KeyType, <T as TreeParams>::ValueType>;

/// A linked binary tree without any ordering of its own.
///
/// Nodes live in a dense arena and refer to each other by [`NodeId`]. The tree
/// keeps the entry count and provides the traversals and structural edits that
/// ordered trees are built from.
pub struct BinaryTree<T: TreeParams> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
    size: usize,
    key_less: T::KeyCompareType,
}

/// Convenient Key Comparison Functions Generated From key_less
impl<T: TreeParams> BinaryTree<T> {
    pub fn key_comp(&self) -> &T::KeyCompareType {
        &self.key_less
    }

    pub(crate) fn key_less(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        self.key_less.less(a, b)
    }

    pub(crate) fn key_lessequal(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        !self.key_less.less(b, a)
    }

    pub(crate) fn key_equal(&self, a: &T::KeyType, b: &T::KeyType) -> bool {
        !self.key_less.less(a, b) && !self.key_less.less(b, a)
    }
}

/// Construction
impl<T: TreeParams> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            size: 0,
            key_less: T::KeyCompareType::new(),
        }
    }

    pub fn with_root(key: T::KeyType, value: T::ValueType) -> Self {
        let mut tree = Self::new();
        tree.link_leaf(None, Side::Left, key, value);
        tree
    }

    /// Builds a complete tree from parallel key and value sequences, placing
    /// the entries in level order: the entry at index `i` gets the children at
    /// `2i + 1` and `2i + 2`. No ordering is checked here.
    pub fn from_level_order(
        keys: Vec<T::KeyType>,
        values: Vec<T::ValueType>,
    ) -> Result<Self, StructureError> {
        if keys.len() != values.len() {
            return Err(StructureError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        if keys.is_empty() {
            return Err(StructureError::Empty);
        }

        log::debug!("BinaryTree::from_level_order with {} entries", keys.len());

        let mut tree = Self::new();
        tree.nodes.reserve_exact(keys.len());
        for (i, (key, value)) in keys.into_iter().zip(values).enumerate() {
            let (parent, side) = match i {
                0 => (None, Side::Left),
                _ => {
                    let side = if i % 2 == 1 { Side::Left } else { Side::Right };
                    (Some(NodeId((i - 1) / 2)), side)
                }
            };
            let id = tree.link_leaf(parent, side, key, value);
            debug_assert_eq!(id.index(), i);
        }

        Ok(tree)
    }
}

impl<T: TreeParams> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TreeParams> Clone for BinaryTree<T>
where
    T::KeyType: Clone,
    T::ValueType: Clone,
{
    fn clone(&self) -> Self {
        // Ids are arena indices, so a plain copy of the arena keeps every link.
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            size: self.size,
            key_less: self.key_less.clone(),
        }
    }
}

/// Access Functions to the item count and the nodes
impl<T: TreeParams> BinaryTree<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.size = 0;
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub(crate) fn at(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    pub fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.at(id).left {
            id = left;
        }
        id
    }

    pub fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.at(id).right {
            id = right;
        }
        id
    }

    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    pub fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.rightmost(root))
    }

    /// Next node in in-order, found through the right subtree or by climbing
    /// parent links until we leave a left subtree.
    pub fn in_order_successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.at(id).right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        let mut parent = self.at(id).parent;
        while let Some(p) = parent {
            if self.at(p).left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.at(p).parent;
        }
        None
    }

    pub fn in_order_predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.at(id).left {
            return Some(self.rightmost(left));
        }
        let mut child = id;
        let mut parent = self.at(id).parent;
        while let Some(p) = parent {
            if self.at(p).right == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.at(p).parent;
        }
        None
    }

    /// Number of levels; 0 for the empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<NodeId> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&id| {
                    let node = self.at(id);
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        height
    }

    pub fn stats(&self) -> TreeStats {
        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        TreeStats {
            size: self.size,
            leaves,
            inner_nodes: self.nodes.len() - leaves,
            height: self.height(),
        }
    }
}

/// Traversal
impl<T: TreeParams> BinaryTree<T> {
    pub fn iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self)
    }

    pub fn pre_order(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self)
    }

    pub fn post_order(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self)
    }

    pub fn level_order(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(self)
    }
}

/// Structural edits
impl<T: TreeParams> BinaryTree<T> {
    /// Creates a leaf and hangs it from `parent` on `side`, or makes it the
    /// root when there is no parent. The target link must be empty.
    pub(crate) fn link_leaf(
        &mut self,
        parent: Option<NodeId>,
        side: Side,
        key: T::KeyType,
        value: T::ValueType,
    ) -> NodeId {
        log::debug!(
            "BinaryTree::link_leaf {:?} under {:?} on {:?}",
            key,
            parent,
            side
        );

        let id = NodeId(self.nodes.len());
        self.nodes.push(BinaryNode::new(key, value, parent));
        self.size += 1;

        match parent {
            Some(p) => {
                let link = self.at_mut(p).child_mut(side);
                debug_assert!(link.is_none());
                *link = Some(id);
            }
            None => {
                debug_assert!(self.root.is_none());
                self.root = Some(id);
            }
        }

        id
    }

    /// Redirects the link that points at `old` (its parent's child link, or
    /// the root) to `new`, and reparents `new`.
    fn replace_child(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.at(old).parent;
        match parent {
            Some(p) => {
                let pnode = self.at_mut(p);
                if pnode.left == Some(old) {
                    pnode.left = new;
                } else {
                    debug_assert!(pnode.right == Some(old));
                    pnode.right = new;
                }
            }
            None => {
                debug_assert!(self.root == Some(old));
                self.root = new;
            }
        }
        if let Some(n) = new {
            self.at_mut(n).parent = parent;
        }
    }

    /// Exchanges the entries stored at two nodes, leaving the links alone.
    pub(crate) fn swap_entries(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a.index() < b.index() { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi.index());
        let (x, y) = (&mut head[lo.index()], &mut tail[0]);
        mem::swap(&mut x.key, &mut y.key);
        mem::swap(&mut x.value, &mut y.value);
    }

    /// Removes a node with at most one child from the tree, moving the child
    /// (if any) into its place, and returns the node's entry.
    pub(crate) fn splice_out(&mut self, id: NodeId) -> (T::KeyType, T::ValueType) {
        let node = self.at(id);
        debug_assert!(node.child_count() <= 1);
        let child = node.only_child();

        log::debug!(
            "BinaryTree::splice_out {:?} at {:?}, child {:?}",
            node.key,
            id,
            child
        );

        self.replace_child(id, child);

        let node = self.at_mut(id);
        node.parent = None;
        node.left = None;
        node.right = None;

        self.free_node(id)
    }

    /// Drops a detached node from the arena. The last arena slot moves into
    /// the hole, so its neighbours are repointed at the new id.
    fn free_node(&mut self, id: NodeId) -> (T::KeyType, T::ValueType) {
        let last = NodeId(self.nodes.len() - 1);
        let node = self.nodes.swap_remove(id.index());
        self.size -= 1;

        if id != last {
            log::debug!("BinaryTree::free_node relocating {:?} to {:?}", last, id);

            let moved = self.at(id);
            let (parent, left, right) = (moved.parent, moved.left, moved.right);
            match parent {
                Some(p) => {
                    let pnode = self.at_mut(p);
                    if pnode.left == Some(last) {
                        pnode.left = Some(id);
                    } else {
                        debug_assert!(pnode.right == Some(last));
                        pnode.right = Some(id);
                    }
                }
                None => {
                    debug_assert!(self.root == Some(last));
                    self.root = Some(id);
                }
            }
            for child in left.into_iter().chain(right) {
                self.at_mut(child).parent = Some(id);
            }
        }

        (node.key, node.value)
    }
}

/// Verification
impl<T: TreeParams> BinaryTree<T> {
    /// Walks every reachable node once, checking the ordering of each key
    /// against the bounds inherited from its ancestors, the parent links and
    /// the entry count.
    pub fn audit(&self) -> AuditReport {
        let mut report = AuditReport::new(Violations::Ok, 0);

        if let Some(root) = self.root {
            if self.at(root).parent.is_some() {
                report.flag(Violations::ParentLink);
            }
        }

        // (node, inclusive lower bound, exclusive upper bound), bounds given
        // as the ancestors holding them
        let mut stack: Vec<(NodeId, Option<NodeId>, Option<NodeId>)> = Vec::new();
        stack.extend(self.root.map(|root| (root, None, None)));

        while let Some((id, lower, upper)) = stack.pop() {
            report.reachable += 1;
            if report.reachable > self.nodes.len() {
                // a cycle; the links cannot be trusted any further
                report.flag(Violations::ParentLink);
                break;
            }

            let node = self.at(id);

            if let Some(upper) = upper {
                if !self.key_less(&node.key, &self.at(upper).key) {
                    report.flag(Violations::LeftOrder);
                }
            }
            if let Some(lower) = lower {
                let bound = &self.at(lower).key;
                if !self.key_lessequal(bound, &node.key) {
                    report.flag(Violations::RightOrder);
                } else if self.key_equal(&node.key, bound) {
                    report.flag(Violations::DuplicateKey);
                }
            }

            for (child, child_lower, child_upper) in [
                (node.right, Some(id), upper),
                (node.left, lower, Some(id)),
            ] {
                if let Some(child) = child {
                    if self.nodes.get(child.index()).map(|c| c.parent) != Some(Some(id)) {
                        report.flag(Violations::ParentLink);
                        continue;
                    }
                    stack.push((child, child_lower, child_upper));
                }
            }
        }

        if report.reachable != self.size || self.size != self.nodes.len() {
            report.flag(Violations::SizeMismatch);
        }

        report
    }

    pub(crate) fn self_verify(&self) {
        if T::SELF_VERIFY {
            let report = self.audit();
            debug_assert!(report.is_valid(), "tree failed audit: {:?}", report);
        }
    }
}

/// Debug
impl<T: TreeParams> BinaryTree<T> {
    fn print_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        root: NodeId,
    ) -> std::fmt::Result {
        let mut stack = vec![(root, 0usize, "")];
        while let Some((id, depth, label)) = stack.pop() {
            for _ in 0..depth {
                write!(f, "  ")?;
            }
            let node = self.at(id);
            writeln!(f, "{}{:?}", label, node.key)?;

            if let Some(right) = node.right {
                stack.push((right, depth + 1, "R "));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1, "L "));
            }
        }
        Ok(())
    }
}

/// Display
impl<T: TreeParams> std::fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "size {}", self.size)?;
        if let Some(root) = self.root {
            self.print_node(f, root)?;
        }

        Ok(())
    }
}
