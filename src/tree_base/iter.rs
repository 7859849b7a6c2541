use std::{collections::VecDeque, iter::FusedIterator};

use super::{binary_tree::BinaryTree, node::NodeId, tree_traits::TreeParams};

type Entry<'a, T> = (
    &'a <T as TreeParams>::KeyType,
    &'a <T as TreeParams>::ValueType,
);

#[inline]
fn entry<T: TreeParams>(tree: &BinaryTree<T>, id: NodeId) -> Entry<'_, T> {
    let node = tree.at(id);
    (node.key(), node.value())
}

/// Sorted traversal. Steps between nodes by following parent links, so it
/// needs no stack and can be driven from either end.
pub struct InOrderIter<'a, T: TreeParams> {
    tree: &'a BinaryTree<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T: TreeParams> InOrderIter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            front: tree.first(),
            back: tree.last(),
            remaining: tree.size(),
        }
    }
}

impl<'a, T: TreeParams> Iterator for InOrderIter<'a, T> {
    type Item = Entry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.tree.in_order_successor(id);
        Some(entry(self.tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: TreeParams> DoubleEndedIterator for InOrderIter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.tree.in_order_predecessor(id);
        Some(entry(self.tree, id))
    }
}

impl<'a, T: TreeParams> ExactSizeIterator for InOrderIter<'a, T> {}
impl<'a, T: TreeParams> FusedIterator for InOrderIter<'a, T> {}

/// Node, then left subtree, then right subtree.
pub struct PreOrderIter<'a, T: TreeParams> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, T: TreeParams> PreOrderIter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
            remaining: tree.size(),
        }
    }
}

impl<'a, T: TreeParams> Iterator for PreOrderIter<'a, T> {
    type Item = Entry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.at(id);
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(entry(self.tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: TreeParams> ExactSizeIterator for PreOrderIter<'a, T> {}
impl<'a, T: TreeParams> FusedIterator for PreOrderIter<'a, T> {}

/// Left subtree, then right subtree, then node.
pub struct PostOrderIter<'a, T: TreeParams> {
    tree: &'a BinaryTree<T>,
    // (node, children already pushed)
    stack: Vec<(NodeId, bool)>,
    remaining: usize,
}

impl<'a, T: TreeParams> PostOrderIter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root().map(|root| (root, false)).into_iter().collect(),
            remaining: tree.size(),
        }
    }
}

impl<'a, T: TreeParams> Iterator for PostOrderIter<'a, T> {
    type Item = Entry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(entry(self.tree, id));
            }
            let node = self.tree.at(id);
            self.stack.push((id, true));
            self.stack.extend(node.right().map(|r| (r, false)));
            self.stack.extend(node.left().map(|l| (l, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: TreeParams> ExactSizeIterator for PostOrderIter<'a, T> {}
impl<'a, T: TreeParams> FusedIterator for PostOrderIter<'a, T> {}

/// Breadth-first, left to right within a level.
pub struct LevelOrderIter<'a, T: TreeParams> {
    tree: &'a BinaryTree<T>,
    queue: VecDeque<NodeId>,
    remaining: usize,
}

impl<'a, T: TreeParams> LevelOrderIter<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            queue: tree.root().into_iter().collect(),
            remaining: tree.size(),
        }
    }
}

impl<'a, T: TreeParams> Iterator for LevelOrderIter<'a, T> {
    type Item = Entry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.tree.at(id);
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(entry(self.tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: TreeParams> ExactSizeIterator for LevelOrderIter<'a, T> {}
impl<'a, T: TreeParams> FusedIterator for LevelOrderIter<'a, T> {}
