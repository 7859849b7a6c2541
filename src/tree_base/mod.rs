pub mod audit;
pub mod binary_tree;
pub mod iter;
pub mod node;
pub mod tree_stats;
pub mod tree_traits;

use self::{
    binary_tree::BinaryTree,
    tree_traits::{KeyComparator, TreeConfig},
};

/// Orders keys by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultKeyComparator;

impl<T: Ord> KeyComparator<T> for DefaultKeyComparator {
    fn new() -> Self {
        Self
    }
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

/// Orders keys by the reverse of their `Ord` implementation, so in-order
/// traversal yields descending keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseKeyComparator;

impl<T: Ord> KeyComparator<T> for ReverseKeyComparator {
    fn new() -> Self {
        Self
    }
    fn less(&self, lhs: &T, rhs: &T) -> bool {
        rhs < lhs
    }
}

pub type DefaultTreeConfig<K, V> = TreeConfig<K, V, DefaultKeyComparator>;
pub type VerifiedTreeConfig<K, V> = TreeConfig<K, V, DefaultKeyComparator, true>;
pub type DefaultBinaryTree<K, V> = BinaryTree<DefaultTreeConfig<K, V>>;
