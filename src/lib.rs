//! A linked binary search tree used as an ordered map.
//!
//! [`search_tree::OrderedMapTree`] maps unique keys to values and keeps them
//! ordered by a [`tree_base::tree_traits::KeyComparator`]. It is built on
//! [`tree_base::binary_tree::BinaryTree`], which owns the nodes, counts them and
//! provides pre-, in-, post- and level-order traversal.
//!
//! The tree is not balanced: its height follows the insertion order.

pub mod error;
pub mod search_tree;
pub mod tree_base;
