//! An unbalanced binary search tree keeping unique keys in sorted order.

use crate::{
    error::{InsertError, StructureError},
    tree_base::{
        audit::AuditReport,
        binary_tree::BinaryTree,
        iter::{InOrderIter, LevelOrderIter, PostOrderIter, PreOrderIter},
        node::{NodeId, Side},
        tree_stats::TreeStats,
        tree_traits::TreeParams,
        DefaultTreeConfig, VerifiedTreeConfig,
    },
};

/// Ordered map backed by a linked binary search tree.
///
/// For every node, keys in the left subtree are strictly less than the node's
/// key and keys in the right subtree are greater or equal. Keys are unique.
/// The tree is never rebalanced, so its depth depends on insertion order; all
/// descents are iterative so a degenerate tree cannot exhaust the stack.
///
/// # Examples
///
/// ```
/// use linked_bst::search_tree::DefaultOrderedMapTree;
///
/// let mut tree = DefaultOrderedMapTree::new();
/// tree.set(5, "a");
/// tree.set(3, "b");
/// tree.set(8, "c");
///
/// assert_eq!(tree.get(&3), Some(&"b"));
/// assert!(tree.contains(&8));
/// assert!(!tree.contains(&9));
///
/// assert_eq!(tree.remove(&5), Some("a"));
/// assert_eq!(tree.len(), 2);
/// ```
pub struct OrderedMapTree<T: TreeParams> {
    _tree: BinaryTree<T>,
}

/// Where a descent for a key ended.
enum Search {
    Found(NodeId),
    /// The key belongs in the empty `side` link of `parent`, or at the root.
    Vacant(Option<NodeId>, Side),
}

impl<T: TreeParams> OrderedMapTree<T> {
    pub fn new() -> Self {
        Self {
            _tree: BinaryTree::new(),
        }
    }

    pub fn with_root(key: T::KeyType, value: T::ValueType) -> Self {
        Self {
            _tree: BinaryTree::with_root(key, value),
        }
    }

    /// Builds a tree by placing the entries in level order, then checks that
    /// the result is a search tree.
    ///
    /// # Errors
    ///
    /// Fails if the sequences differ in length or are empty, if the placement
    /// breaks the BST property, or if a key appears twice.
    ///
    /// ```
    /// use linked_bst::{error::StructureError, search_tree::DefaultOrderedMapTree};
    ///
    /// let tree = DefaultOrderedMapTree::from_level_order(vec![5, 3, 8], vec!["a", "b", "c"]);
    /// assert!(tree.is_ok());
    ///
    /// let tree = DefaultOrderedMapTree::from_level_order(vec![5, 8, 3], vec!["a", "b", "c"]);
    /// assert_eq!(tree.unwrap_err(), StructureError::BstViolation);
    /// ```
    pub fn from_level_order(
        keys: Vec<T::KeyType>,
        values: Vec<T::ValueType>,
    ) -> Result<Self, StructureError> {
        let tree = Self {
            _tree: BinaryTree::from_level_order(keys, values)?,
        };

        let report = tree._tree.audit();
        if !report.is_ordered() {
            log::debug!("OrderedMapTree::from_level_order rejected: {:?}", report);
            return Err(StructureError::BstViolation);
        }
        if !report.is_valid() {
            log::debug!("OrderedMapTree::from_level_order rejected: {:?}", report);
            return Err(StructureError::DuplicateKey);
        }

        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self._tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self._tree.is_empty()
    }

    pub fn clear(&mut self) {
        self._tree.clear();
    }

    pub fn height(&self) -> usize {
        self._tree.height()
    }

    pub fn stats(&self) -> TreeStats {
        self._tree.stats()
    }

    /// The underlying linked tree, for shape inspection.
    pub fn as_binary_tree(&self) -> &BinaryTree<T> {
        &self._tree
    }

    /// Descends from the root: stop on an equal key, go left when the key is
    /// smaller, right otherwise.
    fn search(&self, key: &T::KeyType) -> Search {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self._tree.root();

        while let Some(id) = curr {
            let node = self._tree.at(id);
            if self._tree.key_equal(key, node.key()) {
                return Search::Found(id);
            }
            side = if self._tree.key_less(key, node.key()) {
                Side::Left
            } else {
                Side::Right
            };
            parent = Some(id);
            curr = node.child(side);
        }

        Search::Vacant(parent, side)
    }

    fn find_node(&self, key: &T::KeyType) -> Option<NodeId> {
        match self.search(key) {
            Search::Found(id) => Some(id),
            Search::Vacant(..) => None,
        }
    }

    pub fn contains(&self, key: &T::KeyType) -> bool {
        self.find_node(key).is_some()
    }

    pub fn get(&self, key: &T::KeyType) -> Option<&T::ValueType> {
        self.find_node(key).map(|id| self._tree.at(id).value())
    }

    pub fn get_mut(&mut self, key: &T::KeyType) -> Option<&mut T::ValueType> {
        let id = self.find_node(key)?;
        Some(self._tree.at_mut(id).value_mut())
    }

    /// Inserts or updates. An existing key keeps its node and gets the new
    /// value; the previous value is returned.
    pub fn set(&mut self, key: T::KeyType, value: T::ValueType) -> Option<T::ValueType> {
        match self.search(&key) {
            Search::Found(id) => {
                log::debug!("OrderedMapTree::set updating {:?}", key);
                Some(std::mem::replace(self._tree.at_mut(id).value_mut(), value))
            }
            Search::Vacant(parent, side) => {
                self._tree.link_leaf(parent, side, key, value);
                self._tree.self_verify();
                None
            }
        }
    }

    /// Strict insertion: adds a new leaf, refusing keys already present.
    ///
    /// # Errors
    ///
    /// [`InsertError::DuplicateKey`] hands the entry back when the key is
    /// already in the tree; the tree is unchanged.
    pub fn add(
        &mut self,
        key: T::KeyType,
        value: T::ValueType,
    ) -> Result<(), InsertError<T::KeyType, T::ValueType>> {
        match self.search(&key) {
            Search::Found(_) => {
                log::debug!("OrderedMapTree::add refused duplicate {:?}", key);
                Err(InsertError::DuplicateKey(key, value))
            }
            Search::Vacant(parent, side) => {
                self._tree.link_leaf(parent, side, key, value);
                self._tree.self_verify();
                Ok(())
            }
        }
    }

    /// Removes a key and returns its value, or `None` (leaving the tree as it
    /// was) when the key is absent.
    ///
    /// A node with two children takes over the entry of its in-order
    /// successor, whose own node, having no left child, is then spliced out.
    pub fn remove(&mut self, key: &T::KeyType) -> Option<T::ValueType> {
        let id = self.find_node(key)?;

        let node = self._tree.at(id);
        let victim = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                let successor = self._tree.leftmost(right);
                log::debug!(
                    "OrderedMapTree::remove {:?} via successor {:?}",
                    key,
                    self._tree.at(successor).key()
                );
                self._tree.swap_entries(id, successor);
                successor
            }
            _ => id,
        };

        let (_, value) = self._tree.splice_out(victim);
        self._tree.self_verify();
        Some(value)
    }

    /// Entry with the smallest key.
    pub fn first(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.first().map(|id| {
            let node = self._tree.at(id);
            (node.key(), node.value())
        })
    }

    /// Entry with the largest key.
    pub fn last(&self) -> Option<(&T::KeyType, &T::ValueType)> {
        self._tree.last().map(|id| {
            let node = self._tree.at(id);
            (node.key(), node.value())
        })
    }

    /// True when every key lies within the bounds set by its ancestors:
    /// strictly below those it sits left of, at or above those it sits right
    /// of. The empty tree passes.
    pub fn check_bst_property(&self) -> bool {
        self._tree.audit().is_ordered()
    }

    /// Full structural audit: ordering, key uniqueness, parent links, size.
    pub fn audit(&self) -> AuditReport {
        self._tree.audit()
    }

    pub fn iter(&self) -> InOrderIter<'_, T> {
        self._tree.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &T::KeyType> + ExactSizeIterator {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T::ValueType> + ExactSizeIterator {
        self.iter().map(|(_, v)| v)
    }

    pub fn pre_order(&self) -> PreOrderIter<'_, T> {
        self._tree.pre_order()
    }

    pub fn post_order(&self) -> PostOrderIter<'_, T> {
        self._tree.post_order()
    }

    pub fn level_order(&self) -> LevelOrderIter<'_, T> {
        self._tree.level_order()
    }
}

impl<T: TreeParams> Default for OrderedMapTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TreeParams> Clone for OrderedMapTree<T>
where
    T::KeyType: Clone,
    T::ValueType: Clone,
{
    fn clone(&self) -> Self {
        Self {
            _tree: self._tree.clone(),
        }
    }
}

impl<T: TreeParams> std::fmt::Debug for OrderedMapTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self._tree, f)
    }
}

impl<'a, T: TreeParams> IntoIterator for &'a OrderedMapTree<T> {
    type Item = (&'a T::KeyType, &'a T::ValueType);
    type IntoIter = InOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: TreeParams> Extend<(T::KeyType, T::ValueType)> for OrderedMapTree<T> {
    fn extend<I: IntoIterator<Item = (T::KeyType, T::ValueType)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<T: TreeParams> FromIterator<(T::KeyType, T::ValueType)> for OrderedMapTree<T> {
    fn from_iter<I: IntoIterator<Item = (T::KeyType, T::ValueType)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

pub type DefaultOrderedMapTree<K, V> = OrderedMapTree<DefaultTreeConfig<K, V>>;
pub type VerifiedOrderedMapTree<K, V> = OrderedMapTree<VerifiedTreeConfig<K, V>>;
