/// Shape summary of a binary tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub leaves: usize,
    pub inner_nodes: usize,
    pub height: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> usize {
        self.inner_nodes + self.leaves
    }

    /// Height of a perfectly balanced tree holding the same number of nodes.
    pub fn min_height(&self) -> usize {
        (usize::BITS - self.size.leading_zeros()) as usize
    }

    /// Ratio of the actual height to the balanced height. 1.0 means the tree
    /// is as shallow as it can be.
    pub fn height_ratio(&self) -> f64 {
        if self.size == 0 {
            return 1.0;
        }
        self.height as f64 / self.min_height() as f64
    }
}
