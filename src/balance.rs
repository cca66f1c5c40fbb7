//! Height, the balance check, and rebuilding a [`Tree`] into minimum height.

use crate::linked::{Link, Node, Tree};

impl<T> Tree<T> {
    /// The number of edges on the longest path from the root to a leaf, so a
    /// lone root has height 0. An empty tree has no height.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), None);
    ///
    /// tree.add(1);
    /// assert_eq!(tree.height(), Some(0));
    ///
    /// tree.add(2);
    /// assert_eq!(tree.height(), Some(1));
    /// ```
    pub fn height(&self) -> Option<usize> {
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        let mut height = None;
        while !level.is_empty() {
            height = Some(height.map_or(0, |h| h + 1));
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Whether `height < 2 * lg(len + 1) - 1`. This is a global heuristic
    /// rather than a per-node bound: it only flags trees that are well over
    /// twice the minimum height. An empty tree counts as balanced.
    pub fn is_balanced(&self) -> bool {
        match self.height() {
            Some(height) => (height as f64) < 2.0 * ((self.len + 1) as f64).log2() - 1.0,
            None => true,
        }
    }

    /// Rebuilds the tree with the smallest possible height, `floor(lg len)`.
    /// The elements and their order are unchanged.
    ///
    /// Each subtree is rooted at the middle of its sorted elements, so after
    /// this call elements equal to a node may also sit in its left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..15).collect();
    /// assert_eq!(tree.height(), Some(14));
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), Some(3));
    /// assert_eq!(tree.levelorder()[0], &7);
    /// ```
    pub fn rebalance(&mut self) {
        let len = self.len;
        tracing::trace!(len, height = ?self.height(), "rebalancing tree");

        let sorted = into_sorted(self.root.take(), len);
        self.root = build(sorted.len(), &mut sorted.into_iter());

        tracing::trace!(len, height = ?self.height(), "rebalanced tree");
    }
}

/// Consumes every node under `root`, returning the elements in inorder.
fn into_sorted<T>(root: Link<T>, len: usize) -> Vec<T> {
    let mut sorted = Vec::with_capacity(len);
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            return sorted;
        };
        let Node { data, right, .. } = *node;
        sorted.push(data);
        current = right;
    }
}

/// Builds a minimum-height subtree out of the next `len` sorted elements. The
/// middle element is the root, the ones before it go left and the ones after
/// it go right. Recursion depth is `lg len`.
fn build<T>(len: usize, sorted: &mut impl Iterator<Item = T>) -> Link<T> {
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let left = build(mid, sorted);
    let data = sorted.next()?;
    let right = build(len - mid - 1, sorted);
    Some(Box::new(Node { data, left, right }))
}
