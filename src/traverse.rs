//! Walks over a [`Tree`]. Preorder is lazy; the other orders are collected
//! eagerly. Everything here uses an explicit stack or queue so deep trees
//! don't exhaust the call stack.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::linked::{Node, Tree};

/// A lazy preorder (node, left, right) iterator over a [`Tree`], created by
/// [`Tree::iter`]. It borrows the tree, so restarting means asking for a new
/// one.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is walked first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.len -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Iterates over the elements in preorder: each node before its left
    /// subtree, and the left subtree before the right one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1, 4, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            len: self.len,
        }
    }

    /// The elements in ascending order (left, node, right).
    pub fn inorder(&self) -> Vec<&T> {
        let mut sorted = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                return sorted;
            };
            sorted.push(&node.data);
            current = node.right.as_deref();
        }
    }

    /// The elements in postorder (left, right, node).
    pub fn postorder(&self) -> Vec<&T> {
        // A reversed (node, right, left) walk is a postorder walk.
        let mut reversed = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            reversed.push(&node.data);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        reversed.reverse();
        reversed
    }

    /// The elements level by level from the root, left to right within a
    /// level.
    pub fn levelorder(&self) -> Vec<&T> {
        let mut levels = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            levels.push(&node.data);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        levels
    }

    /// Every element `x` with `low <= x <= high`, ascending. An inverted range
    /// is simply empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&3, &7), vec![&3, &4, &5, &7]);
    /// assert!(tree.range_find(&7, &3).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .into_iter()
            .filter(|item| low <= *item && *item <= high)
            .collect()
    }

    /// The smallest element strictly greater than `item`, if any. `item`
    /// doesn't have to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&10), Some(&20));
    /// assert_eq!(tree.successor(&15), Some(&20));
    /// assert_eq!(tree.successor(&30), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder().into_iter().find(|x| *x > item)
    }

    /// The largest element strictly less than `item`, if any. `item` doesn't
    /// have to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&30), Some(&20));
    /// assert_eq!(tree.predecessor(&25), Some(&20));
    /// assert_eq!(tree.predecessor(&10), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder()
            .into_iter()
            .take_while(|x| *x < item)
            .last()
    }
}
