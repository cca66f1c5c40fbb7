//! An owned, link-based BST. Every node is exclusively owned by its parent's
//! child link (or by the [`Tree`] for the root) so there are no parent
//! pointers and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Duplicates are kept, each `add` stores one more element.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing an element returns it. Removing something that isn't there is
//! // an error rather than a no-op.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::TreeError;

/// An owned child link. `None` marks the empty slot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree of totally ordered elements. Elements less
/// than a node live in its left subtree and elements greater than or equal to
/// it live in its right subtree.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unhook children before each node is dropped so a long chain doesn't
        // recurse once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of elements stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing tree");
        // Swapping in a fresh tree runs the iterative `Drop` on the old one.
        drop(mem::take(self));
    }

    /// Potentially finds the stored element equal to `item`. If no node holds
    /// an equal element, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3), Some(&3));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match item.cmp(&node.data) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.data),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether an element equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Adds `item` as a new leaf. Items greater than or equal to a node go to
    /// its right, so equal items keep their insertion order in an inorder
    /// walk. The tree is never rebalanced here.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.inorder(), vec![&1, &2, &2]);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new_boxed(item));
        self.len += 1;
    }

    /// Removes one element equal to `item` and returns it. When the tree holds
    /// duplicates only the first one found on the search path is removed.
    ///
    /// A node with two children keeps its place in the tree: it takes over the
    /// largest element of its left subtree and that element's node is unlinked
    /// instead.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no element equals `item`. The tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(TreeError::NotFound));
    /// assert_eq!(tree.inorder(), vec![&1, &3, &4, &8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            // Decide with a shared borrow first so that stopping on the target
            // leaves `link` pointing at it.
            let go_left = match link.as_deref() {
                None => {
                    tracing::trace!(len = self.len, "remove missed");
                    return Err(TreeError::NotFound);
                }
                Some(node) if node.data == *item => break,
                Some(node) => *item < node.data,
            };
            link = match link {
                Some(node) => {
                    if go_left {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                }
                None => unreachable!("link was checked to be occupied"),
            };
        }

        let mut target = link.take().expect("search stopped on an occupied link");
        let removed = if target.left.is_some() && target.right.is_some() {
            let max = take_max(&mut target.left).expect("target has a left child");
            let removed = mem::replace(&mut target.data, max);
            *link = Some(target);
            removed
        } else {
            let Node { data, left, right } = *target;
            *link = left.or(right);
            data
        };

        self.len -= 1;
        Ok(removed)
    }

    /// Swaps `new_item` in for the stored element equal to `item` and returns
    /// the old element, or `None` if there is no such element. The node keeps
    /// its place, so `new_item` has to sort exactly where `item` does (e.g. a
    /// record with the same key).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&1, 1), Some(1));
    /// assert_eq!(tree.replace(&7, 7), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match item.cmp(&node.data) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal => return Some(mem::replace(&mut node.data, new_item)),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }
}

/// Unlinks the rightmost node under `link`, reattaching its left child in its
/// place, and returns its element. Returns `None` only for an empty link.
fn take_max<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().is_some_and(|node| node.right.is_some()) {
        if let Some(node) = link {
            link = &mut node.right;
        }
    }

    let max = link.take()?;
    let Node { data, left, .. } = *max;
    *link = left;
    Some(data)
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    /// Builds a tree by adding every item in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    /// Copies node by node, so the clone has exactly the same shape even where
    /// equal elements sit in a left subtree.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut stack: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
        if let Some(source) = self.root.as_deref() {
            stack.push((source, &mut root));
        }
        while let Some((source, slot)) = stack.pop() {
            let copy = slot.insert(Node::new_boxed(source.data.clone()));
            let Node { left, right, .. } = &mut **copy;
            if let Some(source_left) = source.left.as_deref() {
                stack.push((source_left, left));
            }
            if let Some(source_right) = source.right.as_deref() {
                stack.push((source_right, right));
            }
        }
        drop(stack);

        Self {
            root,
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    /// Draws the tree rotated 90 degrees counter-clockwise: the root is in the
    /// left column, right subtrees are above their parent and left subtrees
    /// below. Each level of depth adds one `"| "` of indentation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref().map(|node| (node, 0));
        loop {
            while let Some((node, depth)) = current {
                stack.push((node, depth));
                current = node.right.as_deref().map(|right| (right, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(depth), node.data)?;
            current = node.left.as_deref().map(|left| (left, depth + 1));
        }
    }
}
