//! A link-based, unbalanced Binary Search Tree (BST) over totally ordered
//! elements, with explicit on-demand rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element and
//! will sometimes have child `Node`s. The invariants kept by this tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have an element
//!    less than its own element.
//! 2. For every `Node`, all the `Node`s in its right subtree have an element
//!    greater than or equal to its own element. Duplicates are allowed and are
//!    always inserted to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the
//! root to a leaf. This tree never rotates on its own, so inserting sorted
//! input yields a chain with `height == len - 1`. Calling
//! [`Tree::rebalance`] rebuilds it into a tree of height `floor(lg N)`.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), Some(6));
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), Some(2));
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.successor(&4), Some(&5));
//! assert_eq!(tree.range_find(&2, &4), vec![&2, &3, &4]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod error;
mod linked;
mod traverse;

#[cfg(test)]
mod test;

pub use error::TreeError;
pub use linked::Tree;
pub use traverse::Iter;
