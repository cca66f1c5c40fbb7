//! Property tests run against the public API only.

mod ordered_tree;
