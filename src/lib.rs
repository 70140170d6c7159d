//! Ordered maps and sets backed by self-balancing binary search trees.
//!
//! Two balancing strategies share the same tree shape and public contract:
//!
//! - [`avl_tree`] keeps the heights of sibling subtrees within one of each other.
//! - [`red_black_tree`] keeps a left-leaning red black coloring that bounds the longest path.
//!
//! Both maps implement [`OrderedMap`], so callers can be written against either.

mod bst;
mod entry;
mod error;
mod ordered_map;
pub mod avl_tree;
pub mod red_black_tree;

pub use crate::error::{Error, Result};
pub use crate::ordered_map::OrderedMap;
