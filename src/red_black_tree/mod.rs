//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! The tree is left-leaning: a red node is always the left child of a black node, which makes the
//! tree an isometry of a 2-3 tree.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapIterMut};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
