//! Search and traversal routines that only depend on the shape of a binary search tree. Both
//! balanced trees implement `BinaryNode` for their nodes and reuse these functions.

use crate::entry::Entry;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};

pub type Tree<N> = Option<Box<N>>;

type BorrowedEntryMut<'a, T, U, N> = (&'a mut Entry<T, U>, Option<&'a mut N>);

/// A node of a binary search tree that owns its entry and both of its subtrees.
pub trait BinaryNode: Sized {
    type Key;
    type Value;

    fn entry(&self) -> &Entry<Self::Key, Self::Value>;

    fn left(&self) -> &Tree<Self>;

    fn right(&self) -> &Tree<Self>;

    /// Splits a node into disjoint mutable borrows of its entry, left subtree, and right subtree.
    fn split_mut(
        &mut self,
    ) -> (&mut Entry<Self::Key, Self::Value>, &mut Tree<Self>, &mut Tree<Self>);

    fn into_parts(self) -> (Entry<Self::Key, Self::Value>, Tree<Self>, Tree<Self>);
}

pub fn get<'a, N, V>(tree: &'a Tree<N>, key: &V) -> Option<&'a Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry().key.borrow()) {
            Ordering::Less => get(node.left(), key),
            Ordering::Greater => get(node.right(), key),
            Ordering::Equal => Some(node.entry()),
        }
    })
}

pub fn get_mut<'a, N, V>(
    tree: &'a mut Tree<N>,
    key: &V,
) -> Option<&'a mut Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        let (entry, left, right) = node.split_mut();
        match key.cmp(entry.key.borrow()) {
            Ordering::Less => get_mut(left, key),
            Ordering::Greater => get_mut(right, key),
            Ordering::Equal => Some(entry),
        }
    })
}

pub fn ceil<'a, N, V>(tree: &'a Tree<N>, key: &V) -> Option<&'a Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry().key.borrow()) {
            Ordering::Greater => ceil(node.right(), key),
            Ordering::Less => {
                match ceil(node.left(), key) {
                    None => Some(node.entry()),
                    res => res,
                }
            },
            Ordering::Equal => Some(node.entry()),
        }
    })
}

pub fn floor<'a, N, V>(tree: &'a Tree<N>, key: &V) -> Option<&'a Entry<N::Key, N::Value>>
where
    N: BinaryNode,
    N::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry().key.borrow()) {
            Ordering::Less => floor(node.left(), key),
            Ordering::Greater => {
                match floor(node.right(), key) {
                    None => Some(node.entry()),
                    res => res,
                }
            },
            Ordering::Equal => Some(node.entry()),
        }
    })
}

pub fn min<N>(tree: &Tree<N>) -> Option<&Entry<N::Key, N::Value>>
where
    N: BinaryNode,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left() {
            curr = left_node;
        }
        curr.entry()
    })
}

pub fn max<N>(tree: &Tree<N>) -> Option<&Entry<N::Key, N::Value>>
where
    N: BinaryNode,
{
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right() {
            curr = right_node;
        }
        curr.entry()
    })
}

/// Returns the number of nodes on the longest path from the root to an empty subtree.
pub fn depth<N>(tree: &Tree<N>) -> usize
where
    N: BinaryNode,
{
    match tree {
        None => 0,
        Some(ref node) => cmp::max(depth(node.left()), depth(node.right())) + 1,
    }
}

/// Returns `true` if an in-order traversal of the tree yields strictly ascending keys.
pub fn is_ordered<N>(tree: &Tree<N>) -> bool
where
    N: BinaryNode,
    N::Key: Ord,
{
    let mut keys = Iter::new(tree).map(|(key, _)| key);
    let mut prev = match keys.next() {
        Some(key) => key,
        None => return true,
    };
    for key in keys {
        if prev >= key {
            return false;
        }
        prev = key;
    }
    true
}

/// An in-order iterator yielding immutable references.
pub struct Iter<'a, N>
where
    N: 'a,
{
    current: &'a Tree<N>,
    stack: Vec<&'a N>,
}

impl<'a, N> Iter<'a, N> {
    pub fn new(tree: &'a Tree<N>) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: BinaryNode + 'a,
{
    type Item = (&'a N::Key, &'a N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            let Entry { ref key, ref value } = node.entry();
            (key, value)
        })
    }
}

/// An in-order iterator yielding mutable references to values.
pub struct IterMut<'a, N>
where
    N: BinaryNode + 'a,
{
    current: Option<&'a mut N>,
    stack: Vec<BorrowedEntryMut<'a, N::Key, N::Value, N>>,
}

impl<'a, N> IterMut<'a, N>
where
    N: BinaryNode + 'a,
{
    pub fn new(tree: &'a mut Tree<N>) -> Self {
        IterMut {
            current: tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<'a, N> Iterator for IterMut<'a, N>
where
    N: BinaryNode + 'a,
{
    type Item = (&'a N::Key, &'a mut N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            let (entry, left, right) = node.split_mut();
            self.current = left.as_mut().map(|node| &mut **node);
            self.stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        self.stack.pop().map(|(entry, right)| {
            self.current = right;
            let Entry {
                ref key,
                ref mut value,
            } = entry;
            (key, value)
        })
    }
}

/// An in-order iterator that consumes the tree and yields owned entries.
pub struct IntoIter<N>
where
    N: BinaryNode,
{
    current: Tree<N>,
    stack: Vec<(Entry<N::Key, N::Value>, Tree<N>)>,
}

impl<N> IntoIter<N>
where
    N: BinaryNode,
{
    pub fn new(tree: Tree<N>) -> Self {
        IntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<N> Iterator for IntoIter<N>
where
    N: BinaryNode,
{
    type Item = (N::Key, N::Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            let (entry, left, right) = (*node).into_parts();
            self.current = left;
            self.stack.push((entry, right));
        }
        self.stack.pop().map(|(entry, right)| {
            self.current = right;
            entry.into_pair()
        })
    }
}
