use crate::bst::BinaryNode;
use crate::entry::Entry;
use crate::red_black_tree::tree;
use log::trace;
use std::mem;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn flip_colors(&mut self) {
        trace!("flipping colors of a node and its children");
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    // The promoted child takes over this node's position and color; the demoted node turns red.
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    /// Restores the left-leaning invariants of this node on the way up from a removal.
    pub fn balance(&mut self) {
        if tree::is_red(&self.right) {
            self.rotate_left();
        }

        if tree::is_red(&self.left) && tree::has_red_left_child(&self.left) {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }

    // Borrows from the right sibling (or merges with it) so that the left child, or one of its
    // children, is red before descending left.
    pub fn shift_left(&mut self) {
        self.flip_colors();
        if let Some(mut child) = self.right.take() {
            if tree::is_red(&child.left) {
                child.rotate_right();
                self.right = Some(child);
                self.rotate_left();
                self.flip_colors();
            } else {
                self.right = Some(child);
            }
        }
    }

    // Mirror of `shift_left` for descending right.
    pub fn shift_right(&mut self) {
        self.flip_colors();
        if tree::has_red_left_child(&self.left) {
            self.rotate_right();
            self.flip_colors();
        }
    }
}

impl<T, U> BinaryNode for Node<T, U> {
    type Key = T;
    type Value = U;

    fn entry(&self) -> &Entry<T, U> {
        &self.entry
    }

    fn left(&self) -> &tree::Tree<T, U> {
        &self.left
    }

    fn right(&self) -> &tree::Tree<T, U> {
        &self.right
    }

    fn split_mut(&mut self) -> (&mut Entry<T, U>, &mut tree::Tree<T, U>, &mut tree::Tree<T, U>) {
        let Node {
            ref mut entry,
            ref mut left,
            ref mut right,
            ..
        } = self;
        (entry, left, right)
    }

    fn into_parts(self) -> (Entry<T, U>, tree::Tree<T, U>, tree::Tree<T, U>) {
        let Node {
            entry, left, right, ..
        } = self;
        (entry, left, right)
    }
}
