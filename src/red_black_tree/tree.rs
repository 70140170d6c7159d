use crate::bst;
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = bst::Tree<Node<T, U>>;

/// An empty tree reads as black.
pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.is_red(),
    }
}

pub fn has_red_left_child<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => is_red(&node.left),
    }
}

// A black child whose left child is also black is a 2-node; a red link has to be pushed down into
// it before descending so that the removal does not leave a lone black leaf behind.
fn is_two_node<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => !node.is_red() && !is_red(&node.left),
    }
}

/// Prepares the root for a removal by coloring it red if both of its children are black.
pub fn fix_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn paint_root_black<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => {
            match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node),
                Ordering::Greater => insert(&mut node.right, new_node),
                Ordering::Equal => return Some(mem::replace(&mut node.entry, new_node.entry)),
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    if let Some(ref mut node) = tree {
        if is_red(&node.right) && !is_red(&node.left) {
            trace!("rotating right-leaning red link to the left");
            node.rotate_left();
        }

        if is_red(&node.left) && has_red_left_child(&node.left) {
            trace!("rotating consecutive left red links to the right");
            node.rotate_right();
        }

        if is_red(&node.left) && is_red(&node.right) {
            node.flip_colors();
        }
    }

    ret
}

pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Box<Node<T, U>>> {
    let node = tree.as_mut()?;
    if node.left.is_none() {
        let mut node = tree.take()?;
        *tree = node.right.take();
        return Some(node);
    }

    if is_two_node(&node.left) {
        node.shift_left();
    }

    let ret = remove_min(&mut node.left);
    node.balance();
    ret
}

pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Option<Box<Node<T, U>>> {
    let node = tree.as_mut()?;
    if is_red(&node.left) {
        node.rotate_right();
    }

    if node.right.is_none() {
        let mut node = tree.take()?;
        *tree = node.left.take();
        return Some(node);
    }

    if is_two_node(&node.right) {
        node.shift_right();
    }

    let ret = remove_max(&mut node.right);
    node.balance();
    ret
}

fn combine_subtrees<T, U>(
    left_tree: Tree<T, U>,
    mut right_tree: Tree<T, U>,
    color: Color,
) -> Tree<T, U> {
    match remove_min(&mut right_tree) {
        Some(mut new_root) => {
            new_root.left = left_tree;
            new_root.right = right_tree;
            new_root.color = color;
            Some(new_root)
        },
        None => left_tree,
    }
}

// precondition: `key` exists in the tree
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = tree.take()?;
    let ret = if key < node.entry.key.borrow() {
        if is_two_node(&node.left) {
            node.shift_left();
        }

        let ret = remove(&mut node.left, key);
        *tree = Some(node);
        ret
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if key == node.entry.key.borrow() && node.right.is_none() {
            *tree = node.left.take();
            return Some(node.entry);
        }

        if is_two_node(&node.right) {
            node.shift_right();
        }

        if key == node.entry.key.borrow() {
            let Node {
                entry,
                left,
                right,
                color,
            } = *node;
            *tree = combine_subtrees(left, right, color);
            Some(entry)
        } else {
            let ret = remove(&mut node.right, key);
            *tree = Some(node);
            ret
        }
    };

    if let Some(ref mut node) = tree {
        node.balance();
    }

    ret
}

/// Returns `true` if the root is black, every red link leans left, no red node has a red child,
/// and every path from the root to an empty subtree has the same number of black nodes.
pub fn is_balanced<T, U>(tree: &Tree<T, U>) -> bool {
    fn black_height<T, U>(tree: &Tree<T, U>) -> Option<usize> {
        match tree {
            None => Some(0),
            Some(ref node) => {
                if is_red(&node.right) || (node.is_red() && is_red(&node.left)) {
                    return None;
                }
                let left = black_height(&node.left)?;
                let right = black_height(&node.right)?;
                if left != right {
                    return None;
                }
                match node.color {
                    Color::Red => Some(left),
                    Color::Black => Some(left + 1),
                }
            },
        }
    }

    !is_red(tree) && black_height(tree).is_some()
}
