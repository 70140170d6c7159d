use crate::avl_tree::node::Node;
use crate::bst;
use crate::entry::Entry;
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = bst::Tree<Node<T, U>>;

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

//        y                x
//       / \              / \
//      x   t4           z   y
//     / \       ->     / \ / \
//    z   t3          t1 t2 t3 t4
fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

// Refreshes the height of the root of `tree` and restores the height invariant with at most two
// rotations. Both subtrees must already be balanced.
fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let balance_factor = node.balance_factor();
    if balance_factor > 1 {
        trace!("rebalancing left-heavy node with balance factor {}", balance_factor);
        if let Some(child) = node.left.take() {
            if child.balance_factor() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if balance_factor < -1 {
        trace!("rebalancing right-heavy node with balance factor {}", balance_factor);
        if let Some(child) = node.right.take() {
            if child.balance_factor() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Option<Box<Node<T, U>>> {
    let node = tree.as_mut()?;
    if node.left.is_some() {
        let ret = remove_min(&mut node.left);
        balance(tree);
        return ret;
    }

    let mut node = tree.take()?;
    *tree = node.right.take();
    Some(node)
}

pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Option<Box<Node<T, U>>> {
    let node = tree.as_mut()?;
    if node.right.is_some() {
        let ret = remove_max(&mut node.right);
        balance(tree);
        return ret;
    }

    let mut node = tree.take()?;
    *tree = node.left.take();
    Some(node)
}

// Replaces a removed node that had two children with the in-order successor.
fn combine_subtrees<T, U>(left_tree: Tree<T, U>, mut right_tree: Tree<T, U>) -> Tree<T, U> {
    let mut new_root = remove_min(&mut right_tree)?;
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
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

    balance(tree);
    ret
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node {
                    entry, left, right, ..
                } = *node;
                *tree = match (left, right) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, right) => combine_subtrees(left, right),
                };
                Some(entry)
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

/// Returns `true` if every node stores its exact height and has a balance factor of at most one
/// in absolute value.
pub fn is_balanced<T, U>(tree: &Tree<T, U>) -> bool {
    fn checked_height<T, U>(tree: &Tree<T, U>) -> Option<usize> {
        match tree {
            None => Some(0),
            Some(ref node) => {
                let left = checked_height(&node.left)?;
                let right = checked_height(&node.right)?;
                let expected = left.max(right) + 1;
                if left.max(right) - left.min(right) > 1 || node.height != expected {
                    return None;
                }
                Some(expected)
            },
        }
    }

    checked_height(tree).is_some()
}

#[cfg(test)]
mod tests {
    use super::{height, insert, is_balanced, remove, remove_max, remove_min, Tree};
    use crate::avl_tree::node::Node;
    use crate::bst;

    fn build(keys: &[u32]) -> Tree<u32, u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, Node::new(*key, *key));
        }
        tree
    }

    fn keys(tree: &Tree<u32, u32>) -> Vec<u32> {
        bst::Iter::new(tree).map(|(key, _)| *key).collect()
    }

    #[test]
    fn test_insert_ascending() {
        let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(height(&tree), 3);
        assert!(is_balanced(&tree));
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(4));
    }

    #[test]
    fn test_left_right_case() {
        let tree = build(&[3, 1, 2]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.entry.key, 2);
        assert_eq!(root.left.as_ref().map(|node| node.entry.key), Some(1));
        assert_eq!(root.right.as_ref().map(|node| node.entry.key), Some(3));
        assert_eq!(root.height, 2);
    }

    #[test]
    fn test_right_left_case() {
        let tree = build(&[1, 3, 2]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.entry.key, 2);
        assert_eq!(root.left.as_ref().map(|node| node.entry.key), Some(1));
        assert_eq!(root.right.as_ref().map(|node| node.entry.key), Some(3));
    }

    #[test]
    fn test_insert_replace_keeps_shape() {
        let mut tree = build(&[2, 1, 3]);
        let old = insert(&mut tree, Node::new(1, 10));
        assert_eq!(old.map(|entry| entry.value), Some(1));
        assert_eq!(height(&tree), 2);
        assert_eq!(bst::get(&tree, &1).map(|entry| entry.value), Some(10));
    }

    #[test]
    fn test_remove_rebalances() {
        let mut tree = build(&[5, 3, 8, 2, 4, 7, 9, 1]);
        assert_eq!(remove(&mut tree, &7).map(|entry| entry.key), Some(7));
        assert_eq!(remove(&mut tree, &9).map(|entry| entry.key), Some(9));
        assert!(is_balanced(&tree));
        assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5, 8]);
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(remove(&mut tree, &4).map(|entry| entry.key), Some(4));
        assert_eq!(tree.as_ref().map(|node| node.entry.key), Some(5));
        assert!(is_balanced(&tree));
        assert_eq!(keys(&tree), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert!(remove(&mut tree, &4).is_none());
        assert_eq!(keys(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_min_max() {
        let mut tree = build(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(remove_min(&mut tree).map(|node| node.entry.key), Some(1));
        assert_eq!(remove_max(&mut tree).map(|node| node.entry.key), Some(10));
        assert!(is_balanced(&tree));
        assert_eq!(keys(&tree), vec![2, 3, 4, 5, 6, 7, 8, 9]);

        let mut empty: Tree<u32, u32> = None;
        assert!(remove_min(&mut empty).is_none());
        assert!(remove_max(&mut empty).is_none());
    }

    #[test]
    fn test_is_balanced_detects_stale_height() {
        let mut tree = build(&[2, 1, 3]);
        if let Some(ref mut node) = tree {
            node.height = 5;
        }
        assert!(!is_balanced(&tree));
    }
}
