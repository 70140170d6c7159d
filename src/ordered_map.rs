use crate::error::Result;

/// The contract shared by every ordered map in this crate, regardless of how the underlying
/// tree is balanced.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlMap;
/// use balanced_collections::red_black_tree::RedBlackMap;
/// use balanced_collections::OrderedMap;
///
/// fn count_words<M: OrderedMap<&'static str, u32>>(map: &mut M, words: &[&'static str]) {
///     for word in words {
///         let count = map.get(word).map_or(1, |count| count + 1);
///         map.insert(*word, count);
///     }
/// }
///
/// let words = ["pride", "and", "prejudice", "and"];
///
/// let mut avl_map = AvlMap::new();
/// count_words(&mut avl_map, &words);
/// assert_eq!(avl_map.get(&"and"), Some(&2));
///
/// let mut red_black_map = RedBlackMap::new();
/// count_words(&mut red_black_map, &words);
/// assert_eq!(red_black_map.len(), 3);
/// ```
pub trait OrderedMap<T, U>
where
    T: Ord,
{
    /// Inserts a key-value pair, returning the replaced pair if the key was already present.
    fn insert(&mut self, key: T, value: U) -> Option<(T, U)>;

    /// Removes a key, returning its key-value pair if it was present.
    fn remove(&mut self, key: &T) -> Option<(T, U)>;

    fn get(&self, key: &T) -> Option<&U>;

    /// Replaces the value of an existing key. Fails with `Error::KeyNotFound` if the key is
    /// absent.
    fn set(&mut self, key: &T, value: U) -> Result<()>;

    fn contains_key(&self, key: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
