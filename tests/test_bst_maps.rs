use simplelog::{Config, LevelFilter, TestLogger};

const NUM_OF_OPERATIONS: usize = 100_000;
const NUM_OF_CHECKED_OPERATIONS: usize = 2_000;

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

macro_rules! bst_map_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use balanced_collections::Error;
                use rand::Rng;
                use std::collections::BTreeMap;
                use super::{init_logger, NUM_OF_CHECKED_OPERATIONS, NUM_OF_OPERATIONS};

                #[test]
                fn int_test_map() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut expected = Vec::new();
                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen::<u32>();
                        let val = rng.gen::<u32>();

                        map.insert(key, val);
                        expected.push((key, val));
                    }

                    expected.reverse();
                    expected.sort_by(|l, r| l.0.cmp(&r.0));
                    expected.dedup_by_key(|pair| pair.0);

                    assert_eq!(map.len(), expected.len());
                    assert!(map.is_balanced());
                    assert!(map.is_search_tree());

                    assert_eq!(map.min(), Ok(&expected[0].0));
                    assert_eq!(map.max(), Ok(&expected[expected.len() - 1].0));

                    for entry in &expected {
                        assert!(map.contains_key(&entry.0));
                        assert_eq!(map.get(&entry.0), Some(&entry.1));
                        assert_eq!(map.ceil(&entry.0), Some(&entry.0));
                        assert_eq!(map.floor(&entry.0), Some(&entry.0));
                    }

                    for entry in &mut expected {
                        let val_1 = rng.gen::<u32>();
                        let val_2 = rng.gen::<u32>();

                        let old_entry = map.insert(entry.0, val_1);
                        assert_eq!(old_entry, Some((entry.0, entry.1)));
                        assert_eq!(map.set(&entry.0, val_2), Ok(()));
                        *entry = (entry.0, val_2);
                        assert_eq!(map.get(&entry.0), Some(&val_2));
                    }
                    assert_eq!(map.len(), expected.len());

                    let mut expected_len = expected.len();
                    for entry in expected {
                        let old_entry = map.remove(&entry.0);
                        expected_len -= 1;
                        assert_eq!(old_entry, Some((entry.0, entry.1)));
                        assert_eq!(map.len(), expected_len);
                    }
                    assert!(map.is_empty());
                }

                #[test]
                fn int_test_map_invariants() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut expected = BTreeMap::new();

                    for _ in 0..NUM_OF_CHECKED_OPERATIONS {
                        let key = rng.gen_range(0, 500u32);
                        let val = rng.gen::<u32>();

                        match rng.gen_range(0u32, 10) {
                            0..=4 => {
                                assert_eq!(
                                    map.insert(key, val).map(|pair| pair.1),
                                    expected.insert(key, val),
                                );
                            },
                            5..=7 => {
                                assert_eq!(
                                    map.remove(&key).map(|pair| pair.1),
                                    expected.remove(&key),
                                );
                            },
                            8 => {
                                let min_key = expected.keys().next().cloned();
                                match min_key {
                                    Some(min_key) => {
                                        let val = expected.remove(&min_key);
                                        let expected_pair = val.map(|val| (min_key, val));
                                        assert_eq!(map.remove_min().ok(), expected_pair);
                                    },
                                    None => {
                                        assert_eq!(map.remove_min(), Err(Error::EmptyContainer));
                                    },
                                }
                            },
                            _ => {
                                let max_key = expected.keys().next_back().cloned();
                                match max_key {
                                    Some(max_key) => {
                                        let val = expected.remove(&max_key);
                                        let expected_pair = val.map(|val| (max_key, val));
                                        assert_eq!(map.remove_max().ok(), expected_pair);
                                    },
                                    None => {
                                        assert_eq!(map.remove_max(), Err(Error::EmptyContainer));
                                    },
                                }
                            },
                        }

                        assert_eq!(map.len(), expected.len());
                        assert!(map.is_balanced());
                        assert!(map.is_search_tree());
                    }

                    assert_eq!(
                        map.into_iter().collect::<Vec<(u32, u32)>>(),
                        expected.into_iter().collect::<Vec<(u32, u32)>>(),
                    );
                }

                #[test]
                fn int_test_map_ascending_depth() {
                    init_logger();
                    let mut map = $type_name::new();
                    for key in 1..=NUM_OF_CHECKED_OPERATIONS {
                        map.insert(key, key);
                    }

                    let bound = 2.0 * (NUM_OF_CHECKED_OPERATIONS as f64).log2();
                    assert!((map.height() as f64) <= bound);
                    assert!(map.is_balanced());

                    for key in 1..=NUM_OF_CHECKED_OPERATIONS / 2 {
                        assert_eq!(map.remove(&key), Some((key, key)));
                    }
                    assert!((map.height() as f64) <= bound);
                    assert!(map.is_balanced());
                }

                #[test]
                fn int_test_map_duplicates() {
                    init_logger();
                    let mut map = $type_name::new();
                    for key in &[123u32, 12, 423, 423, 423, 123, 2345, 2344, 1] {
                        map.insert(*key, 1);
                    }

                    assert_eq!(map.len(), 6);
                    assert!(map.is_balanced());
                    assert_eq!(
                        map.iter().map(|(key, _)| *key).collect::<Vec<u32>>(),
                        vec![1, 12, 123, 423, 2344, 2345],
                    );
                }

                #[test]
                fn int_test_map_set_missing() {
                    init_logger();
                    let mut map: $type_name<u32, u32> = $type_name::new();
                    map.insert(1, 1);

                    assert_eq!(map.set(&2, 2), Err(Error::KeyNotFound));
                    assert_eq!(map.get(&2), None);
                    assert!(!map.contains_key(&2));
                    assert_eq!(map.len(), 1);
                }
            }
        )*
    }
}

bst_map_tests!(avl_tree: AvlMap, red_black_tree: RedBlackMap);
