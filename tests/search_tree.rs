use std::collections::{BTreeMap, HashSet};

use linked_bst::search_tree::{DefaultOrderedMapTree, VerifiedOrderedMapTree};
use rand::{seq::SliceRandom, thread_rng, Rng};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn ordered_map_tree_works() {
    init();
    let mut tree = DefaultOrderedMapTree::<i32, i32>::new();

    let mut keys: Vec<i32> = (0..1000).collect();
    keys.shuffle(&mut thread_rng());
    for &i in keys.iter() {
        tree.set(i, i + 1);
    }

    for i in 0..1000 {
        assert_eq!(tree.get(&i), Some(&(i + 1)));
    }

    assert_eq!(tree.get(&12), Some(&13));
    assert_eq!(tree.remove(&12), Some(13));
    assert!(tree.get(&12).is_none());
    tree.set(12, 24);
    assert_eq!(tree.get(&12), Some(&24));

    for i in 0..1000 {
        if i == 12 {
            assert_eq!(tree.get(&i), Some(&24));
        } else {
            assert_eq!(tree.get(&i), Some(&(i + 1)));
        }
    }
    assert_eq!(tree.len(), 1000);
    assert!(tree.audit().is_valid());
}

#[test]
fn works_on_owned_keys() {
    let mut tree = DefaultOrderedMapTree::<String, String>::new();
    assert_eq!(tree.get(&"test".into()), None);
    tree.set("test".into(), "test2".into());
    assert_eq!(tree.get(&"test".into()), Some(&"test2".to_string()));
    for i in 0..100 {
        tree.set(i.to_string(), (i + 1).to_string());
    }
    for i in 0..100 {
        assert_eq!(tree.get(&i.to_string()), Some(&(i + 1).to_string()));
    }

    // string order, not numeric order
    let first: Vec<_> = tree.keys().take(3).cloned().collect();
    assert_eq!(first, vec!["0", "1", "10"]);
}

#[test]
fn random_op_test() {
    init();
    let mut tree = DefaultOrderedMapTree::<i32, i32>::new();

    let n = 20000;

    let mut rng = thread_rng();

    let mut keys = HashSet::new();
    while keys.len() < n {
        keys.insert(rng.gen::<u16>() as i32);
    }
    let mut keys: Vec<_> = keys.into_iter().collect();

    for &key in keys.iter() {
        assert_eq!(tree.add(key, key + 1), Ok(()));
    }

    for &key in keys.iter() {
        assert_eq!(tree.get(&key), Some(&(key + 1)));
    }

    keys.shuffle(&mut rng);
    let removed_keys = keys.split_off(n / 2);
    for &key in removed_keys.iter() {
        assert_eq!(tree.remove(&key), Some(key + 1));
    }

    for &key in removed_keys.iter() {
        assert!(tree.get(&key).is_none());
    }

    for &key in keys.iter() {
        assert_eq!(tree.get(&key), Some(&(key + 1)));
    }

    assert_eq!(tree.len(), n / 2);
    assert!(tree.audit().is_valid());
}

#[test]
fn matches_std_btree_map() {
    init();
    let mut tree = VerifiedOrderedMapTree::<u8, u32>::new();
    let mut model = BTreeMap::new();
    let mut rng = thread_rng();

    for step in 0..5000u32 {
        let key = rng.gen::<u8>();
        match rng.gen_range(0..4) {
            0 | 1 => assert_eq!(tree.set(key, step), model.insert(key, step)),
            2 => assert_eq!(tree.remove(&key), model.remove(&key)),
            _ => {
                let expected = !model.contains_key(&key);
                assert_eq!(tree.add(key, step).is_ok(), expected);
                model.entry(key).or_insert(step);
            }
        }
        assert_eq!(tree.len(), model.len());
    }

    assert!(tree.iter().eq(model.iter()));
    assert!(tree.iter().rev().eq(model.iter().rev()));
    assert!(tree.check_bst_property());
}

#[test]
fn level_order_round_trip() {
    let tree = DefaultOrderedMapTree::from_level_order(
        vec![8, 4, 12, 2, 6, 10, 14, 1, 3],
        vec!['h', 'd', 'l', 'b', 'f', 'j', 'n', 'a', 'c'],
    )
    .unwrap();

    let order: Vec<i32> = tree.level_order().map(|(k, _)| *k).collect();
    assert_eq!(order, vec![8, 4, 12, 2, 6, 10, 14, 1, 3]);
    assert_eq!(tree.height(), 4);

    let rebuilt = DefaultOrderedMapTree::from_level_order(
        tree.level_order().map(|(k, _)| *k).collect(),
        tree.level_order().map(|(_, v)| *v).collect(),
    )
    .unwrap();
    assert!(rebuilt.iter().eq(tree.iter()));
}
