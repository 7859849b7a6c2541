use std::collections::{BTreeMap, HashSet};

use linked_bst::search_tree::DefaultOrderedMapTree;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Mutations applied to a tree and a reference map side by side.
#[derive(Copy, Clone, Debug)]
enum Op<K, V> {
    Set(K, V),
    Add(K, V),
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).copied().unwrap_or(0) {
            0 => Op::Set(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Add(K::arbitrary(g), V::arbitrary(g)),
            _ => Op::Remove(K::arbitrary(g)),
        }
    }
}

fn apply(ops: &[Op<i8, i8>]) -> (DefaultOrderedMapTree<i8, i8>, BTreeMap<i8, i8>) {
    let mut tree = DefaultOrderedMapTree::new();
    let mut map = BTreeMap::new();
    for op in ops {
        match *op {
            Op::Set(k, v) => {
                tree.set(k, v);
                map.insert(k, v);
            }
            Op::Add(k, v) => {
                if tree.add(k, v).is_ok() {
                    map.insert(k, v);
                }
            }
            Op::Remove(k) => {
                tree.remove(&k);
                map.remove(&k);
            }
        }
    }
    (tree, map)
}

#[quickcheck]
fn structure_survives_any_ops(ops: Vec<Op<i8, i8>>) -> bool {
    let (tree, _) = apply(&ops);
    tree.audit().is_valid() && tree.check_bst_property()
}

#[quickcheck]
fn agrees_with_btree_map(ops: Vec<Op<i8, i8>>) -> bool {
    let (tree, map) = apply(&ops);
    tree.len() == map.len()
        && tree.iter().eq(map.iter())
        && map.keys().all(|k| tree.get(k) == map.get(k))
}

#[quickcheck]
fn set_then_get(xs: Vec<(i8, i8)>) -> bool {
    let mut tree = DefaultOrderedMapTree::new();
    let mut last = BTreeMap::new();
    for &(k, v) in &xs {
        tree.set(k, v);
        last.insert(k, v);
    }
    last.iter().all(|(k, v)| tree.get(k) == Some(v))
}

#[quickcheck]
fn in_order_is_strictly_increasing(xs: Vec<i8>) -> bool {
    let tree: DefaultOrderedMapTree<i8, ()> = xs.iter().map(|&x| (x, ())).collect();
    let keys: Vec<i8> = tree.keys().copied().collect();
    keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn removing_absent_keys_changes_nothing(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree: DefaultOrderedMapTree<i8, i8> = xs.iter().map(|&x| (x, x)).collect();
    let before: Vec<_> = tree.pre_order().map(|(k, v)| (*k, *v)).collect();

    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let all_absent = nots.difference(&added).all(|x| tree.remove(x).is_none());

    let after: Vec<_> = tree.pre_order().map(|(k, v)| (*k, *v)).collect();
    all_absent && before == after
}

#[quickcheck]
fn removal_keeps_neighbours(xs: Vec<i8>, victim: i8) -> bool {
    let mut tree: DefaultOrderedMapTree<i8, ()> = xs.iter().map(|&x| (x, ())).collect();
    let expected: Vec<i8> = tree.keys().copied().filter(|&k| k != victim).collect();
    let had = tree.contains(&victim);

    let removed = tree.remove(&victim).is_some();
    let keys: Vec<i8> = tree.keys().copied().collect();

    removed == had && keys == expected && tree.len() == expected.len()
}
