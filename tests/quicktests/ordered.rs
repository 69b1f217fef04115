use std::collections::{BTreeMap, BTreeSet};

use ordtree::{Entry, OrderedTree, Strategy};
use quickcheck_macros::quickcheck;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a map, checking that they report the same
/// displaced and removed payloads.
fn do_ops(
    ops: &[Op<i8, i8>],
    tree: &mut dyn OrderedTree<Entry<i8, i8>>,
    map: &mut BTreeMap<i8, i8>,
) {
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                let old = tree.add(Entry::new(k, v)).map(|e| *e.value());
                assert_eq!(old, map.insert(k, v));
            }
            Op::Remove(k) => {
                let removed = tree.remove(&Entry::lookup(k)).map(|e| *e.value());
                assert_eq!(removed, map.remove(&k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    init_logging();
    Strategy::ALL.iter().all(|strategy| {
        let mut tree = strategy.build();
        let mut map = BTreeMap::new();

        do_ops(&ops, &mut *tree, &mut map);
        tree.size() == map.len()
            && map
                .iter()
                .all(|(k, v)| tree.get(&Entry::lookup(*k)).map(Entry::value) == Some(v))
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    Strategy::ALL.iter().all(|strategy| {
        let mut tree = strategy.build();
        for x in &xs {
            tree.add(*x);
        }

        xs.iter().all(|x| tree.get(x) == Some(x))
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let added: BTreeSet<_> = xs.iter().copied().collect();
    Strategy::ALL.iter().all(|strategy| {
        let mut tree = strategy.build();
        for x in &xs {
            tree.add(*x);
        }

        nots.iter()
            .filter(|x| !added.contains(*x))
            .all(|x| !tree.contains(x))
    })
}

#[quickcheck]
fn removed_values_are_gone(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    Strategy::ALL.iter().all(|strategy| {
        let mut tree = strategy.build();
        let mut set = BTreeSet::new();
        for x in &xs {
            tree.add(*x);
            set.insert(*x);
        }
        for r in &removes {
            assert_eq!(tree.remove(r).is_some(), set.remove(r));
        }

        tree.size() == set.len() && removes.iter().all(|r| !tree.contains(r))
    })
}

#[quickcheck]
fn overwriting_is_idempotent(xs: Vec<(i8, i8)>) -> bool {
    Strategy::ALL.iter().all(|strategy| {
        let mut tree = strategy.build();
        for (k, v) in &xs {
            tree.add(Entry::new(*k, *v));
        }
        let size = tree.size();
        let height = tree.height();

        // Re-adding what is already stored changes nothing.
        let stored: Vec<_> = tree.iter().map(|e| (*e.key(), *e.value())).collect();
        for (k, v) in &stored {
            assert_eq!(tree.add(Entry::new(*k, *v)).map(|e| *e.value()), Some(*v));
        }

        tree.size() == size
            && tree.height() == height
            && tree.iter().map(|e| (*e.key(), *e.value())).eq(stored)
    })
}

#[quickcheck]
fn strategies_agree(ops: Vec<Op<i8, i8>>) -> bool {
    let contents: Vec<Vec<(i8, i8)>> = Strategy::ALL
        .iter()
        .map(|strategy| {
            let mut tree = strategy.build();
            do_ops(&ops, &mut *tree, &mut BTreeMap::new());
            tree.iter().map(|e| (*e.key(), *e.value())).collect()
        })
        .collect();

    contents.windows(2).all(|w| w[0] == w[1])
}
