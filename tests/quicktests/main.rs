//! Property tests for the public tree API, run against every [`Strategy`].

use quickcheck::{Arbitrary, Gen};

mod ordered;
mod traversal;

/// A change to make to a tree and to the `BTreeMap` modelling it.
#[derive(Copy, Clone, Debug)]
pub enum Op<K, V> {
    /// Insert the K, V into the data structure
    Insert(K, V),
    /// Remove the K from the data structure
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g), V::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// Turns on log output for a test run with `RUST_LOG` set.
pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}
