use ordtree::{AvlTree, BinarySearchTree, ExternalIterator, OrderedTree, Strategy, TwoThreeTree};
use quickcheck_macros::quickcheck;

use crate::init_logging;

fn is_sorted(values: &[i16]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn inorder_is_strictly_increasing(xs: Vec<i16>) -> bool {
    init_logging();
    Strategy::ALL.iter().all(|strategy| {
        let mut tree = strategy.build();
        for x in &xs {
            tree.add(*x);
        }

        let mut visited = Vec::new();
        tree.visit_inorder(&mut |x| visited.push(*x));
        is_sorted(&visited) && tree.iter().copied().eq(visited)
    })
}

#[quickcheck]
fn binary_iterators_match_visitors(xs: Vec<i16>) -> bool {
    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for x in &xs {
        bst.add(*x);
        avl.add(*x);
    }

    [&*bst, &*avl].iter().all(|tree| {
        let mut pre = Vec::new();
        tree.visit_preorder(|x| pre.push(*x));
        let mut ino = Vec::new();
        tree.visit_inorder(|x| ino.push(*x));
        let mut post = Vec::new();
        tree.visit_postorder(|x| post.push(*x));

        tree.preorder_iter().copied().eq(pre)
            && tree.inorder_iter().copied().eq(ino)
            && tree.postorder_iter().copied().eq(post)
    })
}

#[quickcheck]
fn two_three_traversals_cover_every_value(xs: Vec<i16>) -> bool {
    let mut tree = TwoThreeTree::new();
    for x in &xs {
        tree.add(*x);
    }

    let mut pre = Vec::new();
    tree.visit_preorder(|x| pre.push(*x));
    let mut post = Vec::new();
    tree.visit_postorder(|x| post.push(*x));
    pre.sort_unstable();
    post.sort_unstable();

    let ino: Vec<_> = tree.iter().copied().collect();
    pre == ino && post == ino
}

#[quickcheck]
fn reset_restarts_iteration(xs: Vec<i16>, skip: usize) -> bool {
    let mut tree = TwoThreeTree::new();
    let mut avl = AvlTree::new();
    for x in &xs {
        tree.add(*x);
        avl.add(*x);
    }
    let expected: Vec<_> = tree.iter().copied().collect();

    let mut iter = tree.iter();
    iter.by_ref().take(skip % (xs.len() + 1)).for_each(drop);
    iter.reset();
    let two_three_ok = iter.by_ref().copied().eq(expected.iter().copied()) && iter.is_done();

    let mut iter = avl.postorder_iter();
    iter.by_ref().take(skip % (xs.len() + 1)).for_each(drop);
    iter.reset();
    let mut post = Vec::new();
    avl.visit_postorder(|x| post.push(*x));

    two_three_ok && iter.copied().eq(post)
}
