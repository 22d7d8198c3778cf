use search_tree::{BinarySearchTree, Error};

use std::collections::BTreeSet;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a `BTreeSet`, checking after every step that
/// the two agree. This way we can ensure that after a random smattering of inserts and removes
/// we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => {
                let expected = if set.insert(x.clone()) {
                    Ok(())
                } else {
                    Err(Error::DuplicateValue)
                };
                tree.insert(x.clone()) == expected
            }
            Op::Remove(x) => {
                let expected = set.take(x).ok_or(Error::ValueNotFound);
                tree.remove(x) == expected
            }
            Op::Contains(x) => tree.contains(x) == set.contains(x),
            Op::Iter => tree.iter().eq(set.iter()),
        };
        if !agrees || tree.count() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let values: Vec<_> = tree.iter().collect();

    values.windows(2).all(|pair| pair[0] < pair[1]) && values.len() == tree.count()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_then_remove_restores(xs: Vec<i16>, x: i16) -> bool {
    let mut tree: BinarySearchTree<_> = xs.into_iter().filter(|v| *v != x).collect();
    let before = tree.to_array();
    let count = tree.count();

    tree.insert(x).is_ok()
        && tree.count() == count + 1
        && tree.remove(&x) == Ok(x)
        && !tree.contains(&x)
        && tree.count() == count
        && tree.to_array() == before
}

#[quickcheck]
fn failed_operations_leave_tree_unchanged(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().filter(|v| *v != missing).collect();
    let before = tree.clone();

    let duplicates_rejected = xs
        .iter()
        .filter(|v| **v != missing)
        .all(|v| tree.insert(*v) == Err(Error::DuplicateValue));
    let missing_rejected = tree.remove(&missing) == Err(Error::ValueNotFound);

    duplicates_rejected && missing_rejected && tree == before
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let mut expected_count = tree.count();
    for x in &removes {
        if tree.remove(x).is_ok() {
            expected_count -= 1;
        }
    }

    let still_present: BTreeSet<_> = xs.iter().filter(|x| !removes.contains(x)).collect();

    removes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.count() == expected_count
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let sorted: Vec<_> = tree.iter().copied().collect();

    let mut orders = [Vec::new(), Vec::new(), Vec::new()];
    tree.traversal_in_order(|x| orders[0].push(*x));
    tree.traversal_pre_order(|x| orders[1].push(*x));
    tree.traversal_post_order(|x| orders[2].push(*x));
    let mut levels = tree.to_array();

    let in_order_sorted = orders[0] == sorted;
    for order in orders.iter_mut() {
        order.sort_unstable();
    }
    levels.sort_unstable();

    in_order_sorted && orders.iter().all(|order| *order == sorted) && levels == sorted
}

#[quickcheck]
fn level_order_rebuilds_same_tree(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let rebuilt = BinarySearchTree::from_values(tree.to_array());

    rebuilt.map_or(false, |rebuilt| rebuilt.to_array() == tree.to_array())
}
