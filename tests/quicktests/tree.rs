use adt_bst::{Error, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Display + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                let before = bst.size();
                let inserted = bst.insert(x.clone()).unwrap();
                assert_eq!(inserted, set.insert(x.clone()));
                assert_eq!(bst.size(), before + usize::from(inserted));
            }
            Op::Remove(x) => {
                if bst.is_empty() {
                    assert_eq!(bst.remove(x), Err(Error::EmptyTree));
                    continue;
                }
                let before = bst.size();
                let removed = bst.remove(x).unwrap();
                assert_eq!(removed, set.take(x));
                assert_eq!(bst.size(), before - usize::from(removed.is_some()));
            }
            Op::Clear => {
                bst.clear();
                set.clear();
                assert!(bst.is_empty());
            }
        }
    }
}

fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut xs = Vec::new();
    tree.for_each_in_order(|x| xs.push(x.clone()));
    xs
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    in_order(&tree) == set.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    in_order(&tree) == set.iter().cloned().collect::<Vec<_>>()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    for delete in &deletes {
        if tree.is_empty() {
            break;
        }
        tree.remove(delete).unwrap();
    }

    in_order(&tree).windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    for delete in &deletes {
        if tree.is_empty() {
            break;
        }
        tree.remove(delete).unwrap();
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn size_counts_distinct_elements(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    tree.size() == xs.iter().collect::<HashSet<_>>().len()
}

#[quickcheck]
fn min_and_max_bracket_in_order(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    let sorted = in_order(&tree);
    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => {
            tree.minimum() == Ok(first) && tree.maximum() == Ok(last)
        }
        _ => {
            tree.minimum() == Err(Error::EmptyTree) && tree.maximum() == Err(Error::EmptyTree)
        }
    }
}

#[quickcheck]
fn height_is_bounded(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    for delete in &deletes {
        if tree.is_empty() {
            break;
        }
        tree.remove(delete).unwrap();
    }

    let size = tree.size();
    let height = tree.height();
    if size == 0 {
        return height == -1;
    }
    // The shortest tree holding `size` nodes is a complete one.
    let shortest = (f64::log2(size as f64 + 1.0)).ceil() as isize - 1;
    shortest <= height && height <= size as isize - 1
}

#[quickcheck]
fn clear_then_reuse(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    tree.clear();
    if !tree.is_empty() || tree.size() != 0 || tree.height() != -1 {
        return false;
    }

    for y in &ys {
        tree.insert(*y).unwrap();
    }
    ys.iter().all(|y| tree.contains(y))
        && tree.size() == ys.iter().collect::<HashSet<_>>().len()
}
