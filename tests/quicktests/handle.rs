use adt_bst::{Error, Handle};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

#[quickcheck]
fn handle_tracks_set(ops: Vec<Op<i8>>) -> bool {
    let mut handle = Handle::create();
    let mut set = BTreeSet::new();

    for op in &ops {
        match op {
            Op::Insert(x) => {
                handle.insert(*x).unwrap();
                set.insert(*x);
            }
            Op::Remove(x) => {
                let expected = if set.is_empty() {
                    Err(Error::EmptyTree)
                } else {
                    set.remove(x);
                    Ok(())
                };
                assert_eq!(handle.remove(x), expected);
            }
            Op::Clear => {
                handle.clear().unwrap();
                set.clear();
            }
        }
    }

    handle.size() == Ok(set.len())
        && handle.is_empty() == set.is_empty()
        && set.iter().all(|x| handle.contains(x))
}

#[quickcheck]
fn destroyed_handle_is_absent(xs: Vec<i8>) -> bool {
    let mut handle = Handle::create();
    for x in &xs {
        handle.insert(*x).unwrap();
    }
    handle.destroy().unwrap();

    !handle.is_live()
        && handle.is_empty()
        && xs.iter().all(|x| !handle.contains(x))
        && handle.size() == Err(Error::NullHandle)
        && handle.height() == Err(Error::NullHandle)
        && handle.minimum() == Err(Error::NullHandle)
        && handle.insert(0) == Err(Error::NullHandle)
        && handle.clear() == Err(Error::NullHandle)
        && handle.destroy() == Err(Error::NullHandle)
}
