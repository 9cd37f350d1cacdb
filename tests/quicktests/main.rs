use quickcheck::{Arbitrary, Gen};

mod handle;
mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the element into the data structure
    Insert(T),
    /// Remove the element from the data structure
    Remove(T),
    /// Empty the data structure
    Clear,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Clearing is rare so that trees get a
    /// chance to grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Clear,
            _ => unreachable!(),
        }
    }
}
