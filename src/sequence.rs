use crate::Slot;
use derive_more::From;

/// An abstraction for an ordered, integer-indexed, sparse-capable sequence.
///
/// The length is authoritative even when some indices are absent; [get][Sequence::get]
/// resolves every index in `0..len()` to one of the three [Slot] states.
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of indices, counting holes.
    fn len(&self) -> usize;

    /// Probes the slot at `index`.
    ///
    /// Indices at or beyond [len][Sequence::len] resolve to [Slot::Hole].
    fn get(&self, index: usize) -> Slot<&Self::Item>;

    /// Whether the sequence has zero indices.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Slot<&T> {
        match self.as_slice().get(index) {
            Some(v) => Slot::Value(v),
            None => Slot::Hole,
        }
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Slot<&T> {
        match self.as_slice().get(index) {
            Some(v) => Slot::Value(v),
            None => Slot::Hole,
        }
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Slot<&T> {
        match (**self).get(index) {
            Some(v) => Slot::Value(v),
            None => Slot::Hole,
        }
    }
}

/// A sequence whose indices may independently be present, undefined, or
/// absent.
#[derive(Debug, Clone, Eq, PartialEq, Hash, From)]
pub struct SparseVec<T>(Vec<Slot<T>>);

impl<T> SparseVec<T> {
    /// Wraps every element of a dense vector in [Slot::Value].
    pub fn from_dense(values: Vec<T>) -> Self {
        values.into_iter().map(Slot::Value).collect()
    }

    /// Appends a slot at the end of the sequence.
    #[inline]
    pub fn push(&mut self, slot: Slot<T>) {
        self.0.push(slot);
    }
}

impl<T> Default for SparseVec<T> {
    fn default() -> Self {
        SparseVec(Vec::new())
    }
}

impl<T> FromIterator<Slot<T>> for SparseVec<T> {
    fn from_iter<I: IntoIterator<Item = Slot<T>>>(slots: I) -> Self {
        SparseVec(slots.into_iter().collect())
    }
}

impl<T> Sequence for SparseVec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Slot<&T> {
        match self.0.as_slice().get(index) {
            Some(slot) => slot.as_ref(),
            None => Slot::Hole,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use test_strategy::proptest;

    fn slots() -> impl Strategy<Value = Slot<i32>> {
        prop_oneof![
            3 => any::<i32>().prop_map(Slot::Value),
            1 => Just(Slot::Undefined),
            1 => Just(Slot::Hole),
        ]
    }

    #[proptest]
    fn dense_sequences_have_no_holes_within_their_length(values: Vec<i32>) {
        for k in 0..Sequence::len(&values) {
            assert!(Sequence::get(&values, k).is_value());
        }
    }

    #[proptest]
    fn probes_beyond_the_length_resolve_to_holes(
        values: Vec<i32>,
        #[strategy(0..8usize)] past: usize,
    ) {
        assert_eq!(Sequence::get(&values, values.len() + past), Slot::Hole);
    }

    #[proptest]
    fn the_length_counts_holes_and_undefined_slots(
        #[strategy(vec(slots(), ..32))] slots: Vec<Slot<i32>>,
    ) {
        let sequence: SparseVec<i32> = slots.iter().copied().collect();
        assert_eq!(sequence.len(), slots.len());
    }

    #[proptest]
    fn probing_a_sparse_sequence_reproduces_its_slots(
        #[strategy(vec(slots(), ..32))] slots: Vec<Slot<i32>>,
    ) {
        let sequence: SparseVec<i32> = slots.iter().copied().collect();

        for (k, slot) in slots.iter().enumerate() {
            assert_eq!(sequence.get(k), slot.as_ref());
        }
    }

    #[proptest]
    fn from_dense_wraps_every_value(values: Vec<i32>) {
        let sequence = SparseVec::from_dense(values.clone());

        assert_eq!(sequence.len(), values.len());

        for (k, v) in values.iter().enumerate() {
            assert_eq!(sequence.get(k), Slot::Value(v));
        }
    }

    #[test]
    fn undefined_slots_are_not_holes() {
        let mut sequence = SparseVec::<i32>::default();
        sequence.push(Slot::Undefined);

        assert_eq!(sequence.get(0), Slot::Undefined);
        assert_eq!(sequence.get(1), Slot::Hole);
    }
}
