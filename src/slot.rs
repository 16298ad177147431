/// The state of a single index within a [Sequence][crate::Sequence].
///
/// Holes and undefined slots are distinct states: a fold skips holes
/// silently, while an undefined slot aborts it, since a defined accumulation
/// cannot consume a missing value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Slot<T> {
    /// The index holds a value.
    Value(T),

    /// The index exists but holds no value.
    Undefined,

    /// The index is absent from the sequence.
    Hole,
}

impl<T> Slot<T> {
    /// Converts from `&Slot<T>` to `Slot<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Slot<&T> {
        match self {
            Slot::Value(v) => Slot::Value(v),
            Slot::Undefined => Slot::Undefined,
            Slot::Hole => Slot::Hole,
        }
    }

    /// Whether this slot holds a value.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Slot::Value(_))
    }
}
