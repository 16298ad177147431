/// The optional initial accumulator of a fold.
///
/// Omitting the seed and supplying an undefined one are different states: an
/// omitted seed lets the first present element seed the fold, while an
/// explicitly undefined seed is rejected outright.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Seed<A> {
    /// No seed; the fold seeds itself from the sequence.
    Omitted,

    /// An explicitly supplied initial accumulator.
    Value(A),

    /// A seed that was supplied but holds no value.
    Undefined,
}

impl<A> From<A> for Seed<A> {
    #[inline]
    fn from(seed: A) -> Self {
        Seed::Value(seed)
    }
}

impl<A> From<Option<A>> for Seed<A> {
    #[inline]
    fn from(seed: Option<A>) -> Self {
        match seed {
            Some(seed) => Seed::Value(seed),
            None => Seed::Omitted,
        }
    }
}
