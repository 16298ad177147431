use thiserror::Error;

/// The reasons a fold aborts.
///
/// Every failure is raised synchronously and discards any partial
/// accumulation; nothing is retried or downgraded internally.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The sequence argument was the null receiver.
    #[error("fold-left called on a null sequence")]
    NullSource,

    /// The combining function argument was not invocable.
    #[error("`{0}` is not a function")]
    InvalidCallback(String),

    /// A seed was supplied but holds no value.
    #[error("the initial value of a fold cannot be undefined")]
    InvalidSeed,

    /// No seed was supplied and the sequence has no present element.
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduce,

    /// A consulted slot holds no value.
    #[error("undefined element at index {0} cannot be folded")]
    UndefinedElement(usize),
}
