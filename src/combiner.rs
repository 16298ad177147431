use crate::Sequence;
use std::fmt::{self, Display};

/// The boxed form of an invocable combining function.
///
/// The arguments are the running accumulator, the current element, its index,
/// and the sequence being folded.
pub type Combine<'f, T, A> = Box<dyn FnMut(A, &T, usize, &dyn Sequence<Item = T>) -> A + 'f>;

/// The caller-supplied combining capability.
///
/// Hosts that traffic in dynamically typed values can forward a non-invocable
/// value as [Combiner::NotCallable]; a fold rejects it before consulting any
/// index.
pub enum Combiner<'f, T, A> {
    /// An invocable combining function.
    Function(Combine<'f, T, A>),

    /// A value that is not a function, retained in display form.
    NotCallable(String),
}

impl<'f, T, A> Combiner<'f, T, A> {
    /// Wraps a combining function.
    pub fn function(f: impl FnMut(A, &T, usize, &dyn Sequence<Item = T>) -> A + 'f) -> Self {
        Combiner::Function(Box::new(f))
    }

    /// Records a non-invocable value by its display form.
    pub fn not_callable(value: impl Display) -> Self {
        Combiner::NotCallable(value.to_string())
    }
}

impl<T, A> fmt::Debug for Combiner<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combiner::Function(_) => f.write_str("Function"),
            Combiner::NotCallable(value) => f.debug_tuple("NotCallable").field(value).finish(),
        }
    }
}
