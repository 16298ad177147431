use crate::{Combiner, Error, Seed, Sequence, Slot};

/// Folds `sequence` left-to-right into a single value.
///
/// The accumulator starts as the supplied seed, or as the first present
/// element when the seed is omitted, and is threaded through the combining
/// function once per present index, in strictly increasing order. Holes are
/// skipped without reaching the combining function; undefined slots abort
/// the fold.
///
/// The `From` bound is what seeding from the first element means for a
/// heterogeneous fold; for folds whose accumulator is the element type it is
/// the identity.
///
/// # Errors
///
/// - [Error::NullSource] if `sequence` is `None`.
/// - [Error::InvalidCallback] if `combiner` is not invocable.
/// - [Error::InvalidSeed] if the seed was supplied but holds no value.
/// - [Error::EmptyReduce] if the seed was omitted and no index is present.
/// - [Error::UndefinedElement] if a consulted slot holds no value.
pub fn fold_left<S, A>(
    sequence: Option<&S>,
    combiner: Combiner<'_, S::Item, A>,
    seed: Seed<A>,
) -> Result<A, Error>
where
    S: Sequence,
    S::Item: Clone,
    A: From<S::Item>,
{
    let sequence = sequence.ok_or(Error::NullSource)?;

    let mut combine = match combiner {
        Combiner::Function(f) => f,
        Combiner::NotCallable(value) => return Err(Error::InvalidCallback(value)),
    };

    let len = sequence.len();
    let mut k = 0;

    let mut accumulator = match seed {
        Seed::Value(seed) => seed,
        Seed::Undefined => return Err(Error::InvalidSeed),
        Seed::Omitted => loop {
            if k >= len {
                return Err(Error::EmptyReduce);
            }

            match sequence.get(k) {
                Slot::Hole => k += 1,
                Slot::Undefined => return Err(Error::UndefinedElement(k)),
                Slot::Value(first) => {
                    k += 1;
                    break first.clone().into();
                }
            }
        },
    };

    while k < len {
        match sequence.get(k) {
            Slot::Hole => {}
            Slot::Undefined => return Err(Error::UndefinedElement(k)),
            Slot::Value(element) => accumulator = combine(accumulator, element, k, sequence),
        }

        k += 1;
    }

    Ok(accumulator)
}
