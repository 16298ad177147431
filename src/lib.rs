//! # Overview
//!
//! This crate provides a self-contained left fold ("reduce") over ordered,
//! integer-indexed sequences that may be sparse, for hosts without a native
//! one. A [Sequence] resolves every index to one of three [Slot] states: a
//! value, an undefined placeholder, or a hole. Holes are skipped silently;
//! undefined placeholders abort the fold, since a defined accumulation
//! cannot consume a missing value.
//!
//! The combining function is an opaque invocable capability supplied by the
//! caller as a [Combiner], and the initial accumulator is an optional
//! [Seed]; every precondition violation surfaces as an [Error] before any
//! partial result is produced.
//!
//! # Example
//!
//! ```rust
//! use fold_left::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! let sum = fold_left(
//!     Some(&numbers),
//!     Combiner::function(|acc: i32, &n, _, _| acc + n),
//!     Seed::Value(0),
//! )?;
//!
//! assert_eq!(sum, 45);
//!
//! let word: SparseVec<String> = [
//!     Slot::Value("R".to_string()),
//!     Slot::Hole,
//!     Slot::Value("3duc3".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let concat = Combiner::function(|acc: String, s: &String, _, _| acc + s);
//! assert_eq!(fold_left(Some(&word), concat, Seed::Omitted)?, "R3duc3");
//! #
//! # Ok::<(), fold_left::Error>(())
//! ```

mod combiner;
mod error;
mod fold;
mod seed;
mod sequence;
mod slot;

pub use combiner::*;
pub use error::*;
pub use fold::*;
pub use seed::*;
pub use sequence::*;
pub use slot::*;
