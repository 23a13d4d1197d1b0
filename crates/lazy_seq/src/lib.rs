//! Lazy pull-based sequences: producers, transformers, and folds built on a
//! single [`Sequence::advance`] step.

mod aggregate;
mod cap;
mod error;
mod fold;
mod merge_sort;
mod produce;
mod sequence;
mod step;
mod transform;

pub use aggregate::{count, every, max, min, some, sort, take};
pub use cap::Cap;
pub use error::SequenceError;
pub use fold::{reduce, reduce_until, shift};
pub use produce::{
    Empty, FromIter, Generated, Recursive, arange, arange_from, arange_step, empty, iterator,
    recursive, sequence,
};
pub use sequence::{Items, Sequence};
pub use step::Step;
pub use transform::{Chain, Concat, Filter, Map, chain, concatenate, filter, map, unshift};
