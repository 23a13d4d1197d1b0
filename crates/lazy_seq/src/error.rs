use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// An extremum was requested from a sequence that yielded nothing.
    EmptySequence,
    /// `arange` was given a zero step.
    InvalidStep,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::EmptySequence => write!(f, "sequence yielded no items"),
            SequenceError::InvalidStep => write!(f, "step must be non-zero"),
        }
    }
}

impl std::error::Error for SequenceError {}
