/// Outcome of a single pull from a [`Sequence`](crate::Sequence).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// An item is present and the sequence is not done.
    Item(T),
    /// The sequence is exhausted.
    Done,
}

impl<T> Step<T> {
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Step::Item(_))
    }

    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    #[inline]
    pub fn into_item(self) -> Option<T> {
        match self {
            Step::Item(value) => Some(value),
            Step::Done => None,
        }
    }

    /// Applies `f` to the item, leaving `Done` untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Step<U> {
        match self {
            Step::Item(value) => Step::Item(f(value)),
            Step::Done => Step::Done,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Item(value),
            None => Step::Done,
        }
    }
}
