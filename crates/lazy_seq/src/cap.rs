/// Upper bound on the number of items an operation pulls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cap {
    #[default]
    Unbounded,
    Limit(usize),
}

impl Cap {
    /// `true` once `consumed` items have been taken under this cap.
    #[inline]
    pub const fn is_reached(self, consumed: usize) -> bool {
        match self {
            Cap::Unbounded => false,
            Cap::Limit(limit) => consumed >= limit,
        }
    }

    #[inline]
    pub const fn saturating_sub(self, consumed: usize) -> Cap {
        match self {
            Cap::Unbounded => Cap::Unbounded,
            Cap::Limit(limit) => Cap::Limit(limit.saturating_sub(consumed)),
        }
    }
}

impl From<usize> for Cap {
    #[inline]
    fn from(limit: usize) -> Self {
        Cap::Limit(limit)
    }
}

impl From<Option<usize>> for Cap {
    #[inline]
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Cap::Unbounded, Cap::Limit)
    }
}
