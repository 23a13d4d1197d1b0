use std::iter::FusedIterator;

use crate::Step;

/// Single-step pull protocol shared by every producer and transformer.
///
/// A sequence is a stateful cursor: each call to [`advance`](Sequence::advance)
/// moves it one item forward. There is no way back and no implicit copy; lend
/// it out with `&mut seq` to let a fold consume a prefix and keep the rest.
///
/// Implementations in this crate keep returning [`Step::Done`] once they have
/// returned it.
pub trait Sequence {
    type Item;

    fn advance(&mut self) -> Step<Self::Item>;

    fn boxed<'a>(self) -> Box<dyn Sequence<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Views the sequence as a fused [`Iterator`].
    fn into_items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items { source: Some(self) }
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

#[derive(Clone, Debug)]
pub struct Items<S> {
    source: Option<S>,
}

impl<S: Sequence> Iterator for Items<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.source.as_mut()?.advance();
        if step.is_done() {
            self.source = None;
        }
        step.into_item()
    }
}

impl<S: Sequence> FusedIterator for Items<S> {}
