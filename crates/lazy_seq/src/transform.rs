use std::collections::VecDeque;

use crate::{FromIter, Sequence, Step, iterator};

#[derive(Clone, Debug)]
pub struct Map<S, F> {
    source: S,
    mapper: F,
}

/// Applies `mapper` to each item as it is pulled.
pub fn map<S, U, F>(source: S, mapper: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    Map { source, mapper }
}

impl<S, U, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn advance(&mut self) -> Step<U> {
        self.source.advance().map(&mut self.mapper)
    }
}

#[derive(Clone, Debug)]
pub struct Filter<S, P> {
    source: S,
    test: P,
}

/// Keeps the items that pass `test`.
pub fn filter<S, P>(source: S, test: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter { source, test }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        loop {
            match self.source.advance() {
                Step::Item(item) if (self.test)(&item) => return Step::Item(item),
                Step::Item(_) => {}
                Step::Done => return Step::Done,
            }
        }
    }
}

/// Left-to-right concatenation of same-typed sequences.
#[derive(Clone, Debug)]
pub struct Concat<S> {
    sources: VecDeque<S>,
}

/// Chains `sources` in order. Box them to mix sequence types.
pub fn concatenate<I>(sources: I) -> Concat<I::Item>
where
    I: IntoIterator,
    I::Item: Sequence,
{
    Concat {
        sources: sources.into_iter().collect(),
    }
}

impl<S: Sequence> Sequence for Concat<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        while let Some(current) = self.sources.front_mut() {
            if let Step::Item(item) = current.advance() {
                return Step::Item(item);
            }
            self.sources.pop_front();
        }
        Step::Done
    }
}

/// `first` followed by `second`.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    first: Option<A>,
    second: B,
}

pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain {
        first: Some(first),
        second,
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Step<A::Item> {
        if let Some(first) = self.first.as_mut() {
            if let Step::Item(item) = first.advance() {
                return Step::Item(item);
            }
            self.first = None;
        }
        self.second.advance()
    }
}

/// Prepends `values`, in order, ahead of `source`.
pub fn unshift<S, I>(source: S, values: I) -> Chain<FromIter<I::IntoIter>, S>
where
    S: Sequence,
    I: IntoIterator<Item = S::Item>,
{
    chain(iterator(values), source)
}
