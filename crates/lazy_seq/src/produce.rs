use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::{Cap, Sequence, SequenceError, Step};

/// Index-driven sequence: item `i` is `nth(i)`.
#[derive(Clone, Debug)]
pub struct Generated<F> {
    nth: F,
    next_index: usize,
    length: Cap,
}

pub fn sequence<T, F>(nth: F, length: Cap) -> Generated<F>
where
    F: FnMut(usize) -> T,
{
    Generated {
        nth,
        next_index: 0,
        length,
    }
}

impl<T, F> Sequence for Generated<F>
where
    F: FnMut(usize) -> T,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        if self.length.is_reached(self.next_index) {
            return Step::Done;
        }
        let index = self.next_index;
        self.next_index += 1;
        Step::Item((self.nth)(index))
    }
}

/// `[0, stop)` in unit steps.
pub fn arange(stop: f64) -> Generated<impl FnMut(usize) -> f64 + Clone> {
    arange_unchecked(0.0, stop, 1.0)
}

/// `[start, stop)` in unit steps.
pub fn arange_from(start: f64, stop: f64) -> Generated<impl FnMut(usize) -> f64 + Clone> {
    arange_unchecked(start, stop, 1.0)
}

/// `start, start + step, ...` up to but excluding `stop`.
///
/// A step pointing away from `stop` gives an empty sequence.
pub fn arange_step(
    start: f64,
    stop: f64,
    step: f64,
) -> Result<Generated<impl FnMut(usize) -> f64 + Clone>, SequenceError> {
    if step == 0.0 {
        return Err(SequenceError::InvalidStep);
    }
    Ok(arange_unchecked(start, stop, step))
}

fn arange_unchecked(
    start: f64,
    stop: f64,
    step: f64,
) -> Generated<impl FnMut(usize) -> f64 + Clone> {
    sequence(
        move |i| start + i as f64 * step,
        Cap::Limit(arange_length(start, stop, step)),
    )
}

fn arange_length(start: f64, stop: f64, step: f64) -> usize {
    let length = ((stop - start) / step).ceil();
    // `max` drops NaN; `as` saturates +inf to usize::MAX.
    length.max(0.0) as usize
}

/// Fixed-window recurrence.
///
/// The window starts as the initial items. Each pull computes `nth(window)`,
/// appends it, and emits the oldest item. Nothing is computed past `length`.
#[derive(Clone, Debug)]
pub struct Recursive<T, F> {
    nth: F,
    window: VecDeque<T>,
    emitted: usize,
    length: Cap,
}

pub fn recursive<T, F, I>(nth: F, length: Cap, initial: I) -> Recursive<T, F>
where
    F: FnMut(&[T]) -> T,
    I: IntoIterator<Item = T>,
{
    Recursive {
        nth,
        window: initial.into_iter().collect(),
        emitted: 0,
        length,
    }
}

impl<T, F> Sequence for Recursive<T, F>
where
    F: FnMut(&[T]) -> T,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        if self.length.is_reached(self.emitted) {
            return Step::Done;
        }
        if !self.length.is_reached(self.emitted + self.window.len()) {
            let next = (self.nth)(self.window.make_contiguous());
            self.window.push_back(next);
        }
        self.emitted += 1;
        self.window.pop_front().into()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Empty<T>(PhantomData<fn() -> T>);

pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    #[inline]
    fn advance(&mut self) -> Step<T> {
        Step::Done
    }
}

/// Sequence over any [`IntoIterator`], fused after its first `None`.
#[derive(Clone, Debug)]
pub struct FromIter<I> {
    source: Option<I>,
}

pub fn iterator<C: IntoIterator>(collection: C) -> FromIter<C::IntoIter> {
    FromIter {
        source: Some(collection.into_iter()),
    }
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Step<I::Item> {
        let Some(source) = self.source.as_mut() else {
            return Step::Done;
        };
        let next = source.next();
        if next.is_none() {
            self.source = None;
        }
        next.into()
    }
}
