use std::cell::Cell;

use crate::merge_sort::merge_sort_by;
use crate::{Cap, Sequence, SequenceError, Step, reduce, reduce_until, shift};

/// `true` iff every item within `cap` passes `test`. Stops at the first failure.
pub fn every<S, P>(seq: S, mut test: P, cap: Cap) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    // The fold ends on the first failing item, so the last verdict is the answer.
    let passed = Cell::new(true);
    reduce_until(
        seq,
        |_, _| passed.get(),
        true,
        cap,
        |item| {
            passed.set(test(item));
            !passed.get()
        },
    )
}

/// `true` iff some item within `cap` passes `test`. Stops at the first match.
pub fn some<S, P>(seq: S, mut test: P, cap: Cap) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    !every(seq, |item| !test(item), cap)
}

/// Materializes up to `cap` items in iteration order.
pub fn take<S: Sequence>(seq: S, cap: Cap) -> Vec<S::Item> {
    reduce(
        seq,
        |item, mut items: Vec<S::Item>| {
            items.push(item);
            items
        },
        Vec::new(),
        cap,
    )
}

/// Number of items within `cap` that pass `test`.
pub fn count<S, P>(seq: S, mut test: P, cap: Cap) -> usize
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    reduce(seq, |item, n| if test(&item) { n + 1 } else { n }, 0, cap)
}

/// Smallest of the first `cap` items under `less_than`; the earliest wins ties.
///
/// The emptiness check pulls one item regardless of `cap`, so a zero cap on a
/// non-empty sequence returns its first item.
pub fn min<S, F>(mut seq: S, mut less_than: F, cap: Cap) -> Result<S::Item, SequenceError>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let Step::Item(first) = shift(&mut seq, 0) else {
        return Err(SequenceError::EmptySequence);
    };
    Ok(reduce(
        seq,
        |item, best| if less_than(&item, &best) { item } else { best },
        first,
        cap.saturating_sub(1),
    ))
}

/// Largest of the first `cap` items under `less_than`; the earliest wins ties.
pub fn max<S, F>(seq: S, mut less_than: F, cap: Cap) -> Result<S::Item, SequenceError>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    min(seq, |a, b| less_than(b, a), cap)
}

/// Takes up to `cap` items and returns them ascending under `less_than`.
///
/// Items the comparator treats as equal may come out in any order.
pub fn sort<S, F>(seq: S, mut less_than: F, cap: Cap) -> Vec<S::Item>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    merge_sort_by(take(seq, cap), &mut less_than)
}
