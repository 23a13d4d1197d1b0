use crate::{Cap, Sequence, Step};

/// Pulls `n + 1` items and returns the last pull.
///
/// Stops pulling as soon as the sequence reports [`Step::Done`].
pub fn shift<S: Sequence>(mut seq: S, n: usize) -> Step<S::Item> {
    for _ in 0..n {
        if seq.advance().is_done() {
            return Step::Done;
        }
    }
    seq.advance()
}

/// Folds up to `cap` items into `init` with `reducer(item, acc)`.
///
/// `Cap::Limit(0)` returns `init` without pulling. With `Cap::Unbounded` on an
/// infinite sequence this never returns; use [`reduce_until`] or a limit.
pub fn reduce<S, U, F>(seq: S, reducer: F, init: U, cap: Cap) -> U
where
    S: Sequence,
    F: FnMut(S::Item, U) -> U,
{
    reduce_until(seq, reducer, init, cap, |_| false)
}

/// Like [`reduce`], but also stops after folding the first item for which
/// `stop` returns `true`. That item is still folded.
pub fn reduce_until<S, U, F, P>(mut seq: S, mut reducer: F, init: U, cap: Cap, mut stop: P) -> U
where
    S: Sequence,
    F: FnMut(S::Item, U) -> U,
    P: FnMut(&S::Item) -> bool,
{
    let mut acc = init;
    let mut folded = 0_usize;
    while !cap.is_reached(folded) {
        let Step::Item(item) = shift(&mut seq, 0) else {
            break;
        };
        let halt = stop(&item);
        acc = reducer(item, acc);
        folded += 1;
        if halt {
            break;
        }
    }
    acc
}
