const INSERTION_THRESHOLD: usize = 24;

/// Top-down merge sort driven by a strict less-than comparator.
pub(crate) fn merge_sort_by<T, F>(data: Vec<T>, less_than: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut data = data;
    if data.len() <= INSERTION_THRESHOLD {
        insertion_sort_by(&mut data, less_than);
        return data;
    }

    let right = data.split_off(data.len() >> 1);
    let mut left = merge_sort_by(data, less_than);
    let right = merge_sort_by(right, less_than);

    let already_ordered = match (left.last(), right.first()) {
        (Some(last), Some(first)) => !less_than(first, last),
        _ => true,
    };
    if already_ordered {
        left.extend(right);
        return left;
    }

    merge(left, right, less_than)
}

fn insertion_sort_by<T, F>(data: &mut [T], less_than: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && less_than(&data[j], &data[j - 1]) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, less_than: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let from_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less_than(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        out.extend(if from_right { right.next() } else { left.next() });
    }
    out
}
