use std::cmp::Ordering;

/// Full outer join of two lists, matching equal items.
///
/// Both inputs are sorted and deduplicated first; the output is in ascending
/// order with `None` on whichever side lacks the item.
pub fn outer_join<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<(Option<T>, Option<T>)> {
    let mut ls = left.to_vec();
    let mut rs = right.to_vec();
    ls.sort();
    ls.dedup();
    rs.sort();
    rs.dedup();

    let mut joined = Vec::with_capacity(ls.len().max(rs.len()));
    let mut ls = ls.into_iter().peekable();
    let mut rs = rs.into_iter().peekable();

    loop {
        let order = match (ls.peek(), rs.peek()) {
            (None, None) => break,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(l), Some(r)) => l.cmp(r),
        };

        let row = match order {
            Ordering::Equal => (ls.next(), rs.next()),
            Ordering::Less => (ls.next(), None),
            Ordering::Greater => (None, rs.next()),
        };
        joined.push(row);
    }

    joined
}
