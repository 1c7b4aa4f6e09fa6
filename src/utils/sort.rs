use num::Float;

/// Stable merge sort, descending by a float key.
/// - Splits at the midpoint, sorts both halves, merges by taking whichever
///   head carries the larger key
/// - Ties take from the left half, so equal keys keep their input order
///
/// Complexity: O(n log n) comparisons, O(n) scratch per merge
pub fn merge_sort_desc_by<T, N, F>(items: Vec<T>, key: &F) -> Vec<T>
where
    N: Float,
    F: Fn(&T) -> N,
{
    if items.len() < 2 {
        return items;
    }
    let mid = items.len() / 2;
    let mut right = items;
    let left: Vec<T> = right.drain(..mid).collect();
    let left = merge_sort_desc_by(left, key);
    let right = merge_sort_desc_by(right, key);
    merge_desc(left, right, key)
}

/// Merge two descending runs, preferring the left head on ties.
fn merge_desc<T, N, F>(left: Vec<T>, right: Vec<T>, key: &F) -> Vec<T>
where
    N: Float,
    F: Fn(&T) -> N,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_it = left.into_iter();
    let mut right_it = right.into_iter();
    let mut left_next = left_it.next();
    let mut right_next = right_it.next();

    loop {
        match (left_next.take(), right_next.take()) {
            (Some(a), Some(b)) => {
                if key(&a) >= key(&b) {
                    merged.push(a);
                    right_next = Some(b);
                    left_next = left_it.next();
                } else {
                    merged.push(b);
                    left_next = Some(a);
                    right_next = right_it.next();
                }
            }
            (Some(a), None) => {
                merged.push(a);
                merged.extend(left_it);
                break;
            }
            (None, Some(b)) => {
                merged.push(b);
                merged.extend(right_it);
                break;
            }
            (None, None) => break,
        }
    }
    merged
}
