//! Bound and membership queries over sorted slices.
//!
//! Every query builds a monotonic predicate over the slice indices and hands
//! it to [`binary_search`], using the positions just outside the slice
//! (`-1` and `len`) as the interval ends. The predicate is therefore only
//! ever evaluated on valid indices.
//!
//! The slice is assumed to be sorted in non-decreasing order according to the
//! comparator. Unsorted input gives unspecified results.
use std::{cmp::Ordering, ops::Range};

use crate::binary_search;

#[inline]
fn len_of<T>(seq: &[T]) -> isize {
	// Slices never hold more than `isize::MAX` elements.
	seq.len() as isize
}

/// Index of the leftmost item `>= key`, if any.
pub fn lower_bound_by<T, Q: ?Sized>(
	seq: &[T],
	cmp: impl Fn(&T, &Q) -> Ordering,
	key: &Q,
) -> Option<usize> {
	binary_search(|i| cmp(&seq[i as usize], key).is_ge(), len_of(seq), -1).map(|i| i as usize)
}

/// Index of the rightmost item `<= key`, if any.
pub fn upper_bound_by<T, Q: ?Sized>(
	seq: &[T],
	cmp: impl Fn(&T, &Q) -> Ordering,
	key: &Q,
) -> Option<usize> {
	binary_search(|i| cmp(&seq[i as usize], key).is_le(), -1, len_of(seq)).map(|i| i as usize)
}

/// Index of the leftmost element `>= target`, if any.
///
/// ```
/// use meguru::lower_bound;
///
/// assert_eq!(lower_bound(&[1, 2, 3, 4, 5], &2), Some(1));
/// assert_eq!(lower_bound(&[1, 2, 3, 4, 5], &100), None);
/// ```
#[inline]
pub fn lower_bound<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
	lower_bound_by(seq, T::cmp, target)
}

/// Index of the rightmost element `<= target`, if any.
///
/// ```
/// use meguru::upper_bound;
///
/// assert_eq!(upper_bound(&[1, 2, 3, 4, 5], &2), Some(1));
/// assert_eq!(upper_bound(&[1, 2, 3, 4, 5], &0), None);
/// ```
#[inline]
pub fn upper_bound<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
	upper_bound_by(seq, T::cmp, target)
}

/// Index of the first item equal to `key`, if any.
pub fn find_leftmost_by<T, Q: ?Sized>(
	seq: &[T],
	cmp: impl Fn(&T, &Q) -> Ordering,
	key: &Q,
) -> Option<usize> {
	lower_bound_by(seq, &cmp, key).filter(|&i| cmp(&seq[i], key).is_eq())
}

/// Index of the last item equal to `key`, if any.
pub fn find_rightmost_by<T, Q: ?Sized>(
	seq: &[T],
	cmp: impl Fn(&T, &Q) -> Ordering,
	key: &Q,
) -> Option<usize> {
	upper_bound_by(seq, &cmp, key).filter(|&i| cmp(&seq[i], key).is_eq())
}

/// Index of the first occurrence of `target`, if any.
///
/// ```
/// use meguru::find_leftmost;
///
/// assert_eq!(find_leftmost(&[1, 1, 2, 2, 3, 4, 5], &2), Some(2));
/// assert_eq!(find_leftmost(&[1, 1, 2, 2, 3, 4, 5], &0), None);
/// ```
#[inline]
pub fn find_leftmost<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
	find_leftmost_by(seq, T::cmp, target)
}

/// Index of the last occurrence of `target`, if any.
#[inline]
pub fn find_rightmost<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
	find_rightmost_by(seq, T::cmp, target)
}

/// Range of the items equal to `key`.
///
/// When there are none, the range is empty and starts where `key` would have
/// to be inserted to keep `seq` sorted.
pub fn equal_range_by<T, Q: ?Sized>(
	seq: &[T],
	cmp: impl Fn(&T, &Q) -> Ordering,
	key: &Q,
) -> Range<usize> {
	let start = lower_bound_by(seq, &cmp, key).unwrap_or(seq.len());
	let end = upper_bound_by(seq, &cmp, key).map(|i| i + 1).unwrap_or(0);
	start..end.max(start)
}

/// Range of the occurrences of `target`.
///
/// ```
/// use meguru::equal_range;
///
/// assert_eq!(equal_range(&[1, 1, 2, 2, 3], &2), 2..4);
/// assert_eq!(equal_range(&[1, 1, 3], &2), 2..2);
/// ```
#[inline]
pub fn equal_range<T: Ord>(seq: &[T], target: &T) -> Range<usize> {
	equal_range_by(seq, T::cmp, target)
}
