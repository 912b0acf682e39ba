//! Proximity queries.
use std::cmp::Ordering;

use log::trace;

use crate::{lower_bound_by, upper_bound_by, Error, Result};

/// Distance between two values.
///
/// Queries over other key types take a distance function instead, see
/// [`find_closest_by`].
pub trait Distance {
	type Output: Ord;

	fn distance(&self, other: &Self) -> Self::Output;
}

macro_rules! integer_distance {
	($($ty:ty => $out:ty),*) => {
		$(
			impl Distance for $ty {
				type Output = $out;

				#[inline]
				fn distance(&self, other: &$ty) -> $out {
					self.abs_diff(*other)
				}
			}
		)*
	};
}

integer_distance! {
	i8 => u8,
	i16 => u16,
	i32 => u32,
	i64 => u64,
	i128 => u128,
	isize => usize,
	u8 => u8,
	u16 => u16,
	u32 => u32,
	u64 => u64,
	u128 => u128,
	usize => usize
}

/// Index of the item closest to `key`.
///
/// The two candidates are the rightmost item `<= key` and the leftmost item
/// `>= key`. When both exist and are equally distant from `key`, the first
/// one (the smaller item) wins.
///
/// Returns `None` only if `seq` is empty.
pub fn find_closest_by<T, Q: ?Sized, D: Ord>(
	seq: &[T],
	cmp: impl Fn(&T, &Q) -> Ordering,
	dist: impl Fn(&T, &Q) -> D,
	key: &Q,
) -> Option<usize> {
	let below = upper_bound_by(seq, &cmp, key);
	let above = lower_bound_by(seq, &cmp, key);

	match (below, above) {
		(None, above) => above,
		(below, None) => below,
		(Some(b), Some(a)) => {
			if dist(&seq[a], key) < dist(&seq[b], key) {
				Some(a)
			} else {
				Some(b)
			}
		}
	}
}

/// Index of the element closest to `target`, ties going to the smaller
/// element.
///
/// ```
/// use meguru::find_closest;
///
/// assert_eq!(find_closest(&[1, 2, 100, 101, 102], &99), Some(2));
/// assert_eq!(find_closest(&[1, 2, 2, 2, 4, 4, 4], &3), Some(3));
/// ```
#[inline]
pub fn find_closest<T: Ord + Distance>(seq: &[T], target: &T) -> Option<usize> {
	find_closest_by(seq, T::cmp, T::distance, target)
}

/// The `k` items closest to `key`, as a sub-slice of `seq`.
///
/// The window starts on the closest item and grows one item at a time toward
/// the nearer of its two neighbours, the left one on ties.
///
/// Selecting no item always succeeds with an empty slice. Selecting more
/// items than `seq` holds is an error.
pub fn find_k_closest_by<'a, T, Q: ?Sized, D: Ord>(
	seq: &'a [T],
	cmp: impl Fn(&T, &Q) -> Ordering,
	dist: impl Fn(&T, &Q) -> D,
	key: &Q,
	k: usize,
) -> Result<&'a [T]> {
	if k > seq.len() {
		return Err(Error::NotEnoughElements { k, len: seq.len() });
	}

	let closest = match find_closest_by(seq, &cmp, &dist, key) {
		Some(i) if k > 0 => i,
		_ => return Ok(&seq[..0]),
	};

	// invariants:
	// seq[left..right] holds the (right - left) items closest to key
	// right - left <= k <= seq.len()
	let (mut left, mut right) = (closest, closest + 1);
	while right - left < k {
		let grow_left = match (left.checked_sub(1), seq.get(right)) {
			(Some(l), Some(r)) => dist(&seq[l], key) <= dist(r, key),
			(Some(_), None) => true,
			(None, _) => false,
		};

		if grow_left {
			left -= 1
		} else {
			right += 1
		}
	}

	trace!("{} closest items in {}..{}", k, left, right);
	Ok(&seq[left..right])
}

/// The `k` elements closest to `target`, ties going to the smaller elements.
///
/// ```
/// use meguru::find_k_closest;
///
/// let seq = [1, 2, 100, 101, 102];
/// assert_eq!(find_k_closest(&seq, &99, 3).unwrap(), &[100, 101, 102]);
/// assert_eq!(find_k_closest(&seq, &60, 2).unwrap(), &[100, 101]);
/// assert!(find_k_closest(&seq, &99, 6).is_err());
/// ```
#[inline]
pub fn find_k_closest<'a, T: Ord + Distance>(
	seq: &'a [T],
	target: &T,
	k: usize,
) -> Result<&'a [T]> {
	find_k_closest_by(seq, T::cmp, T::distance, target, k)
}
