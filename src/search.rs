//! Predicate-driven binary search.
//!
//! The search works on a conceptual interval `(ok, ng)` of integer indices:
//! `ok` is the last index known to satisfy the predicate and `ng` the last
//! index known to violate it. The interval is halved until the two ends are
//! adjacent, at which point `ok` sits on the boundary.
//!
//! `ok` may be larger than `ng`: the search then finds the smallest index
//! satisfying the predicate instead of the largest one.
use log::trace;

/// Floor of `(a + b) / 2`, without overflow.
///
/// When `|a - b| > 1` the result lies strictly between `a` and `b`.
#[inline]
fn midpoint(a: isize, b: isize) -> isize {
	(a >> 1) + (b >> 1) + (a & b & 1)
}

/// Search the boundary of the monotonic predicate `f`, starting from the
/// interval `(ok, ng)`.
///
/// The initial `ok` is an edge sentinel: it is never passed to `f`, nor is
/// the initial `ng`. If the boundary ends up on the initial `ok`, no index of
/// the interval satisfies `f` and `None` is returned. Otherwise the returned
/// index is the one closest to `ng` for which `f` holds.
///
/// `f` must be monotonic between `ok` and `ng`: true on the `ok` side of the
/// boundary, false on the `ng` side. This is not checked; a non-monotonic
/// predicate gives an unspecified (but in-range) result.
///
/// ```
/// use meguru::binary_search;
///
/// // Largest integer whose square does not exceed 50.
/// assert_eq!(binary_search(|x| x * x <= 50, -1, 51), Some(7));
///
/// // Nothing satisfies the predicate.
/// assert_eq!(binary_search(|_| false, -1, 10), None);
/// ```
pub fn binary_search(
	mut f: impl FnMut(isize) -> bool,
	mut ok: isize,
	mut ng: isize,
) -> Option<isize> {
	let edge = ok;

	// invariants:
	// f(ok) holds, or ok == edge
	// f(ng) does not hold, or ng is the initial ng
	while ok.abs_diff(ng) > 1 {
		let mid = midpoint(ok, ng);
		if f(mid) {
			ok = mid
		} else {
			ng = mid
		}
	}

	trace!("binary search boundary at {} (edge {})", ok, edge);
	if ok == edge {
		None
	} else {
		Some(ok)
	}
}

/// Recursive formulation of [`binary_search`].
///
/// Returns exactly what [`binary_search`] returns for the same arguments.
/// Each call halves the interval, so the recursion is never deeper than the
/// bit width of `isize`.
pub fn binary_search_recursive(
	mut f: impl FnMut(isize) -> bool,
	ok: isize,
	ng: isize,
) -> Option<isize> {
	fn search<F: FnMut(isize) -> bool>(f: &mut F, ok: isize, ng: isize) -> isize {
		if ok.abs_diff(ng) <= 1 {
			ok
		} else {
			let mid = midpoint(ok, ng);
			if f(mid) {
				search(f, mid, ng)
			} else {
				search(f, ok, mid)
			}
		}
	}

	let edge = ok;
	let ok = search(&mut f, ok, ng);
	if ok == edge {
		None
	} else {
		Some(ok)
	}
}
