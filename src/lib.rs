//! This library provides a generalized, predicate-driven [`binary_search`]
//! and the usual queries on sorted slices derived from it: bounds
//! ([`lower_bound`], [`upper_bound`]), membership ([`find_leftmost`],
//! [`find_rightmost`], [`equal_range`]) and proximity ([`find_closest`],
//! [`find_k_closest`]).
//!
//! Queries that may find nothing return an [`Option`]. Each `Ord`-based query
//! has a `_by` counterpart taking a comparator, so that slices of records can
//! be searched by key.
//!
//! The [`grid`], [`list`] and [`tree`] modules hold independent exercises
//! that do not use the search core.
//!
//! [`binary_search`]: crate::binary_search
mod bound;
mod closest;
mod error;
mod search;

pub mod grid;
pub mod list;
pub mod tree;

pub use bound::{
	equal_range, equal_range_by, find_leftmost, find_leftmost_by, find_rightmost,
	find_rightmost_by, lower_bound, lower_bound_by, upper_bound, upper_bound_by,
};
pub use closest::{find_closest, find_closest_by, find_k_closest, find_k_closest_by, Distance};
pub use error::{Error, Result};
pub use search::{binary_search, binary_search_recursive};
