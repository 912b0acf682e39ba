//! Singly-linked list reversal.
use std::{fmt, iter::FusedIterator};

/// Owned list: `None` is the empty list.
pub type List<T> = Option<Box<ListNode<T>>>;

/// List node.
///
/// Dropping, cloning and comparing lists never recurse. `Debug` output does
/// recurse as deep as the list is long.
#[derive(Debug)]
pub struct ListNode<T> {
	pub val: T,
	pub next: List<T>,
}

impl<T> ListNode<T> {
	#[inline]
	pub fn new(val: T) -> Self {
		Self { val, next: None }
	}

	#[inline]
	pub fn iter(&self) -> Iter<T> {
		Iter { next: Some(self) }
	}
}

/// Build a list holding the given values, in order.
pub fn from_values<T>(values: impl IntoIterator<Item = T>) -> List<T> {
	let values: Vec<T> = values.into_iter().collect();
	let mut head = None;
	for val in values.into_iter().rev() {
		head = Some(Box::new(ListNode { val, next: head }))
	}

	head
}

/// Collect the values of a list, in order.
pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
	match list {
		Some(node) => node.iter().cloned().collect(),
		None => Vec::new(),
	}
}

/// Reverse the list by relinking its nodes one after the other.
pub fn reverse_iterative<T>(mut head: List<T>) -> List<T> {
	let mut prev = None;
	while let Some(mut node) = head {
		head = node.next.take();
		node.next = prev;
		prev = Some(node);
	}

	prev
}

/// Reverse the list by flipping the link of the head and recursing on the
/// tail.
///
/// The recursion is as deep as the list is long.
pub fn reverse_recursive<T>(head: List<T>) -> List<T> {
	fn flip<T>(mut curr: Box<ListNode<T>>, prev: List<T>) -> Box<ListNode<T>> {
		match curr.next.take() {
			Some(next) => {
				curr.next = prev;
				flip(next, Some(curr))
			}
			None => {
				curr.next = prev;
				curr
			}
		}
	}

	head.map(|node| flip(node, None))
}

impl<T> Drop for ListNode<T> {
	fn drop(&mut self) {
		// Unlink the tail node by node instead of dropping it recursively.
		let mut next = self.next.take();
		while let Some(mut node) = next {
			next = node.next.take();
		}
	}
}

impl<T: Clone> Clone for ListNode<T> {
	fn clone(&self) -> Self {
		Self {
			val: self.val.clone(),
			next: from_values(self.iter().skip(1).cloned()),
		}
	}
}

impl<T: PartialEq> PartialEq for ListNode<T> {
	fn eq(&self, other: &Self) -> bool {
		self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for ListNode<T> {}

impl<T: fmt::Display> fmt::Display for ListNode<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for val in self.iter() {
			write!(f, "{}, ", val)?;
		}

		Ok(())
	}
}

pub struct Iter<'a, T> {
	next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		self.next.map(|node| {
			self.next = node.next.as_deref();
			&node.val
		})
	}
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a ListNode<T> {
	type IntoIter = Iter<'a, T>;
	type Item = &'a T;

	#[inline]
	fn into_iter(self) -> Iter<'a, T> {
		self.iter()
	}
}
