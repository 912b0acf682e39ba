//! Binary tree reconstruction from its preorder and inorder traversals.
use std::{collections::HashMap, fmt, hash::Hash};

use crate::{Error, Result};

/// Owned subtree: `None` is the empty tree.
pub type Tree<T> = Option<Box<TreeNode<T>>>;

/// Binary tree node.
///
/// Dropping, cloning and comparing trees never recurse, so arbitrarily deep
/// trees are fine. `Debug` output does recurse as deep as the tree.
#[derive(Debug)]
pub struct TreeNode<T> {
	pub val: T,
	pub left: Tree<T>,
	pub right: Tree<T>,
}

impl<T> TreeNode<T> {
	#[inline]
	pub fn new(val: T) -> Self {
		Self {
			val,
			left: None,
			right: None,
		}
	}

	#[inline]
	pub fn children(&self) -> impl Iterator<Item = &TreeNode<T>> {
		[self.left.as_deref(), self.right.as_deref()]
			.into_iter()
			.flatten()
	}

	/// Values of the tree, level by level, each level from left to right.
	pub fn levels(&self) -> Vec<Vec<&T>> {
		let mut levels = Vec::new();
		let mut current = vec![self];
		while !current.is_empty() {
			levels.push(current.iter().map(|&node| &node.val).collect());
			current = current.iter().flat_map(|&node| node.children()).collect();
		}

		levels
	}

	pub fn preorder(&self) -> Vec<&T> {
		let mut values = Vec::new();
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			values.push(&node.val);
			stack.extend(node.right.as_deref());
			stack.extend(node.left.as_deref());
		}

		values
	}

	pub fn inorder(&self) -> Vec<&T> {
		let mut values = Vec::new();
		let mut stack = Vec::new();
		let mut node = Some(self);
		loop {
			while let Some(n) = node {
				stack.push(n);
				node = n.left.as_deref();
			}

			match stack.pop() {
				Some(n) => {
					values.push(&n.val);
					node = n.right.as_deref();
				}
				None => break values,
			}
		}
	}

	/// Write the tree in the DOT graph description language.
	///
	/// Nodes are numbered in preorder. Requires the `dot` feature.
	#[cfg(feature = "dot")]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		T: fmt::Display,
	{
		write!(f, "digraph tree {{\n\tnode [shape=record];\n")?;

		let mut next_id = 0usize;
		let mut stack: Vec<(&TreeNode<T>, Option<usize>)> = vec![(self, None)];
		while let Some((node, parent)) = stack.pop() {
			let id = next_id;
			next_id += 1;

			writeln!(f, "\tn{} [label=\"{}\"];", id, node.val)?;
			if let Some(parent) = parent {
				writeln!(f, "\tn{} -> n{}", parent, id)?;
			}

			stack.extend(node.right.as_deref().map(|child| (child, Some(id))));
			stack.extend(node.left.as_deref().map(|child| (child, Some(id))));
		}

		write!(f, "}}")
	}
}

impl<T> Drop for TreeNode<T> {
	fn drop(&mut self) {
		// Detach the descendants onto a stack instead of dropping them
		// recursively.
		let mut stack: Vec<Box<TreeNode<T>>> = Vec::new();
		stack.extend(self.left.take());
		stack.extend(self.right.take());
		while let Some(mut node) = stack.pop() {
			stack.extend(node.left.take());
			stack.extend(node.right.take());
		}
	}
}

impl<T: Clone> Clone for TreeNode<T> {
	fn clone(&self) -> Self {
		Self {
			val: self.val.clone(),
			left: clone_subtree(&self.left),
			right: clone_subtree(&self.right),
		}
	}
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
	fn eq(&self, other: &Self) -> bool {
		let mut stack = vec![(self, other)];
		while let Some((a, b)) = stack.pop() {
			if a.val != b.val {
				return false;
			}

			for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
				match (x.as_deref(), y.as_deref()) {
					(Some(x), Some(y)) => stack.push((x, y)),
					(None, None) => (),
					_ => return false,
				}
			}
		}

		true
	}
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T: fmt::Display> fmt::Display for TreeNode<T> {
	/// One line per level.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for level in self.levels() {
			for val in level {
				write!(f, "{} ", val)?;
			}
			writeln!(f)?;
		}

		Ok(())
	}
}

#[derive(Clone, Copy)]
enum Side {
	Left,
	Right,
}

/// Node of a tree under construction, children given by slot index.
struct Slot<T> {
	val: T,
	left: Option<usize>,
	right: Option<usize>,
}

impl<T> Slot<T> {
	fn new(val: T) -> Self {
		Self {
			val,
			left: None,
			right: None,
		}
	}

	fn attach(&mut self, side: Side, child: usize) {
		match side {
			Side::Left => self.left = Some(child),
			Side::Right => self.right = Some(child),
		}
	}
}

/// Link the slots into a tree rooted at the first slot.
///
/// Children must come after their parent, as in preorder.
fn assemble<T>(slots: Vec<Slot<T>>) -> Tree<T> {
	let mut built: Vec<Tree<T>> = (0..slots.len()).map(|_| None).collect();
	for (i, slot) in slots.into_iter().enumerate().rev() {
		let left = slot.left.and_then(|c| built[c].take());
		let right = slot.right.and_then(|c| built[c].take());
		built[i] = Some(Box::new(TreeNode {
			val: slot.val,
			left,
			right,
		}));
	}

	built.into_iter().next().flatten()
}

fn clone_subtree<T: Clone>(tree: &Tree<T>) -> Tree<T> {
	let mut slots = Vec::new();
	let mut stack: Vec<(&TreeNode<T>, Option<(usize, Side)>)> =
		tree.as_deref().map(|root| (root, None)).into_iter().collect();

	while let Some((node, parent)) = stack.pop() {
		let i = slots.len();
		slots.push(Slot::new(node.val.clone()));
		if let Some((p, side)) = parent {
			slots[p].attach(side, i)
		}

		stack.extend(node.right.as_deref().map(|c| (c, Some((i, Side::Right)))));
		stack.extend(node.left.as_deref().map(|c| (c, Some((i, Side::Left)))));
	}

	assemble(slots)
}

/// Rebuild a binary tree from its preorder and inorder traversals.
///
/// Values must be distinct. Empty traversals give the empty tree.
///
/// ```
/// use meguru::tree::build_tree;
///
/// let root = build_tree(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7]).unwrap().unwrap();
/// assert_eq!(root.val, 3);
/// assert_eq!(root.levels(), vec![vec![&3], vec![&9, &20], vec![&15, &7]]);
/// ```
pub fn build_tree<T: Clone + Eq + Hash + fmt::Display>(
	preorder: &[T],
	inorder: &[T],
) -> Result<Tree<T>> {
	if preorder.len() != inorder.len() {
		return Err(Error::TraversalLengthMismatch {
			preorder: preorder.len(),
			inorder: inorder.len(),
		});
	}

	let positions: HashMap<&T, usize> =
		inorder.iter().enumerate().map(|(i, v)| (v, i)).collect();
	let mut slots: Vec<Slot<T>> = Vec::with_capacity(preorder.len());

	// Subtrees still to build: the inorder range they span and where they
	// hang. The left subtree comes first in preorder, so it is pushed last.
	let mut pending: Vec<(usize, usize, Option<(usize, Side)>)> = vec![(0, inorder.len(), None)];
	while let Some((start, end, parent)) = pending.pop() {
		if start == end {
			continue;
		}

		// The subtree root is the next preorder value, and it splits the
		// inorder range into the left and right subtrees.
		let i = slots.len();
		let val = &preorder[i];
		let mid = match positions.get(val) {
			Some(&m) if start <= m && m < end => m,
			_ => return Err(Error::MissingInorderValue(val.to_string())),
		};

		slots.push(Slot::new(val.clone()));
		if let Some((p, side)) = parent {
			slots[p].attach(side, i)
		}

		pending.push((mid + 1, end, Some((i, Side::Right))));
		pending.push((start, mid, Some((i, Side::Left))));
	}

	Ok(assemble(slots))
}
