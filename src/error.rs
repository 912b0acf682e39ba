/// Result type for fallible queries.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid arguments.
///
/// Not finding an element is never an error: queries return `None` for that.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("cannot select {k} elements out of {len}")]
	NotEnoughElements { k: usize, len: usize },

	#[error("grid row {row} has {len} cells, expected {expected}")]
	RaggedGrid {
		row: usize,
		len: usize,
		expected: usize,
	},

	#[error("preorder has {preorder} values but inorder has {inorder}")]
	TraversalLengthMismatch { preorder: usize, inorder: usize },

	#[error("value {0} of the preorder traversal is missing from the inorder traversal")]
	MissingInorderValue(String),
}
