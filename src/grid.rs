//! Distance-to-nearest-gate flood fill.
use std::collections::VecDeque;

use log::trace;

use crate::{Error, Result};

/// A wall or an obstacle.
pub const WALL: i32 = -1;

/// A gate.
pub const GATE: i32 = 0;

/// An empty room, not (yet) known to reach any gate.
pub const EMPTY: i32 = i32::MAX;

/// Fill each empty room with the number of steps to its nearest gate.
///
/// Steps go up, down, left or right, never through walls. Rooms from which
/// no gate can be reached keep the [`EMPTY`] value. Every row must have the
/// same length.
///
/// ```
/// use meguru::grid::{walls_and_gates, EMPTY, GATE, WALL};
///
/// let mut rooms = vec![
/// 	vec![EMPTY, WALL, GATE, EMPTY],
/// 	vec![EMPTY, EMPTY, EMPTY, WALL],
/// 	vec![EMPTY, WALL, EMPTY, WALL],
/// 	vec![GATE, WALL, EMPTY, EMPTY],
/// ];
///
/// walls_and_gates(&mut rooms).unwrap();
///
/// assert_eq!(
/// 	rooms,
/// 	vec![
/// 		vec![3, -1, 0, 1],
/// 		vec![2, 2, 1, -1],
/// 		vec![1, -1, 2, -1],
/// 		vec![0, -1, 3, 4],
/// 	]
/// );
/// ```
pub fn walls_and_gates(rooms: &mut [Vec<i32>]) -> Result<()> {
	let width = match rooms.first() {
		Some(row) => row.len(),
		None => return Ok(()),
	};

	if let Some((row, cells)) = rooms.iter().enumerate().find(|(_, r)| r.len() != width) {
		return Err(Error::RaggedGrid {
			row,
			len: cells.len(),
			expected: width,
		});
	}

	let height = rooms.len();
	let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
	for (i, row) in rooms.iter().enumerate() {
		for (j, cell) in row.iter().enumerate() {
			if *cell == GATE {
				queue.push_back((i, j))
			}
		}
	}

	trace!("flooding {}x{} grid from {} gates", height, width, queue.len());

	// Rooms are reached in breadth-first order, so the first distance written
	// into a room is the smallest one.
	while let Some((i, j)) = queue.pop_front() {
		let d = rooms[i][j] + 1;
		let neighbours = [
			i.checked_sub(1).map(|i| (i, j)),
			(i + 1 < height).then_some((i + 1, j)),
			j.checked_sub(1).map(|j| (i, j)),
			(j + 1 < width).then_some((i, j + 1)),
		];

		for (ni, nj) in neighbours.into_iter().flatten() {
			if rooms[ni][nj] == EMPTY {
				rooms[ni][nj] = d;
				queue.push_back((ni, nj))
			}
		}
	}

	Ok(())
}
