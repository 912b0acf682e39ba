use meguru::{
	grid::{walls_and_gates, EMPTY, GATE, WALL},
	Error,
};

#[test]
pub fn fill() {
	let mut rooms = vec![
		vec![EMPTY, WALL, GATE, EMPTY],
		vec![EMPTY, EMPTY, EMPTY, WALL],
		vec![EMPTY, WALL, EMPTY, WALL],
		vec![GATE, WALL, EMPTY, EMPTY],
	];

	walls_and_gates(&mut rooms).unwrap();

	assert_eq!(
		rooms,
		vec![
			vec![3, -1, 0, 1],
			vec![2, 2, 1, -1],
			vec![1, -1, 2, -1],
			vec![0, -1, 3, 4],
		]
	);
}

#[test]
pub fn unreachable_rooms_stay_empty() {
	let mut rooms = vec![
		vec![GATE, WALL, EMPTY],
		vec![EMPTY, WALL, EMPTY],
	];

	walls_and_gates(&mut rooms).unwrap();

	assert_eq!(rooms, vec![vec![0, -1, EMPTY], vec![1, -1, EMPTY]]);
}

#[test]
pub fn no_gates() {
	let mut rooms = vec![vec![EMPTY, EMPTY], vec![WALL, EMPTY]];
	let expected = rooms.clone();
	walls_and_gates(&mut rooms).unwrap();
	assert_eq!(rooms, expected);
}

#[test]
pub fn degenerate() {
	let mut rooms: Vec<Vec<i32>> = Vec::new();
	walls_and_gates(&mut rooms).unwrap();
	assert!(rooms.is_empty());

	let mut rooms: Vec<Vec<i32>> = vec![Vec::new(), Vec::new()];
	walls_and_gates(&mut rooms).unwrap();

	let mut rooms = vec![vec![EMPTY, EMPTY, EMPTY, GATE]];
	walls_and_gates(&mut rooms).unwrap();
	assert_eq!(rooms, vec![vec![3, 2, 1, 0]]);
}

#[test]
pub fn nearest_of_two_gates() {
	let mut rooms = vec![vec![GATE, EMPTY, EMPTY, EMPTY, EMPTY, GATE]];
	walls_and_gates(&mut rooms).unwrap();
	assert_eq!(rooms, vec![vec![0, 1, 2, 2, 1, 0]]);
}

#[test]
pub fn ragged() {
	let mut rooms = vec![vec![GATE, EMPTY], vec![EMPTY]];
	assert_eq!(
		walls_and_gates(&mut rooms),
		Err(Error::RaggedGrid {
			row: 1,
			len: 1,
			expected: 2
		})
	);
	assert_eq!(rooms, vec![vec![GATE, EMPTY], vec![EMPTY]]);
}
