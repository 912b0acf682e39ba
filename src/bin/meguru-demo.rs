//! Runs every query on a few fixed slices and logs the results.
use log::info;
use meguru::{
	find_closest, find_k_closest, find_leftmost, find_rightmost, grid, list, lower_bound, tree,
	upper_bound,
};

fn show(index: Option<usize>) -> String {
	match index {
		Some(i) => i.to_string(),
		None => "-1".to_string(),
	}
}

fn main() -> meguru::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let bound_cases: [(&[i32], i32); 6] = [
		(&[1, 2, 3, 4, 5], 2),
		(&[1, 2, 3, 4, 5], 100),
		(&[1, 2, 3, 4, 5], 0),
		(&[1, 1, 2, 2, 3, 4, 5], 2),
		(&[2, 2, 2], 2),
		(&[2, 2, 2], 1),
	];

	for (seq, target) in bound_cases {
		info!(
			"seq: {:?}, target: {}, lower bound: {}, upper bound: {}",
			seq,
			target,
			show(lower_bound(seq, &target)),
			show(upper_bound(seq, &target))
		);
	}

	let seq = [1, 1, 2, 2, 3, 4, 5];
	for target in [2, 0] {
		info!(
			"seq: {:?}, target: {}, leftmost: {}, rightmost: {}",
			seq,
			target,
			show(find_leftmost(&seq, &target)),
			show(find_rightmost(&seq, &target))
		);
	}

	let closest_cases: [(&[i32], i32); 7] = [
		(&[1, 2, 100, 101, 102], 99),
		(&[1, 2, 100, 101, 102], 200),
		(&[1, 2, 100, 101, 102], 10),
		(&[1, 2, 100, 101, 102], -1),
		(&[2, 2, 2], 2),
		(&[1, 2, 2, 2], 2),
		(&[1, 2, 2, 2, 4, 4, 4], 3),
	];

	for (seq, target) in closest_cases {
		info!(
			"seq: {:?}, target: {}, closest: {}",
			seq,
			target,
			show(find_closest(seq, &target))
		);
	}

	let seq = [1, 2, 100, 101, 102];
	info!(
		"seq: {:?}, target: 99, k: 3, k closest: {:?}",
		seq,
		find_k_closest(&seq, &99, 3)?
	);

	let mut rooms = vec![
		vec![grid::EMPTY, grid::WALL, grid::GATE, grid::EMPTY],
		vec![grid::EMPTY, grid::EMPTY, grid::EMPTY, grid::WALL],
		vec![grid::EMPTY, grid::WALL, grid::EMPTY, grid::WALL],
		vec![grid::GATE, grid::WALL, grid::EMPTY, grid::EMPTY],
	];
	grid::walls_and_gates(&mut rooms)?;
	info!("rooms: {:?}", rooms);

	let values = list::from_values(1..=5);
	if let Some(head) = list::reverse_iterative(values) {
		info!("reversed list: {}", head);
	}

	if let Some(root) = tree::build_tree(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7])? {
		info!("tree levels: {:?}", root.levels());
	}

	Ok(())
}
