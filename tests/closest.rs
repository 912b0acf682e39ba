use meguru::{find_closest, find_closest_by, find_k_closest, find_k_closest_by, Error};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SEED: &'static [u8; 32] = b"testseedtestseedtestseedtestseed";

#[test]
pub fn closest_fixtures() {
	let seq = [1, 2, 100, 101, 102];
	assert_eq!(find_closest(&seq, &99), Some(2));
	assert_eq!(find_closest(&seq, &200), Some(4));
	assert_eq!(find_closest(&seq, &10), Some(1));
	assert_eq!(find_closest(&seq, &-1), Some(0));
	assert_eq!(find_closest(&[2, 2, 2], &2).map(|i| [2, 2, 2][i]), Some(2));
	assert_eq!(find_closest(&[1, 2, 2, 2], &2).map(|i| [1, 2, 2, 2][i]), Some(2));
}

#[test]
pub fn closest_tie_goes_to_smaller() {
	assert_eq!(find_closest(&[1, 2, 2, 2, 4, 4, 4], &3), Some(3));
	assert_eq!(find_closest(&[0, 10], &5), Some(0));
	assert_eq!(find_closest(&[-3i64, 3], &0), Some(0));
}

#[test]
pub fn closest_empty() {
	let empty: [u8; 0] = [];
	assert_eq!(find_closest(&empty, &3), None);
}

#[test]
pub fn closest_unsigned_extremes() {
	let seq = [0u64, u64::MAX];
	assert_eq!(find_closest(&seq, &(u64::MAX / 2)), Some(0));
	assert_eq!(find_closest(&seq, &(u64::MAX / 2 + 1)), Some(1));
}

#[test]
pub fn closest_by_float_key() {
	let seq = [0.5f64, 1.25, 3.0, 7.5];
	let cmp = |a: &f64, b: &f64| a.total_cmp(b);
	// Distances in thousandths, so they can be compared with `Ord`.
	let dist = |a: &f64, b: &f64| ((a - b).abs() * 1000.0) as u64;
	assert_eq!(find_closest_by(&seq, cmp, dist, &2.0), Some(1));
	assert_eq!(find_closest_by(&seq, cmp, dist, &2.2), Some(2));
	assert_eq!(find_k_closest_by(&seq, cmp, dist, &2.0, 3), Ok(&seq[0..3]));
}

#[test]
pub fn k_closest_fixtures() {
	let seq = [1, 2, 100, 101, 102];
	assert_eq!(find_k_closest(&seq, &99, 3), Ok(&seq[2..5]));
	assert_eq!(find_k_closest(&seq, &99, 1), Ok(&seq[2..3]));
	assert_eq!(find_k_closest(&seq, &0, 2), Ok(&seq[0..2]));
	assert_eq!(find_k_closest(&seq, &1000, 2), Ok(&seq[3..5]));
	assert_eq!(find_k_closest(&seq, &99, 5), Ok(&seq[..]));
	assert_eq!(find_k_closest(&[1, 2, 3, 4, 5], &3, 4), Ok(&[1, 2, 3, 4][..]));
	assert_eq!(find_k_closest(&[1, 2, 3, 4, 5], &-1, 4), Ok(&[1, 2, 3, 4][..]));
}

#[test]
pub fn k_closest_tie_goes_to_smaller() {
	assert_eq!(find_k_closest(&[1, 3, 5, 7], &4, 1), Ok(&[3][..]));
	assert_eq!(find_k_closest(&[1, 3, 5, 7], &4, 3), Ok(&[1, 3, 5][..]));
	assert_eq!(find_k_closest(&[1, 2, 2, 2, 3], &2, 4), Ok(&[1, 2, 2, 2][..]));
}

#[test]
pub fn k_closest_limits() {
	let seq = [1, 2, 3];
	assert_eq!(find_k_closest(&seq, &2, 0), Ok(&seq[..0]));
	assert_eq!(
		find_k_closest(&seq, &2, 4),
		Err(Error::NotEnoughElements { k: 4, len: 3 })
	);

	let empty: [i32; 0] = [];
	assert_eq!(find_k_closest(&empty, &2, 0), Ok(&empty[..]));
	assert_eq!(
		find_k_closest(&empty, &2, 1),
		Err(Error::NotEnoughElements { k: 1, len: 0 })
	);
}

/// The `k` elements closest to `target`, ties going to smaller elements.
fn k_closest_reference(seq: &[i32], target: i32, k: usize) -> Vec<i32> {
	let mut items = seq.to_vec();
	items.sort_by_key(|&x| (x.abs_diff(target), x));
	items.truncate(k);
	items.sort();
	items
}

#[test]
pub fn k_closest_random() {
	let mut rng = SmallRng::from_seed(*SEED);

	for _ in 0..500 {
		let len = rng.gen_range(1..40);
		let mut seq: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
		seq.sort();

		let target = rng.gen_range(-60..60);
		let k = rng.gen_range(0..=len);

		let window = find_k_closest(&seq, &target, k).unwrap();
		assert_eq!(window.len(), k);
		assert_eq!(window, k_closest_reference(&seq, target, k).as_slice());
	}
}

#[test]
pub fn integer_distances() {
	use meguru::Distance;

	assert_eq!((-3i32).distance(&4), 7u32);
	assert_eq!(i8::MIN.distance(&i8::MAX), u8::MAX);
	assert_eq!(0u64.distance(&u64::MAX), u64::MAX);
	assert_eq!(5usize.distance(&5), 0);
}
