use std::cmp::Ordering::{self, Equal};

use crate::error::Error;

/// Number of distinct arrangements of `items` under their natural order:
/// `n! / (k1! * k2! * ...)` for runs of equal elements of lengths `ki`.
pub fn distinct_permutations<T: Ord>(items: &[T]) -> Result<usize, Error> {
	distinct_permutations_by(items, T::cmp)
}

/// Like [`distinct_permutations`], with elements grouped by `compare`.
pub fn distinct_permutations_by<T, F>(items: &[T], mut compare: F) -> Result<usize, Error>
where F: FnMut(&T, &T) -> Ordering
{
	let mut sorted: Vec<&T> = items.iter().collect();
	sorted.sort_by(|a, b| compare(*a, *b));
	count_sorted(&sorted, |a, b| compare(*a, *b) == Equal)
}

/// Counts the arrangements of an already sorted slice, where `same`
/// tells whether two neighbours belong to the same run.
pub(crate) fn count_sorted<T>(
	sorted: &[T],
	mut same: impl FnMut(&T, &T) -> bool
) -> Result<usize, Error> {
	let overflow = || Error::CountOverflow { len: sorted.len() };
	let mut count: u128 = 1;
	let mut run: u128 = 0;
	for (index, item) in sorted.iter().enumerate() {
		run = if index > 0 && same(&sorted[index - 1], item) { run + 1 } else { 1 };
		let placed = index as u128 + 1;
		// count * C(placed, run) / C(placed - 1, run - 1), always exact
		count = count.checked_mul(placed).ok_or_else(overflow)? / run;
	}
	usize::try_from(count).map_err(|_| overflow())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_small() {
		assert_eq!(distinct_permutations::<i32>(&[]), Ok(1));
		assert_eq!(distinct_permutations(&[9]), Ok(1));
		assert_eq!(distinct_permutations(&[1, 2, 3]), Ok(6));
		assert_eq!(distinct_permutations(&[1, 2, 2, 3]), Ok(12));
		assert_eq!(distinct_permutations(&[3, 2, 1, 2]), Ok(12));
		assert_eq!(distinct_permutations(&['a', 'b', 'a', 'b', 'a']), Ok(10));
	}
	#[test]
	fn test_all_equal() {
		assert_eq!(distinct_permutations(&[0u8; 40]), Ok(1));
	}
	#[test]
	fn test_by_key() {
		let legs = [2, 4, 4, 6];
		assert_eq!(distinct_permutations_by(&legs, |a, b| (a / 4).cmp(&(b / 4))), Ok(4));
		assert_eq!(distinct_permutations_by(&legs, |_, _| Equal), Ok(1));
		assert_eq!(distinct_permutations_by(&legs, |a: &i32, b: &i32| b.cmp(a)), Ok(12));
	}
	#[test]
	#[cfg(target_pointer_width = "64")]
	fn test_overflow() {
		let items: Vec<_> = (0..20).collect();
		assert_eq!(distinct_permutations(&items), Ok(2_432_902_008_176_640_000));
		let items: Vec<_> = (0..21).collect();
		assert_eq!(distinct_permutations(&items), Err(Error::CountOverflow { len: 21 }));
		let items: Vec<_> = (0..60).collect();
		assert_eq!(distinct_permutations(&items), Err(Error::CountOverflow { len: 60 }));
	}
}
