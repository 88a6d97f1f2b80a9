use std::cmp::Ordering::{self, Less};
use std::convert::Infallible;

/// Outcome of a single advance.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub enum Step {
	/// The slice now holds the next arrangement.
	Advanced,
	/// The slice was already in its last (non-increasing) arrangement
	/// and has not been touched.
	Exhausted,
}

impl Step {
	pub fn is_advanced(self) -> bool {
		self == Step::Advanced
	}
}

/// Rearranges `items` into the lexicographically next arrangement under
/// their natural order.
///
/// Equal elements are treated as a non-increasing run, so a multiset is
/// enumerated without repeats. Slices shorter than 2 are always exhausted.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> Step {
	next_permutation_by(items, T::cmp)
}

/// Like [`next_permutation`], with every comparison made by `compare`.
///
/// Elements that compare equal are interchangeable to the algorithm, so
/// their relative order is not preserved from one arrangement to the
/// next. A panic in `compare` unwinds to the caller.
pub fn next_permutation_by<T, F>(items: &mut [T], mut compare: F) -> Step
where F: FnMut(&T, &T) -> Ordering
{
	match try_next_permutation_by(items, |a, b| Ok::<_, Infallible>(compare(a, b))) {
		Ok(step) => step,
		Err(never) => match never {},
	}
}

/// Like [`next_permutation_by`] for a comparator that can fail.
///
/// The first error is returned as is. Every comparison happens before
/// any element moves, so on error `items` is left as it was.
pub fn try_next_permutation_by<T, E, F>(
	items: &mut [T],
	mut compare: F
) -> Result<Step, E>
where F: FnMut(&T, &T) -> Result<Ordering, E>
{
	let len = items.len();
	if len < 2 { return Ok(Step::Exhausted) }

	// find the start of the longest non-increasing suffix
	let last = len - 1;
	let mut pivot = last - 1;
	while compare(&items[pivot], &items[pivot + 1])? != Less {
		if pivot == 0 { return Ok(Step::Exhausted) }

		pivot -= 1;
	}

	// items[pivot + 1] is known to be greater, so the scan stops there
	let mut successor = last;
	while successor > pivot + 1 &&
		compare(&items[pivot], &items[successor])? != Less
	{
		successor -= 1;
	}
	items.swap(pivot, successor);
	items[(pivot + 1)..].reverse();
	Ok(Step::Advanced)
}
