use std::cmp::Ordering;

/// A three-way order over `T`.
///
/// Must be a strict weak ordering. This is not checked: a malformed
/// comparator yields an unspecified sequence of arrangements, but every
/// arrangement is still a permutation of the input and nothing is
/// indexed out of bounds.
pub trait Comparator<T> {
	fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

/// The natural `Ord` order of `T`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		a.cmp(b)
	}
}
impl<T, F: FnMut(&T, &T) -> Ordering> Comparator<T> for F {
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		self(a, b)
	}
}
