use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use crate::compare::{Comparator, Natural};
use crate::count::count_sorted;
use crate::next::{next_permutation_by, Step};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Cursor {
	First,
	Advancing,
	Exhausted,
}

/// Progress through the arrangements of one working slice.
/// The slice itself is owned or borrowed by the caller of `step`.
struct Walk<C> {
	comparator: C,
	cursor: Cursor,
	total: Option<usize>,
	passed: usize,
}

impl<C> Walk<C> {
	fn start<T>(items: &mut [T], mut comparator: C) -> Self
	where C: Comparator<T>
	{
		items.sort_by(|a, b| comparator.compare(a, b));
		let total =
			count_sorted(items, |a, b| comparator.compare(a, b) == Ordering::Equal).ok();
		Walk { comparator, cursor: Cursor::First, total, passed: 0 }
	}

	/// Moves to the next arrangement of `items`, returning whether there was
	/// one. With `announce_first`, the first call leaves `items` as it is.
	fn step<T>(&mut self, items: &mut [T], announce_first: bool) -> bool
	where C: Comparator<T>
	{
		match self.cursor {
			Cursor::Exhausted => return false,
			Cursor::First => {
				self.cursor = Cursor::Advancing;
				self.passed += 1;
				if announce_first { return true }
			},
			Cursor::Advancing => {},
		}

		let comparator = &mut self.comparator;
		match next_permutation_by(items, |a, b| comparator.compare(a, b)) {
			Step::Advanced => {
				self.passed += 1;
				true
			},
			Step::Exhausted => {
				self.cursor = Cursor::Exhausted;
				tracing::debug!(len = items.len(), passed = self.passed, "permutations exhausted");
				false
			},
		}
	}

	fn restart(&mut self) {
		self.cursor = Cursor::First;
		self.passed = 0;
	}

	fn remaining(&self) -> Option<usize> {
		match self.cursor {
			Cursor::Exhausted => Some(0),
			_ => self.total.map(|total| total.saturating_sub(self.passed)),
		}
	}
}

/// Lexicographic permutations of a borrowed slice, rearranged in place.
///
/// The slice is stably sorted on construction and the first call to
/// [`next`](Permutations::next) yields that sorted arrangement; each later
/// call advances the slice to the next arrangement, up to and including
/// the reverse-sorted one. Every yielded slice is the borrowed slice
/// itself, so it can only be looked at until the next step.
///
/// Elements that compare as equal may swap places between arrangements.
pub struct Permutations<'a, T, C = Natural> {
	items: &'a mut [T],
	walk: Walk<C>,
}

impl<'a, T, C: Comparator<T>> Permutations<'a, T, C> {
	pub fn new(items: &'a mut [T], comparator: C) -> Self {
		let walk = Walk::start(&mut *items, comparator);
		Permutations { items, walk }
	}

	/// The next arrangement, or `None` once all of them have been yielded.
	#[allow(clippy::should_implement_trait)]
	pub fn next(&mut self) -> Option<&[T]> {
		if self.walk.step(&mut *self.items, true) { Some(&*self.items) } else { None }
	}
	/// Advances without yielding the sorted arrangement first, so a fresh
	/// or reset iterator starts from the second arrangement.
	pub fn advance(&mut self) -> Option<&[T]> {
		if self.walk.step(&mut *self.items, false) { Some(&*self.items) } else { None }
	}
	/// Sorts the slice again and starts over from the first arrangement.
	///
	/// Equal elements keep the relative order they have now, which is only
	/// the original order if no two of them are distinguishable.
	pub fn reset(&mut self) {
		let comparator = &mut self.walk.comparator;
		self.items.sort_by(|a, b| comparator.compare(a, b));
		self.walk.restart();
		tracing::trace!(len = self.items.len(), "permutations reset");
	}

	/// The current arrangement. Once exhausted, this is the last one.
	pub fn current(&self) -> &[T] {
		&*self.items
	}
	pub fn is_exhausted(&self) -> bool {
		self.walk.cursor == Cursor::Exhausted
	}
	/// Arrangements still to come, if their count fits in a `usize`.
	pub fn remaining(&self) -> Option<usize> {
		self.walk.remaining()
	}
	pub fn into_inner(self) -> &'a mut [T] {
		self.items
	}
}

impl<T: Debug, C> Debug for Permutations<'_, T, C> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_struct("Permutations")
			.field("items", &self.items)
			.field("cursor", &self.walk.cursor)
			.finish_non_exhaustive()
	}
}

/// Lexicographic permutations yielded as independent copies.
///
/// The input is copied and sorted once; all rearranging happens on a
/// private working copy, so the caller's slice is never touched and a
/// yielded `Vec` can be kept or modified freely.
///
/// Elements that compare as equal may swap places between arrangements.
pub struct Snapshots<T, C = Natural> {
	initial: Vec<T>,
	working: Vec<T>,
	walk: Walk<C>,
}

impl<T: Clone, C: Comparator<T>> Snapshots<T, C> {
	pub fn new(items: &[T], comparator: C) -> Self {
		Self::from_vec(items.to_vec(), comparator)
	}
	pub fn from_vec(mut items: Vec<T>, comparator: C) -> Self {
		let walk = Walk::start(&mut items, comparator);
		let working = items.clone();
		Snapshots { initial: items, working, walk }
	}

	/// Restores the sorted arrangement and starts over.
	/// The permutations that follow are exactly those of the first pass.
	pub fn reset(&mut self) {
		self.working.clone_from(&self.initial);
		self.walk.restart();
		tracing::trace!(len = self.working.len(), "snapshots reset");
	}
}

impl<T, C> Snapshots<T, C> {
	/// The current arrangement. Once exhausted, this is the last one.
	pub fn current(&self) -> &[T] {
		&self.working
	}
	pub fn is_exhausted(&self) -> bool {
		self.walk.cursor == Cursor::Exhausted
	}
	/// Arrangements still to come, if their count fits in a `usize`.
	pub fn remaining(&self) -> Option<usize> {
		self.walk.remaining()
	}
}

impl<T: Clone, C: Comparator<T>> Iterator for Snapshots<T, C> {
	type Item = Vec<T>;

	fn next(&mut self) -> Option<Vec<T>> {
		if self.walk.step(&mut self.working, true) { Some(self.working.clone()) } else { None }
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		match self.remaining() {
			Some(remaining) => (remaining, Some(remaining)),
			None => (0, None),
		}
	}
}
impl<T: Clone, C: Comparator<T>> FusedIterator for Snapshots<T, C> {}

impl<T: Debug, C> Debug for Snapshots<T, C> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_struct("Snapshots")
			.field("working", &self.working)
			.field("cursor", &self.walk.cursor)
			.finish_non_exhaustive()
	}
}

/// Permutations of `items` in their natural order, rearranging `items`.
pub fn permutations_of<T: Ord>(items: &mut [T]) -> Permutations<'_, T> {
	Permutations::new(items, Natural)
}
/// Permutations of `items` ordered by `compare`, rearranging `items`.
pub fn permutations_of_by<T, F>(items: &mut [T], compare: F) -> Permutations<'_, T, F>
where F: FnMut(&T, &T) -> Ordering
{
	Permutations::new(items, compare)
}
/// Permutations of `items` in their natural order, as copies.
pub fn snapshots_of<T: Ord + Clone>(items: &[T]) -> Snapshots<T> {
	Snapshots::new(items, Natural)
}
/// Permutations of `items` ordered by `compare`, as copies.
pub fn snapshots_of_by<T: Clone, F>(items: &[T], compare: F) -> Snapshots<T, F>
where F: FnMut(&T, &T) -> Ordering
{
	Snapshots::new(items, compare)
}
