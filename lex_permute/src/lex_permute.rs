//! Lexicographic permutations, generated in place.
//!
//! [`next_permutation`] and [`next_permutation_by`] rearrange a slice into
//! the next arrangement in lexicographic order, or report
//! [`Step::Exhausted`] once the slice is non-increasing. Runs of equal
//! elements are never permuted among themselves, so a multiset yields each
//! distinct arrangement exactly once.
//!
//! [`permutations_of`] walks every arrangement starting from the sorted
//! one, rearranging the caller's slice. This is the default: nothing is
//! allocated per step. [`snapshots_of`] works on a private copy instead and
//! yields each arrangement as its own `Vec`. Both can be reset to start over.
//!
//! ```
//! use lex_permute::permutations_of;
//!
//! let mut items = [3, 1, 2];
//! let mut perms = permutations_of(&mut items);
//! let mut seen = vec![];
//! while let Some(perm) = perms.next() { seen.push(perm.to_vec()) }
//! assert_eq!(seen.len(), 6);
//! assert_eq!(seen[1], [1, 3, 2]);
//! ```

mod compare;
mod count;
mod error;
mod iter;
mod next;

pub use compare::{Comparator, Natural};
pub use count::{distinct_permutations, distinct_permutations_by};
pub use error::Error;
pub use iter::{
	permutations_of,
	permutations_of_by,
	snapshots_of,
	snapshots_of_by,
	Permutations,
	Snapshots,
};
pub use next::{next_permutation, next_permutation_by, try_next_permutation_by, Step};
