use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
	/// The number of distinct arrangements does not fit in a `usize`.
	#[error("number of permutations of {len} elements overflows usize")]
	CountOverflow { len: usize },
}
