extern crate lex_permute;

use lex_permute::*;

#[test]
fn repeated_integers() {
	let mut items = [2, 3, 1, 2];
	let mut perms = permutations_of(&mut items);
	let mut seen = vec![];
	while let Some(perm) = perms.next() { seen.push(perm.to_vec()) }
	assert_eq!(seen, vec![
		vec![1, 2, 2, 3],
		vec![1, 2, 3, 2],
		vec![1, 3, 2, 2],
		vec![2, 1, 2, 3],
		vec![2, 1, 3, 2],
		vec![2, 2, 1, 3],
		vec![2, 2, 3, 1],
		vec![2, 3, 1, 2],
		vec![2, 3, 2, 1],
		vec![3, 1, 2, 2],
		vec![3, 2, 1, 2],
		vec![3, 2, 2, 1],
	]);
	assert_eq!(items, [3, 2, 2, 1]);
}

#[test]
fn letters() {
	let letters: Vec<char> = "mississippi".chars().collect();
	let count = snapshots_of(&letters).count();
	assert_eq!(count, 34_650);
	assert_eq!(distinct_permutations(&letters), Ok(count));
}

#[test]
fn in_place_mutates_source() {
	let mut items = vec![5, 4, 6];
	{
		let mut perms = permutations_of(&mut items);
		perms.next();
	}
	assert_eq!(items, vec![4, 5, 6]);
	{
		let mut perms = permutations_of(&mut items);
		perms.next();
		perms.next();
	}
	assert_eq!(items, vec![4, 6, 5]);
}
