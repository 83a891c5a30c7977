//! Substitutions over an alphabet's index space, written in cycle notation.
//!
//! `"(AELT) (BK) (S)"` sends A to E, E to L, L to T and T back to A, swaps
//! B and K, and leaves S and every unlisted character where it is. The
//! notation is tokenized once at construction into disjoint index cycles;
//! a malformed string or a character used twice is rejected there.

use std::fmt;
use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::{AlphabetError, ConfigError};

const OPEN: char = '(';
const CLOSE: char = ')';

#[derive(Debug, Clone)]
pub struct Permutation {
	alphabet: Arc<Alphabet>,
	cycles: Vec<Vec<usize>>,
}

impl Permutation {
	/// Parse `cycles` over `alphabet`. An empty string is the identity.
	pub fn new(cycles: &str, alphabet: Arc<Alphabet>) -> Result<Permutation, ConfigError> {
		let cycles = tokenize(cycles, &alphabet)?;
		Ok(Permutation { alphabet, cycles })
	}

	pub fn identity(alphabet: Arc<Alphabet>) -> Permutation {
		Permutation { alphabet, cycles: Vec::new() }
	}

	pub fn size(&self) -> usize {
		self.alphabet.size()
	}

	pub fn alphabet(&self) -> &Arc<Alphabet> {
		&self.alphabet
	}

	pub fn cycles(&self) -> &[Vec<usize>] {
		&self.cycles
	}

	/// `p` modulo the alphabet size, always in `0..size`.
	pub fn wrap(&self, p: isize) -> usize {
		p.rem_euclid(self.size() as isize) as usize
	}

	/// Successor of `p` in its cycle.
	pub fn permute(&self, p: isize) -> usize {
		let contact = self.wrap(p);
		match self.locate(contact) {
			Some((cycle, j)) => cycle[(j + 1) % cycle.len()],
			None => contact,
		}
	}

	/// Predecessor of `c` in its cycle.
	pub fn invert(&self, c: isize) -> usize {
		let contact = self.wrap(c);
		match self.locate(contact) {
			Some((cycle, j)) => cycle[(j + cycle.len() - 1) % cycle.len()],
			None => contact,
		}
	}

	pub fn permute_char(&self, p: char) -> Result<char, AlphabetError> {
		let index = self.alphabet.to_int(p)?;
		self.alphabet.to_char(self.permute(index as isize))
	}

	pub fn invert_char(&self, c: char) -> Result<char, AlphabetError> {
		let index = self.alphabet.to_int(c)?;
		self.alphabet.to_char(self.invert(index as isize))
	}

	/// True iff nothing maps to itself.
	pub fn derangement(&self) -> bool {
		(0..self.size()).all(|i| self.permute(i as isize) != i)
	}

	fn locate(&self, index: usize) -> Option<(&[usize], usize)> {
		self.cycles.iter().find_map(|cycle| {
			cycle.iter().position(|&x| x == index).map(|j| (cycle.as_slice(), j))
		})
	}
}

/// Split cycle notation into index cycles, checking balance and
/// disjointness.
fn tokenize(text: &str, alphabet: &Alphabet) -> Result<Vec<Vec<usize>>, ConfigError> {
	let mut cycles = Vec::new();
	let mut seen = vec![false; alphabet.size()];
	let mut current: Option<Vec<usize>> = None;

	for c in text.chars() {
		match (c, current.as_mut()) {
			(OPEN, None) => current = Some(Vec::new()),
			(CLOSE, Some(_)) => cycles.extend(current.take()),
			(OPEN, Some(_)) | (CLOSE, None) => {
				return Err(ConfigError::UnbalancedCycle(text.to_string()));
			}
			(c, None) if c.is_whitespace() => {}
			(c, None) => return Err(ConfigError::StrayCharacter(c)),
			(c, Some(_)) if c.is_whitespace() => {
				return Err(ConfigError::UnbalancedCycle(text.to_string()));
			}
			(c, Some(cycle)) => {
				let index = alphabet.to_int(c)?;
				if seen[index] {
					return Err(ConfigError::DuplicateCycleCharacter(c));
				}
				seen[index] = true;
				cycle.push(index);
			}
		}
	}

	if current.is_some() {
		return Err(ConfigError::UnbalancedCycle(text.to_string()));
	}
	// () and (X) contribute nothing
	cycles.retain(|cycle| cycle.len() > 1);
	Ok(cycles)
}

impl fmt::Display for Permutation {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (n, cycle) in self.cycles.iter().enumerate() {
			if n > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", OPEN)?;
			for &i in cycle {
				let c = self.alphabet.to_char(i).map_err(|_| fmt::Error)?;
				write!(f, "{}", c)?;
			}
			write!(f, "{}", CLOSE)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::alphabet::upper;

	const NAVALA: &str = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";

	fn perm(cycles: &str) -> Permutation {
		Permutation::new(cycles, Arc::new(upper())).unwrap()
	}

	#[test]
	fn test_permute_and_invert_chars() {
		let p = perm(NAVALA);
		assert_eq!(p.permute_char('A').unwrap(), 'E');
		assert_eq!(p.permute_char('U').unwrap(), 'A');
		assert_eq!(p.permute_char('S').unwrap(), 'S');
		assert_eq!(p.permute_char('Z').unwrap(), 'J');
		assert_eq!(p.invert_char('E').unwrap(), 'A');
		assert_eq!(p.invert_char('A').unwrap(), 'U');
		assert_eq!(p.invert_char('G').unwrap(), 'F');
		assert!(p.permute_char('a').is_err());
	}

	#[test]
	fn test_wrapping() {
		let p = perm("(BC)");
		assert_eq!(p.wrap(-1), 25);
		assert_eq!(p.wrap(27), 1);
		assert_eq!(p.permute(27), 2);
		assert_eq!(p.permute(-25), 2);
		assert_eq!(p.invert(-24), 1);
		assert_eq!(p.permute(-1), 25);
	}

	#[test]
	fn test_identity() {
		let p = perm("");
		for i in 0..26 {
			assert_eq!(p.permute(i), i as usize);
			assert_eq!(p.invert(i), i as usize);
		}
		assert!(!p.derangement());
	}

	#[test]
	fn test_no_whitespace_between_cycles() {
		let p = perm("(AVOLDRWFIUQ)(BZKSMNHYC) (EGTJPX)");
		assert_eq!(p.permute_char('Q').unwrap(), 'A');
		assert_eq!(p.permute_char('C').unwrap(), 'B');
		assert_eq!(p.to_string(), "(AVOLDRWFIUQ) (BZKSMNHYC) (EGTJPX)");
	}

	#[test]
	fn test_derangement() {
		let reflector = perm("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)");
		assert!(reflector.derangement());
		assert!(!perm(NAVALA).derangement());
		assert!(!perm("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ)").derangement());
	}

	#[test]
	fn test_rejects_malformed() {
		let alpha = Arc::new(upper());
		assert!(matches!(Permutation::new("(AB", alpha.clone()), Err(ConfigError::UnbalancedCycle(_))));
		assert!(matches!(Permutation::new("AB)", alpha.clone()), Err(ConfigError::StrayCharacter('A'))));
		assert!(matches!(Permutation::new("(A(B))", alpha.clone()), Err(ConfigError::UnbalancedCycle(_))));
		assert!(matches!(Permutation::new("(AB) (CA)", alpha.clone()), Err(ConfigError::DuplicateCycleCharacter('A'))));
		assert!(matches!(
			Permutation::new("(A1)", alpha),
			Err(ConfigError::Alphabet(AlphabetError::NotInAlphabet('1')))
		));
	}

	#[test]
	fn test_explicit_alphabet() {
		let alpha = Arc::new(Alphabet::explicit("abcd").unwrap());
		let p = Permutation::new("(ad) (bc)", alpha).unwrap();
		assert_eq!(p.permute(0), 3);
		assert_eq!(p.permute_char('b').unwrap(), 'c');
		assert!(p.derangement());
	}
}
