//! Character set of a machine, mapped onto the dense indices `0..size`.

use std::fmt;
use std::str::FromStr;

use crate::error::AlphabetError;

/// An ordered, duplicate-free set of characters.
///
/// Built once from the configuration and shared read-only by every
/// permutation and rotor of a machine. Only the checked constructors can
/// make one, so an alphabet is never empty and never repeats a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
	repr: Repr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr {
	/// Contiguous run of code points, `first..=last`.
	Range { first: char, last: char },
	/// Arbitrary characters in the order given.
	Explicit(Vec<char>),
}

/// The usual `A-Z`.
pub fn upper() -> Alphabet {
	Alphabet { repr: Repr::Range { first: 'A', last: 'Z' } }
}

impl Alphabet {
	pub fn range(first: char, last: char) -> Result<Alphabet, AlphabetError> {
		if last < first {
			return Err(AlphabetError::BadRange { first, last });
		}
		// a range spanning the surrogate gap has holes in it
		if (first as u32) < 0xD800 && (last as u32) > 0xDFFF {
			return Err(AlphabetError::BadRange { first, last });
		}
		Ok(Alphabet { repr: Repr::Range { first, last } })
	}

	pub fn explicit(chars: &str) -> Result<Alphabet, AlphabetError> {
		let mut seen: Vec<char> = Vec::new();
		for c in chars.chars() {
			if seen.contains(&c) {
				return Err(AlphabetError::Duplicate(c));
			}
			seen.push(c);
		}
		if seen.is_empty() {
			return Err(AlphabetError::Empty);
		}
		Ok(Alphabet { repr: Repr::Explicit(seen) })
	}

	pub fn size(&self) -> usize {
		match &self.repr {
			Repr::Range { first, last } => (*last as usize) - (*first as usize) + 1,
			Repr::Explicit(chars) => chars.len(),
		}
	}

	pub fn contains(&self, c: char) -> bool {
		match &self.repr {
			Repr::Range { first, last } => (*first..=*last).contains(&c),
			Repr::Explicit(chars) => chars.contains(&c),
		}
	}

	pub fn to_char(&self, index: usize) -> Result<char, AlphabetError> {
		let size = self.size();
		if index >= size {
			return Err(AlphabetError::OutOfRange { index, size });
		}
		match &self.repr {
			Repr::Range { first, .. } => char::from_u32(*first as u32 + index as u32)
				.ok_or(AlphabetError::OutOfRange { index, size }),
			Repr::Explicit(chars) => Ok(chars[index]),
		}
	}

	pub fn to_int(&self, c: char) -> Result<usize, AlphabetError> {
		match &self.repr {
			Repr::Range { first, last } if (*first..=*last).contains(&c) => Ok(c as usize - *first as usize),
			Repr::Explicit(chars) => chars
				.iter()
				.position(|&x| x == c)
				.ok_or(AlphabetError::NotInAlphabet(c)),
			_ => Err(AlphabetError::NotInAlphabet(c)),
		}
	}

	/// `c` itself if it belongs to the alphabet, else its uppercase form.
	pub fn fold(&self, c: char) -> Result<char, AlphabetError> {
		if self.contains(c) {
			return Ok(c);
		}
		let mut up = c.to_uppercase();
		match (up.next(), up.next()) {
			(Some(u), None) if self.contains(u) => Ok(u),
			_ => Err(AlphabetError::NotInAlphabet(c)),
		}
	}

	pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
		(0..self.size()).filter_map(move |i| self.to_char(i).ok())
	}
}

impl FromStr for Alphabet {
	type Err = AlphabetError;

	/// `X-Y` is a range, anything else an explicit sequence.
	fn from_str(s: &str) -> Result<Alphabet, AlphabetError> {
		let chars: Vec<char> = s.chars().collect();
		match chars.as_slice() {
			[first, '-', last] => Alphabet::range(*first, *last),
			_ => Alphabet::explicit(s),
		}
	}
}

impl fmt::Display for Alphabet {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match &self.repr {
			Repr::Range { first, last } => write!(f, "{}-{}", first, last),
			Repr::Explicit(chars) => chars.iter().try_for_each(|c| write!(f, "{}", c)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_range() {
		let a = upper();
		assert_eq!(a.size(), 26);
		assert!(a.contains('A'));
		assert!(a.contains('Z'));
		assert!(!a.contains('a'));
		assert_eq!(a.to_int('E').unwrap(), 4);
		assert_eq!(a.to_char(23).unwrap(), 'X');
		assert_eq!(a.to_char(26), Err(AlphabetError::OutOfRange { index: 26, size: 26 }));
		assert_eq!(a.to_int('!'), Err(AlphabetError::NotInAlphabet('!')));
	}

	#[test]
	fn test_explicit() {
		let a = Alphabet::explicit("ZYX.1").unwrap();
		assert_eq!(a.size(), 5);
		assert_eq!(a.to_int('.').unwrap(), 3);
		assert_eq!(a.to_char(0).unwrap(), 'Z');
		assert!(!a.contains('A'));
		assert_eq!(a.to_char(5), Err(AlphabetError::OutOfRange { index: 5, size: 5 }));
		assert_eq!(Alphabet::explicit("ABA"), Err(AlphabetError::Duplicate('A')));
		assert_eq!(Alphabet::explicit(""), Err(AlphabetError::Empty));
	}

	#[test]
	fn test_round_trip_indices() {
		for a in [upper(), Alphabet::explicit("QWERTZ").unwrap()] {
			for i in 0..a.size() {
				assert_eq!(a.to_int(a.to_char(i).unwrap()).unwrap(), i);
			}
		}
	}

	#[test]
	fn test_parse() {
		assert_eq!("A-Z".parse::<Alphabet>().unwrap(), upper());
		assert_eq!("a-c".parse::<Alphabet>().unwrap().size(), 3);
		assert_eq!("ABCD".parse::<Alphabet>().unwrap(), Alphabet::explicit("ABCD").unwrap());
		assert_eq!("ABCD".parse::<Alphabet>().unwrap().to_string(), "ABCD");
		assert_eq!("Z-A".parse::<Alphabet>(), Err(AlphabetError::BadRange { first: 'Z', last: 'A' }));
		assert_eq!("".parse::<Alphabet>(), Err(AlphabetError::Empty));
		assert_eq!(upper().to_string(), "A-Z");
	}

	#[test]
	fn test_fold() {
		let a = upper();
		assert_eq!(a.fold('q').unwrap(), 'Q');
		assert_eq!(a.fold('Q').unwrap(), 'Q');
		assert!(a.fold('1').is_err());
		let mixed = Alphabet::explicit("abcXYZ").unwrap();
		assert_eq!(mixed.fold('a').unwrap(), 'a');
		assert_eq!(mixed.fold('x').unwrap(), 'X');
	}
}
