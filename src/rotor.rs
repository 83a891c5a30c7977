//! Rotors: a fixed wiring turned to some rotational setting.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::{AlphabetError, ConfigError};
use crate::permutation::Permutation;

/// What a rotor can do inside the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
	/// Sends the signal back through the stack; never turns.
	Reflector,
	/// Sits in a non-pawl slot; never turns.
	Fixed,
	/// Turns one position per step; `notches` are indices at which the
	/// neighbour on its left may be carried along.
	Moving { notches: Vec<usize> },
}

#[derive(Debug, Clone)]
pub struct Rotor {
	name: String,
	permutation: Permutation,
	setting: usize,
	kind: RotorKind,
}

impl Rotor {
	pub fn reflector(name: &str, permutation: Permutation) -> Rotor {
		Rotor::with_kind(name, permutation, RotorKind::Reflector)
	}

	pub fn fixed(name: &str, permutation: Permutation) -> Rotor {
		Rotor::with_kind(name, permutation, RotorKind::Fixed)
	}

	/// A moving rotor notched at each character of `notches`.
	pub fn moving(name: &str, permutation: Permutation, notches: &str) -> Result<Rotor, ConfigError> {
		let mut indices = Vec::new();
		for c in notches.chars() {
			let i = permutation.alphabet().to_int(c)?;
			if !indices.contains(&i) {
				indices.push(i);
			}
		}
		if indices.is_empty() {
			return Err(ConfigError::NoNotches(name.to_string()));
		}
		Ok(Rotor::with_kind(name, permutation, RotorKind::Moving { notches: indices }))
	}

	fn with_kind(name: &str, permutation: Permutation, kind: RotorKind) -> Rotor {
		Rotor {
			name: name.to_string(),
			permutation,
			setting: 0,
			kind,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> &RotorKind {
		&self.kind
	}

	pub fn permutation(&self) -> &Permutation {
		&self.permutation
	}

	pub fn alphabet(&self) -> &Arc<Alphabet> {
		self.permutation.alphabet()
	}

	pub fn size(&self) -> usize {
		self.permutation.size()
	}

	pub fn rotates(&self) -> bool {
		matches!(self.kind, RotorKind::Moving { .. })
	}

	pub fn reflecting(&self) -> bool {
		self.kind == RotorKind::Reflector
	}

	pub fn setting(&self) -> usize {
		self.setting
	}

	/// Setting as the letter showing in the window.
	pub fn window(&self) -> char {
		// setting is always wrapped into range
		self.alphabet().to_char(self.setting).unwrap_or('?')
	}

	pub fn set(&mut self, posn: isize) {
		self.setting = self.permutation.wrap(posn);
	}

	pub fn set_char(&mut self, c: char) -> Result<(), AlphabetError> {
		let posn = self.alphabet().to_int(c)?;
		self.setting = posn;
		Ok(())
	}

	/// True iff the rotor on my left should be carried on the next step.
	pub fn at_notch(&self) -> bool {
		match &self.kind {
			RotorKind::Moving { notches } => notches.contains(&self.setting),
			_ => false,
		}
	}

	/// Turn one position. Does nothing to a rotor that cannot turn.
	pub fn advance(&mut self) {
		if self.rotates() {
			self.set(self.setting as isize + 1);
		}
	}

	/// Signal entering from the right at contact `p`.
	pub fn convert_forward(&self, p: usize) -> usize {
		let s = self.setting as isize;
		let contact = self.permutation.permute(p as isize + s);
		self.permutation.wrap(contact as isize - s)
	}

	/// Signal returning from the left at contact `e`.
	pub fn convert_backward(&self, e: usize) -> usize {
		let s = self.setting as isize;
		let contact = self.permutation.invert(e as isize + s);
		self.permutation.wrap(contact as isize - s)
	}

	/// Case-insensitive name match, as used by setting directives.
	pub fn is_named(&self, name: &str) -> bool {
		same_name(&self.name, name)
	}
}

/// Rotor names compare without regard to case.
pub fn same_name(a: &str, b: &str) -> bool {
	a.to_uppercase() == b.to_uppercase()
}
