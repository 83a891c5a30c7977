//! The complete machine: plugboard, rotor stack and reflector.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::{AlphabetError, ConfigError, Result, SettingError};
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// A machine with `num_rotors` slots, the rightmost `num_pawls` of which
/// may hold moving rotors. Slot 0 is the reflector.
///
/// The machine owns its pool of available rotors. Inserting rotors copies
/// them out of the pool, so every slot carries its own setting and two
/// machines built from one configuration never share state.
#[derive(Debug, Clone)]
pub struct Machine {
	alphabet: Arc<Alphabet>,
	num_rotors: usize,
	num_pawls: usize,
	pool: Vec<Rotor>,
	slots: Vec<Rotor>,
	plugboard: Permutation,
}

impl Machine {
	/// Requires `1 < num_rotors`, `num_pawls < num_rotors`, and every pool
	/// rotor wired over `alphabet`.
	pub fn new(alphabet: Arc<Alphabet>, num_rotors: usize, num_pawls: usize, pool: Vec<Rotor>) -> std::result::Result<Machine, ConfigError> {
		if num_rotors < 2 || num_pawls >= num_rotors {
			return Err(ConfigError::BadSlotCounts { rotors: num_rotors, pawls: num_pawls });
		}
		if let Some(rotor) = pool.iter().find(|r| **r.alphabet() != *alphabet) {
			return Err(ConfigError::AlphabetMismatch(format!("rotor {:?}", rotor.name())));
		}
		let plugboard = Permutation::identity(alphabet.clone());
		Ok(Machine {
			alphabet,
			num_rotors,
			num_pawls,
			pool,
			slots: Vec::with_capacity(num_rotors),
			plugboard,
		})
	}

	pub fn alphabet(&self) -> &Arc<Alphabet> {
		&self.alphabet
	}

	pub fn num_rotors(&self) -> usize {
		self.num_rotors
	}

	pub fn num_pawls(&self) -> usize {
		self.num_pawls
	}

	pub fn pool(&self) -> &[Rotor] {
		&self.pool
	}

	/// Rotors currently in the slots, left to right.
	pub fn rotors(&self) -> &[Rotor] {
		&self.slots
	}

	pub fn plugboard(&self) -> &Permutation {
		&self.plugboard
	}

	/// Fill the slots with the rotors named by `names`, reflector first.
	/// Every inserted rotor starts at setting 0. The current slots are
	/// left alone unless the whole list is acceptable.
	pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
		self.slots = self.select(names)?;
		Ok(())
	}

	/// Set slots `1..num_rotors` from the characters of `setting`, left to
	/// right. The reflector is never set. Nothing changes on error.
	pub fn set_rotors(&mut self, setting: &str) -> Result<()> {
		self.loaded()?;
		let posns = self.positions_of(setting)?;
		Machine::turn_to(&mut self.slots, posns);
		Ok(())
	}

	/// Replace the plugboard. The identity permutation means no plugs.
	pub fn set_plugboard(&mut self, plugboard: Permutation) -> Result<()> {
		self.check_plugboard(&plugboard)?;
		self.plugboard = plugboard;
		Ok(())
	}

	/// Insert rotors, set them and replace the plugboard in one go. Either
	/// all three happen or the machine is left as it was.
	pub fn load<S: AsRef<str>>(&mut self, names: &[S], setting: &str, plugboard: Permutation) -> Result<()> {
		let mut slots = self.select(names)?;
		let posns = self.positions_of(setting)?;
		self.check_plugboard(&plugboard)?;
		Machine::turn_to(&mut slots, posns);
		self.slots = slots;
		self.plugboard = plugboard;
		Ok(())
	}

	fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Rotor>> {
		if names.len() != self.num_rotors {
			return Err(ConfigError::WrongRotorCount { expected: self.num_rotors, found: names.len() }.into());
		}

		let mut slots: Vec<Rotor> = Vec::with_capacity(self.num_rotors);
		for name in names {
			let name = name.as_ref();
			if slots.iter().any(|r| r.is_named(name)) {
				return Err(SettingError::DuplicateRotor(name.to_string()).into());
			}
			let rotor = self.pool
				.iter()
				.find(|r| r.is_named(name))
				.ok_or_else(|| ConfigError::UnknownRotor(name.to_string()))?;
			let mut rotor = rotor.clone();
			rotor.set(0);
			slots.push(rotor);
		}

		let reflector = &slots[0];
		if !reflector.reflecting() {
			return Err(ConfigError::NotAReflector(reflector.name().to_string()).into());
		}
		if !reflector.permutation().derangement() {
			return Err(ConfigError::NotADerangement(reflector.name().to_string()).into());
		}
		let fixed = self.num_rotors - self.num_pawls;
		for (slot, rotor) in slots.iter().enumerate().take(fixed) {
			if rotor.rotates() {
				return Err(ConfigError::RotatingInFixedSlot { name: rotor.name().to_string(), slot }.into());
			}
		}
		Ok(slots)
	}

	fn positions_of(&self, setting: &str) -> std::result::Result<Vec<usize>, SettingError> {
		let expected = self.num_rotors - 1;
		let found = setting.chars().count();
		if found != expected {
			return Err(SettingError::WrongLength { expected, found });
		}
		setting
			.chars()
			.map(|c| self.alphabet.to_int(c).map_err(|_| SettingError::NotInAlphabet(c)))
			.collect()
	}

	fn turn_to(slots: &mut [Rotor], posns: Vec<usize>) {
		for (rotor, posn) in slots[1..].iter_mut().zip(posns) {
			rotor.set(posn as isize);
		}
	}

	fn check_plugboard(&self, plugboard: &Permutation) -> std::result::Result<(), ConfigError> {
		if **plugboard.alphabet() != *self.alphabet {
			return Err(ConfigError::AlphabetMismatch("plugboard".to_string()));
		}
		Ok(())
	}

	/// Current settings of slots `1..num_rotors` as window letters.
	pub fn positions(&self) -> String {
		self.slots.iter().skip(1).map(Rotor::window).collect()
	}

	/// Step the rotors, then send contact `c` through the machine and
	/// return the contact it comes out on.
	pub fn convert(&mut self, c: usize) -> Result<usize> {
		self.loaded()?;
		let size = self.alphabet.size();
		if c >= size {
			return Err(AlphabetError::OutOfRange { index: c, size }.into());
		}
		self.step();
		Ok(self.substitute(c))
	}

	/// Convert a single character.
	pub fn convert_char(&mut self, c: char) -> Result<char> {
		let index = self.alphabet.to_int(c)?;
		let out = self.convert(index)?;
		Ok(self.alphabet.to_char(out)?)
	}

	/// Convert `msg` one character at a time. Rotor motion carries over from
	/// character to character. Every character is checked first, so a bad
	/// message leaves the rotors where they were.
	pub fn convert_str(&mut self, msg: &str) -> Result<String> {
		self.loaded()?;
		let indices = msg
			.chars()
			.map(|c| self.alphabet.to_int(c))
			.collect::<std::result::Result<Vec<_>, _>>()?;

		let mut result = String::with_capacity(msg.len());
		for index in indices {
			self.step();
			let out = self.substitute(index);
			result.push(self.alphabet.to_char(out)?);
		}
		Ok(result)
	}

	fn loaded(&self) -> std::result::Result<(), SettingError> {
		if self.slots.len() == self.num_rotors {
			Ok(())
		} else {
			Err(SettingError::NotLoaded)
		}
	}

	/// Decide every slot's motion from the settings before anything moves,
	/// then move. A slot carried by the notch on its right also pushes that
	/// neighbour along, which gives the double step.
	fn step(&mut self) {
		let n = self.num_rotors;
		let mut moves = vec![false; n];
		moves[n - 1] = true;
		for i in (0..n - 1).rev() {
			if self.slots[i].rotates() && self.slots[i + 1].at_notch() {
				moves[i] = true;
				moves[i + 1] = true;
			}
		}
		for i in n - self.num_pawls..n {
			if moves[i] {
				self.slots[i].advance();
			}
		}
	}

	fn substitute(&self, c: usize) -> usize {
		let mut result = self.plugboard.permute(c as isize);
		for rotor in self.slots.iter().rev() {
			result = rotor.convert_forward(result);
		}
		for rotor in &self.slots[1..] {
			result = rotor.convert_backward(result);
		}
		self.plugboard.permute(result as isize)
	}
}
