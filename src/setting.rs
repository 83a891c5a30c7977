//! Per-message setting directives.
//!
//! `* B BETA III IV I AXLE (HQ) (EX) (IP) (TR) (BY)` names the rotors to
//! insert (reflector first), their initial positions, and the plugboard.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::{Result, SettingError};
use crate::machine::Machine;
use crate::permutation::Permutation;
use crate::rotor::same_name;

const MARKER: char = '*';

#[derive(Debug, Clone)]
pub struct Setting {
	pub rotors: Vec<String>,
	pub positions: String,
	pub plugboard: Permutation,
}

/// True iff `line` is a setting directive rather than message text.
pub fn is_directive(line: &str) -> bool {
	line.trim_start().starts_with(MARKER)
}

impl Setting {
	pub fn parse(line: &str, num_rotors: usize, alphabet: &Arc<Alphabet>) -> Result<Setting> {
		let body = line
			.trim_start()
			.strip_prefix(MARKER)
			.ok_or_else(|| SettingError::MissingMarker(line.to_string()))?;
		let mut tokens = body.split_whitespace();

		let rotors: Vec<String> = tokens.by_ref().take(num_rotors).map(str::to_string).collect();
		let positions = match tokens.next() {
			Some(p) => p.to_string(),
			// a short name list leaves the positions as the last token read
			None => match rotors.last() {
				Some(last) if rotors.len() == num_rotors && !looks_like_positions(last, num_rotors, alphabet) => {
					return Err(SettingError::MissingSetting.into());
				}
				Some(_) => {
					let found = rotors.len() - 1;
					return Err(SettingError::WrongRotorCount { expected: num_rotors, found }.into());
				}
				None => return Err(SettingError::WrongRotorCount { expected: num_rotors, found: 0 }.into()),
			},
		};

		for (i, name) in rotors.iter().enumerate() {
			if rotors[..i].iter().any(|other| same_name(other, name)) {
				return Err(SettingError::DuplicateRotor(name.clone()).into());
			}
		}

		let expected = num_rotors.saturating_sub(1);
		let found = positions.chars().count();
		if found != expected {
			return Err(SettingError::WrongLength { expected, found }.into());
		}
		if let Some(c) = positions.chars().find(|&c| !alphabet.contains(c)) {
			return Err(SettingError::NotInAlphabet(c).into());
		}

		let plugs: Vec<&str> = tokens.collect();
		let plugboard = Permutation::new(&plugs.join(" "), alphabet.clone())?;
		if let Some(cycle) = plugboard.cycles().iter().find(|c| c.len() != 2) {
			let text: String = cycle.iter().filter_map(|&i| alphabet.to_char(i).ok()).collect();
			return Err(SettingError::NotAPair(text).into());
		}

		Ok(Setting { rotors, positions, plugboard })
	}

	/// Load `machine` with this setting. On error the machine keeps its
	/// previous rotors, positions and plugboard.
	pub fn apply(&self, machine: &mut Machine) -> Result<()> {
		machine.load(&self.rotors, &self.positions, self.plugboard.clone())
	}
}

fn looks_like_positions(token: &str, num_rotors: usize, alphabet: &Alphabet) -> bool {
	token.chars().count() == num_rotors.saturating_sub(1) && token.chars().all(|c| alphabet.contains(c))
}
