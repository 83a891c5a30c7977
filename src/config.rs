//! Plaintext machine configuration.
//!
//! ```text
//! A-Z 5 3
//! I     MQ  (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! Beta  N   (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B     R   (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
//! ```
//!
//! Tokens are separated by any whitespace. The alphabet comes first, then
//! the number of rotor slots and of pawls, then any number of rotors as
//! `NAME TYPE CYCLES...`. TYPE is `M` followed by the notch letters, `N`
//! for a fixed rotor or `R` for a reflector.

use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::alphabet::Alphabet;
use crate::error::{ConfigError, Result};
use crate::machine::Machine;
use crate::permutation::Permutation;
use crate::rotor::Rotor;

/// Decoded configuration: everything needed to build a [`Machine`].
#[derive(Debug, Clone)]
pub struct Config {
	pub alphabet: Arc<Alphabet>,
	pub num_rotors: usize,
	pub num_pawls: usize,
	pub rotors: Vec<Rotor>,
}

impl Config {
	pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
		let text = fs::read_to_string(path.as_ref())?;
		debug!("Read configuration from {}", path.as_ref().display());
		Ok(Config::parse(&text)?)
	}

	pub fn parse(text: &str) -> std::result::Result<Config, ConfigError> {
		let mut tokens = text.split_whitespace().peekable();

		let alphabet: Alphabet = tokens.next().ok_or(ConfigError::Truncated("alphabet"))?.parse()?;
		let alphabet = Arc::new(alphabet);
		let num_rotors = integer(tokens.next(), "number of rotors")?;
		let num_pawls = integer(tokens.next(), "number of pawls")?;
		if num_rotors < 2 || num_pawls >= num_rotors {
			return Err(ConfigError::BadSlotCounts { rotors: num_rotors, pawls: num_pawls });
		}

		let mut rotors: Vec<Rotor> = Vec::new();
		while tokens.peek().is_some() {
			let rotor = read_rotor(&mut tokens, &alphabet)?;
			if rotors.iter().any(|r| r.is_named(rotor.name())) {
				return Err(ConfigError::DuplicateRotor(rotor.name().to_string()));
			}
			debug!("Loaded rotor {} ({:?})", rotor.name(), rotor.kind());
			rotors.push(rotor);
		}

		info!(
			"Configured {} rotors over {} ({} slots, {} pawls)",
			rotors.len(),
			alphabet,
			num_rotors,
			num_pawls
		);
		Ok(Config { alphabet, num_rotors, num_pawls, rotors })
	}

	pub fn build_machine(&self) -> std::result::Result<Machine, ConfigError> {
		Machine::new(self.alphabet.clone(), self.num_rotors, self.num_pawls, self.rotors.clone())
	}
}

fn integer(token: Option<&str>, what: &'static str) -> std::result::Result<usize, ConfigError> {
	let token = token.ok_or(ConfigError::Truncated(what))?;
	token.parse().map_err(|_| ConfigError::BadInteger(token.to_string()))
}

fn read_rotor<'a, I>(tokens: &mut Peekable<I>, alphabet: &Arc<Alphabet>) -> std::result::Result<Rotor, ConfigError>
where
	I: Iterator<Item = &'a str>,
{
	let name = tokens.next().ok_or(ConfigError::Truncated("rotor name"))?;
	let tag = tokens.next().ok_or(ConfigError::Truncated("rotor type"))?;

	let mut cycles = String::new();
	while let Some(cycle) = tokens.next_if(|t| t.starts_with('(')) {
		cycles.push_str(cycle);
		cycles.push(' ');
	}
	let perm = Permutation::new(&cycles, alphabet.clone())?;

	let mut tag_chars = tag.chars();
	match tag_chars.next() {
		Some('M') => Rotor::moving(name, perm, tag_chars.as_str()),
		Some('N') if tag.len() == 1 => Ok(Rotor::fixed(name, perm)),
		Some('R') if tag.len() == 1 => Ok(Rotor::reflector(name, perm)),
		_ => Err(ConfigError::BadRotorType { name: name.to_string(), tag: tag.to_string() }),
	}
}
