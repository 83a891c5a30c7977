//! Error types for the simulator.
//!
//! Each layer raises the narrowest error it can: the alphabet only knows
//! about characters and indices, the rotor stack about configuration, and
//! the per-message directive about settings. [`Error`] gathers them for
//! callers that drive a whole session.

use std::io;
use thiserror::Error;

/// Failures when mapping between characters and indices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
	/// Character is not part of the alphabet
	#[error("character {0:?} is not in the alphabet")]
	NotInAlphabet(char),

	/// Index outside `0..size`
	#[error("index {index} out of range for alphabet of size {size}")]
	OutOfRange {
		/// Requested index
		index: usize,
		/// Alphabet size
		size: usize,
	},

	/// No characters at all
	#[error("alphabet is empty")]
	Empty,

	/// Same character listed twice
	#[error("character {0:?} appears twice in the alphabet")]
	Duplicate(char),

	/// Range whose end precedes its start
	#[error("bad character range {first:?}-{last:?}")]
	BadRange {
		/// First character
		first: char,
		/// Last character
		last: char,
	},
}

/// Failures in the description or assembly of the rotor stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	/// Name not found in the rotor pool
	#[error("rotor {0:?} does not exist")]
	UnknownRotor(String),

	/// Slot 0 holds something other than a reflector
	#[error("first rotor {0:?} is not a reflector")]
	NotAReflector(String),

	/// Wrong number of rotors for the machine's slots
	#[error("machine has {expected} rotor slots, {found} rotors given")]
	WrongRotorCount {
		/// Slots in the machine
		expected: usize,
		/// Names supplied
		found: usize,
	},

	/// Moving rotor placed outside the pawl slots
	#[error("rotor {name:?} rotates but slot {slot} has no pawl")]
	RotatingInFixedSlot {
		/// Offending rotor
		name: String,
		/// Slot index
		slot: usize,
	},

	/// Reflector wiring with a fixed point
	#[error("reflector {0:?} is not a derangement")]
	NotADerangement(String),

	/// Cycle markers do not pair up
	#[error("unbalanced cycle in {0:?}")]
	UnbalancedCycle(String),

	/// Character used by more than one cycle position
	#[error("character {0:?} appears more than once in the cycles")]
	DuplicateCycleCharacter(char),

	/// Non-whitespace outside any cycle
	#[error("character {0:?} outside of a cycle")]
	StrayCharacter(char),

	/// Impossible rotor or pawl count
	#[error("cannot build a machine with {rotors} rotors and {pawls} pawls")]
	BadSlotCounts {
		/// Rotor slots
		rotors: usize,
		/// Pawls
		pawls: usize,
	},

	/// Configuration ended early
	#[error("configuration truncated: expected {0}")]
	Truncated(&'static str),

	/// Rotor type tag was not M, N or R
	#[error("rotor {name:?} has unknown type {tag:?}")]
	BadRotorType {
		/// Rotor name
		name: String,
		/// Tag as written
		tag: String,
	},

	/// Moving rotor declared without notches
	#[error("moving rotor {0:?} has no notches")]
	NoNotches(String),

	/// Two rotors share a name
	#[error("rotor {0:?} is defined twice")]
	DuplicateRotor(String),

	/// Rotor or plugboard wired over a different alphabet
	#[error("{0} does not use the machine's alphabet")]
	AlphabetMismatch(String),

	/// Count field was not an integer
	#[error("expected a number, found {0:?}")]
	BadInteger(String),

	/// Character problem inside the configuration
	#[error(transparent)]
	Alphabet(#[from] AlphabetError),
}

/// Failures in a per-message setting directive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
	/// Setting string has the wrong number of characters
	#[error("setting must have {expected} characters, found {found}")]
	WrongLength {
		/// `numRotors - 1`
		expected: usize,
		/// Characters given
		found: usize,
	},

	/// Setting character outside the alphabet
	#[error("setting character {0:?} is not in the alphabet")]
	NotInAlphabet(char),

	/// Directive names too few rotors
	#[error("setting names {found} rotors, machine needs {expected}")]
	WrongRotorCount {
		/// Slots in the machine
		expected: usize,
		/// Names supplied
		found: usize,
	},

	/// Same rotor asked for twice
	#[error("rotor {0:?} is repeated")]
	DuplicateRotor(String),

	/// Directive does not start with `*`
	#[error("setting line must start with '*': {0:?}")]
	MissingMarker(String),

	/// Plugboard cycle with other than two characters
	#[error("plugboard cycle {0:?} is not a pair")]
	NotAPair(String),

	/// Directive names the rotors but gives no setting
	#[error("setting line has no initial positions")]
	MissingSetting,

	/// Message line seen before any directive
	#[error("message before any setting line")]
	NoSetting,

	/// Conversion attempted on an empty machine
	#[error("no rotors inserted")]
	NotLoaded,
}

/// Any error the simulator can report.
#[derive(Error, Debug)]
pub enum Error {
	/// Alphabet mapping failed
	#[error(transparent)]
	Alphabet(#[from] AlphabetError),

	/// Configuration was rejected
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Setting directive was rejected
	#[error(transparent)]
	Setting(#[from] SettingError),

	/// I/O error occurred
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

/// Convenience type alias for Results using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
