//! Rotor cipher machine simulator.
//!
//! A [`Machine`] stacks a reflector, fixed rotors and moving rotors behind
//! a plugboard. Each character steps the rotors and then passes through
//! plugboard, rotors right to left, reflector, rotors left to right and the
//! plugboard again, so the same setting both enciphers and deciphers.
//!
//! ```
//! use std::sync::Arc;
//! use enigma::{alphabet, Machine, Permutation, Rotor};
//!
//! let alpha = Arc::new(alphabet::upper());
//! let p = |cycles: &str| Permutation::new(cycles, alpha.clone()).unwrap();
//! let pool = vec![
//! 	Rotor::reflector("B", p("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)")),
//! 	Rotor::fixed("Beta", p("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")),
//! 	Rotor::moving("I", p("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"), "Q").unwrap(),
//! 	Rotor::moving("III", p("(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"), "V").unwrap(),
//! 	Rotor::moving("IV", p("(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)"), "J").unwrap(),
//! ];
//!
//! let mut m = Machine::new(alpha.clone(), 5, 3, pool).unwrap();
//! m.insert_rotors(&["B", "BETA", "III", "IV", "I"]).unwrap();
//! m.set_rotors("AXLE").unwrap();
//! m.set_plugboard(p("(HQ) (EX) (IP) (TR) (BY)")).unwrap();
//! assert_eq!(m.convert_str("FROM").unwrap(), "QVPQ");
//! ```

#![deny(unsafe_code)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod machine;
pub mod message;
pub mod permutation;
pub mod rotor;
pub mod setting;

pub use alphabet::Alphabet;
pub use config::Config;
pub use error::{AlphabetError, ConfigError, Error, Result, SettingError};
pub use machine::Machine;
pub use message::{group_in_fives, process};
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
pub use setting::Setting;
