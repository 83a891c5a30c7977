#![allow(dead_code)]

use std::sync::Arc;

use enigma::{alphabet, Alphabet, Config, Machine, Permutation, Rotor};

pub const DEFAULT_CONF: &str = include_str!("../../demos/default.conf");

pub fn upper() -> Arc<Alphabet> {
	Arc::new(alphabet::upper())
}

pub fn perm(cycles: &str, alpha: &Arc<Alphabet>) -> Permutation {
	Permutation::new(cycles, alpha.clone()).unwrap()
}

/// Fresh copies of the standard rotors, for one test only.
pub fn navy_rotors(alpha: &Arc<Alphabet>) -> Vec<Rotor> {
	vec![
		Rotor::reflector("B", perm("(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)", alpha)),
		Rotor::reflector("C", perm("(AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)", alpha)),
		Rotor::fixed("Beta", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)", alpha)),
		Rotor::fixed("Gamma", perm("(AFNIRLBSQWVXGUZDKMTPCOYJHE)", alpha)),
		Rotor::moving("I", perm("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", alpha), "Q").unwrap(),
		Rotor::moving("II", perm("(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)", alpha), "E").unwrap(),
		Rotor::moving("III", perm("(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)", alpha), "V").unwrap(),
		Rotor::moving("IV", perm("(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)", alpha), "J").unwrap(),
		Rotor::moving("V", perm("(AVOLDRWFIUQ)(BZKSMNHYC) (EGTJPX)", alpha), "Z").unwrap(),
	]
}

pub fn navy_machine(num_rotors: usize, num_pawls: usize) -> Machine {
	let alpha = upper();
	let pool = navy_rotors(&alpha);
	Machine::new(alpha, num_rotors, num_pawls, pool).unwrap()
}

pub fn default_machine() -> Machine {
	Config::parse(DEFAULT_CONF).unwrap().build_machine().unwrap()
}
