//! Runs a stream of setting lines and message lines through a machine.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Result, SettingError};
use crate::machine::Machine;
use crate::setting::{is_directive, Setting};

const GROUP: usize = 5;

/// Split `msg` into blocks of five separated by single spaces; the last
/// block may be shorter.
pub fn group_in_fives(msg: &str) -> String {
	let chars: Vec<char> = msg.chars().collect();
	chars
		.chunks(GROUP)
		.map(|group| group.iter().collect::<String>())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Strip whitespace and fold each character into the machine's alphabet.
fn prepare(machine: &Machine, line: &str) -> Result<String> {
	let mut msg = String::with_capacity(line.len());
	for c in line.chars().filter(|c| !c.is_whitespace()) {
		msg.push(machine.alphabet().fold(c)?);
	}
	Ok(msg)
}

/// Read `input` line by line. `*` lines reconfigure `machine`, blank lines
/// are copied as blank lines, and anything else is converted and written
/// in groups of five.
pub fn process<R: BufRead, W: Write>(machine: &mut Machine, input: R, mut output: W) -> Result<()> {
	let mut configured = false;
	for (n, line) in input.lines().enumerate() {
		let line = line?;
		if is_directive(&line) {
			let setting = Setting::parse(&line, machine.num_rotors(), machine.alphabet())?;
			setting.apply(machine)?;
			configured = true;
			debug!("Line {}: rotors {:?} at {}", n + 1, setting.rotors, setting.positions);
		} else if line.trim().is_empty() {
			writeln!(output)?;
		} else if !configured {
			return Err(SettingError::NoSetting.into());
		} else {
			let msg = prepare(machine, &line)?;
			let result = machine.convert_str(&msg)?;
			debug!("Line {}: {} characters, rotors now {}", n + 1, result.len(), machine.positions());
			writeln!(output, "{}", group_in_fives(&result))?;
		}
	}
	output.flush()?;
	Ok(())
}
