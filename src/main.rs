//! Rotor cipher machine simulator.
//!
//! Reads a machine configuration, then enciphers or deciphers the messages
//! in INPUT (stdin by default), each preceded by a `*` setting line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enigma::{process as run_messages, Config};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Rotor cipher machine simulator")]
#[command(version)]
struct Cli {
	/// Machine configuration file
	config: PathBuf,

	/// Messages to process [default: stdin]
	input: Option<PathBuf>,

	/// Where to write results [default: stdout]
	output: Option<PathBuf>,

	/// More logging on stderr (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	let fmt_layer = tracing_subscriber::fmt::layer()
		.with_target(false)
		.with_writer(io::stderr);

	tracing_subscriber::registry()
		.with(fmt_layer)
		.with(filter)
		.init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let config = Config::from_path(&cli.config)
		.with_context(|| format!("could not load {}", cli.config.display()))?;
	let mut machine = config.build_machine()?;

	let input: Box<dyn BufRead> = match &cli.input {
		Some(p) => {
			let f = File::open(p).with_context(|| format!("could not open {}", p.display()))?;
			Box::new(BufReader::new(f))
		}
		None => Box::new(BufReader::new(io::stdin())),
	};
	let output: Box<dyn Write> = match &cli.output {
		Some(p) => {
			let f = File::create(p).with_context(|| format!("could not open {}", p.display()))?;
			Box::new(BufWriter::new(f))
		}
		None => Box::new(BufWriter::new(io::stdout())),
	};

	run_messages(&mut machine, input, output)?;
	info!("Done, rotors at {}", machine.positions());
	Ok(())
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(e) = run(&cli) {
		let _ = writeln!(io::stderr(), "Error: {:#}", e);
		process::exit(1);
	}
}
