//! Property inspector for the demo classes.
//!
//! Drives an object purely through [`lumen_meta::Reflect`]:
//!
//! ```text
//! lumen-inspect --class another name visible=1 visible '?'
//! ```
//!
//! `key` reads a property, `key=value` writes one, and `?` lists every visible
//! property with its metadata.

mod demo;
mod op;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lumen_meta::Reflect;
use tracing::info;

use crate::demo::{AnotherObj, Obj};
use crate::op::Op;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Class {
	Obj,
	Another,
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "lumen-inspect")]
#[command(about = "Read and write demo object properties by name")]
struct Args {
	/// Class to instantiate
	#[arg(short, long, value_enum, default_value = "obj")]
	class: Class,

	/// Instance name
	#[arg(short, long, default_value = "obj1")]
	name: String,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,

	/// Operations: `key`, `key=value` or `?`
	#[arg(value_parser = Op::parse)]
	ops: Vec<Op>,
}

fn main() -> ExitCode {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let mut object: Box<dyn Reflect> = match args.class {
		Class::Obj => Box::new(Obj::new(args.name)),
		Class::Another => Box::new(AnotherObj::new(args.name)),
	};
	info!(class = object.type_label(), ops = args.ops.len(), "inspecting");

	let mut failed = false;
	for op in &args.ops {
		if let Err(err) = op.apply(&mut *object) {
			eprintln!("error: {err}");
			failed = true;
		}
	}

	if failed {
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("lumen_meta=trace,lumen_inspect=debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
