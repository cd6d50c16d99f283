#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "metafield", about = "Inspect, compare and convert named metadata values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List value kinds.
	Kinds {
		#[arg(long)]
		json: bool,
	},
	/// Parse and print `name=kind:text` field specs.
	Show {
		specs: Vec<String>,
		#[arg(long)]
		file: Option<PathBuf>,
		#[arg(long)]
		json: bool,
	},
	/// Compare two field specs; exits 2 when they differ.
	Compare {
		left: String,
		right: String,
		#[arg(long)]
		json: bool,
	},
	/// Convert a field's value to another kind.
	Convert {
		spec: String,
		#[arg(long)]
		to: String,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	match run() {
		Ok(status) => std::process::exit(status),
		Err(err) => {
			eprintln!("error: {err}");
			std::process::exit(1);
		}
	}
}

fn run() -> cmd::Result<i32> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Kinds { json } => cmd::kinds::run(json).map(|()| 0),
		Commands::Show { specs, file, json } => cmd::show::run(specs, file, json).map(|()| 0),
		Commands::Compare { left, right, json } => cmd::compare::run(&left, &right, json).map(|equal| if equal { 0 } else { 2 }),
		Commands::Convert { spec, to, json } => cmd::convert::run(&spec, &to, json).map(|()| 0),
	}
}
