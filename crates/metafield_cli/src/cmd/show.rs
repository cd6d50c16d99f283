use std::path::PathBuf;

use crate::cmd::Result;
use crate::cmd::json::FieldJson;
use crate::cmd::print::{PrintOptions, print_field};
use crate::cmd::util::{collect_fields, emit_json};

/// Parse field specs from arguments and an optional file, then print them.
pub fn run(specs: Vec<String>, file: Option<PathBuf>, json: bool) -> Result<()> {
	let fields = collect_fields(&specs, file.as_deref())?;

	if json {
		let payload: Vec<FieldJson> = fields.iter().map(FieldJson::from_field).collect();
		return emit_json(&payload);
	}

	for field in &fields {
		print_field(field, PrintOptions::default());
	}
	Ok(())
}
