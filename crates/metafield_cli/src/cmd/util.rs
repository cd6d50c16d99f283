use std::path::Path;

use metafield::meta::FieldValue;

use crate::cmd::{CliError, Result};

/// Parse command-line specs followed by the specs of an optional file.
pub(crate) fn collect_fields(specs: &[String], file: Option<&Path>) -> Result<Vec<FieldValue>> {
	let mut fields = specs.iter().map(|spec| parse_field(spec)).collect::<Result<Vec<_>>>()?;
	if let Some(path) = file {
		let text = std::fs::read_to_string(path)?;
		for line in spec_lines(&text) {
			fields.push(parse_field(line)?);
		}
	}
	if fields.is_empty() {
		return Err(CliError::NoSpecs);
	}
	Ok(fields)
}

/// Parse one `name=kind:text` spec.
pub(crate) fn parse_field(spec: &str) -> Result<FieldValue> {
	Ok(spec.parse()?)
}

/// Spec lines of a file: blank lines and `#` comments are skipped.
pub(crate) fn spec_lines(text: &str) -> impl Iterator<Item = &str> {
	text.lines()
		.map(|line| line.trim_end_matches('\r'))
		.filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
}

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
