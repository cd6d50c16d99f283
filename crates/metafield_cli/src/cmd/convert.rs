use metafield::meta::{FieldValue, Kind};

use crate::cmd::Result;
use crate::cmd::json::FieldJson;
use crate::cmd::print::{PrintOptions, print_field};
use crate::cmd::util::{emit_json, parse_field};

/// Convert one field's value to the kind named by `to` and print the result.
pub fn run(spec: &str, to: &str, json: bool) -> Result<()> {
	let field = parse_field(spec)?;
	let kind: Kind = to.parse()?;
	let (name, value) = field.into_parts();
	let converted = FieldValue::new(name, value.convert_to(kind)?)?;

	if json {
		return emit_json(&FieldJson::from_field(&converted));
	}
	print_field(&converted, PrintOptions::default());
	Ok(())
}
