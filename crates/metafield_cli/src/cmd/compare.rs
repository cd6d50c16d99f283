use crate::cmd::Result;
use crate::cmd::json::FieldJson;
use crate::cmd::print::{PrintOptions, print_field};
use crate::cmd::util::{emit_json, parse_field};

/// Compare two field specs by name and value; returns whether they are equal.
pub fn run(left: &str, right: &str, json: bool) -> Result<bool> {
	let left = parse_field(left)?;
	let right = parse_field(right)?;
	let equal = left.is_equal(&right);

	if json {
		emit_json(&CompareJson {
			equal,
			same_name: left.name() == right.name(),
			same_kind: left.kind() == right.kind(),
			left: FieldJson::from_field(&left),
			right: FieldJson::from_field(&right),
		})?;
		return Ok(equal);
	}

	print_field(&left, PrintOptions::default());
	print_field(&right, PrintOptions::default());
	println!("{}", if equal { "equal" } else { "different" });
	Ok(equal)
}

#[derive(serde::Serialize)]
struct CompareJson {
	equal: bool,
	same_name: bool,
	same_kind: bool,
	left: FieldJson,
	right: FieldJson,
}
