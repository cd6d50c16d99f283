use metafield::meta::Kind;

use crate::cmd::Result;
use crate::cmd::util::emit_json;

/// Print every kind name, one per line or as a JSON array.
pub fn run(json: bool) -> Result<()> {
	let names: Vec<&str> = Kind::ALL.iter().map(|kind| kind.name()).collect();
	if json {
		return emit_json(&names);
	}
	for name in names {
		println!("{name}");
	}
	Ok(())
}
