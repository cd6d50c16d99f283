#![allow(missing_docs)]

use std::process::Command;

use metafield_testkit::stdout_json;

#[test]
fn kinds_json_lists_every_kind_name() {
	let output = Command::new(env!("CARGO_BIN_EXE_metafield"))
		.args(["kinds", "--json"])
		.output()
		.expect("metafield command executes");
	let json = stdout_json(&output);

	let names: Vec<&str> = json.as_array().expect("expected array").iter().filter_map(|item| item.as_str()).collect();
	assert_eq!(names.len(), 16);
	assert_eq!(names.first(), Some(&"empty"));
	assert!(names.contains(&"vec4d[]"));
	assert!(names.contains(&"rawbuffer"));
}
