#![allow(missing_docs)]

use std::process::{Command, Output};

use metafield_testkit::{fixture_path, stdout_json};

fn run_metafield(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_metafield")).args(args).output().expect("metafield command executes")
}

fn run_metafield_json(args: &[&str]) -> serde_json::Value {
	stdout_json(&run_metafield(args))
}

#[test]
fn show_json_lists_fields_in_order() {
	let json = run_metafield_json(&["show", "duration=real:12.5", "tags=string[]:a;b", "--json"]);

	assert_eq!(json[0]["name"], "duration");
	assert_eq!(json[0]["kind"], "real");
	assert_eq!(json[0]["value"], 12.5);
	assert_eq!(json[1]["kind"], "string[]");
	assert_eq!(json[1]["value"], serde_json::json!(["a", "b"]));
}

#[test]
fn show_reads_spec_file_after_arguments() {
	let fixture = fixture_path("fields.txt");
	let fixture = fixture.to_string_lossy().into_owned();
	let json = run_metafield_json(&["show", "first=char:x", "--file", &fixture, "--json"]);

	let names: Vec<&str> = json
		.as_array()
		.expect("expected array of fields")
		.iter()
		.filter_map(|item| item["name"].as_str())
		.collect();
	assert_eq!(names, vec!["first", "duration", "title", "frames", "origin", "thumbnail"]);
	assert_eq!(json[3]["value"], serde_json::json!([1, 2, 3]));
	assert_eq!(json[5]["value"], "89504e47");
}

#[test]
fn show_text_output_names_kind() {
	let output = run_metafield(&["show", "duration=real:12.5"]);
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert_eq!(stdout.trim_end(), "duration (real) = 12.5");
}

#[test]
fn show_rejects_empty_name() {
	let output = run_metafield(&["show", "=integer:1"]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("field name must not be empty"), "stderr: {stderr}");
}

#[test]
fn show_without_specs_fails() {
	let output = run_metafield(&["show"]);
	assert_eq!(output.status.code(), Some(1));
}
