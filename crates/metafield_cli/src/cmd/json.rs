use metafield::meta::{FieldValue, Variant};
use serde_json::{Value as JsonValue, json};

/// JSON shape of one field.
#[derive(serde::Serialize)]
pub(crate) struct FieldJson {
	name: String,
	kind: String,
	value: JsonValue,
}

impl FieldJson {
	pub(crate) fn from_field(field: &FieldValue) -> Self {
		Self {
			name: field.name().to_owned(),
			kind: field.kind().to_string(),
			value: value_to_json_value(field.value()),
		}
	}
}

/// Render a variant payload as plain JSON; non-finite reals become their text form.
pub(crate) fn value_to_json_value(value: &Variant) -> JsonValue {
	match value {
		Variant::Empty => JsonValue::Null,
		Variant::Char(v) => json!(v.to_string()),
		Variant::Integer(v) => json!(v),
		Variant::Real(v) => real_json(*v),
		Variant::String(v) => json!(v),
		Variant::Vec2d(v) => reals_json(&v.components()),
		Variant::Vec3d(v) => reals_json(&v.components()),
		Variant::Vec4d(v) => reals_json(&v.components()),
		Variant::RawBuffer(_) => json!(value.to_string()),
		Variant::CharVector(items) => items.iter().map(|item| json!(item.to_string())).collect(),
		Variant::IntegerVector(items) => items.iter().map(|item| json!(item)).collect(),
		Variant::RealVector(items) => reals_json(items),
		Variant::StringVector(items) => items.iter().map(|item| json!(item)).collect(),
		Variant::Vec2dVector(items) => items.iter().map(|item| reals_json(&item.components())).collect(),
		Variant::Vec3dVector(items) => items.iter().map(|item| reals_json(&item.components())).collect(),
		Variant::Vec4dVector(items) => items.iter().map(|item| reals_json(&item.components())).collect(),
	}
}

fn real_json(value: f64) -> JsonValue {
	if value.is_finite() { json!(value) } else { json!(value.to_string()) }
}

fn reals_json(values: &[f64]) -> JsonValue {
	values.iter().map(|item| real_json(*item)).collect()
}
