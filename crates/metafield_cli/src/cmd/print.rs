use metafield::meta::{FieldValue, Variant};

/// Output truncation limits for text rendering.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for vector kinds.
	pub max_vector_items: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_vector_items: 16,
		}
	}
}

/// Print one field as `name (kind) = value`.
pub(crate) fn print_field(field: &FieldValue, options: PrintOptions) {
	println!("{}", render_field(field, options));
}

pub(crate) fn render_field(field: &FieldValue, options: PrintOptions) -> String {
	format!("{} ({}) = {}", field.name(), field.kind(), render_value(field.value(), options))
}

fn render_value(value: &Variant, options: PrintOptions) -> String {
	match value {
		Variant::Empty => "-".to_owned(),
		Variant::String(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Variant::RawBuffer(v) => format!("bytes[{}] {}", v.len(), truncate(&value.to_string(), options.max_string_len)),
		Variant::CharVector(items) => render_items(items, options),
		Variant::IntegerVector(items) => render_items(items, options),
		Variant::RealVector(items) => render_items(items, options),
		Variant::StringVector(items) => {
			let quoted: Vec<String> = items.iter().map(|item| format!("\"{}\"", truncate(item, options.max_string_len))).collect();
			render_items(&quoted, options)
		}
		Variant::Vec2dVector(items) => render_items(items, options),
		Variant::Vec3dVector(items) => render_items(items, options),
		Variant::Vec4dVector(items) => render_items(items, options),
		Variant::Vec2d(_) | Variant::Vec3d(_) | Variant::Vec4d(_) => format!("({value})"),
		Variant::Char(_) | Variant::Integer(_) | Variant::Real(_) => value.to_string(),
	}
}

fn render_items<T: std::fmt::Display>(items: &[T], options: PrintOptions) -> String {
	let mut parts: Vec<String> = items.iter().take(options.max_vector_items).map(ToString::to_string).collect();
	if items.len() > options.max_vector_items {
		parts.push(format!("... {} more", items.len() - options.max_vector_items));
	}
	format!("[{}]", parts.join(", "))
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
