//! Text form of variant payloads.
//!
//! Scalars print in their natural decimal form, tuples as space separated
//! components, raw buffers as lowercase hex, character vectors as their
//! characters run together and other vector kinds as `;` separated elements.
//! `kind:text` prefixes the kind name.

use std::fmt::{self, Write};

use crate::meta::{Kind, MetaError, Result, Variant, Vec2d, Vec3d, Vec4d};

const ELEMENT_SEP: char = ';';

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Variant::Empty => Ok(()),
			Variant::Char(v) => write!(f, "{v}"),
			Variant::Integer(v) => write!(f, "{v}"),
			Variant::Real(v) => write!(f, "{v}"),
			Variant::String(v) => f.write_str(v),
			Variant::Vec2d(v) => write!(f, "{v}"),
			Variant::Vec3d(v) => write!(f, "{v}"),
			Variant::Vec4d(v) => write!(f, "{v}"),
			Variant::RawBuffer(bytes) => {
				for byte in bytes {
					write!(f, "{byte:02x}")?;
				}
				Ok(())
			}
			Variant::CharVector(items) => items.iter().try_for_each(|ch| f.write_char(*ch)),
			Variant::IntegerVector(items) => write_joined(f, items),
			Variant::RealVector(items) => write_joined(f, items),
			Variant::StringVector(items) => write_joined(f, items),
			Variant::Vec2dVector(items) => write_joined(f, items),
			Variant::Vec3dVector(items) => write_joined(f, items),
			Variant::Vec4dVector(items) => write_joined(f, items),
		}
	}
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
	for (idx, item) in items.iter().enumerate() {
		if idx > 0 {
			f.write_char(ELEMENT_SEP)?;
		}
		write!(f, "{item}")?;
	}
	Ok(())
}

impl Variant {
	/// Render as `kind:text`.
	pub fn to_tagged_string(&self) -> String {
		format!("{}:{}", self.kind(), self)
	}

	/// Parse `kind:text`; the text after the first `:` is taken verbatim.
	pub fn parse_tagged(input: &str) -> Result<Variant> {
		let (kind, text) = input
			.split_once(':')
			.ok_or_else(|| MetaError::invalid(format!("expected kind:text, got {input:?}")))?;
		Variant::parse(kind.parse()?, text)
	}

	/// Parse the text form of `kind`.
	///
	/// An empty text is an empty vector for vector kinds, so a vector holding
	/// a single empty string has no text form. String vector elements must not
	/// contain `;`.
	pub fn parse(kind: Kind, text: &str) -> Result<Variant> {
		Ok(match kind {
			Kind::Empty => {
				if !text.trim().is_empty() {
					return Err(MetaError::parse(kind, text, "empty kind takes no text"));
				}
				Variant::Empty
			}
			Kind::Char => Variant::Char(parse_char(text)?),
			Kind::Integer => Variant::Integer(parse_integer(text)?),
			Kind::Real => Variant::Real(parse_real(kind, text)?),
			Kind::String => Variant::String(text.to_owned()),
			Kind::Vec2d => Variant::Vec2d(parse_vec2d(text)?),
			Kind::Vec3d => Variant::Vec3d(parse_vec3d(text)?),
			Kind::Vec4d => Variant::Vec4d(parse_vec4d(text)?),
			Kind::RawBuffer => Variant::RawBuffer(parse_hex(text)?),
			Kind::CharVector => Variant::CharVector(text.chars().collect()),
			Kind::IntegerVector => Variant::IntegerVector(parse_elements(text, parse_integer)?),
			Kind::RealVector => Variant::RealVector(parse_elements(text, |item| parse_real(Kind::Real, item))?),
			Kind::StringVector => Variant::StringVector(parse_elements(text, |item| Ok(item.to_owned()))?),
			Kind::Vec2dVector => Variant::Vec2dVector(parse_elements(text, parse_vec2d)?),
			Kind::Vec3dVector => Variant::Vec3dVector(parse_elements(text, parse_vec3d)?),
			Kind::Vec4dVector => Variant::Vec4dVector(parse_elements(text, parse_vec4d)?),
		})
	}
}

fn parse_elements<T>(text: &str, parse_item: impl Fn(&str) -> Result<T>) -> Result<Vec<T>> {
	if text.is_empty() {
		return Ok(Vec::new());
	}
	text.split(ELEMENT_SEP).map(parse_item).collect()
}

fn parse_char(text: &str) -> Result<char> {
	let mut chars = text.chars();
	match (chars.next(), chars.next()) {
		(Some(ch), None) => Ok(ch),
		_ => Err(MetaError::parse(Kind::Char, text, "expected exactly one character")),
	}
}

fn parse_integer(text: &str) -> Result<i64> {
	text.trim()
		.parse::<i64>()
		.map_err(|err| MetaError::parse(Kind::Integer, text, err.to_string()))
}

fn parse_real(kind: Kind, text: &str) -> Result<f64> {
	text.trim().parse::<f64>().map_err(|err| MetaError::parse(kind, text, err.to_string()))
}

fn parse_components<const N: usize>(kind: Kind, text: &str) -> Result<[f64; N]> {
	let mut out = [0.0; N];
	let mut parts = text.split_whitespace();
	for slot in &mut out {
		let part = parts
			.next()
			.ok_or_else(|| MetaError::parse(kind, text, format!("expected {} components", N)))?;
		*slot = parse_real(kind, part)?;
	}
	if parts.next().is_some() {
		return Err(MetaError::parse(kind, text, format!("expected {} components", N)));
	}
	Ok(out)
}

fn parse_vec2d(text: &str) -> Result<Vec2d> {
	let [x, y] = parse_components::<2>(Kind::Vec2d, text)?;
	Ok(Vec2d::new(x, y))
}

fn parse_vec3d(text: &str) -> Result<Vec3d> {
	let [x, y, z] = parse_components::<3>(Kind::Vec3d, text)?;
	Ok(Vec3d::new(x, y, z))
}

fn parse_vec4d(text: &str) -> Result<Vec4d> {
	let [x, y, z, w] = parse_components::<4>(Kind::Vec4d, text)?;
	Ok(Vec4d::new(x, y, z, w))
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
	let digits = text.trim().as_bytes();
	if digits.len() % 2 != 0 {
		return Err(MetaError::parse(Kind::RawBuffer, text, "odd number of hex digits"));
	}
	digits
		.chunks(2)
		.map(|pair| match (nibble(pair[0]), nibble(pair[1])) {
			(Some(hi), Some(lo)) => Ok((hi << 4) | lo),
			_ => Err(MetaError::parse(Kind::RawBuffer, text, "invalid hex digit")),
		})
		.collect()
}

fn nibble(digit: u8) -> Option<u8> {
	char::from(digit).to_digit(16).and_then(|value| u8::try_from(value).ok())
}
