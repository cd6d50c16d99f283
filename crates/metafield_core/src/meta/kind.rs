use std::fmt;
use std::str::FromStr;

use crate::meta::MetaError;

/// Discriminant of the value currently held by a [`Variant`](crate::meta::Variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
	/// No value.
	Empty,
	/// Single Unicode scalar value.
	Char,
	/// Signed 64-bit integer.
	Integer,
	/// 64-bit float.
	Real,
	/// UTF-8 text.
	String,
	/// Two real components.
	Vec2d,
	/// Three real components.
	Vec3d,
	/// Four real components.
	Vec4d,
	/// Opaque bytes.
	RawBuffer,
	/// Sequence of chars.
	CharVector,
	/// Sequence of integers.
	IntegerVector,
	/// Sequence of reals.
	RealVector,
	/// Sequence of strings.
	StringVector,
	/// Sequence of 2D tuples.
	Vec2dVector,
	/// Sequence of 3D tuples.
	Vec3dVector,
	/// Sequence of 4D tuples.
	Vec4dVector,
}

impl Kind {
	/// Every kind, in declaration order.
	pub const ALL: [Kind; 16] = [
		Kind::Empty,
		Kind::Char,
		Kind::Integer,
		Kind::Real,
		Kind::String,
		Kind::Vec2d,
		Kind::Vec3d,
		Kind::Vec4d,
		Kind::RawBuffer,
		Kind::CharVector,
		Kind::IntegerVector,
		Kind::RealVector,
		Kind::StringVector,
		Kind::Vec2dVector,
		Kind::Vec3dVector,
		Kind::Vec4dVector,
	];

	/// Stable lowercase name used by the text form.
	pub fn name(self) -> &'static str {
		match self {
			Kind::Empty => "empty",
			Kind::Char => "char",
			Kind::Integer => "integer",
			Kind::Real => "real",
			Kind::String => "string",
			Kind::Vec2d => "vec2d",
			Kind::Vec3d => "vec3d",
			Kind::Vec4d => "vec4d",
			Kind::RawBuffer => "rawbuffer",
			Kind::CharVector => "char[]",
			Kind::IntegerVector => "integer[]",
			Kind::RealVector => "real[]",
			Kind::StringVector => "string[]",
			Kind::Vec2dVector => "vec2d[]",
			Kind::Vec3dVector => "vec3d[]",
			Kind::Vec4dVector => "vec4d[]",
		}
	}

	/// Whether this kind is a single non-byte value, i.e. a vector element kind.
	pub fn is_scalar(self) -> bool {
		matches!(self, Kind::Char | Kind::Integer | Kind::Real | Kind::String | Kind::Vec2d | Kind::Vec3d | Kind::Vec4d)
	}

	/// Whether this kind holds a sequence of scalar elements.
	///
	/// `RawBuffer` is a byte blob, not a vector kind.
	pub fn is_vector(self) -> bool {
		self.element().is_some()
	}

	/// Element kind of a vector kind.
	pub fn element(self) -> Option<Kind> {
		match self {
			Kind::CharVector => Some(Kind::Char),
			Kind::IntegerVector => Some(Kind::Integer),
			Kind::RealVector => Some(Kind::Real),
			Kind::StringVector => Some(Kind::String),
			Kind::Vec2dVector => Some(Kind::Vec2d),
			Kind::Vec3dVector => Some(Kind::Vec3d),
			Kind::Vec4dVector => Some(Kind::Vec4d),
			_ => None,
		}
	}

	/// Vector kind whose elements are of this kind.
	pub fn vector_of(self) -> Option<Kind> {
		Kind::ALL.into_iter().find(|kind| kind.element() == Some(self))
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Kind {
	type Err = MetaError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		if name == "unknown" {
			return Ok(Kind::Empty);
		}
		Kind::ALL
			.into_iter()
			.find(|kind| kind.name() == name)
			.ok_or_else(|| MetaError::invalid(format!("unknown kind name {name:?}")))
	}
}

#[cfg(test)]
mod tests;
