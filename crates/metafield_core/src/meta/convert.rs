use crate::meta::{Kind, MetaError, Result, Variant};

// i64::MIN and i64::MAX + 1 are both exact in f64.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Variant {
	/// Whether [`Variant::convert_to`] succeeds for this value, allocation
	/// failures aside.
	///
	/// Decided from the kinds and the range of numeric payloads; only
	/// `string → scalar` has to parse the text.
	pub fn is_convertible(&self, to: Kind) -> bool {
		let from = self.kind();
		if from == to {
			return true;
		}
		match (self, to) {
			(Variant::Char(_), Kind::Integer) | (Variant::Integer(_), Kind::Real) | (Variant::IntegerVector(_), Kind::RealVector) => true,
			(Variant::Integer(value), Kind::Char) => integer_to_char(*value).is_some(),
			(Variant::Real(value), Kind::Integer) => real_to_integer(*value).is_some(),
			(Variant::RealVector(items), Kind::IntegerVector) => items.iter().all(|item| real_to_integer(*item).is_some()),
			(Variant::String(text), to) if to.is_scalar() => Variant::parse(to, text).is_ok(),
			(_, Kind::String) if from.is_scalar() => true,
			(_, to) if from.vector_of() == Some(to) => true,
			(_, to) if from.element() == Some(to) => element_count(self) == Some(1),
			_ => false,
		}
	}

	/// Build a new variant of kind `to` from this value.
	///
	/// Identity conversions copy. Numeric conversions reject values that do
	/// not fit; `string` converts to scalar kinds through the text form and
	/// reports parse failures as such.
	pub fn convert_to(&self, to: Kind) -> Result<Variant> {
		let from = self.kind();
		if from == to {
			return self.try_clone();
		}
		let unsupported = || MetaError::Conversion { from, to };

		match (self, to) {
			(Variant::Char(ch), Kind::Integer) => Ok(Variant::Integer(i64::from(u32::from(*ch)))),
			(Variant::Integer(value), Kind::Char) => integer_to_char(*value).map(Variant::Char).ok_or_else(unsupported),
			(Variant::Integer(value), Kind::Real) => Ok(Variant::Real(*value as f64)),
			(Variant::Real(value), Kind::Integer) => real_to_integer(*value).map(Variant::Integer).ok_or_else(unsupported),
			(Variant::IntegerVector(items), Kind::RealVector) => Ok(Variant::RealVector(items.iter().map(|item| *item as f64).collect())),
			(Variant::RealVector(items), Kind::IntegerVector) => items
				.iter()
				.map(|item| real_to_integer(*item))
				.collect::<Option<Vec<_>>>()
				.map(Variant::IntegerVector)
				.ok_or_else(unsupported),
			(Variant::String(text), to) if to.is_scalar() => Variant::parse(to, text),
			(_, Kind::String) if from.is_scalar() => Ok(Variant::String(self.to_string())),
			(_, to) if from.vector_of() == Some(to) => Ok(wrap_one(self.clone())),
			(_, to) if from.element() == Some(to) => unwrap_one(self).ok_or_else(unsupported),
			_ => Err(unsupported()),
		}
	}
}

fn integer_to_char(value: i64) -> Option<char> {
	u32::try_from(value).ok().and_then(char::from_u32)
}

fn real_to_integer(value: f64) -> Option<i64> {
	if !value.is_finite() {
		return None;
	}
	let truncated = value.trunc();
	if !(I64_LOWER..I64_UPPER).contains(&truncated) {
		return None;
	}
	Some(truncated as i64)
}

fn wrap_one(scalar: Variant) -> Variant {
	match scalar {
		Variant::Char(v) => Variant::CharVector(vec![v]),
		Variant::Integer(v) => Variant::IntegerVector(vec![v]),
		Variant::Real(v) => Variant::RealVector(vec![v]),
		Variant::String(v) => Variant::StringVector(vec![v]),
		Variant::Vec2d(v) => Variant::Vec2dVector(vec![v]),
		Variant::Vec3d(v) => Variant::Vec3dVector(vec![v]),
		Variant::Vec4d(v) => Variant::Vec4dVector(vec![v]),
		other => other,
	}
}

fn unwrap_one(vector: &Variant) -> Option<Variant> {
	match vector {
		Variant::CharVector(items) => single(items).map(|v| Variant::Char(*v)),
		Variant::IntegerVector(items) => single(items).map(|v| Variant::Integer(*v)),
		Variant::RealVector(items) => single(items).map(|v| Variant::Real(*v)),
		Variant::StringVector(items) => single(items).map(|v| Variant::String(v.clone())),
		Variant::Vec2dVector(items) => single(items).map(|v| Variant::Vec2d(*v)),
		Variant::Vec3dVector(items) => single(items).map(|v| Variant::Vec3d(*v)),
		Variant::Vec4dVector(items) => single(items).map(|v| Variant::Vec4d(*v)),
		_ => None,
	}
}

fn element_count(vector: &Variant) -> Option<usize> {
	match vector {
		Variant::CharVector(items) => Some(items.len()),
		Variant::IntegerVector(items) => Some(items.len()),
		Variant::RealVector(items) => Some(items.len()),
		Variant::StringVector(items) => Some(items.len()),
		Variant::Vec2dVector(items) => Some(items.len()),
		Variant::Vec3dVector(items) => Some(items.len()),
		Variant::Vec4dVector(items) => Some(items.len()),
		_ => None,
	}
}

fn single<T>(items: &[T]) -> Option<&T> {
	match items {
		[item] => Some(item),
		_ => None,
	}
}

#[cfg(test)]
mod tests;
