use std::mem::size_of_val;

use crate::meta::vector::real_eq;
use crate::meta::{Kind, MetaError, Result, Vec2d, Vec3d, Vec4d};

/// Tagged value holder: exactly one payload of a closed set of kinds.
///
/// The enum arm is the kind; cloning is always a deep copy, so no two
/// variants ever share payload storage. Use [`Variant::try_clone`] where
/// allocation failure must be reported instead of aborting.
#[derive(Debug, Clone, Default)]
pub enum Variant {
	/// No value.
	#[default]
	Empty,
	/// Single character.
	Char(char),
	/// Signed integer.
	Integer(i64),
	/// Real number.
	Real(f64),
	/// Text.
	String(String),
	/// 2D tuple.
	Vec2d(Vec2d),
	/// 3D tuple.
	Vec3d(Vec3d),
	/// 4D tuple.
	Vec4d(Vec4d),
	/// Opaque bytes.
	RawBuffer(Vec<u8>),
	/// Characters.
	CharVector(Vec<char>),
	/// Integers.
	IntegerVector(Vec<i64>),
	/// Reals.
	RealVector(Vec<f64>),
	/// Strings.
	StringVector(Vec<String>),
	/// 2D tuples.
	Vec2dVector(Vec<Vec2d>),
	/// 3D tuples.
	Vec3dVector(Vec<Vec3d>),
	/// 4D tuples.
	Vec4dVector(Vec<Vec4d>),
}

impl Variant {
	/// Empty variant.
	pub fn new() -> Self {
		Self::Empty
	}

	/// Current discriminant.
	pub fn kind(&self) -> Kind {
		match self {
			Variant::Empty => Kind::Empty,
			Variant::Char(_) => Kind::Char,
			Variant::Integer(_) => Kind::Integer,
			Variant::Real(_) => Kind::Real,
			Variant::String(_) => Kind::String,
			Variant::Vec2d(_) => Kind::Vec2d,
			Variant::Vec3d(_) => Kind::Vec3d,
			Variant::Vec4d(_) => Kind::Vec4d,
			Variant::RawBuffer(_) => Kind::RawBuffer,
			Variant::CharVector(_) => Kind::CharVector,
			Variant::IntegerVector(_) => Kind::IntegerVector,
			Variant::RealVector(_) => Kind::RealVector,
			Variant::StringVector(_) => Kind::StringVector,
			Variant::Vec2dVector(_) => Kind::Vec2dVector,
			Variant::Vec3dVector(_) => Kind::Vec3dVector,
			Variant::Vec4dVector(_) => Kind::Vec4dVector,
		}
	}

	/// Whether no payload is stored.
	pub fn is_empty(&self) -> bool {
		matches!(self, Variant::Empty)
	}

	/// Borrow the payload as `T`, failing when `T` is not the stored kind.
	pub fn get<T: Payload>(&self) -> Result<&T> {
		T::peek(self).ok_or(MetaError::TypeMismatch {
			expected: T::KIND,
			actual: self.kind(),
		})
	}

	/// Mutably borrow the payload as `T`, failing when `T` is not the stored kind.
	pub fn get_mut<T: Payload>(&mut self) -> Result<&mut T> {
		let actual = self.kind();
		T::peek_mut(self).ok_or(MetaError::TypeMismatch { expected: T::KIND, actual })
	}

	/// Move the payload out as `T`.
	///
	/// On mismatch the variant is dropped along with the error.
	pub fn into_inner<T: Payload>(self) -> Result<T> {
		let actual = self.kind();
		T::extract(self).map_err(|_| MetaError::TypeMismatch { expected: T::KIND, actual })
	}

	/// Structural equality; variants of different kinds are never equal.
	pub fn equals(&self, other: &Variant) -> bool {
		match (self, other) {
			(Variant::Empty, Variant::Empty) => true,
			(Variant::Char(a), Variant::Char(b)) => a == b,
			(Variant::Integer(a), Variant::Integer(b)) => a == b,
			(Variant::Real(a), Variant::Real(b)) => real_eq(*a, *b),
			(Variant::String(a), Variant::String(b)) => a == b,
			(Variant::Vec2d(a), Variant::Vec2d(b)) => a == b,
			(Variant::Vec3d(a), Variant::Vec3d(b)) => a == b,
			(Variant::Vec4d(a), Variant::Vec4d(b)) => a == b,
			(Variant::RawBuffer(a), Variant::RawBuffer(b)) => a == b,
			(Variant::CharVector(a), Variant::CharVector(b)) => a == b,
			(Variant::IntegerVector(a), Variant::IntegerVector(b)) => a == b,
			(Variant::RealVector(a), Variant::RealVector(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| real_eq(*x, *y)),
			(Variant::StringVector(a), Variant::StringVector(b)) => a == b,
			(Variant::Vec2dVector(a), Variant::Vec2dVector(b)) => a == b,
			(Variant::Vec3dVector(a), Variant::Vec3dVector(b)) => a == b,
			(Variant::Vec4dVector(a), Variant::Vec4dVector(b)) => a == b,
			_ => false,
		}
	}

	/// Deep copy that reports allocation failure instead of aborting.
	pub fn try_clone(&self) -> Result<Variant> {
		Ok(match self {
			Variant::Empty => Variant::Empty,
			Variant::Char(v) => Variant::Char(*v),
			Variant::Integer(v) => Variant::Integer(*v),
			Variant::Real(v) => Variant::Real(*v),
			Variant::Vec2d(v) => Variant::Vec2d(*v),
			Variant::Vec3d(v) => Variant::Vec3d(*v),
			Variant::Vec4d(v) => Variant::Vec4d(*v),
			Variant::String(v) => Variant::String(try_copy_str(v)?),
			Variant::RawBuffer(v) => Variant::RawBuffer(try_copy_slice(v)?),
			Variant::CharVector(v) => Variant::CharVector(try_copy_slice(v)?),
			Variant::IntegerVector(v) => Variant::IntegerVector(try_copy_slice(v)?),
			Variant::RealVector(v) => Variant::RealVector(try_copy_slice(v)?),
			Variant::Vec2dVector(v) => Variant::Vec2dVector(try_copy_slice(v)?),
			Variant::Vec3dVector(v) => Variant::Vec3dVector(try_copy_slice(v)?),
			Variant::Vec4dVector(v) => Variant::Vec4dVector(try_copy_slice(v)?),
			Variant::StringVector(items) => {
				let mut out = Vec::new();
				out.try_reserve_exact(items.len())
					.map_err(|_| MetaError::reserve_failed(size_of_val(items.as_slice())))?;
				for item in items {
					out.push(try_copy_str(item)?);
				}
				Variant::StringVector(out)
			}
		})
	}

	/// Replace the payload; the previous payload is dropped first.
	pub fn reset(&mut self, value: impl Into<Variant>) {
		*self = Variant::Empty;
		*self = value.into();
	}

	/// Replace the payload with a deep copy of `source`.
	///
	/// The copy is made before the current payload is touched, so a failed
	/// allocation leaves `self` unchanged.
	pub fn reset_from(&mut self, source: &Variant) -> Result<()> {
		let copy = source.try_clone()?;
		*self = copy;
		Ok(())
	}

	/// Release the payload and become empty.
	pub fn clear(&mut self) {
		*self = Variant::Empty;
	}

	/// Move the payload out, leaving the variant empty.
	pub fn take(&mut self) -> Variant {
		std::mem::take(self)
	}

	/// Heap bytes owned by the payload.
	pub fn footprint(&self) -> usize {
		match self {
			Variant::Empty
			| Variant::Char(_)
			| Variant::Integer(_)
			| Variant::Real(_)
			| Variant::Vec2d(_)
			| Variant::Vec3d(_)
			| Variant::Vec4d(_) => 0,
			Variant::String(v) => v.len(),
			Variant::RawBuffer(v) => v.len(),
			Variant::CharVector(v) => size_of_val(v.as_slice()),
			Variant::IntegerVector(v) => size_of_val(v.as_slice()),
			Variant::RealVector(v) => size_of_val(v.as_slice()),
			Variant::StringVector(v) => size_of_val(v.as_slice()) + v.iter().map(String::len).sum::<usize>(),
			Variant::Vec2dVector(v) => size_of_val(v.as_slice()),
			Variant::Vec3dVector(v) => size_of_val(v.as_slice()),
			Variant::Vec4dVector(v) => size_of_val(v.as_slice()),
		}
	}
}

impl PartialEq for Variant {
	fn eq(&self, other: &Self) -> bool {
		self.equals(other)
	}
}

// Reals compare with NaN == NaN, which keeps equality an equivalence relation.
impl Eq for Variant {}

pub(crate) fn try_copy_str(src: &str) -> Result<String> {
	let mut out = String::new();
	out.try_reserve_exact(src.len()).map_err(|_| MetaError::reserve_failed(src.len()))?;
	out.push_str(src);
	Ok(out)
}

fn try_copy_slice<T: Copy>(src: &[T]) -> Result<Vec<T>> {
	let mut out = Vec::new();
	out.try_reserve_exact(src.len()).map_err(|_| MetaError::reserve_failed(size_of_val(src)))?;
	out.extend_from_slice(src);
	Ok(out)
}

/// Rust type stored by exactly one [`Kind`].
pub trait Payload: Sized {
	/// Kind that stores this type.
	const KIND: Kind;

	/// Borrow from a variant of the matching kind.
	fn peek(variant: &Variant) -> Option<&Self>;

	/// Mutably borrow from a variant of the matching kind.
	fn peek_mut(variant: &mut Variant) -> Option<&mut Self>;

	/// Move out of a variant of the matching kind, or give it back.
	fn extract(variant: Variant) -> std::result::Result<Self, Variant>;
}

macro_rules! payload {
	($ty:ty, $arm:ident) => {
		impl Payload for $ty {
			const KIND: Kind = Kind::$arm;

			fn peek(variant: &Variant) -> Option<&Self> {
				match variant {
					Variant::$arm(value) => Some(value),
					_ => None,
				}
			}

			fn peek_mut(variant: &mut Variant) -> Option<&mut Self> {
				match variant {
					Variant::$arm(value) => Some(value),
					_ => None,
				}
			}

			fn extract(variant: Variant) -> std::result::Result<Self, Variant> {
				match variant {
					Variant::$arm(value) => Ok(value),
					other => Err(other),
				}
			}
		}

		impl From<$ty> for Variant {
			fn from(value: $ty) -> Self {
				Variant::$arm(value)
			}
		}
	};
}

payload!(char, Char);
payload!(i64, Integer);
payload!(f64, Real);
payload!(String, String);
payload!(Vec2d, Vec2d);
payload!(Vec3d, Vec3d);
payload!(Vec4d, Vec4d);
payload!(Vec<u8>, RawBuffer);
payload!(Vec<char>, CharVector);
payload!(Vec<i64>, IntegerVector);
payload!(Vec<f64>, RealVector);
payload!(Vec<String>, StringVector);
payload!(Vec<Vec2d>, Vec2dVector);
payload!(Vec<Vec3d>, Vec3dVector);
payload!(Vec<Vec4d>, Vec4dVector);

impl From<&str> for Variant {
	fn from(value: &str) -> Self {
		Variant::String(value.to_owned())
	}
}

impl From<i32> for Variant {
	fn from(value: i32) -> Self {
		Variant::Integer(i64::from(value))
	}
}

#[cfg(test)]
mod tests;
