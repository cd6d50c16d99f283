use std::fmt;

/// Real equality used across all kinds: numeric comparison, with NaN equal to NaN.
pub(crate) fn real_eq(a: f64, b: f64) -> bool {
	a == b || (a.is_nan() && b.is_nan())
}

/// Two-component real tuple.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec2d {
	/// First component.
	pub x: f64,
	/// Second component.
	pub y: f64,
}

/// Three-component real tuple.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec3d {
	/// First component.
	pub x: f64,
	/// Second component.
	pub y: f64,
	/// Third component.
	pub z: f64,
}

/// Four-component real tuple.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec4d {
	/// First component.
	pub x: f64,
	/// Second component.
	pub y: f64,
	/// Third component.
	pub z: f64,
	/// Fourth component.
	pub w: f64,
}

impl Vec2d {
	/// Build from components.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Components in order.
	pub fn components(&self) -> [f64; 2] {
		[self.x, self.y]
	}
}

impl Vec3d {
	/// Build from components.
	pub fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Components in order.
	pub fn components(&self) -> [f64; 3] {
		[self.x, self.y, self.z]
	}
}

impl Vec4d {
	/// Build from components.
	pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
		Self { x, y, z, w }
	}

	/// Components in order.
	pub fn components(&self) -> [f64; 4] {
		[self.x, self.y, self.z, self.w]
	}
}

macro_rules! tuple_traits {
	($ty:ty) => {
		impl PartialEq for $ty {
			fn eq(&self, other: &Self) -> bool {
				self.components().into_iter().zip(other.components()).all(|(a, b)| real_eq(a, b))
			}
		}

		impl Eq for $ty {}

		impl fmt::Display for $ty {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				for (idx, component) in self.components().into_iter().enumerate() {
					if idx > 0 {
						f.write_str(" ")?;
					}
					write!(f, "{component}")?;
				}
				Ok(())
			}
		}
	};
}

tuple_traits!(Vec2d);
tuple_traits!(Vec3d);
tuple_traits!(Vec4d);
