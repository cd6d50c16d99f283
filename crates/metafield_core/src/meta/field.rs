use std::fmt;
use std::str::FromStr;

use crate::meta::variant::try_copy_str;
use crate::meta::{Kind, MetaError, Result, Variant};

/// Named value: the atomic `(name, value)` unit of a metadata record.
///
/// The field owns its variant outright. Cloning copies both name and value,
/// and equality requires both to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
	name: Box<str>,
	value: Variant,
}

impl FieldValue {
	/// Build a field from a non-empty name, taking ownership of `value`.
	pub fn new(name: impl Into<String>, value: Variant) -> Result<Self> {
		let name = checked_name(name.into())?;
		Ok(Self { name, value })
	}

	/// Build a field from a non-empty name and a deep copy of `value`.
	pub fn copied(name: impl Into<String>, value: &Variant) -> Result<Self> {
		let name = checked_name(name.into())?;
		let value = value.try_clone()?;
		Ok(Self { name, value })
	}

	/// Deep copy that reports allocation failure instead of aborting.
	pub fn try_clone(&self) -> Result<Self> {
		Ok(Self {
			name: try_copy_str(&self.name)?.into_boxed_str(),
			value: self.value.try_clone()?,
		})
	}

	/// Field name; empty only for a default-constructed field.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Owned value.
	pub fn value(&self) -> &Variant {
		&self.value
	}

	/// Mutable access to the owned value.
	pub fn value_mut(&mut self) -> &mut Variant {
		&mut self.value
	}

	/// Kind of the owned value.
	pub fn kind(&self) -> Kind {
		self.value.kind()
	}

	/// Names and values both equal.
	pub fn is_equal(&self, other: &FieldValue) -> bool {
		self.name == other.name && self.value.equals(&other.value)
	}

	/// Replace this field's value with a deep copy of `other`'s value.
	///
	/// The name is kept. On allocation failure the current value is kept.
	pub fn assign_from(&mut self, other: &FieldValue) -> Result<()> {
		self.value.reset_from(&other.value)
	}

	/// Install a new value, dropping the previous one.
	pub fn set_value(&mut self, value: impl Into<Variant>) {
		self.value.reset(value);
	}

	/// Heap bytes owned by name and value.
	pub fn footprint(&self) -> usize {
		self.name.len() + self.value.footprint()
	}

	/// Consume the field, keeping its value.
	pub fn into_value(self) -> Variant {
		self.value
	}

	/// Consume the field into name and value.
	pub fn into_parts(self) -> (String, Variant) {
		(self.name.into_string(), self.value)
	}
}

fn checked_name(name: String) -> Result<Box<str>> {
	if name.is_empty() {
		return Err(MetaError::invalid("field name must not be empty"));
	}
	Ok(name.into_boxed_str())
}

/// Renders `name=kind:text`.
impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}={}:{}", self.name, self.value.kind(), self.value)
	}
}

/// Parses `name=kind:text`; the name ends at the first `=`.
impl FromStr for FieldValue {
	type Err = MetaError;

	fn from_str(s: &str) -> Result<Self> {
		let (name, tagged) = s
			.split_once('=')
			.ok_or_else(|| MetaError::invalid(format!("expected name=kind:text, got {s:?}")))?;
		FieldValue::new(name, Variant::parse_tagged(tagged)?)
	}
}
