//! Handle-addressed storage for variants and field values.
//!
//! A [`Store`] owns every value it hands out a [`Handle`] for. Handles are
//! plain copyable tokens; releasing one vacates its slot and bumps the slot
//! generation, so any later use of a copy of that handle fails with
//! [`MetaError::UseAfterFree`] instead of reaching whatever occupies the slot
//! next. Dropping the store drops every value still live in it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::size_of;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::meta::{FieldValue, Kind, MetaError, Result, Variant};

/// Store of variants.
pub type VariantStore = Store<Variant>;
/// Store of field values.
pub type FieldStore = Store<FieldValue>;

/// Value type that a [`Store`] can account for, copy and compare.
pub trait Managed: Sized {
	/// Heap bytes owned by the value, charged against [`StoreLimits::max_bytes`].
	fn footprint(&self) -> usize;

	/// Deep copy with fallible allocation.
	fn try_duplicate(&self) -> Result<Self>;

	/// Value equality used by [`Store::compare`].
	fn same(&self, other: &Self) -> bool;
}

impl Managed for Variant {
	fn footprint(&self) -> usize {
		Variant::footprint(self)
	}

	fn try_duplicate(&self) -> Result<Self> {
		self.try_clone()
	}

	fn same(&self, other: &Self) -> bool {
		self.equals(other)
	}
}

impl Managed for FieldValue {
	fn footprint(&self) -> usize {
		FieldValue::footprint(self)
	}

	fn try_duplicate(&self) -> Result<Self> {
		self.try_clone()
	}

	fn same(&self, other: &Self) -> bool {
		self.is_equal(other)
	}
}

/// Capacity limits enforced on insert, copy and replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLimits {
	/// Maximum number of live values.
	pub max_live: usize,
	/// Maximum summed footprint of live values.
	pub max_bytes: usize,
}

impl Default for StoreLimits {
	fn default() -> Self {
		Self {
			max_live: 1 << 20,
			max_bytes: 256 << 20,
		}
	}
}

impl StoreLimits {
	/// No limits beyond what the allocator grants.
	pub fn unbounded() -> Self {
		Self {
			max_live: usize::MAX,
			max_bytes: usize::MAX,
		}
	}
}

/// Opaque token addressing one value in a [`Store`].
pub struct Handle<T> {
	store: u32,
	index: u32,
	generation: u32,
	_marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
	fn new(store: u32, index: u32, generation: u32) -> Self {
		Self {
			store,
			index,
			generation,
			_marker: PhantomData,
		}
	}

	/// Slot index.
	pub fn index(&self) -> u32 {
		self.index
	}

	/// Slot generation the handle was issued for.
	pub fn generation(&self) -> u32 {
		self.generation
	}

	fn stale(&self) -> MetaError {
		MetaError::UseAfterFree {
			index: self.index,
			generation: self.generation,
		}
	}
}

impl<T> Clone for Handle<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
	fn eq(&self, other: &Self) -> bool {
		self.store == other.store && self.index == other.index && self.generation == other.generation
	}
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.store.hash(state);
		self.index.hash(state);
		self.generation.hash(state);
	}
}

impl<T> fmt::Debug for Handle<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Handle({}:{}#{})", self.store, self.index, self.generation)
	}
}

enum Slot<T> {
	Occupied { generation: u32, value: T },
	Vacant { generation: u32 },
}

impl<T> Slot<T> {
	fn live(&self, handle: Handle<T>) -> Option<&T> {
		match self {
			Slot::Occupied { generation, value } if *generation == handle.generation => Some(value),
			_ => None,
		}
	}

	fn live_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
		match self {
			Slot::Occupied { generation, value } if *generation == handle.generation => Some(value),
			_ => None,
		}
	}
}

static NEXT_STORE_ID: AtomicU32 = AtomicU32::new(0);

/// Generational arena owning values addressed by [`Handle`].
///
/// Handles carry the id of the store that issued them; any other store
/// treats them as stale.
pub struct Store<T> {
	id: u32,
	slots: Vec<Slot<T>>,
	free: Vec<u32>,
	live: usize,
	bytes: usize,
	limits: StoreLimits,
}

impl<T: Managed> Default for Store<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for Store<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Store")
			.field("live", &self.live)
			.field("bytes", &self.bytes)
			.field("slots", &self.slots.len())
			.field("limits", &self.limits)
			.finish()
	}
}

impl<T: Managed> Store<T> {
	/// Empty store with default limits.
	pub fn new() -> Self {
		Self::with_limits(StoreLimits::default())
	}

	/// Empty store with explicit limits.
	pub fn with_limits(limits: StoreLimits) -> Self {
		Self {
			id: NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed),
			slots: Vec::new(),
			free: Vec::new(),
			live: 0,
			bytes: 0,
			limits,
		}
	}

	/// Configured limits.
	pub fn limits(&self) -> StoreLimits {
		self.limits
	}

	/// Number of live values.
	pub fn len(&self) -> usize {
		self.live
	}

	/// Whether no value is live.
	pub fn is_empty(&self) -> bool {
		self.live == 0
	}

	/// Summed footprint of live values.
	pub fn bytes_in_use(&self) -> usize {
		self.bytes
	}

	/// Whether `handle` addresses a live value.
	pub fn contains(&self, handle: Handle<T>) -> bool {
		self.get(handle).is_ok()
	}

	/// Take ownership of `value` and return its handle.
	///
	/// When a limit would be exceeded the value is dropped and nothing is registered.
	pub fn insert(&mut self, value: T) -> Result<Handle<T>> {
		let size = value.footprint();
		if self.live >= self.limits.max_live {
			return Err(MetaError::Allocation {
				requested: self.live + 1,
				limit: self.limits.max_live,
			});
		}
		let bytes = self.charge(0, size)?;

		let index = match self.free.pop() {
			Some(index) => index,
			None => {
				let index = u32::try_from(self.slots.len()).map_err(|_| MetaError::Allocation {
					requested: self.slots.len() + 1,
					limit: u32::MAX as usize,
				})?;
				self.slots
					.try_reserve(1)
					.map_err(|_| MetaError::reserve_failed(size_of::<Slot<T>>()))?;
				self.slots.push(Slot::Vacant { generation: 0 });
				index
			}
		};

		let slot = &mut self.slots[index as usize];
		let generation = match slot {
			Slot::Vacant { generation } | Slot::Occupied { generation, .. } => *generation,
		};
		*slot = Slot::Occupied { generation, value };
		self.live += 1;
		self.bytes = bytes;
		Ok(Handle::new(self.id, index, generation))
	}

	/// Borrow the value behind `handle`.
	pub fn get(&self, handle: Handle<T>) -> Result<&T> {
		self.slot_index(handle)
			.and_then(|index| self.slots.get(index))
			.and_then(|slot| slot.live(handle))
			.ok_or_else(|| handle.stale())
	}

	/// Deep copy the value behind `handle` into a new slot.
	pub fn copy(&mut self, handle: Handle<T>) -> Result<Handle<T>> {
		let copy = self.get(handle)?.try_duplicate()?;
		self.insert(copy)
	}

	/// Compare the values behind two handles.
	pub fn compare(&self, a: Handle<T>, b: Handle<T>) -> Result<bool> {
		Ok(self.get(a)?.same(self.get(b)?))
	}

	/// Swap in `value` and return the previous value.
	///
	/// On error the stored value is untouched and `value` is dropped.
	pub fn replace(&mut self, handle: Handle<T>, value: T) -> Result<T> {
		let old_size = self.get(handle)?.footprint();
		let bytes = self.charge(old_size, value.footprint())?;
		let slot = self.live_mut(handle)?;
		let previous = std::mem::replace(slot, value);
		self.bytes = bytes;
		Ok(previous)
	}

	/// Release the value behind `handle` and hand it back to the caller.
	///
	/// Releasing the same handle again fails with [`MetaError::UseAfterFree`].
	pub fn release(&mut self, handle: Handle<T>) -> Result<T> {
		let slot = self
			.slot_index(handle)
			.and_then(|index| self.slots.get_mut(index))
			.ok_or_else(|| handle.stale())?;
		let next = Slot::Vacant {
			generation: handle.generation.wrapping_add(1),
		};
		match std::mem::replace(slot, next) {
			Slot::Occupied { generation, value } if generation == handle.generation => {
				// A slot whose generation would wrap is retired rather than reused.
				if generation != u32::MAX {
					self.free.push(handle.index);
				}
				self.live -= 1;
				self.bytes -= value.footprint();
				Ok(value)
			}
			previous => {
				*slot = previous;
				Err(handle.stale())
			}
		}
	}

	/// Slot position for a handle issued by this store.
	fn slot_index(&self, handle: Handle<T>) -> Option<usize> {
		(handle.store == self.id).then_some(handle.index as usize)
	}

	fn live_mut(&mut self, handle: Handle<T>) -> Result<&mut T> {
		self.slot_index(handle)
			.and_then(|index| self.slots.get_mut(index))
			.and_then(|slot| slot.live_mut(handle))
			.ok_or_else(|| handle.stale())
	}

	/// Total bytes after swapping a value of `old` bytes for one of `new` bytes.
	fn charge(&self, old: usize, new: usize) -> Result<usize> {
		let total = (self.bytes - old).saturating_add(new);
		if total > self.limits.max_bytes {
			return Err(MetaError::Allocation {
				requested: total,
				limit: self.limits.max_bytes,
			});
		}
		Ok(total)
	}
}

impl Store<Variant> {
	/// Kind of the variant behind `handle`.
	pub fn kind_of(&self, handle: Handle<Variant>) -> Result<Kind> {
		Ok(self.get(handle)?.kind())
	}

	/// Replace the variant behind `handle`, dropping the previous payload.
	pub fn reset(&mut self, handle: Handle<Variant>, value: impl Into<Variant>) -> Result<()> {
		self.replace(handle, value.into()).map(drop)
	}
}

impl Store<FieldValue> {
	/// Name of the field behind `handle`.
	pub fn name_of(&self, handle: Handle<FieldValue>) -> Result<&str> {
		Ok(self.get(handle)?.name())
	}

	/// Copy the value of field `src` into field `dst`, keeping `dst`'s name.
	pub fn assign_value(&mut self, dst: Handle<FieldValue>, src: Handle<FieldValue>) -> Result<()> {
		let value = self.get(src)?.value().try_clone()?;
		let target = self.get(dst)?;
		let bytes = self.charge(target.footprint(), target.name().len() + value.footprint())?;
		self.live_mut(dst)?.set_value(value);
		self.bytes = bytes;
		Ok(())
	}
}
