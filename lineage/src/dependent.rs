//! Dependents
//!
//! A dependent is the dirty flag of an element. Reading a published
//! value registers the reader's dependent on that value's slot, and
//! the slot marks it dirty when the value changes.

// Imports
use {
	core::{cell::Cell, fmt},
	std::rc::{Rc, Weak},
};

/// Dependent inner
struct Inner {
	/// Whether the owner must be rebuilt
	dirty: Cell<bool>,
}

/// Dependent
pub struct Dependent {
	/// Inner
	inner: Rc<Inner>,
}

impl Dependent {
	/// Creates a new, clean, dependent
	#[must_use]
	pub fn new() -> Self {
		let inner = Inner { dirty: Cell::new(false) };
		Self { inner: Rc::new(inner) }
	}

	/// Returns a unique identifier to this dependent.
	///
	/// Downgrading and cloning the dependent will retain the same id
	#[must_use]
	pub fn id(&self) -> usize {
		Rc::as_ptr(&self.inner).addr()
	}

	/// Returns if this dependent is dirty
	#[must_use]
	pub fn is_dirty(&self) -> bool {
		self.inner.dirty.get()
	}

	/// Marks this dependent as dirty
	pub fn mark_dirty(&self) {
		self.inner.dirty.set(true);
	}

	/// Returns if this dependent was dirty, cleaning it
	pub fn take_dirty(&self) -> bool {
		self.inner.dirty.replace(false)
	}

	/// Downgrades this dependent
	#[must_use]
	pub fn downgrade(&self) -> WeakDependent {
		WeakDependent {
			inner: Rc::downgrade(&self.inner),
		}
	}
}

impl Default for Dependent {
	fn default() -> Self {
		Self::new()
	}
}

impl Clone for Dependent {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl PartialEq for Dependent {
	fn eq(&self, other: &Self) -> bool {
		self.id() == other.id()
	}
}

impl Eq for Dependent {}

impl fmt::Debug for Dependent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dependent")
			.field("id", &self.id())
			.field("dirty", &self.is_dirty())
			.finish()
	}
}

/// Weak dependent.
///
/// Doesn't keep its element alive, so it may be handed to listeners
/// that outlive the element.
pub struct WeakDependent {
	/// Inner
	inner: Weak<Inner>,
}

impl WeakDependent {
	/// Creates an empty weak dependent
	#[must_use]
	pub const fn new() -> Self {
		Self { inner: Weak::new() }
	}

	/// Returns a unique identifier to this dependent.
	///
	/// Upgrading and cloning the dependent will retain the same id
	#[must_use]
	pub fn id(&self) -> usize {
		Weak::as_ptr(&self.inner).addr()
	}

	/// Upgrades this weak dependent
	#[must_use]
	pub fn upgrade(&self) -> Option<Dependent> {
		let inner = self.inner.upgrade()?;
		Some(Dependent { inner })
	}

	/// Returns if the dependent is still alive
	#[must_use]
	pub fn is_alive(&self) -> bool {
		self.inner.strong_count() != 0
	}

	/// Marks the dependent as dirty, if it's still alive.
	///
	/// Returns whether it was.
	pub fn mark_dirty(&self) -> bool {
		match self.upgrade() {
			Some(dependent) => {
				dependent.mark_dirty();
				true
			},
			None => false,
		}
	}
}

impl Default for WeakDependent {
	fn default() -> Self {
		Self::new()
	}
}

impl Clone for WeakDependent {
	fn clone(&self) -> Self {
		Self {
			inner: Weak::clone(&self.inner),
		}
	}
}

impl PartialEq for WeakDependent {
	fn eq(&self, other: &Self) -> bool {
		self.id() == other.id()
	}
}

impl Eq for WeakDependent {}

impl fmt::Debug for WeakDependent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.upgrade() {
			Some(dependent) => f.debug_tuple("WeakDependent").field(&dependent).finish(),
			None => f.debug_struct("WeakDependent").finish_non_exhaustive(),
		}
	}
}

#[cfg(test)]
mod test {
	// Imports
	use super::*;

	#[test]
	fn take_dirty() {
		let dependent = Dependent::new();
		assert!(!dependent.take_dirty(), "New dependent was dirty");

		dependent.mark_dirty();
		assert!(dependent.take_dirty());
		assert!(!dependent.is_dirty(), "Taking didn't clean the dependent");
	}

	#[test]
	fn weak() {
		let dependent = Dependent::new();
		let weak = dependent.downgrade();

		assert_eq!(weak.id(), dependent.id());
		assert!(weak.mark_dirty());
		assert!(dependent.is_dirty());

		drop(dependent);
		assert!(!weak.is_alive());
		assert!(!weak.mark_dirty(), "Marked a dropped dependent");
		assert!(WeakDependent::new().upgrade().is_none());
	}
}
