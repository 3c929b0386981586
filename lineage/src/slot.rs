//! Publication slot
//!
//! The value a provider publishes for its subtree, along with
//! everyone that read it.

// Imports
use {
	crate::{Dependent, WeakDependent},
	core::{cell::RefCell, fmt, mem},
	std::rc::Rc,
};

/// Slot inner
struct Inner<T> {
	/// Value
	value: RefCell<T>,

	/// Dependents
	dependents: RefCell<Vec<WeakDependent>>,
}

/// Publication slot
pub struct Slot<T> {
	/// Inner
	inner: Rc<Inner<T>>,
}

impl<T> Slot<T> {
	/// Creates a new slot
	pub fn new(value: T) -> Self {
		let inner = Inner {
			value:      RefCell::new(value),
			dependents: RefCell::new(vec![]),
		};
		Self { inner: Rc::new(inner) }
	}

	/// Uses the value
	pub fn with<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&T) -> O,
	{
		let value = self
			.inner
			.value
			.try_borrow()
			.expect("Cannot use a published value while it's being replaced");
		f(&value)
	}

	/// Registers a dependent on this slot.
	///
	/// Registering the same dependent more than once has no effect.
	pub fn add_dependent(&self, dependent: &Dependent) {
		let mut dependents = self.inner.dependents.borrow_mut();
		dependents.retain(WeakDependent::is_alive);
		if !dependents.iter().any(|other| other.id() == dependent.id()) {
			dependents.push(dependent.downgrade());
		}
	}

	/// Returns the number of live dependents
	#[must_use]
	pub fn dependent_count(&self) -> usize {
		self.inner
			.dependents
			.borrow()
			.iter()
			.filter(|dependent| dependent.is_alive())
			.count()
	}

	/// Replaces the value.
	///
	/// `should_notify` is called with the old and new value, and if it returns `true`,
	/// all dependents are marked dirty. Returns whether they were.
	pub fn replace<F>(&self, value: T, should_notify: F) -> bool
	where
		F: FnOnce(&T, &T) -> bool,
	{
		let old = {
			let mut cur = self
				.inner
				.value
				.try_borrow_mut()
				.expect("Cannot replace a published value while it's being used");
			mem::replace(&mut *cur, value)
		};

		let notify = self.with(|new| should_notify(&old, new));
		if notify {
			self.notify();
		}

		notify
	}

	/// Marks all dependents dirty
	pub fn notify(&self) {
		let mut dependents = self.inner.dependents.borrow_mut();
		dependents.retain(WeakDependent::mark_dirty);
		tracing::trace!(dependents = dependents.len(), "Notifying dependents of published value");
	}
}

impl<T> Clone for Slot<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut s = f.debug_struct("Slot");
		match self.inner.value.try_borrow() {
			Ok(value) => s.field("value", &*value),
			Err(_) => s.field("value", &"<borrowed>"),
		};
		s.field("dependents", &self.dependent_count()).finish()
	}
}
