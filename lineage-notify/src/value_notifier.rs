//! Value notifier
//!
//! A value that notifies its listeners whenever it's changed.

// Imports
use {
	crate::{Dispose, Listenable, Listener, Notifier, ValueListenable},
	core::{cell::RefCell, fmt, mem},
	std::rc::Rc,
};

/// Inner
struct Inner<T> {
	/// Value
	value: RefCell<T>,

	/// Notifier
	notifier: Notifier,
}

/// Value notifier
pub struct ValueNotifier<T> {
	/// Inner
	inner: Rc<Inner<T>>,
}

impl<T> ValueNotifier<T> {
	/// Creates a new value notifier
	#[track_caller]
	pub fn new(value: T) -> Self {
		let inner = Inner {
			value:    RefCell::new(value),
			notifier: Notifier::new(),
		};
		Self { inner: Rc::new(inner) }
	}

	/// Returns a unique identifier to this value notifier.
	#[must_use]
	pub fn id(&self) -> usize {
		self.inner.notifier.id()
	}

	/// Returns the underlying notifier
	#[must_use]
	pub fn notifier(&self) -> &Notifier {
		&self.inner.notifier
	}

	/// Gets the value
	#[must_use]
	pub fn get(&self) -> T
	where
		T: Copy,
	{
		self.with(|value| *value)
	}

	/// Gets a clone of the value
	#[must_use]
	pub fn get_cloned(&self) -> T
	where
		T: Clone,
	{
		self.with(T::clone)
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
			.expect("Cannot use value while updating it");
		f(&value)
	}

	/// Sets the value.
	///
	/// Listeners are only notified if the new value is different.
	/// Returns whether they were.
	#[track_caller]
	pub fn set(&self, new_value: T) -> bool
	where
		T: PartialEq,
	{
		let changed = {
			let mut value = self
				.inner
				.value
				.try_borrow_mut()
				.expect("Cannot update value while using it");
			match *value == new_value {
				true => false,
				false => {
					*value = new_value;
					true
				},
			}
		};

		if changed {
			self.inner.notifier.notify();
		}

		changed
	}

	/// Replaces the value, always notifying listeners
	#[track_caller]
	pub fn replace(&self, new_value: T) -> T {
		self.update(|value| mem::replace(value, new_value))
	}

	/// Updates the value in place, always notifying listeners
	#[track_caller]
	pub fn update<F, O>(&self, f: F) -> O
	where
		F: FnOnce(&mut T) -> O,
	{
		// Update the value and get the output
		let output = {
			let mut value = self
				.inner
				.value
				.try_borrow_mut()
				.expect("Cannot update value while using it");
			f(&mut value)
		};

		// Then notify, after the borrow is released so listeners may read the value
		self.inner.notifier.notify();

		output
	}
}

impl<T> Listenable for ValueNotifier<T> {
	#[track_caller]
	fn add_listener(&self, listener: Listener) {
		self.inner.notifier.add_listener(listener);
	}

	fn remove_listener(&self, listener: &Listener) {
		self.inner.notifier.remove_listener(listener);
	}
}

impl<T: Clone> ValueListenable for ValueNotifier<T> {
	type Value = T;

	fn value(&self) -> Self::Value {
		self.get_cloned()
	}
}

impl<T> Dispose for ValueNotifier<T> {
	fn dispose(&self) {
		self.inner.notifier.dispose();
	}
}

impl<T> PartialEq for ValueNotifier<T> {
	fn eq(&self, other: &Self) -> bool {
		self.id() == other.id()
	}
}

impl<T> Eq for ValueNotifier<T> {}

impl<T> Clone for ValueNotifier<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for ValueNotifier<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut s = f.debug_struct("ValueNotifier");
		match self.inner.value.try_borrow() {
			Ok(value) => s.field("value", &*value),
			Err(_) => s.field("value", &"<borrowed>"),
		};
		s.field("notifier", &self.inner.notifier).finish()
	}
}
