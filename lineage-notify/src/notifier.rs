//! Notifier
//!
//! The bare listenable: holds a list of listeners and
//! calls all of them on [`Notifier::notify`].

// Imports
use {
	crate::{Dispose, Listenable, Listener},
	core::{
		cell::{Cell, RefCell},
		fmt,
		hash::{Hash, Hasher},
		panic::Location,
	},
	std::rc::Rc,
};

/// Notifier inner
struct Inner {
	/// Listeners
	listeners: RefCell<Vec<Listener>>,

	/// Whether this notifier was disposed
	disposed: Cell<bool>,

	/// Where this notifier was defined
	defined_at: &'static Location<'static>,
}

/// Notifier
pub struct Notifier {
	/// Inner
	inner: Rc<Inner>,
}

impl Notifier {
	/// Creates a new notifier
	#[must_use]
	#[track_caller]
	pub fn new() -> Self {
		let inner = Inner {
			listeners:   RefCell::new(vec![]),
			disposed:    Cell::new(false),
			defined_at:  Location::caller(),
		};
		Self { inner: Rc::new(inner) }
	}

	/// Returns a unique identifier to this notifier.
	///
	/// Cloning the notifier will retain the same id
	#[must_use]
	pub fn id(&self) -> usize {
		Rc::as_ptr(&self.inner).addr()
	}

	/// Returns where this notifier was defined
	#[must_use]
	pub fn defined_at(&self) -> &'static Location<'static> {
		self.inner.defined_at
	}

	/// Returns the number of listeners currently registered
	#[must_use]
	pub fn listener_count(&self) -> usize {
		self.inner.listeners.borrow().len()
	}

	/// Returns if any listeners are registered
	#[must_use]
	pub fn has_listeners(&self) -> bool {
		self.listener_count() != 0
	}

	/// Returns if this notifier was disposed
	#[must_use]
	pub fn is_disposed(&self) -> bool {
		self.inner.disposed.get()
	}

	/// Calls every listener.
	///
	/// The listeners are snapshotted before calling any of them, so listeners
	/// may add or remove listeners (including themselves) while being called.
	#[track_caller]
	pub fn notify(&self) {
		if self.is_disposed() {
			tracing::warn!(
				notifier=?self,
				location=%Location::caller(),
				"Notifier was notified after being disposed"
			);
			return;
		}

		let listeners = self.inner.listeners.borrow().clone();
		tracing::trace!(notifier=?self, listeners=listeners.len(), "Notifying listeners");
		for listener in &listeners {
			listener.call();
		}
	}
}

impl Default for Notifier {
	fn default() -> Self {
		Self::new()
	}
}

impl Listenable for Notifier {
	#[track_caller]
	fn add_listener(&self, listener: Listener) {
		if self.is_disposed() {
			tracing::warn!(
				notifier=?self,
				location=%Location::caller(),
				"Listener was added to a disposed notifier, ignoring"
			);
			return;
		}

		self.inner.listeners.borrow_mut().push(listener);
	}

	fn remove_listener(&self, listener: &Listener) {
		let mut listeners = self.inner.listeners.borrow_mut();
		if let Some(idx) = listeners.iter().position(|other| other == listener) {
			listeners.remove(idx);
		}
	}
}

impl Dispose for Notifier {
	fn dispose(&self) {
		if self.inner.disposed.replace(true) {
			return;
		}

		tracing::trace!(notifier=?self, "Disposing notifier");
		self.inner.listeners.borrow_mut().clear();
	}
}

impl PartialEq for Notifier {
	fn eq(&self, other: &Self) -> bool {
		self.id() == other.id()
	}
}

impl Eq for Notifier {}

impl Clone for Notifier {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl Hash for Notifier {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id().hash(state);
	}
}

impl fmt::Debug for Notifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut s = f.debug_struct("Notifier");
		s.field("id", &self.id());
		s.field("defined_at", &format_args!("{}", self.defined_at()));
		match self.inner.listeners.try_borrow() {
			Ok(listeners) => s.field("listeners", &listeners.len()).finish(),
			Err(_) => s.finish_non_exhaustive(),
		}
	}
}
