//! Listener

// Imports
use {
	core::hash::{Hash, Hasher},
	std::rc::Rc,
};

/// Listener.
///
/// A shared callback with identity: clones of a listener compare equal,
/// which is what [`Listenable::remove_listener`](crate::Listenable::remove_listener)
/// uses to find it again.
#[derive(derive_more::Debug)]
pub struct Listener {
	/// Callback
	#[debug("{:#x}", Rc::as_ptr(inner).cast::<()>().addr())]
	inner: Rc<dyn Fn()>,
}

impl Listener {
	/// Creates a new listener
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Calls this listener
	pub fn call(&self) {
		(self.inner)();
	}

	/// Returns a unique identifier to this listener.
	///
	/// Cloning the listener will retain the same id
	#[must_use]
	pub fn id(&self) -> usize {
		Rc::as_ptr(&self.inner).cast::<()>().addr()
	}
}

impl Clone for Listener {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl PartialEq for Listener {
	fn eq(&self, other: &Self) -> bool {
		self.id() == other.id()
	}
}

impl Eq for Listener {}

impl Hash for Listener {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id().hash(state);
	}
}
