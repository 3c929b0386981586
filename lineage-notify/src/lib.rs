//! Listenable objects for `lineage`
//!
//! A listenable is anything that can tell interested parties that it mutated.
//! [`Notifier`] is the bare version, [`ValueNotifier`] additionally carries a
//! value that can be read at any time.

// Modules
pub mod listener;
pub mod notifier;
pub mod value_notifier;

// Exports
pub use self::{listener::Listener, notifier::Notifier, value_notifier::ValueNotifier};

/// Objects that may be listened to for mutations.
///
/// Listenables are handles: clones share the same listeners. When a listenable
/// implements [`PartialEq`], it should compare handles by identity. Two distinct
/// listenables comparing equal look like the same listenable to their users.
pub trait Listenable {
	/// Adds a listener, called on every mutation
	fn add_listener(&self, listener: Listener);

	/// Removes a listener previously added.
	///
	/// Removing a listener that isn't registered is a no-op.
	fn remove_listener(&self, listener: &Listener);
}

/// Listenables with a readable current value
pub trait ValueListenable: Listenable {
	/// Value type
	type Value;

	/// Returns the current value
	fn value(&self) -> Self::Value;
}

/// Objects that need explicit teardown once their owner is done with them
pub trait Dispose {
	/// Disposes of this object
	fn dispose(&self);
}
