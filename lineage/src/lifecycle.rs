//! Lifecycle
//!
//! The per-kind logic of a provider, driven by [`ProviderElement`](crate::ProviderElement).

// Imports
use crate::{Error, Scope, SingleChildNode};

/// Provider lifecycle
pub trait Lifecycle: Default + 'static {
	/// Node
	type Node: SingleChildNode;

	/// Published value
	type Value: 'static;

	/// Resolves the value to publish for `node`.
	///
	/// Called on mount, on every update and on every rebuild.
	fn resolve(&mut self, node: &Self::Node, scope: &Scope) -> Result<Self::Value, Error>;

	/// Called when any value read during [`resolve`](Self::resolve) changed,
	/// or when the node was replaced, before resolving again.
	fn on_dependency_changed(&mut self) {}

	/// Returns whether dependents of the published value must be notified
	/// when it's replaced by `new`.
	fn should_notify(&mut self, node: &Self::Node, old: &Self::Value, new: &Self::Value) -> bool;

	/// Disposes of everything this lifecycle owns.
	///
	/// May be called more than once, and without ever resolving.
	fn dispose(&mut self, node: &Self::Node, scope: &Scope);
}
