//! Tree
//!
//! The host driving a tree of nodes: mounting, updating, pumping
//! rebuilds and unmounting.

// Imports
use {
	crate::{Child, ChildSlot, Error},
	lineage_context::Context,
};

/// Tree
#[derive(Debug, Default)]
pub struct Tree {
	/// Root
	root: ChildSlot,
}

impl Tree {
	/// Creates an empty tree
	#[must_use]
	pub const fn new() -> Self {
		Self { root: ChildSlot::new() }
	}

	/// Returns if a root is mounted
	#[must_use]
	pub const fn is_mounted(&self) -> bool {
		self.root.is_mounted()
	}

	/// Renders `node` as the root.
	///
	/// Mounts it if the tree is empty or the previous root has another type,
	/// otherwise updates the existing root with it.
	pub fn render(&mut self, node: Child) -> Result<(), Error> {
		tracing::trace!("Rendering tree root");
		self.root.reconcile(node, Context::new())
	}

	/// Rebuilds every dirty element, top-down
	pub fn pump(&mut self) -> Result<(), Error> {
		self.root.pump()
	}

	/// Unmounts the root.
	///
	/// Unmounting an empty tree is a no-op.
	pub fn unmount(&mut self) {
		if self.root.is_mounted() {
			tracing::trace!("Unmounting tree root");
		}
		self.root.unmount();
	}
}

impl Drop for Tree {
	fn drop(&mut self) {
		self.unmount();
	}
}
