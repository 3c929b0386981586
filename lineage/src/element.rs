//! Elements
//!
//! The mounted, stateful, counterpart of a [`Node`].

// Imports
use {
	crate::{Child, Dependent, Error, Lifecycle, Scope, SingleChildNode, Slot, node},
	core::fmt,
	lineage_context::Context,
	std::rc::Rc,
};

/// Element
pub trait Element {
	/// Mounts this element under `parent`
	fn mount(&mut self, parent: Context) -> Result<(), Error>;

	/// Updates this element with a new node of the same type
	fn update(&mut self, node: Child, parent: Context) -> Result<(), Error>;

	/// Rebuilds this element if it's dirty, otherwise pumps its children
	fn pump(&mut self) -> Result<(), Error>;

	/// Unmounts this element.
	///
	/// Children are unmounted before their parents. Unmounting twice is a no-op.
	fn unmount(&mut self);
}

/// Mounted child
struct Mounted {
	/// Node
	node: Child,

	/// Element
	element: Box<dyn Element>,
}

/// Child slot.
///
/// Holds the element of a single child and reconciles it with new nodes.
#[derive(Default)]
pub struct ChildSlot {
	/// Mounted child
	mounted: Option<Mounted>,
}

impl ChildSlot {
	/// Creates an empty child slot
	#[must_use]
	pub const fn new() -> Self {
		Self { mounted: None }
	}

	/// Returns if a child is mounted
	#[must_use]
	pub const fn is_mounted(&self) -> bool {
		self.mounted.is_some()
	}

	/// Reconciles the child with `node`.
	///
	/// If `node` is the node already mounted, the element is only pumped.
	/// If it has the same type, the element is updated, otherwise the
	/// previous element is unmounted and a new one mounted.
	pub fn reconcile(&mut self, node: Child, parent: Context) -> Result<(), Error> {
		if let Some(mounted) = &mut self.mounted {
			if node::same(&mounted.node, &node) {
				return mounted.element.pump();
			}

			if node::type_of(&mounted.node) == node::type_of(&node) {
				mounted.node = Rc::clone(&node);
				return mounted.element.update(node, parent);
			}
		}

		self.unmount();

		// Note: The element is kept even if mounting fails, so whatever
		//       it did build is still disposed on unmount.
		let element = Rc::clone(&node).create_element();
		let mounted = self.mounted.insert(Mounted { node, element });
		mounted.element.mount(parent)
	}

	/// Pumps the child
	pub fn pump(&mut self) -> Result<(), Error> {
		match &mut self.mounted {
			Some(mounted) => mounted.element.pump(),
			None => Ok(()),
		}
	}

	/// Unmounts the child
	pub fn unmount(&mut self) {
		if let Some(mut mounted) = self.mounted.take() {
			mounted.element.unmount();
		}
	}
}

impl fmt::Debug for ChildSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ChildSlot")
			.field("mounted", &self.is_mounted())
			.finish()
	}
}

/// Provider element.
///
/// Publishes the value resolved by its [`Lifecycle`] for its child.
pub struct ProviderElement<L: Lifecycle> {
	/// Node
	node: Rc<L::Node>,

	/// Lifecycle
	lifecycle: L,

	/// Dependent registered on the values read while resolving
	dependent: Dependent,

	/// Dependent marked when the lifecycle requests a rebuild
	rebuild: Dependent,

	/// Parent context
	parent: Context,

	/// Published value
	slot: Option<Slot<L::Value>>,

	/// Child
	child: ChildSlot,
}

impl<L: Lifecycle> ProviderElement<L> {
	/// Creates a new provider element
	#[must_use]
	pub fn new(node: Rc<L::Node>) -> Self {
		Self {
			node,
			lifecycle: L::default(),
			dependent: Dependent::new(),
			rebuild: Dependent::new(),
			parent: Context::new(),
			slot: None,
			child: ChildSlot::new(),
		}
	}

	/// Returns the scope of this element
	fn scope(&self) -> Scope {
		Scope::new(self.parent.clone(), &self.dependent, &self.rebuild)
	}

	/// Resolves and publishes the value, then reconciles the child
	fn build(&mut self) -> Result<(), Error> {
		let scope = self.scope();
		let value = self.lifecycle.resolve(&self.node, &scope)?;

		// Note: Anything the lifecycle observed while resolving is already accounted for.
		self.rebuild.take_dirty();

		let slot = match &self.slot {
			Some(slot) => {
				slot.replace(value, |old, new| self.lifecycle.should_notify(&self.node, old, new));
				slot.clone()
			},
			None => Slot::new(value),
		};
		self.slot = Some(slot.clone());

		let context = self.parent.provide(slot);
		self.child.reconcile(Rc::clone(self.node.child()), context)
	}
}

impl<L: Lifecycle> Element for ProviderElement<L> {
	fn mount(&mut self, parent: Context) -> Result<(), Error> {
		self.parent = parent;
		self.build()
	}

	fn update(&mut self, node: Child, parent: Context) -> Result<(), Error> {
		self.node = node::downcast(node);
		self.parent = parent;
		self.dependent.take_dirty();
		self.lifecycle.on_dependency_changed();
		self.build()
	}

	fn pump(&mut self) -> Result<(), Error> {
		let dependency_changed = self.dependent.take_dirty();
		let rebuild = self.rebuild.take_dirty();
		if dependency_changed {
			self.lifecycle.on_dependency_changed();
		}

		match dependency_changed || rebuild {
			true => self.build(),
			false => self.child.pump(),
		}
	}

	fn unmount(&mut self) {
		self.child.unmount();

		let scope = self.scope();
		self.lifecycle.dispose(&self.node, &scope);
	}
}
