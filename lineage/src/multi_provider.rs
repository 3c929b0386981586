//! Multi provider
//!
//! Nests several providers over a single child, so they don't have to
//! be written out one inside the other.

// Imports
use {
	crate::{Child, ChildSlot, Element, Error, Node, SingleChildNode, node},
	lineage_context::Context,
	std::rc::Rc,
};

/// Multi provider.
///
/// The first provider ends up outermost, so later providers, and the
/// child, see everything published by earlier ones.
#[derive(derive_more::Debug)]
pub struct MultiProvider {
	/// Providers
	#[debug(skip)]
	providers: Vec<Rc<dyn SingleChildNode>>,

	/// Child
	#[debug(skip)]
	child: Child,
}

impl MultiProvider {
	/// Creates a new multi provider
	#[must_use]
	pub const fn new(providers: Vec<Rc<dyn SingleChildNode>>, child: Child) -> Self {
		Self { providers, child }
	}

	/// Adds a provider, nested inside all previous ones
	#[must_use]
	pub fn with_provider<P>(mut self, provider: P) -> Self
	where
		P: SingleChildNode,
	{
		self.providers.push(Rc::new(provider));
		self
	}

	/// Returns the providers nested over the child
	#[must_use]
	pub fn nested(&self) -> Child {
		self.providers
			.iter()
			.rev()
			.fold(Rc::clone(&self.child), |child, provider| provider.clone_with_child(child))
	}
}

impl Node for MultiProvider {
	fn create_element(self: Rc<Self>) -> Box<dyn Element> {
		Box::new(MultiProviderElement {
			node:  self,
			child: ChildSlot::new(),
		})
	}
}

impl SingleChildNode for MultiProvider {
	fn child(&self) -> &Child {
		&self.child
	}

	fn clone_with_child(&self, child: Child) -> Child {
		Rc::new(Self {
			providers: self.providers.clone(),
			child,
		})
	}
}

/// Multi provider element
struct MultiProviderElement {
	/// Node
	node: Rc<MultiProvider>,

	/// Child
	child: ChildSlot,
}

impl Element for MultiProviderElement {
	fn mount(&mut self, parent: Context) -> Result<(), Error> {
		self.child.reconcile(self.node.nested(), parent)
	}

	fn update(&mut self, node: Child, parent: Context) -> Result<(), Error> {
		self.node = node::downcast(node);
		self.child.reconcile(self.node.nested(), parent)
	}

	fn pump(&mut self) -> Result<(), Error> {
		self.child.pump()
	}

	fn unmount(&mut self) {
		self.child.unmount();
	}
}
