//! Builders
//!
//! Leaves of the provider layer: nodes that read published values
//! and build their child from them.

// Imports
use {
	crate::{Child, ChildSlot, Dependencies, Dependent, Element, Error, Node, Scope, node},
	lineage_context::Context,
	std::rc::Rc,
};

/// Child builder function
pub type BuildChildFn = Rc<dyn Fn(&Scope) -> Result<Child, Error>>;

/// Builder.
///
/// Builds its child from its scope, and is rebuilt whenever
/// any value it read changes.
#[derive(derive_more::Debug)]
pub struct Builder {
	/// Builder
	#[debug(skip)]
	build: BuildChildFn,
}

impl Builder {
	/// Creates a new builder
	pub fn new<F>(build: F) -> Self
	where
		F: Fn(&Scope) -> Result<Child, Error> + 'static,
	{
		Self { build: Rc::new(build) }
	}

	/// Creates a builder that looks up `D` before building.
	///
	/// Fails with a missing dependency if any of `D` isn't published.
	pub fn consume<D, F>(build: F) -> Self
	where
		D: Dependencies,
		F: Fn(&Scope, D) -> Result<Child, Error> + 'static,
	{
		Self::new(move |scope| {
			let deps = D::lookup(scope)?;
			build(scope, deps)
		})
	}
}

impl Node for Builder {
	fn create_element(self: Rc<Self>) -> Box<dyn Element> {
		Box::new(BuilderElement {
			node:      self,
			dependent: Dependent::new(),
			parent:    Context::new(),
			child:     ChildSlot::new(),
		})
	}
}

/// Builder element
struct BuilderElement {
	/// Node
	node: Rc<Builder>,

	/// Dependent
	dependent: Dependent,

	/// Parent context
	parent: Context,

	/// Child
	child: ChildSlot,
}

impl BuilderElement {
	/// Builds the child
	fn build(&mut self) -> Result<(), Error> {
		let scope = Scope::new(self.parent.clone(), &self.dependent, &self.dependent);
		let child = (self.node.build)(&scope)?;
		self.dependent.take_dirty();

		self.child.reconcile(child, self.parent.clone())
	}
}

impl Element for BuilderElement {
	fn mount(&mut self, parent: Context) -> Result<(), Error> {
		self.parent = parent;
		self.build()
	}

	fn update(&mut self, node: Child, parent: Context) -> Result<(), Error> {
		self.node = node::downcast(node);
		self.parent = parent;
		self.build()
	}

	fn pump(&mut self) -> Result<(), Error> {
		match self.dependent.take_dirty() {
			true => self.build(),
			false => self.child.pump(),
		}
	}

	fn unmount(&mut self) {
		self.child.unmount();
	}
}

/// Empty node
#[derive(Clone, Copy, Default, Debug)]
pub struct Empty;

impl Node for Empty {
	fn create_element(self: Rc<Self>) -> Box<dyn Element> {
		Box::new(EmptyElement)
	}
}

/// Empty element
struct EmptyElement;

impl Element for EmptyElement {
	fn mount(&mut self, _parent: Context) -> Result<(), Error> {
		Ok(())
	}

	fn update(&mut self, _node: Child, _parent: Context) -> Result<(), Error> {
		Ok(())
	}

	fn pump(&mut self) -> Result<(), Error> {
		Ok(())
	}

	fn unmount(&mut self) {}
}
