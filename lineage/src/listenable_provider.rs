//! Listenable provider
//!
//! Publishes a listenable object, notifying dependents each time it mutates.

// Imports
use {
	crate::{
		Bridge,
		BuildState,
		Child,
		ConfigError,
		Element,
		Error,
		Lifecycle,
		Node,
		ProviderElement,
		Scope,
		SingleChildNode,
		Source,
	},
	lineage_notify::{Dispose, Listenable},
	std::rc::Rc,
};

/// Listenable provider.
///
/// Dependents are notified once for any number of mutations between two
/// rebuilds, and when the listenable is replaced by another. Rebuilds for any
/// other reason don't notify them.
#[derive(derive_more::Debug)]
pub struct ListenableProvider<L> {
	/// Source
	source: Source<L>,

	/// Child
	#[debug(skip)]
	child: Child,
}

impl<L> ListenableProvider<L> {
	/// Creates a provider that builds its listenable with `build`, owning it.
	///
	/// The listenable is only disposed if a disposer is supplied with
	/// [`with_dispose`](Self::with_dispose), see [`owning`](Self::owning)
	/// to dispose it with [`Dispose`].
	pub fn new<F>(build: F, child: Child) -> Self
	where
		F: Fn(&Scope) -> L + 'static,
	{
		Self::from_source(Source::build(build), child)
	}

	/// Creates a provider that builds its listenable with `build`, and
	/// disposes it when unmounted.
	pub fn owning<F>(build: F, child: Child) -> Self
	where
		L: Dispose + 'static,
		F: Fn(&Scope) -> L + 'static,
	{
		let source = Source::Build {
			build:   Rc::new(build),
			dispose: Some(Rc::new(|_: &Scope, listenable: &L| listenable.dispose())),
		};

		Self::from_source(source, child)
	}

	/// Creates a provider publishing a caller-owned listenable
	pub const fn value(listenable: L, child: Child) -> Self {
		Self::from_source(Source::value(listenable), child)
	}

	/// Creates a provider from a source
	pub const fn from_source(source: Source<L>, child: Child) -> Self {
		Self { source, child }
	}

	/// Sets the disposer for the built listenable.
	///
	/// Fails if this provider publishes a caller-owned listenable.
	pub fn with_dispose<F>(self, dispose: F) -> Result<Self, ConfigError>
	where
		F: Fn(&Scope, &L) + 'static,
	{
		Ok(Self {
			source: self.source.with_dispose(dispose)?,
			..self
		})
	}
}

impl<L> Node for ListenableProvider<L>
where
	L: Listenable + Clone + PartialEq + 'static,
{
	fn create_element(self: Rc<Self>) -> Box<dyn Element> {
		Box::new(ProviderElement::<ListenableLifecycle<L>>::new(self))
	}
}

impl<L> SingleChildNode for ListenableProvider<L>
where
	L: Listenable + Clone + PartialEq + 'static,
{
	fn child(&self) -> &Child {
		&self.child
	}

	fn clone_with_child(&self, child: Child) -> Child {
		Rc::new(Self {
			source: self.source.clone(),
			child,
		})
	}
}

/// Listenable provider lifecycle
#[derive(Debug)]
pub struct ListenableLifecycle<L> {
	/// Build state
	state: BuildState<L>,

	/// Bridge
	bridge: Bridge<L>,
}

impl<L> Default for ListenableLifecycle<L> {
	fn default() -> Self {
		Self {
			state:  BuildState::new(),
			bridge: Bridge::new(),
		}
	}
}

impl<L> Lifecycle for ListenableLifecycle<L>
where
	L: Listenable + Clone + PartialEq + 'static,
{
	type Node = ListenableProvider<L>;
	type Value = L;

	fn resolve(&mut self, node: &Self::Node, scope: &Scope) -> Result<Self::Value, Error> {
		let bridge = &mut self.bridge;
		// Note: A change always means another instance is held, even if it compares equal
		let listenable = self.state.resolve(&node.source, scope, |_, new| bridge.subscribe(Some(new), scope));

		Ok(listenable.clone())
	}

	fn should_notify(&mut self, _node: &Self::Node, old: &Self::Value, new: &Self::Value) -> bool {
		// Note: The counter must always be checked, so its snapshot is kept up to date
		let mutated = self.bridge.counter().check();
		mutated || old != new
	}

	fn dispose(&mut self, _node: &Self::Node, scope: &Scope) {
		self.bridge.unlisten();
		self.state.dispose(scope);
	}
}
