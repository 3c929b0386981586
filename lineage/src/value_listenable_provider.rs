//! Value listenable provider
//!
//! Publishes the current value of a listenable, rather than the listenable itself.

// Imports
use {
	crate::{
		Bridge,
		BuildState,
		Child,
		Element,
		Error,
		Lifecycle,
		Node,
		ProviderElement,
		Scope,
		SingleChildNode,
		Source,
		value_provider::ShouldNotifyFn,
	},
	lineage_notify::{Dispose, ValueListenable},
	std::rc::Rc,
};

/// Value listenable provider.
///
/// Only `L::Value` is published, `L` itself isn't visible to the subtree.
/// The value is re-read every time the listenable mutates, and whenever
/// the listenable is replaced.
#[derive(derive_more::Debug)]
pub struct ValueListenableProvider<L: ValueListenable> {
	/// Source
	source: Source<L>,

	/// Dirty-check
	#[debug(skip)]
	should_notify: Option<ShouldNotifyFn<L::Value>>,

	/// Child
	#[debug(skip)]
	child: Child,
}

impl<L: ValueListenable> ValueListenableProvider<L> {
	/// Creates a provider that builds its listenable with `build`.
	///
	/// The listenable is owned by the provider and disposed when unmounted.
	pub fn new<F>(build: F, child: Child) -> Self
	where
		L: Dispose + 'static,
		F: Fn(&Scope) -> L + 'static,
	{
		let source = Source::Build {
			build:   Rc::new(build),
			dispose: Some(Rc::new(|_: &Scope, listenable: &L| listenable.dispose())),
		};

		Self {
			source,
			should_notify: None,
			child,
		}
	}

	/// Creates a provider for a caller-owned listenable.
	///
	/// The listenable is never disposed by the provider.
	pub const fn value(listenable: L, child: Child) -> Self {
		Self {
			source: Source::value(listenable),
			should_notify: None,
			child,
		}
	}

	/// Replaces the dirty-check
	#[must_use]
	pub fn with_should_notify<F>(self, should_notify: F) -> Self
	where
		F: Fn(&L::Value, &L::Value) -> bool + 'static,
	{
		Self {
			should_notify: Some(Rc::new(should_notify)),
			..self
		}
	}
}

impl<L> Node for ValueListenableProvider<L>
where
	L: ValueListenable + Clone + PartialEq + 'static,
	L::Value: PartialEq + 'static,
{
	fn create_element(self: Rc<Self>) -> Box<dyn Element> {
		Box::new(ProviderElement::<ValueListenableLifecycle<L>>::new(self))
	}
}

impl<L> SingleChildNode for ValueListenableProvider<L>
where
	L: ValueListenable + Clone + PartialEq + 'static,
	L::Value: PartialEq + 'static,
{
	fn child(&self) -> &Child {
		&self.child
	}

	fn clone_with_child(&self, child: Child) -> Child {
		Rc::new(Self {
			source: self.source.clone(),
			should_notify: self.should_notify.clone(),
			child,
		})
	}
}

/// Value listenable provider lifecycle
#[derive(Debug)]
pub struct ValueListenableLifecycle<L> {
	/// Build state
	state: BuildState<L>,

	/// Bridge
	bridge: Bridge<L>,
}

impl<L> Default for ValueListenableLifecycle<L> {
	fn default() -> Self {
		Self {
			state:  BuildState::new(),
			bridge: Bridge::new(),
		}
	}
}

impl<L> Lifecycle for ValueListenableLifecycle<L>
where
	L: ValueListenable + Clone + PartialEq + 'static,
	L::Value: PartialEq + 'static,
{
	type Node = ValueListenableProvider<L>;
	type Value = L::Value;

	fn resolve(&mut self, node: &Self::Node, scope: &Scope) -> Result<Self::Value, Error> {
		let bridge = &mut self.bridge;
		// Note: A change always means another instance is held, even if it compares equal
		let listenable = self.state.resolve(&node.source, scope, |_, new| bridge.subscribe(Some(new), scope));

		Ok(listenable.value())
	}

	fn should_notify(&mut self, node: &Self::Node, old: &Self::Value, new: &Self::Value) -> bool {
		match &node.should_notify {
			Some(should_notify) => should_notify(old, new),
			None => old != new,
		}
	}

	fn dispose(&mut self, _node: &Self::Node, scope: &Scope) {
		self.bridge.unlisten();
		self.state.dispose(scope);
	}
}
