//! Value provider
//!
//! Publishes a plain value for its subtree.

// Imports
use {
	crate::{
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
	std::rc::Rc,
};

/// Dirty-check function
pub type ShouldNotifyFn<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// Value provider.
///
/// Dependents are notified when the published value changes, as decided
/// by `old != new` unless a dirty-check is supplied with
/// [`with_should_notify`](Self::with_should_notify).
#[derive(derive_more::Debug)]
pub struct ValueProvider<T> {
	/// Source
	source: Source<T>,

	/// Dirty-check
	#[debug(skip)]
	should_notify: Option<ShouldNotifyFn<T>>,

	/// Child
	#[debug(skip)]
	child: Child,
}

impl<T> ValueProvider<T> {
	/// Creates a provider that builds its value with `build`, owning it.
	pub fn new<F>(build: F, child: Child) -> Self
	where
		F: Fn(&Scope) -> T + 'static,
	{
		Self::from_source(Source::build(build), child)
	}

	/// Creates a provider publishing a caller-owned value
	pub const fn value(value: T, child: Child) -> Self {
		Self::from_source(Source::value(value), child)
	}

	/// Creates a provider from a source
	pub const fn from_source(source: Source<T>, child: Child) -> Self {
		Self {
			source,
			should_notify: None,
			child,
		}
	}

	/// Sets the disposer for the built value.
	///
	/// Fails if this provider publishes a caller-owned value.
	pub fn with_dispose<F>(self, dispose: F) -> Result<Self, ConfigError>
	where
		F: Fn(&Scope, &T) + 'static,
	{
		Ok(Self {
			source: self.source.with_dispose(dispose)?,
			..self
		})
	}

	/// Replaces the dirty-check
	#[must_use]
	pub fn with_should_notify<F>(self, should_notify: F) -> Self
	where
		F: Fn(&T, &T) -> bool + 'static,
	{
		Self {
			should_notify: Some(Rc::new(should_notify)),
			..self
		}
	}

	/// Returns the source of this provider
	pub const fn source(&self) -> &Source<T> {
		&self.source
	}
}

impl<T> Node for ValueProvider<T>
where
	T: Clone + PartialEq + 'static,
{
	fn create_element(self: Rc<Self>) -> Box<dyn Element> {
		Box::new(ProviderElement::<ValueLifecycle<T>>::new(self))
	}
}

impl<T> SingleChildNode for ValueProvider<T>
where
	T: Clone + PartialEq + 'static,
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

/// Value provider lifecycle
#[derive(Debug)]
pub struct ValueLifecycle<T> {
	/// Build state
	state: BuildState<T>,
}

impl<T> Default for ValueLifecycle<T> {
	fn default() -> Self {
		Self {
			state: BuildState::new(),
		}
	}
}

impl<T> Lifecycle for ValueLifecycle<T>
where
	T: Clone + PartialEq + 'static,
{
	type Node = ValueProvider<T>;
	type Value = T;

	fn resolve(&mut self, node: &Self::Node, scope: &Scope) -> Result<Self::Value, Error> {
		let value = self.state.resolve(&node.source, scope, |_, _| ());
		Ok(value.clone())
	}

	fn should_notify(&mut self, node: &Self::Node, old: &Self::Value, new: &Self::Value) -> bool {
		match &node.should_notify {
			Some(should_notify) => should_notify(old, new),
			None => old != new,
		}
	}

	fn dispose(&mut self, _node: &Self::Node, scope: &Scope) {
		self.state.dispose(scope);
	}
}
