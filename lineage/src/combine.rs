//! Combinator
//!
//! Publishes a listenable combined from other published values.
//!
//! The combine function receives the looked up dependencies, in declared order,
//! along with the previous result, so it may update and return it instead of
//! creating a new one:
//!
//! ```rust
//! use lineage::{Combine, Empty, NodeExt, ValueNotifier};
//!
//! let total = Combine::<(u32, u32), ValueNotifier<u32>>::new(
//! 	|_, (price, quantity), previous| match previous {
//! 		Some(total) => {
//! 			total.set(price * quantity);
//! 			total
//! 		},
//! 		None => ValueNotifier::new(price * quantity),
//! 	},
//! 	Empty.into_child(),
//! );
//! ```

// Imports
use {
	crate::{
		Bridge,
		Child,
		Dependencies,
		Element,
		Error,
		Lifecycle,
		Node,
		ProviderElement,
		Scope,
		SingleChildNode,
		source::{BuildFn, DisposeFn},
	},
	core::{any, marker::PhantomData, mem},
	lineage_notify::Listenable,
	std::rc::Rc,
};

/// Combine function
pub type CombineFn<D, R> = Rc<dyn Fn(&Scope, D, Option<R>) -> R>;

/// Combinator.
///
/// Recomputes its value once on mount, once when replaced by a new node, and
/// once each time any of its dependencies change. Mutations of the value itself
/// notify dependents like a [`ListenableProvider`](crate::ListenableProvider),
/// without recomputing.
#[derive(derive_more::Debug)]
pub struct Combine<D, R> {
	/// Initial seed builder
	#[debug(skip)]
	initial: Option<BuildFn<R>>,

	/// Combine function
	#[debug(skip)]
	combine: CombineFn<D, R>,

	/// Disposer
	#[debug(skip)]
	dispose: Option<DisposeFn<R>>,

	/// Child
	#[debug(skip)]
	child: Child,

	/// Phantom
	#[debug(skip)]
	_phantom: PhantomData<fn(D)>,
}

impl<D, R> Combine<D, R> {
	/// Creates a new combinator
	pub fn new<F>(combine: F, child: Child) -> Self
	where
		F: Fn(&Scope, D, Option<R>) -> R + 'static,
	{
		Self {
			initial: None,
			combine: Rc::new(combine),
			dispose: None,
			child,
			_phantom: PhantomData,
		}
	}

	/// Sets the builder of the seed passed as the previous value on the first computation
	#[must_use]
	pub fn with_initial<F>(self, initial: F) -> Self
	where
		F: Fn(&Scope) -> R + 'static,
	{
		Self {
			initial: Some(Rc::new(initial)),
			..self
		}
	}

	/// Sets the disposer of the value held when unmounted
	#[must_use]
	pub fn with_dispose<F>(self, dispose: F) -> Self
	where
		F: Fn(&Scope, &R) + 'static,
	{
		Self {
			dispose: Some(Rc::new(dispose)),
			..self
		}
	}
}

impl<D, R> Node for Combine<D, R>
where
	D: Dependencies,
	R: Listenable + Clone + PartialEq + 'static,
{
	fn create_element(self: Rc<Self>) -> Box<dyn Element> {
		Box::new(ProviderElement::<CombineLifecycle<D, R>>::new(self))
	}
}

impl<D, R> SingleChildNode for Combine<D, R>
where
	D: Dependencies,
	R: Listenable + Clone + PartialEq + 'static,
{
	fn child(&self) -> &Child {
		&self.child
	}

	fn clone_with_child(&self, child: Child) -> Child {
		Rc::new(Self {
			initial: self.initial.clone(),
			combine: Rc::clone(&self.combine),
			dispose: self.dispose.clone(),
			child,
			_phantom: PhantomData,
		})
	}
}

/// Combinator state
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum CombineState<R> {
	/// Not computed yet
	#[default]
	Uninitialized,

	/// Computed
	WithValue(R),
}

/// Combinator lifecycle
#[derive(Debug)]
pub struct CombineLifecycle<D, R> {
	/// State
	state: CombineState<R>,

	/// Whether the value must be recomputed
	stale: bool,

	/// Bridge
	bridge: Bridge<R>,

	/// Phantom
	_phantom: PhantomData<fn(D)>,
}

impl<D, R> Default for CombineLifecycle<D, R> {
	fn default() -> Self {
		Self {
			state:    CombineState::Uninitialized,
			stale:    true,
			bridge:   Bridge::new(),
			_phantom: PhantomData,
		}
	}
}

impl<D, R> Lifecycle for CombineLifecycle<D, R>
where
	D: Dependencies,
	R: Listenable + Clone + PartialEq + 'static,
{
	type Node = Combine<D, R>;
	type Value = R;

	fn resolve(&mut self, node: &Self::Node, scope: &Scope) -> Result<Self::Value, Error> {
		let value = match (mem::take(&mut self.state), self.stale) {
			(CombineState::WithValue(value), false) => value,
			(state, _) => {
				let deps = match D::lookup(scope) {
					Ok(deps) => deps,
					Err(err) => {
						self.state = state;
						return Err(err.into());
					},
				};

				let previous = match state {
					CombineState::Uninitialized => node.initial.as_ref().map(|initial| initial(scope)),
					CombineState::WithValue(value) => Some(value),
				};

				tracing::trace!(
					deps = any::type_name::<D>(),
					value = any::type_name::<R>(),
					"Recomputing combined value"
				);
				self.stale = false;
				(node.combine)(scope, deps, previous)
			},
		};

		self.bridge.listen(Some(&value), scope);
		self.state = CombineState::WithValue(value.clone());

		Ok(value)
	}

	fn on_dependency_changed(&mut self) {
		self.stale = true;
	}

	fn should_notify(&mut self, _node: &Self::Node, old: &Self::Value, new: &Self::Value) -> bool {
		// Note: The counter must always be checked, so its snapshot is kept up to date
		let mutated = self.bridge.counter().check();
		mutated || old != new
	}

	fn dispose(&mut self, node: &Self::Node, scope: &Scope) {
		self.bridge.unlisten();
		if let CombineState::WithValue(value) = mem::take(&mut self.state) {
			tracing::trace!(value = any::type_name::<R>(), "Disposing combined value");
			if let Some(dispose) = &node.dispose {
				dispose(scope, &value);
			}
		}
	}
}
