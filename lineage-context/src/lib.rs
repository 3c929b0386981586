//! Typed context passing for `lineage`
//!
//! A [`Context`] maps types to values. It's never mutated in place:
//! [`Context::provide`] returns a new context that shadows any previous
//! value of the same type, so a context can be handed down a tree by value
//! and every subtree sees exactly what its ancestors provided.

// Imports
use {
	core::{
		any::{self, Any, TypeId},
		fmt,
		hash::BuildHasher,
	},
	std::{collections::HashMap, hash::DefaultHasher, rc::Rc},
};

type Values = HashMap<TypeId, Rc<dyn Any>, RandomState>;

/// Hash builder for the context values
#[derive(Clone, Copy, Default)]
struct RandomState;

impl BuildHasher for RandomState {
	type Hasher = DefaultHasher;

	fn build_hasher(&self) -> Self::Hasher {
		DefaultHasher::default()
	}
}

/// Context
#[derive(Clone, Default)]
pub struct Context {
	/// Values
	// TODO: Share unchanged entries between a context and its children instead of
	//       cloning the whole map on every `provide`.
	values: Rc<Values>,
}

impl Context {
	/// Creates an empty context
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a new context with `value` provided, shadowing any
	/// previous value of type `T`.
	#[must_use]
	pub fn provide<T>(&self, value: T) -> Self
	where
		T: Any,
	{
		let mut values = Values::clone(&self.values);
		values.insert(TypeId::of::<T>(), Rc::new(value));

		Self { values: Rc::new(values) }
	}

	/// Returns if a value of `T` exists in this context
	#[must_use]
	pub fn contains<T>(&self) -> bool
	where
		T: 'static,
	{
		self.values.contains_key(&TypeId::of::<T>())
	}

	/// Returns the number of values in this context
	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns if this context is empty
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Uses the value of `T` in this context
	pub fn with<T, F, O>(&self, f: F) -> O
	where
		T: 'static,
		F: FnOnce(Option<&T>) -> O,
	{
		let value = self.values.get(&TypeId::of::<T>()).map(|value| {
			value
				.downcast_ref::<T>()
				.expect("Value was stored under the wrong type")
		});

		f(value)
	}

	/// Uses the value of `T` in this context, expecting it.
	///
	/// # Panics
	/// Panics if no value of `T` exists.
	#[track_caller]
	pub fn with_expect<T, F, O>(&self, f: F) -> O
	where
		T: 'static,
		F: FnOnce(&T) -> O,
	{
		self.with(|value| value.map(f))
			.unwrap_or_else(self::on_missing_context::<T, _>)
	}

	/// Gets the value of `T` in this context
	#[must_use]
	pub fn get<T>(&self) -> Option<T>
	where
		T: Copy + 'static,
	{
		self.with::<T, _, _>(|value| value.copied())
	}

	/// Gets a clone of the value of `T` in this context
	#[must_use]
	pub fn get_cloned<T>(&self) -> Option<T>
	where
		T: Clone + 'static,
	{
		self.with::<T, _, _>(|value| value.cloned())
	}
}

impl fmt::Debug for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Context").field("len", &self.values.len()).finish()
	}
}

/// Called when context for type `T` was missing.
#[cold]
#[inline(never)]
#[track_caller]
fn on_missing_context<T, O>() -> O {
	panic!("Context for type {:?} was missing", any::type_name::<T>())
}
