//! Dependencies
//!
//! An ordered set of published types looked up together, as `()` or a tuple
//! of up to 6 types.

// Imports
use crate::{MissingDependency, Scope};

/// Dependencies
pub trait Dependencies: Sized + 'static {
	/// Looks up every dependency, in declared order.
	///
	/// Fails on the first missing type, and registers the scope's
	/// element as a dependent of every value found.
	fn lookup(scope: &Scope) -> Result<Self, MissingDependency>;
}

impl Dependencies for () {
	fn lookup(_scope: &Scope) -> Result<Self, MissingDependency> {
		Ok(())
	}
}

#[duplicate::duplicate_item(
	Generics Tuple deps;
	[
		T1: Clone + 'static,
	] [
		(T1,)
	] [
		(scope.require::<T1>()?,)
	];
	[
		T1: Clone + 'static,
		T2: Clone + 'static,
	] [
		(T1, T2)
	] [
		(scope.require::<T1>()?, scope.require::<T2>()?)
	];
	[
		T1: Clone + 'static,
		T2: Clone + 'static,
		T3: Clone + 'static,
	] [
		(T1, T2, T3)
	] [
		(scope.require::<T1>()?, scope.require::<T2>()?, scope.require::<T3>()?)
	];
	[
		T1: Clone + 'static,
		T2: Clone + 'static,
		T3: Clone + 'static,
		T4: Clone + 'static,
	] [
		(T1, T2, T3, T4)
	] [
		(
			scope.require::<T1>()?,
			scope.require::<T2>()?,
			scope.require::<T3>()?,
			scope.require::<T4>()?,
		)
	];
	[
		T1: Clone + 'static,
		T2: Clone + 'static,
		T3: Clone + 'static,
		T4: Clone + 'static,
		T5: Clone + 'static,
	] [
		(T1, T2, T3, T4, T5)
	] [
		(
			scope.require::<T1>()?,
			scope.require::<T2>()?,
			scope.require::<T3>()?,
			scope.require::<T4>()?,
			scope.require::<T5>()?,
		)
	];
	[
		T1: Clone + 'static,
		T2: Clone + 'static,
		T3: Clone + 'static,
		T4: Clone + 'static,
		T5: Clone + 'static,
		T6: Clone + 'static,
	] [
		(T1, T2, T3, T4, T5, T6)
	] [
		(
			scope.require::<T1>()?,
			scope.require::<T2>()?,
			scope.require::<T3>()?,
			scope.require::<T4>()?,
			scope.require::<T5>()?,
			scope.require::<T6>()?,
		)
	];
)]
impl<Generics> Dependencies for Tuple {
	fn lookup(scope: &Scope) -> Result<Self, MissingDependency> {
		Ok(deps)
	}
}
