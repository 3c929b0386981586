//! Value provider tests

// Imports
use {
	core::cell::{Cell, RefCell},
	lineage::{
		Builder,
		Child,
		ConfigError,
		Empty,
		Error,
		MissingDependency,
		NodeExt,
		SingleChildNode,
		Tree,
		ValueProvider,
	},
	std::rc::Rc,
};

/// Resource with an identity
#[derive(PartialEq, Eq, Clone, Debug)]
struct Resource {
	id: usize,
}

/// Creates a consumer recording every value of `T` it's built with
fn recorder<T: Clone + 'static>() -> (Child, Rc<RefCell<Vec<T>>>) {
	let seen = Rc::new(RefCell::new(vec![]));
	let consumer = Builder::consume::<(T,), _>({
		let seen = Rc::clone(&seen);
		move |_, (value,)| {
			seen.borrow_mut().push(value);
			Ok(Empty.into_child())
		}
	})
	.into_child();

	(consumer, seen)
}

#[test]
fn builder_disposes_once() {
	let built = Rc::new(Cell::new(0_usize));
	let disposed = Rc::new(RefCell::new(vec![]));
	let (consumer, seen) = recorder::<Resource>();

	let provider = || {
		let built = Rc::clone(&built);
		let disposed = Rc::clone(&disposed);
		ValueProvider::new(
			move |_| {
				built.set(built.get() + 1);
				Resource { id: built.get() }
			},
			Rc::clone(&consumer),
		)
		.with_dispose(move |_, resource| disposed.borrow_mut().push(resource.clone()))
		.expect("Builder provider rejected its disposer")
		.into_child()
	};

	let mut tree = Tree::new();
	tree.render(provider()).expect("Unable to mount");
	tree.render(provider()).expect("Unable to update");
	assert_eq!(built.get(), 1, "Value was rebuilt when the node was replaced");
	assert_eq!(*seen.borrow(), [Resource { id: 1 }]);
	assert!(disposed.borrow().is_empty(), "Value was disposed while mounted");

	tree.unmount();
	tree.unmount();
	assert_eq!(*disposed.borrow(), [Resource { id: 1 }], "Value wasn't disposed exactly once");
}

#[test]
fn value_mode_rejects_disposer() {
	let provider = ValueProvider::value(Resource { id: 0 }, Empty.into_child()).with_dispose(|_, _| ());
	assert_eq!(provider.err(), Some(ConfigError::DisposeWithValue));
}

#[test]
fn mode_switch() {
	let disposed = Rc::new(RefCell::new(vec![]));
	let (consumer, seen) = recorder::<Resource>();

	let built = {
		let disposed = Rc::clone(&disposed);
		ValueProvider::new(|_| Resource { id: 1 }, Rc::clone(&consumer))
			.with_dispose(move |_, resource| disposed.borrow_mut().push(resource.clone()))
			.expect("Builder provider rejected its disposer")
			.into_child()
	};
	let adopted = ValueProvider::value(Resource { id: 100 }, Rc::clone(&consumer)).into_child();

	let mut tree = Tree::new();
	tree.render(adopted).expect("Unable to mount");
	tree.render(built).expect("Unable to update");
	assert!(disposed.borrow().is_empty(), "Adopted value was disposed");

	tree.render(ValueProvider::value(Resource { id: 200 }, Rc::clone(&consumer)).into_child())
		.expect("Unable to update");
	assert_eq!(*disposed.borrow(), [Resource { id: 1 }], "Built value wasn't disposed when replaced");

	tree.unmount();
	assert_eq!(disposed.borrow().len(), 1, "Adopted value was disposed");
	assert_eq!(*seen.borrow(), [Resource { id: 100 }, Resource { id: 1 }, Resource { id: 200 }]);
}

#[test]
fn structural_dirty_check() {
	let (consumer, seen) = recorder::<Vec<i32>>();

	let mut tree = Tree::new();
	tree.render(ValueProvider::value(vec![1, 2], Rc::clone(&consumer)).into_child())
		.expect("Unable to mount");
	tree.render(ValueProvider::value(vec![1, 2], Rc::clone(&consumer)).into_child())
		.expect("Unable to update");
	assert_eq!(seen.borrow().len(), 1, "Equal value rebuilt dependents");

	tree.render(ValueProvider::value(vec![3], Rc::clone(&consumer)).into_child())
		.expect("Unable to update");
	assert_eq!(*seen.borrow(), [vec![1, 2], vec![3]]);
}

#[test]
fn custom_dirty_check() {
	let (consumer, seen) = recorder::<i32>();
	let provider = |value: i32| {
		ValueProvider::value(value, Empty.into_child())
			.with_should_notify(|old: &i32, new: &i32| (new - old).abs() >= 10)
			.clone_with_child(Rc::clone(&consumer))
	};

	let mut tree = Tree::new();
	tree.render(provider(1)).expect("Unable to mount");
	tree.render(provider(5)).expect("Unable to update");
	assert_eq!(*seen.borrow(), [1], "Dirty-check wasn't used");

	tree.render(provider(20)).expect("Unable to update");
	assert_eq!(*seen.borrow(), [1, 20]);
}

#[test]
fn only_dependents_rebuild() {
	let outer_builds = Rc::new(Cell::new(0_usize));
	let (consumer, seen) = recorder::<i32>();
	let outer = Builder::new({
		let outer_builds = Rc::clone(&outer_builds);
		move |_| {
			outer_builds.set(outer_builds.get() + 1);
			Ok(Rc::clone(&consumer))
		}
	})
	.into_child();

	let mut tree = Tree::new();
	for value in [1, 2, 3] {
		tree.render(ValueProvider::value(value, Rc::clone(&outer)).into_child())
			.expect("Unable to render");
	}

	assert_eq!(outer_builds.get(), 1, "Non-dependent was rebuilt");
	assert_eq!(*seen.borrow(), [1, 2, 3]);
}

#[test]
fn nearest_ancestor_wins() {
	let (consumer, seen) = recorder::<i32>();
	let node = ValueProvider::value(1_i32, ValueProvider::value(2_i32, consumer).into_child()).into_child();

	let mut tree = Tree::new();
	tree.render(node).expect("Unable to mount");
	assert_eq!(*seen.borrow(), [2]);
}

#[test]
fn missing_dependency() {
	let (consumer, seen) = recorder::<u8>();
	let node = ValueProvider::value(1_i32, consumer).into_child();

	let mut tree = Tree::new();
	assert_eq!(
		tree.render(node),
		Err(Error::MissingDependency(MissingDependency::of::<u8>()))
	);
	assert!(seen.borrow().is_empty());
}
