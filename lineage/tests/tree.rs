//! Tree and multi provider tests

// Imports
use {
	core::cell::{Cell, RefCell},
	lineage::{
		Builder,
		Child,
		Combine,
		Empty,
		Error,
		ListenableProvider,
		MissingDependency,
		MultiProvider,
		NodeExt,
		Notifier,
		SingleChildNode,
		Tree,
		ValueNotifier,
		ValueProvider,
	},
	std::rc::Rc,
};

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
fn multi_provider_order() {
	let (consumer, seen) = recorder::<(i32, i64)>();
	let pair = Builder::consume::<(i32, i64), _>(move |_, pair| {
		Ok(ValueProvider::value(pair, Rc::clone(&consumer)).into_child())
	})
	.into_child();

	let node = MultiProvider::new(vec![], pair)
		.with_provider(ValueProvider::value(1_i32, Empty.into_child()))
		.with_provider(ValueProvider::new(
			|scope| i64::from(scope.get::<i32>().unwrap_or_default()) * 10,
			Empty.into_child(),
		))
		.with_provider(ValueProvider::value(2_i32, Empty.into_child()));

	let mut tree = Tree::new();
	tree.render(node.into_child()).expect("Unable to mount");
	assert_eq!(*seen.borrow(), [(2, 10)], "Providers weren't nested in order");
}

#[test]
fn multi_provider_clone_with_child() {
	let (consumer, seen) = recorder::<i32>();
	let node = MultiProvider::new(vec![], Empty.into_child())
		.with_provider(ValueProvider::value(3_i32, Empty.into_child()))
		.clone_with_child(consumer);

	let mut tree = Tree::new();
	tree.render(node).expect("Unable to mount");
	assert_eq!(*seen.borrow(), [3]);
}

#[test]
fn multi_provider_disposes_all() {
	let disposed = Rc::new(Cell::new(0_usize));
	let notifier = Notifier::new();
	let provider = {
		let disposed = Rc::clone(&disposed);
		ValueProvider::new(|_| 1_u8, Empty.into_child())
			.with_dispose(move |_, _| disposed.set(disposed.get() + 1))
			.expect("Builder provider rejected its disposer")
	};
	let node = MultiProvider::new(vec![], Empty.into_child())
		.with_provider(provider)
		.with_provider(ListenableProvider::value(notifier.clone(), Empty.into_child()))
		.into_child();

	let mut tree = Tree::new();
	tree.render(node).expect("Unable to mount");
	assert_eq!(notifier.listener_count(), 1);

	tree.unmount();
	assert_eq!(disposed.get(), 1);
	assert_eq!(notifier.listener_count(), 0);
}

#[test]
fn render_other_type_remounts() {
	let disposed = Rc::new(Cell::new(0_usize));
	let provider = {
		let disposed = Rc::clone(&disposed);
		ValueProvider::new(|_| 1_u8, Empty.into_child())
			.with_dispose(move |_, _| disposed.set(disposed.get() + 1))
			.expect("Builder provider rejected its disposer")
			.into_child()
	};

	let mut tree = Tree::new();
	assert!(!tree.is_mounted());
	tree.render(provider).expect("Unable to mount");
	assert!(tree.is_mounted());

	tree.render(Empty.into_child()).expect("Unable to remount");
	assert_eq!(disposed.get(), 1, "Previous root wasn't unmounted");

	tree.unmount();
	assert!(!tree.is_mounted());
}

#[test]
fn builder_rebuild_handle() {
	let builds = Rc::new(Cell::new(0_usize));
	let handle = Rc::new(RefCell::new(None));
	let node = Builder::new({
		let builds = Rc::clone(&builds);
		let handle = Rc::clone(&handle);
		move |scope| {
			builds.set(builds.get() + 1);
			*handle.borrow_mut() = Some(scope.rebuild_handle());
			Ok(Empty.into_child())
		}
	})
	.into_child();

	let mut tree = Tree::new();
	tree.render(node).expect("Unable to mount");

	let handle = handle.borrow().clone().expect("Builder wasn't built");
	assert!(handle.mark_dirty());
	tree.pump().expect("Unable to pump");
	assert_eq!(builds.get(), 2);

	tree.unmount();
	assert!(!handle.mark_dirty(), "Handle outlived the element");
}

#[test]
fn failed_mount_disposes_once() {
	let disposed = Rc::new(Cell::new(0_usize));
	let consumer = Builder::consume::<(u64,), _>(|_, _| Ok(Empty.into_child())).into_child();
	let node = {
		let disposed = Rc::clone(&disposed);
		ValueProvider::new(|_| 1_u8, consumer)
			.with_dispose(move |_, _| disposed.set(disposed.get() + 1))
			.expect("Builder provider rejected its disposer")
			.into_child()
	};

	let mut tree = Tree::new();
	assert_eq!(
		tree.render(node),
		Err(Error::MissingDependency(MissingDependency::of::<u64>()))
	);
	assert_eq!(disposed.get(), 0, "Value was disposed while mounted");

	tree.unmount();
	tree.unmount();
	assert_eq!(disposed.get(), 1, "Value built before the failure wasn't disposed exactly once");
}

#[test]
fn failed_combine_disposes_nothing() {
	let calls = Rc::new(Cell::new(0_usize));
	let disposed = Rc::new(Cell::new(0_usize));
	let node = Combine::<(u64,), ValueNotifier<u32>>::new(
		{
			let calls = Rc::clone(&calls);
			move |_, _, _| {
				calls.set(calls.get() + 1);
				ValueNotifier::new(0)
			}
		},
		Empty.into_child(),
	)
	.with_dispose({
		let disposed = Rc::clone(&disposed);
		move |_, _| disposed.set(disposed.get() + 1)
	})
	.into_child();

	let mut tree = Tree::new();
	assert!(tree.render(node).is_err(), "Combine mounted without its dependencies");

	tree.unmount();
	assert_eq!(calls.get(), 0);
	assert_eq!(disposed.get(), 0, "Value that was never built was disposed");
}
