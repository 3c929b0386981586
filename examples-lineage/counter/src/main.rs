//! Counter demo

// Imports
use lineage::{
	Builder,
	Combine,
	Dispose,
	Empty,
	MultiProvider,
	NodeExt,
	Tree,
	ValueListenableProvider,
	ValueNotifier,
	ValueProvider,
};

/// Label of the counter
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
struct Label(&'static str);

fn main() -> Result<(), lineage::Error> {
	lineage_logger::init();

	let count = ValueNotifier::new(0_i32);
	let app = MultiProvider::new(vec![], self::view())
		.with_provider(ValueProvider::value(Label("Counter"), Empty.into_child()))
		.with_provider(ValueListenableProvider::value(count.clone(), Empty.into_child()))
		.with_provider(
			Combine::<(i32,), ValueNotifier<i32>>::new(
				|_, (count,), doubled| match doubled {
					Some(doubled) => {
						doubled.set(count * 2);
						doubled
					},
					None => ValueNotifier::new(count * 2),
				},
				Empty.into_child(),
			)
			.with_dispose(|_, doubled| doubled.dispose()),
		);

	let mut tree = Tree::new();
	tree.render(app.into_child())?;

	for _ in 0..5 {
		count.update(|count| *count += 1);
		tree.pump()?;
	}

	// Doesn't change the count, so nothing is rebuilt
	count.set(count.get());
	tree.pump()?;

	tree.unmount();
	tracing::info!("Done");

	Ok(())
}

/// Builds the view, logging each time it's rebuilt
fn view() -> lineage::Child {
	Builder::consume::<(Label, i32, ValueNotifier<i32>), _>(|_, (label, count, doubled)| {
		tracing::info!(label = label.0, count, doubled = doubled.get(), "Rendering counter");
		Ok(Empty.into_child())
	})
	.into_child()
}
