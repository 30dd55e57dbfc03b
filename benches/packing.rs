use std::hint::black_box;

use breaker_panel::{
    ColumnPacker, Estimator, EstimatorConfig, LabelMode, Logger, PackerConfig, PlacementOrder,
    UnitCatalog, expand_units,
};
use breaker_panel::logging::NullSink;
use criterion::{Criterion, criterion_group, criterion_main};

const SELECTION: [u32; 10] = [1, 2, 2, 6, 4, 3, 3, 2, 1, 1];

fn pack_catalog_selection(c: &mut Criterion) {
    let catalog = UnitCatalog::breakers();
    let units = expand_units(&catalog, &SELECTION).expect("expand");

    for (label, order) in [
        ("pack_tallest_first", PlacementOrder::TallestFirst),
        ("pack_input_reversed", PlacementOrder::InputReversed),
    ] {
        let packer = ColumnPacker::new(PackerConfig::new(1800, 7).with_order(order));
        c.bench_function(label, |b| {
            b.iter(|| packer.pack(black_box(&units)));
        });
    }
}

fn estimate_both_boards(c: &mut Criterion) {
    let logger = Logger::new(NullSink);
    c.bench_function("estimate_both_boards", |b| {
        b.iter(|| {
            let mut estimator = Estimator::new(EstimatorConfig::default())
                .expect("estimator")
                .with_logger(logger.clone());
            estimator
                .estimate(black_box(&SELECTION), LabelMode::Height)
                .expect("estimate");
            estimator.take_dirty()
        });
    });
}

criterion_group!(benches, pack_catalog_selection, estimate_both_boards);
criterion_main!(benches);
