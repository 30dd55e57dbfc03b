use std::sync::Arc;

use breaker_panel::logging::MemorySink;
use breaker_panel::{
    Estimator, EstimatorConfig, LabelMode, Logger, UnitCatalog, UnitDescriptor, expand_units,
    pack, parse_quantities,
};

#[test]
fn single_column_overflow_keeps_one_unit() {
    let unit = UnitDescriptor::new("mmcb-x", 60, 60);
    let units = vec![&unit, &unit];
    let result = pack(&units, 100, 1);

    assert_eq!(result.column_heights(), vec![vec![60]]);
    assert_eq!(result.placed_count(), 1);
    assert_eq!(result.overflow_count(), 1);
}

#[test]
fn full_height_unit_pushes_small_one_to_second_column() {
    let tall = UnitDescriptor::new("tall", 1800, 80);
    let short = UnitDescriptor::new("short", 200, 60);
    let units = vec![&short, &tall];
    let result = pack(&units, 1800, 2);

    assert_eq!(result.column(0).unwrap().first().unwrap().name, "tall");
    assert_eq!(result.column(1).unwrap().first().unwrap().name, "short");
}

#[test]
fn catalog_selection_packs_into_seven_columns() {
    let catalog = UnitCatalog::breakers();
    let quantities = parse_quantities(&["1", "2", "2", "2", "0", "1", "1", "2", "0", "0"]).unwrap();
    let units = expand_units(&catalog, &quantities).unwrap();
    assert_eq!(units.len(), 11);

    let result = pack(&units, 1800, 7);
    assert!(result.is_complete());
    assert_eq!(result.used_columns(), 7);
    for idx in 0..5 {
        assert_eq!(result.column(idx).unwrap().heights(), vec![1800]);
    }
    assert_eq!(result.column(5).unwrap().heights(), vec![900, 900]);
    assert_eq!(result.column(6).unwrap().heights(), vec![630, 400, 200, 200]);
}

#[test]
fn category_order_drops_the_full_height_breaker() {
    use breaker_panel::{ColumnPacker, PackerConfig, PlacementOrder};

    let catalog = UnitCatalog::breakers();
    let units = expand_units(&catalog, &[1, 0, 0, 0, 0, 0, 2, 1, 0, 0]).unwrap();

    // Reverse category order offers the small breakers first; they spread
    // over both columns and leave no room for the bus coupler.
    let reversed = ColumnPacker::new(
        PackerConfig::new(1800, 2).with_order(PlacementOrder::InputReversed),
    )
    .pack(&units);
    assert_eq!(reversed.overflowed()[0].name, "bus-coupler");
    assert_eq!(reversed.column_heights(), vec![vec![900, 630], vec![630]]);

    let sorted = pack(&units, 1800, 2);
    assert_eq!(sorted.overflowed()[0].name, "mmcb-630");
    assert_eq!(sorted.column_heights(), vec![vec![1800], vec![900, 630]]);
}

#[test]
fn estimator_renders_svg_for_each_board() {
    let sink = Arc::new(MemorySink::new());
    let mut estimator = Estimator::new(EstimatorConfig::default())
        .unwrap()
        .with_logger(Logger::from_shared(sink.clone()));

    estimator
        .estimate(&[1, 0, 0, 2, 0, 0, 1, 0, 0, 0], LabelMode::Height)
        .unwrap();

    let frames = estimator.take_dirty();
    assert_eq!(frames.len(), 2);
    for frame in &frames {
        assert!(frame.svg.starts_with("<svg"));
        assert_eq!(frame.svg.matches("<rect").count(), 4);
        assert!(frame.svg.contains(">1800</text>"));
        assert!(frame.svg.contains(">630</text>"));
    }

    // guthrie-2 spaces its columns wider than guthrie-1.
    let x_of_second = |board: &str| {
        estimator
            .frame(board)
            .unwrap()
            .blocks
            .iter()
            .find(|b| b.column == 1)
            .unwrap()
            .rect
            .x
    };
    assert_eq!(x_of_second("guthrie-1"), 10.0 + 80.0 + 3.0);
    assert_eq!(x_of_second("guthrie-2"), 10.0 + 80.0 + 31.5);

    assert_eq!(sink.with_message("estimate_completed").len(), 1);
}

#[test]
fn config_from_json_drives_estimator() {
    let raw = r#"{
        "catalog": [
            { "name": "feeder", "height": 1800, "width": 80 },
            { "name": "mccb", "height": 600, "width": 60 }
        ],
        "boards": [{
            "name": "narrow",
            "size": { "width": 400, "height": 300 },
            "origin": { "x": 0, "y": 0 },
            "column": { "limit": 1800, "spacing": 4 },
            "max_columns": 2
        }]
    }"#;
    let config = EstimatorConfig::from_json(raw).unwrap();
    let mut estimator = Estimator::new(config).unwrap();

    estimator.estimate(&[2, 4], LabelMode::Height).unwrap();
    let frame = estimator.frame("narrow").unwrap();
    assert_eq!(frame.placed, 2);
    assert_eq!(frame.overflowed.len(), 4);
}
