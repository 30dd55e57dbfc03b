use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::UnitDescriptor;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};

use super::result::{ColumnGroup, PackingResult, column_order};

const TRACE_TARGET: &str = "panel::packing";

/// Order in which units are offered to the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOrder {
    /// Last input unit first. Only balances columns well when the caller
    /// already supplies units in ascending height order.
    InputReversed,
    /// Reverse input order, then stably sorted tallest first. Matches
    /// `InputReversed` exactly for ascending input.
    #[default]
    TallestFirst,
}

/// Parameters for a packing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Height budget of every column.
    pub capacity: u32,
    /// Number of columns available.
    pub max_columns: usize,
    #[serde(default)]
    pub order: PlacementOrder,
}

impl PackerConfig {
    pub fn new(capacity: u32, max_columns: usize) -> Self {
        Self {
            capacity,
            max_columns,
            order: PlacementOrder::default(),
        }
    }

    pub fn with_order(mut self, order: PlacementOrder) -> Self {
        self.order = order;
        self
    }
}

/// Greedy first-fit column packer.
#[derive(Debug, Clone)]
pub struct ColumnPacker {
    config: PackerConfig,
    logger: Option<Logger>,
}

impl ColumnPacker {
    pub fn new(config: PackerConfig) -> Self {
        Self {
            config,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Pack `units` into columns. Never fails; units that fit nowhere end up
    /// in [`PackingResult::overflowed`].
    pub fn pack<'u>(&self, units: &[&'u UnitDescriptor]) -> PackingResult<'u> {
        let PackerConfig {
            capacity,
            max_columns,
            order,
        } = self.config;

        let mut columns = vec![ColumnGroup::new(); max_columns];
        let mut overflowed = Vec::new();

        for unit in placement_sequence(units, order) {
            if place(&mut columns, unit, capacity).is_none() {
                overflowed.push(unit);
            }
        }

        for column in &mut columns {
            column.sort_tallest_first();
        }
        columns.sort_by(column_order);

        let result = PackingResult::new(capacity, columns, overflowed);
        self.trace(&result);
        result
    }

    fn trace(&self, result: &PackingResult<'_>) {
        let Some(logger) = &self.logger else {
            return;
        };
        if !logger.enabled(LogLevel::Debug) {
            return;
        }

        let overflowed: Vec<_> = result
            .overflowed()
            .iter()
            .map(|unit| json!({ "name": unit.name, "height": unit.height }))
            .collect();
        let event = event_with_fields(
            LogLevel::Debug,
            TRACE_TARGET,
            "columns_grouped",
            [
                json_kv("capacity", result.capacity()),
                json_kv("columns", json!(result.column_heights())),
                json_kv("placed", result.placed_count()),
                json_kv("overflowed", overflowed),
            ],
        );
        let _ = logger.log_event(event);
    }
}

/// Pack with the default placement order and no tracing.
///
/// Units are sorted tallest first before placement, so this is not a plain
/// last-to-first walk over `units`. Use [`PlacementOrder::InputReversed`]
/// through [`ColumnPacker`] to place units strictly in reverse input order.
pub fn pack<'u>(
    units: &[&'u UnitDescriptor],
    capacity: u32,
    max_columns: usize,
) -> PackingResult<'u> {
    ColumnPacker::new(PackerConfig::new(capacity, max_columns)).pack(units)
}

fn placement_sequence<'u>(
    units: &[&'u UnitDescriptor],
    order: PlacementOrder,
) -> Vec<&'u UnitDescriptor> {
    let mut sequence: Vec<_> = units.iter().rev().copied().collect();
    if order == PlacementOrder::TallestFirst {
        sequence.sort_by(|a, b| b.height.cmp(&a.height));
    }
    sequence
}

/// First-fit: the index of the column that took `unit`, or `None` once the
/// last column has refused it.
fn place<'u>(
    columns: &mut [ColumnGroup<'u>],
    unit: &'u UnitDescriptor,
    capacity: u32,
) -> Option<usize> {
    let index = columns
        .iter()
        .position(|column| column.fits(unit.height, capacity))?;
    columns[index].push(unit);
    Some(index)
}
