//! Switchboard breaker layout estimator.
//!
//! Breaker quantities are expanded into units from a fixed catalog, packed
//! greedily into height-capped columns and drawn as labeled rectangles.
//! The packer is the heart of the crate; expansion, rendering and the
//! multi-board [`Estimator`] are thin layers around it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod estimation;
pub mod expand;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod packing;
pub mod render;

pub use catalog::{UnitCatalog, UnitDescriptor};
pub use config::{BoardConfig, ColumnConfig, EstimatorConfig};
pub use error::{PanelError, Result};
pub use estimation::{BoardFrame, Estimator};
pub use expand::{expand_units, parse_quantities, parse_quantity};
pub use geometry::{Point, Rect, Size};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, PackingMetrics};
pub use packing::{ColumnGroup, ColumnPacker, PackerConfig, PackingResult, PlacementOrder, pack};
pub use render::{
    Block, LabelMode, RenderSurface, RendererSettings, ScalingLaw, SvgRenderer, layout_blocks,
};
