//! Column packer: greedy first-fit of units into height-capped columns.
//!
//! Placement walks the columns left to right and takes the first one with
//! room; a unit no column can take is reported in
//! [`PackingResult::overflowed`]. The result is normalized so that units
//! inside a column and the columns themselves run tallest first.

mod core;
mod result;

pub use self::core::{ColumnPacker, PackerConfig, PlacementOrder, pack};
pub use result::{ColumnGroup, PackingResult};
