//! Breaker catalog: the fixed reference table of unit sizes.
//!
//! Entries are keyed by position. Quantity vectors handed to the expander
//! line up with this order one-to-one.

mod core;

pub use self::core::{UnitCatalog, UnitDescriptor};
