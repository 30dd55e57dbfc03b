//! Unit expander: quantity selections in, flat unit sequence out.

mod core;

pub use self::core::{expand_units, parse_quantities, parse_quantity};
