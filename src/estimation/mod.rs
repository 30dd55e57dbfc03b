//! Multi-board estimation runs.
//!
//! One quantity selection is expanded once and packed onto every configured
//! board. Rendered frames are content-hashed so callers only redraw boards
//! whose output actually changed.

mod core;

pub use self::core::{BoardFrame, Estimator};
