//! Error module orchestrator. Types live in `types`.

mod types;

pub use types::{PanelError, Result};
