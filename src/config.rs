//! Estimator configuration: the catalog, the boards and rendering constants.
//!
//! Defaults reproduce the two switchboard drawings the estimator was built
//! for. Any of it can be overridden from JSON.

use serde::{Deserialize, Serialize};

use crate::catalog::UnitCatalog;
use crate::error::{PanelError, Result};
use crate::geometry::{Point, Size};
use crate::packing::{PackerConfig, PlacementOrder};
use crate::render::{DEFAULT_VERTICAL_GAP, RenderSurface, ScalingLaw};

/// Column geometry shared by every column of a board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Height budget per column.
    pub limit: u32,
    /// Horizontal gap between drawn columns.
    pub spacing: f64,
}

/// One drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub size: Size,
    pub origin: Point,
    pub column: ColumnConfig,
    pub max_columns: usize,
}

impl BoardConfig {
    pub fn new(name: impl Into<String>, limit: u32, spacing: f64, max_columns: usize) -> Self {
        Self {
            name: name.into(),
            size: Size::new(800.0, 300.0),
            origin: Point::new(10.0, 5.0),
            column: ColumnConfig { limit, spacing },
            max_columns,
        }
    }

    pub fn packer_config(&self, order: PlacementOrder) -> PackerConfig {
        PackerConfig::new(self.column.limit, self.max_columns).with_order(order)
    }

    pub fn render_surface(&self, scaling: ScalingLaw, vertical_gap: f64) -> RenderSurface {
        RenderSurface::new(self.origin, self.column.spacing)
            .with_scaling(scaling)
            .with_vertical_gap(vertical_gap)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub catalog: UnitCatalog,
    pub boards: Vec<BoardConfig>,
    pub order: PlacementOrder,
    pub scaling: ScalingLaw,
    pub vertical_gap: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            catalog: UnitCatalog::breakers(),
            boards: vec![
                BoardConfig::new("guthrie-1", 1800, 3.0, 7),
                BoardConfig::new("guthrie-2", 1800, 31.5, 7),
            ],
            order: PlacementOrder::default(),
            scaling: ScalingLaw::default(),
            vertical_gap: DEFAULT_VERTICAL_GAP,
        }
    }
}

impl EstimatorConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(invalid("catalog has no entries"));
        }
        if let Some(entry) = self.catalog.iter().find(|e| e.height == 0 || e.width == 0) {
            return Err(invalid(format!("catalog entry `{}` has a zero dimension", entry.name)));
        }
        if self.boards.is_empty() {
            return Err(invalid("no boards configured"));
        }
        for (idx, board) in self.boards.iter().enumerate() {
            if self.boards[..idx].iter().any(|b| b.name == board.name) {
                return Err(invalid(format!("duplicate board name `{}`", board.name)));
            }
            if board.max_columns == 0 {
                return Err(invalid(format!("board `{}` has no columns", board.name)));
            }
            if board.column.limit == 0 {
                return Err(invalid(format!("board `{}` has a zero column limit", board.name)));
            }
            if !(board.column.spacing.is_finite() && board.column.spacing >= 0.0) {
                return Err(invalid(format!("board `{}` has a negative column spacing", board.name)));
            }
        }
        if !(self.scaling.slope.is_finite() && self.scaling.intercept.is_finite()) {
            return Err(invalid("scaling constants must be finite"));
        }
        if self
            .boards
            .iter()
            .any(|b| self.scaling.factor(b.column.limit) <= 0.0)
        {
            return Err(invalid("scaling factor must be positive for every board"));
        }
        if !(self.vertical_gap.is_finite() && self.vertical_gap >= 0.0) {
            return Err(invalid("vertical gap must be non-negative"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> PanelError {
    PanelError::InvalidConfig(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_two_boards() {
        let config = EstimatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.boards.len(), 2);
        assert_eq!(config.boards[0].name, "guthrie-1");
        assert_eq!(config.boards[1].column.spacing, 31.5);
        assert!(config.boards.iter().all(|b| b.max_columns == 7 && b.column.limit == 1800));
        assert_eq!(config.catalog.len(), 10);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let raw = r#"{
            "boards": [{
                "name": "wide",
                "size": { "width": 1200, "height": 400 },
                "origin": { "x": 0, "y": 0 },
                "column": { "limit": 2700, "spacing": 5 },
                "max_columns": 4
            }],
            "order": "input_reversed"
        }"#;
        let config = EstimatorConfig::from_json(raw).unwrap();
        assert_eq!(config.boards.len(), 1);
        assert_eq!(config.boards[0].column.limit, 2700);
        assert_eq!(config.order, PlacementOrder::InputReversed);
        assert_eq!(config.catalog, UnitCatalog::breakers());
        assert_eq!(config.vertical_gap, DEFAULT_VERTICAL_GAP);
    }

    #[test]
    fn json_round_trips_defaults() {
        let config = EstimatorConfig::default();
        let parsed = EstimatorConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn rejects_board_without_columns() {
        let mut config = EstimatorConfig::default();
        config.boards[1].max_columns = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("guthrie-2"));
    }

    #[test]
    fn rejects_duplicate_board_names() {
        let mut config = EstimatorConfig::default();
        config.boards[1].name = "guthrie-1".to_string();
        assert!(matches!(config.validate(), Err(PanelError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = EstimatorConfig::from_json("{ boards: ").unwrap_err();
        assert!(matches!(err, PanelError::Config(_)));
    }
}
