use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::UnitDescriptor;
use crate::error::PanelError;
use crate::geometry::{Point, Rect};
use crate::packing::PackingResult;

/// Slope of the height scaling law, calibrated against boards of 1800,
/// 2700 and 3600 capacity (factors 8.9, 13.4 and 17.8).
pub const DEFAULT_SCALING_SLOPE: f64 = 0.00494444;
/// Intercept of the height scaling law.
pub const DEFAULT_SCALING_INTERCEPT: f64 = 1.0 / 60.0;
/// Pixels left between vertically stacked units.
pub const DEFAULT_VERTICAL_GAP: f64 = 2.0;

/// Linear law mapping a column capacity to a height divisor:
/// `factor = slope * capacity + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingLaw {
    pub slope: f64,
    pub intercept: f64,
}

impl ScalingLaw {
    pub fn factor(&self, capacity: u32) -> f64 {
        self.slope * f64::from(capacity) + self.intercept
    }

    /// Drawn height of a unit, gap already taken off.
    pub fn pixel_height(&self, height: u32, capacity: u32, gap: f64) -> f64 {
        f64::from(height) / self.factor(capacity) - gap
    }
}

impl Default for ScalingLaw {
    fn default() -> Self {
        Self {
            slope: DEFAULT_SCALING_SLOPE,
            intercept: DEFAULT_SCALING_INTERCEPT,
        }
    }
}

/// What gets written inside each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    #[default]
    Height,
    /// Width scaled by ten, i.e. millimetres for the catalog's centimetre widths.
    Width,
}

impl LabelMode {
    pub fn label(&self, unit: &UnitDescriptor) -> String {
        match self {
            LabelMode::Height => unit.height.to_string(),
            LabelMode::Width => (u64::from(unit.width) * 10).to_string(),
        }
    }
}

impl FromStr for LabelMode {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "height" => Ok(LabelMode::Height),
            "width" => Ok(LabelMode::Width),
            _ => Err(PanelError::UnknownLabelMode(s.to_string())),
        }
    }
}

/// Placement parameters of one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSurface {
    pub origin: Point,
    /// Horizontal gap between adjacent columns.
    pub column_spacing: f64,
    pub scaling: ScalingLaw,
    pub vertical_gap: f64,
}

impl RenderSurface {
    pub fn new(origin: Point, column_spacing: f64) -> Self {
        Self {
            origin,
            column_spacing,
            scaling: ScalingLaw::default(),
            vertical_gap: DEFAULT_VERTICAL_GAP,
        }
    }

    pub fn with_scaling(mut self, scaling: ScalingLaw) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn with_vertical_gap(mut self, gap: f64) -> Self {
        self.vertical_gap = gap;
        self
    }
}

/// A unit positioned on the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Index of the column in the packing result.
    pub column: usize,
    pub name: String,
    pub rect: Rect,
    pub label: String,
}

/// Lay out every placed unit of `result` on `surface`.
///
/// Columns run left to right and empty ones are skipped. Each column is as
/// wide as its first unit; units stack downward from the origin.
pub fn layout_blocks(
    result: &PackingResult<'_>,
    surface: &RenderSurface,
    mode: LabelMode,
) -> Vec<Block> {
    let capacity = result.capacity();
    let mut blocks = Vec::with_capacity(result.placed_count());
    let mut previous_right: Option<f64> = None;

    for (column_index, column) in result.columns().iter().enumerate() {
        if column.is_empty() {
            continue;
        }
        let x = match previous_right {
            Some(right) => right + surface.column_spacing,
            None => surface.origin.x,
        };

        let mut y = surface.origin.y;
        for (row, unit) in column.units().iter().enumerate() {
            let height = surface
                .scaling
                .pixel_height(unit.height, capacity, surface.vertical_gap);
            let rect = Rect::new(x, y, f64::from(unit.width), height);
            if row == 0 {
                previous_right = Some(rect.right());
            }
            y = rect.bottom() + surface.vertical_gap;
            blocks.push(Block {
                column: column_index,
                name: unit.name.clone(),
                rect,
                label: mode.label(unit),
            });
        }
    }

    blocks
}
