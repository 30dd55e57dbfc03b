use blake3::Hash;
use serde_json::json;

use crate::config::{BoardConfig, EstimatorConfig};
use crate::error::Result;
use crate::expand::{expand_units, parse_quantities};
use crate::geometry::Size;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{MetricSnapshot, PackingMetrics};
use crate::packing::ColumnPacker;
use crate::render::{Block, LabelMode, SvgRenderer, layout_blocks};

const LOG_TARGET: &str = "panel::estimation";
const METRICS_TARGET: &str = "panel::metrics";

/// Rendered output of one board for one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardFrame {
    pub board: String,
    pub size: Size,
    pub blocks: Vec<Block>,
    pub svg: String,
    pub placed: usize,
    /// Names of the units that fit on no column, in placement order.
    pub overflowed: Vec<String>,
}

impl BoardFrame {
    /// Digest of everything a caller reports: the drawing and the overflow.
    fn content_hash(&self) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.svg.as_bytes());
        for name in &self.overflowed {
            hasher.update(&[0]);
            hasher.update(name.as_bytes());
        }
        hasher.finalize()
    }
}

#[derive(Debug)]
struct BoardState {
    config: BoardConfig,
    frame: Option<BoardFrame>,
    hash: Option<Hash>,
    is_dirty: bool,
}

impl BoardState {
    fn new(config: BoardConfig) -> Self {
        Self {
            config,
            frame: None,
            hash: None,
            is_dirty: false,
        }
    }

    fn update_frame(&mut self, frame: BoardFrame) -> bool {
        let new_hash = frame.content_hash();
        let changed = self.hash.map(|h| h != new_hash).unwrap_or(true);
        if changed {
            self.hash = Some(new_hash);
            self.is_dirty = true;
        }
        self.frame = Some(frame);
        changed
    }
}

/// Packs and renders one selection onto every configured board.
pub struct Estimator {
    config: EstimatorConfig,
    renderer: SvgRenderer,
    boards: Vec<BoardState>,
    logger: Option<Logger>,
    metrics: PackingMetrics,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        let boards = config.boards.iter().cloned().map(BoardState::new).collect();
        Ok(Self {
            config,
            renderer: SvgRenderer::with_default(),
            boards,
            logger: None,
            metrics: PackingMetrics::new(),
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_renderer(mut self, renderer: SvgRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Run one estimate from already-parsed quantities.
    pub fn estimate(&mut self, quantities: &[u32], mode: LabelMode) -> Result<()> {
        let units = expand_units(&self.config.catalog, quantities)?;
        let mut changed = 0usize;

        for state in &mut self.boards {
            let mut packer =
                ColumnPacker::new(state.config.packer_config(self.config.order));
            if let Some(logger) = &self.logger {
                packer = packer.with_logger(logger.clone());
            }
            let result = packer.pack(&units);
            self.metrics.record_run(units.len(), &result);

            let surface = state
                .config
                .render_surface(self.config.scaling, self.config.vertical_gap);
            let blocks = layout_blocks(&result, &surface, mode);
            let svg = self.renderer.render_to_string(state.config.size, &blocks)?;

            let overflowed: Vec<String> = result
                .overflowed()
                .iter()
                .map(|unit| unit.name.clone())
                .collect();
            if !overflowed.is_empty() {
                emit(
                    self.logger.as_ref(),
                    LogLevel::Warn,
                    "units_overflowed",
                    [
                        json_str("board", state.config.name.clone()),
                        json_kv("units", json!(overflowed)),
                    ],
                );
            }

            let frame = BoardFrame {
                board: state.config.name.clone(),
                size: state.config.size,
                blocks,
                svg,
                placed: result.placed_count(),
                overflowed,
            };
            if state.update_frame(frame) {
                changed += 1;
            }
        }

        emit(
            self.logger.as_ref(),
            LogLevel::Info,
            "estimate_completed",
            [
                json_kv("boards", self.boards.len()),
                json_kv("units", units.len()),
                json_kv("changed", changed),
                json_str("label", format!("{mode:?}").to_lowercase()),
            ],
        );
        Ok(())
    }

    /// Run one estimate straight from raw selection strings.
    pub fn estimate_selections<S: AsRef<str>>(&mut self, selections: &[S], label: &str) -> Result<()> {
        let mode = label.parse::<LabelMode>()?;
        let quantities = parse_quantities(selections)?;
        self.estimate(&quantities, mode)
    }

    /// Latest frame of `board`, if it has been estimated at least once.
    pub fn frame(&self, board: &str) -> Option<&BoardFrame> {
        self.boards
            .iter()
            .find(|state| state.config.name == board)
            .and_then(|state| state.frame.as_ref())
    }

    pub fn frames(&self) -> impl Iterator<Item = &BoardFrame> {
        self.boards.iter().filter_map(|state| state.frame.as_ref())
    }

    /// Frames that changed since the last call, in board order.
    pub fn take_dirty(&mut self) -> Vec<BoardFrame> {
        self.boards
            .iter_mut()
            .filter(|state| state.is_dirty)
            .filter_map(|state| {
                state.is_dirty = false;
                state.frame.clone()
            })
            .collect()
    }

    pub fn has_dirty(&self) -> bool {
        self.boards.iter().any(|state| state.is_dirty)
    }

    /// Forget every frame; the next estimate redraws all boards.
    pub fn reset(&mut self) {
        for state in &mut self.boards {
            state.frame = None;
            state.hash = None;
            state.is_dirty = false;
        }
    }

    pub fn metrics(&self) -> MetricSnapshot {
        self.metrics.snapshot()
    }

    pub fn log_metrics(&self) -> Result<()> {
        if let Some(logger) = &self.logger {
            logger
                .log_event(self.metrics.snapshot().to_log_event(METRICS_TARGET))?;
        }
        Ok(())
    }
}

fn emit(
    logger: Option<&Logger>,
    level: LogLevel,
    message: &str,
    fields: impl IntoIterator<Item = (String, serde_json::Value)>,
) {
    if let Some(logger) = logger {
        let _ = logger.log_event(event_with_fields(level, LOG_TARGET, message, fields));
    }
}
