//! Rendering collaborator: turns a packing result into positioned,
//! labeled blocks and writes them out as SVG.

mod blocks;
mod core;

pub use blocks::{
    Block, DEFAULT_SCALING_INTERCEPT, DEFAULT_SCALING_SLOPE, DEFAULT_VERTICAL_GAP, LabelMode,
    RenderSurface, ScalingLaw, layout_blocks,
};
pub use self::core::{RendererSettings, SvgRenderer};
