//! Snowfall Render - wgpu renderer for the snowfall animation
//!
//! Snowflakes reach the GPU as one instanced draw of alpha-blended discs.
//! `CircleBatch` is the `DrawSurface` the particle crate renders into; it
//! can target a window (`RenderContext`) or an offscreen texture
//! (`HeadlessContext`).

mod batch;
pub mod circle_pipeline;
mod context;
mod headless;

pub use batch::{clear_color, CircleBatch};
pub use circle_pipeline::{CircleInstance, CirclePipeline, ViewportUniforms};
pub use context::{RenderContext, RenderError};
pub use headless::HeadlessContext;
