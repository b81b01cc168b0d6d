//! Snowfall Core - Foundational types for the Snowfall animation
//!
//! This crate provides the types every other Snowfall crate depends on:
//! - `Rgba` - 8-bit color with alpha
//! - `Viewport` - drawable area size in pixels
//! - Error types and Result alias

mod error;
mod types;

pub use error::{Result, SnowfallError};
pub use types::{Rgba, Viewport};
