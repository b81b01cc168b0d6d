//! Snowfall Player: windowed snowfall animation
//!
//! This crate provides the `SnowfallApp` application handler and the
//! `AppConfig` it is built from.

mod app;
pub mod config;

pub use app::SnowfallApp;
pub use config::{AppConfig, WindowConfig};
