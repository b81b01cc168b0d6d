//! Snowfall Runtime - Animation loop building blocks
//!
//! Provides the pieces the host event loop drives:
//! - `TickTimer`: fixed-period tick source without catch-up bursts
//! - `AnimationState`: start/stop toggle gating the tick source
//! - `RuntimeSystem`: trait for systems ticked by the loop

mod state;
mod system;
mod timer;

pub use state::{toggle, AnimationState};
pub use system::RuntimeSystem;
pub use timer::{TickTimer, DEFAULT_TICK_PERIOD};
