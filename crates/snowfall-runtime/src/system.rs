//! Runtime system trait

use snowfall_core::{Result, Viewport};

/// A system driven by the animation loop
///
/// `initialize` runs once before the first tick. `tick` runs once per timer
/// tick while the animation is running; a failed tick costs only that frame.
pub trait RuntimeSystem {
    /// Called once when the viewport size is first known
    fn initialize(&mut self, viewport: Viewport) -> Result<()>;

    /// Called once per tick while running
    fn tick(&mut self, viewport: Viewport) -> Result<()>;

    /// Called when the drawable area changes size
    fn resize(&mut self, viewport: Viewport) -> Result<()>;

    /// Called when the system is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
