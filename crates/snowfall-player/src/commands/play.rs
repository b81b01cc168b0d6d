//! Play command: opens the animation window

use anyhow::Result;
use snowfall_player::{AppConfig, SnowfallApp};
use winit::event_loop::{ControlFlow, EventLoop};

pub struct PlayArgs {
    pub config: AppConfig,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = SnowfallApp::new(args.config);
    event_loop.run_app(&mut app)?;

    match app.take_startup_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
