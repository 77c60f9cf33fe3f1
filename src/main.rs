use anyhow::Context;
use winit::event_loop::EventLoop;

use wave_superposition::app::App;
use wave_superposition::config::AnimationConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(AnimationConfig::default());

    event_loop
        .run_app(&mut app)
        .context("Event loop terminated abnormally")?;

    if let Some(err) = app.take_error() {
        return Err(err.into());
    }
    Ok(())
}
