use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use raycast_shooter::config::{Cli, GameConfig};
use raycast_shooter::game::state::GameState;
use raycast_shooter::headless::{self, CaptureView};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = GameConfig::from_cli(&cli).context("loading configuration")?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut state = config.build_state().context("building level")?;

    if cli.headless {
        let view = if cli.top_down { CaptureView::TopDown } else { CaptureView::FirstPerson };
        let summary = headless::run(&mut state, &config, cli.frames, cli.capture.as_deref(), view)
            .context("headless run")?;
        println!(
            "frames={} died={} {} {}",
            summary.frames_run,
            summary.died,
            summary.hud.ammo_text(),
            summary.hud.health_text()
        );
        return Ok(());
    }

    run_window(&mut state, &config)
}

#[cfg(feature = "window")]
fn run_window(state: &mut GameState, config: &GameConfig) -> Result<()> {
    raycast_shooter::frontend::run(state, config);
    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_window(_state: &mut GameState, _config: &GameConfig) -> Result<()> {
    anyhow::bail!("built without the `window` feature; pass --headless")
}
