use std::path::PathBuf;
use std::time::{Duration, Instant};

use astrocrush_app::config::AppConfig;
use astrocrush_app::headless::{TracingAudio, TracingRenderer};
use astrocrush_app::state::AppState;
use astrocrush_core::commands::PlayerCommand;
use astrocrush_core::enums::SessionPhase;

/// How often the scripted pilot moves the pointer and pulls the trigger.
const PILOT_INTERVAL: Duration = Duration::from_millis(150);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    tracing::info!(
        seed = config.sim.seed,
        targets = config.sim.num_targets,
        session_secs = config.sim.session_secs,
        difficulty = ?config.difficulty,
        "starting headless session"
    );

    let state = AppState::new();
    state
        .start(
            config.clone(),
            Box::new(TracingRenderer::default()),
            Box::new(TracingAudio::new(config.muted)),
        )
        .map_err(anyhow::Error::msg)?;
    state
        .send_command(PlayerCommand::StartSession {
            difficulty: config.difficulty,
        })
        .map_err(anyhow::Error::msg)?;

    // Sweep the crosshair in a slow figure eight and fire until time runs out.
    let begin = Instant::now();
    let deadline = Duration::from_secs(u64::from(config.sim.session_secs) + 5);
    let final_score = loop {
        std::thread::sleep(PILOT_INTERVAL);
        let t = begin.elapsed().as_secs_f32();

        if let Some(snapshot) = state.snapshot().map_err(anyhow::Error::msg)? {
            if snapshot.session.phase == SessionPhase::Ended {
                break snapshot.session.score;
            }
        }
        if begin.elapsed() > deadline {
            anyhow::bail!("session did not end within {:?}", deadline);
        }

        state
            .send_command(PlayerCommand::PointerMoved {
                x: (t * 0.7).sin() * 0.6,
                y: (t * 1.4).sin() * 0.3,
            })
            .map_err(anyhow::Error::msg)?;
        state
            .send_command(PlayerCommand::Fire)
            .map_err(anyhow::Error::msg)?;
    };

    tracing::info!(score = final_score, "game over");
    state.shutdown().map_err(anyhow::Error::msg)?;
    Ok(())
}
