//! Application state shared between the input side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use astrocrush_core::collaborators::{AudioSink, Renderer};
use astrocrush_core::commands::PlayerCommand;
use astrocrush_core::state::FrameSnapshot;

use crate::config::AppConfig;
use crate::game_loop;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the combat loop.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running (or not yet started) game loop.
///
/// - `Mutex` around the sender so the state can be shared across threads
/// - `Arc<Mutex<...>>` for the latest snapshot, written by the loop thread
pub struct AppState {
    /// `None` until `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for polling. Updated after each frame.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    pub running: Mutex<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread. Fails if one is already running.
    pub fn start(
        &self,
        config: AppConfig,
        renderer: Box<dyn Renderer + Send>,
        audio: Box<dyn AudioSink + Send>,
    ) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        if *running {
            return Err("Game loop already running".into());
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, renderer, audio, self.latest_snapshot.clone())
                .map_err(|e| format!("Failed to spawn game loop: {}", e))?;

        *self.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
        *self.handle.lock().map_err(|e| e.to_string())? = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the game loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|e| format!("Failed to send command: {}", e)),
            None => Err("Game loop not started".into()),
        }
    }

    /// Latest snapshot, if a frame has been produced yet.
    pub fn snapshot(&self) -> Result<Option<FrameSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Stop the game loop and wait for it to release its collaborators.
    pub fn shutdown(&self) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        if let Some(tx) = self.command_tx.lock().map_err(|e| e.to_string())?.take() {
            // A closed channel means the loop already exited.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.handle.lock().map_err(|e| e.to_string())?.take() {
            handle
                .join()
                .map_err(|_| "Game loop thread panicked".to_string())?;
        }
        *running = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{TracingAudio, TracingRenderer};

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(state.send_command(PlayerCommand::Fire).is_err());
        assert!(state.shutdown().is_ok());
    }

    #[test]
    fn test_start_twice_fails_and_shutdown_joins() {
        let state = AppState::new();
        let config = AppConfig::default();
        state
            .start(
                config.clone(),
                Box::new(TracingRenderer::default()),
                Box::new(TracingAudio::new(true)),
            )
            .unwrap();
        assert!(state
            .start(
                config,
                Box::new(TracingRenderer::default()),
                Box::new(TracingAudio::new(true)),
            )
            .is_err());

        state.send_command(PlayerCommand::Fire).unwrap();
        state.shutdown().unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(state.send_command(PlayerCommand::Fire).is_err());
    }
}
