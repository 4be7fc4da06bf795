//! Game loop thread: runs the combat loop at the configured frame rate and
//! publishes snapshots.
//!
//! The engine and the presentation collaborators are owned by this thread.
//! Commands arrive via an `mpsc` channel. Every frame the snapshot goes to
//! the `Renderer`, its audio events to the `AudioSink`, and a copy into
//! shared state for polling. The session countdown runs off its own
//! one-second clock, independent of the frame rate.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use astrocrush_core::collaborators::{dispatch_audio, AudioSink, Renderer};
use astrocrush_core::commands::PlayerCommand;
use astrocrush_core::constants::COUNTDOWN_INTERVAL_MS;
use astrocrush_core::enums::SessionPhase;
use astrocrush_core::state::FrameSnapshot;
use astrocrush_sim::CombatLoop;

use crate::config::AppConfig;
use crate::state::GameLoopCommand;

const COUNTDOWN_INTERVAL: Duration = Duration::from_millis(COUNTDOWN_INTERVAL_MS);

/// Duration of one frame at `rate_hz`.
pub fn frame_duration(rate_hz: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / rate_hz.max(1) as u64)
}

/// Owns one combat loop and its collaborators, and turns wall-clock
/// instants into frames.
pub struct FrameDriver {
    engine: CombatLoop,
    renderer: Box<dyn Renderer + Send>,
    audio: Box<dyn AudioSink + Send>,
    started_at: Instant,
    /// When the next countdown second falls due. Armed on the first
    /// running frame, disarmed outside a running session.
    next_countdown: Option<Instant>,
}

impl FrameDriver {
    pub fn new(
        config: &AppConfig,
        mut renderer: Box<dyn Renderer + Send>,
        mut audio: Box<dyn AudioSink + Send>,
        started_at: Instant,
    ) -> Self {
        let mut engine = CombatLoop::new(config.sim.clone());
        engine.queue_command(PlayerCommand::ViewportResized {
            width: config.viewport_width,
            height: config.viewport_height,
        });
        renderer.resize(config.viewport_width, config.viewport_height);
        audio.initialize();

        Self {
            engine,
            renderer,
            audio,
            started_at,
            next_countdown: None,
        }
    }

    /// Queue a player command for the next frame.
    pub fn handle(&mut self, command: PlayerCommand) {
        if let PlayerCommand::ViewportResized { width, height } = command {
            self.renderer.resize(width, height);
        }
        self.engine.queue_command(command);
    }

    /// Produce the frame for wall-clock instant `now`.
    pub fn frame(&mut self, now: Instant) -> FrameSnapshot {
        // 1. Countdown seconds that fell due since the last frame
        if let Some(due) = self.next_countdown.as_mut() {
            while now >= *due && self.engine.phase() == SessionPhase::Running {
                self.engine.countdown_second();
                *due += COUNTDOWN_INTERVAL;
            }
        }

        // 2. Simulate
        let now_ms = now.saturating_duration_since(self.started_at).as_secs_f64() * 1000.0;
        let snapshot = self.engine.tick(now_ms);

        // 3. Arm or disarm the countdown clock
        self.next_countdown = match self.engine.phase() {
            SessionPhase::Running => Some(self.next_countdown.unwrap_or(now + COUNTDOWN_INTERVAL)),
            SessionPhase::Idle | SessionPhase::Ended => None,
        };

        // 4. Present
        for event in &snapshot.audio_events {
            dispatch_audio(self.audio.as_mut(), event);
        }
        self.renderer.render(&snapshot);

        snapshot
    }

    pub fn engine(&self) -> &CombatLoop {
        &self.engine
    }

    /// Tear down the audio sink.
    pub fn release(mut self) {
        self.audio.release();
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: AppConfig,
    renderer: Box<dyn Renderer + Send>,
    audio: Box<dyn AudioSink + Send>,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("astrocrush-game-loop".into())
        .spawn(move || {
            let driver = FrameDriver::new(&config, renderer, audio, Instant::now());
            run_game_loop(driver, frame_duration(config.frame_rate_hz), cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut driver: FrameDriver,
    frame_duration: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut next_frame_time = Instant::now();

    'frames: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => driver.handle(cmd),
                Ok(GameLoopCommand::Shutdown) => break 'frames,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames,
            }
        }

        // 2. Advance one frame and present it
        let snapshot = driver.frame(Instant::now());

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }

    tracing::info!(
        score = driver.engine().session().score(),
        "game loop stopped"
    );
    driver.release();
}
