//! Combat loop, the core of the game.
//!
//! `CombatLoop` owns the track, the target field, the projectile simulation,
//! aiming and the session. It processes queued commands, runs the per-frame
//! systems and produces `FrameSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use astrocrush_core::commands::PlayerCommand;
use astrocrush_core::constants::{DEFAULT_TARGET_COUNT, MISS_RANGE, SESSION_DURATION_SECS};
use astrocrush_core::enums::{Difficulty, SessionPhase};
use astrocrush_core::events::{AudioEvent, ProjectileEvent};
use astrocrush_core::state::FrameSnapshot;
use astrocrush_core::types::{CameraState, SimTime};

use crate::aim::AimController;
use crate::projectiles::ProjectileSim;
use crate::session::Session;
use crate::systems;
use crate::systems::fire::{MissResolver, ShotOutcome};
use crate::targets::TargetField;
use crate::track::PathTrack;

/// Configuration for a combat loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same target layouts.
    pub seed: u64,
    /// Targets placed along the track at session start.
    pub num_targets: u32,
    /// Countdown length in seconds.
    pub session_secs: u32,
    /// Distance of the impact point for shots that hit nothing.
    pub miss_range: f32,
    /// Stop missed shots at the tunnel wall instead of at `miss_range`.
    pub wall_impacts: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            num_targets: DEFAULT_TARGET_COUNT,
            session_secs: SESSION_DURATION_SECS,
            miss_range: MISS_RANGE,
            wall_impacts: false,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.session_secs == 0 {
            return Err("session_secs must be > 0".to_string());
        }
        if !self.miss_range.is_finite() || self.miss_range <= 0.0 {
            return Err("miss_range must be finite and > 0".to_string());
        }
        Ok(())
    }
}

/// The per-frame orchestrator.
pub struct CombatLoop {
    config: SimConfig,
    track: PathTrack,
    targets: TargetField,
    projectiles: ProjectileSim,
    aim: AimController,
    session: Session,
    camera: CameraState,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    /// Fire requests accepted this frame, resolved after the camera moves.
    pending_fire: u32,
    /// Frame-clock reading at the first frame of the running session.
    session_start_ms: Option<f64>,
    audio_events: Vec<AudioEvent>,
    projectile_events: Vec<ProjectileEvent>,
    last_shots: Vec<ShotOutcome>,
}

impl CombatLoop {
    /// Create a combat loop flying the built-in tunnel.
    pub fn new(config: SimConfig) -> Self {
        Self::with_track(config, PathTrack::default_tunnel())
    }

    /// Create a combat loop flying a custom track.
    pub fn with_track(config: SimConfig, track: PathTrack) -> Self {
        let camera = systems::camera::initial(&track);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            session: Session::new(config.session_secs),
            config,
            track,
            targets: TargetField::new(),
            projectiles: ProjectileSim::new(),
            aim: AimController::new(),
            camera,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            pending_fire: 0,
            session_start_ms: None,
            audio_events: Vec::new(),
            projectile_events: Vec::new(),
            last_shots: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands, preserving order.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run one frame at monotonic clock reading `now_ms` and return the snapshot.
    ///
    /// Outside a running session only commands are processed; the camera
    /// and projectiles stay frozen.
    pub fn tick(&mut self, now_ms: f64) -> FrameSnapshot {
        self.last_shots.clear();
        self.process_commands();

        if self.session.is_running() {
            let start = *self.session_start_ms.get_or_insert(now_ms);
            self.time.advance_to((now_ms - start).max(0.0));
            self.run_systems();
        }

        self.snapshot()
    }

    /// One real-time second elapsed. Called by a clock independent of the
    /// frame rate. Ends the session when the countdown reaches zero.
    pub fn countdown_second(&mut self) {
        if self.session.countdown_second() {
            self.pending_fire = 0;
            self.audio_events.push(AudioEvent::MusicStop);
            tracing::info!(score = self.session.score(), "session ended");
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn targets(&self) -> &TargetField {
        &self.targets
    }

    pub fn projectiles(&self) -> &ProjectileSim {
        &self.projectiles
    }

    pub fn aim(&self) -> &AimController {
        &self.aim
    }

    pub fn camera(&self) -> CameraState {
        self.camera
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn track(&self) -> &PathTrack {
        &self.track
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Outcomes of the fire requests resolved during the last tick.
    pub fn last_shots(&self) -> &[ShotOutcome] {
        &self.last_shots
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession { difficulty } => self.start_session(difficulty),
            PlayerCommand::RetrySession => self.reset_session(),
            PlayerCommand::PointerMoved { x, y } => {
                self.aim.update_from_pointer(x, y);
            }
            PlayerCommand::ViewportResized { width, height } => {
                if !self.aim.set_viewport(width, height) {
                    tracing::warn!(width, height, "ignoring degenerate viewport size");
                }
            }
            PlayerCommand::Fire => {
                if self.session.is_running() {
                    self.pending_fire += 1;
                } else {
                    tracing::debug!(phase = ?self.session.phase(), "fire ignored outside a running session");
                }
            }
        }
    }

    fn start_session(&mut self, difficulty: Difficulty) {
        if !self.session.start(difficulty) {
            tracing::debug!(phase = ?self.session.phase(), "start ignored");
            return;
        }

        let layout_seed: u64 = self.rng.gen();
        self.targets
            .populate(self.config.num_targets, &self.track, layout_seed);
        self.projectiles.clear();
        self.camera = systems::camera::initial(&self.track);
        self.time = SimTime::default();
        self.session_start_ms = None;
        self.pending_fire = 0;
        self.audio_events.push(AudioEvent::MusicStart { difficulty });

        tracing::info!(
            ?difficulty,
            targets = self.targets.alive_count(),
            "session started"
        );
    }

    fn reset_session(&mut self) {
        if self.session.is_running() {
            self.audio_events.push(AudioEvent::MusicStop);
        }
        self.session.reset();
        self.targets.clear();
        self.projectiles.clear();
        self.camera = systems::camera::initial(&self.track);
        self.time = SimTime::default();
        self.session_start_ms = None;
        self.pending_fire = 0;

        tracing::info!("session reset");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Camera progression
        systems::camera::run(
            &mut self.camera,
            &self.track,
            self.time.session_ms,
            self.session.difficulty().speed_multiplier(),
        );

        // 2. Aim ray from the latest pointer position
        let ray = self.aim.current_aim_ray(&self.camera);

        // 3. Fire requests, each against the target set left by the previous one
        let miss = MissResolver {
            range: self.config.miss_range,
            tunnel: self.config.wall_impacts.then_some(&self.track),
        };
        for _ in 0..std::mem::take(&mut self.pending_fire) {
            let outcome = systems::fire::fire_one(
                &ray,
                &mut self.targets,
                &mut self.projectiles,
                &mut self.session,
                &miss,
                &mut self.audio_events,
            );
            self.last_shots.push(outcome);
        }

        // 4. Projectile lifecycle
        let events = self.projectiles.advance_all();
        for event in &events {
            if let ProjectileEvent::Exploded { id } = event {
                if let Some(projectile) = self.projectiles.get(*id) {
                    self.audio_events.push(AudioEvent::Explosion {
                        projectile_id: *id,
                        kind: projectile.impact_kind,
                    });
                }
            }
        }
        for id in self.projectiles.sweep_expired() {
            tracing::debug!(projectile = id.0, "projectile expired");
        }
        self.projectile_events.extend(events);
    }

    fn snapshot(&mut self) -> FrameSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        let projectile_events = std::mem::take(&mut self.projectile_events);
        systems::snapshot::build_snapshot(
            &self.time,
            &self.session,
            &self.camera,
            &self.aim,
            &self.targets,
            &self.projectiles,
            audio_events,
            projectile_events,
        )
    }
}
