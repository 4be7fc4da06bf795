//! Headless collaborators: a renderer and an audio sink that only log.
//!
//! Used by the binary and by tests in place of a GPU renderer and a sound
//! device.

use astrocrush_core::collaborators::{AudioSink, Renderer};
use astrocrush_core::enums::SessionPhase;
use astrocrush_core::state::FrameSnapshot;

/// Logs a summary line every `log_every` frames and on every phase change.
#[derive(Debug)]
pub struct TracingRenderer {
    pub frames: u64,
    pub log_every: u64,
    last_phase: Option<SessionPhase>,
    last_score: u32,
}

impl Default for TracingRenderer {
    fn default() -> Self {
        Self {
            frames: 0,
            log_every: 60,
            last_phase: None,
            last_score: 0,
        }
    }
}

impl TracingRenderer {
    pub fn last_phase(&self) -> Option<SessionPhase> {
        self.last_phase
    }

    pub fn last_score(&self) -> u32 {
        self.last_score
    }
}

impl Renderer for TracingRenderer {
    fn render(&mut self, frame: &FrameSnapshot) {
        self.frames += 1;

        if self.last_phase != Some(frame.session.phase) {
            tracing::debug!(
                phase = ?frame.session.phase,
                score = frame.session.score,
                "phase changed"
            );
            self.last_phase = Some(frame.session.phase);
        }
        self.last_score = frame.session.score;

        if self.log_every > 0 && self.frames % self.log_every == 0 {
            tracing::trace!(
                frame = self.frames,
                score = frame.session.score,
                time_remaining = frame.session.time_remaining_secs,
                targets = frame.targets.len(),
                projectiles = frame.projectiles.len(),
                camera = ?frame.camera.position,
                "frame"
            );
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        tracing::debug!(width, height, "viewport resized");
    }
}

/// Counts the sounds it is asked to play.
#[derive(Debug, Default)]
pub struct TracingAudio {
    pub muted: bool,
    pub initialized: bool,
    pub music_playing: bool,
    pub fire_sounds: u32,
    pub impact_sounds: u32,
}

impl TracingAudio {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            ..Default::default()
        }
    }
}

impl AudioSink for TracingAudio {
    fn initialize(&mut self) {
        self.initialized = true;
        tracing::debug!(muted = self.muted, "audio initialised");
    }

    fn play_fire_sound(&mut self) {
        self.fire_sounds += 1;
        tracing::trace!("laser");
    }

    fn play_impact_sound(&mut self) {
        self.impact_sounds += 1;
        tracing::trace!("explode");
    }

    fn start_music(&mut self) {
        self.music_playing = true;
        tracing::debug!("music started");
    }

    fn stop_music(&mut self) {
        self.music_playing = false;
        tracing::debug!("music stopped");
    }

    fn release(&mut self) {
        self.music_playing = false;
        self.initialized = false;
        tracing::debug!(
            fire = self.fire_sounds,
            impact = self.impact_sounds,
            "audio released"
        );
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrocrush_core::collaborators::dispatch_audio;
    use astrocrush_core::enums::{Difficulty, ImpactKind};
    use astrocrush_core::events::AudioEvent;
    use astrocrush_core::types::ProjectileId;

    #[test]
    fn renderer_tracks_phase_and_frames() {
        let mut renderer = TracingRenderer::default();
        let mut frame = FrameSnapshot::default();
        renderer.render(&frame);
        assert_eq!(renderer.last_phase(), Some(SessionPhase::Idle));

        frame.session.phase = SessionPhase::Running;
        frame.session.score = 3;
        renderer.render(&frame);
        assert_eq!(renderer.frames, 2);
        assert_eq!(renderer.last_phase(), Some(SessionPhase::Running));
        assert_eq!(renderer.last_score(), 3);
    }

    #[test]
    fn muted_audio_keeps_music_but_skips_effects() {
        let mut audio = TracingAudio::new(true);
        let events = [
            AudioEvent::MusicStart {
                difficulty: Difficulty::Easy,
            },
            AudioEvent::LaserFired {
                projectile_id: ProjectileId(0),
            },
            AudioEvent::Explosion {
                projectile_id: ProjectileId(0),
                kind: ImpactKind::Target,
            },
        ];
        for event in &events {
            dispatch_audio(&mut audio, event);
        }
        assert!(audio.music_playing);
        assert_eq!(audio.fire_sounds, 0);
        assert_eq!(audio.impact_sounds, 0);
    }
}
