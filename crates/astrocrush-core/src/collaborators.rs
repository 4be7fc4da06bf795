//! Interfaces to the presentation layer.
//!
//! The simulation never calls these directly; the tick driver hands each
//! frame's snapshot to a `Renderer` and its audio events to an `AudioSink`.

use crate::events::AudioEvent;
use crate::state::FrameSnapshot;

/// Draws frames. Never queried back by the simulation.
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot);

    /// Viewport changed; the driver forwards the same size to the simulation.
    fn resize(&mut self, _width: f32, _height: f32) {}
}

/// Sound effects and background music.
///
/// Lifecycle: `initialize` once before the first session, `release` at teardown.
/// The mute flag belongs to the sink; the driver only reads it.
pub trait AudioSink {
    fn initialize(&mut self) {}

    fn play_fire_sound(&mut self);

    fn play_impact_sound(&mut self);

    fn start_music(&mut self) {}

    fn stop_music(&mut self) {}

    fn release(&mut self) {}

    fn is_muted(&self) -> bool;
}

/// Route one audio event to a sink, honouring its mute flag.
/// Music transitions are forwarded even while muted.
pub fn dispatch_audio(sink: &mut dyn AudioSink, event: &AudioEvent) {
    match event {
        AudioEvent::MusicStart { .. } => sink.start_music(),
        AudioEvent::MusicStop => sink.stop_music(),
        AudioEvent::LaserFired { .. } => {
            if !sink.is_muted() {
                sink.play_fire_sound();
            }
        }
        AudioEvent::Explosion { .. } => {
            if !sink.is_muted() {
                sink.play_impact_sound();
            }
        }
    }
}
