//! Score, countdown and phase of one play session.

use astrocrush_core::enums::{Difficulty, SessionPhase};
use astrocrush_core::state::SessionView;

#[derive(Debug, Clone)]
pub struct Session {
    score: u32,
    time_remaining_secs: u32,
    duration_secs: u32,
    difficulty: Difficulty,
    phase: SessionPhase,
}

impl Session {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            score: 0,
            time_remaining_secs: duration_secs,
            duration_secs,
            difficulty: Difficulty::default(),
            phase: SessionPhase::Idle,
        }
    }

    /// Enter Running. Only valid from Idle; returns whether the session started.
    pub fn start(&mut self, difficulty: Difficulty) -> bool {
        if self.phase != SessionPhase::Idle {
            return false;
        }
        self.difficulty = difficulty;
        self.score = 0;
        self.time_remaining_secs = self.duration_secs;
        self.phase = SessionPhase::Running;
        true
    }

    /// One real-time second elapsed. Returns `true` on the call that ends the session.
    pub fn countdown_second(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        if self.time_remaining_secs <= 1 {
            self.time_remaining_secs = 0;
            self.phase = SessionPhase::Ended;
            return true;
        }
        self.time_remaining_secs -= 1;
        false
    }

    /// Back to Idle with a full clock and zero score. Difficulty is kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.time_remaining_secs = self.duration_secs;
        self.phase = SessionPhase::Idle;
    }

    pub fn record_hit(&mut self) {
        self.score += 1;
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining_secs(&self) -> u32 {
        self.time_remaining_secs
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            difficulty: self.difficulty,
            score: self.score,
            time_remaining_secs: self.time_remaining_secs,
        }
    }
}
