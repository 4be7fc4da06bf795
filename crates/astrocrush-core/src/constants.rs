//! Simulation constants and tuning parameters.

/// Frame rate of the tick driver (Hz).
pub const TICK_RATE: u32 = 60;

/// Real-time interval between countdown callbacks, in milliseconds.
pub const COUNTDOWN_INTERVAL_MS: u64 = 1000;

// --- Session ---

/// Length of a play session in seconds.
pub const SESSION_DURATION_SECS: u32 = 60;

/// Camera speed multiplier on Easy.
pub const EASY_SPEED_MULTIPLIER: f64 = 0.03;

/// Camera speed multiplier on Medium.
pub const MEDIUM_SPEED_MULTIPLIER: f64 = 0.05;

/// Camera speed multiplier on Hard.
pub const HARD_SPEED_MULTIPLIER: f64 = 0.08;

// --- Flight path ---

/// Eased time that corresponds to one full lap of the track.
pub const LOOP_DURATION_MS: f64 = 10.0 * 1000.0;

/// Exponent applied to `t * speed` to give the ease-in progression.
pub const CAMERA_EASE_EXPONENT: f64 = 1.2;

/// How far ahead along the track the camera looks (track parameter units).
pub const LOOK_AHEAD_FRACTION: f32 = 0.03;

/// Number of chord samples used to re-parameterise the spline by arc length.
pub const ARC_LENGTH_DIVISIONS: usize = 200;

/// Radius of the tunnel around the flight path (world units).
pub const TUBE_RADIUS: f32 = 0.65;

/// Ray-march step used to find where a ray leaves the tunnel.
pub const TUBE_MARCH_STEP: f32 = 0.05;

/// Tunnel wall colour (`0x00ccff`).
pub const TUBE_COLOR_HEX: u32 = 0x00ccff;

// --- Targets ---

/// Number of targets placed along the track each session.
pub const DEFAULT_TARGET_COUNT: u32 = 55;

/// Maximum random offset added to a target's evenly spaced track parameter.
pub const TARGET_PARAM_JITTER: f32 = 0.1;

/// Positional jitter on x and z is `rand - TARGET_JITTER_BIAS`, i.e. `[-0.4, 0.6)`.
pub const TARGET_JITTER_BIAS: f32 = 0.4;

/// Edge length of a target's bounding cube.
pub const TARGET_SIZE: f32 = 0.25;

/// Hue of a target at track parameter 0; hue advances with the parameter.
pub const TARGET_HUE_OFFSET: f32 = 0.7;

// --- Projectiles ---

/// Distance a projectile travels per tick (world units).
pub const PROJECTILE_SPEED: f32 = 0.5;

/// Remaining distance below which a travelling projectile snaps to impact.
pub const IMPACT_THRESHOLD: f32 = 0.5;

/// Opacity multiplier applied each exploding tick.
pub const EXPLOSION_DECAY_FACTOR: f32 = 0.85;

/// Scale increment applied each exploding tick.
pub const EXPLOSION_GROWTH_STEP: f32 = 0.2;

/// Opacity at or below which an explosion is finished.
pub const OPACITY_EPSILON: f32 = 0.01;

/// Scale a projectile is left at once expired.
pub const MIN_SCALE: f32 = 0.01;

/// Default laser bolt colour (`0xffcc00`).
pub const LASER_COLOR_HEX: u32 = 0xffcc00;

/// Distance along the aim ray of the impact point for a shot that hits nothing.
pub const MISS_RANGE: f32 = 10.0;

// --- Aim ---

/// Scale from normalised pointer coordinates to crosshair offset.
pub const AIM_FUDGE: f32 = 0.75;

/// Distance of the crosshair plane in front of the camera.
pub const AIM_PLANE_DISTANCE: f32 = 1.0;

/// Viewport aspect ratio assumed until the first resize event.
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;
