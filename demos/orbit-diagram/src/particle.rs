//! Keyboard-driven particle: constant-speed movement clamped to the viewport.
//!
//! Velocity is recomputed from the held keys every frame and never carried
//! over; releasing the keys stops the particle dead. There is no inertia.

use glam::Vec2;
use orrery_engine::FrameInput;

use crate::config::ParticleConfig;

/// Axis-aligned rectangle the particle lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// The whole viewport, origin top-left.
    pub fn viewport(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    /// Clamp a disc center so the disc stays inside, each axis independently.
    pub fn clamp_disc(&self, center: Vec2, radius: f32) -> Vec2 {
        let lo = self.min + radius;
        let hi = self.max - radius;
        // max-then-min rather than clamp(): never panics on an inverted range
        center.max(lo).min(hi)
    }

    /// Whether a disc lies fully inside (edges included).
    pub fn contains_disc(&self, center: Vec2, radius: f32) -> bool {
        let lo = self.min + radius;
        let hi = self.max - radius;
        center.cmpge(lo).all() && center.cmple(hi).all()
    }
}

/// Raw direction from the held keys: each axis in {-1, 0, 1}.
/// Screen y grows downward, so up is negative. Opposite keys cancel.
pub fn direction(input: FrameInput) -> Vec2 {
    let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
    Vec2::new(axis(input.left, input.right), axis(input.up, input.down))
}

/// Velocity for this frame: zero, or exactly `speed` along the held direction.
pub fn velocity(input: FrameInput, speed: f32) -> Vec2 {
    direction(input).normalize_or_zero() * speed
}

/// Advance a particle one frame and clamp it into `bounds`.
///
/// `dt` is the measured frame duration. Clamping runs every frame
/// regardless of input, so no `dt` can carry the particle outside.
pub fn step(
    position: Vec2,
    input: FrameInput,
    dt: f32,
    bounds: &Bounds,
    particle: &ParticleConfig,
) -> Vec2 {
    let moved = position + velocity(input, particle.speed) * sanitize_dt(dt);
    bounds.clamp_disc(moved, particle.radius)
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}

/// The particle's mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Velocity used in the most recent update.
    pub velocity: Vec2,
    /// Whether the last update had to clamp the position.
    pub against_wall: bool,
}

impl Particle {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            against_wall: false,
        }
    }

    /// Recompute velocity from `input`, integrate over `dt`, clamp.
    pub fn update(
        &mut self,
        input: FrameInput,
        dt: f32,
        bounds: &Bounds,
        config: &ParticleConfig,
    ) {
        self.velocity = velocity(input, config.speed);
        let unclamped = self.position + self.velocity * sanitize_dt(dt);
        let clamped = bounds.clamp_disc(unclamped, config.radius);

        let hit = clamped != unclamped;
        if hit && !self.against_wall {
            log::debug!("particle: pinned at ({:.1}, {:.1})", clamped.x, clamped.y);
        }
        self.against_wall = hit;
        self.position = clamped;
    }
}
