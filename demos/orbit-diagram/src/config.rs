//! Startup configuration for the bodies, the particle and the viewport.
//!
//! Everything here is a compile-time constant gathered into one immutable
//! [`OrreryConfig`], validated once before the first frame.

use anyhow::{ensure, Context, Result};
use glam::Vec2;
use orrery_engine::{GameConfig, VectorColor};

use crate::particle::Bounds;

// ── Palette ──────────────────────────────────────────────────────────

pub const BLACK: VectorColor = VectorColor::BLACK;
pub const WHITE: VectorColor = VectorColor::WHITE;
pub const YELLOW: VectorColor = VectorColor::YELLOW;
pub const BLUE: VectorColor = VectorColor::BLUE;
pub const RED: VectorColor = VectorColor::RED;
pub const GRAY: VectorColor = VectorColor::rgb8(200, 200, 200);
pub const ORANGE: VectorColor = VectorColor::rgb8(255, 165, 0);
pub const BROWN: VectorColor = VectorColor::rgb8(165, 42, 42);

// ── Viewport ─────────────────────────────────────────────────────────

const TITLE: &str = "Solar System Particle Simulation";
const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 800.0;
const FPS: f32 = 60.0;

const SUN_RADIUS: f32 = 20.0;
const RING_WIDTH: f32 = 1.0;

const PARTICLE_RADIUS: f32 = 5.0;
/// Pixels per second.
const PARTICLE_SPEED: f32 = 200.0;

/// Index of the body whose orbit the particle starts just outside of.
const START_ORBIT: usize = 2;

/// Vertex budget: background + sun + (ring + body) per planet + particle,
/// with plenty of headroom for fine circle tessellation.
const MAX_VECTOR_VERTICES: usize = 16384;

/// One orbiting body. Immutable for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: &'static str,
    pub color: VectorColor,
    /// Pixels from the center.
    pub orbit_radius: f64,
    /// Drawn radius in pixels.
    pub size: f32,
    /// Seconds per revolution.
    pub period: f64,
}

impl Body {
    pub const fn new(
        name: &'static str,
        color: VectorColor,
        orbit_radius: f64,
        size: f32,
        period: f64,
    ) -> Self {
        Self { name, color, orbit_radius, size, period }
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.name.is_empty(), "name is empty");
        ensure!(
            self.orbit_radius.is_finite() && self.orbit_radius > 0.0,
            "orbital radius must be positive, got {}",
            self.orbit_radius
        );
        ensure!(
            self.period.is_finite() && self.period > 0.0,
            "orbital period must be positive, got {}",
            self.period
        );
        ensure!(
            self.size.is_finite() && self.size > 0.0,
            "display size must be positive, got {}",
            self.size
        );
        Ok(())
    }
}

/// The planets, innermost first.
pub const PLANETS: [Body; 4] = [
    Body::new("Mercury", ORANGE, 60.0, 4.0, 10.0),
    Body::new("Venus", BROWN, 90.0, 6.0, 20.0),
    Body::new("Earth", BLUE, 120.0, 8.0, 30.0),
    Body::new("Mars", RED, 160.0, 6.0, 40.0),
];

/// The player-controlled particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub radius: f32,
    /// Pixels per second, whatever the direction.
    pub speed: f32,
    pub color: VectorColor,
}

/// Complete startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OrreryConfig {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
    pub target_fps: f32,
    pub background: VectorColor,
    pub sun_radius: f32,
    pub sun_color: VectorColor,
    pub ring_width: f32,
    pub ring_color: VectorColor,
    pub particle: ParticleConfig,
    pub bodies: Vec<Body>,
}

impl OrreryConfig {
    /// The diagram as shipped: four planets around a yellow sun.
    pub fn standard() -> Self {
        Self {
            title: TITLE,
            width: WIDTH,
            height: HEIGHT,
            target_fps: FPS,
            background: BLACK,
            sun_radius: SUN_RADIUS,
            sun_color: YELLOW,
            ring_width: RING_WIDTH,
            ring_color: GRAY,
            particle: ParticleConfig {
                radius: PARTICLE_RADIUS,
                speed: PARTICLE_SPEED,
                color: WHITE,
            },
            bodies: PLANETS.to_vec(),
        }
    }

    /// Check every startup invariant. A failure here is a programming error
    /// in the constants and must stop the program before the first frame.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "viewport must have positive size, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.target_fps.is_finite() && self.target_fps > 0.0,
            "target frame rate must be positive, got {}",
            self.target_fps
        );
        ensure!(self.sun_radius > 0.0, "sun radius must be positive");

        let p = &self.particle;
        ensure!(
            p.radius.is_finite() && p.radius > 0.0,
            "particle radius must be positive, got {}",
            p.radius
        );
        ensure!(
            p.speed.is_finite() && p.speed >= 0.0,
            "particle speed must be non-negative, got {}",
            p.speed
        );
        ensure!(
            2.0 * p.radius <= self.width.min(self.height),
            "particle of radius {} does not fit in a {}x{} viewport",
            p.radius,
            self.width,
            self.height
        );

        ensure!(!self.bodies.is_empty(), "no bodies configured");
        for (i, body) in self.bodies.iter().enumerate() {
            body.validate()
                .with_context(|| format!("body #{i} ({})", body.name))?;
        }
        Ok(())
    }

    /// Engine-side configuration derived from this one.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            title: self.title.to_owned(),
            target_fps: self.target_fps,
            world_width: self.width,
            world_height: self.height,
            max_vector_vertices: MAX_VECTOR_VERTICES,
        }
    }

    /// Screen position of the sun and of every orbit's center.
    pub fn center(&self) -> Vec2 {
        // Whole pixels, like an integer-divided window center
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    /// Area the particle's center may occupy, before inset by its radius.
    pub fn bounds(&self) -> Bounds {
        Bounds::viewport(self.width, self.height)
    }

    /// Just outside the starting orbit, at angle zero.
    pub fn particle_start(&self) -> Vec2 {
        let orbit = self
            .bodies
            .get(START_ORBIT)
            .map_or(0.0, |b| b.orbit_radius as f32);
        let start = self.center() + Vec2::new(orbit + self.particle.radius, 0.0);
        self.bounds().clamp_disc(start, self.particle.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_is_valid() {
        let config = OrreryConfig::standard();
        config.validate().unwrap();
        assert_eq!(config.bodies.len(), 4);
        assert_eq!(config.bodies[2].name, "Earth");
    }

    #[test]
    fn particle_starts_outside_earth_orbit() {
        let config = OrreryConfig::standard();
        assert_eq!(config.center(), Vec2::new(400.0, 400.0));
        assert_eq!(config.particle_start(), Vec2::new(525.0, 400.0));
    }

    #[test]
    fn particle_start_without_third_body_is_center() {
        let mut config = OrreryConfig::standard();
        config.bodies.truncate(1);
        assert_eq!(config.particle_start(), Vec2::new(405.0, 400.0));
    }

    #[test]
    fn game_config_mirrors_viewport() {
        let game = OrreryConfig::standard().game_config();
        assert_eq!(game.title, "Solar System Particle Simulation");
        assert_eq!(game.world_width, 800.0);
        assert_eq!(game.world_height, 800.0);
        assert_eq!(game.target_fps, 60.0);
    }

    #[test]
    fn rejects_non_positive_period() {
        let mut config = OrreryConfig::standard();
        config.bodies[1].period = 0.0;
        let err = config.validate().unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Venus"), "{msg}");
        assert!(msg.contains("period"), "{msg}");
    }

    #[test]
    fn rejects_non_positive_radius() {
        let mut config = OrreryConfig::standard();
        config.bodies[3].orbit_radius = -160.0;
        let msg = format!("{:#}", config.validate().unwrap_err());
        assert!(msg.contains("Mars"), "{msg}");
        assert!(msg.contains("radius"), "{msg}");
    }

    #[test]
    fn rejects_empty_body_list() {
        let mut config = OrreryConfig::standard();
        config.bodies.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_particle_larger_than_viewport() {
        let mut config = OrreryConfig::standard();
        config.particle.radius = 500.0;
        assert!(config.validate().is_err());
    }
}
