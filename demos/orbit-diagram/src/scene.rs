//! Frame composition: what one frame shows, as plain data, and how it is
//! painted into the vector buffer.

use glam::Vec2;
use orrery_engine::{VectorColor, VectorState};

use crate::config::OrreryConfig;

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub color: VectorColor,
}

/// A circle outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Vec2,
    pub radius: f32,
    pub width: f32,
    pub color: VectorColor,
}

/// Everything visible in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameScene {
    pub size: Vec2,
    pub background: VectorColor,
    pub sun: Disc,
    /// One per body, same order as the body list.
    pub rings: Vec<Ring>,
    /// One per body, same order as the body list.
    pub bodies: Vec<Disc>,
    pub particle: Disc,
}

/// Drawing happens on whole pixels.
fn snap(p: Vec2) -> Vec2 {
    p.trunc()
}

impl FrameScene {
    /// Build a frame from this tick's body positions and particle position.
    pub fn compose(config: &OrreryConfig, body_positions: &[Vec2], particle: Vec2) -> Self {
        let center = config.center();

        let rings = config
            .bodies
            .iter()
            .map(|body| Ring {
                center,
                radius: body.orbit_radius as f32,
                width: config.ring_width,
                color: config.ring_color,
            })
            .collect();

        let bodies = config
            .bodies
            .iter()
            .zip(body_positions)
            .map(|(body, &pos)| Disc {
                center: snap(pos),
                radius: body.size,
                color: body.color,
            })
            .collect();

        Self {
            size: Vec2::new(config.width, config.height),
            background: config.background,
            sun: Disc {
                center,
                radius: config.sun_radius,
                color: config.sun_color,
            },
            rings,
            bodies,
            particle: Disc {
                center: snap(particle),
                radius: config.particle.radius,
                color: config.particle.color,
            },
        }
    }

    /// Paint back to front: background, sun, each orbit ring followed by its
    /// body, particle on top.
    pub fn draw(&self, vectors: &mut VectorState) {
        vectors.fill_rect(Vec2::ZERO, self.size.x, self.size.y, self.background);
        fill(vectors, &self.sun);
        for (ring, body) in self.rings.iter().zip(&self.bodies) {
            vectors.stroke_circle(ring.center, ring.radius, ring.width, ring.color);
            fill(vectors, body);
        }
        fill(vectors, &self.particle);
    }
}

fn fill(vectors: &mut VectorState, disc: &Disc) {
    vectors.fill_circle(disc.center, disc.radius, disc.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRAY, WHITE, YELLOW};
    use crate::orbit;

    fn compose_at(elapsed: f64, particle: Vec2) -> FrameScene {
        let config = OrreryConfig::standard();
        let positions = orbit::screen_positions(&config.bodies, elapsed, config.center());
        FrameScene::compose(&config, &positions, particle)
    }

    #[test]
    fn one_ring_and_disc_per_body() {
        let scene = compose_at(0.0, Vec2::new(525.0, 400.0));
        assert_eq!(scene.rings.len(), 4);
        assert_eq!(scene.bodies.len(), 4);
        assert_eq!(scene.sun.center, Vec2::new(400.0, 400.0));
        assert_eq!(scene.sun.radius, 20.0);
        assert_eq!(scene.sun.color, YELLOW);
        for ring in &scene.rings {
            assert_eq!(ring.center, Vec2::new(400.0, 400.0));
            assert_eq!(ring.width, 1.0);
            assert_eq!(ring.color, GRAY);
        }
        assert_eq!(scene.rings[2].radius, 120.0);
        assert_eq!(scene.bodies[2].radius, 8.0);
        assert_eq!(scene.particle.radius, 5.0);
        assert_eq!(scene.particle.color, WHITE);
    }

    #[test]
    fn positions_snap_to_whole_pixels() {
        let scene = compose_at(7.5, Vec2::new(525.9, 400.4));
        assert_eq!(scene.particle.center, Vec2::new(525.0, 400.0));
        for disc in &scene.bodies {
            assert_eq!(disc.center, disc.center.trunc());
        }
        // Earth a quarter turn in: straight below the sun
        let earth = scene.bodies[2].center;
        assert!((earth.x - 400.0).abs() <= 1.0, "{earth:?}");
        assert!((earth.y - 520.0).abs() <= 1.0, "{earth:?}");
    }

    #[test]
    fn bodies_sit_on_their_rings() {
        let scene = compose_at(3.3, Vec2::new(10.0, 10.0));
        for (ring, disc) in scene.rings.iter().zip(&scene.bodies) {
            let d = disc.center.distance(ring.center);
            assert!((d - ring.radius).abs() < 1.5, "{d} vs {}", ring.radius);
        }
    }

    #[test]
    fn draw_paints_particle_last() {
        let scene = compose_at(1.0, Vec2::new(100.0, 100.0));
        let mut vectors = VectorState::new(1 << 16);
        scene.draw(&mut vectors);
        assert_eq!(vectors.dropped_shapes(), 0);

        let verts = vectors.vertices();
        assert_eq!(verts.len() % 3, 0);
        // Background first
        assert!(verts[..6].iter().all(|v| (v.r, v.g, v.b) == (0.0, 0.0, 0.0)));
        // Last triangle belongs to the white particle near (100, 100)
        let last = verts[verts.len() - 1];
        assert_eq!((last.r, last.g, last.b), (1.0, 1.0, 1.0));
        assert!(Vec2::new(last.x, last.y).distance(Vec2::new(100.0, 100.0)) <= 5.1);
    }

    #[test]
    fn draw_fits_default_budget() {
        let config = OrreryConfig::standard();
        let scene = compose_at(0.0, config.particle_start());
        let mut vectors = VectorState::new(config.game_config().max_vector_vertices);
        scene.draw(&mut vectors);
        assert_eq!(vectors.dropped_shapes(), 0);
    }
}
