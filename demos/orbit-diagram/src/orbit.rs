//! Kinematic circular orbits: pure math, no engine state.
//!
//! Uses f64 for the angle and world position (elapsed seconds grow without
//! bound); converts to f32 only at the final screen-coordinate step.

use std::f64::consts::TAU;

use glam::{DVec2, Vec2};

use crate::config::Body;

/// Orbital angle in radians after `elapsed` seconds, wrapped into `[0, 2π)`.
/// One full revolution every `body.period` seconds, starting at angle zero.
pub fn angle_of(body: &Body, elapsed: f64) -> f64 {
    (TAU * elapsed / body.period).rem_euclid(TAU)
}

/// Center-relative position after `elapsed` seconds.
pub fn position_of(body: &Body, elapsed: f64) -> DVec2 {
    DVec2::from_angle(angle_of(body, elapsed)) * body.orbit_radius
}

/// Screen position after `elapsed` seconds for an orbit centered on `center`.
pub fn screen_position_of(body: &Body, elapsed: f64, center: Vec2) -> Vec2 {
    center + position_of(body, elapsed).as_vec2()
}

/// Screen positions of every body, in list order.
pub fn screen_positions(bodies: &[Body], elapsed: f64, center: Vec2) -> Vec<Vec2> {
    bodies
        .iter()
        .map(|body| screen_position_of(body, elapsed, center))
        .collect()
}
