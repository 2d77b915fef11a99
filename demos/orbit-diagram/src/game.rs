//! Orbit Diagram: four planets on circular orbits around a sun, plus a
//! particle steered with the arrow keys.
//!
//! Per frame: held keys → clock → orbit positions → particle step → draw.

use anyhow::Result;
use orrery_engine::{
    EngineContext, Game, GameConfig, HeldKeys, InputQueue, SimulationClock,
};

use crate::config::OrreryConfig;
use crate::orbit;
use crate::particle::{Bounds, Particle};
use crate::scene::FrameScene;

pub struct OrbitDiagram {
    config: OrreryConfig,
    bounds: Bounds,
    clock: SimulationClock,
    keys: HeldKeys,
    particle: Particle,
}

impl OrbitDiagram {
    /// The shipped diagram. Fails if the built-in constants are inconsistent.
    pub fn new() -> Result<Self> {
        Self::with_config(OrreryConfig::standard())
    }

    pub fn with_config(config: OrreryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bounds: config.bounds(),
            particle: Particle::new(config.particle_start()),
            clock: SimulationClock::new(),
            keys: HeldKeys::new(),
            config,
        })
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    /// Seconds of simulated time so far.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }
}

impl Game for OrbitDiagram {
    fn config(&self) -> GameConfig {
        self.config.game_config()
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!(
            "orbit-diagram: {} bodies, particle at ({}, {})",
            self.config.bodies.len(),
            self.particle.position.x,
            self.particle.position.y
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        self.keys.apply_all(input);
        let elapsed = self.clock.advance(dt);

        let center = self.config.center();
        let body_positions = orbit::screen_positions(&self.config.bodies, elapsed, center);

        self.particle
            .update(self.keys.snapshot(), dt, &self.bounds, &self.config.particle);

        FrameScene::compose(&self.config, &body_positions, self.particle.position)
            .draw(&mut ctx.vectors);
    }
}
