use wasm_bindgen::prelude::*;

pub mod config;
pub mod game;
pub mod orbit;
pub mod particle;
pub mod scene;
use game::OrbitDiagram;

orrery_web::export_game!(OrbitDiagram, "orbit-diagram", vectors);
