// src/model/mod.rs

pub mod cost;
pub mod swarm;
