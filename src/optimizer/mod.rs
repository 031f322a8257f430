// src/optimizer/mod.rs

pub mod config;
pub mod engine;
