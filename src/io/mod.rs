// src/io/mod.rs

pub mod reporting;
