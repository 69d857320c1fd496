// src/core/mod.rs

pub mod date;
pub mod money;
pub mod text;
