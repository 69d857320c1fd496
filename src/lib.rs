// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod assemble;
pub mod dataset;
pub mod file;
pub mod output;
pub mod parse;
pub mod record;
pub mod runner;
pub mod segment;
