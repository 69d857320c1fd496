// src/parse/mod.rs

pub mod due_dates;
pub mod fields;
pub mod reconcile;
pub mod tax_history;
