//! # Chairside Core
//!
//! Domain models, error taxonomy and the scheduling grid engine shared by the
//! store and HTTP crates. Nothing in here performs I/O.

pub mod errors;
pub mod grid;
pub mod models;
