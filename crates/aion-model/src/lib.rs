//! AION Model - Felt time as a function of chronological age
//!
//! This crate implements the perception engine:
//! - Real-Time model: logarithmic compression of elapsed years
//! - Subjective-Time model: square-root accumulation of felt time
//! - Curve tabulation across the full age domain for plotting

pub mod curve;
pub mod perceive;

pub use curve::*;
pub use perceive::*;
