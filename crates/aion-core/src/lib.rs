//! AION Core - Fundamental types for the time perception model
//!
//! This crate defines the types shared across AION:
//! - Age domain (chronological years, 1..=80)
//! - Perception values and curve points
//! - Model selection
//! - Error types

pub mod age;
pub mod error;
pub mod model;
pub mod perception;

pub use age::*;
pub use error::*;
pub use model::*;
pub use perception::*;
