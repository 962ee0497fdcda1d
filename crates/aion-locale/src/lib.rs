//! AION Locale - Localized strings for presentation layers
//!
//! The computational core is locale-free; this crate carries the static
//! string catalog a front end needs, keyed by locale identifier:
//! - Locale parsing and selection
//! - Per-locale catalog lookup (English, Spanish)

pub mod catalog;
pub mod locale;

pub use catalog::*;
pub use locale::*;
