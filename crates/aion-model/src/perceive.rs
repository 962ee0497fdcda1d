//! Closed-form perception models
//!
//! Both models are calibrated so that the full lifespan maps onto itself:
//! a chronological 80 is perceived as 80 under either theory.
//!
//! - Real-Time: S1 = K1 * ln(age), with K1 = 80 / ln(80).
//!   Perceived time tracks elapsed real time, compressed logarithmically.
//! - Subjective-Time: S2 = sqrt(2 * K2 * age), with K2 = 80^2 / (2 * 80).
//!   Felt time accumulates at a rate proportional to its own magnitude
//!   (integrating the reciprocal), which collapses to sqrt(80 * age).

use aion_core::{Age, Perception};

/// Chronological lifespan the models are calibrated against, in years.
pub const LIFESPAN_YEARS: f64 = 80.0;

/// Compute both perceived ages for a chronological age.
///
/// Pure and deterministic; the same age always yields bit-identical
/// results. Outputs carry one decimal place. Monotonically non-decreasing
/// in age. The real-time model is exactly 0.0 at age 1 (ln(1) = 0);
/// everywhere else both values are strictly positive.
pub fn perceive(age: Age) -> Perception {
    let years = age.as_f64();

    // K1 pins ln(80) to a perceived 80.
    let k1 = LIFESPAN_YEARS / LIFESPAN_YEARS.ln();
    let real_time = round_tenth(k1 * years.ln());

    // 2 * K2 = 80, so the subjective branch is sqrt(80 * age).
    let subjective_time = round_tenth((LIFESPAN_YEARS * years).sqrt());

    Perception {
        real_time,
        subjective_time,
    }
}

/// Round to one decimal place, half away from zero.
#[inline]
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
