//! Curve tabulation for plotting

use aion_core::{Age, CurvePoint};

use crate::perceive;

/// Tabulate both models across the full age domain.
///
/// Returns one point per integer age from 1 to 80, in ascending order.
/// Deterministic, recomputed on every call; nothing is cached because the
/// whole curve costs 80 closed-form evaluations.
pub fn tabulate() -> Vec<CurvePoint> {
    Age::all()
        .map(|age| {
            let p = perceive(age);
            CurvePoint {
                age,
                real_time: p.real_time,
                subjective_time: p.subjective_time,
            }
        })
        .collect()
}
