//! Age domain for the perception model
//!
//! Chronological age is a whole number of years lived. The models are
//! calibrated over [1, 80]: the logarithmic branch is undefined at zero,
//! and both models are pinned to a fixed point at 80. Every untrusted
//! input passes through this type before reaching the model.

use crate::{AionError, AionResult};

/// Chronological age in whole years.
/// INVARIANT: the value always lies in [Age::MIN, Age::MAX].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u8);

impl Age {
    /// Youngest supported age.
    pub const MIN: Age = Age(1);

    /// Oldest supported age. Both models perceive it as exactly 80.
    pub const MAX: Age = Age(80);

    /// Number of integer ages in the supported domain.
    pub const SPAN: usize = 80;

    /// Validate a raw year count, rejecting anything outside [1, 80].
    ///
    /// This is the fail-fast path. Interactive callers that prefer to
    /// tolerate wild input should go through [`Age::saturating_from`]
    /// instead.
    pub fn new(years: u8) -> AionResult<Self> {
        if years < Age::MIN.0 || years > Age::MAX.0 {
            return Err(AionError::AgeOutOfRange {
                years: years as i64,
                min: Age::MIN.0,
                max: Age::MAX.0,
            });
        }
        Ok(Age(years))
    }

    /// Clamp an arbitrary year count into the supported domain.
    ///
    /// This is the single clamping point for user-supplied input; the
    /// model itself performs no bounds checks.
    #[inline]
    pub fn saturating_from(years: i64) -> Self {
        Age(years.clamp(Age::MIN.0 as i64, Age::MAX.0 as i64) as u8)
    }

    /// Step forward, saturating at [`Age::MAX`].
    #[inline]
    pub fn saturating_add(self, years: u8) -> Self {
        Age::saturating_from(self.0 as i64 + years as i64)
    }

    /// Step backward, saturating at [`Age::MIN`].
    #[inline]
    pub fn saturating_sub(self, years: u8) -> Self {
        Age::saturating_from(self.0 as i64 - years as i64)
    }

    #[inline]
    pub fn years(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Iterate the full domain in ascending order (1 through 80).
    pub fn all() -> impl Iterator<Item = Age> {
        (Age::MIN.0..=Age::MAX.0).map(Age)
    }
}

impl std::fmt::Debug for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Age({}y)", self.0)
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_accepts_domain_bounds() {
        assert_eq!(Age::new(1).unwrap(), Age::MIN);
        assert_eq!(Age::new(80).unwrap(), Age::MAX);
        assert_eq!(Age::new(25).unwrap().years(), 25);
    }

    #[test]
    fn test_new_rejects_out_of_domain() {
        assert!(Age::new(0).is_err());
        assert!(Age::new(81).is_err());
        assert!(Age::new(255).is_err());
    }

    #[test]
    fn test_saturating_from_clamps() {
        assert_eq!(Age::saturating_from(0), Age::MIN);
        assert_eq!(Age::saturating_from(-40), Age::MIN);
        assert_eq!(Age::saturating_from(999), Age::MAX);
        assert_eq!(Age::saturating_from(42).years(), 42);
    }

    #[test]
    fn test_stepping_saturates() {
        assert_eq!(Age::MAX.saturating_add(1), Age::MAX);
        assert_eq!(Age::MIN.saturating_sub(1), Age::MIN);
        assert_eq!(Age::MIN.saturating_add(4).years(), 5);
        assert_eq!(Age::MAX.saturating_sub(10).years(), 70);
    }

    #[test]
    fn test_all_is_ascending_and_complete() {
        let ages: Vec<Age> = Age::all().collect();
        assert_eq!(ages.len(), Age::SPAN);
        assert_eq!(ages[0], Age::MIN);
        assert_eq!(ages[79], Age::MAX);
        for (i, age) in ages.iter().enumerate() {
            assert_eq!(age.years() as usize, i + 1);
        }
    }

    proptest! {
        #[test]
        fn prop_saturating_from_stays_in_domain(years in i64::MIN..i64::MAX) {
            let age = Age::saturating_from(years);
            prop_assert!(age >= Age::MIN && age <= Age::MAX);
        }
    }
}
