//! Perception values
//!
//! Outputs of the perception models. Values carry one decimal place of
//! precision; rounding happens where they are computed, never here.

use std::fmt;

use crate::{Age, Model};

/// Perceived age under both models, in years rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perception {
    /// Real-Time model output (logarithmic).
    pub real_time: f64,

    /// Subjective-Time model output (square-root).
    pub subjective_time: f64,
}

impl Perception {
    /// The value for a selected model.
    #[inline]
    pub fn for_model(&self, model: Model) -> f64 {
        match model {
            Model::RealTime => self.real_time,
            Model::SubjectiveTime => self.subjective_time,
        }
    }
}

impl fmt::Display for Perception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "real-time: {:.1}y, subjective: {:.1}y",
            self.real_time, self.subjective_time
        )
    }
}

/// One sample of both models at an integer age, used for plotting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub age: Age,
    pub real_time: f64,
    pub subjective_time: f64,
}

impl CurvePoint {
    /// The plotted value for a selected model.
    #[inline]
    pub fn for_model(&self, model: Model) -> f64 {
        match model {
            Model::RealTime => self.real_time,
            Model::SubjectiveTime => self.subjective_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_model_selects_component() {
        let p = Perception {
            real_time: 58.8,
            subjective_time: 44.7,
        };
        assert_eq!(p.for_model(Model::RealTime), 58.8);
        assert_eq!(p.for_model(Model::SubjectiveTime), 44.7);
    }

    #[test]
    fn test_display_one_decimal() {
        let p = Perception {
            real_time: 0.0,
            subjective_time: 8.9,
        };
        assert_eq!(p.to_string(), "real-time: 0.0y, subjective: 8.9y");
    }
}
