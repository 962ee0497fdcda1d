//! Model selection
//!
//! AION carries two alternative theories of felt time. Both are pure
//! functions of age; this enum only selects which one a front end shows.

/// The two perception models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// Real-Time model: perceived age grows with the logarithm of
    /// chronological age. Each year feels shorter than the last.
    RealTime,

    /// Subjective-Time model: perceived age grows with the square root of
    /// chronological age. Felt time accumulates at a rate proportional to
    /// its own magnitude.
    SubjectiveTime,
}

impl Model {
    /// Get the model name
    pub fn name(&self) -> &'static str {
        match self {
            Model::RealTime => "Real-Time",
            Model::SubjectiveTime => "Subjective-Time",
        }
    }

    /// Get all models
    pub fn all() -> &'static [Model] {
        &[Model::RealTime, Model::SubjectiveTime]
    }

    /// The other model (for two-way selector toggles).
    pub fn toggled(&self) -> Model {
        match self {
            Model::RealTime => Model::SubjectiveTime,
            Model::SubjectiveTime => Model::RealTime,
        }
    }
}
