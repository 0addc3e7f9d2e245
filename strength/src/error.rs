/// Input outside the valid domain of a strength formula.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("weight must be a positive finite number: {0}")]
    BadWeight(f64),

    #[error("repetitions must be at least 1: {0}")]
    BadReps(u32),

    #[error("repetitions must be below 37: {0}")]
    TooManyReps(u32),

    #[error("formula denominator is not positive for {0} repetitions")]
    NonPositiveDenominator(u32),

    #[error("body weight is required for bodyweight exercises")]
    BodyWeightRequired,
}
