use training_plan::PlanError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Input that is missing, not numeric or outside what a calculator accepts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),

    #[error("field `{field}` is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("field `{field}` is not a whole number: {value:?}")]
    NotAWholeNumber { field: &'static str, value: String },

    #[error("field `{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("field `{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("field `{field}` must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown {kind} `{value}`")]
    Unknown { kind: &'static str, value: String },

    #[error("a health record needs a weight or a body fat value")]
    EmptyHealthRecord,
}

/// A formula rejected its numbers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Strength(#[from] strength::DomainError),

    #[error(transparent)]
    HeartRate(#[from] heart_rate::DomainError),

    #[error(transparent)]
    Nutrition(#[from] nutrition::DomainError),

    #[error(transparent)]
    Velocity(#[from] velocity::DomainError),
}

impl From<strength::DomainError> for EstimationError {
    fn from(err: strength::DomainError) -> Self {
        EstimationError::Domain(err.into())
    }
}

impl From<heart_rate::DomainError> for EstimationError {
    fn from(err: heart_rate::DomainError) -> Self {
        EstimationError::Domain(err.into())
    }
}

impl From<nutrition::DomainError> for EstimationError {
    fn from(err: nutrition::DomainError) -> Self {
        EstimationError::Domain(err.into())
    }
}

impl From<velocity::DomainError> for EstimationError {
    fn from(err: velocity::DomainError) -> Self {
        EstimationError::Domain(err.into())
    }
}

/// Reading or writing the key-value store failed.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read `{key}`")]
    Read {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to write `{key}`")]
    Write {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("`{key}` does not hold valid JSON")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
