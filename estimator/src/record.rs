use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Calculator, EstimatedMetric, MeasurementInput, StorageError};

/// A saved computation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub input: MeasurementInput,
    pub metric: EstimatedMetric,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub notes: String,
}

impl HistoryRecord {
    pub fn new(
        input: MeasurementInput,
        metric: EstimatedMetric,
        notes: String,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            metric,
            timestamp,
            notes,
        }
    }
}

/// Result of computing and saving.
#[derive(Debug)]
pub enum Saved {
    /// The metric was computed. When the store failed the record was not
    /// persisted and `warning` says why.
    Recorded {
        record: HistoryRecord,
        warning: Option<StorageError>,
    },
    /// Nothing to save, the lookup table has no value for the input.
    Unclassified { calculator: Calculator },
}

impl Saved {
    pub fn record(&self) -> Option<&HistoryRecord> {
        match self {
            Saved::Recorded { record, .. } => Some(record),
            Saved::Unclassified { .. } => None,
        }
    }

    pub fn warning(&self) -> Option<&StorageError> {
        match self {
            Saved::Recorded { warning, .. } => warning.as_ref(),
            Saved::Unclassified { .. } => None,
        }
    }
}
