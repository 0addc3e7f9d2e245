use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::ValidationError;

/// Body measurements as entered for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthEntry {
    pub date: Date,
    /// Body weight in kg
    pub weight: Option<f64>,
    /// Body fat in percent
    pub body_fat: Option<f64>,
    pub note: String,
}

impl HealthEntry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.weight.is_none() && self.body_fat.is_none() {
            return Err(ValidationError::EmptyHealthRecord);
        }

        for (field, value) in [("weight", self.weight), ("body_fat", self.body_fat)] {
            match value {
                Some(value) if !value.is_finite() => {
                    return Err(ValidationError::NotFinite { field, value });
                }
                Some(value) if value <= 0.0 => {
                    return Err(ValidationError::NotPositive { field, value });
                }
                _ => {}
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HealthRecord {
    pub id: Uuid,
    pub date: Date,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub note: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl HealthRecord {
    pub fn new(entry: HealthEntry, created_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: entry.date,
            weight: entry.weight,
            body_fat: entry.body_fat,
            note: entry.note,
            created_at,
        }
    }

    /// Apply an edit. Measurements left empty keep their recorded value.
    pub fn amend(&mut self, entry: HealthEntry) {
        self.date = entry.date;
        self.weight = entry.weight.or(self.weight);
        self.body_fat = entry.body_fat.or(self.body_fat);
        self.note = entry.note;
    }
}

/// Latest date first.
pub(crate) fn sort_by_date(records: &mut [HealthRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    fn entry(weight: Option<f64>, body_fat: Option<f64>) -> HealthEntry {
        HealthEntry {
            date: date!(2024 - 03 - 01),
            weight,
            body_fat,
            note: String::new(),
        }
    }

    #[test]
    fn test_entry_needs_a_measurement() {
        assert_eq!(
            entry(None, None).validate(),
            Err(ValidationError::EmptyHealthRecord)
        );
        assert_eq!(entry(Some(72.5), None).validate(), Ok(()));
        assert_eq!(entry(None, Some(18.0)).validate(), Ok(()));
    }

    #[test]
    fn test_entry_rejects_bad_values() {
        assert_eq!(
            entry(Some(-1.0), None).validate(),
            Err(ValidationError::NotPositive {
                field: "weight",
                value: -1.0
            })
        );
        assert!(entry(Some(70.0), Some(f64::INFINITY)).validate().is_err());
    }

    #[test]
    fn test_amend_keeps_missing_measurements() {
        let mut record = HealthRecord::new(
            entry(Some(72.5), Some(18.0)),
            datetime!(2024-03-01 08:00 UTC),
        );

        record.amend(HealthEntry {
            date: date!(2024 - 03 - 02),
            weight: Some(72.0),
            body_fat: None,
            note: "after holiday".to_string(),
        });

        assert_eq!(record.date, date!(2024 - 03 - 02));
        assert_eq!(record.weight, Some(72.0));
        assert_eq!(record.body_fat, Some(18.0));
        assert_eq!(record.note, "after holiday");
    }

    #[test]
    fn test_sort_by_date() {
        let created_at = datetime!(2024-03-01 08:00 UTC);
        let mut records: Vec<_> = [date!(2024 - 01 - 10), date!(2024 - 03 - 01), date!(2024 - 02 - 05)]
            .into_iter()
            .map(|date| {
                HealthRecord::new(
                    HealthEntry {
                        date,
                        ..entry(Some(70.0), None)
                    },
                    created_at,
                )
            })
            .collect();

        sort_by_date(&mut records);

        let dates: Vec<_> = records.iter().map(|record| record.date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2024 - 03 - 01),
                date!(2024 - 02 - 05),
                date!(2024 - 01 - 10)
            ]
        );
    }
}
