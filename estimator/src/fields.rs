use std::collections::BTreeMap;

use crate::ValidationError;

/// Raw text fields as typed into a form.
///
/// Blank values count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    values: BTreeMap<String, String>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Trimmed value, `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn optional_number(&self, name: &'static str) -> Result<Option<f64>, ValidationError> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };

        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(ValidationError::NotANumber {
                field: name,
                value: raw.to_string(),
            }),
        }
    }

    pub fn number(&self, name: &'static str) -> Result<f64, ValidationError> {
        self.optional_number(name)?
            .ok_or(ValidationError::Missing(name))
    }

    pub fn optional_count<T: std::str::FromStr>(
        &self,
        name: &'static str,
    ) -> Result<Option<T>, ValidationError> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };

        if raw.parse::<f64>().is_err() {
            return Err(ValidationError::NotANumber {
                field: name,
                value: raw.to_string(),
            });
        }

        raw.parse::<T>()
            .map(Some)
            .map_err(|_| ValidationError::NotAWholeNumber {
                field: name,
                value: raw.to_string(),
            })
    }

    pub fn count<T: std::str::FromStr>(&self, name: &'static str) -> Result<T, ValidationError> {
        self.optional_count(name)?
            .ok_or(ValidationError::Missing(name))
    }

    /// Value looked up in a closed set of identifiers.
    pub fn choice<T>(
        &self,
        name: &'static str,
        from_id: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, ValidationError> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };

        from_id(raw).map(Some).ok_or_else(|| ValidationError::Unknown {
            kind: name,
            value: raw.to_string(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}
