use heart_rate::MaxHeartRateFormula;

use crate::store::HISTORY_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    #[default]
    Zh,
}

impl Locale {
    /// Locale of a language tag such as `en-US`. Unsupported languages fall
    /// back to the default.
    pub fn from_tag(tag: &str) -> Self {
        match tag.split(['-', '_']).next() {
            Some(language) if language.eq_ignore_ascii_case("en") => Locale::En,
            _ => Locale::Zh,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    pub locale: Locale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorConfig {
    pub display: DisplayConfig,
    /// Formula for the estimated maximum heart rate calculator
    pub max_heart_rate_formula: MaxHeartRateFormula,
    /// Store key of the estimation history
    pub history_key: &'static str,
}

impl EstimatorConfig {
    pub const fn new() -> Self {
        Self {
            display: DisplayConfig { locale: Locale::Zh },
            max_heart_rate_formula: MaxHeartRateFormula::Fox,
            history_key: HISTORY_KEY,
        }
    }

    pub const fn set_locale(mut self, locale: Locale) -> Self {
        self.display.locale = locale;
        self
    }

    pub const fn set_max_heart_rate_formula(mut self, formula: MaxHeartRateFormula) -> Self {
        self.max_heart_rate_formula = formula;
        self
    }

    pub const fn set_history_key(mut self, history_key: &'static str) -> Self {
        self.history_key = history_key;
        self
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("EN"), Locale::En);
        assert_eq!(Locale::from_tag("zh-TW"), Locale::Zh);
        assert_eq!(Locale::from_tag("fr_FR"), Locale::Zh);
        assert_eq!(Locale::from_tag(""), Locale::Zh);
    }

    #[test]
    fn test_config_setters() {
        let config = EstimatorConfig::new()
            .set_locale(Locale::En)
            .set_max_heart_rate_formula(MaxHeartRateFormula::Gellish)
            .set_history_key("history_v2");

        assert_eq!(config.display.locale, Locale::En);
        assert_eq!(config.max_heart_rate_formula, MaxHeartRateFormula::Gellish);
        assert_eq!(config.history_key, "history_v2");
        assert_eq!(EstimatorConfig::default().history_key, HISTORY_KEY);
    }
}
