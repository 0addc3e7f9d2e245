//! # Nutrition
//!
//! Conversions between macronutrient grams and energy.
//!
//! Energy per gram:
//!
//! - protein - 4 kcal
//! - carbohydrates - 4 kcal
//! - fat - 9 kcal
//!
//! Calories are split into macros with a fixed 30/50/20 protein/carbs/fat
//! heuristic.

mod food;

pub use self::food::*;

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Share of energy given to protein, carbs and fat.
pub const MACRO_SPLIT: MacroSplit = MacroSplit {
    protein: 0.3,
    carbs: 0.5,
    fat: 0.2,
};

/// Input outside the valid domain of a nutrition formula.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{name} must be a non-negative finite number: {value}")]
    BadAmount { name: &'static str, value: f64 },

    #[error("energy must be a positive finite number: {0}")]
    BadEnergy(f64),

    #[error("food weight must be a positive finite number: {0}")]
    BadFoodWeight(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Macronutrients in grams.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Energy without validation, for values already known to be sane.
    pub fn kcal(&self) -> f64 {
        self.protein * PROTEIN_KCAL_PER_GRAM
            + self.carbs * CARBS_KCAL_PER_GRAM
            + self.fat * FAT_KCAL_PER_GRAM
    }

    fn scale(&self, ratio: f64) -> Self {
        Self::new(self.protein * ratio, self.carbs * ratio, self.fat * ratio)
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn check_amount(name: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::BadAmount { name, value });
    }

    Ok(())
}

pub fn macros_to_calories(protein: f64, carbs: f64, fat: f64) -> Result<f64, DomainError> {
    check_amount("protein", protein)?;
    check_amount("carbs", carbs)?;
    check_amount("fat", fat)?;

    Ok(Macros::new(protein, carbs, fat).kcal())
}

/// Grams of each macro for `kcal` using [`MACRO_SPLIT`], one decimal place.
pub fn calories_to_macros(kcal: f64) -> Result<Macros, DomainError> {
    if !kcal.is_finite() || kcal <= 0.0 {
        return Err(DomainError::BadEnergy(kcal));
    }

    Ok(Macros {
        protein: round_one_decimal(kcal * MACRO_SPLIT.protein / PROTEIN_KCAL_PER_GRAM),
        carbs: round_one_decimal(kcal * MACRO_SPLIT.carbs / CARBS_KCAL_PER_GRAM),
        fat: round_one_decimal(kcal * MACRO_SPLIT.fat / FAT_KCAL_PER_GRAM),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_to_calories() {
        assert_eq!(macros_to_calories(30.0, 50.0, 20.0), Ok(500.0));
        assert_eq!(macros_to_calories(0.0, 0.0, 0.0), Ok(0.0));
        assert_eq!(macros_to_calories(0.0, 0.0, 10.0), Ok(90.0));
    }

    #[test]
    fn test_macros_to_calories_rejects_negative() {
        assert_eq!(
            macros_to_calories(-1.0, 50.0, 20.0),
            Err(DomainError::BadAmount {
                name: "protein",
                value: -1.0
            })
        );
        assert!(macros_to_calories(1.0, f64::NAN, 20.0).is_err());
    }

    #[test]
    fn test_calories_to_macros() {
        assert_eq!(
            calories_to_macros(2000.0),
            Ok(Macros {
                protein: 150.0,
                carbs: 250.0,
                fat: 44.4,
            })
        );
    }

    #[test]
    fn test_calories_to_macros_rejects_non_positive() {
        assert_eq!(calories_to_macros(0.0), Err(DomainError::BadEnergy(0.0)));
        assert!(calories_to_macros(-100.0).is_err());
        assert!(calories_to_macros(f64::INFINITY).is_err());
    }
}
