use crate::{DomainError, Macros, round_one_decimal};

/// Common foods with known macros per 100 g.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Food {
    ChickenBreastRaw,
    ChickenBreastCooked,
    Egg,
    LeanBeef,
    Salmon,
    Tuna,
    Tofu,
    CookedRice,
    WhiteBread,
    Oats,
    PeanutButter,
    WholeMilk,
    GreekYogurt,
    OliveOil,
    Almonds,
    Broccoli,
    Spinach,
    Banana,
    Apple,
    Avocado,
}

impl Food {
    pub const ALL: [Food; 20] = [
        Food::ChickenBreastRaw,
        Food::ChickenBreastCooked,
        Food::Egg,
        Food::LeanBeef,
        Food::Salmon,
        Food::Tuna,
        Food::Tofu,
        Food::CookedRice,
        Food::WhiteBread,
        Food::Oats,
        Food::PeanutButter,
        Food::WholeMilk,
        Food::GreekYogurt,
        Food::OliveOil,
        Food::Almonds,
        Food::Broccoli,
        Food::Spinach,
        Food::Banana,
        Food::Apple,
        Food::Avocado,
    ];

    pub const fn per_100g(self) -> Macros {
        match self {
            Food::ChickenBreastRaw => Macros::new(23.1, 0.0, 1.2),
            Food::ChickenBreastCooked => Macros::new(31.0, 0.0, 3.6),
            Food::Egg => Macros::new(12.6, 0.7, 9.5),
            Food::LeanBeef => Macros::new(26.2, 0.0, 11.0),
            Food::Salmon => Macros::new(20.0, 0.0, 13.0),
            Food::Tuna => Macros::new(23.6, 0.0, 0.9),
            Food::Tofu => Macros::new(8.0, 1.9, 4.0),
            Food::CookedRice => Macros::new(2.7, 28.0, 0.3),
            Food::WhiteBread => Macros::new(7.9, 49.0, 3.2),
            Food::Oats => Macros::new(16.9, 66.3, 6.9),
            Food::PeanutButter => Macros::new(25.0, 20.0, 50.0),
            Food::WholeMilk => Macros::new(3.2, 4.8, 3.9),
            Food::GreekYogurt => Macros::new(10.0, 4.0, 0.4),
            Food::OliveOil => Macros::new(0.0, 0.0, 100.0),
            Food::Almonds => Macros::new(21.0, 22.0, 49.0),
            Food::Broccoli => Macros::new(2.8, 5.0, 0.4),
            Food::Spinach => Macros::new(2.9, 3.6, 0.4),
            Food::Banana => Macros::new(1.1, 22.8, 0.3),
            Food::Apple => Macros::new(0.3, 13.8, 0.2),
            Food::Avocado => Macros::new(2.0, 8.5, 14.7),
        }
    }

    /// Stable identifier, also used as the localization key.
    pub const fn id(self) -> &'static str {
        match self {
            Food::ChickenBreastRaw => "chicken_breast_raw",
            Food::ChickenBreastCooked => "chicken_breast_cooked",
            Food::Egg => "egg",
            Food::LeanBeef => "lean_beef",
            Food::Salmon => "salmon",
            Food::Tuna => "tuna",
            Food::Tofu => "tofu",
            Food::CookedRice => "cooked_rice",
            Food::WhiteBread => "white_bread",
            Food::Oats => "oats",
            Food::PeanutButter => "peanut_butter",
            Food::WholeMilk => "whole_milk",
            Food::GreekYogurt => "greek_yogurt",
            Food::OliveOil => "olive_oil",
            Food::Almonds => "almonds",
            Food::Broccoli => "broccoli",
            Food::Spinach => "spinach",
            Food::Banana => "banana",
            Food::Apple => "apple",
            Food::Avocado => "avocado",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|this| this.id() == id)
    }
}

/// Nutrients of a portion, one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodNutrients {
    pub kcal: f64,
    pub macros: Macros,
}

pub fn food_nutrients(food: Food, grams: f64) -> Result<FoodNutrients, DomainError> {
    if !grams.is_finite() || grams <= 0.0 {
        return Err(DomainError::BadFoodWeight(grams));
    }

    let macros = food.per_100g().scale(grams / 100.0);

    Ok(FoodNutrients {
        kcal: round_one_decimal(macros.kcal()),
        macros: Macros {
            protein: round_one_decimal(macros.protein),
            carbs: round_one_decimal(macros.carbs),
            fat: round_one_decimal(macros.fat),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_nutrients_per_100g() {
        let nutrients = food_nutrients(Food::PeanutButter, 100.0).unwrap();

        // 25 x 4 + 20 x 4 + 50 x 9
        assert_eq!(nutrients.kcal, 630.0);
        assert_eq!(nutrients.macros, Macros::new(25.0, 20.0, 50.0));
    }

    #[test]
    fn test_food_nutrients_scaled() {
        let nutrients = food_nutrients(Food::OliveOil, 15.0).unwrap();

        assert_eq!(nutrients.macros.fat, 15.0);
        assert_eq!(nutrients.kcal, 135.0);
    }

    #[test]
    fn test_food_nutrients_rejects_bad_weight() {
        assert_eq!(
            food_nutrients(Food::Apple, 0.0),
            Err(DomainError::BadFoodWeight(0.0))
        );
        assert!(food_nutrients(Food::Apple, f64::NAN).is_err());
    }

    #[test]
    fn test_food_ids_round_trip() {
        for food in Food::ALL {
            assert_eq!(Food::from_id(food.id()), Some(food));
        }
    }
}
