//! Display names of the identifiers the estimator emits.
//!
//! The host owns the full string table behind [`Translator`]. The built in
//! names are only the fallback handed to it.

use crate::Locale;

/// Lookup of a localized string.
pub trait Translator {
    /// String for `key`, or `fallback` when the table has none.
    fn translate(&self, key: &str, fallback: &str) -> String;
}

/// Translator without a table, always answers the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate(&self, _key: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

/// `(key, en, zh)`
static NAMES: &[(&str, &str, &str)] = &[
    ("maximal_strength", "Maximal strength", "最大力量"),
    ("strength_speed", "Strength speed", "力量速度"),
    ("power", "Power", "爆發力"),
    ("speed_strength", "Speed strength", "速度力量"),
    ("speed", "Speed", "速度"),
    ("beyond_zones", "Beyond zones", "超出區間"),
    ("hr_zone_1", "Zone 1 - warm up", "區間 1 - 熱身"),
    ("hr_zone_2", "Zone 2 - fat burn", "區間 2 - 燃脂"),
    ("hr_zone_3", "Zone 3 - aerobic", "區間 3 - 有氧"),
    ("hr_zone_4", "Zone 4 - anaerobic", "區間 4 - 無氧"),
    ("hr_zone_5", "Zone 5 - VO2 max", "區間 5 - 最大攝氧"),
    ("one_rep_max", "1RM", "最大重量 (1RM)"),
    ("rpe_to_load", "RPE to load", "RPE 換算負重"),
    ("percent_to_rpe", "Percentage to RPE", "百分比換算 RPE"),
    ("velocity_load", "Velocity based training", "速度訓練"),
    ("vo2_max", "VO2 max", "最大攝氧量"),
    ("heart_rate_zones", "Heart rate zones", "心率區間"),
    ("macros_to_calories", "Macros to calories", "營養素換算熱量"),
    ("calories_to_macros", "Calories to macros", "熱量換算營養素"),
    ("food_nutrients", "Food nutrients", "食物營養"),
    ("estimated_max_heart_rate", "Estimated max heart rate", "預估最大心率"),
    ("base", "Base", "基礎階段"),
    ("intensity", "Intensity", "強度階段"),
    ("recovery", "Recovery", "恢復階段"),
    ("template_marathon_beginner", "Beginner marathon", "初學者馬拉松計劃"),
    ("template_marathon_intermediate", "Intermediate marathon", "中級馬拉松計劃"),
    ("template_triathlon_sprint", "Sprint triathlon", "短距離鐵人三項計劃"),
    ("template_triathlon_olympic", "Olympic triathlon", "奧運距離鐵人三項計劃"),
    ("template_strength_beginner", "Beginner muscle gain", "初學者增肌計劃"),
    ("template_strength_hypertrophy", "Hypertrophy", "肌肉肥大專項計劃"),
    ("template_fat_loss_beginner", "Beginner fat loss", "初學者減脂計劃"),
    ("template_fat_loss_hiit", "HIIT fat loss", "HIIT減脂強化計劃"),
    ("template_crossfit_beginner", "Cross training basics", "交叉訓練入門計劃"),
    ("template_crossfit_wod", "Cross training WOD challenge", "交叉訓練WOD挑戰計劃"),
    ("low", "Low", "低"),
    ("medium", "Medium", "中"),
    ("high", "High", "高"),
];

/// Built in name of `key` in `locale`. Unknown keys are their own name.
pub fn fallback_label(key: &str, locale: Locale) -> &str {
    NAMES
        .iter()
        .find(|(name, _, _)| *name == key)
        .map_or(key, |&(_, en, zh)| match locale {
            Locale::En => en,
            Locale::Zh => zh,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Table;

    impl Translator for Table {
        fn translate(&self, key: &str, fallback: &str) -> String {
            match key {
                "power" => "POWER".to_string(),
                _ => fallback.to_string(),
            }
        }
    }

    #[test]
    fn test_fallback_label() {
        assert_eq!(fallback_label("hr_zone_1", Locale::En), "Zone 1 - warm up");
        assert_eq!(fallback_label("speed", Locale::Zh), "速度");
        assert_eq!(fallback_label("no_such_key", Locale::En), "no_such_key");
        assert_eq!(
            fallback_label("template_crossfit_wod", Locale::Zh),
            "交叉訓練WOD挑戰計劃"
        );
    }

    #[test]
    fn test_translator_wins_over_fallback() {
        assert_eq!(Table.translate("power", fallback_label("power", Locale::En)), "POWER");
        assert_eq!(
            Untranslated.translate("power", fallback_label("power", Locale::En)),
            "Power"
        );
    }
}
