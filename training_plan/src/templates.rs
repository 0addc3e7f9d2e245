//! Ready-made plans a user can start from.

use crate::{Goal, IntensityLevel, PlanRequest};

/// Appended to the template name of a plan created from it.
pub const COPY_SUFFIX: &str = " (copy)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PlanTemplate {
    MarathonBeginner,
    MarathonIntermediate,
    TriathlonSprint,
    TriathlonOlympic,
    StrengthBeginner,
    StrengthHypertrophy,
    FatLossBeginner,
    FatLossHiit,
    CrossfitBeginner,
    CrossfitWod,
}

impl PlanTemplate {
    pub const ALL: [PlanTemplate; 10] = [
        PlanTemplate::MarathonBeginner,
        PlanTemplate::MarathonIntermediate,
        PlanTemplate::TriathlonSprint,
        PlanTemplate::TriathlonOlympic,
        PlanTemplate::StrengthBeginner,
        PlanTemplate::StrengthHypertrophy,
        PlanTemplate::FatLossBeginner,
        PlanTemplate::FatLossHiit,
        PlanTemplate::CrossfitBeginner,
        PlanTemplate::CrossfitWod,
    ];

    /// Stable identifier, also used as the localization key.
    pub const fn id(self) -> &'static str {
        match self {
            PlanTemplate::MarathonBeginner => "template_marathon_beginner",
            PlanTemplate::MarathonIntermediate => "template_marathon_intermediate",
            PlanTemplate::TriathlonSprint => "template_triathlon_sprint",
            PlanTemplate::TriathlonOlympic => "template_triathlon_olympic",
            PlanTemplate::StrengthBeginner => "template_strength_beginner",
            PlanTemplate::StrengthHypertrophy => "template_strength_hypertrophy",
            PlanTemplate::FatLossBeginner => "template_fat_loss_beginner",
            PlanTemplate::FatLossHiit => "template_fat_loss_hiit",
            PlanTemplate::CrossfitBeginner => "template_crossfit_beginner",
            PlanTemplate::CrossfitWod => "template_crossfit_wod",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|this| this.id() == id)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PlanTemplate::MarathonBeginner => "Beginner marathon",
            PlanTemplate::MarathonIntermediate => "Intermediate marathon",
            PlanTemplate::TriathlonSprint => "Sprint triathlon",
            PlanTemplate::TriathlonOlympic => "Olympic triathlon",
            PlanTemplate::StrengthBeginner => "Beginner muscle gain",
            PlanTemplate::StrengthHypertrophy => "Hypertrophy",
            PlanTemplate::FatLossBeginner => "Beginner fat loss",
            PlanTemplate::FatLossHiit => "HIIT fat loss",
            PlanTemplate::CrossfitBeginner => "Cross training basics",
            PlanTemplate::CrossfitWod => "Cross training WOD challenge",
        }
    }

    pub const fn goal(self) -> Goal {
        match self {
            PlanTemplate::MarathonBeginner | PlanTemplate::MarathonIntermediate => Goal::Marathon,
            PlanTemplate::TriathlonSprint | PlanTemplate::TriathlonOlympic => Goal::Triathlon,
            PlanTemplate::StrengthBeginner | PlanTemplate::StrengthHypertrophy => Goal::Strength,
            PlanTemplate::FatLossBeginner | PlanTemplate::FatLossHiit => Goal::FatLoss,
            PlanTemplate::CrossfitBeginner | PlanTemplate::CrossfitWod => Goal::Crossfit,
        }
    }

    /// `(duration_weeks, frequency, intensity, use_cycles)`
    const fn layout(self) -> (u32, u8, IntensityLevel, bool) {
        use IntensityLevel::*;

        match self {
            PlanTemplate::MarathonBeginner => (16, 4, Beginner, true),
            PlanTemplate::MarathonIntermediate => (12, 5, Intermediate, true),
            PlanTemplate::TriathlonSprint => (12, 6, Beginner, true),
            PlanTemplate::TriathlonOlympic => (16, 7, Intermediate, true),
            PlanTemplate::StrengthBeginner => (12, 3, Beginner, false),
            PlanTemplate::StrengthHypertrophy => (8, 5, Intermediate, true),
            PlanTemplate::FatLossBeginner => (8, 4, Beginner, false),
            PlanTemplate::FatLossHiit => (6, 5, Intermediate, true),
            PlanTemplate::CrossfitBeginner => (10, 4, Beginner, false),
            PlanTemplate::CrossfitWod => (8, 5, Advanced, true),
        }
    }

    pub const fn duration_weeks(self) -> u32 {
        self.layout().0
    }

    /// Workouts per week
    pub const fn frequency(self) -> u8 {
        self.layout().1
    }

    pub const fn intensity(self) -> IntensityLevel {
        self.layout().2
    }

    pub const fn use_cycles(self) -> bool {
        self.layout().3
    }

    /// Highlights shown with the template.
    pub const fn features(self) -> &'static [&'static str] {
        match self {
            PlanTemplate::MarathonBeginner => &[
                "4 workouts a week",
                "Long run builds up to 32 km",
                "Intervals and long runs",
                "Full taper",
            ],
            PlanTemplate::MarathonIntermediate => &[
                "5 workouts a week",
                "Speed work and tempo runs",
                "Marathon pace work in the build phase",
                "Shorter taper",
            ],
            PlanTemplate::TriathlonSprint => &[
                "About 2 swims, 2 rides and 2 runs a week",
                "Transition practice",
                "Gradual volume increase",
                "Race strategy",
            ],
            PlanTemplate::TriathlonOlympic => &[
                "7 workouts a week over all three sports",
                "Brick days",
                "Transition efficiency",
                "Race simulation",
            ],
            PlanTemplate::StrengthBeginner => &[
                "Full body sessions",
                "Basic compound lifts",
                "Gradual load increase",
                "Ample recovery",
            ],
            PlanTemplate::StrengthHypertrophy => &[
                "Push / pull / legs split",
                "High volume",
                "Moderate rest periods",
                "Progressive overload",
            ],
            PlanTemplate::FatLossBeginner => &[
                "Full body resistance training",
                "HIIT mixed with steady cardio",
                "Gradual intensity increase",
                "Easy to follow",
            ],
            PlanTemplate::FatLossHiit => &[
                "HIIT focus",
                "Full body resistance training",
                "Short, efficient sessions",
                "Suits a tight schedule",
            ],
            PlanTemplate::CrossfitBeginner => &[
                "Basic movement technique",
                "Gradual intensity increase",
                "Recovery days every week",
                "Skill and conditioning work",
            ],
            PlanTemplate::CrossfitWod => &[
                "Varied WODs",
                "Strength and conditioning",
                "High intensity",
                "Technique under load",
            ],
        }
    }

    /// Templates for `goal`, all of them when `None`.
    pub fn for_goal(goal: Option<Goal>) -> impl Iterator<Item = PlanTemplate> {
        Self::ALL
            .into_iter()
            .filter(move |template| goal.is_none_or(|goal| template.goal() == goal))
    }

    /// Request for a new plan copied from the template.
    pub fn request(self) -> PlanRequest {
        PlanRequest {
            name: format!("{}{COPY_SUFFIX}", self.name()),
            goal: self.goal(),
            duration_weeks: self.duration_weeks(),
            frequency: self.frequency(),
            intensity: self.intensity(),
            use_cycles: self.use_cycles(),
            notes: String::new(),
        }
    }
}

impl From<PlanTemplate> for PlanRequest {
    fn from(template: PlanTemplate) -> Self {
        template.request()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::TrainingPlan;

    #[test]
    fn test_filter_by_goal() {
        let marathon: Vec<_> = PlanTemplate::for_goal(Some(Goal::Marathon)).collect();
        assert_eq!(
            marathon,
            vec![PlanTemplate::MarathonBeginner, PlanTemplate::MarathonIntermediate]
        );

        assert_eq!(PlanTemplate::for_goal(None).count(), PlanTemplate::ALL.len());
        assert_eq!(PlanTemplate::for_goal(Some(Goal::Custom)).count(), 0);
    }

    #[test]
    fn test_request_from_template() {
        let request = PlanRequest::from(PlanTemplate::CrossfitWod);

        assert_eq!(
            request,
            PlanRequest {
                name: "Cross training WOD challenge (copy)".to_string(),
                goal: Goal::Crossfit,
                duration_weeks: 8,
                frequency: 5,
                intensity: IntensityLevel::Advanced,
                use_cycles: true,
                notes: String::new(),
            }
        );
    }

    #[test]
    fn test_every_template_makes_a_valid_plan() {
        let created_at = datetime!(2024-03-01 10:00 UTC);

        for template in PlanTemplate::ALL {
            let plan = TrainingPlan::create(template.request(), created_at).unwrap();

            assert_eq!(plan.weeks().count(), template.duration_weeks() as usize);
            assert_eq!(plan.use_cycles, template.use_cycles());
            assert_eq!(template.features().len(), 4);
        }
    }

    #[test]
    fn test_template_ids_round_trip() {
        for template in PlanTemplate::ALL {
            assert_eq!(PlanTemplate::from_id(template.id()), Some(template));
        }
    }
}
