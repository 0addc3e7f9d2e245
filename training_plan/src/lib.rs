//! # Training plan
//!
//! Skeleton of a multi-week plan: weeks of empty workout days, optionally
//! grouped into 4 week meso-cycles rotating base, intensity and recovery
//! blocks. [`PlanTemplate`] lists ready-made requests per goal.

mod templates;

use time::OffsetDateTime;

pub use self::templates::{COPY_SUFFIX, PlanTemplate};

/// Weeks in one meso-cycle.
pub const MESO_CYCLE_WEEKS: u32 = 4;
pub const MAX_WEEKLY_WORKOUTS: u8 = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("plan name is empty")]
    EmptyName,

    #[error("plan must last at least one week")]
    NoDuration,

    #[error("workouts per week must be 1-7, got {0}")]
    BadFrequency(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Goal {
    Marathon,
    Triathlon,
    Strength,
    FatLoss,
    Crossfit,
    #[default]
    Custom,
}

impl Goal {
    pub const ALL: [Goal; 6] = [
        Goal::Marathon,
        Goal::Triathlon,
        Goal::Strength,
        Goal::FatLoss,
        Goal::Crossfit,
        Goal::Custom,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Goal::Marathon => "marathon",
            Goal::Triathlon => "triathlon",
            Goal::Strength => "strength",
            Goal::FatLoss => "fat_loss",
            Goal::Crossfit => "crossfit",
            Goal::Custom => "custom",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|this| this.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum IntensityLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CycleKind {
    Base,
    Intensity,
    Recovery,
}

impl CycleKind {
    /// Kind of the `index`-th meso-cycle.
    pub const fn rotation(index: usize) -> Self {
        match index % 3 {
            0 => CycleKind::Base,
            1 => CycleKind::Intensity,
            _ => CycleKind::Recovery,
        }
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    pub name: String,
    pub goal: Goal,
    pub duration_weeks: u32,
    /// Workouts per week
    pub frequency: u8,
    pub intensity: IntensityLevel,
    pub use_cycles: bool,
    pub notes: String,
}

impl PlanRequest {
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.name.trim().is_empty() {
            return Err(PlanError::EmptyName);
        }

        if self.duration_weeks == 0 {
            return Err(PlanError::NoDuration);
        }

        if self.frequency == 0 || self.frequency > MAX_WEEKLY_WORKOUTS {
            return Err(PlanError::BadFrequency(self.frequency));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workout {
    pub id: String,
    /// Day of the week, from 1
    pub day: u8,
    pub completed: bool,
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Week {
    pub id: String,
    /// Week of the plan, from 1
    pub number: u32,
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MesoCycle {
    pub id: String,
    pub kind: CycleKind,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Cycles {
    Periodized { meso_cycles: Vec<MesoCycle> },
    Simple { weeks: Vec<Week> },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingPlan {
    pub id: String,
    pub name: String,
    pub goal: Goal,
    pub duration_weeks: u32,
    pub frequency: u8,
    pub intensity: IntensityLevel,
    pub use_cycles: bool,
    pub notes: String,
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub created_at: OffsetDateTime,
    pub cycles: Cycles,
}

fn workouts(prefix: &str, frequency: u8) -> Vec<Workout> {
    (0..frequency)
        .map(|k| Workout {
            id: format!("workout_{prefix}_{k}"),
            day: k + 1,
            completed: false,
            exercises: Vec::new(),
        })
        .collect()
}

impl TrainingPlan {
    /// Lay out the plan requested at `created_at`. The plan id is derived
    /// from the creation time in milliseconds.
    pub fn create(request: PlanRequest, created_at: OffsetDateTime) -> Result<Self, PlanError> {
        request.validate()?;

        let id = format!("plan_{}", created_at.unix_timestamp_nanos() / 1_000_000);
        let PlanRequest {
            name,
            goal,
            duration_weeks,
            frequency,
            intensity,
            use_cycles,
            notes,
        } = request;

        let cycles = if use_cycles {
            let count = duration_weeks.div_ceil(MESO_CYCLE_WEEKS);
            let meso_cycles = (0..count)
                .map(|i| {
                    let first_week = i * MESO_CYCLE_WEEKS;
                    let length = MESO_CYCLE_WEEKS.min(duration_weeks - first_week);

                    MesoCycle {
                        id: format!("meso_{id}_{i}"),
                        kind: CycleKind::rotation(i as usize),
                        weeks: (0..length)
                            .map(|j| Week {
                                id: format!("week_{id}_{i}_{j}"),
                                number: first_week + j + 1,
                                workouts: workouts(&format!("{id}_{i}_{j}"), frequency),
                            })
                            .collect(),
                    }
                })
                .collect();

            Cycles::Periodized { meso_cycles }
        } else {
            let weeks = (0..duration_weeks)
                .map(|i| Week {
                    id: format!("week_{id}_{i}"),
                    number: i + 1,
                    workouts: workouts(&format!("{id}_{i}"), frequency),
                })
                .collect();

            Cycles::Simple { weeks }
        };

        Ok(Self {
            id,
            name,
            goal,
            duration_weeks,
            frequency,
            intensity,
            use_cycles,
            notes,
            created_at,
            cycles,
        })
    }

    /// All weeks in order, whatever the layout.
    pub fn weeks(&self) -> Box<dyn Iterator<Item = &Week> + '_> {
        match &self.cycles {
            Cycles::Periodized { meso_cycles } => {
                Box::new(meso_cycles.iter().flat_map(|cycle| cycle.weeks.iter()))
            }
            Cycles::Simple { weeks } => Box::new(weeks.iter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn request(duration_weeks: u32, frequency: u8, use_cycles: bool) -> PlanRequest {
        PlanRequest {
            name: "Spring block".to_string(),
            goal: Goal::Strength,
            duration_weeks,
            frequency,
            intensity: IntensityLevel::Intermediate,
            use_cycles,
            notes: String::new(),
        }
    }

    #[test]
    fn test_periodized_plan() {
        let created_at = datetime!(2024-03-01 10:00 UTC);
        let plan = TrainingPlan::create(request(10, 3, true), created_at).unwrap();

        assert_eq!(plan.id, format!("plan_{}", created_at.unix_timestamp() * 1000));

        let Cycles::Periodized { meso_cycles } = &plan.cycles else {
            panic!("expected a periodized plan");
        };
        let kinds: Vec<_> = meso_cycles.iter().map(|cycle| cycle.kind).collect();
        assert_eq!(
            kinds,
            vec![CycleKind::Base, CycleKind::Intensity, CycleKind::Recovery]
        );
        let lengths: Vec<_> = meso_cycles.iter().map(|cycle| cycle.weeks.len()).collect();
        assert_eq!(lengths, vec![4, 4, 2]);

        let numbers: Vec<_> = plan.weeks().map(|week| week.number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
        assert!(plan.weeks().all(|week| week.workouts.len() == 3));
    }

    #[test]
    fn test_simple_plan() {
        let plan =
            TrainingPlan::create(request(6, 7, false), datetime!(2024-03-01 10:00 UTC)).unwrap();

        let Cycles::Simple { weeks } = &plan.cycles else {
            panic!("expected a simple plan");
        };
        assert_eq!(weeks.len(), 6);

        let days: Vec<_> = weeks[0].workouts.iter().map(|w| w.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(weeks[0].workouts.iter().all(|w| !w.completed && w.exercises.is_empty()));
    }

    #[test]
    fn test_plan_validation() {
        let created_at = datetime!(2024-03-01 10:00 UTC);

        let mut blank = request(4, 3, true);
        blank.name = "   ".to_string();
        assert_eq!(TrainingPlan::create(blank, created_at), Err(PlanError::EmptyName));

        assert_eq!(
            TrainingPlan::create(request(0, 3, true), created_at),
            Err(PlanError::NoDuration)
        );
        assert_eq!(
            TrainingPlan::create(request(4, 0, true), created_at),
            Err(PlanError::BadFrequency(0))
        );
        assert_eq!(
            TrainingPlan::create(request(4, 8, true), created_at),
            Err(PlanError::BadFrequency(8))
        );
    }
}
