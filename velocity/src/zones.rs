//! Velocity zones.
//!
//! Every exercise has five zones in ascending load order, from the slowest
//! (maximal strength) to the fastest (speed). Bounds are mean concentric
//! velocity in m/s, inclusive on both ends. Adjacent zones share a boundary
//! and the slower zone wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VbtExercise {
    Squat,
    Bench,
    Deadlift,
    FrontSquat,
    OverheadSquat,
    Clean,
    Snatch,
    InclineBench,
    OverheadPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ExerciseCategory {
    Basic,
    SquatVariations,
    OlympicLifts,
    UpperBody,
}

impl VbtExercise {
    pub const ALL: [VbtExercise; 9] = [
        VbtExercise::Squat,
        VbtExercise::Bench,
        VbtExercise::Deadlift,
        VbtExercise::FrontSquat,
        VbtExercise::OverheadSquat,
        VbtExercise::Clean,
        VbtExercise::Snatch,
        VbtExercise::InclineBench,
        VbtExercise::OverheadPress,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            VbtExercise::Squat => "squat",
            VbtExercise::Bench => "bench",
            VbtExercise::Deadlift => "deadlift",
            VbtExercise::FrontSquat => "front_squat",
            VbtExercise::OverheadSquat => "overhead_squat",
            VbtExercise::Clean => "clean",
            VbtExercise::Snatch => "snatch",
            VbtExercise::InclineBench => "incline_bench",
            VbtExercise::OverheadPress => "overhead_press",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|this| this.id() == id)
    }

    pub const fn category(self) -> ExerciseCategory {
        match self {
            VbtExercise::Squat | VbtExercise::Bench | VbtExercise::Deadlift => {
                ExerciseCategory::Basic
            }
            VbtExercise::FrontSquat | VbtExercise::OverheadSquat => {
                ExerciseCategory::SquatVariations
            }
            VbtExercise::Clean | VbtExercise::Snatch => ExerciseCategory::OlympicLifts,
            VbtExercise::InclineBench | VbtExercise::OverheadPress => ExerciseCategory::UpperBody,
        }
    }

    /// Zone table of the exercise, slowest zone first.
    pub fn zones(self) -> &'static [ZoneBounds; 5] {
        match self {
            VbtExercise::Squat => &SQUAT,
            VbtExercise::Bench => &BENCH,
            VbtExercise::Deadlift => &DEADLIFT,
            VbtExercise::FrontSquat => &FRONT_SQUAT,
            VbtExercise::OverheadSquat => &OVERHEAD_SQUAT,
            VbtExercise::Clean => &CLEAN,
            VbtExercise::Snatch => &SNATCH,
            VbtExercise::InclineBench => &INCLINE_BENCH,
            VbtExercise::OverheadPress => &OVERHEAD_PRESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VelocityZone {
    MaximalStrength,
    StrengthSpeed,
    Power,
    SpeedStrength,
    Speed,
}

/// Share of 1RM a zone is trained at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPercent {
    /// Between two percentages, inclusive
    Between(u8, u8),
    /// Anything under the percentage
    Below(u8),
}

impl LoadPercent {
    /// Single representative percentage. Open ranges sit 5 points under
    /// their bound.
    pub const fn midpoint(self) -> f64 {
        match self {
            LoadPercent::Between(low, high) => (low as f64 + high as f64) / 2.0,
            LoadPercent::Below(bound) => bound as f64 - 5.0,
        }
    }
}

impl VelocityZone {
    pub const ALL: [VelocityZone; 5] = [
        VelocityZone::MaximalStrength,
        VelocityZone::StrengthSpeed,
        VelocityZone::Power,
        VelocityZone::SpeedStrength,
        VelocityZone::Speed,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            VelocityZone::MaximalStrength => "maximal_strength",
            VelocityZone::StrengthSpeed => "strength_speed",
            VelocityZone::Power => "power",
            VelocityZone::SpeedStrength => "speed_strength",
            VelocityZone::Speed => "speed",
        }
    }

    /// Display form of [`VelocityZone::load_percent`].
    pub const fn load_percent_label(self) -> &'static str {
        match self {
            VelocityZone::MaximalStrength => "90-100%",
            VelocityZone::StrengthSpeed => "80-90%",
            VelocityZone::Power => "70-80%",
            VelocityZone::SpeedStrength => "55-70%",
            VelocityZone::Speed => "<55%",
        }
    }

    pub const fn load_percent(self) -> LoadPercent {
        match self {
            VelocityZone::MaximalStrength => LoadPercent::Between(90, 100),
            VelocityZone::StrengthSpeed => LoadPercent::Between(80, 90),
            VelocityZone::Power => LoadPercent::Between(70, 80),
            VelocityZone::SpeedStrength => LoadPercent::Between(55, 70),
            VelocityZone::Speed => LoadPercent::Below(55),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBounds {
    pub zone: VelocityZone,
    /// Minimum velocity in m/s
    pub min: f64,
    /// Maximum velocity in m/s
    pub max: f64,
}

impl ZoneBounds {
    pub fn contains(&self, velocity: f64) -> bool {
        velocity >= self.min && velocity <= self.max
    }
}

const fn band(bounds: &[f64; 6], i: usize) -> ZoneBounds {
    ZoneBounds {
        zone: VelocityZone::ALL[i],
        min: bounds[i],
        max: bounds[i + 1],
    }
}

const fn table(bounds: [f64; 6]) -> [ZoneBounds; 5] {
    [
        band(&bounds, 0),
        band(&bounds, 1),
        band(&bounds, 2),
        band(&bounds, 3),
        band(&bounds, 4),
    ]
}

static SQUAT: [ZoneBounds; 5] = table([0.0, 0.35, 0.5, 0.75, 1.0, 1.5]);
static BENCH: [ZoneBounds; 5] = table([0.0, 0.15, 0.3, 0.5, 0.75, 1.2]);
static DEADLIFT: [ZoneBounds; 5] = table([0.0, 0.25, 0.4, 0.65, 0.9, 1.3]);
static FRONT_SQUAT: [ZoneBounds; 5] = table([0.0, 0.32, 0.48, 0.7, 0.95, 1.45]);
static OVERHEAD_SQUAT: [ZoneBounds; 5] = table([0.0, 0.3, 0.45, 0.65, 0.9, 1.4]);
static CLEAN: [ZoneBounds; 5] = table([0.0, 0.9, 1.3, 1.6, 1.9, 2.5]);
static SNATCH: [ZoneBounds; 5] = table([0.0, 1.0, 1.4, 1.7, 2.0, 2.6]);
static INCLINE_BENCH: [ZoneBounds; 5] = table([0.0, 0.12, 0.26, 0.45, 0.7, 1.15]);
static OVERHEAD_PRESS: [ZoneBounds; 5] = table([0.0, 0.13, 0.28, 0.47, 0.72, 1.1]);

/// Result of classifying a velocity. Falling outside every zone is a valid
/// answer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VelocityClass {
    Within(VelocityZone),
    BeyondZones,
}

impl VelocityClass {
    pub const fn zone(self) -> Option<VelocityZone> {
        match self {
            VelocityClass::Within(zone) => Some(zone),
            VelocityClass::BeyondZones => None,
        }
    }

    /// Localization key.
    pub const fn id(self) -> &'static str {
        match self {
            VelocityClass::Within(zone) => zone.id(),
            VelocityClass::BeyondZones => "beyond_zones",
        }
    }
}

/// First zone of `exercise` containing `velocity`.
///
/// Negative, non-finite and faster-than-table velocities are
/// [`VelocityClass::BeyondZones`].
pub fn classify_velocity(velocity: f64, exercise: VbtExercise) -> VelocityClass {
    exercise
        .zones()
        .iter()
        .find(|bounds| bounds.contains(velocity))
        .map_or(VelocityClass::BeyondZones, |bounds| {
            VelocityClass::Within(bounds.zone)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_velocity_squat() {
        assert_eq!(
            classify_velocity(0.95, VbtExercise::Squat),
            VelocityClass::Within(VelocityZone::SpeedStrength)
        );
        assert_eq!(
            classify_velocity(0.2, VbtExercise::Squat),
            VelocityClass::Within(VelocityZone::MaximalStrength)
        );
        assert_eq!(
            classify_velocity(1.5, VbtExercise::Squat),
            VelocityClass::Within(VelocityZone::Speed)
        );
    }

    #[test]
    fn test_classify_velocity_outside_table() {
        assert_eq!(
            classify_velocity(-0.1, VbtExercise::Squat),
            VelocityClass::BeyondZones
        );
        assert_eq!(
            classify_velocity(2.0, VbtExercise::Squat),
            VelocityClass::BeyondZones
        );
        assert_eq!(
            classify_velocity(f64::NAN, VbtExercise::Squat),
            VelocityClass::BeyondZones
        );
    }

    #[test]
    fn test_shared_boundary_goes_to_slower_zone() {
        assert_eq!(
            classify_velocity(0.35, VbtExercise::Squat),
            VelocityClass::Within(VelocityZone::MaximalStrength)
        );
        assert_eq!(
            classify_velocity(1.3, VbtExercise::Clean),
            VelocityClass::Within(VelocityZone::StrengthSpeed)
        );
    }

    #[test]
    fn test_zone_tables_are_contiguous() {
        for exercise in VbtExercise::ALL {
            let zones = exercise.zones();

            assert_eq!(zones[0].min, 0.0, "{exercise:?}");
            for pair in zones.windows(2) {
                assert_eq!(pair[0].max, pair[1].min, "{exercise:?}");
                assert!(pair[0].zone < pair[1].zone);
            }
        }
    }

    #[test]
    fn test_load_percent() {
        assert_eq!(VelocityZone::MaximalStrength.load_percent().midpoint(), 95.0);
        assert_eq!(VelocityZone::SpeedStrength.load_percent().midpoint(), 62.5);
        assert_eq!(VelocityZone::Speed.load_percent().midpoint(), 50.0);
        assert_eq!(VelocityZone::Speed.load_percent_label(), "<55%");
    }

    #[test]
    fn test_exercise_ids_round_trip() {
        for exercise in VbtExercise::ALL {
            assert_eq!(VbtExercise::from_id(exercise.id()), Some(exercise));
        }
        assert_eq!(VbtExercise::from_id("curl"), None);
    }
}
