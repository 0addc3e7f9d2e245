//! # Heart rate
//!
//! Zones follow the Karvonen (heart rate reserve) method:
//!
//! ```notrust
//! THR = [(MHR - RHR) x %Intensity] + RHR
//! ```
//!
//! Where:
//!
//! - THR - target heart rate
//! - MHR - maximum heart rate
//! - RHR - resting heart rate
//!
//! Target zones:
//!
//! - Zone 1, warm up - `0.5-0.6`
//! - Zone 2, fat burn - `0.6-0.7`
//! - Zone 3, aerobic - `0.7-0.8`
//! - Zone 4, anaerobic - `0.8-0.9`
//! - Zone 5, VO2 max - `0.9-1.0`
//!
//! VO2Max is estimated with the Uth-Sørensen-Overgaard-Pedersen ratio
//! `15.3 x MHR / RHR`.

/// Input outside the valid domain of a heart rate formula.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("heart rate must be a positive finite number: {0}")]
    BadHeartRate(f64),

    #[error("maximum heart rate {max} must be above resting heart rate {resting}")]
    NoReserve { max: f64, resting: f64 },

    #[error("age {0} gives no usable maximum heart rate")]
    BadAge(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HeartRateZone {
    WarmUp,
    FatBurn,
    Aerobic,
    Anaerobic,
    VO2,
}

impl HeartRateZone {
    /// Zones in ascending intensity.
    pub const ALL: [HeartRateZone; 5] = [
        HeartRateZone::WarmUp,
        HeartRateZone::FatBurn,
        HeartRateZone::Aerobic,
        HeartRateZone::Anaerobic,
        HeartRateZone::VO2,
    ];

    /// Lower and upper share of the heart rate reserve.
    pub const fn intensity_bounds(self) -> (f64, f64) {
        match self {
            HeartRateZone::WarmUp => (0.5, 0.6),
            HeartRateZone::FatBurn => (0.6, 0.7),
            HeartRateZone::Aerobic => (0.7, 0.8),
            HeartRateZone::Anaerobic => (0.8, 0.9),
            HeartRateZone::VO2 => (0.9, 1.0),
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            HeartRateZone::WarmUp => 1,
            HeartRateZone::FatBurn => 2,
            HeartRateZone::Aerobic => 3,
            HeartRateZone::Anaerobic => 4,
            HeartRateZone::VO2 => 5,
        }
    }

    /// Stable identifier, also used as the localization key.
    pub const fn id(self) -> &'static str {
        match self {
            HeartRateZone::WarmUp => "hr_zone_1",
            HeartRateZone::FatBurn => "hr_zone_2",
            HeartRateZone::Aerobic => "hr_zone_3",
            HeartRateZone::Anaerobic => "hr_zone_4",
            HeartRateZone::VO2 => "hr_zone_5",
        }
    }

    /// Zone of a measured `rate`. `None` means the rate is below zone 1,
    /// i.e. resting.
    pub fn for_rate(rate: f64, mhr: f64, rhr: f64) -> Result<Option<Self>, DomainError> {
        check_reserve(mhr, rhr)?;

        let zone = Self::ALL.into_iter().rev().find(|zone| {
            let (low, _) = zone.intensity_bounds();
            rate >= thr(mhr, rhr, low).floor()
        });

        Ok(zone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneBand {
    pub zone: HeartRateZone,
    /// Lower bound in beats per minute
    pub min: u16,
    /// Upper bound in beats per minute
    pub max: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MaxHeartRateFormula {
    /// `220 - age`
    #[default]
    Fox,
    /// `207 - 0.7 x age`
    Gellish,
}

fn check_rate(rate: f64) -> Result<(), DomainError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(DomainError::BadHeartRate(rate));
    }

    Ok(())
}

fn check_reserve(mhr: f64, rhr: f64) -> Result<(), DomainError> {
    check_rate(mhr)?;
    check_rate(rhr)?;

    if mhr <= rhr {
        return Err(DomainError::NoReserve {
            max: mhr,
            resting: rhr,
        });
    }

    Ok(())
}

/// Calculate MHR for age.
///
/// # Params
/// - `age` - person age in years
pub fn mhr(age: u8, formula: MaxHeartRateFormula) -> Result<f64, DomainError> {
    if age == 0 {
        return Err(DomainError::BadAge(age));
    }

    let mhr = match formula {
        MaxHeartRateFormula::Fox => 220.0 - age as f64,
        MaxHeartRateFormula::Gellish => 207.0 - (age as f64 * 0.7),
    };

    if mhr <= 0.0 {
        return Err(DomainError::BadAge(age));
    }

    Ok(mhr)
}

/// Target heart rate at `intensity` share of the reserve.
#[inline]
pub fn thr(mhr: f64, rhr: f64, intensity: f64) -> f64 {
    ((mhr - rhr) * intensity) + rhr
}

/// VO2Max in ml/kg/min, rounded to one decimal place.
pub fn vo2_max(mhr: f64, rhr: f64) -> Result<f64, DomainError> {
    check_rate(mhr)?;
    check_rate(rhr)?;

    Ok((15.3 * (mhr / rhr) * 10.0).round() / 10.0)
}

/// Five Karvonen zones. Every bound is rounded from its own percentage, so
/// a zone's max is not derived from the previous zone's rounded value.
pub fn reserve_zones(mhr: f64, rhr: f64) -> Result<Vec<ZoneBand>, DomainError> {
    check_reserve(mhr, rhr)?;

    let bpm = |intensity: f64| thr(mhr, rhr, intensity).round() as u16;

    Ok(HeartRateZone::ALL
        .into_iter()
        .map(|zone| {
            let (low, high) = zone.intensity_bounds();

            ZoneBand {
                zone,
                min: bpm(low),
                max: bpm(high),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_zones_190_60() {
        let zones = reserve_zones(190.0, 60.0).unwrap();

        assert_eq!(zones.len(), 5);
        // 60 + 130 x 0.5 = 125, 60 + 130 x 0.6 = 138
        assert_eq!((zones[0].min, zones[0].max), (125, 138));
        assert_eq!((zones[1].min, zones[1].max), (138, 151));
        assert_eq!((zones[2].min, zones[2].max), (151, 164));
        assert_eq!((zones[3].min, zones[3].max), (164, 177));
        assert_eq!((zones[4].min, zones[4].max), (177, 190));
        assert_eq!(zones[4].zone, HeartRateZone::VO2);
    }

    #[test]
    fn test_reserve_zones_round_each_bound_independently() {
        // Reserve 125: 0.5 -> 125.5, 0.6 -> 138, 0.7 -> 150.5
        let zones = reserve_zones(188.0, 63.0).unwrap();

        assert_eq!(zones[0].min, 126);
        assert_eq!(zones[0].max, 138);
        assert_eq!(zones[1].min, 138);
        assert_eq!(zones[2].min, 151);
        assert_eq!(zones[4].max, 188);
    }

    #[test]
    fn test_reserve_zones_need_reserve() {
        assert_eq!(
            reserve_zones(60.0, 60.0),
            Err(DomainError::NoReserve {
                max: 60.0,
                resting: 60.0
            })
        );
        assert!(reserve_zones(190.0, 0.0).is_err());
        assert!(reserve_zones(f64::NAN, 60.0).is_err());
    }

    #[test]
    fn test_vo2_max() {
        // 15.3 x 180 / 60 = 45.9
        assert_eq!(vo2_max(180.0, 60.0), Ok(45.9));
        assert_eq!(vo2_max(200.0, 50.0), Ok(61.2));
        assert_eq!(vo2_max(190.0, 0.0), Err(DomainError::BadHeartRate(0.0)));
    }

    #[test]
    fn test_mhr_formulas() {
        assert_eq!(mhr(30, MaxHeartRateFormula::Fox), Ok(190.0));
        let gellish = mhr(30, MaxHeartRateFormula::Gellish).unwrap();
        assert!((gellish - 186.0).abs() < 1e-9);
        assert_eq!(mhr(0, MaxHeartRateFormula::Fox), Err(DomainError::BadAge(0)));
        assert_eq!(mhr(250, MaxHeartRateFormula::Fox), Err(DomainError::BadAge(250)));
    }

    #[test]
    fn test_zone_for_rate() {
        let (mhr, rhr) = (190.0, 60.0);

        assert_eq!(HeartRateZone::for_rate(59.0, mhr, rhr), Ok(None));
        assert_eq!(HeartRateZone::for_rate(124.0, mhr, rhr), Ok(None));
        assert_eq!(
            HeartRateZone::for_rate(125.0, mhr, rhr),
            Ok(Some(HeartRateZone::WarmUp))
        );
        assert_eq!(
            HeartRateZone::for_rate(160.0, mhr, rhr),
            Ok(Some(HeartRateZone::Aerobic))
        );
        assert_eq!(
            HeartRateZone::for_rate(200.0, mhr, rhr),
            Ok(Some(HeartRateZone::VO2))
        );
    }

    #[test]
    fn test_zone_ids_are_ordered() {
        let numbers = HeartRateZone::ALL.map(HeartRateZone::number);
        assert_eq!(numbers, [1, 2, 3, 4, 5]);
        assert_eq!(HeartRateZone::WarmUp.id(), "hr_zone_1");
    }
}
