//! Rate of perceived exertion (RPE) charts.
//!
//! [`percent_of_one_rm`] is an exact lookup keyed by `(rpe, reps)`.
//! [`rpe_for_percent`] scans per-rep ranges and is only tabulated for
//! 1, 2, 3, 5 and 10 repetitions. Both return `None` when the chart has no
//! data for the requested combination.

pub const MIN_RPE: f64 = 6.0;
pub const MAX_RPE: f64 = 10.0;
pub const MAX_CHART_REPS: u32 = 10;

/// %1RM for 1..=10 repetitions at a given RPE.
const RPE_CHART: [(f64, [u8; 10]); 9] = [
    (10.0, [100, 95, 92, 89, 86, 84, 81, 79, 76, 74]),
    (9.5, [98, 93, 90, 87, 84, 82, 79, 77, 74, 72]),
    (9.0, [96, 91, 88, 85, 82, 80, 77, 75, 72, 70]),
    (8.5, [94, 89, 86, 83, 80, 78, 75, 73, 70, 68]),
    (8.0, [92, 87, 84, 81, 78, 76, 73, 71, 68, 66]),
    (7.5, [90, 85, 82, 79, 76, 74, 71, 69, 66, 64]),
    (7.0, [88, 83, 80, 77, 74, 72, 69, 67, 64, 62]),
    (6.5, [86, 81, 78, 75, 72, 70, 67, 65, 62, 60]),
    (6.0, [84, 79, 76, 73, 70, 68, 65, 63, 60, 58]),
];

/// Inclusive %1RM band mapped to an RPE.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpeRange {
    pub min: f64,
    pub max: f64,
    pub rpe: f64,
}

const fn range(min: f64, max: f64, rpe: f64) -> RpeRange {
    RpeRange { min, max, rpe }
}

const RPE_RANGES: [(u32, [RpeRange; 9]); 5] = [
    (
        1,
        [
            range(100.0, 100.0, 10.0),
            range(97.0, 99.0, 9.5),
            range(94.0, 96.0, 9.0),
            range(91.0, 93.0, 8.5),
            range(88.0, 90.0, 8.0),
            range(85.0, 87.0, 7.5),
            range(82.0, 84.0, 7.0),
            range(79.0, 81.0, 6.5),
            range(76.0, 78.0, 6.0),
        ],
    ),
    (
        2,
        [
            range(95.0, 97.0, 10.0),
            range(92.0, 94.0, 9.5),
            range(89.0, 91.0, 9.0),
            range(86.0, 88.0, 8.5),
            range(83.0, 85.0, 8.0),
            range(80.0, 82.0, 7.5),
            range(77.0, 79.0, 7.0),
            range(74.0, 76.0, 6.5),
            range(71.0, 73.0, 6.0),
        ],
    ),
    (
        3,
        [
            range(91.0, 93.0, 10.0),
            range(88.0, 90.0, 9.5),
            range(85.0, 87.0, 9.0),
            range(82.0, 84.0, 8.5),
            range(79.0, 81.0, 8.0),
            range(76.0, 78.0, 7.5),
            range(73.0, 75.0, 7.0),
            range(70.0, 72.0, 6.5),
            range(67.0, 69.0, 6.0),
        ],
    ),
    (
        5,
        [
            range(85.0, 87.0, 10.0),
            range(82.0, 84.0, 9.5),
            range(79.0, 81.0, 9.0),
            range(76.0, 78.0, 8.5),
            range(73.0, 75.0, 8.0),
            range(70.0, 72.0, 7.5),
            range(67.0, 69.0, 7.0),
            range(64.0, 66.0, 6.5),
            range(61.0, 63.0, 6.0),
        ],
    ),
    (
        10,
        [
            range(73.0, 75.0, 10.0),
            range(70.0, 72.0, 9.5),
            range(67.0, 69.0, 9.0),
            range(64.0, 66.0, 8.5),
            range(61.0, 63.0, 8.0),
            range(58.0, 60.0, 7.5),
            range(55.0, 57.0, 7.0),
            range(52.0, 54.0, 6.5),
            range(49.0, 51.0, 6.0),
        ],
    ),
];

/// %1RM for the exact `(rpe, reps)` pair.
pub fn percent_of_one_rm(rpe: f64, reps: u32) -> Option<f64> {
    let (_, row) = RPE_CHART.iter().find(|(chart_rpe, _)| *chart_rpe == rpe)?;
    let index = usize::try_from(reps.checked_sub(1)?).ok()?;

    row.get(index).map(|percent| f64::from(*percent))
}

/// Ranges tabulated for `reps`, ordered from RPE 10 down.
pub fn ranges_for_reps(reps: u32) -> Option<&'static [RpeRange]> {
    RPE_RANGES
        .iter()
        .find(|(chart_reps, _)| *chart_reps == reps)
        .map(|(_, ranges)| ranges.as_slice())
}

/// RPE of the first range containing `percent`.
pub fn rpe_for_percent(percent: f64, reps: u32) -> Option<f64> {
    ranges_for_reps(reps)?
        .iter()
        .find(|range| percent >= range.min && percent <= range.max)
        .map(|range| range.rpe)
}

/// Estimated 1RM from a set performed at a known %1RM.
pub fn one_rm_from_percent(weight: f64, percent: f64) -> f64 {
    weight / (percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_round_trip_at_top() {
        assert_eq!(percent_of_one_rm(10.0, 1), Some(100.0));
        assert_eq!(rpe_for_percent(100.0, 1), Some(10.0));
    }

    #[test]
    fn test_chart_corners() {
        assert_eq!(percent_of_one_rm(10.0, 10), Some(74.0));
        assert_eq!(percent_of_one_rm(6.0, 1), Some(84.0));
        assert_eq!(percent_of_one_rm(6.0, 10), Some(58.0));
        assert_eq!(percent_of_one_rm(8.5, 5), Some(80.0));
    }

    #[test]
    fn test_chart_missing_pairs() {
        assert_eq!(percent_of_one_rm(7.25, 3), None);
        assert_eq!(percent_of_one_rm(5.5, 3), None);
        assert_eq!(percent_of_one_rm(8.0, 0), None);
        assert_eq!(percent_of_one_rm(8.0, 11), None);
    }

    #[test]
    fn test_chart_descends_with_reps_and_rpe() {
        for (_, row) in RPE_CHART {
            assert!(row.windows(2).all(|w| w[0] > w[1]));
        }
        for pair in RPE_CHART.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }

    #[test]
    fn test_rpe_for_percent_inclusive_bounds() {
        assert_eq!(rpe_for_percent(97.0, 1), Some(9.5));
        assert_eq!(rpe_for_percent(99.0, 1), Some(9.5));
        assert_eq!(rpe_for_percent(86.0, 5), Some(10.0));
        assert_eq!(rpe_for_percent(49.0, 10), Some(6.0));
    }

    #[test]
    fn test_rpe_for_percent_not_found() {
        // Gap between ranges
        assert_eq!(rpe_for_percent(99.5, 1), None);
        // Below the chart
        assert_eq!(rpe_for_percent(60.0, 1), None);
        // Reps without a table
        assert_eq!(rpe_for_percent(80.0, 4), None);
        assert_eq!(rpe_for_percent(80.0, 7), None);
    }

    #[test]
    fn test_one_rm_from_percent() {
        assert_eq!(one_rm_from_percent(80.0, 80.0), 100.0);
        assert_eq!(one_rm_from_percent(100.0, 100.0), 100.0);
    }
}
