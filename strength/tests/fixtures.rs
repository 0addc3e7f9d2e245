use std::path::{Path, PathBuf};

use csv::Reader;
use strength::{one_rm, rpe};

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OneRmCase {
    weight: f64,
    reps: u32,
    brzycki: f64,
    epley: f64,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RpeCase {
    rpe: f64,
    reps: u32,
    percent: f64,
}

fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn load<T: serde::de::DeserializeOwned>(name: &str) -> Vec<T> {
    Reader::from_path(data_file(name))
        .expect("fixture exists")
        .deserialize::<T>()
        .collect::<Result<Vec<_>, _>>()
        .expect("fixture is well formed")
}

#[test]
fn test_one_rm_matches_reference_values() {
    let cases = load::<OneRmCase>("one_rm.csv");
    assert!(!cases.is_empty());

    for case in cases {
        let brzycki = one_rm::brzycki(case.weight, case.reps).unwrap();
        let epley = one_rm::epley(case.weight, case.reps).unwrap();

        assert!((brzycki - case.brzycki).abs() < 1e-4, "{case:?}");
        assert!((epley - case.epley).abs() < 1e-4, "{case:?}");
    }
}

#[test]
fn test_rpe_chart_matches_reference_values() {
    let cases = load::<RpeCase>("rpe_chart.csv");
    assert!(!cases.is_empty());

    for case in cases {
        assert_eq!(
            rpe::percent_of_one_rm(case.rpe, case.reps),
            Some(case.percent),
            "{case:?}"
        );
    }
}
