use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use climate_core::{AveragePolicy, BlockRange, SurveyConfig};
use climate_survey::{run_survey_file, SurveyError};

fn config_for(path: &Path, policy: AveragePolicy) -> SurveyConfig {
    SurveyConfig {
        input_path: path.to_path_buf(),
        delimiter: "---".to_string(),
        block_range: BlockRange::new(5, Some(15)),
        label_index: 0,
        average_policy: policy,
        log_level: "info".to_string(),
    }
}

/// Five preamble blocks, ten question blocks, and a trailing footer.
fn survey_dump() -> String {
    let questions = [
        ("Supported", "Often\nAlways\nOften\nOften\nSometimes\nNever"),
        ("Bored", "Never\nSometimes\nOften"),
        ("Stressed", "Sometimes\nOften\nSometimes\nOften"),
        ("Tired", "Sometimes\nAlways\nSometimes"),
        ("Happy", "Always\nAlways\nOften"),
        ("Safe", "Always\nAlways\nAlways"),
        ("Lonely", "Never\nNever\nSometimes"),
        ("Curious", "Often\nI dunno\nAlways"),
        ("Anxious", "Sometimes\nSometimes"),
        ("Excluded", "Never\nNever"),
    ];

    let mut dump = String::from("Timestamp\n3/12/2017 18:50:08\n");
    for preamble in ["Grade\n9", "School\nNorth", "Consent\nYes", "Notes\n"] {
        write!(dump, "---\n{preamble}\n").unwrap();
    }
    for (feeling, answers) in questions {
        write!(
            dump,
            "---\nHow do you feel when you're at school? [{feeling}]\n{answers}\n"
        )
        .unwrap();
    }
    dump.push_str("---\nThanks for taking part [End]\n");
    dump
}

fn write_dump(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn ranks_the_question_blocks_of_a_dump() {
    let file = write_dump(&survey_dump());
    let report = run_survey_file(&config_for(file.path(), AveragePolicy::Propagate)).unwrap();

    assert_eq!(report.selected_blocks, 10);
    assert_eq!(report.skipped_blocks, 0);
    assert_eq!(report.rankings.len(), 10);

    assert_eq!(report.rankings[0].feeling, "Safe");
    assert!((report.rankings[0].average_weight - 1.0).abs() < 1e-12);

    // "I dunno" is two unmapped tokens, so Curious is undefined and last.
    let last = report.rankings.last().unwrap();
    assert_eq!(last.feeling, "Curious");
    assert!(last.average_weight.is_nan());
    assert_eq!(last.unmapped, 2);
    assert!(!report.rankings.iter().any(|r| r.feeling == "End"));

    let defined: Vec<f64> = report
        .rankings
        .iter()
        .map(|r| r.average_weight)
        .filter(|w| !w.is_nan())
        .collect();
    assert!(defined.windows(2).all(|w| w[0] >= w[1]), "{defined:?}");
}

#[test]
fn exclude_policy_scores_partially_answered_blocks() {
    let file = write_dump(&survey_dump());
    let report = run_survey_file(&config_for(file.path(), AveragePolicy::Exclude)).unwrap();

    let curious = report
        .rankings
        .iter()
        .find(|r| r.feeling == "Curious")
        .unwrap();
    assert!((curious.average_weight - 5.0 / 6.0).abs() < 1e-12);
    assert_eq!(report.rankings[1].feeling, "Happy");
}

#[test]
fn header_blocks_in_range_are_skipped_not_fatal() {
    let file = write_dump(&survey_dump());
    let mut config = config_for(file.path(), AveragePolicy::Propagate);
    config.block_range = BlockRange::all();

    let report = run_survey_file(&config).unwrap();
    assert_eq!(report.selected_blocks, 16);
    assert_eq!(report.skipped_blocks, 5);
    assert!(report.rankings.iter().any(|r| r.feeling == "End"));
}

#[test]
fn negative_block_bounds_count_back_from_the_footer() {
    let file = write_dump(&survey_dump());
    let mut config = config_for(file.path(), AveragePolicy::Propagate);
    config.block_range = BlockRange::new(5, Some(-1));

    let report = run_survey_file(&config).unwrap();
    assert_eq!(report.selected_blocks, 10);
    assert!(!report.rankings.iter().any(|r| r.feeling == "End"));

    config.block_range = BlockRange::new(-3, None);
    let report = run_survey_file(&config).unwrap();
    assert_eq!(report.selected_blocks, 3);
    let mut feelings: Vec<&str> = report.rankings.iter().map(|r| r.feeling.as_str()).collect();
    feelings.sort_unstable();
    assert_eq!(feelings, vec!["Anxious", "End", "Excluded"]);
}

#[test]
fn crlf_dumps_score_like_lf_dumps() {
    let lf = write_dump(&survey_dump());
    let crlf = write_dump(&survey_dump().replace('\n', "\r\n"));

    let a = run_survey_file(&config_for(lf.path(), AveragePolicy::Propagate)).unwrap();
    let b = run_survey_file(&config_for(crlf.path(), AveragePolicy::Propagate)).unwrap();
    let names = |r: &climate_survey::SurveyReport| -> Vec<String> {
        r.rankings.iter().map(|x| x.feeling.clone()).collect()
    };
    assert_eq!(names(&a), names(&b));
}

#[test]
fn missing_dump_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("EmotionalClimateData.dat");
    let err = run_survey_file(&config_for(&path, AveragePolicy::Propagate)).unwrap_err();
    assert!(matches!(err, SurveyError::NotFound { .. }), "got: {err:?}");
}

#[test]
fn report_serializes_undefined_average_as_null() {
    let file = write_dump(&survey_dump());
    let report = run_survey_file(&config_for(file.path(), AveragePolicy::Propagate)).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["average_policy"], "propagate");
    assert_eq!(json["rankings"][0]["feeling"], "Safe");
    assert!(json["rankings"][9]["average_weight"].is_null());
}
