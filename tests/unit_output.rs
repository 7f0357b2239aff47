// Unit tests for the CSV writer: the fixed format contract and the
// write-then-parse round trip.

use std::collections::BTreeMap;
use std::fs;

use kiln::output::csv::write_scores;

#[test]
fn csv_has_header_crlf_rows_and_no_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.csv");

    let scores: BTreeMap<String, f64> =
        [("cat".to_string(), 0.5), ("the".to_string(), 0.25)].into();
    write_scores(&path, &scores).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Word,TF-IDF\r\ncat,0.5\r\nthe,0.25");
    assert!(!content.ends_with('\n'));
}

#[test]
fn empty_score_map_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    write_scores(&path, &BTreeMap::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "Word,TF-IDF");
}

#[test]
fn written_csv_round_trips_to_the_same_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.csv");

    let scores: BTreeMap<String, f64> = [
        ("cat".to_string(), 1.0 / 3.0 * (1.0 + 2.0_f64.ln())),
        ("sat".to_string(), 1.0 / 3.0),
        ("the".to_string(), 1.0 / 3.0),
    ]
    .into();
    write_scores(&path, &scores).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["Word", "TF-IDF"])
    );

    let mut parsed = BTreeMap::new();
    for record in reader.records() {
        let record = record.unwrap();
        let word = record[0].to_string();
        let score: f64 = record[1].parse().unwrap();
        parsed.insert(word, score);
    }

    assert_eq!(parsed.len(), scores.len());
    for (word, score) in &scores {
        assert!((parsed[word] - score).abs() < 1e-12);
    }
}

#[test]
fn write_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A path whose parent does not exist.
    let path = dir.path().join("missing").join("scores.csv");

    let result = write_scores(&path, &BTreeMap::new());
    assert!(result.is_err());
}
