use std::fs;
use std::path::PathBuf;

use recon_ingest::{IngestError, load_email_map, load_score_map};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("recon_ingest_loaders_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_file(path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn email_map_parses_two_column_lines() {
    let contents = "alice@example.com u1\nbob@example.com\tu2\nshort-line\n";
    let path = temp_file("user_emails.txt", contents);
    let map = load_email_map(&path).expect("load map");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("u1").map(String::as_str), Some("alice@example.com"));
    assert_eq!(map.get("u2").map(String::as_str), Some("bob@example.com"));
    cleanup(&path);
}

#[test]
fn email_map_keeps_last_mapping_for_repeated_id() {
    let contents = "old@example.com u1\nnew@example.com u1\n";
    let path = temp_file("user_emails.txt", contents);
    let map = load_email_map(&path).expect("load map");
    assert_eq!(map.get("u1").map(String::as_str), Some("new@example.com"));
    cleanup(&path);
}

#[test]
fn email_map_without_usable_lines_is_an_error() {
    let path = temp_file("user_emails.txt", "just-one-token\n\n");
    let error = load_email_map(&path).unwrap_err();
    assert!(matches!(error, IngestError::EmptyEmailMap { .. }));
    cleanup(&path);
}

#[test]
fn score_map_reads_alternating_pairs() {
    let contents = r#"{"leaderBoard": ["u1", "500", "u2", 900, "u3"]}"#;
    let path = temp_file("lb1.txt", contents);
    let scores = load_score_map(&path).expect("load scores");

    // trailing "u3" has no score and is dropped; numeric 900 is stringified
    assert_eq!(scores.len(), 2);
    assert_eq!(scores.get("u1").map(String::as_str), Some("500"));
    assert_eq!(scores.get("u2").map(String::as_str), Some("900"));
    cleanup(&path);
}

#[test]
fn score_map_without_array_key_is_empty() {
    let path = temp_file("lb1.txt", r#"{"somethingElse": true}"#);
    let scores = load_score_map(&path).expect("load scores");
    assert!(scores.is_empty());
    cleanup(&path);
}

#[test]
fn score_map_with_non_array_key_is_empty() {
    let path = temp_file("lb1.txt", r#"{"leaderBoard": "nope"}"#);
    let scores = load_score_map(&path).expect("load scores");
    assert!(scores.is_empty());
    cleanup(&path);
}

#[test]
fn unparsable_score_document_is_an_error() {
    let path = temp_file("lb1.txt", "{not json");
    let error = load_score_map(&path).unwrap_err();
    assert!(matches!(error, IngestError::Json { .. }));
    cleanup(&path);
}
