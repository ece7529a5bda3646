use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_courses_lists_sample_catalog() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["catalog", "courses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("History"))
        .stdout(predicate::str::contains("4 courses, 2 lessons completed, 68% average progress"));
}

#[test]
fn test_lessons_for_known_course() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["catalog", "lessons", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics Lessons"))
        .stdout(predicate::str::contains("Polynomials"));
}

#[test]
fn test_lessons_for_unknown_course_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["catalog", "lessons", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown course '99'"));
}

#[test]
fn test_students_lists_join_dates() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["catalog", "students"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan 15, 2024"));
}

#[test]
fn test_catalog_file_override() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    fs::write(
        &catalog_path,
        r#"{
            "courses": [{
                "id": "c1", "title": "Rust Basics", "progress": 10, "lessons": 3,
                "description": "Ownership", "category": "Programming",
                "instructor": "Ferris", "rating": 5.0, "students": 1
            }],
            "students": []
        }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("config.toml"),
        format!("catalog_file = {:?}\n", catalog_path.display().to_string()),
    )
    .unwrap();

    cargo_bin_cmd!("edulearn")
        .env("EDULEARN_HOME", dir.path())
        .args(["catalog", "courses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust Basics"))
        .stdout(predicate::str::contains("Mathematics").not());
}
