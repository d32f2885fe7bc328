use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("tests/inputs/day6_example.txt");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("is 42."));
}

#[test]
fn part1_output_same_answer_for_reversed_orbits() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("tests/inputs/day6_transfer_reversed.txt");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("is 54."));
}

#[test]
fn part1_fail_on_malformed_orbit() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("tests/inputs/day6_malformed.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid orbit specification(C-D)"))
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn part1_fail_on_multiple_roots() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("tests/inputs/day6_forest.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Expect exactly one root object"));
}

#[test]
fn part1_fail_on_missing_file() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("tests/inputs/no_such_file.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open given file"));
}
