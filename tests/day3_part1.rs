use assert_cmd::Command;
use predicates::prelude::*;

fn assert_closest_distance(input_path: &str, dist: i32) {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg(input_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("central port is {}.", dist)));
}

#[test]
fn part1_output_right_answer() {
    assert_closest_distance("tests/inputs/day3_example0.txt", 6);
    assert_closest_distance("tests/inputs/day3_example1.txt", 159);
    assert_closest_distance("tests/inputs/day3_example2.txt", 135);
}

#[test]
fn part1_fail_without_cross_point() {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg("tests/inputs/day3_apart.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("don't have any cross point"));
}

#[test]
fn part1_fail_on_invalid_wire() {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg("tests/inputs/day6_example.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse wire at line 1"));
}
