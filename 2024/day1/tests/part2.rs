use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1-part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 31."));
}

#[test]
fn part2_fails_on_malformed_line() {
    let mut cmd = Command::cargo_bin("day1-part2").unwrap();
    cmd.arg("malformed.txt");

    cmd.assert().failure();
}

#[test]
fn part2_fails_on_oversized_score() {
    let mut cmd = Command::cargo_bin("day1-part2").unwrap();
    cmd.arg("overflow.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("doesn't fit in a 64-bit unsigned integer"));
}
