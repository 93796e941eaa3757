use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day2-part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("There is(are) 4 safe report(s)"));
}

#[test]
fn part2_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("day2-part2").unwrap();
    cmd.arg("no_such_input.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("no_such_input.txt"));
}
