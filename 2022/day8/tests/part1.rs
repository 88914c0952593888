use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.arg("tests/inputs/example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("[AOC 2022 / DAY 8 / PART 1] Response: 21"));
}

#[test]
fn part1_fail_on_inconsistent_row() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.arg("tests/inputs/inconsistent.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("line 3"))
        .stderr(str::contains("Expect 5 tree(s) in one row, given 3."));
}

#[test]
fn part1_fail_on_missing_file() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.arg("tests/inputs/missing.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file(tests/inputs/missing.txt)."));
}
