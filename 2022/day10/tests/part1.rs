use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("[AOC 2022 / DAY 10 / PART 1] Response: 13140"));
}

#[test]
fn part1_output_same_answer_on_rerun() {
    let run = || {
        let mut cmd = Command::cargo_bin("day10_part1").unwrap();
        cmd.arg("tests/inputs/example.txt");
        cmd.output().unwrap().stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn part1_samples_given_target_cycles() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/small.txt")
        .arg("--target-cycles")
        .arg("4,5");

    cmd.assert()
        .success()
        .stdout(str::contains("Response: 36"));
}

#[test]
fn part1_output_zero_for_empty_program() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/empty.txt");

    cmd.assert().success().stdout(str::contains("Response: 0"));
}

#[test]
fn part1_fail_on_malformed_line() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/malformed.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("line 2"))
        .stderr(str::contains("Invalid instruction text(addx five)"));
}

#[test]
fn part1_fail_on_missing_file() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/missing.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file(tests/inputs/missing.txt)."));
}

#[test]
fn part1_only_sample_cycles_reached() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/noops.txt");

    cmd.assert().success().stdout(str::contains("Response: 180"));
}

#[test]
fn part1_fail_on_register_overflow() {
    let mut cmd = Command::cargo_bin("day10_part1").unwrap();
    cmd.arg("tests/inputs/overflow.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Register X overflowed after cycle 3"));
}
