use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.arg("tests/inputs/example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("[AOC 2022 / DAY 8 / PART 2] Response: 8"));
}

#[test]
fn part2_fail_on_invalid_char() {
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.arg("tests/inputs/invalid_char.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid character(a) in tree map"));
}

#[test]
fn part2_output_zero_for_empty_map() {
    let mut cmd = Command::cargo_bin("day8_part2").unwrap();
    cmd.arg("tests/inputs/empty.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("[AOC 2022 / DAY 8 / PART 2] Response: 0"));
}
