use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("tests/inputs/example.txt");

    cmd.assert().success().stdout(str::contains(
        "[AOC 2022 / DAY 10 / PART 2] Response: \n\
         ##..##..##..##..##..##..##..##..##..##..\n\
         ###...###...###...###...###...###...###.\n\
         ####....####....####....####....####....\n\
         #####.....#####.....#####.....#####.....\n\
         ######......######......######......####\n\
         #######.......#######.......#######.....\n",
    ));
}

#[test]
fn part2_fail_on_short_program() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("tests/inputs/small.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Program ran out after 5 cycle(s)"));
}

#[test]
fn part2_fail_on_empty_program() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("tests/inputs/empty.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Program ran out after 0 cycle(s)"));
}
