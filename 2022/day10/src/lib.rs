use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_INPUT_PATH: &str = "input/day10.txt";
pub const DEFAULT_TARGET_CYCLES: [usize; 6] = [20, 60, 100, 140, 180, 220];
pub const SCREEN_WIDTH: usize = 40;
pub const SCREEN_HEIGHT: usize = 6;

#[derive(Debug)]
pub enum Error {
    InvalidInstText(String),
    ProgramTooShort(usize, usize),
    RegisterOverflow(usize, isize, isize),
    SignalStrengthOverflow(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInstText(s) => write!(
                f,
                "Invalid instruction text({}), expect \"noop\" or \"addx <integer>\".",
                s
            ),
            Error::ProgramTooShort(cycle_n, pixel_n) => write!(
                f,
                "Program ran out after {} cycle(s), but drawing the screen takes {} cycles.",
                cycle_n, pixel_n
            ),
            Error::RegisterOverflow(cycle, x, delta) => write!(
                f,
                "Register X overflowed after cycle {} when adding {} to {}.",
                cycle, delta, x
            ),
            Error::SignalStrengthOverflow(cycle) => {
                write!(f, "Signal strength overflowed during cycle {}.", cycle)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct Part1CLIArgs {
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input_path: PathBuf,
    /// Cycles during which the signal strength is sampled.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_TARGET_CYCLES)]
    pub target_cycles: Vec<usize>,
}

#[derive(Debug, Parser)]
pub struct Part2CLIArgs {
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Noop,
    AddX(isize),
}

impl TryFrom<&str> for Instruction {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        type InstCtorFn = fn(&str) -> Option<Instruction>;
        static CONSTRUCTORS: [InstCtorFn; 2] =
            [Instruction::try_new_noop, Instruction::try_new_addx];
        CONSTRUCTORS
            .iter()
            .filter_map(|f| f(value))
            .next()
            .ok_or_else(|| Error::InvalidInstText(value.to_string()))
    }
}

impl Instruction {
    pub fn try_new_noop(text: &str) -> Option<Self> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^noop$").unwrap());

        PATTERN.is_match(text).then_some(Self::Noop)
    }

    pub fn try_new_addx(text: &str) -> Option<Self> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^addx ([+-]?\d+)$").unwrap());

        PATTERN
            .captures(text)
            .and_then(|caps| caps[1].parse::<isize>().ok())
            .map(Self::AddX)
    }

    /// Number of cycles this instruction takes to complete.
    pub fn cycles(&self) -> usize {
        match self {
            Instruction::Noop => 1,
            Instruction::AddX(_) => 2,
        }
    }

    /// Change to register X once this instruction completes.
    pub fn delta(&self) -> isize {
        match self {
            Instruction::Noop => 0,
            Instruction::AddX(n) => *n,
        }
    }
}

#[derive(Debug)]
struct RunningInst {
    inst: Instruction,
    remaining: usize,
}

impl RunningInst {
    fn new(inst: Instruction) -> Self {
        Self {
            inst,
            remaining: inst.cycles(),
        }
    }

    /// Spends one cycle on this instruction, returns true if it completes in this cycle.
    fn step(&mut self) -> bool {
        self.remaining -= 1;
        self.remaining == 0
    }

    fn apply(&self) -> isize {
        self.inst.delta()
    }
}

/// Register X as it stands during one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleState {
    pub cycle: usize,
    pub x: isize,
}

impl CycleState {
    /// None if cycle number times X doesn't fit in `isize`.
    pub fn signal_strength(&self) -> Option<isize> {
        isize::try_from(self.cycle)
            .ok()
            .and_then(|cycle| cycle.checked_mul(self.x))
    }
}

#[derive(Debug)]
pub struct Cpu<'a> {
    program: &'a [Instruction],
    inst_ptr: usize,
    running: Option<RunningInst>,
    x: isize,
    cycle: usize,
}

impl<'a> Cpu<'a> {
    pub fn new(program: &'a [Instruction]) -> Self {
        Self {
            program,
            inst_ptr: 0,
            running: None,
            x: 1,
            cycle: 0,
        }
    }

    /// Current value of register X.
    pub fn x(&self) -> isize {
        self.x
    }

    /// Number of the last finished cycle.
    pub fn cycle_n(&self) -> usize {
        self.cycle
    }

    pub fn is_done(&self) -> bool {
        self.running.is_none() && self.inst_ptr >= self.program.len()
    }

    /// Runs one cycle and returns the state during it, or None if the program is exhausted.
    /// Fails if the completing instruction pushes X out of `isize`.
    pub fn tick(&mut self) -> Result<Option<CycleState>, Error> {
        let mut running = match self.running.take() {
            Some(running) => running,
            None => {
                let Some(inst) = self.program.get(self.inst_ptr).copied() else {
                    return Ok(None);
                };
                self.inst_ptr += 1;
                RunningInst::new(inst)
            }
        };

        self.cycle += 1;
        let state = CycleState {
            cycle: self.cycle,
            x: self.x,
        };
        if running.step() {
            let delta = running.apply();
            self.x = self
                .x
                .checked_add(delta)
                .ok_or(Error::RegisterOverflow(self.cycle, self.x, delta))?;
        } else {
            self.running = Some(running);
        }

        Ok(Some(state))
    }
}

impl Iterator for Cpu<'_> {
    type Item = Result<CycleState, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick().transpose()
    }
}

pub fn signal_strength_sum(
    program: &[Instruction],
    target_cycles: &[usize],
) -> Result<isize, Error> {
    let mut strength_sum: isize = 0;
    for state in Cpu::new(program) {
        let state = state?;
        if !target_cycles.contains(&state.cycle) {
            continue;
        }

        let strength = state
            .signal_strength()
            .ok_or(Error::SignalStrengthOverflow(state.cycle))?;
        debug!(
            "During cycle {}, X is {}, signal strength is {}.",
            state.cycle, state.x, strength
        );
        strength_sum = strength_sum
            .checked_add(strength)
            .ok_or(Error::SignalStrengthOverflow(state.cycle))?;
    }

    Ok(strength_sum)
}

#[derive(Debug)]
pub struct Screen {
    pixels: Vec<bool>,
}

impl Screen {
    /// Draws one pixel per cycle, left to right and top to bottom.
    pub fn render(program: &[Instruction]) -> Result<Self, Error> {
        let pixel_n = SCREEN_WIDTH * SCREEN_HEIGHT;
        let mut cpu = Cpu::new(program);
        let mut pixels = Vec::with_capacity(pixel_n);
        for ind in 0..pixel_n {
            let state = cpu.tick()?.ok_or(Error::ProgramTooShort(ind, pixel_n))?;
            pixels.push(Self::sprite_covers(state.x, ind % SCREEN_WIDTH));
        }
        if !cpu.is_done() {
            info!(
                "Screen finished with instruction(s) left from index {}.",
                cpu.inst_ptr
            );
        }

        Ok(Self { pixels })
    }

    pub fn is_lit(&self, r: usize, c: usize) -> Option<bool> {
        if r < SCREEN_HEIGHT && c < SCREEN_WIDTH {
            Some(self.pixels[r * SCREEN_WIDTH + c])
        } else {
            None
        }
    }

    // The sprite is 3 pixels wide, centered at X.
    fn sprite_covers(x: isize, col: usize) -> bool {
        x.abs_diff(col as isize) <= 1
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.pixels.chunks(SCREEN_WIDTH).enumerate() {
            if r != 0 {
                writeln!(f)?;
            }
            for lit in row {
                write!(f, "{}", if *lit { '#' } else { '.' })?;
            }
        }

        Ok(())
    }
}

pub fn format_response<T: Display>(part: usize, result: T) -> String {
    format!("[AOC 2022 / DAY 10 / PART {}] Response: {}", part, result)
}

pub fn read_program<P: AsRef<Path>>(path: P) -> Result<Vec<Instruction>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut program = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        // Program ends at the first blank line.
        let text = line.trim_end();
        if text.is_empty() {
            break;
        }

        program.push(Instruction::try_from(text).with_context(|| {
            format!(
                "Failed to read instruction from line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?);
    }

    info!(
        "Read {} instruction(s) from given file({}).",
        program.len(),
        path.as_ref().display()
    );
    Ok(program)
}
