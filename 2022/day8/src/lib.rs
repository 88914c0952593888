use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    iter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

pub const DEFAULT_INPUT_PATH: &str = "input/day8.txt";

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} tree(s) in one row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidChar(c) => write!(
                f,
                "Invalid character({}) in tree map, expect digits.",
                c
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::Down => Some(Position::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Forest {
    heights: Vec<u8>,
    row_n: usize,
    col_n: usize,
}

impl Forest {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn height(&self, pos: &Position) -> Option<u8> {
        if pos.r < self.row_n && pos.c < self.col_n {
            self.heights.get(pos.r * self.col_n + pos.c).copied()
        } else {
            None
        }
    }

    /// Number of trees visible from outside the forest.
    pub fn visible_count(&self) -> usize {
        self.positions().filter(|pos| self.is_visible(pos)).count()
    }

    pub fn max_scenic_score(&self) -> usize {
        self.positions()
            .map(|pos| self.scenic_score(&pos))
            .max()
            .unwrap_or(0)
    }

    /// A tree is visible if all trees between it and the edge are shorter, in any direction.
    pub fn is_visible(&self, pos: &Position) -> bool {
        let Some(height) = self.height(pos) else {
            return false;
        };

        Direction::all_dirs().iter().any(|dir| {
            self.heights_toward(pos, *dir)
                .all(|other_height| other_height < height)
        })
    }

    pub fn scenic_score(&self, pos: &Position) -> usize {
        Direction::all_dirs()
            .iter()
            .map(|dir| self.viewing_distance(pos, *dir))
            .product()
    }

    /// Trees seen from given position toward the edge, the first one at least as tall included.
    pub fn viewing_distance(&self, pos: &Position, dir: Direction) -> usize {
        let Some(height) = self.height(pos) else {
            return 0;
        };

        let mut distance = 0;
        for other_height in self.heights_toward(pos, dir) {
            distance += 1;
            if other_height >= height {
                break;
            }
        }

        distance
    }

    fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.row_n).flat_map(move |r| (0..self.col_n).map(move |c| Position::new(r, c)))
    }

    // Heights from the neighbor of given position to the edge, excluding the position itself.
    fn heights_toward<'a>(&'a self, pos: &Position, dir: Direction) -> impl Iterator<Item = u8> + 'a {
        iter::successors(pos.neighbor(dir), move |p| p.neighbor(dir))
            .map_while(move |p| self.height(&p))
    }
}

struct ForestBuilder {
    heights: Vec<u8>,
    row_n: usize,
    col_n: Option<usize>,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap_or(0), this_col_n));
        }

        for c in text.chars() {
            let height = c.to_digit(10).ok_or(Error::InvalidChar(c))?;
            self.heights.push(height as u8);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Forest {
        Forest {
            heights: self.heights,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

pub fn format_response<T: Display>(part: usize, result: T) -> String {
    format!("[AOC 2022 / DAY 8 / PART {}] Response: {}", part, result)
}

pub fn read_forest<P: AsRef<Path>>(path: P) -> Result<Forest> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = ForestBuilder::new();

    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        // Map ends at the first blank line.
        let text = line.trim_end();
        if text.is_empty() {
            break;
        }

        builder.add_row(text).with_context(|| {
            format!(
                "Failed to read trees from line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
    }

    let forest = builder.build();
    info!(
        "Read forest of {} row(s) and {} column(s) from given file({}).",
        forest.row_n,
        forest.col_n,
        path.as_ref().display()
    );
    Ok(forest)
}
