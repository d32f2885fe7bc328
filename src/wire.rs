use std::{
    collections::HashMap,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn origin() -> Point {
        Point::new(0, 0)
    }

    /// Manhattan distance to the central port.
    pub fn mht_dist(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    fn along(&self, dir: Direction) -> Point {
        match dir {
            Direction::Up => Point::new(self.x, self.y + 1),
            Direction::Down => Point::new(self.x, self.y - 1),
            Direction::Left => Point::new(self.x - 1, self.y),
            Direction::Right => Point::new(self.x + 1, self.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(Error::UnknownDirection(other)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    dir: Direction,
    step_count: u32,
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static MOVE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\w)(\d+)\s*$").unwrap());

        let caps = MOVE_REGEX
            .captures(s)
            .ok_or(Error::InvalidWireMove(s.to_string()))?;
        let dir = Direction::try_from(caps[1].chars().next().unwrap_or(' '))?;
        let step_count = caps[2]
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidWireMove(s.to_string()))?;

        Ok(Move { dir, step_count })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    point: Point,
    steps: usize, // Combined steps both wires take to first reach the point.
}

impl Crossing {
    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Path of a wire starting from the central port.
#[derive(Debug, Clone)]
pub struct Wire {
    moves: Vec<Move>,
}

impl FromStr for Wire {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moves = s
            .trim()
            .split(',')
            .map(Move::from_str)
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Wire { moves })
    }
}

impl Wire {
    /// Every point this wire passes, with the steps taken when first reaching it.
    /// Central port isn't included.
    pub fn trace(&self) -> HashMap<Point, usize> {
        let mut steps_map = HashMap::new();
        let mut cur_point = Point::origin();
        let mut steps = 0;
        for m in &self.moves {
            for _ in 0..m.step_count {
                cur_point = cur_point.along(m.dir);
                steps += 1;
                if cur_point != Point::origin() {
                    steps_map.entry(cur_point).or_insert(steps);
                }
            }
        }

        steps_map
    }

    pub fn cross(&self, other: &Wire) -> Vec<Crossing> {
        let other_trace = other.trace();
        let mut crossings = self
            .trace()
            .into_iter()
            .filter_map(|(point, steps)| {
                other_trace.get(&point).map(|other_steps| Crossing {
                    point,
                    steps: steps + other_steps,
                })
            })
            .collect::<Vec<_>>();
        crossings.sort_unstable_by_key(|c| c.point);

        crossings
    }
}

fn wire_pair(wires: &[Wire]) -> Result<(&Wire, &Wire), Error> {
    match wires {
        [wire0, wire1] => Ok((wire0, wire1)),
        _ => Err(Error::WireCount(wires.len())),
    }
}

/// Cross point closest to the central port.
pub fn closest_crossing(wires: &[Wire]) -> Result<Crossing, Error> {
    let (wire0, wire1) = wire_pair(wires)?;
    wire0
        .cross(wire1)
        .into_iter()
        .min_by_key(|c| c.point.mht_dist())
        .ok_or(Error::NoCrossing)
}

/// Cross point reached with the fewest combined steps.
pub fn earliest_crossing(wires: &[Wire]) -> Result<Crossing, Error> {
    let (wire0, wire1) = wire_pair(wires)?;
    wire0
        .cross(wire1)
        .into_iter()
        .min_by_key(|c| c.steps)
        .ok_or(Error::NoCrossing)
}

pub fn read_wires<P: AsRef<Path>>(path: P) -> Result<Vec<Wire>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut wires = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        wires.push(
            Wire::from_str(&line)
                .with_context(|| format!("Failed to parse wire at line {}.", ind + 1))?,
        );
    }

    Ok(wires)
}
