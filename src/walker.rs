//! The path walker state machine.
//!
//! The walker owns all mutable trace state (position, heading, step log,
//! visited set, collected letters) and advances one cell per transition
//! until it reaches the end mark or a malformed-input check fires.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::chars::{is_letter, is_path_char, syncs_with, BLANK, CORNER, END, START};
use crate::error::{Result, TraceError};
use crate::finder::{initial_heading, locate_start};
use crate::geom::{Direction, Position};
use crate::grid::Grid;

/// A record of one visited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The character found at the cell.
    pub ch: char,
    /// Where the cell is.
    pub position: Position,
    /// The heading used to arrive here. The start step carries none.
    pub heading: Option<Direction>,
}

/// The outcome of a completed walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    /// Every waypoint letter, once each, in first-visit order.
    pub letters: String,
    /// Every character traversed, in order, revisits included.
    pub path: String,
}

/// The walk state machine over a borrowed, immutable grid.
pub struct Walker<'g> {
    grid: &'g Grid,
    position: Position,
    /// `None` means the walk has halted at the end mark.
    heading: Option<Direction>,
    steps: Vec<Step>,
    visited: HashSet<Position>,
    letters: String,
}

impl<'g> Walker<'g> {
    /// Validate the endpoints, record the start step and resolve the
    /// initial heading.
    pub fn start(grid: &'g Grid) -> Result<Self> {
        let start = locate_start(grid)?;
        let heading = initial_heading(grid, start)?;

        let mut visited = HashSet::new();
        visited.insert(start);

        Ok(Self {
            grid,
            position: start,
            heading: Some(heading),
            steps: vec![Step {
                ch: START,
                position: start,
                heading: None,
            }],
            visited,
            letters: String::new(),
        })
    }

    /// Drive the walk to completion and render the result.
    pub fn run(mut self) -> Result<Trail> {
        while self.heading.is_some() {
            self.advance()?;
        }

        debug!(letters = %self.letters, steps = self.steps.len(), "walk complete");
        Ok(Trail {
            letters: self.letters,
            path: self.steps.iter().map(|step| step.ch).collect(),
        })
    }

    /// One transition: move one cell along the current heading, classify
    /// the character there, and decide the heading for the next move.
    fn advance(&mut self) -> Result<()> {
        let Some(heading) = self.heading else {
            return Ok(());
        };

        let next = self.position.step(heading);
        let ch = self.grid.at(next);

        if ch == BLANK {
            return Err(TraceError::BrokenPath);
        }
        if !is_path_char(ch) {
            return Err(TraceError::InvalidCharacter);
        }
        // Straight segments are entered along their own axis only. A cell
        // validated on an earlier pass may be re-entered from any side.
        if !syncs_with(ch, heading) && !self.visited.contains(&next) {
            return Err(TraceError::InvalidDirection(heading));
        }

        self.position = next;
        self.steps.push(Step {
            ch,
            position: next,
            heading: Some(heading),
        });
        if self.visited.insert(next) && is_letter(ch) {
            self.letters.push(ch);
        }
        trace!(x = next.x, y = next.y, %ch, %heading, "step");

        // The walk halts the instant the end mark is visited, even if
        // further path continues past it.
        if ch == END {
            self.heading = None;
            return Ok(());
        }

        if self.is_fake_turn(heading) {
            return Err(TraceError::FakeTurn);
        }

        // Corners always turn. A letter turns only when the straight run
        // dead-ends one cell ahead.
        if ch == CORNER || (is_letter(ch) && self.grid.at(next.step(heading)) == BLANK) {
            let previous = self.steps[self.steps.len() - 2].position;
            self.heading = Some(resolve_turn(self.grid, heading, next, previous)?);
        }

        Ok(())
    }

    /// Whether the occupied corner is drawn as a turn but has unvisited
    /// path continuing straight through it. A genuine corner must
    /// redirect; a straight pass-through into new territory is malformed.
    fn is_fake_turn(&self, heading: Direction) -> bool {
        if self.grid.at(self.position) != CORNER {
            return false;
        }
        let ahead = self.position.step(heading);
        self.grid.at(ahead) != BLANK && !self.visited.contains(&ahead)
    }
}

/// Pick the new heading at a corner (or a letter acting as one).
///
/// Only the two directions perpendicular to `heading` are candidates. A
/// candidate is viable if its cell holds a path character and it is not
/// `previous`, the cell the walk just came from. One viable candidate is
/// the turn; none leaves the heading unchanged; two is an ambiguous fork.
pub fn resolve_turn(
    grid: &Grid,
    heading: Direction,
    position: Position,
    previous: Position,
) -> Result<Direction> {
    let mut resolved = heading;
    let mut viable = 0;

    for candidate in heading.crossings() {
        let probe = position.step(candidate);
        if is_path_char(grid.at(probe)) && probe != previous {
            viable += 1;
            if viable > 1 {
                return Err(TraceError::ForkInPath);
            }
            resolved = candidate;
        }
    }

    Ok(resolved)
}
