//! Endpoint location and initial heading resolution.
//!
//! This module scans the grid to establish where a walk begins and in
//! which direction it leaves the start mark.

use tracing::debug;

use crate::chars::{is_path_char, END, START};
use crate::error::{Result, TraceError};
use crate::geom::{Direction, Position};
use crate::grid::Grid;

/// Validate the endpoint marks and return the unique start position.
///
/// The checks run in a fixed order: missing start, missing end, multiple
/// starts, multiple ends. A grid with no start and two ends therefore
/// reports the missing start, not the duplicate ends.
pub fn locate_start(grid: &Grid) -> Result<Position> {
    let start = grid.find(START).ok_or(TraceError::MissingStart)?;
    if grid.find(END).is_none() {
        return Err(TraceError::MissingEnd);
    }
    if grid.count(START) > 1 {
        return Err(TraceError::MultipleStarts);
    }
    if grid.count(END) > 1 {
        return Err(TraceError::MultipleEnds);
    }

    debug!(x = start.x, y = start.y, "located start mark");
    Ok(start)
}

/// Determine the one legal heading out of the start mark.
///
/// A neighbor is open if its character belongs to the path alphabet.
/// Zero open neighbors means the trail never leaves the start; more than
/// one means the walker cannot pick a side.
pub fn initial_heading(grid: &Grid, start: Position) -> Result<Direction> {
    let mut open = Direction::ALL
        .into_iter()
        .filter(|&d| is_path_char(grid.at(start.step(d))));

    let heading = open.next().ok_or(TraceError::BrokenPath)?;
    if open.next().is_some() {
        return Err(TraceError::MultipleStartPaths);
    }

    debug!(%heading, "resolved initial heading");
    Ok(heading)
}
