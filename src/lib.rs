//! Trace ASCII path diagrams.
//!
//! A diagram is a single connected trail drawn on a character grid:
//! `@` marks the start, `x` the end, `-` and `|` are straight segments,
//! `+` is a corner, and uppercase letters are path segments that double
//! as collectible waypoints. Tracing walks the trail from `@` to `x`,
//! collecting each letter the first time its cell is visited and
//! rendering every character traversed, revisits included.
//!
//! # Example
//!
//! ```rust
//! let map = "@---A---+\n        |\nx-B-+   C\n    |   |\n    +---+";
//! let trail = waymark::trace(map).unwrap();
//! assert_eq!(trail.letters, "ACB");
//! assert_eq!(trail.path, "@---A---+|C|+---+|+-B-x");
//! ```
//!
//! Malformed diagrams (broken trails, forks, duplicate endpoints, fake
//! turns) fail with a specific [`TraceError`].

pub mod chars;
pub mod error;
pub mod finder;
pub mod geom;
pub mod grid;
pub mod walker;

pub use error::{Result, TraceError};
pub use geom::{Direction, Position};
pub use grid::Grid;
pub use walker::{Step, Trail, Walker};

/// Trace the diagram in `input` from its start mark to its end mark.
///
/// Rows are split on line breaks and may have unequal lengths. Returns
/// the collected waypoint letters and the rendered path, or the first
/// malformed-input condition encountered.
pub fn trace(input: &str) -> Result<Trail> {
    let grid = Grid::new(input);
    Walker::start(&grid)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace() {
        let trail = trace("@-A+\n   |\n x-+").unwrap();
        assert_eq!(trail.letters, "A");
        assert_eq!(trail.path, "@-A+|+-x");
    }

    #[test]
    fn test_trace_rejects_malformed_input() {
        assert_eq!(trace(""), Err(TraceError::MissingStart));
        assert_eq!(trace(" @-- x"), Err(TraceError::BrokenPath));
    }
}
