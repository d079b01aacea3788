//! The character grid a diagram is traced over.

use crate::chars::BLANK;
use crate::geom::Position;

/// A ragged 2-D character table with bounds-safe lookup.
///
/// Rows keep the lengths they had in the input; no padding is applied.
/// Every read outside the stored cells resolves to [`BLANK`], so edge
/// traversal fails through ordinary character classification instead of
/// bounds checks.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from input text, one row per line.
    pub fn new(input: &str) -> Self {
        Self {
            rows: input.lines().map(|line| line.chars().collect()).collect(),
        }
    }

    /// The character at `(x, y)`, or [`BLANK`] for any out-of-range
    /// coordinate (negative, past the last row, or past the row's length).
    pub fn get(&self, x: i32, y: i32) -> char {
        if x < 0 || y < 0 {
            return BLANK;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(BLANK)
    }

    /// [`Grid::get`] addressed by [`Position`].
    pub fn at(&self, pos: Position) -> char {
        self.get(pos.x, pos.y)
    }

    /// The first cell holding `c`, scanning rows top to bottom and each
    /// row left to right.
    pub fn find(&self, c: char) -> Option<Position> {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == c {
                    return Some(Position::new(x as i32, y as i32));
                }
            }
        }
        None
    }

    /// How many cells hold `c`.
    pub fn count(&self, c: char) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == c).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let grid = Grid::new("@--+\n   |\n x-+");
        assert_eq!(grid.get(0, 0), '@');
        assert_eq!(grid.get(3, 1), '|');
        assert_eq!(grid.get(1, 2), 'x');
    }

    #[test]
    fn test_out_of_range_is_blank() {
        let grid = Grid::new("@-x");
        assert_eq!(grid.get(-1, 0), BLANK);
        assert_eq!(grid.get(0, -1), BLANK);
        assert_eq!(grid.get(3, 0), BLANK);
        assert_eq!(grid.get(0, 1), BLANK);
    }

    #[test]
    fn test_ragged_rows() {
        // Second row is shorter; reads past its end are blank, not errors.
        let grid = Grid::new("@--+\n x");
        assert_eq!(grid.get(1, 1), 'x');
        assert_eq!(grid.get(2, 1), BLANK);
        assert_eq!(grid.get(3, 1), BLANK);
    }

    #[test]
    fn test_empty_input() {
        let grid = Grid::new("");
        assert_eq!(grid.get(0, 0), BLANK);
        assert_eq!(grid.find('@'), None);
        assert_eq!(grid.count('@'), 0);
    }

    #[test]
    fn test_find_is_row_major() {
        let grid = Grid::new(" A\nA ");
        assert_eq!(grid.find('A'), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_count() {
        let grid = Grid::new("@-x-x");
        assert_eq!(grid.count('x'), 2);
        assert_eq!(grid.count('@'), 1);
        assert_eq!(grid.count('Z'), 0);
    }
}
