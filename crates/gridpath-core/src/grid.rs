//! The [`Grid`] type: a rectangular, non-empty 2D array of cells.
//!
//! Every constructor checks the shape, so code holding a `Grid` can rely on
//! equal-length rows and at least one cell.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Bounds, Point};

/// A rectangular grid of `T` stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<Vec<T>>",
        into = "Vec<Vec<T>>",
        bound(
            serialize = "T: serde::Serialize + Clone",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Bounds,
}

impl<T> Grid<T> {
    /// Build a grid from rows. Rejects an empty input and jagged rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(GridError::Jagged {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(height as i32, width as i32),
        })
    }

    /// Build a grid from a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != rows * cols {
            return Err(GridError::SizeMismatch {
                expected: rows * cols,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows as i32, cols as i32),
        })
    }

    /// Parse line-oriented text, mapping each character through `f`.
    ///
    /// Leading and trailing newlines are ignored; `\r\n` line endings are
    /// accepted. `f` returning `None` rejects the character.
    pub fn parse_with(s: &str, mut f: impl FnMut(char) -> Option<T>) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (r, line) in s.trim_matches(['\n', '\r']).lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let cell = f(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Point::new(r as i32, c as i32),
                })?;
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// The rectangle covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols as usize
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// Overwrite the cell at `p`.
    pub fn set(&mut self, p: Point, value: T) -> Result<(), GridError> {
        let i = self.bounds.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })?;
        self.cells[i] = value;
        Ok(())
    }

    /// Iterate over every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// Positions of every cell matching `pred`, row-major.
    pub fn positions(&self, pred: impl Fn(&T) -> bool) -> Vec<Point> {
        self.iter()
            .filter(|(_, v)| pred(v))
            .map(|(p, _)| p)
            .collect()
    }

    /// The first position (row-major) whose cell matches `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<Point> {
        self.iter().find(|(_, v)| pred(v)).map(|(p, _)| p)
    }

    /// A grid of the same shape with every cell transformed by `f`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            bounds: self.bounds,
        }
    }

    /// Borrow one row.
    pub fn row(&self, r: usize) -> Option<&[T]> {
        let cols = self.cols();
        self.cells.get(r * cols..(r + 1) * cols)
    }
}

impl<T: Clone> Grid<T> {
    /// A `rows × cols` grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, GridError> {
        Self::from_vec(rows, cols, vec![value; rows * cols])
    }
}

impl Grid<char> {
    /// Parse a text grid keeping every character as-is.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        Self::parse_with(s, Some)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        Self::from_rows(rows)
    }
}

impl<T> From<Grid<T>> for Vec<Vec<T>> {
    fn from(grid: Grid<T>) -> Self {
        let cols = grid.cols();
        let mut rows = Vec::with_capacity(grid.rows());
        let mut cells = grid.cells.into_iter();
        for _ in 0..grid.bounds.rows {
            rows.push(cells.by_ref().take(cols).collect());
        }
        rows
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for ch in self.row(r).unwrap_or_default() {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_rows() {
        let g = Grid::from_rows(vec![vec![1u8, 2], vec![3, 4]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: Grid<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn jagged_json_rejected() {
        let res: Result<Grid<u8>, _> = serde_json::from_str("[[1,2],[3]]");
        assert!(res.is_err());
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
