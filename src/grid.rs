use std::str::FromStr;

use log::trace;

use crate::error::{GridError, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// Offsets of the eight surrounding cells, as `(dx, dy)`.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A finite, immutable generation of cells.
///
/// Cells are stored row-major; `x` is the column and `y` is the row.
/// There is no wraparound: positions past an edge simply do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from rows of `0`/`1` values.
    pub fn new<R: AsRef<[u8]>>(seed: &[R]) -> Result<Self> {
        let (width, height) = Self::check_shape(seed.iter().map(|r| r.as_ref().len()))?;

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in seed.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate() {
                let cell = match value {
                    0 => Cell::Dead,
                    1 => Cell::Alive,
                    _ => {
                        return Err(GridError::InvalidCell {
                            x,
                            y,
                            value: value.to_string(),
                        })
                    }
                };
                cells.push(cell);
            }
        }

        trace!("built {width}x{height} grid");
        Ok(Grid { width, height, cells })
    }

    /// Assembles a grid from already validated storage.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Grid { width, height, cells }
    }

    fn check_shape(lens: impl Iterator<Item = usize> + Clone) -> Result<(usize, usize)> {
        let mut rows = lens.clone();
        let width = match rows.next() {
            Some(w) => w,
            None => return Err(GridError::EmptyGrid),
        };
        if lens.clone().any(|l| l == 0) {
            return Err(GridError::EmptyGrid);
        }
        if let Some((row, found)) = lens.clone().enumerate().find(|&(_, l)| l != width) {
            return Err(GridError::InvalidShape {
                row,
                expected: width,
                found,
            });
        }
        Ok((width, lens.count()))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`, fixed for the lifetime of the grid.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell> {
        if self.contains(x, y) {
            Ok(self.get(x, y))
        } else {
            Err(self.out_of_range(x, y))
        }
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> Cell {
        debug_assert!(self.contains(x, y));
        self.cells[y * self.width + x]
    }

    /// In-bounds positions around `(x, y)`; between 3 and 8 of them.
    pub fn neighbors(&self, x: usize, y: usize) -> Result<Neighbors<'_>> {
        if self.contains(x, y) {
            Ok(self.neighbors_unchecked(x, y))
        } else {
            Err(self.out_of_range(x, y))
        }
    }

    #[inline]
    pub(crate) fn neighbors_unchecked(&self, x: usize, y: usize) -> Neighbors<'_> {
        debug_assert!(self.contains(x, y));
        Neighbors {
            grid: self,
            x,
            y,
            next: 0,
        }
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    fn out_of_range(&self, x: usize, y: usize) -> GridError {
        GridError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Each non-empty line is a row. `0`, `.` and space are dead;
    /// `1`, `+`, `#` and `O` are alive.
    fn from_str(s: &str) -> Result<Self> {
        let mut data: Vec<Vec<u8>> = vec![];

        for (y, line) in s.lines().filter(|l| !l.is_empty()).enumerate() {
            let mut r = Vec::with_capacity(line.len());
            for (x, c) in line.chars().enumerate() {
                let v = match c {
                    '0' | '.' | ' ' => 0,
                    '1' | '+' | '#' | 'O' => 1,
                    _ => {
                        return Err(GridError::InvalidCell {
                            x,
                            y,
                            value: c.to_string(),
                        })
                    }
                };
                r.push(v);
            }
            data.push(r);
        }

        Grid::new(&data)
    }
}

/// Iterator over the in-bounds neighbors of one cell.
///
/// Positions off the grid are skipped, never padded with dead cells.
pub struct Neighbors<'a> {
    grid: &'a Grid,
    x: usize,
    y: usize,
    next: usize,
}

impl<'a> Neighbors<'a> {
    /// Counts alive neighbors, consuming the iterator.
    pub fn alive(self) -> usize {
        let grid = self.grid;
        self.filter(|&(x, y)| grid.get(x, y).is_alive()).count()
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = OFFSETS.get(self.next) {
            self.next += 1;
            let nx = self.x.checked_add_signed(dx).filter(|&nx| nx < self.grid.width);
            let ny = self.y.checked_add_signed(dy).filter(|&ny| ny < self.grid.height);
            if let (Some(nx), Some(ny)) = (nx, ny) {
                return Some((nx, ny));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.next))
    }
}
