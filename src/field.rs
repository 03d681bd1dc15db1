//! The rectangular tile grid the game is played on.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::common::{Direction, FieldError, Position, Tile};
use crate::config::dimension_in_range;

/// A `rows × cols` grid of tiles stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Field {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

impl Field {
    /// Create a field covered in grass.
    pub fn new(rows: usize, cols: usize) -> Result<Self, FieldError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: alloc::vec![Tile::Grass; rows * cols],
        })
    }

    /// Generate a field where every cell independently becomes a hole with
    /// probability `hole_probability`, grass otherwise.
    pub fn generate<R: Rng>(
        rows: usize,
        cols: usize,
        hole_probability: f64,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        check_dimensions(rows, cols)?;
        if !(0.0..=1.0).contains(&hole_probability) {
            return Err(FieldError::InvalidProbability);
        }
        let cells = (0..rows * cols)
            .map(|_| {
                if rng.random_bool(hole_probability) {
                    Tile::Hole
                } else {
                    Tile::Grass
                }
            })
            .collect();
        let field = Self { rows, cols, cells };
        log::debug!(
            "generated {}x{} field with {} holes",
            rows,
            cols,
            field.count(Tile::Hole)
        );
        Ok(field)
    }

    /// Build a field from one glyph string per row.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self, FieldError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.as_ref().chars().count());
        check_dimensions(rows, cols)?;
        let mut cells = Vec::with_capacity(rows * cols);
        for line in lines {
            let before = cells.len();
            for glyph in line.as_ref().chars() {
                cells.push(Tile::from_glyph(glyph).ok_or(FieldError::UnknownGlyph(glyph))?);
            }
            if cells.len() - before != cols {
                return Err(FieldError::RaggedRows);
            }
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Result<usize, FieldError> {
        if self.contains(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(FieldError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            })
        }
    }

    pub fn get(&self, pos: Position) -> Result<Tile, FieldError> {
        Ok(self.cells[self.index(pos)?])
    }

    pub fn set(&mut self, pos: Position, tile: Tile) -> Result<(), FieldError> {
        let idx = self.index(pos)?;
        self.cells[idx] = tile;
        Ok(())
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// First position holding `tile`, scanning row by row.
    pub fn find(&self, tile: Tile) -> Option<Position> {
        self.cells
            .iter()
            .position(|&t| t == tile)
            .map(|i| Position::new(i / self.cols, i % self.cols))
    }

    /// The cell one step away from `pos`, or `None` when that step leaves the grid.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let next = match dir {
            Direction::Up => Position::new(pos.row.checked_sub(1)?, pos.col),
            Direction::Down => Position::new(pos.row.checked_add(1)?, pos.col),
            Direction::Left => Position::new(pos.row, pos.col.checked_sub(1)?),
            Direction::Right => Position::new(pos.row, pos.col.checked_add(1)?),
        };
        self.contains(next).then_some(next)
    }

    /// Plant the carrot at a random position with row and column in `[1, dim - 1]`.
    /// Whatever was there is overwritten.
    pub fn plant_carrot<R: Rng>(&mut self, rng: &mut R) -> Position {
        let pos = Position::new(
            rng.random_range(1..self.rows),
            rng.random_range(1..self.cols),
        );
        // rows and cols are at least MIN_DIMENSION, so both ranges are non-empty.
        self.put_carrot(pos.row * self.cols + pos.col);
        log::debug!("planted carrot at ({}, {})", pos.row, pos.col);
        pos
    }

    /// Plant the carrot at `pos`, which must not use row or column 0.
    pub fn place_carrot(&mut self, pos: Position) -> Result<(), FieldError> {
        let idx = self.index(pos)?;
        if pos.row == 0 || pos.col == 0 {
            return Err(FieldError::InvalidCarrotPosition {
                row: pos.row,
                col: pos.col,
            });
        }
        self.put_carrot(idx);
        Ok(())
    }

    /// Keeps a single carrot on the field: an older one turns back into grass.
    fn put_carrot(&mut self, idx: usize) {
        for cell in self.cells.iter_mut().filter(|c| **c == Tile::Carrot) {
            *cell = Tile::Grass;
        }
        self.cells[idx] = Tile::Carrot;
    }

    /// One string of glyphs per row, no separators.
    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|t| t.glyph()).collect())
            .collect()
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), FieldError> {
    if !dimension_in_range(rows) {
        return Err(FieldError::InvalidDimension(rows));
    }
    if !dimension_in_range(cols) {
        return Err(FieldError::InvalidDimension(cols));
    }
    Ok(())
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Field {}x{} {{", self.rows, self.cols)?;
        for line in self.render() {
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}
