//! Tile grid loading and solidity queries.
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::MapError;

/// Reference level: 10x5, walled border, a few interior pillars.
pub const DEFAULT_MAP: [&str; 5] = [
    "1111111111",
    "1000000001",
    "1011001001",
    "1000000001",
    "1111111111",
];

pub const OPEN_MARKER: char = '0';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

impl From<char> for Cell {
    fn from(ch: char) -> Self {
        if ch == OPEN_MARKER { Cell::Open } else { Cell::Wall }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Builds a grid from text rows. Short rows are padded with walls.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let parsed: Vec<Vec<Cell>> = rows
            .iter()
            .map(|r| r.as_ref().chars().map(Cell::from).collect())
            .collect();
        let width = parsed.iter().map(Vec::len).max().unwrap_or(0);
        if parsed.is_empty() || width == 0 {
            return Err(MapError::Empty);
        }

        let height = parsed.len();
        let mut cells = Vec::with_capacity(width * height);
        for (j, mut row) in parsed.into_iter().enumerate() {
            if row.len() < width {
                warn!(row = j, len = row.len(), width, "ragged map row padded with walls");
                row.resize(width, Cell::Wall);
            }
            cells.extend(row);
        }
        Ok(Self { width, height, cells })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rows: Vec<&str> = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect();
        Self::from_rows(rows.as_slice())
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    /// Cell at integer tile indices, `None` outside the grid.
    pub fn cell(&self, i: usize, j: usize) -> Option<Cell> {
        if i < self.width && j < self.height {
            Some(self.cells[j * self.width + i])
        } else {
            None
        }
    }

    /// Whether the tile containing world point `(x, y)` blocks movement and rays.
    /// Anything outside `[0,W)x[0,H)`, NaN included, is solid.
    pub fn solid_at(&self, x: f64, y: f64) -> bool {
        let in_x = x >= 0.0 && x < self.width as f64;
        let in_y = y >= 0.0 && y < self.height as f64;
        if !(in_x && in_y) {
            return true;
        }
        // truncation == floor for non-negative coordinates
        !matches!(self.cell(x as usize, y as usize), Some(Cell::Open))
    }

    /// Every open tile as `(column, row)`, row-major.
    pub fn open_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Open)
            .map(|(idx, _)| (idx % self.width, idx / self.width))
            .collect()
    }
}

impl Default for GridMap {
    fn default() -> Self {
        let cells = DEFAULT_MAP
            .iter()
            .flat_map(|r| r.chars().map(Cell::from))
            .collect();
        Self { width: DEFAULT_MAP[0].len(), height: DEFAULT_MAP.len(), cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_matches_reference_rows() {
        let map = GridMap::default();
        assert_eq!(map, GridMap::from_rows(&DEFAULT_MAP).unwrap());
        assert_eq!((map.width(), map.height()), (10, 5));
        assert_eq!(map.cell(2, 2), Some(Cell::Wall));
        assert_eq!(map.cell(1, 1), Some(Cell::Open));
    }

    #[test]
    fn outside_bounds_is_solid() {
        let map = GridMap::default();
        for &(x, y) in &[
            (-0.5, 2.0),
            (2.0, -0.01),
            (10.0, 2.0),
            (10.7, 2.0),
            (3.0, 5.0),
            (-100.0, -100.0),
            (f64::NAN, 2.0),
            (2.0, f64::INFINITY),
        ] {
            assert!(map.solid_at(x, y), "({x}, {y}) should be solid");
        }
    }

    #[test]
    fn fractional_coordinates_truncate_to_tiles() {
        let map = GridMap::default();
        assert!(!map.solid_at(3.0, 3.0));
        assert!(!map.solid_at(1.99, 1.01));
        assert!(map.solid_at(2.5, 2.5));
        assert!(map.solid_at(9.0, 3.0));
        assert!(!map.solid_at(8.999, 3.0));
    }

    #[test]
    fn unknown_markers_are_walls() {
        let map = GridMap::from_rows(&["0x0", "0 0"]).unwrap();
        assert!(!map.solid_at(0.5, 0.5));
        assert!(map.solid_at(1.5, 0.5));
        assert!(map.solid_at(1.5, 1.5));
    }

    #[test]
    fn ragged_rows_are_padded_with_walls() {
        let map = GridMap::from_rows(&["000", "0"]).unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.cell(2, 1), Some(Cell::Wall));
        assert_eq!(map.open_cells(), vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
    }

    #[test]
    fn empty_map_is_rejected() {
        let rows: [&str; 0] = [];
        assert!(matches!(GridMap::from_rows(&rows), Err(MapError::Empty)));
        assert!(matches!(GridMap::from_rows(&["", ""]), Err(MapError::Empty)));
    }

    #[test]
    fn load_reads_rows_and_skips_blank_lines() {
        let path = std::env::temp_dir().join(format!("grid_load_{}.txt", std::process::id()));
        fs::write(&path, "111\n101\n\n111\n").unwrap();
        let map = GridMap::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!((map.width(), map.height()), (3, 3));
        assert_eq!(map.open_cells(), vec![(1, 1)]);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GridMap::load("/definitely/not/here.map").unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }
}
