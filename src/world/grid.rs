use glam::Vec2;
use thiserror::Error;

/// Material id of one tile.  `0` = open floor, anything else is a wall.
pub type Cell = u8;

/// Open floor.
pub const EMPTY: Cell = 0;

/// Material reported for lookups that land outside the map.
pub const EDGE_CELL: Cell = 1;

/// Default world units per tile.
pub const TILE_SIZE: f32 = 64.0;

/// Largest accepted tile.  The viewport is one pixel per world unit.
pub const MAX_TILE_SIZE: f32 = 256.0;

/// Things that can go wrong when building a grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    /// Row `row` has `found` cells while row 0 has `expected`.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A border tile is open, so rays could leave the map.
    #[error("perimeter cell ({col}, {row}) is open")]
    OpenPerimeter { col: usize, row: usize },

    /// Wall lookups sit one unit behind a grid line, so a tile must be wider
    /// than that.
    #[error("tile size {0} is outside (1, {MAX_TILE_SIZE}]")]
    BadTileSize(f32),
}

fn checked_tile_size(tile_size: f32) -> Result<f32, GridError> {
    if tile_size.is_finite() && tile_size > 1.0 && tile_size <= MAX_TILE_SIZE {
        Ok(tile_size)
    } else {
        Err(GridError::BadTileSize(tile_size))
    }
}

/// Immutable tile map, row-major.
///
/// World space: `x` grows with columns, `y` grows with rows (downwards on
/// screen), one tile = `tile_size` units.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    tile_size: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build from nested rows.  All rows must have the same length.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R], tile_size: f32) -> Result<Self, GridError> {
        let tile_size = checked_tile_size(tile_size)?;
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(cols * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }

        Ok(Self {
            cols,
            rows: rows.len(),
            tile_size,
            cells,
        })
    }

    /// The 20×13 reference level: closed border, eight materials inside.
    pub fn reference() -> Self {
        const MAP: [[Cell; 20]; 13] = [
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
            [1, 0, 0, 0, 0, 5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
            [1, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 2, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ];
        Self {
            cols: 20,
            rows: 13,
            tile_size: TILE_SIZE,
            cells: MAP.iter().flatten().copied().collect(),
        }
    }

    /// Same layout at a different scale.
    pub fn with_tile_size(mut self, tile_size: f32) -> Result<Self, GridError> {
        self.tile_size = checked_tile_size(tile_size)?;
        Ok(self)
    }

    /// Verify that every border tile is a wall.
    pub fn check_enclosed(&self) -> Result<(), GridError> {
        let last_col = self.cols - 1;
        let last_row = self.rows - 1;
        let border = (0..self.cols)
            .flat_map(|c| [(c, 0), (c, last_row)])
            .chain((0..self.rows).flat_map(|r| [(0, r), (last_col, r)]));

        for (col, row) in border {
            if self.cells[row * self.cols + col] == EMPTY {
                return Err(GridError::OpenPerimeter { col, row });
            }
        }
        Ok(())
    }

    /*──────────────────────── dimensions ───────────────────────────*/

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Map extent in world units.
    #[inline]
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }
    #[inline]
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    /// Inclusive world-space bounds test used by the ray scans.
    #[inline]
    pub fn in_bounds(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width() && p.y >= 0.0 && p.y <= self.height()
    }

    /*──────────────────────── lookups ──────────────────────────────*/

    /// Raw lookup; `None` outside the grid.
    #[inline]
    pub fn cell_at(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Tile containing world point `p`, if any.
    ///
    /// The far edges (`x == width`, `y == height`) belong to no tile.
    #[inline]
    pub fn tile_of(&self, p: Vec2) -> Option<(usize, usize)> {
        if !(p.x >= 0.0 && p.x < self.width() && p.y >= 0.0 && p.y < self.height()) {
            return None;
        }
        let col = (p.x / self.tile_size) as usize;
        let row = (p.y / self.tile_size) as usize;
        // guard float rounding right below the far edge
        Some((col.min(self.cols - 1), row.min(self.rows - 1)))
    }

    /// `true` when `p` is solid.  Anything off the map, including its far
    /// edges and NaN, counts as wall.
    #[inline]
    pub fn has_wall_at(&self, p: Vec2) -> bool {
        match self.tile_of(p) {
            Some((col, row)) => self.cells[row * self.cols + col] != EMPTY,
            None => true,
        }
    }

    /// Material under `p`, [`EDGE_CELL`] off the map.
    #[inline]
    pub fn content_at(&self, p: Vec2) -> Cell {
        self.tile_of(p)
            .map(|(col, row)| self.cells[row * self.cols + col])
            .unwrap_or(EDGE_CELL)
    }

    /// World-space centre of a tile.
    #[inline]
    pub fn tile_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.tile_size,
            (row as f32 + 0.5) * self.tile_size,
        )
    }

    /// Iterate `(col, row, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (i % self.cols, i / self.cols, c))
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn grid<const C: usize>(rows: &[[Cell; C]]) -> Grid {
        Grid::from_rows(rows, TILE_SIZE).unwrap()
    }

    fn small() -> Grid {
        grid(&[
            [1, 1, 1, 1, 1],
            [1, 0, 0, 2, 1],
            [1, 0, 0, 0, 1],
            [1, 1, 1, 1, 1],
        ])
    }

    #[test]
    fn interior_wall_iff_cell_nonzero() {
        let g = small();
        // sample a lattice of points strictly inside the border ring
        let (lo, hi_x, hi_y) = (TILE_SIZE, g.width() - TILE_SIZE, g.height() - TILE_SIZE);
        let mut x = lo + 0.5;
        while x < hi_x {
            let mut y = lo + 0.5;
            while y < hi_y {
                let col = (x / TILE_SIZE) as usize;
                let row = (y / TILE_SIZE) as usize;
                let expected = g.cell_at(col, row).unwrap() != 0;
                assert_eq!(g.has_wall_at(vec2(x, y)), expected, "at ({x}, {y})");
                y += 7.0;
            }
            x += 7.0;
        }
    }

    #[test]
    fn outside_is_wall() {
        let g = small();
        for p in [
            vec2(-0.01, 100.0),
            vec2(100.0, -3.0),
            vec2(g.width() + 1.0, 100.0),
            vec2(100.0, g.height() + 0.5),
            vec2(f32::NAN, 100.0),
        ] {
            assert!(g.has_wall_at(p), "{p:?}");
        }
    }

    #[test]
    fn far_edge_counts_as_wall() {
        let open = grid(&[[0, 0], [0, 0]]);
        assert!(!open.has_wall_at(vec2(0.0, 0.0)));
        assert!(!open.has_wall_at(vec2(127.9, 127.9)));
        assert!(open.has_wall_at(vec2(128.0, 10.0)));
        assert!(open.has_wall_at(vec2(10.0, 128.0)));
        assert_eq!(open.content_at(vec2(128.0, 10.0)), EDGE_CELL);
    }

    #[test]
    fn cell_and_content_lookup() {
        let g = small();
        assert_eq!(g.cell_at(3, 1), Some(2));
        assert_eq!(g.cell_at(5, 0), None);
        assert_eq!(g.content_at(g.tile_center(3, 1)), 2);
        assert_eq!(g.content_at(g.tile_center(1, 1)), EMPTY);
    }

    #[test]
    fn ragged_and_empty_rejected() {
        let rows: Vec<Vec<Cell>> = vec![vec![1, 1, 1], vec![1, 1]];
        assert_eq!(
            Grid::from_rows(&rows, TILE_SIZE).unwrap_err(),
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        let none: Vec<Vec<Cell>> = Vec::new();
        assert_eq!(Grid::from_rows(&none, TILE_SIZE).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn perimeter_check() {
        assert!(small().check_enclosed().is_ok());
        assert!(Grid::reference().check_enclosed().is_ok());

        let leaky = grid(&[[1, 1, 1], [1, 0, 0], [1, 1, 1]]);
        assert_eq!(
            leaky.check_enclosed().unwrap_err(),
            GridError::OpenPerimeter { col: 2, row: 1 }
        );
    }

    #[test]
    fn reference_has_eight_materials() {
        let g = Grid::reference();
        let mut seen: Vec<Cell> = g.iter().map(|(_, _, c)| c).filter(|&c| c != 0).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, (1..=8).collect::<Vec<Cell>>());
        assert_eq!((g.cols(), g.rows()), (20, 13));
    }

    #[test]
    fn rescaled_grid_keeps_layout() {
        let g = Grid::reference().with_tile_size(32.0).unwrap();
        assert_eq!((g.width(), g.height()), (640.0, 416.0));
        assert!(g.has_wall_at(vec2(4.5 * 32.0, 3.5 * 32.0)));
        assert!(!g.has_wall_at(vec2(4.5 * 64.0, 3.5 * 64.0)));
    }

    #[test]
    fn tile_size_is_range_checked() {
        let rows: [[Cell; 3]; 3] = [[1, 1, 1], [1, 0, 1], [1, 1, 1]];
        for bad in [0.0, -64.0, 0.5, 1.0, f32::INFINITY, MAX_TILE_SIZE * 2.0] {
            assert_eq!(
                Grid::from_rows(&rows, bad).unwrap_err(),
                GridError::BadTileSize(bad),
                "tile {bad}"
            );
        }
        // NaN never compares equal, so match instead
        assert!(matches!(
            Grid::from_rows(&rows, f32::NAN),
            Err(GridError::BadTileSize(t)) if t.is_nan()
        ));
        assert!(Grid::from_rows(&rows, 1.5).is_ok());
        assert!(Grid::from_rows(&rows, MAX_TILE_SIZE).is_ok());
    }

    #[test]
    fn rescaling_checks_tile_size() {
        assert_eq!(
            Grid::reference().with_tile_size(0.0).unwrap_err(),
            GridError::BadTileSize(0.0)
        );
        assert!(Grid::reference().with_tile_size(f32::NAN).is_err());
        assert!(Grid::reference().with_tile_size(0.5).is_err());
    }
}
