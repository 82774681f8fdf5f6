//! Plain-text map loader.
//!
//! ```text
//! # comment
//! 1 1 1 1
//! 1 0 2 1
//! 1,1,1,1
//! ```
//!
//! One grid row per line, cells separated by whitespace and/or commas.
//! Blank lines and `#` comments are skipped.

use std::{fs, io, path::Path};

use thiserror::Error;

use super::grid::{Cell, Grid, GridError};

/// Errors that can be encountered while reading a map file.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A token that is not a small non-negative integer.
    #[error("line {line}: `{token}` is not a cell id (0-255)")]
    BadCell { line: usize, token: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parse map text into a grid with `tile_size` world units per cell.
pub fn parse_grid(src: &str, tile_size: f32) -> Result<Grid, MapError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    for (idx, raw) in src.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<Cell>().map_err(|_| MapError::BadCell {
                    line: idx + 1,
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Ok(Grid::from_rows(&rows, tile_size)?)
}

/// Read and parse a map file.
pub fn load_grid<P: AsRef<Path>>(path: P, tile_size: f32) -> Result<Grid, MapError> {
    let src = fs::read_to_string(path)?;
    parse_grid(&src, tile_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::grid::TILE_SIZE;

    #[test]
    fn parses_mixed_separators_and_comments() {
        let src = "\
# tiny room
1 1 1 1

1,0,2,1   # material 2
1 1 1 1
";
        let g = parse_grid(src, TILE_SIZE).unwrap();
        assert_eq!((g.cols(), g.rows()), (4, 3));
        assert_eq!(g.cell_at(2, 1), Some(2));
        assert_eq!(g.cell_at(1, 1), Some(0));
        assert!(g.check_enclosed().is_ok());
    }

    #[test]
    fn bad_token_reports_line() {
        let err = parse_grid("1 1\n1 x\n", TILE_SIZE).unwrap_err();
        match err {
            MapError::BadCell { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_id_rejected() {
        assert!(matches!(
            parse_grid("1 300\n", TILE_SIZE),
            Err(MapError::BadCell { line: 1, .. })
        ));
    }

    #[test]
    fn ragged_rows_surface_grid_error() {
        assert!(matches!(
            parse_grid("1 1 1\n1 1\n", TILE_SIZE),
            Err(MapError::Grid(GridError::Ragged { row: 1, .. }))
        ));
        assert!(matches!(
            parse_grid("# nothing\n", TILE_SIZE),
            Err(MapError::Grid(GridError::Empty))
        ));
    }

    #[test]
    fn tiny_tile_is_rejected() {
        assert!(matches!(
            parse_grid("1 1\n1 1\n", 0.5),
            Err(MapError::Grid(GridError::BadTileSize(_)))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_grid("/definitely/not/here.map", TILE_SIZE),
            Err(MapError::Io(_))
        ));
    }
}
