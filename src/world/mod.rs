pub mod grid;
pub mod loader;
pub mod rational;

pub use grid::{Cell, EDGE_CELL, EMPTY, Grid, GridError, MAX_TILE_SIZE, TILE_SIZE};

pub use loader::{MapError, load_grid, parse_grid};

pub use rational::{Rotation, from_parameter};
