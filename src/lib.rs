//! Grid raycaster: one ray per screen column, no trigonometry per frame.
//!
//! * [`world`]    – rotation algebra, tile grid, map loading.
//! * [`sim`]      – player movement, input intents, frame clock.
//! * [`engine`]   – ray casting, column projection, frame context.
//! * [`renderer`] – frame buffer, overlay primitives, minimap.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
