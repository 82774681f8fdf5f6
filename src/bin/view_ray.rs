//! First-person grid viewer.
//!
//! Controls: ↑/W forward · ↓/S back · ←/A →/D turn · M minimap · Esc quit
//!
//! ```bash
//! cargo run --release -- [--map level.txt] [--tile 64] [--no-minimap]
//! ```

use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use raycaster_rs::{
    config::Config,
    engine::Engine,
    sim::{Action, FrameClock},
    world::{Grid, TILE_SIZE, load_grid},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Text map (one row per line, cell ids separated by spaces or commas).
    /// Defaults to the built-in level.
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// World units per tile; the window is `cols·tile × rows·tile` pixels.
    #[arg(long, default_value_t = TILE_SIZE)]
    tile: f32,

    /// Start with the minimap hidden.
    #[arg(long)]
    no_minimap: bool,

    /// Target frame rate.
    #[arg(long)]
    fps: Option<u32>,
}

fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::Up | Key::W => Some(Action::Forward),
        Key::Down | Key::S => Some(Action::Back),
        Key::Left | Key::A => Some(Action::TurnLeft),
        Key::Right | Key::D => Some(Action::TurnRight),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let grid = match &opts.map {
        Some(path) => load_grid(path, opts.tile)?,
        None => Grid::reference().with_tile_size(opts.tile)?,
    };

    let mut config = Config::for_grid(&grid);
    config.show_minimap = !opts.no_minimap;
    if let Some(fps) = opts.fps {
        config.fps = fps;
    }

    println!(
        "map: {}×{} tiles, view {}×{} px",
        grid.cols(),
        grid.rows(),
        config.width,
        config.height
    );

    let mut engine = Engine::new(grid, &config)?;

    let mut win = Window::new(
        "Raycaster",
        config.width,
        config.height,
        WindowOptions::default(),
    )?;
    win.set_target_fps(config.fps as usize);

    let mut clock = FrameClock::new();

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        /* intents: press sets, release clears ------------------------------ */
        let input = &mut engine.player_mut().input;
        for key in win.get_keys_pressed(KeyRepeat::No) {
            if let Some(action) = action_for(key) {
                input.press(action);
            }
        }
        for key in win.get_keys_released() {
            if let Some(action) = action_for(key) {
                input.release(action);
            }
        }
        if win.is_key_pressed(Key::M, KeyRepeat::No) {
            engine.show_minimap = !engine.show_minimap;
        }

        engine.update(clock.tick());

        let mut present = Ok(());
        engine.render_frame(|fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            present = win.update_with_buffer(fb, w, h);
        });
        present?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            let fps = 1000.0 / avg_ms;
            println!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, fps);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
