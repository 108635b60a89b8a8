//! torlife Quickstart: build grids both ways and watch them evolve.
//!
//! Demonstrates:
//!   1. Explicit seeding from a text pattern (a glider)
//!   2. Stepping and reading cells back the way a renderer would
//!   3. Seeded random construction from a GridConfig
//!   4. Decoding RGB pixel rows into an initial state
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use torlife_engine::initial::{state_from_rgb, Rgb, BLACK};
use torlife_engine::{Grid, GridConfig};
use torlife_test_utils::{fixtures, parse_pattern, place};

// ─── Grid parameters ────────────────────────────────────────────

const SIZE: usize = 8;
const GLIDER_GENERATIONS: u64 = 4 * SIZE as u64;
const RANDOM_SIZE: u32 = 32;
const RANDOM_SEED: u64 = 42;

/// Draw a frame through `get_cell`, as an external renderer would.
fn render(grid: &Grid) -> String {
    let mut frame = String::new();
    for y in 0..grid.size() {
        frame.push_str("  ");
        for x in 0..grid.size() {
            frame.push(if grid.get_cell(x, y).alive { '#' } else { '.' });
        }
        frame.push('\n');
    }
    frame
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== torlife Quickstart ===\n");

    // 1. A glider on an 8x8 torus.
    let glider = parse_pattern(fixtures::GLIDER);
    let mut grid = Grid::from_state(&place(SIZE, &glider, (0, 0)))?;
    println!("Glider, generation {}:\n{}", grid.generation(), render(&grid));

    // 2. After 4 * SIZE generations it has crossed the whole torus
    //    diagonally and is back where it started.
    for _ in 0..GLIDER_GENERATIONS {
        grid.advance_generation();
        if grid.generation() % 8 == 0 {
            println!("Generation {}:\n{}", grid.generation(), render(&grid));
        }
    }
    let home = place(SIZE, &glider, (0, 0));
    println!(
        "Back home after {} generations: {}\n",
        grid.generation(),
        grid.to_state() == home
    );

    // 3. Seeded random soup.
    let config = GridConfig::random(RANDOM_SIZE)
        .with_ratio(GridConfig::DEFAULT_LIFE_RATIO)
        .with_seed(RANDOM_SEED);
    let mut soup = Grid::from_config(config)?;
    println!(
        "Random {0}x{0} soup (seed {RANDOM_SEED}): population {1}",
        soup.size(),
        soup.population()
    );
    for _ in 0..5 {
        soup.advance_generations(20);
        println!(
            "  generation {:>3}: population {}",
            soup.generation(),
            soup.population()
        );
    }

    // 4. Pixels: anything not pure black is alive.
    const WHITE: Rgb = [255, 255, 255];
    let pixels = vec![
        vec![BLACK, WHITE, BLACK],
        vec![BLACK, WHITE, BLACK],
        vec![BLACK, WHITE, BLACK],
    ];
    let mut from_pixels = Grid::from_state(&state_from_rgb(&pixels))?;
    from_pixels.advance_generation();
    println!("\nVertical bar from pixels after one generation:\n{from_pixels}");

    println!("Done.");
    Ok(())
}
