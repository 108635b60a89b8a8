//! Oracle steppers over plain `state[y][x]` matrices.
//!
//! These share no code with the engine. Wrap is computed with
//! `rem_euclid`, which agrees with the engine's one-step wrap for unit
//! offsets on every size.

/// Live neighbours of `(x, y)` on a square torus, counting every one of
/// the 8 slots even when they coincide.
pub fn live_neighbours(state: &[Vec<bool>], x: usize, y: usize) -> u8 {
    let n = state.len() as isize;
    let mut count = 0;
    for dy in -1..=1isize {
        for dx in -1..=1isize {
            if (dx, dy) == (0, 0) {
                continue;
            }
            let nx = (x as isize + dx).rem_euclid(n) as usize;
            let ny = (y as isize + dy).rem_euclid(n) as usize;
            if state[ny][nx] {
                count += 1;
            }
        }
    }
    count
}

fn rule(alive: bool, n: u8) -> bool {
    n == 3 || (alive && n == 2)
}

/// One correct generation: every count is read from the input.
pub fn step_buffered(state: &[Vec<bool>]) -> Vec<Vec<bool>> {
    (0..state.len())
        .map(|y| {
            (0..state.len())
                .map(|x| rule(state[y][x], live_neighbours(state, x, y)))
                .collect()
        })
        .collect()
}

/// One *incorrect* generation: cells are overwritten row-major while
/// later cells still read their neighbours from the same matrix.
pub fn step_in_place(state: &mut [Vec<bool>]) {
    for y in 0..state.len() {
        for x in 0..state.len() {
            let n = live_neighbours(state, x, y);
            state[y][x] = rule(state[y][x], n);
        }
    }
}
