//! Test utilities and pattern fixtures for torlife development.
//!
//! Patterns are written as text, one line per row, `#` (or `o`) for a
//! live cell and `.` (or a space) for a dead one. [`parse_pattern`] turns
//! that text into a boolean matrix and [`place`] drops a pattern onto an
//! empty square board with toroidal wrap, producing the `state[y][x]`
//! shape the engine accepts.
//!
//! [`reference`] holds two deliberately independent steppers used as
//! oracles: a correct buffered one and a broken in-place one.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

/// Parse a text pattern into rows of booleans.
///
/// Leading and trailing blank lines are dropped, as is the common
/// indentation, so patterns can be written inline in an indented raw
/// string. Rows are padded with dead cells to the widest row.
///
/// # Panics
///
/// Panics on any character other than `#`, `o`, `.`, or space.
pub fn parse_pattern(text: &str) -> Vec<Vec<bool>> {
    let lines: Vec<&str> = text
        .lines()
        .skip_while(|l| l.trim().is_empty())
        .collect();
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);
    let lines = &lines[..end];

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut rows: Vec<Vec<bool>> = lines
        .iter()
        .map(|l| {
            l.get(indent..)
                .unwrap_or("")
                .trim_end()
                .chars()
                .map(|c| match c {
                    '#' | 'o' => true,
                    '.' | ' ' => false,
                    other => panic!("unexpected pattern character {other:?}"),
                })
                .collect()
        })
        .collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, false);
    }
    rows
}

/// Place `pattern` on an empty `size x size` board with its top-left
/// corner at `(x, y)`. Cells that run off an edge wrap around.
pub fn place(size: usize, pattern: &[Vec<bool>], (x, y): (usize, usize)) -> Vec<Vec<bool>> {
    let mut board = vec![vec![false; size]; size];
    for (dy, row) in pattern.iter().enumerate() {
        for (dx, &alive) in row.iter().enumerate() {
            if alive {
                board[(y + dy) % size][(x + dx) % size] = true;
            }
        }
    }
    board
}

/// Live `(x, y)` positions of a matrix, row-major.
pub fn live_cells(state: &[Vec<bool>]) -> Vec<(usize, usize)> {
    state
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(move |(x, _)| (x, y))
        })
        .collect()
}
