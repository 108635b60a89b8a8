//! Decoding pixel rows into an initial-state matrix.
//!
//! Image file formats and I/O belong to the caller. Once a caller has the
//! pixels as RGB triples, [`state_from_rgb`] applies the decoding rule:
//! a pixel is alive unless it is pure black.

/// An 8-bit RGB pixel.
pub type Rgb = [u8; 3];

/// The only colour that decodes to a dead cell.
pub const BLACK: Rgb = [0, 0, 0];

/// Alive iff the pixel is not exactly black.
pub fn pixel_is_alive(pixel: Rgb) -> bool {
    pixel != BLACK
}

/// Convert row-major pixel rows into a boolean matrix.
///
/// Shape is preserved as-is; squareness is checked when the matrix is
/// handed to [`Grid::from_state`](crate::Grid::from_state).
///
/// ```
/// use torlife_engine::initial::state_from_rgb;
///
/// let pixels = vec![
///     vec![[0, 0, 0], [255, 255, 255]],
///     vec![[1, 0, 0], [0, 0, 0]],
/// ];
/// assert_eq!(
///     state_from_rgb(&pixels),
///     vec![vec![false, true], vec![true, false]]
/// );
/// ```
pub fn state_from_rgb<R: AsRef<[Rgb]>>(rows: &[R]) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|row| row.as_ref().iter().copied().map(pixel_is_alive).collect())
        .collect()
}
