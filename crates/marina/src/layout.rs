//! Grid geometry.
//!
//! The geometry provider computes each item's resting (unmagnified)
//! position once per layout; the position resolver derives a target
//! position from a target scale, spreading magnified items apart along the
//! row axis so neighbors don't visually collide. Everything here is a pure
//! function of its inputs — animation happens elsewhere.

use kinetic::{Point, Vec2};

/// Computes resting positions for a row-major fixed-column grid.
///
/// Row `r`, column `c` maps to `(c * (item_size + spacing),
/// r * (item_size + spacing))`. An item count of zero yields an empty
/// vector; zero columns are treated as one.
///
/// # Example
///
/// ```rust
/// use marina::layout::resting_positions;
///
/// let positions = resting_positions(6, 3, 48.0, 8.0);
/// assert_eq!(positions.len(), 6);
/// assert_eq!(positions[4].x, 56.0); // row 1, column 1
/// assert_eq!(positions[4].y, 56.0);
/// ```
#[must_use]
pub fn resting_positions(
    item_count: usize,
    columns: usize,
    item_size: f64,
    spacing: f64,
) -> Vec<Point> {
    let columns = columns.max(1);
    let pitch = item_size + spacing;

    (0..item_count)
        .map(|i| {
            let row = i / columns;
            let col = i % columns;
            Point::new(col as f64 * pitch, row as f64 * pitch)
        })
        .collect()
}

/// Returns the center of an item whose top-left corner is at `position`.
#[must_use]
pub fn center_of(position: Point, item_size: f64) -> Point {
    position + Vec2::new(item_size / 2.0, item_size / 2.0)
}

/// Derives a target position from a resting position and a target scale.
///
/// The offset is proportional to `(scale - 1) * item_size * shift_factor`
/// and points along the row axis, away from the row's midline: items left
/// of center shift left, items right of center shift right, and an item on
/// the midline stays put. At scale 1 the resting position is returned
/// exactly. A non-finite scale contributes no offset.
#[must_use]
pub fn resolved_position(
    resting: Point,
    scale: f64,
    item_size: f64,
    shift_factor: f64,
    column: usize,
    columns: usize,
) -> Point {
    let magnitude = if scale.is_finite() && shift_factor.is_finite() {
        (scale - 1.0) * item_size * shift_factor
    } else {
        0.0
    };

    let columns = columns.max(1);
    let midline = (columns - 1) as f64 / 2.0;
    let lean = column as f64 - midline;
    let direction = if lean == 0.0 { 0.0 } else { lean.signum() };

    resting + Vec2::new(magnitude * direction, 0.0)
}
