use crate::point::Point;

/// Squared escape radius: the orbit has escaped once `|z|² > 4` (`|z| > 2`).
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Count how many iterations of `z ← z² + c` the point `c = (x, y)` survives
/// before its orbit leaves the escape circle.
///
/// Returns a value in `[0, max_iterations]`. A return value equal to
/// `max_iterations` means the orbit did not escape within the bound and the
/// point is presumed inside the set; callers render it with the interior
/// color rather than a palette entry.
///
/// The complex map is decomposed into real arithmetic so the loop carries no
/// temporaries beyond the two accumulators:
///
/// ```text
/// x' = x_acc² − y_acc² + x
/// y' = 2·x_acc·y_acc + y
/// ```
///
/// Pure and deterministic over IEEE doubles. The escape check caps magnitude
/// growth long before overflow, so no NaN/infinity handling is needed for
/// finite inputs.
#[inline]
pub fn iterations(x: f64, y: f64, max_iterations: u32) -> u32 {
    let mut x_acc = 0.0_f64;
    let mut y_acc = 0.0_f64;
    let mut i = 0u32;

    while x_acc * x_acc + y_acc * y_acc <= ESCAPE_RADIUS_SQ && i < max_iterations {
        let x_temp = x_acc * x_acc - y_acc * y_acc + x;
        y_acc = 2.0 * x_acc * y_acc + y;
        x_acc = x_temp;
        i += 1;
    }

    i
}

/// [`iterations`] over a [`Point`] produced by the viewport transform.
#[inline]
pub fn iterations_at(point: Point, max_iterations: u32) -> u32 {
    iterations(point.x, point.y, max_iterations)
}
