use crate::core::data::complex::Complex;

/// Escape radius squared for the quadratic recurrence.
const ESCAPE_MAGNITUDE_SQUARED: f64 = 4.0;

/// Counts iterations of `z = z^2 + c` until the orbit leaves the disk of
/// radius 2, up to `max_iterations`.
///
/// The orbit starts at `c` itself, not at the origin. That seeding shifts
/// every escape band by one step and is part of this renderer's look;
/// changing it to the textbook form changes the whole image.
///
/// Returns `max_iterations` as the did-not-escape sentinel. A genuine escape
/// can return at most `max_iterations - 1`, so the sentinel is unambiguous.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_MAGNITUDE_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}
