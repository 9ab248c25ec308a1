use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Maps a buffer-relative pixel position to its point in the plane.
///
/// The horizontal axis is stretched by the buffer's aspect ratio so that one
/// plane unit spans `scale` pixels vertically regardless of window shape.
/// Pixel positions are `f64` so callers can address half-pixel centers.
#[must_use]
pub fn pixel_to_plane(px: f64, py: f64, width: u32, height: u32, viewport: &Viewport) -> Complex {
    let aspect = f64::from(width) / f64::from(height);
    let re = ((px - f64::from(width) / 2.0) / viewport.scale) * aspect + viewport.center_x;
    let im = (py - f64::from(height) / 2.0) / viewport.scale + viewport.center_y;

    Complex { re, im }
}

/// Exact inverse of [`pixel_to_plane`]; used to place overlay marks at the
/// pixel under a known plane point.
#[must_use]
pub fn plane_to_pixel(point: Complex, width: u32, height: u32, viewport: &Viewport) -> (f64, f64) {
    let aspect = f64::from(width) / f64::from(height);
    let px = (point.re - viewport.center_x) / aspect * viewport.scale + f64::from(width) / 2.0;
    let py = (point.im - viewport.center_y) * viewport.scale + f64::from(height) / 2.0;

    (px, py)
}
