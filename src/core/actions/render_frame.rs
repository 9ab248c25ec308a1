use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::annotate::draw::stroke_circle;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{write_rgba, PixelBuffer, BYTES_PER_PIXEL};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::quadratic::escape_iterations;
use crate::core::palette::palette::Palette;
use crate::core::util::plane_mapping::{pixel_to_plane, plane_to_pixel};

/// Overview framing constants: a fixed window on the whole set, centered on
/// the main cardioid, shallow iteration depth. Navigation never moves it.
pub const OVERVIEW_CENTER_X: f64 = -0.5;
pub const OVERVIEW_CENTER_Y: f64 = 0.0;
pub const OVERVIEW_SCALE: f64 = 50.0;
pub const OVERVIEW_ITERATIONS: u32 = 50;

/// The parameters one frame is rendered with, snapshotted by value at call
/// start so navigation can mutate its state mid-render without corrupting
/// the frame in flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderPlan {
    view: Viewport,
}

impl RenderPlan {
    /// Frames the live viewport at its own scale and iteration budget.
    #[must_use]
    pub fn live(viewport: &Viewport) -> Self {
        Self { view: *viewport }
    }

    /// The fixed minimap framing, independent of navigation depth.
    #[must_use]
    pub fn overview() -> Self {
        Self {
            view: Viewport {
                center_x: OVERVIEW_CENTER_X,
                center_y: OVERVIEW_CENTER_Y,
                scale: OVERVIEW_SCALE,
                iteration_budget: OVERVIEW_ITERATIONS,
            },
        }
    }

    #[must_use]
    pub fn view(&self) -> &Viewport {
        &self.view
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.view.iteration_budget
    }
}

fn render_row(plan: RenderPlan, palette: &Palette, width: u32, height: u32, py: u32, row: &mut [u8]) {
    let max_iterations = plan.max_iterations();

    for (px, slot) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let c = pixel_to_plane(px as f64, f64::from(py), width, height, plan.view());
        let count = escape_iterations(c, max_iterations);

        // The sentinel marks interior points; everything else maps through
        // the palette on its normalized escape ratio.
        let colour = if count == max_iterations {
            Colour::BLACK
        } else {
            palette.colour_for(f64::from(count) / f64::from(max_iterations))
        };

        write_rgba(slot, colour);
    }
}

/// Fills the whole buffer from the plan's framing. Rows are distributed
/// across rayon's work-stealing scheduler; each row owns a disjoint slice
/// of the buffer, so no synchronization is needed.
pub fn render_frame(plan: RenderPlan, palette: &Palette, buffer: &mut PixelBuffer) {
    let width = buffer.width();
    let height = buffer.height();
    let row_bytes = buffer.row_bytes();

    buffer
        .data_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(py, row)| render_row(plan, palette, width, height, py as u32, row));
}

/// Like [`render_frame`], polling the token once per row. A cancelled frame
/// leaves the buffer partially written; callers discard it rather than
/// display it.
pub fn render_frame_cancelable<C: CancelToken>(
    plan: RenderPlan,
    palette: &Palette,
    buffer: &mut PixelBuffer,
    cancel: &C,
) -> Result<(), Cancelled> {
    let width = buffer.width();
    let height = buffer.height();
    let row_bytes = buffer.row_bytes();

    buffer
        .data_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(py, row)| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }
            render_row(plan, palette, width, height, py as u32, row);
            Ok(())
        })
}

/// Renders the minimap: the fixed overview frame plus a circle marking
/// where the live viewport is looking. The marker radius tracks the live
/// view's plane width scaled into overview pixels, clamped so it stays
/// visible at any zoom depth.
pub fn render_overview(live: &Viewport, palette: &Palette, buffer: &mut PixelBuffer) {
    let plan = RenderPlan::overview();
    render_frame(plan, palette, buffer);

    let width = buffer.width();
    let live_center = Complex::new(live.center_x, live.center_y);
    let (marker_x, marker_y) = plane_to_pixel(live_center, width, buffer.height(), plan.view());

    let radius = (f64::from(width) / live.scale * OVERVIEW_SCALE / 2.0)
        .clamp(1.0, f64::from(width) / 2.0);

    stroke_circle(
        buffer,
        Point {
            x: marker_x.round() as i32,
            y: marker_y.round() as i32,
        },
        radius.round() as i32,
        Colour::WHITE,
    );
}
