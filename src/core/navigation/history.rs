use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::pixel_to_plane;

/// Upper clamp on the zoom-derived iteration budget. Past this, deeper
/// budgets only cost time; double precision has already run out of detail.
pub const MAX_ITERATION_BUDGET: u32 = 1000;

/// Iteration budget derived from zoom depth: deeper views need more
/// iterations to resolve the boundary, roughly 100 per doubling.
#[must_use]
pub fn budget_for_scale(scale: f64) -> u32 {
    (100.0 * scale.log2())
        .floor()
        .clamp(1.0, f64::from(MAX_ITERATION_BUDGET)) as u32
}

/// Navigation state machine: the current viewport plus a stack of the
/// viewports it was zoomed in from. The stack holds priors only, never the
/// current value; undo pops, reset clears. Nothing is persisted across
/// sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportHistory {
    current: Viewport,
    prior: Vec<Viewport>,
}

impl Default for ViewportHistory {
    fn default() -> Self {
        Self {
            current: Viewport::default(),
            prior: Vec::new(),
        }
    }
}

impl ViewportHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Viewport {
        self.current
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.prior.len()
    }

    /// Doubles the scale, re-centering on the plane point under the clicked
    /// pixel, and pushes the outgoing viewport for undo. Returns the new
    /// current viewport for the caller's readout.
    pub fn zoom_in(&mut self, px: i32, py: i32, width: u32, height: u32) -> Viewport {
        let target = pixel_to_plane(f64::from(px), f64::from(py), width, height, &self.current);
        let scale = self.current.scale * 2.0;

        self.prior.push(self.current);
        self.current = Viewport {
            center_x: target.re,
            center_y: target.im,
            scale,
            iteration_budget: budget_for_scale(scale),
        };
        self.current
    }

    /// Restores the most recent prior viewport exactly, including the
    /// iteration budget it was rendered at. A no-op when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> Viewport {
        if let Some(previous) = self.prior.pop() {
            self.current = previous;
        }
        self.current
    }

    /// Back to the home view with an empty stack.
    pub fn reset(&mut self) -> Viewport {
        self.current = Viewport::default();
        self.prior.clear();
        self.current
    }
}
