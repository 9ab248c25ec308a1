use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER_X: f64 = 0.0;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_SCALE: f64 = 200.0;
pub const DEFAULT_ITERATION_BUDGET: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonPositiveScale { scale: f64 },
    ZeroIterationBudget,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { scale } => {
                write!(f, "viewport scale must be positive, got {}", scale)
            }
            Self::ZeroIterationBudget => {
                write!(f, "iteration budget must be at least 1")
            }
        }
    }
}

impl Error for ViewportError {}

/// The current mapping from pixel space to plane space plus the iteration
/// depth to render it at. `scale` is pixels per plane unit.
///
/// Mutated only by navigation transitions; a render takes a copy and never
/// writes back.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
    pub iteration_budget: u32,
}

impl Viewport {
    pub fn new(
        center_x: f64,
        center_y: f64,
        scale: f64,
        iteration_budget: u32,
    ) -> Result<Self, ViewportError> {
        if !(scale > 0.0) {
            return Err(ViewportError::NonPositiveScale { scale });
        }
        if iteration_budget == 0 {
            return Err(ViewportError::ZeroIterationBudget);
        }

        Ok(Self {
            center_x,
            center_y,
            scale,
            iteration_budget,
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            scale: DEFAULT_SCALE,
            iteration_budget: DEFAULT_ITERATION_BUDGET,
        }
    }
}
