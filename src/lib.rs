pub mod controllers;
pub mod core;
pub mod storage;

pub use crate::controllers::voyage::voyage_controller;

pub use crate::core::actions::capture_region::{capture_region, CaptureArtifact, CaptureError};
pub use crate::core::actions::render_frame::{
    render_frame, render_frame_cancelable, render_overview, RenderPlan,
};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::selection_rect::SelectionRect;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::navigation::history::ViewportHistory;
pub use crate::core::palette::factory::palette_for_kind;
pub use crate::core::palette::kinds::PaletteKind;
pub use crate::core::palette::palette::Palette;
