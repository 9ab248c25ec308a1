use crate::core::annotate::draw::stamp_text;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::selection_rect::SelectionRect;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::pixel_to_plane;
use std::error::Error;
use std::fmt;

const ANNOTATION_MARGIN: i32 = 2;
const ANNOTATION_LINE_STEP: i32 = 7;

#[derive(Debug, PartialEq)]
pub enum CaptureError {
    EmptySelection { width: i32, height: i32 },
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection { width, height } => {
                write!(f, "nothing to capture: selection is {}x{}", width, height)
            }
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for CaptureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptySelection { .. } => None,
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for CaptureError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// A captured selection: the extracted sub-image with its plane coordinates
/// stamped into the pixels, plus the same coordinates as data so the caller
/// can name the artifact. The caller owns persistence.
#[derive(Debug, PartialEq)]
pub struct CaptureArtifact {
    pub image: PixelBuffer,
    pub center: Complex,
    /// The scale at which the captured region would fill the source buffer
    /// at the same apparent detail.
    pub scale: f64,
}

/// Extracts the selected rectangle from an already-rendered buffer.
///
/// Corners may arrive in any order; the rect is normalized and clipped to
/// the buffer. A selection without area aborts the capture: no artifact is
/// produced and the caller must not try to save one.
pub fn capture_region(
    buffer: &PixelBuffer,
    selection: SelectionRect,
    live: &Viewport,
) -> Result<CaptureArtifact, CaptureError> {
    let rect = selection
        .normalized()
        .clamped_to(buffer.width(), buffer.height());

    if rect.width <= 0 || rect.height <= 0 {
        return Err(CaptureError::EmptySelection {
            width: rect.width,
            height: rect.height,
        });
    }

    let center = pixel_to_plane(
        f64::from(rect.left) + f64::from(rect.width) / 2.0,
        f64::from(rect.top) + f64::from(rect.height) / 2.0,
        buffer.width(),
        buffer.height(),
        live,
    );

    let width_ratio = f64::from(buffer.width()) / f64::from(rect.width);
    let height_ratio = f64::from(buffer.height()) / f64::from(rect.height);
    let scale = live.scale * width_ratio.min(height_ratio);

    let mut image = buffer.sub_image(
        rect.left as u32,
        rect.top as u32,
        rect.width as u32,
        rect.height as u32,
    )?;

    stamp_text(
        &mut image,
        ANNOTATION_MARGIN,
        ANNOTATION_MARGIN,
        &format!("{:.6} {:.6}", center.re, center.im),
        Colour::WHITE,
    );
    stamp_text(
        &mut image,
        ANNOTATION_MARGIN,
        ANNOTATION_MARGIN + ANNOTATION_LINE_STEP,
        &format!("{:.1e}", scale),
        Colour::WHITE,
    );

    Ok(CaptureArtifact { image, center, scale })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    fn rect(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> SelectionRect {
        SelectionRect::new(
            Point { x: start_x, y: start_y },
            Point { x: end_x, y: end_y },
        )
    }

    #[test]
    fn test_full_buffer_selection_reproduces_the_live_viewport() {
        let buffer = PixelBuffer::new(800, 600).unwrap();
        let live = Viewport::new(-0.743, 0.131, 3200.0, 800).unwrap();

        let artifact = capture_region(&buffer, rect(0, 0, 800, 600), &live).unwrap();

        assert_eq!(artifact.center.re, live.center_x);
        assert_eq!(artifact.center.im, live.center_y);
        assert_eq!(artifact.scale, live.scale);
        assert_eq!(artifact.image.width(), 800);
        assert_eq!(artifact.image.height(), 600);
    }

    #[test]
    fn test_half_size_selection_doubles_the_export_scale() {
        let buffer = PixelBuffer::new(800, 600).unwrap();
        let live = Viewport::default();

        let artifact = capture_region(&buffer, rect(200, 150, 600, 450), &live).unwrap();

        assert_eq!(artifact.scale, live.scale * 2.0);
        assert_eq!(artifact.center.re, 0.0);
        assert_eq!(artifact.center.im, 0.0);
    }

    #[test]
    fn test_narrow_selection_uses_the_smaller_fill_ratio() {
        let buffer = PixelBuffer::new(800, 600).unwrap();
        let live = Viewport::default();

        // 100 wide (ratio 8), 300 tall (ratio 2): the smaller ratio wins so
        // the whole selection stays inside the re-rendered frame.
        let artifact = capture_region(&buffer, rect(0, 0, 100, 300), &live).unwrap();

        assert_eq!(artifact.scale, live.scale * 2.0);
    }

    #[test]
    fn test_reversed_corners_are_normalized() {
        let buffer = PixelBuffer::new(800, 600).unwrap();
        let live = Viewport::default();

        let forward = capture_region(&buffer, rect(200, 150, 600, 450), &live).unwrap();
        let backward = capture_region(&buffer, rect(600, 450, 200, 150), &live).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_zero_area_selection_produces_no_artifact() {
        let buffer = PixelBuffer::new(800, 600).unwrap();
        let live = Viewport::default();

        assert_eq!(
            capture_region(&buffer, rect(40, 40, 40, 90), &live),
            Err(CaptureError::EmptySelection { width: 0, height: 50 })
        );
        assert_eq!(
            capture_region(&buffer, rect(40, 40, 40, 40), &live),
            Err(CaptureError::EmptySelection { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_selection_hanging_off_the_buffer_is_clipped() {
        let buffer = PixelBuffer::new(100, 100).unwrap();
        let live = Viewport::default();

        let artifact = capture_region(&buffer, rect(80, 80, 150, 150), &live).unwrap();

        assert_eq!(artifact.image.width(), 20);
        assert_eq!(artifact.image.height(), 20);
    }

    #[test]
    fn test_annotation_is_stamped_into_the_pixels() {
        // Source buffer is all zeros, so any white pixel comes from the stamp.
        let buffer = PixelBuffer::new(400, 300).unwrap();
        let live = Viewport::default();

        let artifact = capture_region(&buffer, rect(0, 0, 400, 300), &live).unwrap();

        let stamped = (0..artifact.image.width() as i32).any(|x| {
            (0..16).any(|y| artifact.image.pixel_at(Point { x, y }) == Some(Colour::WHITE))
        });
        assert!(stamped);
    }
}
