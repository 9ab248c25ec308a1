use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    ZeroDimension { width: u32, height: u32 },
    PixelOutsideBounds { pixel: Point, width: u32, height: u32 },
    RegionOutsideBounds { left: u32, top: u32, width: u32, height: u32 },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "pixel buffer dimensions must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideBounds { pixel, width, height } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
            Self::RegionOutsideBounds { left, top, width, height } => {
                write!(
                    f,
                    "region {}x{} at x:{}, y:{} extends past the buffer",
                    width, height, left, top
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// A width x height grid of RGBA quads. The renderer fills it in place and
/// hands it back whole; display is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::ZeroDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the raw RGBA bytes, one row after another. Used by the
    /// renderer to split the buffer into disjoint row slices.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if pixel.x < 0 || pixel.y < 0 || pixel.x >= self.width as i32 || pixel.y >= self.height as i32 {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        let index =
            (pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL;
        write_rgba(&mut self.data[index..index + BYTES_PER_PIXEL], colour);
        Ok(())
    }

    /// Overlay write that silently drops out-of-bounds pixels. Marker and
    /// annotation strokes land partially off-buffer near the edges.
    pub fn put_pixel_clipped(&mut self, pixel: Point, colour: Colour) {
        let _ = self.set_pixel(pixel, colour);
    }

    #[must_use]
    pub fn pixel_at(&self, pixel: Point) -> Option<Colour> {
        if pixel.x < 0 || pixel.y < 0 || pixel.x >= self.width as i32 || pixel.y >= self.height as i32 {
            return None;
        }

        let index =
            (pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL;
        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    /// Copies a `width` x `height` region starting at (`left`, `top`) into a
    /// new buffer.
    pub fn sub_image(
        &self,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
    ) -> Result<PixelBuffer, PixelBufferError> {
        if left + width > self.width || top + height > self.height {
            return Err(PixelBufferError::RegionOutsideBounds { left, top, width, height });
        }

        let mut out = PixelBuffer::new(width, height)?;
        let src_row = self.row_bytes();
        let dst_row = out.row_bytes();

        for row in 0..height as usize {
            let src_start =
                (top as usize + row) * src_row + left as usize * BYTES_PER_PIXEL;
            let dst_start = row * dst_row;
            out.data[dst_start..dst_start + dst_row]
                .copy_from_slice(&self.data[src_start..src_start + dst_row]);
        }

        Ok(out)
    }
}

pub(crate) fn write_rgba(slot: &mut [u8], colour: Colour) {
    slot[0] = colour.r;
    slot[1] = colour.g;
    slot[2] = colour.b;
    slot[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_rgba_buffer() {
        let buffer = PixelBuffer::new(10, 5).unwrap();

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 5);
        assert_eq!(buffer.data().len(), 200); // 10 * 5 * 4
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            PixelBuffer::new(0, 5),
            Err(PixelBufferError::ZeroDimension { width: 0, height: 5 })
        );
        assert_eq!(
            PixelBufferError::ZeroDimension { width: 5, height: 0 },
            PixelBuffer::new(5, 0).unwrap_err()
        );
    }

    #[test]
    fn test_set_pixel_writes_opaque_quad() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        let index = (1 * 3 + 1) * BYTES_PER_PIXEL;
        assert_eq!(&buffer.data()[index..index + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();
        let result = buffer.set_pixel(Point { x: 3, y: 0 }, Colour::WHITE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 0 },
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_put_pixel_clipped_ignores_out_of_bounds() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        buffer.put_pixel_clipped(Point { x: -1, y: 10 }, Colour::WHITE);

        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_at_round_trips_set_pixel() {
        let mut buffer = PixelBuffer::new(4, 4).unwrap();
        let teal = Colour { r: 0, g: 128, b: 128 };

        buffer.set_pixel(Point { x: 2, y: 3 }, teal).unwrap();

        assert_eq!(buffer.pixel_at(Point { x: 2, y: 3 }), Some(teal));
        assert_eq!(buffer.pixel_at(Point { x: 4, y: 3 }), None);
    }

    #[test]
    fn test_sub_image_copies_region() {
        let mut buffer = PixelBuffer::new(4, 4).unwrap();
        buffer
            .set_pixel(Point { x: 1, y: 1 }, Colour { r: 9, g: 8, b: 7 })
            .unwrap();
        buffer
            .set_pixel(Point { x: 2, y: 2 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();

        let sub = buffer.sub_image(1, 1, 2, 2).unwrap();

        assert_eq!(sub.width(), 2);
        assert_eq!(sub.height(), 2);
        assert_eq!(sub.pixel_at(Point { x: 0, y: 0 }), Some(Colour { r: 9, g: 8, b: 7 }));
        assert_eq!(sub.pixel_at(Point { x: 1, y: 1 }), Some(Colour { r: 1, g: 2, b: 3 }));
    }

    #[test]
    fn test_sub_image_rejects_overhang() {
        let buffer = PixelBuffer::new(4, 4).unwrap();

        assert_eq!(
            buffer.sub_image(2, 2, 3, 1),
            Err(PixelBufferError::RegionOutsideBounds {
                left: 2,
                top: 2,
                width: 3,
                height: 1
            })
        );
    }
}
