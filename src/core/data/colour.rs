/// An opaque RGB colour; alpha is supplied by the pixel buffer on write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Channel-wise linear interpolation from `self` towards `other`,
    /// rounded to the nearest integer. `t` outside `[0, 1]` is clamped.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel =
            |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = Colour { r: 10, g: 20, b: 30 };
        let b = Colour { r: 200, g: 100, b: 0 };

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint_rounds_to_nearest() {
        let a = Colour { r: 0, g: 0, b: 255 };
        let b = Colour { r: 255, g: 101, b: 0 };
        let mid = a.lerp(b, 0.5);

        assert_eq!(mid, Colour { r: 128, g: 51, b: 128 });
    }

    #[test]
    fn test_lerp_clamps_out_of_range_t() {
        let a = Colour { r: 10, g: 10, b: 10 };
        let b = Colour { r: 20, g: 20, b: 20 };

        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
    }
}
