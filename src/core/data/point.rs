/// A pixel position relative to a render buffer's top-left corner.
///
/// Signed so that in-flight drag gestures may momentarily leave the buffer;
/// everything that writes pixels clips or bounds-checks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_compare_by_value() {
        assert_eq!(Point { x: 3, y: -7 }, Point { x: 3, y: -7 });
        assert_ne!(Point { x: 3, y: -7 }, Point { x: -7, y: 3 });
    }
}
