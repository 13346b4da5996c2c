use imageproc::point::Point;

/// Axis-aligned pixel rectangle within a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing every point, or `None` for an empty
    /// slice. Extents are inclusive: a contour visiting only (3, 3) has a
    /// 1x1 bounding box.
    pub fn of_points(points: &[Point<u32>]) -> Option<Self> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Self::new(
            min_x,
            min_y,
            max_x - min_x + 1,
            max_y - min_y + 1,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_points_single_point() {
        let bounds = Bounds::of_points(&[Point::new(3u32, 3u32)]).unwrap();
        assert_eq!(bounds, Bounds::new(3, 3, 1, 1));
    }

    #[test]
    fn test_of_points_rectangle_outline() {
        let points = [
            Point::new(2u32, 5u32),
            Point::new(9, 5),
            Point::new(9, 12),
            Point::new(2, 12),
        ];
        let bounds = Bounds::of_points(&points).unwrap();
        assert_eq!(bounds, Bounds::new(2, 5, 8, 8));
    }

    #[test]
    fn test_of_points_empty() {
        assert!(Bounds::of_points(&[]).is_none());
    }
}
