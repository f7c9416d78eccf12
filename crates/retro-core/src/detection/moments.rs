//! Spatial moments of a closed polygon, computed with Green's theorem.

use imageproc::point::Point;

/// Zeroth and first-order moments of a contour polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    /// Enclosed area.
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    /// Moments of the polygon through `points`, closed from last to first.
    ///
    /// Orientation is ignored: a clockwise trace yields the same (positive)
    /// area as a counter-clockwise one. Fewer than three points enclose no
    /// area.
    pub fn of_polygon(points: &[Point<i32>]) -> Self {
        let n = points.len();
        if n < 3 {
            return Self::default();
        }

        let mut a00 = 0.0_f64;
        let mut a10 = 0.0_f64;
        let mut a01 = 0.0_f64;

        let mut prev = points[n - 1];
        for &cur in points {
            let (xp, yp) = (prev.x as f64, prev.y as f64);
            let (xc, yc) = (cur.x as f64, cur.y as f64);
            let cross = xp * yc - xc * yp;
            a00 += cross;
            a10 += cross * (xp + xc);
            a01 += cross * (yp + yc);
            prev = cur;
        }

        let sign = if a00 < 0.0 { -1.0 } else { 1.0 };
        Self {
            m00: sign * a00 / 2.0,
            m10: sign * a10 / 6.0,
            m01: sign * a01 / 6.0,
        }
    }

    /// Area-weighted center `(x, y)`, or `None` for a contour with no area.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_square_moments() {
        let m = Moments::of_polygon(&pts(&[(90, 90), (110, 90), (110, 110), (90, 110)]));
        assert_eq!(m.m00, 400.0);
        assert_eq!(m.centroid(), Some((100.0, 100.0)));
    }

    #[test]
    fn test_orientation_independent() {
        let ccw = Moments::of_polygon(&pts(&[(0, 0), (4, 0), (4, 2), (0, 2)]));
        let cw = Moments::of_polygon(&pts(&[(0, 0), (0, 2), (4, 2), (4, 0)]));
        assert_eq!(ccw, cw);
        assert_eq!(cw.centroid(), Some((2.0, 1.0)));
    }

    #[test]
    fn test_degenerate_contours_have_no_centroid() {
        assert_eq!(Moments::of_polygon(&pts(&[(3, 3)])).centroid(), None);
        assert_eq!(Moments::of_polygon(&pts(&[(0, 0), (5, 0)])).centroid(), None);
        // Out-and-back trace of a one-pixel-wide line.
        let spur = Moments::of_polygon(&pts(&[(0, 0), (5, 0), (2, 0)]));
        assert_eq!(spur.centroid(), None);
    }

    #[test]
    fn test_triangle_centroid() {
        let m = Moments::of_polygon(&pts(&[(0, 0), (6, 0), (0, 6)]));
        assert_eq!(m.m00, 18.0);
        let (cx, cy) = m.centroid().unwrap();
        assert!((cx - 2.0).abs() < 1e-12);
        assert!((cy - 2.0).abs() < 1e-12);
    }
}
