use crate::geom::coordinate::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCubic {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl BezierCubic {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        BezierCubic { p0, p1, p2, p3 }
    }

    pub fn point_at(&self, t: f32) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.p0.x() + b * self.p1.x() + c * self.p2.x() + d * self.p3.x(),
            a * self.p0.y() + b * self.p1.y() + c * self.p2.y() + d * self.p3.y(),
        )
    }

    /// Points after `p0` up to and including `p3`, `resolution` segments.
    pub fn flatten(&self, resolution: usize) -> Vec<Point> {
        let n = resolution.max(1);
        (1..=n).map(|i| self.point_at(i as f32 / n as f32)).collect()
    }
}
