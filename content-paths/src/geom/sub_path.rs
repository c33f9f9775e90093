use crate::geom::{bezier::BezierCubic, coordinate::Point, polyline::Polyline};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Two control points and the end point, the start is the previous pen position.
    CurveTo(Point, Point, Point),
    Closed,
}

/// Flattens a segment list into one polyline per subpath.
pub(crate) struct SubPathFlattener {
    resolution: usize,
    rings: Vec<Polyline>,
    current: Option<Polyline>,
    start: Option<Point>,
}

impl SubPathFlattener {
    pub fn new(resolution: usize) -> Self {
        SubPathFlattener {
            resolution,
            rings: Vec::new(),
            current: None,
            start: None,
        }
    }

    fn finish(&mut self, closed: bool) {
        if let Some(mut ring) = self.current.take() {
            ring.set_closed(closed);
            self.rings.push(ring);
        }
    }

    // a drawing segment after a close starts again from the subpath start
    fn ring_from(&mut self, fallback: Point) -> &mut Polyline {
        let origin = self.start.unwrap_or(fallback);
        self.current
            .get_or_insert_with(|| Polyline::new(vec![origin]))
    }

    pub fn push(&mut self, seg: &PathSegment) {
        match seg {
            PathSegment::MoveTo(p) => {
                self.finish(false);
                self.start = Some(*p);
                self.current = Some(Polyline::new(vec![*p]));
            }
            PathSegment::LineTo(p) => {
                self.ring_from(*p).push(*p);
            }
            PathSegment::CurveTo(c1, c2, to) => {
                let resolution = self.resolution;
                let ring = self.ring_from(*c1);
                let p0 = ring.last().copied().unwrap_or(*c1);
                let curve = BezierCubic::new(p0, *c1, *c2, *to);
                for p in curve.flatten(resolution) {
                    ring.push(p);
                }
            }
            PathSegment::Closed => self.finish(true),
        }
    }

    pub fn into_polylines(mut self) -> Vec<Polyline> {
        self.finish(false);
        self.rings
    }
}
