use crate::geom::coordinate::Point;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point>,
    closed: bool,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Polyline {
            points,
            closed: false,
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point)
    }

    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed
    }
}
