use crate::color::ColorRgb;
use crate::geom::{
    coordinate::Point,
    polyline::Polyline,
    sub_path::{PathSegment, SubPathFlattener},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Drawing commands in output space plus the paint attributes they are emitted with.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
    fill_color: ColorRgb,
    stroke_color: ColorRgb,
    stroke_width: f32,
    filled: bool,
    fill_rule: FillRule,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            segments: Vec::new(),
            fill_color: ColorRgb::default(),
            stroke_color: ColorRgb::default(),
            stroke_width: 0.0,
            filled: true,
            fill_rule: FillRule::NonZero,
        }
    }
}

impl Path {
    pub fn move_to(&mut self, point: Point) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.segments.push(PathSegment::LineTo(point));
    }

    pub fn curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.segments.push(PathSegment::CurveTo(c1, c2, to));
    }

    /// Appends a close command unless the path is empty or already closed.
    pub fn close(&mut self) {
        if self.segments.is_empty() || self.ends_with_close() {
            return;
        }
        self.segments.push(PathSegment::Closed);
    }

    /// Drops the geometry, paint attributes stay.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Appends the other path's geometry, its attributes are ignored.
    pub fn append(&mut self, other: &Path) {
        self.segments.extend_from_slice(other.segments());
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.segments.as_slice()
    }

    pub fn last_segment(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    pub fn ends_with_close(&self) -> bool {
        matches!(self.last_segment(), Some(PathSegment::Closed))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn to_polylines(&self, resolution: usize) -> Vec<Polyline> {
        let mut flattener = SubPathFlattener::new(resolution);
        for seg in self.segments.iter() {
            flattener.push(seg);
        }
        flattener.into_polylines()
    }

    pub fn fill_color(&self) -> &ColorRgb {
        &self.fill_color
    }

    pub fn set_fill_color(&mut self, color: ColorRgb) {
        self.fill_color = color;
    }

    pub fn stroke_color(&self) -> &ColorRgb {
        &self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: ColorRgb) {
        self.stroke_color = color;
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    pub fn set_fill_rule(&mut self, rule: FillRule) {
        self.fill_rule = rule;
    }
}
