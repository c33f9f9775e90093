use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use log::trace;

use crate::error::{PdfError, Result};
use crate::geom::{
    coordinate::Point,
    path::{FillRule, Path},
    polyline::Polyline,
};
use crate::page::graphics_state::GraphicsContext;

/// Polygon boolean intersection used to apply a clip region to an emitted path.
pub trait PathClipper {
    /// Outlines of the area covered by both `clip` and `subject`.
    fn intersect(&self, clip: &Path, subject: &Path) -> Result<Vec<Polyline>>;
}

/// `PathClipper` on top of `geo`'s boolean operations.
///
/// Every subpath is read as a polygon ring, curves flattened into
/// `curve_resolution` segments. Rings of one path are united for the nonzero
/// rule and xor-ed for the even-odd rule.
#[derive(Debug, Clone)]
pub struct GeoClipper {
    curve_resolution: usize,
}

impl Default for GeoClipper {
    fn default() -> Self {
        GeoClipper::new(20)
    }
}

impl GeoClipper {
    pub fn new(curve_resolution: usize) -> Self {
        GeoClipper { curve_resolution }
    }

    fn region(&self, path: &Path) -> Result<MultiPolygon<f64>> {
        let mut region = MultiPolygon::new(Vec::new());
        for ring in path.to_polylines(self.curve_resolution) {
            if ring.len() < 3 {
                continue;
            }
            let mut coords = Vec::with_capacity(ring.len() + 1);
            for p in ring.points() {
                if !p.is_finite() {
                    return Err(PdfError::Clip(format!("non finite point {:?}", p)));
                }
                coords.push(Coord {
                    x: p.x() as f64,
                    y: p.y() as f64,
                });
            }
            let polygon = MultiPolygon::new(vec![Polygon::new(LineString::new(coords), vec![])]);
            region = match path.fill_rule() {
                FillRule::NonZero => region.union(&polygon),
                FillRule::EvenOdd => region.xor(&polygon),
            };
        }
        Ok(region)
    }
}

impl PathClipper for GeoClipper {
    fn intersect(&self, clip: &Path, subject: &Path) -> Result<Vec<Polyline>> {
        let clip_region = self.region(clip)?;
        let subject_region = self.region(subject)?;
        let result = clip_region.intersection(&subject_region);

        let mut polylines = Vec::new();
        for polygon in result.0.iter() {
            polylines.push(ring_to_polyline(polygon.exterior()));
            for interior in polygon.interiors() {
                polylines.push(ring_to_polyline(interior));
            }
        }
        Ok(polylines)
    }
}

fn ring_to_polyline(ring: &LineString<f64>) -> Polyline {
    let mut coords = ring.0.as_slice();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords = &coords[..coords.len() - 1];
    }
    let mut polyline = Polyline::new(
        coords
            .iter()
            .map(|c| Point::new(c.x as f32, c.y as f32))
            .collect(),
    );
    polyline.set_closed(true);
    polyline
}

/// Applies the context's clip region to `path`.
///
/// Without an enabled clip the path comes back unchanged. Otherwise the
/// result keeps the paint attributes of `path`, each clipped outline becomes
/// one subpath and is closed again only when `path` itself ended closed.
pub fn resolve_clip(
    clipper: &dyn PathClipper,
    context: &GraphicsContext,
    path: &Path,
) -> Result<Path> {
    if !context.clip_enabled() {
        return Ok(path.clone());
    }
    let outlines = clipper.intersect(context.clip(), path)?;
    let reclose = path.is_empty() || path.ends_with_close();

    let mut clipped = path.clone();
    clipped.clear();
    for outline in outlines.iter().filter(|o| o.len() >= 2) {
        let mut points = outline.points().iter();
        if let Some(first) = points.next() {
            clipped.move_to(*first);
        }
        for point in points {
            clipped.line_to(*point);
        }
        if reclose {
            clipped.close();
        }
    }
    trace!(
        "clip {} segments to {}",
        path.segments().len(),
        clipped.segments().len()
    );
    Ok(clipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRgb;
    use crate::geom::sub_path::PathSegment;

    fn square(x: f32, y: f32, size: f32) -> Path {
        let mut path = Path::default();
        path.move_to(Point::new(x, y));
        path.line_to(Point::new(x + size, y));
        path.line_to(Point::new(x + size, y + size));
        path.line_to(Point::new(x, y + size));
        path.close();
        path
    }

    fn bounds(path: &Path) -> (f32, f32, f32, f32) {
        let mut b = (f32::MAX, f32::MAX, f32::MIN, f32::MIN);
        for seg in path.segments() {
            if let PathSegment::MoveTo(p) | PathSegment::LineTo(p) = seg {
                b = (b.0.min(p.x()), b.1.min(p.y()), b.2.max(p.x()), b.3.max(p.y()));
            }
        }
        b
    }

    fn clipped_context(clip: &Path) -> GraphicsContext {
        let mut ctx = GraphicsContext::default();
        ctx.path = clip.clone();
        ctx.add_clip();
        ctx.path.clear();
        ctx
    }

    #[test]
    fn test_clip_disabled_returns_copy() {
        let ctx = GraphicsContext::default();
        let path = square(0.0, 0.0, 10.0);
        let res = resolve_clip(&GeoClipper::default(), &ctx, &path).unwrap();
        assert_eq!(res, path);
    }

    #[test]
    fn test_overlapping_squares() {
        let ctx = clipped_context(&square(5.0, 5.0, 10.0));
        let mut path = square(0.0, 0.0, 10.0);
        path.set_fill_color(ColorRgb::new(1.0, 0.0, 0.0));
        let res = resolve_clip(&GeoClipper::default(), &ctx, &path).unwrap();
        assert_eq!(res.fill_color(), &ColorRgb::new(1.0, 0.0, 0.0));
        assert!(res.ends_with_close());
        let (x0, y0, x1, y1) = bounds(&res);
        assert!((x0 - 5.0).abs() < 1e-4 && (y0 - 5.0).abs() < 1e-4);
        assert!((x1 - 10.0).abs() < 1e-4 && (y1 - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_disjoint_clip_is_empty() {
        let ctx = clipped_context(&square(100.0, 100.0, 10.0));
        let res = resolve_clip(&GeoClipper::default(), &ctx, &square(0.0, 0.0, 10.0)).unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn test_open_subject_not_reclosed() {
        let ctx = clipped_context(&square(0.0, 0.0, 100.0));
        let mut path = square(0.0, 0.0, 10.0);
        path.line_to(Point::new(0.0, 0.0));
        let res = resolve_clip(&GeoClipper::default(), &ctx, &path).unwrap();
        assert!(!res.is_empty());
        assert!(!res.ends_with_close());
    }

    #[test]
    fn test_even_odd_hole() {
        let mut subject = square(0.0, 0.0, 10.0);
        subject.append(&square(3.0, 3.0, 4.0));
        subject.set_fill_rule(FillRule::EvenOdd);
        let clip = square(-1.0, -1.0, 20.0);
        let outlines = GeoClipper::default().intersect(&clip, &subject).unwrap();
        assert_eq!(outlines.len(), 2);
        assert!(outlines.iter().all(|o| o.len() == 4 && o.is_closed()));
    }

    #[test]
    fn test_non_finite_is_error() {
        let clip = square(0.0, 0.0, 10.0);
        let subject = square(f32::NAN, 0.0, 10.0);
        let res = GeoClipper::default().intersect(&clip, &subject);
        assert!(matches!(res, Err(PdfError::Clip(_))));
    }
}
