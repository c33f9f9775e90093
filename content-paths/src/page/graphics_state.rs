use crate::geom::{
    coordinate::{Matrix, Point},
    path::Path,
};

/// Graphics state of one scope level.
///
/// `q` clones the whole context, so nothing here is shared between levels.
#[derive(Debug, Clone)]
pub struct GraphicsContext {
    pub(crate) ctm: Matrix,
    pub(crate) path: Path,
    pub(crate) current_point: Point,
    pub(crate) start_point: Point,
    pub(crate) line_width: f32,
    pub(crate) clip: Path,
    pub(crate) clip_enabled: bool,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        GraphicsContext {
            ctm: Matrix::default(),
            path: Path::default(),
            current_point: Point::default(),
            start_point: Point::default(),
            line_width: 1.0,
            clip: Path::default(),
            clip_enabled: false,
        }
    }
}

impl GraphicsContext {
    /// A fresh context whose user space is mapped through `ctm`.
    pub fn with_ctm(ctm: Matrix) -> Self {
        GraphicsContext {
            ctm,
            ..Default::default()
        }
    }

    pub fn ctm(&self) -> &Matrix {
        &self.ctm
    }

    // cm
    pub fn update_ctm_matrix(&mut self, matrix: &Matrix) {
        self.ctm = matrix.transform(&self.ctm);
    }

    /// Maps a user space point through the current transform.
    pub fn transform(&self, point: Point) -> Point {
        point.transform(&self.ctm)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current_point(&self) -> Point {
        self.current_point
    }

    pub fn start_point(&self) -> Point {
        self.start_point
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn clip(&self) -> &Path {
        &self.clip
    }

    pub fn clip_enabled(&self) -> bool {
        self.clip_enabled
    }

    // W
    pub(crate) fn add_clip(&mut self) {
        self.clip.append(&self.path);
        self.clip_enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_ctm_applies_new_matrix_first() {
        let mut ctx = GraphicsContext::with_ctm(Matrix::new_scale_matrix(2.0, 2.0));
        ctx.update_ctm_matrix(&Matrix::new_translation_matrix(10.0, 0.0));
        let p = ctx.transform(Point::new(1.0, 1.0));
        assert_eq!(p, Point::new(22.0, 2.0));
    }

    #[test]
    fn test_clip_only_grows() {
        let mut ctx = GraphicsContext::default();
        ctx.path.move_to(Point::new(0.0, 0.0));
        ctx.path.line_to(Point::new(1.0, 0.0));
        ctx.add_clip();
        ctx.path.clear();
        ctx.add_clip();
        assert!(ctx.clip_enabled());
        assert_eq!(ctx.clip().segments().len(), 2);
        assert_eq!(ctx.line_width(), 1.0);
    }
}
