use log::{debug, trace, warn};

use crate::{
    color::ColorRgb,
    content::{ContentToken, ContentTokenizer, TokenSource},
    error::{PdfError, Result},
    geom::{
        coordinate::{Matrix, Point},
        path::Path,
    },
    object::PdfObject,
    page::{
        clip::{resolve_clip, GeoClipper, PathClipper},
        graphics_state::GraphicsContext,
        op_kind::{OpKind, PaintStyle},
        operator::Operator,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Deepest `q` nesting accepted before giving up.
    pub max_depth: usize,
    /// Segments per cubic curve when paths are flattened for clipping.
    pub curve_resolution: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        InterpreterOptions {
            max_depth: 128,
            curve_resolution: 20,
        }
    }
}

/// Runs content stream operators and collects the painted paths.
pub struct Interpreter {
    options: InterpreterOptions,
    clipper: Box<dyn PathClipper>,
    scopes_entered: usize,
}

impl Interpreter {
    pub fn new(options: InterpreterOptions) -> Self {
        let clipper = GeoClipper::new(options.curve_resolution);
        Interpreter::with_clipper(options, Box::new(clipper))
    }

    pub fn with_clipper(options: InterpreterOptions, clipper: Box<dyn PathClipper>) -> Self {
        Interpreter {
            options,
            clipper,
            scopes_entered: 0,
        }
    }

    /// Number of `q` scopes entered by the last call to `interpret`.
    pub fn scopes_entered(&self) -> usize {
        self.scopes_entered
    }

    /// Pulls `source` until it is exhausted or an unmatched `Q` is reached.
    ///
    /// Paths come back in the order their painting operators appear.
    pub fn interpret<S: TokenSource>(
        &mut self,
        source: &mut S,
        context: Option<GraphicsContext>,
    ) -> Result<Vec<Path>> {
        self.scopes_entered = 0;
        let context = context.unwrap_or_default();
        self.run_scope(source, context, 0)
    }

    fn run_scope(
        &mut self,
        source: &mut dyn TokenSource,
        mut context: GraphicsContext,
        depth: usize,
    ) -> Result<Vec<Path>> {
        let mut output = Vec::new();
        let mut operands = Vec::new();
        while let Some(token) = source.next_token() {
            match token? {
                ContentToken::Operand(obj) => operands.push(obj),
                ContentToken::ImageData(data) => {
                    trace!("skip inline image data {} bytes", data.len());
                }
                ContentToken::Operator(name) => {
                    let op = Operator::new(name, std::mem::take(&mut operands));
                    match OpKind::from_keyword(op.name()) {
                        OpKind::SaveState => {
                            let nested = self.push_graph_state(source, &context, depth)?;
                            output.extend(nested);
                        }
                        OpKind::RestoreState => {
                            if depth == 0 {
                                warn!("Q without matching q, stop interpreting");
                            }
                            return Ok(output);
                        }
                        kind => self.invoke_operator(kind, &op, &mut context, &mut output)?,
                    }
                }
            }
        }
        Ok(output)
    }

    // q
    fn push_graph_state(
        &mut self,
        source: &mut dyn TokenSource,
        context: &GraphicsContext,
        depth: usize,
    ) -> Result<Vec<Path>> {
        if depth >= self.options.max_depth {
            return Err(PdfError::NestingTooDeep(self.options.max_depth));
        }
        self.scopes_entered += 1;
        trace!("enter scope {}", depth + 1);
        self.run_scope(source, context.clone(), depth + 1)
    }

    fn invoke_operator(
        &self,
        kind: OpKind,
        op: &Operator,
        context: &mut GraphicsContext,
        output: &mut Vec<Path>,
    ) -> Result<()> {
        match kind {
            OpKind::Ignored => {
                debug!("ignore operator {}", op);
                Ok(())
            }
            OpKind::Unhandled => {
                warn!("unhandled operator {}", op);
                Ok(())
            }
            OpKind::ConcatMatrix => modify_current_transform_matrix(op, context),
            OpKind::MoveTo => move_to(op, context),
            OpKind::LineTo => line_to(op, context),
            OpKind::CurveTo => curve_to(op, context),
            OpKind::CurveToInitialDuplicate => curve_first_point_duplicate(op, context),
            OpKind::CurveToFinalDuplicate => curve_fourth_point_duplicate(op, context),
            OpKind::Rectangle => rectangle(op, context),
            OpKind::ClosePath => {
                close_sub_path(context);
                Ok(())
            }
            OpKind::SetLineWidth => {
                context.line_width = op.number(0)?;
                Ok(())
            }
            OpKind::SetStrokeColor => {
                if let Some(color) = color_operands(op)? {
                    context.path.set_stroke_color(color);
                }
                Ok(())
            }
            OpKind::SetFillColor => {
                if let Some(color) = color_operands(op)? {
                    context.path.set_fill_color(color);
                }
                Ok(())
            }
            OpKind::Paint(style) => self.paint_path(style, context, output),
            OpKind::EndPath => self.end_path(context, output),
            OpKind::Clip => {
                context.add_clip();
                Ok(())
            }
            OpKind::Unknown => {
                warn!("unknown operator {}", op);
                Ok(())
            }
            // scope operators never reach here
            OpKind::SaveState | OpKind::RestoreState => Ok(()),
        }
    }

    // S s f f* B B* b b*
    fn paint_path(
        &self,
        style: PaintStyle,
        context: &mut GraphicsContext,
        output: &mut Vec<Path>,
    ) -> Result<()> {
        let width = if style.stroked {
            context.line_width
        } else {
            0.0
        };
        let path = &mut context.path;
        path.set_fill_rule(style.fill_rule);
        if style.close {
            path.close();
        }
        path.set_filled(style.filled);
        path.set_stroke_width(width);
        self.emit(context, output)
    }

    // n
    fn end_path(&self, context: &GraphicsContext, output: &mut Vec<Path>) -> Result<()> {
        self.emit(context, output)
    }

    fn emit(&self, context: &GraphicsContext, output: &mut Vec<Path>) -> Result<()> {
        let path = resolve_clip(self.clipper.as_ref(), context, context.path())?;
        trace!("emit path with {} segments", path.segments().len());
        output.push(path);
        Ok(())
    }
}

// cm
fn modify_current_transform_matrix(op: &Operator, context: &mut GraphicsContext) -> Result<()> {
    let a = op.number(0)?;
    let b = op.number(1)?;
    let c = op.number(2)?;
    let d = op.number(3)?;
    let e = op.number(4)?;
    let f = op.number(5)?;
    context.update_ctm_matrix(&Matrix::new(a, b, c, d, e, f));
    Ok(())
}

// m
fn move_to(op: &Operator, context: &mut GraphicsContext) -> Result<()> {
    let point = Point::new(op.number(0)?, op.number(1)?);
    context.path.clear();
    context.current_point = point;
    context.start_point = point;
    let to = context.transform(point);
    trace!("move to {:?}", to);
    context.path.move_to(to);
    Ok(())
}

// l
fn line_to(op: &Operator, context: &mut GraphicsContext) -> Result<()> {
    let point = Point::new(op.number(0)?, op.number(1)?);
    let to = context.transform(point);
    trace!("line to {:?}", to);
    context.path.line_to(to);
    context.current_point = point;
    Ok(())
}

// c
fn curve_to(op: &Operator, context: &mut GraphicsContext) -> Result<()> {
    let p1 = Point::new(op.number(0)?, op.number(1)?);
    let p2 = Point::new(op.number(2)?, op.number(3)?);
    let p3 = Point::new(op.number(4)?, op.number(5)?);
    append_curve(context, p1, p2, p3);
    Ok(())
}

// v
fn curve_first_point_duplicate(op: &Operator, context: &mut GraphicsContext) -> Result<()> {
    let p2 = Point::new(op.number(0)?, op.number(1)?);
    let p3 = Point::new(op.number(2)?, op.number(3)?);
    let p1 = context.current_point;
    append_curve(context, p1, p2, p3);
    Ok(())
}

// y
fn curve_fourth_point_duplicate(op: &Operator, context: &mut GraphicsContext) -> Result<()> {
    let p1 = Point::new(op.number(0)?, op.number(1)?);
    let p3 = Point::new(op.number(2)?, op.number(3)?);
    append_curve(context, p1, p3, p3);
    Ok(())
}

fn append_curve(context: &mut GraphicsContext, p1: Point, p2: Point, p3: Point) {
    let c1 = context.transform(p1);
    let c2 = context.transform(p2);
    let to = context.transform(p3);
    trace!("curve to {:?} {:?} {:?}", c1, c2, to);
    context.path.curve_to(c1, c2, to);
    context.current_point = p3;
}

// re
fn rectangle(op: &Operator, context: &mut GraphicsContext) -> Result<()> {
    let x = op.number(0)?;
    let y = op.number(1)?;
    let width = op.number(2)?;
    let height = op.number(3)?;
    let corners = [
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
    .map(|p| context.transform(p));

    context.path.clear();
    context.path.move_to(corners[0]);
    for corner in corners.iter().skip(1) {
        context.path.line_to(*corner);
    }
    context.path.close();
    trace!("rectangle {:?}", corners);
    // the pen is left on the transformed corner, unlike every other operator
    context.current_point = corners[0];
    context.start_point = corners[0];
    Ok(())
}

// h
fn close_sub_path(context: &mut GraphicsContext) {
    if context.path.is_empty() || context.path.ends_with_close() {
        return;
    }
    let start = context.transform(context.start_point);
    context.path.line_to(start);
    context.path.close();
    context.current_point = context.start_point;
}

// G RG SCN g rg scn
fn color_operands(op: &Operator) -> Result<Option<ColorRgb>> {
    let mut values = Vec::with_capacity(op.num_operands());
    for operand in op.operands() {
        match operand {
            PdfObject::Number(n) => values.push(n.real()),
            _ => {
                warn!("color with non numeric operand {}, keep current color", op);
                return Ok(None);
            }
        }
    }
    ColorRgb::from_components(values.as_slice()).map(Some)
}

/// Interprets `source` with the default options.
pub fn interpret<S: TokenSource>(
    source: &mut S,
    context: Option<GraphicsContext>,
) -> Result<Vec<Path>> {
    Interpreter::new(InterpreterOptions::default()).interpret(source, context)
}

/// Tokenizes and interprets raw, already decoded content stream bytes.
pub fn interpret_content(content: &[u8]) -> Result<Vec<Path>> {
    let mut source = ContentTokenizer::new(content.to_vec());
    interpret(&mut source, None)
}
