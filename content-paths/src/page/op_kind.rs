use crate::geom::path::FillRule;

/// How a painting operator finalizes the current path before emitting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintStyle {
    pub fill_rule: FillRule,
    pub close: bool,
    pub filled: bool,
    pub stroked: bool,
}

impl PaintStyle {
    const fn new(fill_rule: FillRule, close: bool, filled: bool, stroked: bool) -> Self {
        PaintStyle {
            fill_rule,
            close,
            filled,
            stroked,
        }
    }
}

/// Handler selected for an operator keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Operands are consumed without any effect.
    Ignored,
    /// Known operator whose effect is not modelled.
    Unhandled,
    SaveState,
    RestoreState,
    ConcatMatrix,
    MoveTo,
    LineTo,
    CurveTo,
    CurveToInitialDuplicate,
    CurveToFinalDuplicate,
    Rectangle,
    ClosePath,
    SetLineWidth,
    SetStrokeColor,
    SetFillColor,
    Paint(PaintStyle),
    EndPath,
    Clip,
    Unknown,
}

impl OpKind {
    pub fn from_keyword(keyword: &str) -> OpKind {
        use FillRule::{EvenOdd, NonZero};
        match keyword {
            // General graphics state and marked content
            "j" | "J" | "M" | "d" | "ri" | "i" => OpKind::Ignored,
            "MP" | "DP" | "BMC" | "BDC" | "EMC" => OpKind::Ignored,
            // Color spaces and external state
            "cs" | "CS" | "gs" => OpKind::Unhandled,
            // Special graphics state
            "q" => OpKind::SaveState,
            "Q" => OpKind::RestoreState,
            "cm" => OpKind::ConcatMatrix,
            // Path construction
            "m" => OpKind::MoveTo,
            "l" => OpKind::LineTo,
            "c" => OpKind::CurveTo,
            "v" => OpKind::CurveToInitialDuplicate,
            "y" => OpKind::CurveToFinalDuplicate,
            "re" => OpKind::Rectangle,
            "h" => OpKind::ClosePath,
            // Line width and color
            "w" | "LW" => OpKind::SetLineWidth,
            "G" | "RG" | "SCN" => OpKind::SetStrokeColor,
            "g" | "rg" | "scn" => OpKind::SetFillColor,
            // Path painting
            "s" => OpKind::Paint(PaintStyle::new(EvenOdd, true, false, true)),
            "S" => OpKind::Paint(PaintStyle::new(EvenOdd, false, false, true)),
            "f" => OpKind::Paint(PaintStyle::new(NonZero, true, true, false)),
            "f*" => OpKind::Paint(PaintStyle::new(EvenOdd, true, true, false)),
            "b" => OpKind::Paint(PaintStyle::new(NonZero, true, true, true)),
            "b*" => OpKind::Paint(PaintStyle::new(EvenOdd, true, true, true)),
            "B" => OpKind::Paint(PaintStyle::new(NonZero, false, true, true)),
            "B*" => OpKind::Paint(PaintStyle::new(EvenOdd, false, true, true)),
            "n" => OpKind::EndPath,
            // Clipping path
            "W" => OpKind::Clip,
            _ => OpKind::Unknown,
        }
    }
}
