use std::fmt;

use crate::error::{PdfError, Result};
use crate::object::PdfObject;

/// An operator keyword with the operands that preceded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    op: String,
    operands: Vec<PdfObject>,
}

impl Operator {
    pub fn new(op: String, operands: Vec<PdfObject>) -> Self {
        Operator { op, operands }
    }

    pub fn name(&self) -> &str {
        self.op.as_str()
    }

    pub fn operand(&self, index: usize) -> Result<&PdfObject> {
        self.operands.get(index).ok_or(PdfError::Operand(format!(
            "{:?}, can't have enough operands {:?}",
            self.op, self.operands
        )))
    }

    pub fn number(&self, index: usize) -> Result<f32> {
        Ok(self.operand(index)?.as_number()?.real())
    }

    pub fn operands(&self) -> &[PdfObject] {
        self.operands.as_slice()
    }

    pub fn num_operands(&self) -> usize {
        self.operands.len()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for operand in self.operands.iter() {
            write!(f, "{} ", operand)?;
        }
        write!(f, "{}", self.op)
    }
}
