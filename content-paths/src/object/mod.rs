use std::fmt::Display;

use crate::error::{PdfError, Result};
use crate::object::array::PdfArray;
use crate::object::dictionary::PdfDict;
use crate::object::name::PdfName;
use crate::object::number::PdfNumber;
use crate::object::string::{PdfHexString, PdfLiteral};

pub mod array;
pub mod dictionary;
pub mod name;
pub mod number;
pub mod string;

/// A typed operand value as it appears before an operator in a content stream.
#[derive(Debug, PartialEq, Clone)]
pub enum PdfObject {
    Null,
    Bool(bool),
    Number(PdfNumber),
    Name(PdfName),
    LiteralString(PdfLiteral),
    HexString(PdfHexString),
    Array(PdfArray),
    Dict(PdfDict),
}

impl PdfObject {
    pub fn as_number(&self) -> Result<&PdfNumber> {
        match self {
            PdfObject::Number(n) => Ok(n),
            _ => Err(PdfError::Operand(format!(
                "PdfObject as Number need Number got:{:?}",
                self
            ))),
        }
    }
}

impl From<f32> for PdfObject {
    fn from(v: f32) -> Self {
        PdfObject::Number(PdfNumber::Real(v))
    }
}

impl From<i32> for PdfObject {
    fn from(v: i32) -> Self {
        PdfObject::Number(PdfNumber::Integer(v))
    }
}

impl Display for PdfObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdfObject::Null => write!(f, "null"),
            PdfObject::Bool(b) => write!(f, "{}", b),
            PdfObject::Number(n) => write!(f, "{}", n),
            PdfObject::Name(n) => write!(f, "{}", n),
            PdfObject::LiteralString(s) => write!(f, "{}", s),
            PdfObject::HexString(s) => write!(f, "{}", s),
            PdfObject::Array(a) => write!(f, "{}", a),
            PdfObject::Dict(d) => write!(f, "{}", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_operands() {
        let arr = PdfObject::Array(PdfArray::new(vec![
            PdfObject::from(3),
            PdfObject::Name(PdfName::new("Span")),
            PdfObject::LiteralString(PdfLiteral::new(b"hi".to_vec())),
        ]));
        assert_eq!(arr.to_string(), "[3 /Span (hi)]");
        assert_eq!(PdfObject::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_as_number_rejects_name() {
        let name = PdfObject::Name(PdfName::new("P0"));
        assert!(name.as_number().is_err());
        assert_eq!(PdfObject::from(2.5).as_number().unwrap().real(), 2.5);
    }
}
