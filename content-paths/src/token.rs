use std::fmt;

use crate::object::number::PdfNumber;

#[derive(PartialEq, Clone)]
pub enum Token {
    OpenArray,
    CloseArray,
    OpenDict,
    CloseDict,
    OpenBrace,
    CloseBrace,
    CloseParen,
    HexString(Vec<u8>),
    LiteralString(Vec<u8>),
    Name(Vec<u8>),
    True,
    False,
    Null,
    Number(PdfNumber),
    Other(Vec<u8>),
    Eof,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenArray => write!(f, "["),
            Token::CloseArray => write!(f, "]"),
            Token::OpenDict => write!(f, "<<"),
            Token::CloseDict => write!(f, ">>"),
            Token::OpenBrace => write!(f, "{{"),
            Token::CloseBrace => write!(f, "}}"),
            Token::CloseParen => write!(f, ")"),
            Token::HexString(v) => write!(f, "Hexstring({:?})", String::from_utf8_lossy(v)),
            Token::LiteralString(v) => write!(f, "Literal({:?})", String::from_utf8_lossy(v)),
            Token::Name(v) => write!(f, "Name({:?})", String::from_utf8_lossy(v)),
            Token::True => write!(f, "Bool(true)"),
            Token::False => write!(f, "Bool(false)"),
            Token::Null => write!(f, "Null"),
            Token::Number(n) => write!(f, "Number({})", n),
            Token::Other(v) => write!(f, "Other({:?})", String::from_utf8_lossy(v)),
            Token::Eof => write!(f, "Eof"),
        }
    }
}
