use std::fmt;

use crate::error::{PdfError, Result};
use crate::lexer::Tokenizer;
use crate::object::array::PdfArray;
use crate::object::dictionary::PdfDict;
use crate::object::name::PdfName;
use crate::object::string::{PdfHexString, PdfLiteral};
use crate::object::PdfObject;
use crate::token::Token;

/// One item pulled from a content stream.
#[derive(Debug, PartialEq, Clone)]
pub enum ContentToken {
    Operator(String),
    Operand(PdfObject),
    ImageData(Vec<u8>),
}

impl fmt::Display for ContentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentToken::Operator(op) => write!(f, "{}", op),
            ContentToken::Operand(obj) => write!(f, "{}", obj),
            ContentToken::ImageData(data) => write!(f, "<image data {} bytes>", data.len()),
        }
    }
}

/// Producer the interpreter pulls from.
///
/// `None` marks exhaustion. An `Err` means the source could not produce a
/// well-formed token, and interpretation stops there.
pub trait TokenSource {
    fn next_token(&mut self) -> Option<Result<ContentToken>>;
}

impl<I> TokenSource for I
where
    I: Iterator<Item = Result<ContentToken>>,
{
    fn next_token(&mut self) -> Option<Result<ContentToken>> {
        self.next()
    }
}

/// Turns raw content stream bytes into `ContentToken`s.
///
/// Arrays and dictionaries are assembled into single operands. After an
/// error the tokenizer is exhausted.
pub struct ContentTokenizer {
    tokenizer: Tokenizer,
    in_inline_image: bool,
    failed: bool,
}

impl ContentTokenizer {
    pub fn new(content: Vec<u8>) -> Self {
        ContentTokenizer {
            tokenizer: Tokenizer::new(content),
            in_inline_image: false,
            failed: false,
        }
    }

    pub fn read_token(&mut self) -> Result<Option<ContentToken>> {
        if self.in_inline_image {
            self.in_inline_image = false;
            let data = self.tokenizer.read_inline_image()?;
            return Ok(Some(ContentToken::ImageData(data)));
        }
        let token = self.tokenizer.next_token()?;
        match token {
            Token::Eof => Ok(None),
            Token::Other(bytes) => {
                let keyword = String::from_utf8_lossy(bytes.as_slice()).to_string();
                if keyword == "ID" {
                    self.in_inline_image = true;
                }
                Ok(Some(ContentToken::Operator(keyword)))
            }
            _ => Ok(Some(ContentToken::Operand(self.read_object(token)?))),
        }
    }

    fn read_object(&mut self, token: Token) -> Result<PdfObject> {
        match token {
            Token::Number(n) => Ok(PdfObject::Number(n)),
            Token::Name(buf) => Ok(PdfObject::Name(PdfName::from_buffer(buf.as_slice()))),
            Token::LiteralString(buf) => Ok(PdfObject::LiteralString(PdfLiteral::new(buf))),
            Token::HexString(buf) => Ok(PdfObject::HexString(PdfHexString::from_digits(
                buf.as_slice(),
            ))),
            Token::True => Ok(PdfObject::Bool(true)),
            Token::False => Ok(PdfObject::Bool(false)),
            Token::Null => Ok(PdfObject::Null),
            Token::OpenArray => {
                let mut objs = Vec::new();
                loop {
                    match self.tokenizer.next_token()? {
                        Token::CloseArray => break,
                        Token::Eof => {
                            return Err(PdfError::ContentParser("array not closed".to_string()))
                        }
                        t => objs.push(self.read_object(t)?),
                    }
                }
                Ok(PdfObject::Array(PdfArray::new(objs)))
            }
            Token::OpenDict => {
                let mut entries = Vec::new();
                loop {
                    match self.tokenizer.next_token()? {
                        Token::CloseDict => break,
                        Token::Name(key) => {
                            let value = match self.tokenizer.next_token()? {
                                Token::CloseDict | Token::Eof => {
                                    return Err(PdfError::ContentParser(format!(
                                        "dictionary key {:?} has no value",
                                        String::from_utf8_lossy(key.as_slice())
                                    )))
                                }
                                t => self.read_object(t)?,
                            };
                            entries.push((PdfName::from_buffer(key.as_slice()), value));
                        }
                        Token::Eof => {
                            return Err(PdfError::ContentParser(
                                "dictionary not closed".to_string(),
                            ))
                        }
                        t => {
                            return Err(PdfError::ContentParser(format!(
                                "dictionary key need a Name got:{:?}",
                                t
                            )))
                        }
                    }
                }
                Ok(PdfObject::Dict(PdfDict::new(entries)))
            }
            _ => Err(PdfError::ContentParser(format!(
                "invalid token:{:?} at {}",
                token,
                self.tokenizer.offset()
            ))),
        }
    }
}

impl Iterator for ContentTokenizer {
    type Item = Result<ContentToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = self.read_token().transpose();
        if matches!(res, Some(Err(_))) {
            self.failed = true;
        }
        res
    }
}
