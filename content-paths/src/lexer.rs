use crate::error::{PdfError, Result};
use crate::object::number::PdfNumber;
use crate::token::Token;

/// Splits content stream bytes into lexical tokens.
pub struct Tokenizer {
    input: Vec<u8>,
    pos: usize,
}

impl Tokenizer {
    pub fn new(input: Vec<u8>) -> Self {
        Tokenizer { input, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let c = self.peek_byte();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_white_and_comments(&mut self) {
        while let Some(c) = self.peek_byte() {
            if is_white(&c) {
                self.pos += 1;
            } else if c == b'%' {
                while let Some(c) = self.next_byte() {
                    if c == b'\r' || c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_white_and_comments();
        let c = match self.next_byte() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };
        match c {
            b'[' => Ok(Token::OpenArray),
            b']' => Ok(Token::CloseArray),
            b'{' => Ok(Token::OpenBrace),
            b'}' => Ok(Token::CloseBrace),
            b')' => Ok(Token::CloseParen),
            b'<' => {
                if self.peek_byte() == Some(b'<') {
                    self.pos += 1;
                    Ok(Token::OpenDict)
                } else {
                    self.read_hex_string()
                }
            }
            b'>' => {
                if self.next_byte() != Some(b'>') {
                    return Err(PdfError::ContentParser(format!(
                        "`>` can not exist single at {}",
                        self.pos
                    )));
                }
                Ok(Token::CloseDict)
            }
            b'(' => self.read_literal_string(),
            b'/' => {
                let start = self.pos;
                self.skip_regular();
                Ok(Token::Name(self.input[start..self.pos].to_vec()))
            }
            _ => {
                let start = self.pos - 1;
                self.skip_regular();
                Ok(keyword(&self.input[start..self.pos]))
            }
        }
    }

    fn skip_regular(&mut self) {
        while let Some(c) = self.peek_byte() {
            if is_white(&c) || is_delimiter(&c) {
                break;
            }
            self.pos += 1;
        }
    }

    fn read_hex_string(&mut self) -> Result<Token> {
        let mut buf = Vec::new();
        loop {
            match self.next_byte() {
                None => {
                    return Err(PdfError::ContentParser(
                        "HexString not closed".to_string(),
                    ))
                }
                Some(b'>') => break,
                Some(c) if is_white(&c) => {}
                Some(c) if c.is_ascii_hexdigit() => buf.push(c),
                Some(c) => {
                    return Err(PdfError::ContentParser(format!(
                        "invalid hex digit {:?} in HexString",
                        c as char
                    )))
                }
            }
        }
        Ok(Token::HexString(buf))
    }

    fn read_literal_string(&mut self) -> Result<Token> {
        let unclosed = || PdfError::ContentParser("literal string not closed".to_string());
        let mut buf = Vec::new();
        let mut nested: i32 = 1;
        loop {
            let c = self.next_byte().ok_or_else(unclosed)?;
            match c {
                b'(' => {
                    nested += 1;
                    buf.push(c)
                }
                b')' => {
                    nested -= 1;
                    if nested == 0 {
                        break;
                    }
                    buf.push(c);
                }
                b'\\' => {
                    let cn = self.next_byte().ok_or_else(unclosed)?;
                    match cn {
                        b'n' => buf.push(b'\n'),
                        b't' => buf.push(b'\t'),
                        b'r' => buf.push(b'\r'),
                        b'b' => buf.push(8),
                        b'f' => buf.push(12),
                        b'0'..=b'7' => {
                            let mut code = (cn - b'0') as u32;
                            for _ in 0..2 {
                                match self.peek_byte() {
                                    Some(d @ b'0'..=b'7') => {
                                        code = code * 8 + (d - b'0') as u32;
                                        self.pos += 1;
                                    }
                                    _ => break,
                                }
                            }
                            buf.push((code & 0xff) as u8);
                        }
                        // line continuation
                        b'\r' => {
                            if self.peek_byte() == Some(b'\n') {
                                self.pos += 1;
                            }
                        }
                        b'\n' => {}
                        _ => buf.push(cn),
                    }
                }
                _ => buf.push(c),
            }
        }
        Ok(Token::LiteralString(buf))
    }

    /// Raw bytes of an inline image, read right after the `ID` operator.
    ///
    /// Stops in front of the whitespace-delimited `EI`, which is left for
    /// `next_token`.
    pub fn read_inline_image(&mut self) -> Result<Vec<u8>> {
        if self.peek_byte().is_some_and(|c| is_white(&c)) {
            self.pos += 1;
        }
        let start = self.pos;
        let mut i = start;
        while i + 1 < self.input.len() {
            let before_ok = i == start || is_white(&self.input[i - 1]);
            let after_ok = self.input.get(i + 2).map_or(true, is_white);
            if before_ok && after_ok && &self.input[i..i + 2] == b"EI" {
                let end = if i > start { i - 1 } else { i };
                self.pos = i;
                return Ok(self.input[start..end].to_vec());
            }
            i += 1;
        }
        Err(PdfError::ContentParser(format!(
            "inline image started at {} has no EI",
            start
        )))
    }
}

fn keyword(buf: &[u8]) -> Token {
    match buf {
        b"true" => Token::True,
        b"false" => Token::False,
        b"null" => Token::Null,
        _ => {
            let numeric = buf.iter().all(is_real) && buf.iter().any(|c| c.is_ascii_digit());
            if numeric {
                Token::Number(PdfNumber::from_buffer(buf, buf.contains(&b'.')))
            } else {
                Token::Other(buf.to_vec())
            }
        }
    }
}

pub fn is_white(ch: &u8) -> bool {
    matches!(ch, 0 | 9 | 10 | 12 | 13 | 32)
}

pub fn is_real(ch: &u8) -> bool {
    ch.is_ascii_digit() || matches!(ch, b'+' | b'-' | b'.')
}

pub fn is_delimiter(ch: &u8) -> bool {
    matches!(
        ch,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

#[cfg(test)]
mod tests {
    use crate::lexer::Tokenizer;
    use crate::object::number::PdfNumber;
    use crate::token::Token;

    fn token_result(buffer: &[u8]) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(buffer.to_vec());
        let mut res = Vec::new();
        while let Ok(token) = tokenizer.next_token() {
            if token == Token::Eof {
                break;
            }
            res.push(token);
        }
        res
    }

    #[test]
    fn test_read_real() {
        let res = token_result(b"-80 .5 -3.25");
        assert_eq!(
            res,
            vec![
                Token::Number(PdfNumber::Integer(-80)),
                Token::Number(PdfNumber::Real(0.5)),
                Token::Number(PdfNumber::Real(-3.25)),
            ]
        );
    }

    #[test]
    fn test_read_empty() {
        let mut tokenizer = Tokenizer::new(Vec::new());
        assert_eq!(tokenizer.next_token().unwrap(), Token::Eof);
    }

    #[test]
    fn test_parse_content() {
        let content = b"q
1 0 0 1 72 720 cm
/GS1 gs
0 0 m 10 10 l S
Q";
        let expected = vec![
            Token::Other(b"q".to_vec()),
            Token::Number(PdfNumber::Integer(1)),
            Token::Number(PdfNumber::Integer(0)),
            Token::Number(PdfNumber::Integer(0)),
            Token::Number(PdfNumber::Integer(1)),
            Token::Number(PdfNumber::Integer(72)),
            Token::Number(PdfNumber::Integer(720)),
            Token::Other(b"cm".to_vec()),
            Token::Name(b"GS1".to_vec()),
            Token::Other(b"gs".to_vec()),
            Token::Number(PdfNumber::Integer(0)),
            Token::Number(PdfNumber::Integer(0)),
            Token::Other(b"m".to_vec()),
            Token::Number(PdfNumber::Integer(10)),
            Token::Number(PdfNumber::Integer(10)),
            Token::Other(b"l".to_vec()),
            Token::Other(b"S".to_vec()),
            Token::Other(b"Q".to_vec()),
        ];
        assert_eq!(token_result(content), expected);
    }

    #[test]
    fn test_keywords_stick_to_delimiters() {
        let res = token_result(b"f*[1 2]0 d/P0 scn");
        assert_eq!(
            res,
            vec![
                Token::Other(b"f*".to_vec()),
                Token::OpenArray,
                Token::Number(PdfNumber::Integer(1)),
                Token::Number(PdfNumber::Integer(2)),
                Token::CloseArray,
                Token::Number(PdfNumber::Integer(0)),
                Token::Other(b"d".to_vec()),
                Token::Name(b"P0".to_vec()),
                Token::Other(b"scn".to_vec()),
            ]
        );
    }

    #[test]
    fn test_comment() {
        let content = b"abc% comment ( /% ) blah blah blah
            123 % second
            true";
        let expected = vec![
            Token::Other(b"abc".to_vec()),
            Token::Number(PdfNumber::Integer(123)),
            Token::True,
        ];
        assert_eq!(token_result(content), expected);
    }

    #[test]
    fn test_reverse_solid() {
        let content = "8.5 0 TD 0 Tc (O\\\\) Tj";
        let res = token_result(content.as_bytes());
        let expected = vec![
            Token::Number(PdfNumber::Real(8.5)),
            Token::Number(PdfNumber::Integer(0)),
            Token::Other(b"TD".to_vec()),
            Token::Number(PdfNumber::Integer(0)),
            Token::Other(b"Tc".to_vec()),
            Token::LiteralString(vec![79, 92]),
            Token::Other(b"Tj".to_vec()),
        ];
        assert_eq!(expected, res);
    }

    #[test]
    fn test_nest_parentthesis() {
        let res = token_result(b"(()) Tj");
        assert_eq!(
            res,
            [
                Token::LiteralString(vec![40, 41]),
                Token::Other(b"Tj".to_vec()),
            ]
        );

        let res = token_result(b"(\\() Tj");
        assert_eq!(
            res,
            [Token::LiteralString(vec![40]), Token::Other(b"Tj".to_vec())]
        );
    }

    #[test]
    fn test_octal_and_continuation() {
        let res = token_result(b"(\\101\\7x\\\nB)");
        assert_eq!(res, [Token::LiteralString(b"A\x07xB".to_vec())]);
    }

    #[test]
    fn test_hex_string() {
        let res = token_result(b"<48 65\n6C> <<");
        assert_eq!(
            res,
            [Token::HexString(b"48656C".to_vec()), Token::OpenDict]
        );
        let mut tokenizer = Tokenizer::new(b"<4G>".to_vec());
        assert!(tokenizer.next_token().is_err());
    }

    #[test]
    fn test_unclosed_strings() {
        let mut tokenizer = Tokenizer::new(b"(abc".to_vec());
        let err = tokenizer.next_token().unwrap_err();
        assert_eq!(err.to_string(), "Content parser error:literal string not closed");

        let mut tokenizer = Tokenizer::new(b"<414".to_vec());
        let err = tokenizer.next_token().unwrap_err();
        assert_eq!(err.to_string(), "Content parser error:HexString not closed");
    }

    #[test]
    fn test_single_greater_than() {
        let mut tokenizer = Tokenizer::new(b"> x".to_vec());
        assert!(tokenizer.next_token().is_err());
    }

    #[test]
    fn test_inline_image() {
        let mut tokenizer = Tokenizer::new(b"ID \x00EI\xffEI\nEI Q".to_vec());
        assert_eq!(tokenizer.next_token().unwrap(), Token::Other(b"ID".to_vec()));
        let data = tokenizer.read_inline_image().unwrap();
        assert_eq!(data, b"\x00EI\xffEI".to_vec());
        assert_eq!(tokenizer.next_token().unwrap(), Token::Other(b"EI".to_vec()));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Other(b"Q".to_vec()));
    }
}
