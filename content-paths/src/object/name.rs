use std::fmt::Display;

#[derive(Debug, PartialEq, Clone)]
pub struct PdfName {
    name: String,
}

impl PdfName {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Decodes `#xx` escapes; a `#` not followed by two hex digits is kept as is.
    pub fn from_buffer(buf: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(buf.len());
        let mut i = 0;
        while i < buf.len() {
            if buf[i] == b'#' && i + 2 < buf.len() {
                let hi = (buf[i + 1] as char).to_digit(16);
                let lo = (buf[i + 2] as char).to_digit(16);
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    bytes.push((hi * 16 + lo) as u8);
                    i += 3;
                    continue;
                }
            }
            bytes.push(buf[i]);
            i += 1;
        }
        PdfName {
            name: String::from_utf8_lossy(&bytes).to_string(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Display for PdfName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::PdfName;

    #[test]
    fn test_name_escape() {
        assert_eq!(PdfName::from_buffer(b"A#20B").name(), "A B");
        assert_eq!(PdfName::from_buffer(b"F1").name(), "F1");
        assert_eq!(PdfName::from_buffer(b"bad#z").name(), "bad#z");
    }
}
