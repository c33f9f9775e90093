use std::fmt::Display;

#[derive(Debug, PartialEq, Clone)]
pub struct PdfLiteral {
    bytes: Vec<u8>,
}

/// Bytes decoded from a `<...>` string.
#[derive(Debug, PartialEq, Clone)]
pub struct PdfHexString {
    bytes: Vec<u8>,
}

impl PdfLiteral {
    pub fn new(bytes: Vec<u8>) -> Self {
        PdfLiteral { bytes }
    }
    pub fn bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }
}

impl PdfHexString {
    // A trailing odd digit behaves as if followed by 0.
    pub fn from_digits(digits: &[u8]) -> Self {
        let bytes = digits
            .chunks(2)
            .map(|pair| {
                let hi = hex_to_u8(pair[0]);
                let lo = pair.get(1).map_or(0, |c| hex_to_u8(*c));
                hi << 4 | lo
            })
            .collect();
        PdfHexString { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn hex_to_u8(c: u8) -> u8 {
    match c {
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        b'0'..=b'9' => c - b'0',
        _ => 0,
    }
}

impl Display for PdfLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", String::from_utf8_lossy(&self.bytes))
    }
}

impl Display for PdfHexString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<")?;
        for b in self.bytes.iter() {
            write!(f, "{:02X}", b)?;
        }
        write!(f, ">")
    }
}
