use std::fmt::Display;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PdfNumber {
    Integer(i32),
    Real(f32),
}

impl PdfNumber {
    pub fn from_buffer(buffer: &[u8], is_real: bool) -> Self {
        if is_real {
            PdfNumber::Real(real_from_buffer(buffer))
        } else {
            PdfNumber::Integer(integer_from_buffer(buffer))
        }
    }

    pub fn real(&self) -> f32 {
        match self {
            PdfNumber::Integer(v) => *v as f32,
            PdfNumber::Real(r) => *r,
        }
    }
}

impl Display for PdfNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdfNumber::Integer(v) => write!(f, "{}", v),
            PdfNumber::Real(r) => write!(f, "{}", r),
        }
    }
}

fn sign_of(buf: &[u8]) -> (i32, usize) {
    match buf.first() {
        Some(b'+') => (1, 1),
        Some(b'-') => (-1, 1),
        _ => (1, 0),
    }
}

// Saturates instead of overflowing; malformed digits after the sign are skipped.
pub fn integer_from_buffer(buf: &[u8]) -> i32 {
    let (flag, start) = sign_of(buf);
    let res = buf[start..]
        .iter()
        .filter(|c| c.is_ascii_digit())
        .fold(0_i32, |acc, c| {
            acc.saturating_mul(10).saturating_add((c - b'0') as i32)
        });
    flag * res
}

// Tolerates the sloppy reals found in the wild: "-.5", "4.", "1.2.3" (reads "1.2").
pub fn real_from_buffer(buf: &[u8]) -> f32 {
    let (flag, mut i) = sign_of(buf);
    let flag = flag as f32;

    let mut ipart = 0_f32;
    while i < buf.len() && buf[i].is_ascii_digit() {
        ipart = ipart * 10_f32 + (buf[i] - b'0') as f32;
        i += 1
    }
    if i < buf.len() && buf[i] == b'.' {
        i += 1;
        let mut dpart = 0_f32;
        let mut n = 1_f32;
        while i < buf.len() && buf[i].is_ascii_digit() {
            n *= 10_f32;
            dpart = dpart * 10_f32 + (buf[i] - b'0') as f32;
            i += 1
        }
        return flag * (ipart + dpart / n);
    }
    flag * ipart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(integer_from_buffer(b"123"), 123);
        assert_eq!(integer_from_buffer(b"-17"), -17);
        assert_eq!(integer_from_buffer(b"+4"), 4);
    }

    #[test]
    fn test_real() {
        assert_eq!(real_from_buffer(b"-.5"), -0.5);
        assert_eq!(real_from_buffer(b"4."), 4.0);
        assert_eq!(real_from_buffer(b"8.88"), 8.88);
        assert_eq!(real_from_buffer(b"1.2.3"), 1.2);
    }

    #[test]
    fn test_number_as_real() {
        assert_eq!(PdfNumber::from_buffer(b"12", false).real(), 12.0);
        assert_eq!(PdfNumber::from_buffer(b"2.75", true).real(), 2.75);
    }
}
