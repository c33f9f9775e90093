use crate::error::{PdfError, Result};

/// Paint color, components in `0.0..=1.0` as written in the stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        ColorRgb { r, g, b }
    }

    pub fn gray(v: f32) -> Self {
        ColorRgb { r: v, g: v, b: v }
    }

    /// One component is gray, three or more are read as RGB from the first three.
    pub fn from_components(values: &[f32]) -> Result<Self> {
        match values {
            [v] => Ok(Self::gray(*v)),
            [r, g, b, ..] => Ok(Self::new(*r, *g, *b)),
            _ => Err(PdfError::Operand(format!(
                "color need 1 or 3 components got:{:?}",
                values
            ))),
        }
    }
}

impl Default for ColorRgb {
    fn default() -> Self {
        Self::gray(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ColorRgb;

    #[test]
    fn test_from_components() {
        assert_eq!(ColorRgb::from_components(&[0.5]).unwrap(), ColorRgb::gray(0.5));
        assert_eq!(
            ColorRgb::from_components(&[0.1, 0.2, 0.3]).unwrap(),
            ColorRgb::new(0.1, 0.2, 0.3)
        );
        // cmyk through scn: the first three are taken as is
        assert_eq!(
            ColorRgb::from_components(&[0.1, 0.2, 0.3, 0.4]).unwrap(),
            ColorRgb::new(0.1, 0.2, 0.3)
        );
        assert!(ColorRgb::from_components(&[]).is_err());
        assert!(ColorRgb::from_components(&[0.1, 0.2]).is_err());
    }
}
