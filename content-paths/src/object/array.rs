use std::fmt::Display;

use crate::object::PdfObject;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct PdfArray {
    elements: Vec<PdfObject>,
}

impl PdfArray {
    pub fn new(elements: Vec<PdfObject>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PdfObject> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PdfObject> {
        self.elements.iter()
    }
}

impl Display for PdfArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, obj) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", obj)?;
        }
        write!(f, "]")
    }
}
