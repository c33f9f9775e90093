use std::fmt::Display;

use crate::object::{name::PdfName, PdfObject};

/// Entries keep stream order; a marked-content property list is only ever logged.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PdfDict {
    entries: Vec<(PdfName, PdfObject)>,
}

impl PdfDict {
    pub fn new(entries: Vec<(PdfName, PdfObject)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries
            .iter()
            .find(|(k, _)| k.name() == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for PdfDict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<<")?;
        for (k, v) in self.entries.iter() {
            write!(f, " {} {}", k, v)?;
        }
        write!(f, " >>")
    }
}
