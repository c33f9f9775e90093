use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Content parser error:{0}")]
    ContentParser(String),

    #[error("Operand error:{0}")]
    Operand(String),

    #[error("Graphics state nesting exceeds {0} levels")]
    NestingTooDeep(usize),

    #[error("Clip error:{0}")]
    Clip(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;
