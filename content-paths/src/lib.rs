mod lexer;
mod token;

pub mod color;
pub mod content;
pub mod error;
pub mod geom;
pub mod object;
pub mod page;

pub use content::{ContentToken, ContentTokenizer, TokenSource};
pub use page::graphics_state::GraphicsContext;
pub use page::interpreter::{interpret, interpret_content, Interpreter, InterpreterOptions};
