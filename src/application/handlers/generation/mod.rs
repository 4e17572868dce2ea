//! Generation handlers.

mod generate_content;

pub use generate_content::{GenerateContentCommand, GenerateContentHandler, MIN_PROMPT_CHARS};
