// src/frontend/mod.rs
pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

mod parse_decl;
mod parse_type;

pub use lexer::Lexer;
pub use parser::{ParseError, Parser};
pub use token::{Span, Token, TokenType};
