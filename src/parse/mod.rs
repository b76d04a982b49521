pub mod ast;
mod error;
mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::TokenKind;

/// Parses dice notation such as `2d6 + mid3d8 * (1d4 - 1)` into an
/// [ast::Expression].
pub fn parse(s: &str) -> Result<ast::Expression, ParseError> {
    parser::Parser::new(s).parse()
}
