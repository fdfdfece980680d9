use crate::compiler::frontend::lexer::token::Token;
use crate::compiler::source::{HasSourceLocation, Location};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("LexicalError at {}: {0}", .1.location)]
    LexicalError(String, Detail),
    #[error("SyntaxError at {}: {0}", .1.location)]
    SyntaxError(String, Box<Token>),
}

impl Error {
    pub fn lexical_error<M: Into<String>>(message: M, offending: Option<char>, loc: Location) -> Self {
        let content = offending.map(String::from).unwrap_or_default();
        Error::LexicalError(message.into(), Detail::new(content, loc))
    }

    pub fn syntax_error<M: Into<String>>(message: M, token: &Token) -> Self {
        Error::SyntaxError(message.into(), Box::new(token.clone()))
    }

    pub fn message(&self) -> &str {
        match self {
            Error::LexicalError(message, _) => message,
            Error::SyntaxError(message, _) => message,
        }
    }
}

impl HasSourceLocation for Error {
    fn source_location(&self) -> &Location {
        match self {
            Error::LexicalError(_, detail) => &detail.location,
            Error::SyntaxError(_, token) => &token.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub content: String,
    pub location: Location,
}

impl Detail {
    pub fn new<Content: Into<String>, Loc: Into<Location>>(m: Content, loc: Loc) -> Self {
        Self {
            content: m.into(),
            location: loc.into(),
        }
    }
}
