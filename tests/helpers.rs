#![allow(dead_code)]

use blackbeard::compiler::frontend;
use blackbeard::compiler::frontend::ast::{Block, Node, Value};
pub use blackbeard::compiler::frontend::error::Error;
use blackbeard::compiler::frontend::lexer::token::TokenKind;
pub use blackbeard::compiler::frontend::Result;
pub use matches::assert_matches;

pub fn parse(code: &str) -> Result<Block> {
    frontend::parse_str(code)
}

pub fn token_kinds(code: &str) -> Vec<TokenKind> {
    frontend::tokenize_str(code)
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect()
}

pub fn token_texts(code: &str) -> Vec<String> {
    frontend::tokenize_str(code)
        .unwrap()
        .into_iter()
        .map(|t| t.text)
        .collect()
}

pub fn num(value: f64) -> Node {
    Node::scalar(Value::float(value))
}

pub fn string(value: &str) -> Node {
    Node::scalar(Value::character(value))
}

pub fn sym(name: &str) -> Node {
    Node::symbol(name)
}

#[inline]
pub fn assert_parse_eq(code: &str, expected: Vec<Node>) {
    assert_eq!(parse(code).unwrap(), Block::from(expected))
}
