pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

#[cfg(test)]
pub(crate) mod arbitrary;

use super::settings::{Setting, Settings};
use super::source::Source;
use super::utils::symbol_table::SymbolTable;
use ast::Block;
use lexer::token::{Token, TokenKind};
use lexer::Lexer;
use parser::Parser;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Turns source text into tokens or a syntax tree, according to the settings.
#[derive(Debug, Clone)]
pub struct Frontend {
    settings: Settings,
}

impl Frontend {
    pub fn new(settings: Settings) -> Self {
        Frontend { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn lexer<'a>(&self, source: &Source<'_>, symbols: &'a mut SymbolTable) -> Lexer<'a> {
        Lexer::new(source, self.settings.initial_line(), symbols)
    }

    /// All tokens of the source. Comments are dropped unless the
    /// `Comments` setting is enabled.
    pub fn tokenize(&self, source: &Source<'_>, symbols: &mut SymbolTable) -> Result<Vec<Token>> {
        let keep_comments = self.settings.is_enabled(&Setting::Comments);
        log::debug!("tokenizing source {:?}", source.id);

        self.lexer(source, symbols)
            .filter(|token| match token {
                Ok(token) => keep_comments || !token.is(TokenKind::Comment),
                Err(_) => true,
            })
            .collect()
    }

    pub fn parse(&self, source: &Source<'_>, symbols: &mut SymbolTable) -> Result<Block> {
        log::debug!("parsing source {:?}", source.id);

        Parser::new(self.lexer(source, symbols))
            .with_integer_literals(self.settings.is_enabled(&Setting::IntegerLiterals))
            .parse()
    }
}

impl Default for Frontend {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Parses text that is not registered anywhere, with default settings.
pub fn parse_str(code: &str) -> Result<Block> {
    let mut symbols = SymbolTable::default();
    Frontend::default().parse(&Source::synthetic(code), &mut symbols)
}

/// Tokenizes text that is not registered anywhere, with default settings.
pub fn tokenize_str(code: &str) -> Result<Vec<Token>> {
    let mut symbols = SymbolTable::default();
    Frontend::default().tokenize(&Source::synthetic(code), &mut symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_comments_when_disabled() {
        let mut settings = Settings::default();
        settings.disable(Setting::Comments);
        let frontend = Frontend::new(settings);
        let mut symbols = SymbolTable::default();

        let tokens = frontend
            .tokenize(&Source::synthetic("a # note\n"), &mut symbols)
            .unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(kinds, vec![TokenKind::Symbol, TokenKind::Newline]);
        assert_eq!(tokenize_str("a # note\n").unwrap().len(), 3);
    }

    #[test]
    fn test_default_settings() {
        let frontend = Frontend::default();

        assert!(frontend.settings().is_enabled(&Setting::Comments));
        assert!(frontend.settings().is_enabled(&Setting::IntegerLiterals));
        assert_eq!(frontend.settings().initial_line(), 1);
    }

    #[test]
    fn test_initial_line_setting() {
        let mut settings = Settings::default();
        settings.set_initial_line(7);
        let frontend = Frontend::new(settings);
        let mut symbols = SymbolTable::default();

        let tokens = frontend
            .tokenize(&Source::synthetic("\nx"), &mut symbols)
            .unwrap();

        assert_eq!(tokens[1].position().line, 8);
    }

    #[test]
    fn test_parse_shares_symbols() {
        let frontend = Frontend::default();
        let mut symbols = SymbolTable::default();

        frontend
            .parse(&Source::synthetic("a <- b"), &mut symbols)
            .unwrap();
        frontend
            .parse(&Source::synthetic("c(a)"), &mut symbols)
            .unwrap();

        assert_eq!(symbols.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_str() {
        assert_eq!(parse_str("x").unwrap().len(), 1);
        assert_matches!(parse_str("x <- "), Err(error::Error::SyntaxError(_, _)));
    }
}
