pub mod cursor;
pub mod token;

use crate::compiler::frontend::error::Error;
use crate::compiler::source::{Location, Position, Source, SourceId};
use crate::compiler::utils::symbol_table::SymbolTable;
use cursor::Cursor;
use token::{Token, TokenKind};

type Result<T> = std::result::Result<T, Error>;

/// What the lexer expects next.
///
/// R spells several tokens the same way whether they start a term or
/// follow one (`-` is unary minus or subtraction, `?` is help or a binary
/// operator). The mode decides which one is meant and which operators are
/// legal at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Expecting the start of a term.
    Begin,
    /// A term was just produced, expecting an operator or a closer.
    Argument,
}

/// Hand-written lexer for R source text.
///
/// Produces tokens on demand through its `Iterator` implementation. The
/// sequence is single pass: it ends at the end of input or right after the
/// first error.
pub struct Lexer<'a> {
    id: SourceId,
    cursor: Cursor,
    mode: Mode,
    buffer: String,
    start: Position,
    symbols: &'a mut SymbolTable,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &Source<'_>, initial_line: usize, symbols: &'a mut SymbolTable) -> Self {
        Self {
            id: source.id,
            cursor: Cursor::new(source.code, initial_line),
            mode: Mode::Begin,
            buffer: String::new(),
            start: Position::start_of_line(initial_line),
            symbols,
            finished: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Empty location at the current read position.
    pub fn location(&self) -> Location {
        let position = self.cursor.position();
        Location::new(self.id, position.offset..position.offset, position)
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let start = self.cursor.position();
            let ch = match self.cursor.read() {
                Some(ch) => ch,
                None => return Ok(None),
            };
            self.start = start;

            let token = match ch {
                ' ' | '\t' | '\x0c' => continue,
                '\\' => match self.cursor.read() {
                    Some(next @ '\r') | Some(next @ '\n') => {
                        self.consume_line_break(next);
                        continue;
                    }
                    _ => return self.unexpected(ch),
                },
                '#' => self.comment(),
                '\r' | '\n' => self.newline(ch),
                '*' => self.star(ch),
                '!' => self.exclamation(ch),
                '=' => self.equal(ch),
                '<' => self.less_than(ch),
                '>' => self.greater_than(ch),
                '\'' | '"' => self.string_quote(ch),
                '?' => self.question_mark(ch),
                '&' => self.ampersand(ch),
                '|' => self.pipe(ch),
                '+' => self.plus(ch),
                '-' => self.minus(ch),
                '(' => self.single(ch, TokenKind::LParen, Mode::Begin),
                ')' => self.single(ch, TokenKind::RParen, Mode::Argument),
                '{' => self.single(ch, TokenKind::LBrace, Mode::Begin),
                '}' => self.single(ch, TokenKind::RBrace, Mode::Argument),
                '[' => self.left_square(ch),
                ']' => self.single(ch, TokenKind::RSquare, Mode::Argument),
                ':' => self.colon(ch),
                '/' => self.operator(ch, TokenKind::Div),
                '^' => self.operator(ch, TokenKind::Pow),
                ';' => self.single(ch, TokenKind::Semicolon, Mode::Begin),
                ',' => self.single(ch, TokenKind::Comma, Mode::Begin),
                '~' => self.single(ch, TokenKind::Tilde, Mode::Begin),
                '$' => self.single(ch, TokenKind::Dollar, Mode::Begin),
                '%' => self.percent(ch),
                '`' => self.backtick(ch),
                '.' if self.peek_is(|c| c.is_ascii_digit()) => self.number(ch),
                '.' => self.dot(),
                ch if ch.is_ascii_digit() => self.number(ch),
                _ => self.symbol(ch),
            };

            return token.map(Some);
        }
    }

    //////////////////////////////
    // Helpers
    //////////////////////////////

    #[inline]
    fn add(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    fn emit(&mut self, kind: TokenKind) -> Token {
        let text = std::mem::take(&mut self.buffer);
        let end = self.cursor.position().offset;
        let location = Location::new(self.id, self.start.offset..end, self.start);
        let token = Token::new(kind, text, location);

        log::trace!("token: {}", token);
        token
    }

    fn emit_symbol(&mut self) -> Token {
        match TokenKind::reserved(&self.buffer) {
            Some(kind) => {
                self.mode = match kind {
                    TokenKind::Next | TokenKind::Break | TokenKind::Na => Mode::Argument,
                    _ => Mode::Begin,
                };
                self.emit(kind)
            }
            None => {
                self.symbols.get_or_intern(&self.buffer);
                self.mode = Mode::Argument;
                self.emit(TokenKind::Symbol)
            }
        }
    }

    fn error<T>(&self, message: String, offending: Option<char>, at: Position) -> Result<T> {
        let end = at.offset + offending.map(char::len_utf8).unwrap_or(0);
        let location = Location::new(self.id, at.offset..end, at);

        Err(Error::lexical_error(message, offending, location))
    }

    fn unexpected<T>(&self, ch: char) -> Result<T> {
        self.error(format!("unexpected {:?}", ch), Some(ch), self.start)
    }

    fn require_argument(&self, ch: char) -> Result<()> {
        if self.mode == Mode::Argument {
            Ok(())
        } else {
            self.unexpected(ch)
        }
    }

    fn peek_is<F: Fn(char) -> bool>(&mut self, predicate: F) -> bool {
        self.cursor.peek().map(predicate).unwrap_or(false)
    }

    /// Consumes `expected` if it is the next character, adding it to the lexeme.
    fn accept(&mut self, expected: char) -> bool {
        if self.cursor.peek() == Some(expected) {
            self.cursor.read();
            self.add(expected);
            true
        } else {
            false
        }
    }

    fn consume_line_break(&mut self, ch: char) {
        if ch == '\r' && self.cursor.peek() == Some('\n') {
            self.cursor.read();
        }
    }

    //////////////////////////////
    // Token rules
    //////////////////////////////

    fn comment(&mut self) -> Result<Token> {
        self.add('#');
        loop {
            match self.cursor.read() {
                None | Some('\r') | Some('\n') => {
                    self.cursor.unread();
                    return Ok(self.emit(TokenKind::Comment));
                }
                Some(ch) => self.add(ch),
            }
        }
    }

    fn newline(&mut self, ch: char) -> Result<Token> {
        self.consume_line_break(ch);
        self.add('\n');
        self.mode = Mode::Begin;
        Ok(self.emit(TokenKind::Newline))
    }

    fn single(&mut self, ch: char, kind: TokenKind, mode: Mode) -> Result<Token> {
        self.add(ch);
        self.mode = mode;
        Ok(self.emit(kind))
    }

    /// Operators that can only follow a term.
    fn operator(&mut self, ch: char, kind: TokenKind) -> Result<Token> {
        self.require_argument(ch)?;
        self.single(ch, kind, Mode::Begin)
    }

    fn star(&mut self, ch: char) -> Result<Token> {
        self.require_argument(ch)?;
        self.mode = Mode::Begin;
        self.add(ch);

        if self.accept('*') {
            Ok(self.emit(TokenKind::Pow))
        } else {
            Ok(self.emit(TokenKind::Mul))
        }
    }

    fn exclamation(&mut self, ch: char) -> Result<Token> {
        self.add(ch);
        self.mode = Mode::Begin;

        if self.accept('=') {
            Ok(self.emit(TokenKind::Ne))
        } else {
            Ok(self.emit(TokenKind::Not))
        }
    }

    fn equal(&mut self, ch: char) -> Result<Token> {
        self.require_argument(ch)?;
        self.mode = Mode::Begin;
        self.add(ch);

        if self.accept('=') {
            Ok(self.emit(TokenKind::Eq))
        } else {
            Ok(self.emit(TokenKind::EqAssign))
        }
    }

    fn less_than(&mut self, ch: char) -> Result<Token> {
        self.require_argument(ch)?;
        self.mode = Mode::Begin;
        self.add(ch);

        if self.accept('=') {
            Ok(self.emit(TokenKind::Le))
        } else if self.accept('-') {
            Ok(self.emit(TokenKind::LeftAssign))
        } else {
            Ok(self.emit(TokenKind::Lt))
        }
    }

    fn greater_than(&mut self, ch: char) -> Result<Token> {
        self.require_argument(ch)?;
        self.mode = Mode::Begin;
        self.add(ch);

        if self.accept('=') {
            Ok(self.emit(TokenKind::Ge))
        } else {
            Ok(self.emit(TokenKind::Gt))
        }
    }

    fn question_mark(&mut self, ch: char) -> Result<Token> {
        self.add(ch);

        if self.mode == Mode::Argument {
            self.mode = Mode::Begin;
            Ok(self.emit(TokenKind::Question))
        } else {
            Ok(self.emit(TokenKind::UQuestion))
        }
    }

    fn ampersand(&mut self, ch: char) -> Result<Token> {
        self.require_argument(ch)?;
        self.mode = Mode::Begin;
        self.add(ch);

        if self.accept('&') {
            Ok(self.emit(TokenKind::And2))
        } else {
            Ok(self.emit(TokenKind::And))
        }
    }

    fn pipe(&mut self, ch: char) -> Result<Token> {
        self.require_argument(ch)?;
        self.mode = Mode::Begin;
        self.add(ch);

        if self.accept('|') {
            Ok(self.emit(TokenKind::Or2))
        } else {
            Ok(self.emit(TokenKind::Or))
        }
    }

    fn plus(&mut self, ch: char) -> Result<Token> {
        self.add(ch);

        match self.mode {
            Mode::Begin => Ok(self.emit(TokenKind::UPlus)),
            Mode::Argument => {
                self.mode = Mode::Begin;
                Ok(self.emit(TokenKind::Plus))
            }
        }
    }

    fn minus(&mut self, ch: char) -> Result<Token> {
        self.add(ch);

        if self.accept('>') {
            self.mode = Mode::Begin;
            return Ok(self.emit(TokenKind::RightAssign));
        }

        match self.mode {
            Mode::Begin => Ok(self.emit(TokenKind::UMinus)),
            Mode::Argument => {
                self.mode = Mode::Begin;
                Ok(self.emit(TokenKind::Minus))
            }
        }
    }

    fn left_square(&mut self, ch: char) -> Result<Token> {
        self.add(ch);
        let after_term = self.mode == Mode::Argument;
        self.mode = Mode::Begin;

        if after_term && self.accept('[') {
            Ok(self.emit(TokenKind::Lbb))
        } else {
            Ok(self.emit(TokenKind::LSquare))
        }
    }

    fn colon(&mut self, ch: char) -> Result<Token> {
        self.require_argument(ch)?;
        self.mode = Mode::Begin;
        self.add(ch);

        if self.accept('=') {
            Ok(self.emit(TokenKind::ColonAssign))
        } else {
            Ok(self.emit(TokenKind::Colon))
        }
    }

    // A second decimal point or exponent marker ends the literal without
    // consuming it, so `1.2.3` lexes as `1.2` followed by `.3`.
    fn number(&mut self, first: char) -> Result<Token> {
        self.mode = Mode::Argument;
        self.add(first);
        let mut seen_decimal = first == '.';
        let mut seen_exponent = false;

        loop {
            match self.cursor.read() {
                Some(ch) if ch.is_ascii_digit() => self.add(ch),
                Some('.') if !seen_decimal => {
                    seen_decimal = true;
                    self.add('.');
                }
                Some(ch @ 'e') | Some(ch @ 'E') if !seen_exponent => {
                    seen_exponent = true;
                    seen_decimal = true;
                    self.add(ch);
                    if !self.accept('+') {
                        self.accept('-');
                    }
                }
                Some('L') => {
                    self.add('L');
                    break;
                }
                _ => {
                    self.cursor.unread();
                    break;
                }
            }
        }

        Ok(self.emit(TokenKind::NumConst))
    }

    fn dot(&mut self) -> Result<Token> {
        let second = self.cursor.position();
        match self.cursor.read() {
            Some('.') => (),
            other => return self.error("unexpected '.'".into(), other, second),
        }

        let third = self.cursor.position();
        match self.cursor.read() {
            Some('.') => (),
            other => return self.error("unexpected '..'".into(), other, third),
        }

        self.buffer.push_str("...");
        self.mode = Mode::Argument;
        Ok(self.emit(TokenKind::Ellipsis))
    }

    fn percent(&mut self, ch: char) -> Result<Token> {
        self.require_argument(ch)?;
        self.mode = Mode::Begin;
        self.add(ch);

        if self.accept('%') {
            return Ok(self.emit(TokenKind::Mod));
        }

        loop {
            match self.cursor.read() {
                None => {
                    return self.error(
                        "unterminated infix operator".into(),
                        None,
                        self.cursor.position(),
                    )
                }
                Some('%') => {
                    self.add('%');
                    return Ok(self.emit(TokenKind::Infix));
                }
                Some(ch) => self.add(ch),
            }
        }
    }

    /// Reads up to the closing `delimiter`. A backslash escapes the
    /// delimiter only; any other backslash is kept as is.
    fn quoted(&mut self, delimiter: char, what: &str) -> Result<()> {
        loop {
            match self.cursor.read() {
                None => {
                    return self.error(
                        format!("unterminated {}", what),
                        None,
                        self.cursor.position(),
                    )
                }
                Some(ch) if ch == delimiter => return Ok(()),
                Some('\\') => {
                    if !self.accept(delimiter) {
                        self.add('\\');
                    }
                }
                Some(ch) => self.add(ch),
            }
        }
    }

    fn string_quote(&mut self, delimiter: char) -> Result<Token> {
        self.mode = Mode::Argument;
        self.quoted(delimiter, "string literal")?;
        Ok(self.emit(TokenKind::StrConst))
    }

    fn backtick(&mut self, delimiter: char) -> Result<Token> {
        self.mode = Mode::Argument;
        self.quoted(delimiter, "quoted symbol")?;
        self.symbols.get_or_intern(&self.buffer);
        Ok(self.emit(TokenKind::Symbol))
    }

    fn symbol(&mut self, first: char) -> Result<Token> {
        if !(first.is_alphabetic() || !first.is_ascii()) {
            return self.unexpected(first);
        }
        self.add(first);

        loop {
            match self.cursor.read() {
                Some(ch) if ch.is_alphanumeric() || ch == '.' || ch == '_' || !ch.is_ascii() => {
                    self.add(ch)
                }
                _ => {
                    self.cursor.unread();
                    return Ok(self.emit_symbol());
                }
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
