pub mod precedence;

use crate::compiler::frontend::ast::{Argument, Block, FormalList, Node, Value};
use crate::compiler::frontend::error::Error;
use crate::compiler::frontend::lexer::token::{Token, TokenKind};
use crate::compiler::frontend::lexer::Lexer;

type Result<T> = std::result::Result<T, Error>;

/// Deepest expression nesting accepted before giving up with an error.
pub const MAX_DEPTH: usize = 64;

/// The bracket the parser is currently inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    Paren,
    Brace,
    /// Argument and formal lists, subscripts.
    Bracket,
}

/// Precedence climbing parser for R expressions.
///
/// Pulls tokens from the lexer one at a time, keeping a single token of
/// lookahead. Line breaks only terminate statements at top level and
/// directly inside braces; within parentheses and argument lists they are
/// skipped.
///
/// ```
/// use blackbeard::compiler::frontend::ast::{Block, Node, Value};
/// use blackbeard::compiler::frontend::lexer::Lexer;
/// use blackbeard::compiler::frontend::parser::Parser;
/// use blackbeard::compiler::source::Source;
/// use blackbeard::compiler::utils::symbol_table::SymbolTable;
///
/// let mut symbols = SymbolTable::default();
/// let source = Source::synthetic("1 -> a");
/// let ast = Parser::new(Lexer::new(&source, 1, &mut symbols)).parse().unwrap();
///
/// assert_eq!(
///     ast,
///     Block::from(vec![Node::assign(Node::symbol("a"), Node::scalar(Value::float(1.0)))])
/// );
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    groups: Vec<Grouping>,
    depth: usize,
    integer_literals: bool,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let current = Token::end_of_input(lexer.location());

        Self {
            lexer,
            current,
            groups: Vec::new(),
            depth: 0,
            integer_literals: true,
        }
    }

    /// Whether `nL` literals become integer values.
    pub fn with_integer_literals(mut self, enabled: bool) -> Self {
        self.integer_literals = enabled;
        self
    }

    /// Parses the whole input into a block of top-level statements.
    pub fn parse(mut self) -> Result<Block> {
        self.current = self.next_raw()?;
        let program = self.parse_exprlist(TokenKind::EndOfInput)?;

        log::trace!("parsed {} top-level statements", program.len());
        Ok(program)
    }

    //////////////////////////////
    // Token handling
    //////////////////////////////

    fn next_raw(&mut self) -> Result<Token> {
        match self.lexer.next() {
            Some(token) => token,
            None => Ok(Token::end_of_input(self.lexer.location())),
        }
    }

    fn newlines_significant(&self) -> bool {
        match self.groups.last() {
            None | Some(Grouping::Brace) => true,
            Some(Grouping::Paren) | Some(Grouping::Bracket) => false,
        }
    }

    /// Kind of the lookahead token, after dropping comments and any line
    /// breaks the current grouping ignores.
    fn peek(&mut self) -> Result<TokenKind> {
        while self.current.is(TokenKind::Comment)
            || (self.current.is(TokenKind::Newline) && !self.newlines_significant())
        {
            self.current = self.next_raw()?;
        }

        Ok(self.current.kind)
    }

    fn advance(&mut self) -> Result<Token> {
        self.peek()?;
        let next = self.next_raw()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.peek()? == kind {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Skips line breaks a dangling operator continues over.
    fn skip_newlines(&mut self) -> Result<()> {
        while matches!(self.peek()?, TokenKind::Newline) {
            self.current = self.next_raw()?;
        }
        Ok(())
    }

    fn unexpected(&self) -> Error {
        match self.current.kind {
            TokenKind::EndOfInput => Error::syntax_error("unexpected end of input", &self.current),
            kind => Error::syntax_error(format!("unexpected {}", kind), &self.current),
        }
    }

    fn enter(&mut self, grouping: Grouping) {
        self.groups.push(grouping);
    }

    fn leave(&mut self) {
        self.groups.pop();
    }

    //////////////////////////////
    // Statements
    //////////////////////////////

    /// Statements separated by line breaks or `;`, up to (not including) `closer`.
    fn parse_exprlist(&mut self, closer: TokenKind) -> Result<Block> {
        let mut block = Block::new();

        loop {
            while self.peek()?.is_terminator() {
                self.advance()?;
            }

            let kind = self.peek()?;
            if kind == closer {
                return Ok(block);
            }
            if kind == TokenKind::EndOfInput {
                return Err(self.unexpected());
            }

            block.append(Some(self.parse_expr_or_assign()?));

            let kind = self.peek()?;
            if !(kind.is_terminator() || kind == closer) {
                return Err(self.unexpected());
            }
        }
    }

    fn parse_expr_or_assign(&mut self) -> Result<Node> {
        let target = self.parse_expr(0)?;

        if self.peek()? == TokenKind::EqAssign {
            self.advance()?;
            self.skip_newlines()?;
            let value = self.parse_expr_or_assign()?;
            return Ok(self.reduce(Node::assign(target, value)));
        }

        Ok(target)
    }

    //////////////////////////////
    // Expressions
    //////////////////////////////

    fn parse_expr(&mut self, min_power: u8) -> Result<Node> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::syntax_error(
                "expression nested too deeply",
                &self.current,
            ));
        }

        self.depth += 1;
        let result = self.parse_operators(min_power);
        self.depth -= 1;
        result
    }

    fn parse_operators(&mut self, min_power: u8) -> Result<Node> {
        let mut lhs = self.parse_prefix()?;
        let mut after_comparison = false;

        loop {
            let mut kind = self.peek()?;

            if let Some(power) = precedence::postfix(kind) {
                if power < min_power {
                    break;
                }
                lhs = self.parse_postfix(lhs)?;
                continue;
            }

            // a sign that started a new line inside parentheses
            if !self.newlines_significant() {
                kind = match kind {
                    TokenKind::UMinus => TokenKind::Minus,
                    TokenKind::UPlus => TokenKind::Plus,
                    other => other,
                };
            }

            let (left, right) = match precedence::infix(kind) {
                Some(power) => power,
                None => break,
            };
            if left < min_power {
                break;
            }

            if kind.is_comparison() && after_comparison {
                return Err(Error::syntax_error(
                    "comparison operators cannot be chained",
                    &self.current,
                ));
            }
            after_comparison = kind.is_comparison();

            let operator = self.advance()?;
            self.skip_newlines()?;
            let rhs = self.parse_expr(right)?;
            lhs = self.reduce_binary(kind, &operator, lhs, rhs);
        }

        Ok(lhs)
    }

    fn reduce_binary(&self, kind: TokenKind, operator: &Token, lhs: Node, rhs: Node) -> Node {
        let node = match kind {
            TokenKind::LeftAssign => Node::assign(lhs, rhs),
            TokenKind::RightAssign => Node::assign(rhs, lhs),
            TokenKind::Pow => Node::binary("^", lhs, rhs),
            _ => Node::binary(operator.text.as_str(), lhs, rhs),
        };

        self.reduce(node)
    }

    fn reduce(&self, node: Node) -> Node {
        log::trace!("reduce: {}", node);
        node
    }

    fn parse_prefix(&mut self) -> Result<Node> {
        if self.peek()? == TokenKind::EndOfInput {
            return Err(self.unexpected());
        }
        let token = self.advance()?;

        let node = match token.kind {
            TokenKind::NumConst => self.number(&token)?,
            TokenKind::StrConst => Node::scalar(Value::character(token.text)),
            TokenKind::Na => Node::scalar(Value::na()),
            TokenKind::Symbol => Node::Symbol(token.text),
            TokenKind::Ellipsis => Node::symbol("..."),
            // the lexer reads a sign right after `function(...)` as binary
            TokenKind::UMinus | TokenKind::UPlus | TokenKind::Minus | TokenKind::Plus => {
                self.parse_unary(token, precedence::UNARY_SIGN)?
            }
            TokenKind::Not => self.parse_unary(token, precedence::NOT)?,
            TokenKind::Tilde => self.parse_unary(token, precedence::FORMULA)?,
            TokenKind::UQuestion | TokenKind::Question => {
                self.parse_unary(token, precedence::HELP)?
            }
            TokenKind::Function => self.parse_function()?,
            TokenKind::LBrace => {
                self.enter(Grouping::Brace);
                let block = self.parse_exprlist(TokenKind::RBrace)?;
                self.expect(TokenKind::RBrace)?;
                self.leave();
                Node::Block(block)
            }
            TokenKind::LParen => {
                self.enter(Grouping::Paren);
                let inner = self.parse_expr_or_assign()?;
                self.expect(TokenKind::RParen)?;
                self.leave();
                inner
            }
            kind => {
                return Err(Error::syntax_error(
                    format!("unexpected {}", kind),
                    &token,
                ))
            }
        };

        Ok(self.reduce(node))
    }

    fn parse_unary(&mut self, operator: Token, operand_power: u8) -> Result<Node> {
        self.skip_newlines()?;
        let operand = self.parse_expr(operand_power)?;

        Ok(Node::unary(operator.text, operand))
    }

    fn number(&self, token: &Token) -> Result<Node> {
        let text = token.text.as_str();
        let (digits, integer) = match text.strip_suffix('L') {
            Some(digits) => (digits, true),
            None => (text, false),
        };

        let value: f64 = digits
            .parse()
            .map_err(|_| Error::syntax_error(format!("malformed number {}", text), token))?;

        let fits = value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64;
        if integer && self.integer_literals && fits {
            Ok(Node::scalar(Value::int(value as i32)))
        } else {
            Ok(Node::scalar(Value::float(value)))
        }
    }

    fn parse_function(&mut self) -> Result<Node> {
        self.expect(TokenKind::LParen)?;
        self.enter(Grouping::Bracket);

        let mut formals = FormalList::new();
        if self.peek()? != TokenKind::RParen {
            loop {
                let name = match self.peek()? {
                    TokenKind::Symbol | TokenKind::Ellipsis => self.advance()?,
                    _ => return Err(self.unexpected()),
                };
                if formals.contains(&name.text) {
                    return Err(Error::syntax_error(
                        format!("repeated formal argument {}", name.text),
                        &name,
                    ));
                }

                let default = if self.peek()? == TokenKind::EqAssign {
                    self.advance()?;
                    Some(self.parse_expr(0)?)
                } else {
                    None
                };
                formals.append(name.text, default);

                match self.peek()? {
                    TokenKind::Comma => {
                        self.advance()?;
                    }
                    TokenKind::RParen => break,
                    _ => return Err(self.unexpected()),
                }
            }
        }

        self.expect(TokenKind::RParen)?;
        self.leave();

        self.skip_newlines()?;
        let body = self.parse_expr_or_assign()?;

        Ok(Node::function(formals, body))
    }

    //////////////////////////////
    // Calls and subscripts
    //////////////////////////////

    fn parse_postfix(&mut self, lhs: Node) -> Result<Node> {
        let opener = self.advance()?;
        self.enter(Grouping::Bracket);

        let node = match opener.kind {
            TokenKind::LParen => {
                let arguments = self.parse_arguments(TokenKind::RParen)?;
                self.expect(TokenKind::RParen)?;
                Node::call(lhs, arguments)
            }
            TokenKind::Lbb => {
                let arguments = self.parse_arguments(TokenKind::RSquare)?;
                self.expect(TokenKind::RSquare)?;
                self.expect(TokenKind::RSquare)?;
                Node::index("[[", lhs, arguments)
            }
            _ => {
                let arguments = self.parse_arguments(TokenKind::RSquare)?;
                self.expect(TokenKind::RSquare)?;
                Node::index("[", lhs, arguments)
            }
        };

        self.leave();
        Ok(self.reduce(node))
    }

    fn parse_arguments(&mut self, closer: TokenKind) -> Result<Vec<Argument>> {
        let mut arguments = Vec::new();
        if self.peek()? == closer {
            return Ok(arguments);
        }

        loop {
            let kind = self.peek()?;
            if kind == TokenKind::Comma || kind == closer {
                arguments.push(Argument::empty());
            } else {
                arguments.push(self.parse_argument()?);
            }

            match self.peek()? {
                TokenKind::Comma => {
                    self.advance()?;
                }
                kind if kind == closer => return Ok(arguments),
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_argument(&mut self) -> Result<Argument> {
        let starts_with_name = matches!(self.peek()?, TokenKind::Symbol | TokenKind::StrConst);
        let value = self.parse_expr(0)?;

        if self.peek()? != TokenKind::EqAssign {
            return Ok(Argument::positional(value));
        }

        let name = match value {
            Node::Symbol(name) if starts_with_name => name,
            Node::Vector(mut vector) if starts_with_name && vector.values.len() == 1 => {
                match vector.values.pop() {
                    Some(Value::Char { value, .. }) => value,
                    _ => return Err(self.unexpected()),
                }
            }
            _ => return Err(self.unexpected()),
        };

        self.advance()?;
        match self.peek()? {
            TokenKind::Comma | TokenKind::RParen | TokenKind::RSquare => {
                Ok(Argument::named(name, None))
            }
            _ => Ok(Argument::named(name, Some(self.parse_expr(0)?))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::frontend::arbitrary::{Identifier, NumericLiteral};
    use crate::compiler::source::Source;
    use crate::compiler::utils::symbol_table::SymbolTable;

    fn parse(code: &str) -> Result<Block> {
        let mut symbols = SymbolTable::default();
        let source = Source::synthetic(code);
        Parser::new(Lexer::new(&source, 1, &mut symbols)).parse()
    }

    fn statements(code: &str) -> Vec<Node> {
        parse(code).unwrap().into_iter().collect()
    }

    fn single(code: &str) -> Node {
        let mut nodes = statements(code);
        assert_eq!(nodes.len(), 1, "expected one statement in {:?}", code);
        nodes.remove(0)
    }

    fn num(value: f64) -> Node {
        Node::scalar(Value::float(value))
    }

    fn sym(name: &str) -> Node {
        Node::symbol(name)
    }

    fn assert_syntax_error(code: &str) {
        assert_matches!(parse(code), Err(Error::SyntaxError(_, _)));
    }

    #[test]
    fn test_literals() {
        assert_eq!(single("3"), num(3.0));
        assert_eq!(single("'x'"), Node::scalar(Value::character("x")));
        assert_eq!(single("NA"), Node::scalar(Value::na()));
        assert_eq!(single("foo"), sym("foo"));
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(single("12L"), Node::scalar(Value::int(12)));
        assert_eq!(single("1e3L"), Node::scalar(Value::int(1000)));
        assert_eq!(single("1.5L"), num(1.5));
        assert_eq!(single("3000000000L"), num(3_000_000_000.0));

        let mut symbols = SymbolTable::default();
        let source = Source::synthetic("12L");
        let ast = Parser::new(Lexer::new(&source, 1, &mut symbols))
            .with_integer_literals(false)
            .parse()
            .unwrap();
        assert_eq!(ast, Block::from(vec![num(12.0)]));
    }

    #[test]
    fn test_malformed_number() {
        assert_syntax_error("1e");
        assert_syntax_error("2e+L");
    }

    #[test]
    fn test_assignment() {
        let expected = Node::assign(sym("a"), num(1.0));

        assert_eq!(single("a <- 1"), expected);
        assert_eq!(single("a = 1"), expected);
        assert_eq!(single("1 -> a"), expected);
        assert_eq!(
            single("a <- b <- 2"),
            Node::assign(sym("a"), Node::assign(sym("b"), num(2.0)))
        );
        assert_eq!(
            single("a = b = 2"),
            Node::assign(sym("a"), Node::assign(sym("b"), num(2.0)))
        );
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            single("3 + 4 * 5"),
            Node::binary("+", num(3.0), Node::binary("*", num(4.0), num(5.0)))
        );
        assert_eq!(
            single("2 ^ 3 ^ 2"),
            Node::binary("^", num(2.0), Node::binary("^", num(3.0), num(2.0)))
        );
        assert_eq!(
            single("1 - 2 - 3"),
            Node::binary("-", Node::binary("-", num(1.0), num(2.0)), num(3.0))
        );
        assert_eq!(
            single("-2 ^ 2"),
            Node::unary("-", Node::binary("^", num(2.0), num(2.0)))
        );
        assert_eq!(
            single("-1:3"),
            Node::binary(":", Node::unary("-", num(1.0)), num(3.0))
        );
        assert_eq!(
            single("a %in% b + 1"),
            Node::binary("+", Node::binary("%in%", sym("a"), sym("b")), num(1.0))
        );
        assert_eq!(
            single("!a & b"),
            Node::binary("&", Node::unary("!", sym("a")), sym("b"))
        );
        assert_eq!(
            single("!a == b"),
            Node::unary("!", Node::binary("==", sym("a"), sym("b")))
        );
        assert_eq!(single("2 ** 3"), Node::binary("^", num(2.0), num(3.0)));
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            single("(3 + 4) * 5"),
            Node::binary("*", Node::binary("+", num(3.0), num(4.0)), num(5.0))
        );
        assert_eq!(single("(a = 1)"), Node::assign(sym("a"), num(1.0)));
        assert_eq!(
            single("(a\n+ b)"),
            Node::binary("+", sym("a"), sym("b"))
        );
        assert_eq!(
            single("(a\n- b)"),
            Node::binary("-", sym("a"), sym("b"))
        );
    }

    #[test]
    fn test_comparison_is_non_associative() {
        assert_syntax_error("a < b < c");
        assert_syntax_error("a == b + 1 != c");
        assert_eq!(
            single("a < b & b < c"),
            Node::binary(
                "&",
                Node::binary("<", sym("a"), sym("b")),
                Node::binary("<", sym("b"), sym("c"))
            )
        );
        assert_eq!(
            single("(a < b) < c"),
            Node::binary("<", Node::binary("<", sym("a"), sym("b")), sym("c"))
        );
    }

    #[test]
    fn test_separators() {
        let expected = vec![num(3.0), num(3.0)];

        assert_eq!(statements("3;;\n3"), expected);
        assert_eq!(statements("3\n3"), expected);
        assert_eq!(statements("\n\n3\n\n;3;\n"), expected);
        assert!(statements("").is_empty());
        assert!(statements(";\n;").is_empty());
    }

    #[test]
    fn test_dangling_operator() {
        assert_eq!(single("a +\n b"), Node::binary("+", sym("a"), sym("b")));
        assert_eq!(single("a <-\n\n 1"), Node::assign(sym("a"), num(1.0)));
        assert_eq!(statements("a\n+ b"), vec![sym("a"), Node::unary("+", sym("b"))]);
    }

    #[test]
    fn test_comments_are_ignored() {
        assert_eq!(
            statements("# leading\na <- 1 # trailing\n# end"),
            vec![Node::assign(sym("a"), num(1.0))]
        );
    }

    #[test]
    fn test_function() {
        let mut formals = FormalList::new();
        formals.append("x", None);
        formals.append("y", Some(num(0.0)));
        let body = Block::from(vec![Node::binary("+", sym("x"), sym("y"))]);

        assert_eq!(
            single("function(x, y=0) { x + y }"),
            Node::function(formals.clone(), Node::Block(body.clone()))
        );
        assert_eq!(
            single("function(x,\n y = 0)\n{\n x + y\n}"),
            Node::function(formals, Node::Block(body))
        );
        assert_eq!(
            single("function() NULL"),
            Node::function(FormalList::new(), sym("NULL"))
        );
    }

    #[test]
    fn test_function_body_extends_right() {
        let mut formals = FormalList::new();
        formals.append("x", None);

        assert_eq!(
            single("f <- function(x) x + 1"),
            Node::assign(
                sym("f"),
                Node::function(formals, Node::binary("+", sym("x"), num(1.0)))
            )
        );
    }

    #[test]
    fn test_function_body_starting_with_prefix_operator() {
        let mut formals = FormalList::new();
        formals.append("x", None);

        assert_eq!(
            single("f <- function(x) -x"),
            Node::assign(
                sym("f"),
                Node::function(formals.clone(), Node::unary("-", sym("x")))
            )
        );
        assert_eq!(
            single("function(x) +1"),
            Node::function(formals.clone(), Node::unary("+", num(1.0)))
        );
        assert_eq!(
            single("function(x) ?x"),
            Node::function(formals.clone(), Node::unary("?", sym("x")))
        );
        assert_eq!(
            single("function(x) -x + 1"),
            Node::function(
                formals,
                Node::binary("+", Node::unary("-", sym("x")), num(1.0))
            )
        );
    }

    #[test]
    fn test_nesting_limit() {
        let shallow = format!("{}1{}", "(".repeat(MAX_DEPTH / 2), ")".repeat(MAX_DEPTH / 2));
        assert_eq!(single(&shallow), num(1.0));

        let deep = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
        match parse(&deep) {
            Err(Error::SyntaxError(message, _)) => {
                assert_eq!(message, "expression nested too deeply")
            }
            other => panic!("expected syntax error, got {:?}", other),
        }

        assert_syntax_error(&format!("{}1", "- ".repeat(1000)));
        assert_syntax_error(&format!("{}1", "f(".repeat(1000)));
        assert_syntax_error(&format!("{}1", "{".repeat(1000)));
    }

    #[test]
    fn test_function_formals() {
        let mut formals = FormalList::new();
        formals.append("x", None);
        formals.append("...", None);
        formals.append("n", Some(Node::binary("*", sym("x"), num(2.0))));

        assert_eq!(
            single("function(x, ..., n = x * 2) n"),
            Node::function(formals, sym("n"))
        );
        assert_syntax_error("function(x, x) x");
        assert_syntax_error("function(1) x");
        assert_syntax_error("function(x y) x");
    }

    #[test]
    fn test_calls() {
        assert_eq!(single("f()"), Node::call(sym("f"), vec![]));
        assert_eq!(
            single("f(a, n = 1, 'm' = 2, k = )"),
            Node::call(
                sym("f"),
                vec![
                    Argument::positional(sym("a")),
                    Argument::named("n", Some(num(1.0))),
                    Argument::named("m", Some(num(2.0))),
                    Argument::named("k", None),
                ]
            )
        );
        assert_eq!(
            single("f(x)(y)"),
            Node::call(
                Node::call(sym("f"), vec![Argument::positional(sym("x"))]),
                vec![Argument::positional(sym("y"))]
            )
        );
        assert_eq!(
            single("f(\n  a,\n  b\n)"),
            Node::call(
                sym("f"),
                vec![Argument::positional(sym("a")), Argument::positional(sym("b"))]
            )
        );
        assert_eq!(
            single("f(...)"),
            Node::call(sym("f"), vec![Argument::positional(sym("..."))])
        );
    }

    #[test]
    fn test_index() {
        assert_eq!(
            single("x[1]"),
            Node::index("[", sym("x"), vec![Argument::positional(num(1.0))])
        );
        assert_eq!(
            single("x[, 2]"),
            Node::index(
                "[",
                sym("x"),
                vec![Argument::empty(), Argument::positional(num(2.0))]
            )
        );
        assert_eq!(
            single("x[[i]]"),
            Node::index("[[", sym("x"), vec![Argument::positional(sym("i"))])
        );
        assert_eq!(
            single("x[[y[1]]]"),
            Node::index(
                "[[",
                sym("x"),
                vec![Argument::positional(Node::index(
                    "[",
                    sym("y"),
                    vec![Argument::positional(num(1.0))]
                ))]
            )
        );
        assert_syntax_error("x[[1]");
    }

    #[test]
    fn test_dollar() {
        assert_eq!(
            single("a$b$c"),
            Node::binary("$", Node::binary("$", sym("a"), sym("b")), sym("c"))
        );
        assert_eq!(
            single("a$f(1)"),
            Node::call(
                Node::binary("$", sym("a"), sym("f")),
                vec![Argument::positional(num(1.0))]
            )
        );
        assert_eq!(
            single("x ^ a$b"),
            Node::binary("^", sym("x"), Node::binary("$", sym("a"), sym("b")))
        );
    }

    #[test]
    fn test_formula_and_help() {
        assert_eq!(single("y ~ x"), Node::binary("~", sym("y"), sym("x")));
        assert_eq!(
            single("~ x + z"),
            Node::unary("~", Node::binary("+", sym("x"), sym("z")))
        );
        assert_eq!(single("?mean"), Node::unary("?", sym("mean")));
        assert_eq!(
            single("a ? b <- 1"),
            Node::binary("?", sym("a"), Node::assign(sym("b"), num(1.0)))
        );
    }

    #[test]
    fn test_block() {
        assert_eq!(
            single("{\n  a <- 1\n  b\n}"),
            Node::Block(Block::from(vec![Node::assign(sym("a"), num(1.0)), sym("b")]))
        );
        assert_eq!(single("{}"), Node::Block(Block::new()));
        assert_eq!(
            single("f({a\nb})"),
            Node::call(
                sym("f"),
                vec![Argument::positional(Node::Block(Block::from(vec![
                    sym("a"),
                    sym("b")
                ])))]
            )
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert_syntax_error("a b");
        assert_syntax_error("1.23.4");
        assert_syntax_error("(a");
        assert_syntax_error("{ a");
        assert_syntax_error("f(a");
        assert_syntax_error(")");
        assert_syntax_error("a <-");
        assert_syntax_error("if (a) b");
        assert_syntax_error("f(a b)");
    }

    #[test]
    fn test_error_carries_token() {
        match parse("x <- 1\ny <- )") {
            Err(Error::SyntaxError(message, token)) => {
                assert_eq!(message, "unexpected RPAREN");
                assert_eq!(token.kind, TokenKind::RParen);
                assert_eq!(token.position().line, 2);
                assert_eq!(token.position().column, 6);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }

        match parse("f(1,") {
            Err(Error::SyntaxError(message, token)) => {
                assert_eq!(message, "unexpected end of input");
                assert_eq!(token.kind, TokenKind::EndOfInput);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_lexical_errors_surface_unchanged() {
        assert_matches!(parse("a <- 'open"), Err(Error::LexicalError(_, _)));
        assert_matches!(parse("x ..,"), Err(Error::LexicalError(_, _)));
    }

    #[quickcheck]
    fn test_numeric_literal_parses_to_scalar(literal: NumericLiteral) -> bool {
        let text = literal.0.trim_end_matches('L');
        let expected = match text.parse::<f64>() {
            Ok(value) => value,
            Err(_) => return false,
        };

        match parse(&literal.0).map(|block| block.into_iter().collect::<Vec<_>>()) {
            Ok(nodes) => match &nodes[..] {
                [Node::Vector(vector)] => match &vector.values[..] {
                    [Value::Float { value, na: false }] => *value == expected,
                    [Value::Int { value, na: false }] => *value as f64 == expected,
                    _ => false,
                },
                _ => false,
            },
            Err(_) => false,
        }
    }

    #[quickcheck]
    fn test_identifier_parses_to_symbol(identifier: Identifier) -> bool {
        parse(&identifier.0) == Ok(Block::from(vec![Node::Symbol(identifier.0.clone())]))
    }
}
