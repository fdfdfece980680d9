use crate::compiler::source::{HasSourceLocation, Location, Position};

/// Every token kind the R grammar knows about.
///
/// Not all of them are produced by the lexer yet. The set is kept complete
/// so tokens can be exchanged with other R front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    Error,
    StrConst,
    NumConst,
    NullConst,
    Symbol,
    Function,
    IncompleteStr,
    LeftAssign,
    EqAssign,
    RightAssign,
    ColonAssign,
    Lbb,
    For,
    In,
    If,
    Else,
    While,
    Next,
    Break,
    Repeat,
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
    And,
    Or,
    And2,
    Or2,
    NsGet,
    NsGetInt,
    Comment,
    LineDirective,
    SymbolFormals,
    EqFormals,
    EqSub,
    SymbolSub,
    SymbolFunctionCall,
    SymbolPackage,
    Slot,
    Newline,
    Semicolon,
    Ellipsis,
    Comma,
    Dollar,
    Infix,
    Tilde,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LSquare,
    RSquare,
    Mul,
    Pow,
    Div,
    Mod,
    Plus,
    UPlus,
    Minus,
    UMinus,
    Colon,
    UQuestion,
    Question,
    Not,
    Na,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        use TokenKind::*;

        match self {
            EndOfInput => "END_OF_INPUT",
            Error => "ERROR",
            StrConst => "STR_CONST",
            NumConst => "NUM_CONST",
            NullConst => "NULL_CONST",
            Symbol => "SYMBOL",
            Function => "FUNCTION",
            IncompleteStr => "INCOMPLETE_STR",
            LeftAssign => "LEFT_ASSIGN",
            EqAssign => "EQ_ASSIGN",
            RightAssign => "RIGHT_ASSIGN",
            ColonAssign => "COLON_ASSIGN",
            Lbb => "LBB",
            For => "FOR",
            In => "IN",
            If => "IF",
            Else => "ELSE",
            While => "WHILE",
            Next => "NEXT",
            Break => "BREAK",
            Repeat => "REPEAT",
            Gt => "GT",
            Ge => "GE",
            Lt => "LT",
            Le => "LE",
            Eq => "EQ",
            Ne => "NE",
            And => "AND",
            Or => "OR",
            And2 => "AND2",
            Or2 => "OR2",
            NsGet => "NS_GET",
            NsGetInt => "NS_GET_INT",
            Comment => "COMMENT",
            LineDirective => "LINE_DIRECTIVE",
            SymbolFormals => "SYMBOL_FORMALS",
            EqFormals => "EQ_FORMALS",
            EqSub => "EQ_SUB",
            SymbolSub => "SYMBOL_SUB",
            SymbolFunctionCall => "SYMBOL_FUNCTION_CALL",
            SymbolPackage => "SYMBOL_PACKAGE",
            Slot => "SLOT",
            Newline => "NEWLINE",
            Semicolon => "SEMICOLON",
            Ellipsis => "ELLIPSIS",
            Comma => "COMMA",
            Dollar => "DOLLAR",
            Infix => "INFIX",
            Tilde => "TILDE",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            LParen => "LPAREN",
            RParen => "RPAREN",
            LSquare => "LSQUARE",
            RSquare => "RSQUARE",
            Mul => "MUL",
            Pow => "POW",
            Div => "DIV",
            Mod => "MOD",
            Plus => "PLUS",
            UPlus => "UPLUS",
            Minus => "MINUS",
            UMinus => "UMINUS",
            Colon => "COLON",
            UQuestion => "UQUESTION",
            Question => "QUESTION",
            Not => "NOT",
            Na => "NA",
        }
    }

    /// Reclassifies an identifier as a reserved word. Comparison is case-insensitive.
    pub fn reserved(word: &str) -> Option<TokenKind> {
        RESERVED.get(word.to_uppercase().as_str()).copied()
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Lt
                | TokenKind::Le
                | TokenKind::Gt
                | TokenKind::Ge
                | TokenKind::Eq
                | TokenKind::Ne
        )
    }

    /// Terminates a statement in an expression list.
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Semicolon)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static::lazy_static! {
    static ref RESERVED: rustc_hash::FxHashMap<&'static str, TokenKind> = {
        let mut words = rustc_hash::FxHashMap::default();
        words.insert("FUNCTION", TokenKind::Function);
        words.insert("FOR", TokenKind::For);
        words.insert("IN", TokenKind::In);
        words.insert("IF", TokenKind::If);
        words.insert("ELSE", TokenKind::Else);
        words.insert("WHILE", TokenKind::While);
        words.insert("NEXT", TokenKind::Next);
        words.insert("BREAK", TokenKind::Break);
        words.insert("REPEAT", TokenKind::Repeat);
        words.insert("NA", TokenKind::Na);
        words
    };
}

/// A lexeme together with its kind and where it starts.
///
/// For string constants and backtick symbols `text` holds the decoded
/// content without the delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
}

impl Token {
    pub fn new<T: Into<String>>(kind: TokenKind, text: T, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn end_of_input(location: Location) -> Self {
        Self::new(TokenKind::EndOfInput, "", location)
    }

    pub fn position(&self) -> Position {
        self.location.position
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl HasSourceLocation for Token {
    fn source_location(&self) -> &Location {
        &self.location
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} {}", self.kind, self.text, self.location)
    }
}
