use crate::compiler::frontend::lexer::token::TokenKind;

/// Left and right binding power of an infix operator.
///
/// An operator with left power `l` is only taken while the caller's minimum
/// is at most `l`. Its right operand is then parsed with minimum `r`: `r > l`
/// makes the operator left associative, `r < l` right associative.
pub type BindingPower = (u8, u8);

/// Minimum power for the operand of unary `+` and `-`.
pub const UNARY_SIGN: u8 = 24;
/// Minimum power for the operand of `!`.
pub const NOT: u8 = 14;
/// Minimum power for the operand of prefix `~`.
pub const FORMULA: u8 = 9;
/// Minimum power for the operand of prefix `?`.
pub const HELP: u8 = 3;
/// Left power of calls and subscripts.
pub const POSTFIX: u8 = 30;

pub fn infix(kind: TokenKind) -> Option<BindingPower> {
    use TokenKind::*;

    let power = match kind {
        Question => (2, 3),
        LeftAssign | ColonAssign => (5, 4),
        RightAssign => (6, 7),
        Tilde => (8, 9),
        Or | Or2 => (10, 11),
        And | And2 => (12, 13),
        Lt | Le | Gt | Ge | Eq | Ne => (14, 15),
        Plus | Minus => (16, 17),
        Mul | Div | Mod => (18, 19),
        Infix => (20, 21),
        Colon => (22, 23),
        Pow => (27, 26),
        // the right side stops before calls so `a$f(x)` applies `a$f`
        Dollar => (28, 31),
        _ => return None,
    };

    Some(power)
}

pub fn postfix(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::LParen | TokenKind::LSquare | TokenKind::Lbb => Some(POSTFIX),
        _ => None,
    }
}
