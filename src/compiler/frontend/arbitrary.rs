use super::lexer::token::TokenKind;
use quickcheck::{Arbitrary, Gen};

/// Text of a well-formed numeric constant such as `12`, `3.5e-2` or `7L`.
#[derive(Clone, Debug)]
pub struct NumericLiteral(pub String);

/// A name that lexes as a single `SYMBOL`.
#[derive(Clone, Debug)]
pub struct Identifier(pub String);

impl Arbitrary for NumericLiteral {
    fn arbitrary(gen: &mut Gen) -> Self {
        let mut literal = u32::arbitrary(gen).to_string();

        if bool::arbitrary(gen) {
            literal.push('.');
            literal.push_str(&u16::arbitrary(gen).to_string());
        }

        if bool::arbitrary(gen) {
            literal.push(*gen.choose(&['e', 'E']).unwrap_or(&'e'));
            literal.push_str(gen.choose(&["", "+", "-"]).unwrap_or(&""));
            literal.push_str(&u8::arbitrary(gen).to_string());
        }

        if bool::arbitrary(gen) {
            literal.push('L');
        }

        NumericLiteral(literal)
    }
}

impl Arbitrary for Identifier {
    fn arbitrary(gen: &mut Gen) -> Self {
        let first = ['a', 'x', 'Z', 'é', 'λ', '日'];
        let rest = ['a', 'b', 'Q', '0', '9', '.', '_', 'ß', '☆'];

        let mut name = String::new();
        name.push(*gen.choose(&first).unwrap_or(&'a'));
        for _ in 0..(usize::arbitrary(gen) % 12) {
            name.push(*gen.choose(&rest).unwrap_or(&'a'));
        }

        if TokenKind::reserved(&name).is_some() {
            name.push('_');
        }

        Identifier(name)
    }
}
