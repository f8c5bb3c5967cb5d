use pretty_assertions::assert_eq;
use tarn_ir::TokenKind;

use super::*;
use crate::test_support::kinds;

#[test]
fn every_keyword_is_recognized() {
    for kind in TokenKind::KEYWORDS {
        let text = kind.lexeme().unwrap();
        assert_eq!(keyword(text), Some(kind), "{text}");
    }
}

#[test]
fn near_misses_are_not_keywords() {
    for text in ["", "f", "funct", "Func", "FUNC", "fun", "lets", "constructors", "_if"] {
        assert_eq!(keyword(text), None, "{text}");
    }
}

#[test]
fn length_bounds() {
    let table = table();
    assert_eq!(table.shortest, 2);
    assert_eq!(table.longest, "constructor".len());
}

#[test]
fn keyword_versus_identifier() {
    assert_eq!(
        kinds("func funct"),
        vec![TokenKind::Func, TokenKind::Identifier]
    );
    assert_eq!(
        kinds("if iff in int"),
        vec![
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::In,
            TokenKind::Identifier,
        ]
    );
}
