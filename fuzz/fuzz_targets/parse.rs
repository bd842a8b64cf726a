#![no_main]

//! Fuzz the parser with arbitrary (but well-formed) token streams: every byte
//! maps to a fixed token, and the stream is Eof-terminated, so any crash is a
//! parser bug rather than a broken input contract.

use cinder_syntax::parser;
use cinder_syntax::tokens::{Token, TokenKind};
use libfuzzer_sys::fuzz_target;

const TOKENS: &[(TokenKind, &str)] = &[
    (TokenKind::IntLiteral, "1"),
    (TokenKind::FloatLiteral, "2.5"),
    (TokenKind::CharLiteral, "'c'"),
    (TokenKind::StringLiteral, "\"s\""),
    (TokenKind::BoolLiteral, "true"),
    (TokenKind::Identifier, "x"),
    (TokenKind::Type, "int"),
    (TokenKind::If, "if"),
    (TokenKind::Elif, "elif"),
    (TokenKind::Else, "else"),
    (TokenKind::While, "while"),
    (TokenKind::For, "for"),
    (TokenKind::Repeat, "repeat"),
    (TokenKind::Return, "return"),
    (TokenKind::Break, "break"),
    (TokenKind::Continue, "continue"),
    (TokenKind::LParen, "("),
    (TokenKind::RParen, ")"),
    (TokenKind::LBrace, "{"),
    (TokenKind::RBrace, "}"),
    (TokenKind::LBracket, "["),
    (TokenKind::RBracket, "]"),
    (TokenKind::Semicolon, ";"),
    (TokenKind::Comma, ","),
    (TokenKind::Star, "*"),
    (TokenKind::Increment, "++"),
    (TokenKind::Decrement, "--"),
    (TokenKind::Assign, "="),
    (TokenKind::Operator, "+"),
    (TokenKind::Operator, "-"),
    (TokenKind::Operator, "/"),
    (TokenKind::Operator, "=="),
    (TokenKind::Operator, "||"),
    (TokenKind::Operator, "^"),
];

fuzz_target!(|data: &[u8]| {
    // Cap the stream length to keep recursive-descent depth bounded.
    let data = &data[..data.len().min(512)];

    let mut tokens: Vec<Token> = data
        .iter()
        .map(|byte| {
            let (kind, text) = TOKENS[*byte as usize % TOKENS.len()];
            Token::new(kind, text)
        })
        .collect();
    tokens.push(Token::new(TokenKind::Eof, ""));

    let _ = parser::parse(&tokens);
});
