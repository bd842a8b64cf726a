//! Property-based tests for the Cinder parser.
//!
//! These tests use proptest to verify invariants across many randomly
//! generated token streams, catching edge cases that hand-written tests might
//! miss. The `tokenize` helper stands in for the external lexer.

use cinder_syntax::ast::{Declaration, Expr, JumpStmt, Statement, TranslationUnit};
use cinder_syntax::operators;
use cinder_syntax::parser;
use cinder_syntax::tokens::{Token, TokenKind};
use proptest::prelude::*;

fn classify(lexeme: &str) -> TokenKind {
    match lexeme {
        "int" | "float" | "char" | "bool" | "void" => TokenKind::Type,
        "(" => TokenKind::LParen,
        ")" => TokenKind::RParen,
        "{" => TokenKind::LBrace,
        "}" => TokenKind::RBrace,
        ";" => TokenKind::Semicolon,
        "," => TokenKind::Comma,
        "*" => TokenKind::Star,
        "=" => TokenKind::Assign,
        "return" => TokenKind::Return,
        _ if operators::binary_precedence(lexeme).is_some() => TokenKind::Operator,
        _ if lexeme.starts_with(|c: char| c.is_ascii_digit()) => TokenKind::IntLiteral,
        _ => TokenKind::Identifier,
    }
}

fn tokenize(lexemes: &[String]) -> Vec<Token> {
    let mut tokens: Vec<Token> = lexemes
        .iter()
        .map(|lexeme| Token::new(classify(lexeme), lexeme.as_str()))
        .collect();
    tokens.push(Token::new(TokenKind::Eof, ""));
    tokens
}

/// Strategy for identifiers that the stand-in lexer will not misclassify.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}".prop_filter("not a reserved word", |s| {
        !matches!(
            s.as_str(),
            "if" | "elif"
                | "else"
                | "while"
                | "for"
                | "repeat"
                | "return"
                | "break"
                | "continue"
                | "int"
                | "float"
                | "char"
                | "bool"
                | "void"
                | "true"
                | "false"
        )
    })
}

fn type_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["int", "float", "char", "bool"]).prop_map(String::from)
}

/// One init-declarator: pointer marker, name, optional integer initializer.
type DeclaratorSpec = (bool, String, Option<u8>);

fn declarators_strategy() -> impl Strategy<Value = Vec<DeclaratorSpec>> {
    prop::collection::vec(
        (any::<bool>(), ident_strategy(), prop::option::of(0u8..100)),
        1..4,
    )
}

fn var_decl_lexemes(ty: &str, declarators: &[DeclaratorSpec]) -> Vec<String> {
    let mut lexemes = vec![ty.to_string()];
    for (i, (is_ptr, name, init)) in declarators.iter().enumerate() {
        if i > 0 {
            lexemes.push(",".to_string());
        }
        if *is_ptr {
            lexemes.push("*".to_string());
        }
        lexemes.push(name.clone());
        if let Some(value) = init {
            lexemes.push("=".to_string());
            lexemes.push(value.to_string());
        }
    }
    lexemes.push(";".to_string());
    lexemes
}

/// Wrap an expression lexeme sequence in `int f ( ) { return ... ; }`.
fn wrap_in_return(expr_lexemes: &[String]) -> Vec<String> {
    let mut lexemes: Vec<String> = ["int", "f", "(", ")", "{", "return"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    lexemes.extend_from_slice(expr_lexemes);
    lexemes.push(";".to_string());
    lexemes.push("}".to_string());
    lexemes
}

fn return_expr(unit: &TranslationUnit) -> &Expr {
    match &unit.declarations[0] {
        Declaration::Function(f) => {
            let body = f.body.as_ref().expect("function should have a body");
            match &body.statements[0] {
                Statement::Jump(JumpStmt::Return(expr)) => expr,
                other => panic!("expected return statement, got {other:?}"),
            }
        }
        other => panic!("expected function declaration, got {other:?}"),
    }
}

fn binary_op_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(
        operators::BINARY_OPERATORS
            .iter()
            .map(|o| o.spelling)
            .collect::<Vec<_>>(),
    )
    .prop_map(String::from)
}

proptest! {
    /// Generated variable declarations parse with exactly the generated
    /// declaration and declarator counts.
    #[test]
    fn generated_var_declarations_parse_with_exact_counts(
        decls in prop::collection::vec((type_strategy(), declarators_strategy()), 1..5)
    ) {
        let mut lexemes = Vec::new();
        for (ty, declarators) in &decls {
            lexemes.extend(var_decl_lexemes(ty, declarators));
        }
        let unit = parser::parse(&tokenize(&lexemes)).expect("generated program should parse");

        prop_assert_eq!(unit.declarations.len(), decls.len());
        for (declaration, (_, declarators)) in unit.declarations.iter().zip(&decls) {
            match declaration {
                Declaration::Var(v) => prop_assert_eq!(v.declarators.len(), declarators.len()),
                other => prop_assert!(false, "expected variable declaration, got {:?}", other),
            }
        }
    }

    /// Parsing the same token stream twice yields structurally identical trees.
    #[test]
    fn parsing_is_deterministic(
        decls in prop::collection::vec((type_strategy(), declarators_strategy()), 1..5)
    ) {
        let mut lexemes = Vec::new();
        for (ty, declarators) in &decls {
            lexemes.extend(var_decl_lexemes(ty, declarators));
        }
        let tokens = tokenize(&lexemes);
        let first = parser::parse(&tokens).expect("generated program should parse");
        let second = parser::parse(&tokens).expect("generated program should parse");
        prop_assert_eq!(first, second);
    }

    /// Chains of one operator always nest to the right, for every operator in
    /// the table.
    #[test]
    fn same_operator_chains_nest_right(
        op in binary_op_strategy(),
        operands in prop::collection::vec(ident_strategy(), 2..6)
    ) {
        let mut expr_lexemes = vec![operands[0].clone()];
        for operand in &operands[1..] {
            expr_lexemes.push(op.clone());
            expr_lexemes.push(operand.clone());
        }
        let unit = parser::parse(&tokenize(&wrap_in_return(&expr_lexemes)))
            .expect("generated chain should parse");

        let mut current = return_expr(&unit);
        for operand in &operands[..operands.len() - 1] {
            match current {
                Expr::Binary(left, found_op, right) => {
                    prop_assert_eq!(found_op, &op);
                    prop_assert_eq!(left.as_ref(), &Expr::Ident(operand.clone()));
                    current = right.as_ref();
                }
                other => prop_assert!(false, "expected binary node, got {:?}", other),
            }
        }
        prop_assert_eq!(current, &Expr::Ident(operands.last().unwrap().clone()));
    }

    /// With two distinct precedence levels, the looser operator always ends up
    /// at the root regardless of source order.
    #[test]
    fn looser_operator_floats_to_the_root(
        (loose, tight) in binary_op_strategy().prop_flat_map(|a| {
            (Just(a), binary_op_strategy())
        }).prop_filter("distinct precedence", |(a, b)| {
            operators::binary_precedence(a) != operators::binary_precedence(b)
        }).prop_map(|(a, b)| {
            if operators::binary_precedence(&a) < operators::binary_precedence(&b) {
                (a, b)
            } else {
                (b, a)
            }
        }),
        (a, b, c) in (ident_strategy(), ident_strategy(), ident_strategy())
    ) {
        // a loose b tight c  =>  loose(a, tight(b, c))
        let lexemes = wrap_in_return(&[
            a.clone(), loose.clone(), b.clone(), tight.clone(), c.clone(),
        ]);
        let unit = parser::parse(&tokenize(&lexemes)).expect("expression should parse");
        match return_expr(&unit) {
            Expr::Binary(_, op, right) => {
                prop_assert_eq!(op, &loose);
                prop_assert!(matches!(right.as_ref(), Expr::Binary(_, t, _) if t == &tight));
            }
            other => prop_assert!(false, "expected binary node, got {:?}", other),
        }

        // a tight b loose c  =>  loose(tight(a, b), c)
        let lexemes = wrap_in_return(&[a, tight.clone(), b, loose.clone(), c]);
        let unit = parser::parse(&tokenize(&lexemes)).expect("expression should parse");
        match return_expr(&unit) {
            Expr::Binary(left, op, _) => {
                prop_assert_eq!(op, &loose);
                prop_assert!(matches!(left.as_ref(), Expr::Binary(_, t, _) if t == &tight));
            }
            other => prop_assert!(false, "expected binary node, got {:?}", other),
        }
    }

    /// A trailing token after a valid program is always a syntax error.
    #[test]
    fn trailing_garbage_fails(
        (ty, declarators) in (type_strategy(), declarators_strategy())
    ) {
        let mut lexemes = var_decl_lexemes(&ty, &declarators);
        lexemes.push(")".to_string());
        prop_assert!(parser::parse(&tokenize(&lexemes)).is_err());
    }
}
