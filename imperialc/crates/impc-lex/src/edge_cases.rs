//! Edge case tests for impc-lex

use std::collections::HashSet;

use impc_util::SourcePosition;
use proptest::prelude::*;

use crate::error::LexErrorKind;
use crate::token::{Keyword, LiteralValue, Operator, Punctuation, TokenKind};
use crate::unicode::is_whitespace;
use crate::{tokenize, LexOutput, Lexer, Token};

fn lex_all(source: &str) -> Vec<Token> {
    tokenize(source)
        .tokens
        .into_iter()
        .filter(|t| !t.is_eof())
        .collect()
}

/// Checks that lexemes plus skipped gaps rebuild `source`, and that gaps
/// hold only whitespace and reported invalid characters.
fn assert_reconstructs(source: &str, output: &LexOutput) {
    let invalid: HashSet<usize> = output
        .errors
        .iter()
        .filter(|e| e.kind == LexErrorKind::InvalidCharacter)
        .map(|e| e.position.offset)
        .collect();

    let mut rebuilt = String::new();
    let mut cursor = 0;
    for token in &output.tokens {
        let gap = &source[cursor..token.start.offset];
        for (i, c) in gap.char_indices() {
            assert!(
                is_whitespace(c) || invalid.contains(&(cursor + i)),
                "unexpected skipped {c:?} at {}",
                cursor + i
            );
        }
        rebuilt.push_str(gap);
        assert_eq!(token.lexeme, &source[token.start.offset..token.end.offset]);
        rebuilt.push_str(&token.lexeme);
        cursor = token.end.offset;
    }
    assert_eq!(cursor, source.len());
    assert_eq!(rebuilt, source);
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_whitespace_only() {
    let output = tokenize("  \t\r\n  \n");
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].start, SourcePosition::new(3, 1, 8));
}

#[test]
fn test_edge_crlf_line_endings() {
    let tokens = lex_all("a\r\nb");
    assert_eq!(tokens[1].start, SourcePosition::new(2, 1, 3));
}

#[test]
fn test_edge_tab_is_one_column() {
    let tokens = lex_all("\tx");
    assert_eq!(tokens[0].start.column, 2);
}

#[test]
fn test_edge_single_char_ident() {
    let t = lex_all("x");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].kind, TokenKind::Identifier);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("let {} = 1;", name));
    assert_eq!(t[1].lexeme, name);
}

#[test]
fn test_edge_all_keywords() {
    let source = Keyword::ALL.map(|k| k.as_str()).join(" ");
    let t = lex_all(&source);
    let keywords: Vec<TokenKind> = Keyword::ALL.into_iter().map(TokenKind::Keyword).collect();
    assert_eq!(t.into_iter().map(|t| t.kind).collect::<Vec<_>>(), keywords);
}

#[test]
fn test_edge_literal_keywords_carry_no_value() {
    for token in lex_all("true false null") {
        assert!(matches!(token.kind, TokenKind::Keyword(_)));
        assert_eq!(token.value, None);
    }
}

#[test]
fn test_edge_nested_delimiters() {
    let t = lex_all("(([{}]))");
    assert_eq!(t.len(), 8);
    assert!(t.iter().all(|t| matches!(t.kind, TokenKind::Punctuation(_))));
}

#[test]
fn test_edge_consec_ops() {
    let kinds: Vec<TokenKind> = lex_all("a+-b").into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds[1], TokenKind::Operator(Operator::Plus));
    assert_eq!(kinds[2], TokenKind::Operator(Operator::Minus));
}

#[test]
fn test_edge_arrow_vs_minus_eq() {
    let kinds: Vec<TokenKind> = lex_all("->= -=>").into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Operator(Operator::Arrow),
            TokenKind::Operator(Operator::Assign),
            TokenKind::Operator(Operator::MinusEq),
            TokenKind::Operator(Operator::Gt),
        ]
    );
}

#[test]
fn test_edge_slash_eq_is_not_comment() {
    let t = lex_all("x /= 2");
    assert_eq!(t[1].kind, TokenKind::Operator(Operator::SlashEq));
}

#[test]
fn test_edge_leading_dot_is_punctuation() {
    let t = lex_all(".5");
    assert_eq!(t[0].kind, TokenKind::Punctuation(Punctuation::Dot));
    assert_eq!(t[1].value, Some(LiteralValue::Integer(5)));
}

#[test]
fn test_edge_comment_inside_string() {
    let t = lex_all("\"// not a comment\"");
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].kind, TokenKind::StringLiteral);
}

#[test]
fn test_edge_string_inside_comment() {
    let output = tokenize("/* \"open */ x");
    assert!(!output.has_errors());
    assert_eq!(output.tokens[1].lexeme, "x");
}

#[test]
fn test_err_invalid_chars() {
    let output = tokenize("$ ~ ` ? ^ \\");
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.errors.len(), 6);
    assert!(output
        .errors
        .iter()
        .all(|e| e.kind == LexErrorKind::InvalidCharacter));
}

#[test]
fn test_err_mixed_valid_invalid() {
    let output = tokenize("let x = # 42;");
    let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Identifier,
            TokenKind::Operator(Operator::Assign),
            TokenKind::IntegerLiteral,
            TokenKind::Punctuation(Punctuation::Semicolon),
            TokenKind::EndOfFile,
        ]
    );
    assert_eq!(output.errors[0].position, SourcePosition::new(1, 9, 8));
}

#[test]
fn test_err_several_kinds_in_order() {
    let output = tokenize("@ 1. 'a\\q\n\"b\n/* c");
    let kinds: Vec<LexErrorKind> = output.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LexErrorKind::InvalidCharacter,
            LexErrorKind::MalformedNumber,
            LexErrorKind::UnterminatedString,
            LexErrorKind::InvalidEscape,
            LexErrorKind::UnterminatedString,
            LexErrorKind::UnterminatedComment,
        ]
    );
    assert_reconstructs("@ 1. 'a\\q\n\"b\n/* c", &output);
}

#[test]
fn test_edge_idempotent() {
    let source = "fn main() { let s = 'x'; /* c */ return s ** 2.0; }";
    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn test_edge_reconstruction_with_errors() {
    let source = "let € = \"open\n  x @ 3. /* a /* b */ */ 'y' // end";
    assert_reconstructs(source, &tokenize(source));
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_reconstruction() {
    proptest!(|(source in "\\PC{0,200}")| {
        let output = tokenize(&source);
        assert_reconstructs(&source, &output);
    });
}

#[test]
fn test_property_reconstruction_lexer_alphabet() {
    proptest!(|(source in "[a-z0-9 \\t\\n\"'\\\\/*.=<>!&|+-]{0,200}")| {
        let output = tokenize(&source);
        assert_reconstructs(&source, &output);
    });
}

#[test]
fn test_property_ordered_and_terminated() {
    proptest!(|(source in "\\PC{0,200}")| {
        let output = tokenize(&source);
        let (last, rest) = output.tokens.split_last().unwrap();
        prop_assert!(last.is_eof());
        prop_assert_eq!(last.start, last.end);
        prop_assert!(rest.iter().all(|t| !t.is_eof()));
        prop_assert!(rest.iter().all(|t| t.start.offset < t.end.offset));
        for pair in output.tokens.windows(2) {
            prop_assert!(pair[0].end.offset <= pair[1].start.offset);
        }
        for pair in output.errors.windows(2) {
            prop_assert!(pair[0].position.offset <= pair[1].position.offset);
        }
    });
}

#[test]
fn test_property_errors_ordered_with_bad_literals() {
    proptest!(|(source in "([0-9]{18,22}\\.?|\"[a-z\\\\]{0,4}|/\\*|[@ .a-z\n])*")| {
        let errors = tokenize(&source).errors;
        for pair in errors.windows(2) {
            prop_assert!(pair[0].position.offset <= pair[1].position.offset);
        }
    });
}

#[test]
fn test_property_positions_match_offsets() {
    proptest!(|(source in "[a-z \\n\\r\\t;é]{0,100}")| {
        for token in tokenize(&source).tokens {
            let expected = SourcePosition::START.advanced_over(&source[..token.start.offset]);
            prop_assert_eq!(token.start, expected);
        }
    });
}

#[test]
fn test_property_deterministic() {
    proptest!(|(source in "\\PC{0,100}")| {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    });
}

#[test]
fn test_property_arbitrary_identifier_strings() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        if crate::keyword_from_ident(&input).is_some() {
            prop_assert!(matches!(tokens[0].kind, TokenKind::Keyword(_)));
        } else {
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        }
    });
}

#[test]
fn test_property_arbitrary_decimal_number_strings() {
    proptest!(|(input in "[0-9]{1,19}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        let expected: u64 = input.parse().unwrap();
        prop_assert_eq!(&tokens[0].value, &Some(LiteralValue::Integer(expected)));
    });
}

#[test]
fn test_property_arbitrary_string_literals() {
    proptest!(|(input in "[^\"\\\\\\n]{0,100}")| {
        let source = format!("\"{}\"", input);
        let output = tokenize(&source);
        prop_assert!(output.errors.is_empty());
        prop_assert_eq!(output.tokens.len(), 2);
        prop_assert_eq!(&output.tokens[0].value, &Some(LiteralValue::Str(input.clone())));
    });
}

#[test]
fn test_property_chunked_scan_matches_whole() {
    proptest!(|(lines in proptest::collection::vec("[a-z0-9 +=;.\"'/@]{0,20}", 1..8), split in 0usize..8)| {
        let source = lines.join("\n");
        let split = split.min(lines.len());
        let head_len: usize = lines[..split].iter().map(|l| l.len() + 1).sum();
        let head_len = head_len.min(source.len());
        let (head, tail) = source.split_at(head_len);

        let mut first = Lexer::new(head);
        let mut tokens: Vec<Token> = first.by_ref().filter(|t| !t.is_eof()).collect();
        let mut errors = first.into_errors();

        let origin = SourcePosition::START.advanced_over(head);
        let mut second = Lexer::with_origin(tail, origin);
        tokens.extend(second.by_ref());
        errors.extend(second.into_errors());

        let whole = tokenize(&source);
        prop_assert_eq!(tokens, whole.tokens);
        prop_assert_eq!(errors, whole.errors);
    });
}
