#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::LexErrorKind;
use pretty_assertions::assert_eq;
use crate::TokenKind::{
    Assign, BlockEnd, BlockStart, BraceClose, BraceOpen, Decimal, Decrement, Divide, End, Equals,
    For, Foreach, Identifier, If, Increment, Int, IntDivide, Is, IsNot, Minus, NotEquals, Plus,
    Power, Times, TypeBool, TypeDouble, TypeFloat, TypeInt, TypeString, While,
};

/// Helper: scan with the default configuration.
fn scan_ok(source: &str) -> ScanOutput {
    Scanner::new(source)
        .scan()
        .unwrap_or_else(|e| panic!("scan of {source:?} failed: {e}"))
}

/// Helper: scan and return kinds only.
fn kinds(source: &str) -> Vec<TokenKind> {
    scan_ok(source).tokens().kinds().collect()
}

/// Helper: scan and return lexemes only.
fn lexemes(source: &str) -> Vec<String> {
    scan_ok(source).lexemes().to_vec()
}

/// Helper: scan with a configuration and expect an error.
fn scan_err_with(source: &str, config: ScanConfig) -> LexError {
    match Scanner::with_config(source, config).scan() {
        Ok(output) => panic!(
            "expected error for {source:?}, got {:?}",
            output.tokens().kinds().collect::<Vec<_>>()
        ),
        Err(e) => e,
    }
}

fn scan_err(source: &str) -> LexError {
    scan_err_with(source, ScanConfig::default())
}

// ─── Empty and Whitespace ────────────────────────────────────────────

#[test]
fn empty_source() {
    let output = scan_ok("");
    assert!(output.tokens().is_empty());
    assert!(output.lexemes().is_empty());
    assert_eq!(output.indent_stack().levels(), &[0]);
}

#[test]
fn spaces_and_tabs_are_skipped() {
    assert_eq!(kinds("  \t x \t "), vec![Identifier]);
}

#[test]
fn leading_whitespace_on_first_line_is_not_indentation() {
    assert_eq!(kinds("    x"), vec![Identifier]);
}

// ─── Identifiers and Keywords ────────────────────────────────────────

#[test]
fn identifier_records_lexeme() {
    let output = scan_ok("alex");
    assert_eq!(output.tokens().kinds().collect::<Vec<_>>(), vec![Identifier]);
    assert_eq!(output.lexemes(), &["alex".to_string()]);
    assert_eq!(output.tokens()[0].span, Span::new(0, 4));
}

#[test]
fn identifier_with_underscores() {
    assert_eq!(lexemes("_private snake_case __"), vec!["_private", "snake_case", "__"]);
}

#[test]
fn digits_end_an_identifier() {
    assert_eq!(kinds("x1"), vec![Identifier, Int]);
    assert_eq!(lexemes("x1"), vec!["x", "1"]);
}

#[test]
fn keyword_has_no_lexeme() {
    let output = scan_ok("if");
    assert_eq!(output.tokens().kinds().collect::<Vec<_>>(), vec![If]);
    assert!(output.lexemes().is_empty());
}

#[test]
fn all_keywords() {
    assert_eq!(
        kinds("if for end while foreach int float string bool double"),
        vec![
            If, For, End, While, Foreach, TypeInt, TypeFloat, TypeString, TypeBool, TypeDouble
        ]
    );
}

#[test]
fn keywords_ignore_case() {
    for source in ["IF", "If", "iF"] {
        let output = scan_ok(source);
        assert_eq!(output.tokens().kinds().collect::<Vec<_>>(), vec![If], "{source:?}");
        assert!(output.lexemes().is_empty(), "{source:?}");
    }
    assert_eq!(
        kinds("WHILE x
    FOR y
    End"),
        vec![While, Identifier, BlockStart, For, Identifier, End, BlockEnd]
    );
    assert_eq!(lexemes("WHILE x
    FOR y
    End"), vec!["x", "y"]);
}

#[test]
fn is_not_ignores_case() {
    assert_eq!(kinds("a Is NOT b"), vec![Identifier, IsNot, Identifier]);
    assert_eq!(kinds("a IS Not b"), vec![Identifier, IsNot, Identifier]);
    assert_eq!(lexemes("a Is NOT b"), vec!["a", "b"]);
}

#[test]
fn keyword_prefix_is_identifier() {
    assert_eq!(kinds("iffy ending"), vec![Identifier, Identifier]);
}

#[test]
fn is_and_is_not() {
    assert_eq!(kinds("a is b"), vec![Identifier, Is, Identifier]);
    assert_eq!(kinds("a is not b"), vec![Identifier, IsNot, Identifier]);
    assert_eq!(kinds("a is \t not b"), vec![Identifier, IsNot, Identifier]);
    assert_eq!(lexemes("a is not b"), vec!["a", "b"]);
}

#[test]
fn is_not_span_covers_both_words() {
    let output = scan_ok("is  not");
    assert_eq!(output.tokens()[0].kind, IsNot);
    assert_eq!(output.tokens()[0].span, Span::new(0, 7));
}

#[test]
fn is_followed_by_other_word_keeps_it() {
    assert_eq!(kinds("is nothing"), vec![Is, Identifier]);
    assert_eq!(lexemes("is nothing"), vec!["nothing"]);
    assert_eq!(kinds("not"), vec![Identifier]);
}

#[test]
fn is_not_does_not_cross_lines() {
    assert_eq!(kinds("x is\nnot"), vec![Identifier, Is, Identifier]);
}

// ─── Numbers ─────────────────────────────────────────────────────────

#[test]
fn integer() {
    let output = scan_ok("42");
    assert_eq!(output.tokens().kinds().collect::<Vec<_>>(), vec![Int]);
    assert_eq!(output.lexemes(), &["42".to_string()]);
}

#[test]
fn decimal() {
    let output = scan_ok("3.14");
    assert_eq!(output.tokens().kinds().collect::<Vec<_>>(), vec![Decimal]);
    assert_eq!(output.lexemes(), &["3.14".to_string()]);
    assert_eq!(output.tokens()[0].span, Span::new(0, 4));
}

#[test]
fn trailing_dot_is_decimal() {
    assert_eq!(kinds("3."), vec![Decimal]);
    assert_eq!(lexemes("3."), vec!["3."]);
}

#[test]
fn second_decimal_point_is_error() {
    let err = scan_err("3.1.4");
    assert_eq!(err.kind, LexErrorKind::SecondDecimalPoint);
    assert_eq!(err.span, Span::new(3, 4));
    assert_eq!(err.line, 1);
    assert!(!err.kind.is_indentation());
}

#[test]
fn double_dot_is_error() {
    assert_eq!(scan_err("1..2").kind, LexErrorKind::SecondDecimalPoint);
}

#[test]
fn leading_dot_is_unexpected() {
    assert_eq!(
        scan_err(".5").kind,
        LexErrorKind::UnexpectedChar { found: '.' }
    );
}

#[test]
fn number_followed_by_letters() {
    assert_eq!(kinds("4ever"), vec![Int, Identifier]);
}

// ─── Operators ───────────────────────────────────────────────────────

#[test]
fn single_operators() {
    assert_eq!(
        kinds("+ - * / = { }"),
        vec![Plus, Minus, Times, Divide, Assign, BraceOpen, BraceClose]
    );
}

#[test]
fn doubled_operators() {
    assert_eq!(
        kinds("++ -- ** // == !="),
        vec![Increment, Decrement, Power, IntDivide, Equals, NotEquals]
    );
}

#[test]
fn increment_is_one_token() {
    let output = scan_ok("++");
    assert_eq!(output.tokens().len(), 1);
    assert_eq!(output.tokens()[0].kind, Increment);
    assert_eq!(output.tokens()[0].span, Span::new(0, 2));
}

#[test]
fn plus_then_other() {
    assert_eq!(kinds("+x"), vec![Plus, Identifier]);
    assert_eq!(kinds("+-"), vec![Plus, Minus]);
}

#[test]
fn tripled_operator_pairs_first_two() {
    assert_eq!(kinds("+++"), vec![Increment, Plus]);
    assert_eq!(kinds("***"), vec![Power, Times]);
}

#[test]
fn operators_without_spaces() {
    assert_eq!(
        kinds("a=b**2//c"),
        vec![Identifier, Assign, Identifier, Power, Int, IntDivide, Identifier]
    );
}

#[test]
fn lone_bang_is_unexpected() {
    let err = scan_err("x ! y");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { found: '!' });
    assert_eq!(err.span, Span::new(2, 3));
}

// ─── Errors ──────────────────────────────────────────────────────────

#[test]
fn unexpected_character_reports_line() {
    let err = scan_err("x = 1\ny = 2 ; z");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { found: ';' });
    assert_eq!(err.line, 2);
    assert_eq!(err.span, Span::new(12, 13));
}

#[test]
fn non_ascii_character_is_reported_whole() {
    let err = scan_err("x = \u{00e9}");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { found: '\u{00e9}' });
    assert_eq!(err.span, Span::new(4, 6));
}

#[test]
fn interior_null_is_unexpected() {
    let err = scan_err("a\0b");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { found: '\0' });
}

#[test]
fn string_literal_fails_explicitly() {
    for source in ["x = \"hi\"", "x = 'hi'"] {
        let err = scan_err(source);
        assert_eq!(err.kind, LexErrorKind::UnsupportedStringLiteral, "{source:?}");
        assert_eq!(err.span, Span::new(4, 5));
    }
}

#[test]
fn lone_carriage_return_is_unexpected() {
    assert_eq!(
        scan_err("x\ry").kind,
        LexErrorKind::UnexpectedChar { found: '\r' }
    );
}

// ─── Indentation ─────────────────────────────────────────────────────

#[test]
fn four_spaces_open_a_block() {
    assert_eq!(
        kinds("if x\n    y"),
        vec![If, Identifier, BlockStart, Identifier, BlockEnd]
    );
}

#[test]
fn tab_opens_a_block() {
    assert_eq!(
        kinds("if x\n\ty"),
        vec![If, Identifier, BlockStart, Identifier, BlockEnd]
    );
}

#[test]
fn tab_and_spaces_combine() {
    assert_eq!(
        kinds("a\n\t    b"),
        vec![Identifier, BlockStart, Identifier, BlockEnd]
    );
}

#[test]
fn block_tokens_are_zero_width_at_line_content() {
    let output = scan_ok("a\n    b");
    let start = output.tokens()[1];
    assert_eq!(start.kind, BlockStart);
    assert_eq!(start.span, Span::point(6));
    let end = output.tokens()[3];
    assert_eq!(end.kind, BlockEnd);
    assert_eq!(end.span, Span::point(7));
}

#[test]
fn same_level_emits_nothing() {
    assert_eq!(kinds("a\nb\nc"), vec![Identifier, Identifier, Identifier]);
}

#[test]
fn dedent_closes_blocks() {
    assert_eq!(
        kinds("a\n    b\n        c\nd"),
        vec![
            Identifier, BlockStart, Identifier, BlockStart, Identifier, BlockEnd, BlockEnd,
            Identifier
        ]
    );
}

#[test]
fn partial_dedent() {
    assert_eq!(
        kinds("a\n    b\n        c\n    d"),
        vec![
            Identifier, BlockStart, Identifier, BlockStart, Identifier, BlockEnd, Identifier,
            BlockEnd
        ]
    );
}

#[test]
fn multi_level_jump_opens_one_block() {
    assert_eq!(
        kinds("a\n            b\nc"),
        vec![Identifier, BlockStart, Identifier, BlockEnd, Identifier]
    );
}

#[test]
fn three_spaces_is_indentation_error() {
    let err = scan_err("a\n   b");
    assert_eq!(
        err.kind,
        LexErrorKind::UnevenIndentation {
            spaces: 3,
            indent_width: 4,
            last_level: 0,
            level: 0,
        }
    );
    assert_eq!(err.line, 2);
    assert_eq!(err.span, Span::new(2, 5));
    assert!(err.kind.is_indentation());
}

#[test]
fn uneven_indentation_inside_block_reports_last_level() {
    let err = scan_err("a\n    b\n      c");
    assert_eq!(
        err.kind,
        LexErrorKind::UnevenIndentation {
            spaces: 6,
            indent_width: 4,
            last_level: 1,
            level: 1,
        }
    );
    assert_eq!(err.line, 3);
}

#[test]
fn blank_lines_are_transparent() {
    assert_eq!(kinds("a\n\n\nb"), kinds("a\nb"));
    assert_eq!(kinds("a\n   \nb"), kinds("a\nb"));
    assert_eq!(
        kinds("a\n    b\n\n  \n    c"),
        vec![Identifier, BlockStart, Identifier, Identifier, BlockEnd]
    );
}

#[test]
fn blank_line_with_uneven_whitespace_is_not_an_error() {
    assert_eq!(kinds("a\n   \nb"), vec![Identifier, Identifier]);
}

#[test]
fn whitespace_only_last_line_is_blank() {
    assert_eq!(
        kinds("a\n    b\n  "),
        vec![Identifier, BlockStart, Identifier, BlockEnd]
    );
}

#[test]
fn blank_lines_still_count_for_line_numbers() {
    let err = scan_err("a\n\n    \n;");
    assert_eq!(err.line, 4);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(kinds("a\r\n    b\r\nc"), kinds("a\n    b\nc"));
    assert_eq!(kinds("a\r\n   \r\nb"), vec![Identifier, Identifier]);
}

#[test]
fn trailing_newline_closes_to_base() {
    assert_eq!(
        kinds("if x\n    y\n"),
        vec![If, Identifier, BlockStart, Identifier, BlockEnd]
    );
}

#[test]
fn braces_do_not_affect_indentation() {
    assert_eq!(
        kinds("print { 4 }\n    x"),
        vec![
            Identifier, BraceOpen, Int, BraceClose, BlockStart, Identifier, BlockEnd
        ]
    );
}

// ─── End of Input ────────────────────────────────────────────────────

#[test]
fn end_of_input_closes_open_levels() {
    let output = scan_ok("x = 1\n    y = 2");
    assert_eq!(
        output.tokens().kinds().collect::<Vec<_>>(),
        vec![Identifier, Assign, Int, BlockStart, Identifier, Assign, Int, BlockEnd]
    );
    assert_eq!(output.indent_stack().levels(), &[0]);
}

#[test]
fn close_base_level_appends_extra_block_end() {
    let config = ScanConfig {
        close_base_level: true,
        ..ScanConfig::default()
    };
    let output = Scanner::with_config("x = 1\n    y = 2", config).scan().unwrap();
    assert_eq!(output.tokens().count(BlockStart), 1);
    assert_eq!(output.tokens().count(BlockEnd), 2);
    assert!(output.indent_stack().levels().is_empty());
}

#[test]
fn close_base_level_on_flat_source() {
    let config = ScanConfig {
        close_base_level: true,
        ..ScanConfig::default()
    };
    let output = Scanner::with_config("x", config).scan().unwrap();
    assert_eq!(
        output.tokens().kinds().collect::<Vec<_>>(),
        vec![Identifier, BlockEnd]
    );
}

// ─── Configuration ───────────────────────────────────────────────────

#[test]
fn lenient_dedent_lands_on_nearest_level() {
    assert_eq!(
        kinds("a\n        b\n    c"),
        vec![Identifier, BlockStart, Identifier, BlockEnd, Identifier]
    );
}

#[test]
fn strict_dedent_rejects_unmatched_level() {
    let err = scan_err_with("a\n        b\n    c", ScanConfig::strict());
    assert_eq!(
        err.kind,
        LexErrorKind::InconsistentDedent {
            level: 1,
            nearest: 0
        }
    );
    assert_eq!(err.line, 3);
}

#[test]
fn strict_dedent_accepts_matched_level() {
    let output = Scanner::with_config("a\n    b\n        c\n    d", ScanConfig::strict())
        .scan()
        .unwrap();
    assert_eq!(output.tokens().count(BlockStart), 2);
    assert_eq!(output.tokens().count(BlockEnd), 2);
}

#[test]
fn custom_indent_width() {
    let config = ScanConfig {
        indent_width: std::num::NonZeroU32::new(2).unwrap(),
        tab_width: 2,
        ..ScanConfig::default()
    };
    let output = Scanner::with_config("a\n  b\n\tc", config.clone())
        .scan()
        .unwrap();
    assert_eq!(
        output.tokens().kinds().collect::<Vec<_>>(),
        vec![Identifier, BlockStart, Identifier, Identifier, BlockEnd]
    );

    let err = scan_err_with("a\n   b", config);
    assert_eq!(
        err.kind,
        LexErrorKind::UnevenIndentation {
            spaces: 3,
            indent_width: 2,
            last_level: 0,
            level: 1,
        }
    );
}

// ─── Whole Programs ──────────────────────────────────────────────────

#[test]
fn small_program() {
    let source = "\nalex = 4\nif alex\n    print { 4 }\n";
    let output = scan_ok(source);
    assert_eq!(
        output.tokens().kinds().collect::<Vec<_>>(),
        vec![
            Identifier, Assign, Int, If, Identifier, BlockStart, Identifier, BraceOpen, Int,
            BraceClose, BlockEnd
        ]
    );
    assert_eq!(output.lexemes(), &["alex", "4", "alex", "print", "4"]);
}

#[test]
fn scanner_exposes_source_and_config() {
    let scanner = Scanner::with_config("x", ScanConfig::strict());
    assert_eq!(scanner.source(), "x");
    assert_eq!(scanner.config().dedent, DedentPolicy::Strict);
}
