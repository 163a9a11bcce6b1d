// tests/integration_tests.rs

use flume_lang::{parse, parse_or_panic, Error, Expr, LexError, Literal};

// ============================================================================
// Entry Points
// ============================================================================

#[test]
fn test_parse_returns_the_ast() {
    let expr = parse("load | filter active | count").unwrap();
    match expr {
        Expr::Pipeline { stages } => assert_eq!(stages.len(), 3),
        other => panic!("Expected pipeline, got {:?}", other),
    }
}

#[test]
fn test_parse_surfaces_lex_failure_as_a_value() {
    let err = parse("hello # there").unwrap_err();
    assert_eq!(
        err,
        Error::Lex(LexError::UnexpectedCharacter {
            character: '#',
            position: 6
        })
    );
}

#[test]
fn test_parse_surfaces_parse_failure_as_a_value() {
    match parse("hello |").unwrap_err() {
        Error::Parse(e) => assert_eq!(e.position, 7),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_or_panic_returns_the_ast() {
    assert_eq!(
        parse_or_panic("true"),
        Expr::Literal(Literal::Boolean(true))
    );
}

#[test]
#[should_panic(expected = "empty parentheses")]
fn test_parse_or_panic_panics_with_the_error_display() {
    parse_or_panic("()");
}

#[test]
fn test_both_entry_points_classify_errors_identically() {
    for source in ["", "()", "a |", "a.", "\"unterminated", "a $ b"] {
        let err = parse(source).unwrap_err();
        let panicking = std::panic::catch_unwind(|| parse_or_panic(source));
        assert!(panicking.is_err(), "parse_or_panic accepted {:?}", source);
        match source {
            "\"unterminated" | "a $ b" => assert!(matches!(err, Error::Lex(_))),
            _ => assert!(matches!(err, Error::Parse(_))),
        }
    }
}

// ============================================================================
// Error Reporting
// ============================================================================

#[test]
fn test_error_display_includes_position() {
    let message = parse("hello | )").unwrap_err().to_string();
    assert!(message.contains("position 8"), "got: {}", message);
}

#[test]
fn test_error_source_chain() {
    use std::error::Error as _;

    let err = parse("()").unwrap_err();
    assert!(err.source().is_some());
}

// ============================================================================
// Whole Programs
// ============================================================================

#[test]
fn test_realistic_program() {
    let expr = parse_or_panic(
        r#"load "users.json" | filter (field "active" | eq true) | map @.name | take 10"#,
    );

    match expr {
        Expr::Pipeline { stages } => {
            assert_eq!(stages.len(), 4);
            // First stage: load applied to the file name
            assert!(matches!(&stages[0], Expr::Application { arguments, .. } if arguments.len() == 1));
            // Second stage: filter applied to a parenthesized pipeline
            match &stages[1] {
                Expr::Application { arguments, .. } => {
                    assert!(matches!(&arguments[0], Expr::Pipeline { .. }));
                }
                other => panic!("Expected application, got {:?}", other),
            }
        }
        other => panic!("Expected pipeline, got {:?}", other),
    }
}

#[test]
fn test_parses_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("stage{} | take {}", i, i);
                parse(&source).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(matches!(handle.join().unwrap(), Expr::Pipeline { .. }));
    }
}
