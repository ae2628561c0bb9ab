//! Property-based tests for the DAN lexer
//!
//! Documents are generated from well-formed pieces (entries, arrays, tables,
//! nested blocks and comments), so every generated input must lex cleanly.

use dan_lex::{tokenize, Token, TokenKind};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

fn name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_-]{0,7}".prop_filter("reserved word", |s| {
        !matches!(s.as_str(), "table" | "true" | "false")
    })
}

fn scalar() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,4}(\\.[0-9]{1,3}){0,2}",
        "\"[a-zA-Z0-9_.:/-]{0,10}\"",
        Just("true".to_string()),
        Just("false".to_string()),
        name(),
    ]
}

fn comment() -> impl Strategy<Value = String> {
    ("(#|//)", "[a-z0-9:{}\\[\\]\"]{0,10}").prop_map(|(marker, body)| format!("{}{}", marker, body))
}

fn entry() -> impl Strategy<Value = String> {
    prop_oneof![
        (name(), scalar()).prop_map(|(k, v)| format!("{}: {}", k, v)),
        (name(), vec(scalar(), 0..4)).prop_map(|(k, vs)| format!("{}: [{}]", k, vs.join(", "))),
        (name(), vec(name(), 1..4), vec(vec(scalar(), 1..4), 0..4)).prop_map(
            |(k, columns, rows)| {
                let rows: Vec<String> = rows.iter().map(|r| format!("  {}", r.join(", "))).collect();
                format!("{}: table({}) [\n{}\n]", k, columns.join(", "), rows.join("\n"))
            }
        ),
    ]
}

fn item(with_comments: bool) -> BoxedStrategy<String> {
    let leaf = if with_comments {
        prop_oneof![3 => entry(), 1 => comment()].boxed()
    } else {
        entry().boxed()
    };
    leaf.prop_recursive(3, 32, 4, |inner| {
        (name(), vec(inner, 0..4))
            .prop_map(|(n, items)| format!("{} {{\n{}\n}}", n, items.join("\n")))
    })
    .boxed()
}

fn document(with_comments: bool) -> impl Strategy<Value = String> {
    vec(item(with_comments), 0..6).prop_map(|items| items.join("\n"))
}

// =============================================================================
// Helpers
// =============================================================================

fn lex_ok(source: &str) -> Vec<Token> {
    match tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("failed to lex {:?}: {}", source, err),
    }
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn assert_increasing(tokens: &[Token]) {
    for pair in tokens.windows(2) {
        let a = (pair[0].line(), pair[0].column());
        let b = (pair[1].line(), pair[1].column());
        assert!(a < b, "{} at {:?} followed by {} at {:?}", pair[0], a, pair[1], b);
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Lexemes, concatenated, give back the input minus whitespace.
    #[test]
    fn lexemes_reproduce_significant_input(source in document(true)) {
        let tokens = lex_ok(&source);
        let joined: String = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Newline)
            .map(|t| t.text.as_str())
            .collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }

    /// Re-lexing the lexemes joined by single spaces yields the same kinds.
    #[test]
    fn relexing_joined_lexemes_is_stable(source in document(false)) {
        let tokens = lex_ok(&source);
        let rebuilt = tokens
            .iter()
            .filter(|t| !t.is_eof())
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let again = lex_ok(&rebuilt);
        prop_assert_eq!(kinds(&tokens), kinds(&again));
    }

    /// Tokens come out in strictly increasing (line, column) order.
    #[test]
    fn positions_strictly_increase(source in document(true)) {
        assert_increasing(&lex_ok(&source));
    }

    /// Spans point at their own lexemes.
    #[test]
    fn spans_slice_lexemes(source in document(true)) {
        for token in lex_ok(&source) {
            if token.kind != TokenKind::Newline {
                prop_assert_eq!(&source[token.span.start..token.span.end], token.text.as_str());
            }
        }
    }

    /// Arbitrary input never panics; partial output stays ordered and ends
    /// before the error.
    #[test]
    fn arbitrary_input_never_panics(source in any::<String>()) {
        match tokenize(&source) {
            Ok(tokens) => {
                prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
                assert_increasing(&tokens);
            },
            Err(err) => {
                assert_increasing(&err.tokens);
                if let Some(last) = err.tokens.last() {
                    prop_assert!(last.span.end <= err.error.span().start);
                }
            },
        }
    }

    /// Any run of name characters is exactly one token.
    #[test]
    fn names_are_single_tokens(input in "[a-zA-Z_][a-zA-Z0-9_-]{0,40}") {
        let tokens = lex_ok(&input);
        prop_assert_eq!(tokens.len(), 2);
        let expected = match input.as_str() {
            "table" => TokenKind::TableKeyword,
            "true" | "false" => TokenKind::Boolean,
            _ => TokenKind::Identifier,
        };
        prop_assert_eq!(tokens[0].kind, expected);
    }

    /// Dotted digit sequences are one number.
    #[test]
    fn dotted_numbers_are_single_tokens(input in "-?[0-9]{1,6}(\\.[0-9]{1,4}){0,4}") {
        let tokens = lex_ok(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
    }

    /// Strings without quotes, backslashes or line breaks always terminate.
    #[test]
    fn plain_strings_lex(body in "[^\"\\\\\\n]{0,60}") {
        let source = format!("\"{}\"", body);
        let tokens = lex_ok(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].text, &source);
    }
}
