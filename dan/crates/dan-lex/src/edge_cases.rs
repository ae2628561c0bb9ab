//! Edge case tests for dan-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut tokens = tokenize(source).unwrap();
        assert_eq!(tokens.pop().map(|t| t.kind), Some(TokenKind::Eof));
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(kinds("x"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("{}: 1", name));
        assert_eq!(tokens[0].text.len(), 10000);
        assert_eq!(tokens[1].column(), 10001);
    }

    #[test]
    fn test_edge_long_string() {
        let body = "x".repeat(50_000);
        let tokens = lex_all(&format!("\"{}\"", body));
        assert_eq!(tokens[0].text.len(), 50_002);
    }

    #[test]
    fn test_edge_deep_nesting() {
        let depth = 500;
        let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert_eq!(kinds(&source).len(), depth * 2);
    }

    #[test]
    fn test_edge_deep_nesting_unclosed() {
        let source = "{".repeat(64);
        let err = tokenize(&source).unwrap_err();
        assert_eq!(err.tokens.len(), 64);
        match err.error {
            LexError::UnbalancedDelimiter {
                found: None,
                opener: Some(opener),
                ..
            } => assert_eq!(opener.span.column, 64),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_edge_no_trailing_newline() {
        assert_eq!(kinds("a: 1"), vec![TokenKind::Key, TokenKind::Colon, TokenKind::Number]);
    }

    #[test]
    fn test_edge_crlf_document() {
        let tokens = lex_all("app {\r\n  name: \"x\"\r\n}\r\n");
        assert_eq!(tokens.len(), 6);
        assert_eq!((tokens[5].line(), tokens[5].column()), (3, 1));
    }

    #[test]
    fn test_edge_tabs_are_one_column() {
        let tokens = lex_all("\tkey: 1");
        assert_eq!(tokens[0].column(), 2);
    }

    #[test]
    fn test_edge_multibyte_columns() {
        let tokens = lex_all("\"ü\" x");
        assert_eq!(tokens[1].column(), 5);
        assert_eq!(tokens[1].span.start, 5);
    }

    #[test]
    fn test_edge_adjacent_punctuation() {
        assert_eq!(
            kinds("a:{b:[1,2]}"),
            vec![
                TokenKind::Key,
                TokenKind::Colon,
                TokenKind::BlockOpen,
                TokenKind::Key,
                TokenKind::Colon,
                TokenKind::ArrayOpen,
                TokenKind::Number,
                TokenKind::Comma,
                TokenKind::Number,
                TokenKind::ArrayClose,
                TokenKind::BlockClose
            ]
        );
    }

    #[test]
    fn test_edge_comment_markers_inside_names() {
        let tokens = lex_all("a#b");
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[1].text, "#b");
    }

    #[test]
    fn test_edge_empty_containers() {
        assert_eq!(
            kinds("{}[]()"),
            vec![
                TokenKind::BlockOpen,
                TokenKind::BlockClose,
                TokenKind::ArrayOpen,
                TokenKind::ArrayClose,
                TokenKind::ParenOpen,
                TokenKind::ParenClose
            ]
        );
    }

    #[test]
    fn test_edge_empty_table() {
        assert_eq!(
            kinds("t: table() [\n]"),
            vec![
                TokenKind::Key,
                TokenKind::Colon,
                TokenKind::TableKeyword,
                TokenKind::ParenOpen,
                TokenKind::ParenClose,
                TokenKind::ArrayOpen,
                TokenKind::ArrayClose
            ]
        );
    }

    #[test]
    fn test_edge_nested_table_inside_row() {
        let source = "t: table(a) [\n  inner: table(b) [\n    1\n    2\n  ]\n  3\n]";
        let newlines = kinds(source)
            .into_iter()
            .filter(|k| *k == TokenKind::Newline)
            .count();
        assert_eq!(newlines, 2);
    }

    #[test]
    fn test_edge_semantically_odd_numbers_accepted() {
        assert_eq!(kinds("1.2.3.4.5"), vec![TokenKind::Number]);
        assert_eq!(kinds("-0.0.1"), vec![TokenKind::Number]);
    }

    #[test]
    fn test_edge_error_after_valid_prefix() {
        let err = tokenize("a: 1\nb: 2\nc: @").unwrap_err();
        assert_eq!(err.tokens.len(), 8);
        assert_eq!((err.error.span().line, err.error.span().column), (3, 4));
    }

    #[test]
    fn test_edge_only_comments() {
        assert_eq!(kinds("#a\n#b\n//c\n"), vec![TokenKind::Comment; 3]);
    }

    #[test]
    fn test_edge_positions_strictly_increase() {
        let tokens = lex_all("t: table(a, b) [\n 1, x # c\n\n 2, y\n]\nz { q: \"s\" }");
        for pair in tokens.windows(2) {
            let a = (pair[0].line(), pair[0].column());
            let b = (pair[1].line(), pair[1].column());
            assert!(a < b, "{:?} then {:?}", pair[0], pair[1]);
        }
    }
}
