//! Integration tests for the HTML tokenizer.

use ladle_dom::SourceLocation;
use ladle_html::{HtmlTokenizer, Token};

/// Helper to tokenize input and return the tokens without positions
fn tokenize(input: &str) -> Vec<Token> {
    HtmlTokenizer::new(input).map(|spanned| spanned.token).collect()
}

fn start_tag_name(token: &Token) -> Option<&str> {
    match token {
        Token::StartTag { name, .. } => Some(name),
        _ => None,
    }
}

#[test]
fn test_simple_sequence() {
    let tokens = tokenize("<p>hi</p>");
    assert_eq!(tokens.len(), 3);
    assert_eq!(start_tag_name(&tokens[0]), Some("p"));
    assert_eq!(tokens[1], Token::Text("hi".to_string()));
    assert_eq!(tokens[2], Token::EndTag { name: "p".to_string() });
}

#[test]
fn test_self_closing_flag() {
    let tokens = tokenize("<br/><img src='a' />");
    assert!(matches!(&tokens[0], Token::StartTag { self_closing: true, .. }));
    assert!(matches!(&tokens[1], Token::StartTag { self_closing: true, attributes, .. }
        if attributes.get("src") == Some("a")));
}

#[test]
fn test_attribute_whitespace_around_equals() {
    let tokens = tokenize("<a href = \"x\" class= y>");
    let Token::StartTag { attributes, .. } = &tokens[0] else {
        panic!("expected start tag");
    };
    assert_eq!(attributes.get("href"), Some("x"));
    assert_eq!(attributes.get("class"), Some("y"));
}

#[test]
fn test_tag_names_lowercased() {
    let tokens = tokenize("<DIV></DIV>");
    assert_eq!(start_tag_name(&tokens[0]), Some("div"));
    assert_eq!(tokens[1], Token::EndTag { name: "div".to_string() });
}

#[test]
fn test_case_preserved_when_requested() {
    let tokens: Vec<Token> = HtmlTokenizer::new("<Item Key=1>")
        .with_case_folding(false, false)
        .map(|s| s.token)
        .collect();
    let Token::StartTag { name, attributes, .. } = &tokens[0] else {
        panic!("expected start tag");
    };
    assert_eq!(name, "Item");
    assert_eq!(attributes.get("Key"), Some("1"));
}

#[test]
fn test_comment_and_doctype() {
    let tokens = tokenize("<!doctype HTML ><!--x-->");
    assert_eq!(tokens[0], Token::Doctype("HTML".to_string()));
    assert_eq!(tokens[1], Token::Comment("x".to_string()));
}

#[test]
fn test_empty_end_tag() {
    let tokens = tokenize("</>");
    assert_eq!(tokens, vec![Token::EndTag { name: String::new() }]);
}

#[test]
fn test_trailing_less_than() {
    assert_eq!(
        tokenize("a<"),
        vec![Token::Text("a".to_string()), Token::Text("<".to_string())]
    );
}

#[test]
fn test_locations_are_token_starts() {
    let spans: Vec<SourceLocation> = HtmlTokenizer::new("ab\n<i>c")
        .map(|s| s.location)
        .collect();
    assert_eq!(
        spans,
        vec![
            SourceLocation::new(1, 1, 0),
            SourceLocation::new(2, 1, 3),
            SourceLocation::new(2, 4, 6),
        ]
    );
}

#[test]
fn test_raw_text_leaves_end_tag() {
    let mut tokenizer = HtmlTokenizer::new("<script>a</b></script>tail");
    let first = tokenizer.next_token().unwrap();
    assert_eq!(start_tag_name(&first.token), Some("script"));
    assert_eq!(tokenizer.raw_text("script", false), "a</b>");
    assert_eq!(
        tokenizer.next_token().unwrap().token,
        Token::EndTag { name: "script".to_string() }
    );
    assert_eq!(
        tokenizer.next_token().unwrap().token,
        Token::Text("tail".to_string())
    );
}
