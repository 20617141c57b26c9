//! The markup scanner.
//!
//! [`HtmlTokenizer`] turns input into [`Token`]s one at a time. It has no
//! notion of tree structure; the tree builder tells it when an element's
//! content must be taken verbatim via [`HtmlTokenizer::raw_text`].

use ladle_dom::Attributes;
use tracing::trace;

use super::cursor::Cursor;
use super::entities::decode_entities;
use super::token::{Spanned, Token};

/// Characters allowed in tag names.
const fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ':' || c == '-'
}

/// Characters that end an attribute name.
fn ends_attribute_name(c: char) -> bool {
    c.is_whitespace() || matches!(c, '=' | '/' | '>')
}

/// Streaming tokenizer over a borrowed input.
#[derive(Debug, Clone)]
pub struct HtmlTokenizer<'a> {
    cursor: Cursor<'a>,
    lower_case_tags: bool,
    lower_case_attributes: bool,
}

impl<'a> HtmlTokenizer<'a> {
    /// Create a tokenizer that lower-cases tag and attribute names.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            lower_case_tags: true,
            lower_case_attributes: true,
        }
    }

    /// Choose whether tag and attribute names are lower-cased.
    #[must_use]
    pub const fn with_case_folding(mut self, tags: bool, attributes: bool) -> Self {
        self.lower_case_tags = tags;
        self.lower_case_attributes = attributes;
        self
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Scan the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Spanned> {
        loop {
            if self.cursor.is_eof() {
                return None;
            }
            let location = self.cursor.location();
            if let Some(token) = self.scan() {
                return Some(Spanned { token, location });
            }
        }
    }

    /// Take an element's content verbatim up to its closing tag.
    ///
    /// The closing tag itself is left in the input. When there is none the
    /// rest of the input is taken. With `decode`, references are resolved.
    pub fn raw_text(&mut self, tag_name: &str, decode: bool) -> String {
        let close = format!("</{tag_name}");
        let text = match self.cursor.find_ignore_case(&close) {
            Some(end) => {
                let text = self.cursor.slice_to(end);
                self.cursor.advance_to(end);
                text
            }
            None => {
                let text = self.cursor.rest();
                self.cursor.advance_to_end();
                text
            }
        };
        if decode {
            decode_entities(text).into_owned()
        } else {
            text.to_string()
        }
    }

    /// Scan one construct. `None` means something was skipped without
    /// producing a token (`<!...>` and `<?...>`).
    fn scan(&mut self) -> Option<Token> {
        if self.cursor.peek() != Some('<') {
            return Some(self.scan_text());
        }
        if self.cursor.starts_with("<!--") {
            return Some(self.scan_comment());
        }
        if self.cursor.starts_with_ignore_case("<!doctype") {
            return Some(self.scan_doctype());
        }
        match self.cursor.peek_second() {
            Some('/') => Some(self.scan_end_tag()),
            Some('!' | '?') => {
                trace!(offset = self.cursor.offset(), "skipping markup declaration");
                self.skip_past_gt();
                None
            }
            _ => Some(self.scan_start_tag()),
        }
    }

    fn scan_text(&mut self) -> Token {
        let text = self.cursor.take_while(|c| c != '<');
        Token::Text(decode_entities(text).into_owned())
    }

    fn scan_comment(&mut self) -> Token {
        self.cursor.bump_n(4);
        match self.cursor.find("-->") {
            Some(end) => {
                let body = self.cursor.slice_to(end);
                self.cursor.advance_to(end + 3);
                Token::Comment(body.to_string())
            }
            None => {
                let body = self.cursor.rest();
                self.cursor.advance_to_end();
                Token::Comment(body.to_string())
            }
        }
    }

    fn scan_doctype(&mut self) -> Token {
        self.cursor.bump_n(9);
        let body = match self.cursor.find(">") {
            Some(end) => {
                let body = self.cursor.slice_to(end);
                self.cursor.advance_to(end + 1);
                body
            }
            None => {
                let body = self.cursor.rest();
                self.cursor.advance_to_end();
                body
            }
        };
        Token::Doctype(body.trim().to_string())
    }

    fn scan_end_tag(&mut self) -> Token {
        self.cursor.bump_n(2);
        let name = self.tag_name();
        self.skip_past_gt();
        Token::EndTag { name }
    }

    fn scan_start_tag(&mut self) -> Token {
        let _ = self.cursor.bump();
        let name = self.tag_name();
        if name.is_empty() {
            trace!(offset = self.cursor.offset(), "bare '<' treated as text");
            return Token::Text("<".to_string());
        }

        let mut attributes = Attributes::new();
        while let Some((attr_name, value)) = self.scan_attribute() {
            let _ = attributes.set(attr_name, value);
        }

        self.cursor.skip_whitespace();
        let self_closing = self.cursor.peek() == Some('/');
        if self_closing {
            let _ = self.cursor.bump();
        }
        self.skip_past_gt();

        Token::StartTag {
            name,
            attributes,
            self_closing,
        }
    }

    fn scan_attribute(&mut self) -> Option<(String, String)> {
        self.cursor.skip_whitespace();
        if matches!(self.cursor.peek(), None | Some('>' | '/')) {
            return None;
        }

        let raw_name = self.cursor.take_while(|c| !ends_attribute_name(c));
        if raw_name.is_empty() {
            return None;
        }
        let name = if self.lower_case_attributes {
            raw_name.to_lowercase()
        } else {
            raw_name.to_string()
        };

        self.cursor.skip_whitespace();
        if self.cursor.peek() != Some('=') {
            return Some((name, String::new()));
        }
        let _ = self.cursor.bump();
        self.cursor.skip_whitespace();

        let raw_value = match self.cursor.peek() {
            Some(quote @ ('"' | '\'')) => {
                let _ = self.cursor.bump();
                let value = self.cursor.take_while(|c| c != quote);
                let _ = self.cursor.bump();
                value
            }
            _ => self
                .cursor
                .take_while(|c| !c.is_whitespace() && c != '>'),
        };
        Some((name, decode_entities(raw_value).into_owned()))
    }

    fn tag_name(&mut self) -> String {
        let raw = self.cursor.take_while(is_tag_name_char);
        if self.lower_case_tags {
            raw.to_ascii_lowercase()
        } else {
            raw.to_string()
        }
    }

    /// Skip to and past the next `>`, or to the end of input.
    fn skip_past_gt(&mut self) {
        let _ = self.cursor.take_while(|c| c != '>');
        let _ = self.cursor.bump();
    }
}

impl Iterator for HtmlTokenizer<'_> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
