//! Selector grammar.
//!
//! ```text
//! selector_list := group ( ',' group )*
//! group         := part ( combinator part )*
//! part          := ( tag | '*' | '#' id | '.' class | '[' attr ']' | ':' pseudo )*
//! combinator    := '>' | '+' | '~' | whitespace
//! ```
//!
//! Parsing never fails. Text that cannot continue a group ends it, an
//! attribute with an unknown operator is dropped, and an empty group is kept
//! as a selector that matches nothing.

use crate::pseudo::PseudoClass;
use crate::selector::{AttributeSelector, Combinator, CompiledSelector, SelectorList, SelectorPart};

/// Check if a character can start an identifier.
const fn is_ident_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Check if a character can continue an identifier.
const fn is_ident_char(c: char) -> bool {
    is_ident_start_char(c) || c.is_ascii_digit() || c == '-'
}

/// Whether `c` can begin a compound part.
const fn starts_part(c: char) -> bool {
    matches!(c, '#' | '.' | '[' | ':' | '*') || is_ident_start_char(c)
}

/// Parse a selector string without consulting any cache.
#[must_use]
pub fn parse_selector_list(raw: &str) -> SelectorList {
    SelectorList {
        selectors: split_by_comma(raw)
            .into_iter()
            .map(|group| parse_group(group.trim()))
            .collect(),
    }
}

/// Split on top-level commas, ignoring those inside `()`, `[]` or quotes.
fn split_by_comma(raw: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut paren_depth = 0usize;
    let mut bracket_depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut chars = raw.char_indices();

    while let Some((i, c)) = chars.next() {
        if let Some(q) = quote {
            if c == '\\' {
                let _ = chars.next();
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            ',' if paren_depth == 0 && bracket_depth == 0 => {
                groups.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    groups.push(&raw[start..]);
    groups
}

/// Character-level reader over one group.
struct Input {
    chars: Vec<char>,
    pos: usize,
}

impl Input {
    fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) {
        self.pos = (self.pos + 1).min(self.chars.len());
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Skip whitespace, reporting whether there was any.
    fn skip_whitespace(&mut self) -> bool {
        !self.take_while(char::is_whitespace).is_empty()
    }

    /// Skip up to and including `end`.
    fn skip_past(&mut self, end: char) {
        let _ = self.take_while(|c| c != end);
        self.bump();
    }
}

fn parse_group(group: &str) -> CompiledSelector {
    let mut input = Input::new(group);
    let mut selector = CompiledSelector::default();

    let _ = input.skip_whitespace();
    if input.is_eof() {
        return selector;
    }
    selector.parts.push(parse_part(&mut input));

    while !input.is_eof() {
        let had_space = input.skip_whitespace();
        let combinator = match input.peek() {
            None => break,
            Some('>') => Combinator::Child,
            Some('+') => Combinator::NextSibling,
            Some('~') => Combinator::SubsequentSibling,
            Some(_) if had_space => Combinator::Descendant,
            Some(_) => break,
        };
        if combinator != Combinator::Descendant {
            input.bump();
            let _ = input.skip_whitespace();
        }
        if input.peek().is_some_and(starts_part) {
            selector.combinators.push(combinator);
            selector.parts.push(parse_part(&mut input));
        }
    }
    selector
}

fn parse_part(input: &mut Input) -> SelectorPart {
    let mut part = SelectorPart::default();
    while let Some(c) = input.peek() {
        match c {
            '#' => {
                input.bump();
                let id = input.take_while(is_ident_char);
                if !id.is_empty() {
                    part.id = Some(id);
                }
            }
            '.' => {
                input.bump();
                part.classes.push(input.take_while(is_ident_char));
            }
            '[' => {
                input.bump();
                if let Some(attr) = parse_attribute(input) {
                    part.attributes.push(attr);
                }
            }
            ':' => {
                input.bump();
                let name = input.take_while(is_ident_char);
                let arg = (input.peek() == Some('(')).then(|| parse_argument(input));
                part.pseudo_classes
                    .push(PseudoClass::compile(&name, arg.as_deref()));
            }
            '*' => {
                input.bump();
                part.tag = Some("*".to_string());
            }
            c if is_ident_start_char(c) => {
                part.tag = Some(input.take_while(is_ident_char).to_lowercase());
            }
            _ => break,
        }
    }
    part
}

/// Parse the inside of `[...]`, with the `[` already consumed.
fn parse_attribute(input: &mut Input) -> Option<AttributeSelector> {
    let name = input
        .take_while(|c| !matches!(c, '^' | '$' | '*' | '~' | '|' | '=' | ']'))
        .trim()
        .to_string();

    let op = match (input.peek(), input.peek_at(1)) {
        (Some(']'), _) => {
            input.bump();
            return Some(AttributeSelector::Exists(name));
        }
        (Some('='), _) => {
            input.bump();
            "=".to_string()
        }
        (Some(c), Some('=')) => {
            input.bump();
            input.bump();
            format!("{c}=")
        }
        _ => {
            input.skip_past(']');
            return None;
        }
    };

    let _ = input.skip_whitespace();
    let value = match input.peek() {
        Some(quote @ ('"' | '\'')) => {
            input.bump();
            let value = input.take_while(|c| c != quote);
            input.bump();
            value
        }
        _ => input.take_while(|c| c != ']').trim().to_string(),
    };
    input.skip_past(']');

    AttributeSelector::from_operator(&op, name, value)
}

/// Capture a parenthesized argument raw, with the `(` not yet consumed.
///
/// Nested parentheses are balanced. An unclosed argument runs to the end.
fn parse_argument(input: &mut Input) -> String {
    input.bump();
    let mut depth = 1usize;
    let mut arg = String::new();
    while let Some(c) = input.peek() {
        input.bump();
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        arg.push(c);
    }
    arg
}
