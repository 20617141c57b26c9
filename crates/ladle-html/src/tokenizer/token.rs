//! Tokens produced by the scanner.

use ladle_dom::{Attributes, SourceLocation};

/// One lexical unit of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr=value ...>` or `<name ... />`.
    StartTag {
        /// Tag name, lower-cased unless case is preserved.
        name: String,
        /// Attributes in source order, values entity-decoded.
        attributes: Attributes,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
    },
    /// `</name>`. The name may be empty for input like `</>`.
    EndTag {
        /// Tag name, lower-cased unless case is preserved.
        name: String,
    },
    /// Entity-decoded character data.
    Text(String),
    /// Comment body without the `<!--` and `-->` delimiters.
    Comment(String),
    /// Trimmed doctype payload, e.g. `html`.
    Doctype(String),
}

/// A token together with where it started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// The token itself.
    pub token: Token,
    /// Position of the token's first character.
    pub location: SourceLocation,
}
