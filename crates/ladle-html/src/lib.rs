//! Forgiving HTML tokenizer, tree builder and serializer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** ([`tokenizer`]) - tags, attributes, comments, doctypes and
//!   character references, with line/column tracking
//! - **Tree builder** ([`parser`]) - a single forward scan with implicit-close
//!   rules, void elements, raw-text (`script`, `style`) and RCDATA
//!   (`textarea`, `title`) content, an optional element strainer and an XML
//!   mode
//! - **Serializer** ([`serialize`]) - markup output in four dialects
//! - **Printer** ([`printer`]) - an indented view of a tree for debugging
//!
//! # Not Implemented
//!
//! - The full HTML5 insertion-mode state machine
//! - Foster parenting and the adoption agency algorithm
//! - Encoding detection; input is already a `&str`

pub mod options;
pub mod parser;
pub mod printer;
pub mod serialize;
pub mod tokenizer;

pub use options::{AttrMatch, ParseOptions, Strainer, TagMatch, TextMatch};
pub use parser::{HtmlParser, parse, parse_document};
pub use printer::format_tree;
pub use serialize::{OutputFormat, SerializeOptions, serialize, serialize_children};
pub use tokenizer::{HtmlTokenizer, Token, decode_entities, escape_attr, escape_html};
