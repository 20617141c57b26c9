//! Markup tokenization.
//!
//! - [`entities`] - named and numeric character references
//! - [`Cursor`] - position tracking over the input
//! - [`HtmlTokenizer`] - the scanner producing [`Token`]s

mod cursor;
pub mod entities;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use entities::{decode_entities, escape_attr, escape_html, lookup_entity};
pub use scanner::HtmlTokenizer;
pub use token::{Spanned, Token};
