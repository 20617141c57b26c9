//! Tree construction from tokens.

mod builder;
pub mod rules;

pub use builder::{HtmlParser, parse, parse_document};
pub use rules::ContentModel;
