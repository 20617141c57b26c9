//! Fixed element tables driving tree construction.

use strum_macros::Display;

/// Elements that never have content.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is taken verbatim up to the closing tag.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Elements whose content is taken up to the closing tag with references decoded.
pub const RCDATA_ELEMENTS: &[&str] = &["textarea", "title"];

/// Start tags that implicitly close an open `<p>`.
const CLOSES_P: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "details",
    "div",
    "dl",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "main",
    "menu",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// Whether `tag` is a void element.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Whether text inside `tag` is emitted verbatim.
#[must_use]
pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

/// Whether a start tag `incoming` implicitly closes an open `open` element.
#[must_use]
pub fn closes_implicitly(open: &str, incoming: &str) -> bool {
    let closers: &[&str] = match open {
        "li" => &["li"],
        "dt" | "dd" => &["dt", "dd"],
        "p" => CLOSES_P,
        "rt" | "rp" => &["rt", "rp"],
        "optgroup" => &["optgroup"],
        "option" => &["option", "optgroup"],
        "thead" | "tbody" => &["tbody", "tfoot"],
        "tfoot" => &["tbody"],
        "tr" => &["tr"],
        "td" | "th" => &["td", "th"],
        _ => return false,
    };
    closers.contains(&incoming)
}

/// How an element's content is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ContentModel {
    /// Ordinary content: the element becomes the insertion point.
    Normal,
    /// No content at all.
    Void,
    /// Verbatim text up to the closing tag.
    RawText,
    /// Decoded text up to the closing tag.
    Rcdata,
}

impl ContentModel {
    /// Classify a start tag.
    ///
    /// In XML mode only the `/>` syntax makes an element void and there are
    /// no raw-text elements.
    #[must_use]
    pub fn of(tag: &str, self_closing: bool, xml_mode: bool) -> Self {
        if xml_mode {
            return if self_closing { Self::Void } else { Self::Normal };
        }
        // `<span/>` opens nothing, and `<script/>` has no content to read.
        if self_closing || is_void_element(tag) {
            Self::Void
        } else if is_raw_text_element(tag) {
            Self::RawText
        } else if RCDATA_ELEMENTS.contains(&tag) {
            Self::Rcdata
        } else {
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_p_closers() {
        assert!(closes_implicitly("p", "div"));
        assert!(closes_implicitly("p", "h3"));
        assert!(!closes_implicitly("p", "span"));
        assert!(!closes_implicitly("div", "div"));
    }

    #[test]
    fn test_table_section_rules() {
        assert!(closes_implicitly("thead", "tbody"));
        assert!(closes_implicitly("tfoot", "tbody"));
        assert!(!closes_implicitly("tfoot", "tfoot"));
    }

    #[test]
    fn test_content_model_in_xml_mode() {
        assert_eq!(ContentModel::of("script", false, true), ContentModel::Normal);
        assert_eq!(ContentModel::of("br", false, true), ContentModel::Normal);
        assert_eq!(ContentModel::of("item", true, true), ContentModel::Void);
        assert_eq!(ContentModel::RawText.to_string(), "raw-text");
    }
}
