//! Character reference table, decoding and escaping.
//!
//! Named references must end in `;`. Numeric references come in decimal
//! (`&#60;`) and hexadecimal (`&#x3C;`, `&#X3C;`) forms; values that are not
//! Unicode scalar values (zero, surrogates, past `U+10FFFF`) decode to
//! nothing.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The named character reference table.
/// Maps entity names (without the `&` and `;`) to their replacement strings.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup escapes
        ("amp", "&"),
        ("lt", "<"),
        ("gt", ">"),
        ("quot", "\""),
        ("apos", "'"),
        ("nbsp", "\u{00A0}"),
        // Typography
        ("copy", "\u{00A9}"),
        ("reg", "\u{00AE}"),
        ("trade", "\u{2122}"),
        ("mdash", "\u{2014}"),
        ("ndash", "\u{2013}"),
        ("lsquo", "\u{2018}"),
        ("rsquo", "\u{2019}"),
        ("ldquo", "\u{201C}"),
        ("rdquo", "\u{201D}"),
        ("hellip", "\u{2026}"),
        ("bull", "\u{2022}"),
        ("middot", "\u{00B7}"),
        ("para", "\u{00B6}"),
        ("sect", "\u{00A7}"),
        ("dagger", "\u{2020}"),
        ("Dagger", "\u{2021}"),
        ("permil", "\u{2030}"),
        ("prime", "\u{2032}"),
        ("Prime", "\u{2033}"),
        ("laquo", "\u{00AB}"),
        ("raquo", "\u{00BB}"),
        ("lsaquo", "\u{2039}"),
        ("rsaquo", "\u{203A}"),
        // Currency
        ("cent", "\u{00A2}"),
        ("pound", "\u{00A3}"),
        ("yen", "\u{00A5}"),
        ("euro", "\u{20AC}"),
        ("curren", "\u{00A4}"),
        // Math
        ("times", "\u{00D7}"),
        ("divide", "\u{00F7}"),
        ("plusmn", "\u{00B1}"),
        ("minus", "\u{2212}"),
        ("le", "\u{2264}"),
        ("ge", "\u{2265}"),
        ("ne", "\u{2260}"),
        ("asymp", "\u{2248}"),
        ("equiv", "\u{2261}"),
        ("sum", "\u{2211}"),
        ("prod", "\u{220F}"),
        ("radic", "\u{221A}"),
        ("infin", "\u{221E}"),
        ("int", "\u{222B}"),
        ("part", "\u{2202}"),
        ("nabla", "\u{2207}"),
        ("isin", "\u{2208}"),
        ("notin", "\u{2209}"),
        ("ni", "\u{220B}"),
        ("sub", "\u{2282}"),
        ("sup", "\u{2283}"),
        ("sube", "\u{2286}"),
        ("supe", "\u{2287}"),
        ("cup", "\u{222A}"),
        ("cap", "\u{2229}"),
        ("empty", "\u{2205}"),
        ("forall", "\u{2200}"),
        ("exist", "\u{2203}"),
        ("and", "\u{2227}"),
        ("or", "\u{2228}"),
        ("not", "\u{00AC}"),
        ("ang", "\u{2220}"),
        ("perp", "\u{22A5}"),
        ("there4", "\u{2234}"),
        ("sim", "\u{223C}"),
        ("cong", "\u{2245}"),
        ("prop", "\u{221D}"),
        ("deg", "\u{00B0}"),
        ("frac14", "\u{00BC}"),
        ("frac12", "\u{00BD}"),
        ("frac34", "\u{00BE}"),
        ("sup1", "\u{00B9}"),
        ("sup2", "\u{00B2}"),
        ("sup3", "\u{00B3}"),
        ("micro", "\u{00B5}"),
        // Arrows
        ("larr", "\u{2190}"),
        ("uarr", "\u{2191}"),
        ("rarr", "\u{2192}"),
        ("darr", "\u{2193}"),
        ("harr", "\u{2194}"),
        ("lArr", "\u{21D0}"),
        ("uArr", "\u{21D1}"),
        ("rArr", "\u{21D2}"),
        ("dArr", "\u{21D3}"),
        ("hArr", "\u{21D4}"),
        // Greek
        ("Alpha", "\u{0391}"),
        ("alpha", "\u{03B1}"),
        ("Beta", "\u{0392}"),
        ("beta", "\u{03B2}"),
        ("Gamma", "\u{0393}"),
        ("gamma", "\u{03B3}"),
        ("Delta", "\u{0394}"),
        ("delta", "\u{03B4}"),
        ("Epsilon", "\u{0395}"),
        ("epsilon", "\u{03B5}"),
        ("Zeta", "\u{0396}"),
        ("zeta", "\u{03B6}"),
        ("Eta", "\u{0397}"),
        ("eta", "\u{03B7}"),
        ("Theta", "\u{0398}"),
        ("theta", "\u{03B8}"),
        ("Iota", "\u{0399}"),
        ("iota", "\u{03B9}"),
        ("Kappa", "\u{039A}"),
        ("kappa", "\u{03BA}"),
        ("Lambda", "\u{039B}"),
        ("lambda", "\u{03BB}"),
        ("Mu", "\u{039C}"),
        ("mu", "\u{03BC}"),
        ("Nu", "\u{039D}"),
        ("nu", "\u{03BD}"),
        ("Xi", "\u{039E}"),
        ("xi", "\u{03BE}"),
        ("Omicron", "\u{039F}"),
        ("omicron", "\u{03BF}"),
        ("Pi", "\u{03A0}"),
        ("pi", "\u{03C0}"),
        ("Rho", "\u{03A1}"),
        ("rho", "\u{03C1}"),
        ("Sigma", "\u{03A3}"),
        ("sigma", "\u{03C3}"),
        ("sigmaf", "\u{03C2}"),
        ("Tau", "\u{03A4}"),
        ("tau", "\u{03C4}"),
        ("Upsilon", "\u{03A5}"),
        ("upsilon", "\u{03C5}"),
        ("Phi", "\u{03A6}"),
        ("phi", "\u{03C6}"),
        ("Chi", "\u{03A7}"),
        ("chi", "\u{03C7}"),
        ("Psi", "\u{03A8}"),
        ("psi", "\u{03C8}"),
        ("Omega", "\u{03A9}"),
        ("omega", "\u{03C9}"),
        // Latin-1 punctuation
        ("iexcl", "\u{00A1}"),
        ("iquest", "\u{00BF}"),
        ("ordf", "\u{00AA}"),
        ("ordm", "\u{00BA}"),
        ("acute", "\u{00B4}"),
        ("cedil", "\u{00B8}"),
        ("uml", "\u{00A8}"),
        ("macr", "\u{00AF}"),
        ("shy", "\u{00AD}"),
        ("brvbar", "\u{00A6}"),
        // Card suits and shapes
        ("spades", "\u{2660}"),
        ("clubs", "\u{2663}"),
        ("hearts", "\u{2665}"),
        ("diams", "\u{2666}"),
        ("loz", "\u{25CA}"),
        // Zero-width joiners
        ("zwj", "\u{200D}"),
        ("zwnj", "\u{200C}"),
    ])
});

/// Look up a named character reference (name without `&` and `;`).
///
/// Names are case-sensitive: `Dagger` and `dagger` are different entities.
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Decode every character reference in `text` in a single pass.
///
/// Replacement text is never re-scanned, so `&amp;lt;` decodes to `&lt;`.
/// Unknown named references and incomplete references are kept literally.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let consumed = decode_reference(rest, &mut out).unwrap_or_else(|| {
            out.push('&');
            1
        });
        rest = &rest[consumed..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode the reference at the start of `input` (which begins with `&`) into
/// `out`, returning how many bytes it spanned.
///
/// Returns `None`, leaving `out` untouched, when `input` does not start with
/// a complete reference.
fn decode_reference(input: &str, out: &mut String) -> Option<usize> {
    let body = &input[1..];
    if let Some(numeric) = body.strip_prefix('#') {
        let (digits, radix, prefix_len) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (leading(hex, |c| c.is_ascii_hexdigit()), 16, 3),
            None => (leading(numeric, |c| c.is_ascii_digit()), 10, 2),
        };
        let end = prefix_len + digits.len();
        if digits.is_empty() || !input[end..].starts_with(';') {
            return None;
        }
        if let Some(c) = u32::from_str_radix(digits, radix)
            .ok()
            .filter(|&code| code > 0)
            .and_then(char::from_u32)
        {
            out.push(c);
        }
        return Some(end + 1);
    }

    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name = leading(body, |c| c.is_ascii_alphanumeric());
    let end = 1 + name.len();
    if !input[end..].starts_with(';') {
        return None;
    }
    out.push_str(lookup_entity(name).unwrap_or(&input[..=end]));
    Some(end + 1)
}

/// The longest prefix of `s` whose characters all satisfy `pred`.
fn leading(s: &str, pred: impl Fn(char) -> bool) -> &str {
    let end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    &s[..end]
}

/// Escape text content: `&`, `<` and `>`.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escape an attribute value for double quotes: `&`, `"`, `<` and `>`.
#[must_use]
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    escape(text, true)
}

fn escape(text: &str, quotes: bool) -> Cow<'_, str> {
    let needs = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !text.contains(needs) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_numeric_is_dropped() {
        assert_eq!(decode_entities("a&#99999999;b"), "ab");
        assert_eq!(decode_entities("&#99999999999999999999;"), "");
        assert_eq!(decode_entities("&#xD800;"), "");
        assert_eq!(decode_entities("&#0;"), "");
    }

    #[test]
    fn test_incomplete_references_are_literal() {
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("&amp"), "&amp");
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("&#x;"), "&#x;");
        assert_eq!(decode_entities("& ;"), "& ;");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&amp;#60;"), "&#60;");
    }

    #[test]
    fn test_borrowed_when_nothing_to_do() {
        assert!(matches!(decode_entities("plain"), Cow::Borrowed(_)));
        assert!(matches!(escape_html("plain"), Cow::Borrowed(_)));
    }
}
