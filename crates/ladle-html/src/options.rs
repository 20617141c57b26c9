//! Parser configuration.

use std::fmt;
use std::sync::Arc;

use ladle_dom::ElementData;

/// A caller-supplied test over a string.
pub type StrPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// How a [`Strainer`] tests tag names.
#[derive(Clone)]
pub enum TagMatch {
    /// A single name, compared ignoring ASCII case.
    Name(String),
    /// Any of several names, compared ignoring ASCII case.
    AnyOf(Vec<String>),
    /// An arbitrary test.
    Predicate(StrPredicate),
}

impl TagMatch {
    /// Build a predicate matcher from a closure.
    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    fn matches(&self, tag: &str) -> bool {
        match self {
            Self::Name(name) => tag.eq_ignore_ascii_case(name),
            Self::AnyOf(names) => names.iter().any(|n| tag.eq_ignore_ascii_case(n)),
            Self::Predicate(f) => f(tag),
        }
    }
}

impl fmt::Debug for TagMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::AnyOf(names) => f.debug_tuple("AnyOf").field(names).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// How a [`Strainer`] tests one attribute.
#[derive(Clone)]
pub enum AttrMatch {
    /// The attribute must be present with exactly this value.
    Equals(String),
    /// The attribute must be present, with any value.
    Present,
    /// The attribute must be absent.
    Absent,
    /// The attribute must be present and its value must pass the test.
    Predicate(StrPredicate),
}

impl AttrMatch {
    /// Build a predicate matcher from a closure.
    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Self::Absent, value) => value.is_none(),
            (_, None) => false,
            (Self::Present, Some(_)) => true,
            (Self::Equals(expected), Some(value)) => value == expected,
            (Self::Predicate(f), Some(value)) => f(value),
        }
    }
}

impl fmt::Debug for AttrMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            Self::Present => f.write_str("Present"),
            Self::Absent => f.write_str("Absent"),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// How a [`Strainer`] tests an element's text.
#[derive(Clone)]
pub enum TextMatch {
    /// The text must contain this substring.
    Contains(String),
    /// An arbitrary test.
    Predicate(StrPredicate),
}

impl TextMatch {
    /// Build a predicate matcher from a closure.
    pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    fn matches(&self, text: &str) -> bool {
        match self {
            Self::Contains(needle) => text.contains(needle.as_str()),
            Self::Predicate(f) => f(text),
        }
    }
}

impl fmt::Debug for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(needle) => f.debug_tuple("Contains").field(needle).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Filter applied to each element as it is parsed.
///
/// All configured conditions must hold. Elements that fail are left out of
/// the tree; content that follows them goes to the enclosing element.
#[derive(Debug, Clone, Default)]
pub struct Strainer {
    /// Tag name condition.
    pub name: Option<TagMatch>,
    /// Attribute conditions, all of which must hold.
    pub attrs: Vec<(String, AttrMatch)>,
    /// Text condition, tested against the element's text when it is added.
    ///
    /// Only raw-text and RCDATA elements have text at that point, so for
    /// other elements this tests the empty string.
    pub text: Option<TextMatch>,
}

impl Strainer {
    /// A strainer that keeps elements with the given tag name.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            name: Some(TagMatch::Name(name.into())),
            ..Self::default()
        }
    }

    /// Set the tag name condition.
    #[must_use]
    pub fn with_name(mut self, name: TagMatch) -> Self {
        self.name = Some(name);
        self
    }

    /// Add an attribute condition.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, condition: AttrMatch) -> Self {
        self.attrs.push((name.into(), condition));
        self
    }

    /// Set the text condition.
    #[must_use]
    pub fn with_text(mut self, text: TextMatch) -> Self {
        self.text = Some(text);
        self
    }

    /// Whether an element with this data and text passes.
    #[must_use]
    pub fn accepts(&self, element: &ElementData, text: &str) -> bool {
        if let Some(name) = &self.name
            && !name.matches(&element.tag_name)
        {
            return false;
        }
        if !self
            .attrs
            .iter()
            .all(|(attr, condition)| condition.matches(element.attr(attr)))
        {
            return false;
        }
        self.text.as_ref().is_none_or(|t| t.matches(text))
    }
}

/// Options controlling [`parse`](crate::parse).
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Lower-case tag names (default `true`).
    pub lower_case_tags: bool,
    /// Lower-case attribute names (default `true`).
    pub lower_case_attributes: bool,
    /// Keep only elements passing this filter (default `None`).
    pub strainer: Option<Strainer>,
    /// Record a [`SourceLocation`](ladle_dom::SourceLocation) on each node
    /// (default `false`).
    ///
    /// An element's location is its opening `<`, not the end of its tag name.
    pub track_source_locations: bool,
    /// Treat input as XML: no implicit closing, no raw-text elements, and
    /// only `/>` makes an element empty (default `false`).
    pub xml_mode: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            lower_case_tags: true,
            lower_case_attributes: true,
            strainer: None,
            track_source_locations: false,
            xml_mode: false,
        }
    }
}

impl ParseOptions {
    /// Set whether tag names are lower-cased.
    #[must_use]
    pub const fn with_lower_case_tags(mut self, enabled: bool) -> Self {
        self.lower_case_tags = enabled;
        self
    }

    /// Set whether attribute names are lower-cased.
    #[must_use]
    pub const fn with_lower_case_attributes(mut self, enabled: bool) -> Self {
        self.lower_case_attributes = enabled;
        self
    }

    /// Install an element filter.
    #[must_use]
    pub fn with_strainer(mut self, strainer: Strainer) -> Self {
        self.strainer = Some(strainer);
        self
    }

    /// Set whether source locations are recorded.
    #[must_use]
    pub const fn with_source_locations(mut self, enabled: bool) -> Self {
        self.track_source_locations = enabled;
        self
    }

    /// Set XML mode.
    #[must_use]
    pub const fn with_xml_mode(mut self, enabled: bool) -> Self {
        self.xml_mode = enabled;
        self
    }
}
