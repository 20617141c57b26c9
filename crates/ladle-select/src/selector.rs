//! Compiled selector structures.

use crate::pseudo::PseudoClass;

/// Attribute conditions inside `[...]`.
///
/// Names and values are compared exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSelector {
    /// `[attr]` - the attribute is present.
    Exists(String),

    /// `[attr=value]` - the value is exactly `value`.
    Equals(String, String),

    /// `[attr~=value]` - one of the whitespace-separated words is `value`.
    Includes(String, String),

    /// `[attr|=value]` - the value is `value` or starts with `value-`.
    DashMatch(String, String),

    /// `[attr^=value]` - the value starts with `value`.
    PrefixMatch(String, String),

    /// `[attr$=value]` - the value ends with `value`.
    SuffixMatch(String, String),

    /// `[attr*=value]` - the value contains `value`.
    SubstringMatch(String, String),
}

impl AttributeSelector {
    /// Build a selector from an operator such as `^=`.
    ///
    /// Returns `None` for operators that do not exist.
    #[must_use]
    pub fn from_operator(op: &str, name: String, value: String) -> Option<Self> {
        Some(match op {
            "=" => Self::Equals(name, value),
            "~=" => Self::Includes(name, value),
            "|=" => Self::DashMatch(name, value),
            "^=" => Self::PrefixMatch(name, value),
            "$=" => Self::SuffixMatch(name, value),
            "*=" => Self::SubstringMatch(name, value),
            _ => return None,
        })
    }

    /// The attribute name this selector tests.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Exists(name)
            | Self::Equals(name, _)
            | Self::Includes(name, _)
            | Self::DashMatch(name, _)
            | Self::PrefixMatch(name, _)
            | Self::SuffixMatch(name, _)
            | Self::SubstringMatch(name, _) => name,
        }
    }

    /// Test an attribute value (`None` when the attribute is absent).
    #[must_use]
    pub fn matches_value(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Self::Exists(_) => true,
            Self::Equals(_, expected) => value == expected,
            Self::Includes(_, word) => value.split_ascii_whitespace().any(|w| w == word),
            Self::DashMatch(_, prefix) => {
                value == prefix
                    || value
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('-'))
            }
            Self::PrefixMatch(_, prefix) => value.starts_with(prefix.as_str()),
            Self::SuffixMatch(_, suffix) => value.ends_with(suffix.as_str()),
            Self::SubstringMatch(_, needle) => value.contains(needle.as_str()),
        }
    }
}

/// Relationship between two compound parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace: the left part matches some ancestor.
    Descendant,

    /// `>`: the left part matches the parent.
    Child,

    /// `+`: the left part matches the immediately preceding element sibling.
    NextSibling,

    /// `~`: the left part matches some preceding element sibling.
    SubsequentSibling,
}

/// One compound selector: conditions that must all hold on one element.
///
/// A part with no conditions at all matches any element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorPart {
    /// Tag name, lower-cased; `*` means any.
    pub tag: Option<String>,
    /// Required `id`.
    pub id: Option<String>,
    /// Required class tokens.
    pub classes: Vec<String>,
    /// Attribute conditions.
    pub attributes: Vec<AttributeSelector>,
    /// Pseudo-class conditions.
    pub pseudo_classes: Vec<PseudoClass>,
}

/// One comma-separated group: parts joined by combinators.
///
/// `combinators[i]` sits between `parts[i]` and `parts[i + 1]`. Matching
/// reads right to left, starting from the last part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledSelector {
    /// Compound parts, left to right.
    pub parts: Vec<SelectorPart>,
    /// Combinators between consecutive parts.
    pub combinators: Vec<Combinator>,
}

impl CompiledSelector {
    /// A group with no parts. It never matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// All groups of a selector string. Matches when any group matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorList {
    /// The groups, in source order.
    pub selectors: Vec<CompiledSelector>,
}

impl SelectorList {
    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Whether there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Iterate over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, CompiledSelector> {
        self.selectors.iter()
    }
}

impl<'a> IntoIterator for &'a SelectorList {
    type Item = &'a CompiledSelector;
    type IntoIter = std::slice::Iter<'a, CompiledSelector>;

    fn into_iter(self) -> Self::IntoIter {
        self.selectors.iter()
    }
}
