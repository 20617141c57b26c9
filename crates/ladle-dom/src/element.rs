//! Element payload with cached `id` and class lookups.

use std::collections::HashSet;

use crate::attributes::Attributes;

/// Element-specific data.
///
/// The attribute list is private: every write goes through
/// [`set_attr`](Self::set_attr) or [`remove_attr`](Self::remove_attr), which
/// keep the `id` and class caches in step with the `id` and `class`
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The element's tag name, case-normalized by the parser.
    pub tag_name: String,
    attrs: Attributes,
    id: Option<String>,
    classes: HashSet<String>,
}

impl ElementData {
    /// Create an element with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self::with_attributes(tag_name, Attributes::new())
    }

    /// Create an element from a prepared attribute list.
    #[must_use]
    pub fn with_attributes(tag_name: impl Into<String>, attrs: Attributes) -> Self {
        let id = attrs.get("id").map(str::to_string);
        let classes = attrs.get("class").map(split_classes).unwrap_or_default();
        Self {
            tag_name: tag_name.into(),
            attrs,
            id,
            classes,
        }
    }

    /// The value of the `id` attribute, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The set of class tokens from the `class` attribute.
    #[must_use]
    pub const fn classes(&self) -> &HashSet<String> {
        &self.classes
    }

    /// Whether the `class` attribute contains this token.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Look up an attribute value by exact name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Whether the attribute is present, with any value.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// All attributes in insertion order.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "id" => self.id = Some(value.clone()),
            "class" => self.classes = split_classes(&value),
            _ => {}
        }
        self.attrs.set(name, value)
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        match name {
            "id" => self.id = None,
            "class" => self.classes.clear(),
            _ => {}
        }
        self.attrs.remove(name)
    }
}

fn split_classes(value: &str) -> HashSet<String> {
    value.split_ascii_whitespace().map(str::to_string).collect()
}
