//! Pseudo-class names and their compiled forms.
//!
//! Names are resolved once, when a selector is compiled. Selector-valued
//! arguments (`:not`, `:is`, `:where`, `:has`) are kept as text and compiled
//! through the cache the first time they are matched.

use std::str::FromStr;

use ladle_common::warning::warn_once;
use strum_macros::{Display, EnumString};

use crate::nth::NthFormula;

/// Every pseudo-class name the matcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PseudoName {
    // Tree structure
    /// `:first-child`
    FirstChild,
    /// `:last-child`
    LastChild,
    /// `:only-child`
    OnlyChild,
    /// `:nth-child`
    NthChild,
    /// `:nth-last-child`
    NthLastChild,
    /// `:first-of-type`
    FirstOfType,
    /// `:last-of-type`
    LastOfType,
    /// `:only-of-type`
    OnlyOfType,
    /// `:nth-of-type`
    NthOfType,
    /// `:nth-last-of-type`
    NthLastOfType,
    /// `:empty`
    Empty,
    /// `:blank`
    Blank,
    /// `:root`
    Root,
    /// `:scope`
    Scope,
    // Logical
    /// `:not`
    Not,
    /// `:is`
    Is,
    /// `:where`
    Where,
    /// `:has`
    Has,
    // Content and language
    /// `:contains`
    Contains,
    /// `:lang`
    Lang,
    /// `:dir`
    Dir,
    // Form state read from attributes
    /// `:enabled`
    Enabled,
    /// `:disabled`
    Disabled,
    /// `:checked`
    Checked,
    /// `:indeterminate`
    Indeterminate,
    /// `:required`
    Required,
    /// `:optional`
    Optional,
    /// `:read-only`
    ReadOnly,
    /// `:read-write`
    ReadWrite,
    /// `:placeholder-shown`
    PlaceholderShown,
    /// `:default`
    Default,
    /// `:valid`
    Valid,
    /// `:invalid`
    Invalid,
    /// `:in-range`
    InRange,
    /// `:out-of-range`
    OutOfRange,
    // User interaction and media state, never present in a static tree
    /// `:focus`
    Focus,
    /// `:focus-within`
    FocusWithin,
    /// `:focus-visible`
    FocusVisible,
    /// `:hover`
    Hover,
    /// `:active`
    Active,
    /// `:visited`
    Visited,
    /// `:link`
    Link,
    /// `:any-link`
    AnyLink,
    /// `:local-link`
    LocalLink,
    /// `:target`
    Target,
    /// `:target-within`
    TargetWithin,
    /// `:current`
    Current,
    /// `:past`
    Past,
    /// `:future`
    Future,
    /// `:playing`
    Playing,
    /// `:paused`
    Paused,
    /// `:seeking`
    Seeking,
    /// `:buffering`
    Buffering,
    /// `:stalled`
    Stalled,
    /// `:muted`
    Muted,
    /// `:volume-locked`
    VolumeLocked,
    /// `:fullscreen`
    Fullscreen,
    /// `:picture-in-picture`
    PictureInPicture,
    /// `:autofill`
    Autofill,
    /// `:modal`
    Modal,
    /// `:user-invalid`
    UserInvalid,
    /// `:user-valid`
    UserValid,
}

/// Which sibling list an `:nth-*` position is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NthKind {
    /// `:nth-child`: among element siblings, from the start.
    Child,
    /// `:nth-last-child`: among element siblings, from the end.
    LastChild,
    /// `:nth-of-type`: among same-tag siblings, from the start.
    OfType,
    /// `:nth-last-of-type`: among same-tag siblings, from the end.
    LastOfType,
}

/// A pseudo-class ready for matching.
///
/// A missing or empty argument is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoClass {
    /// `:nth-*`. A `None` formula never matches.
    Nth(NthKind, Option<NthFormula>),
    /// `:first-child`.
    FirstChild,
    /// `:last-child`.
    LastChild,
    /// `:only-child`.
    OnlyChild,
    /// `:first-of-type`.
    FirstOfType,
    /// `:last-of-type`.
    LastOfType,
    /// `:only-of-type`.
    OnlyOfType,
    /// `:empty` and `:blank`: no children but whitespace-only text.
    Empty,
    /// `:root` and `:scope`: a top-level element.
    Root,
    /// `:not(list)`. No argument matches everything.
    Not(Option<String>),
    /// `:is(list)` and `:where(list)`.
    Is(Option<String>),
    /// `:has(relative)`.
    Has(Option<String>),
    /// `:contains(text)`, quotes removed.
    Contains(Option<String>),
    /// `:lang(code)`, lower-cased with quotes removed.
    Lang(Option<String>),
    /// `:dir(ltr|rtl)`, lower-cased.
    Dir(Option<String>),
    /// Holds when the attribute is present.
    HasAttribute(&'static str),
    /// Holds when the attribute is absent.
    LacksAttribute(&'static str),
    /// `:default`: `checked` or `selected` is present.
    Default,
    /// `:placeholder-shown`: `placeholder` present and no visible text.
    PlaceholderShown,
    /// A fixed answer, for states a static tree cannot have.
    Constant(bool),
    /// A name that is not recognized. Never matches.
    Unknown(String),
}

impl PseudoClass {
    /// Resolve a pseudo-class from its name and raw argument.
    #[must_use]
    pub fn compile(name: &str, arg: Option<&str>) -> Self {
        let Ok(known) = PseudoName::from_str(name) else {
            let _ = warn_once("Selector", &format!("unsupported pseudo-class ':{name}'"));
            return Self::Unknown(name.to_string());
        };
        let arg = arg.filter(|a| !a.is_empty());
        let nth = |kind| Self::Nth(kind, arg.and_then(NthFormula::parse));

        match known {
            PseudoName::FirstChild => Self::FirstChild,
            PseudoName::LastChild => Self::LastChild,
            PseudoName::OnlyChild => Self::OnlyChild,
            PseudoName::NthChild => nth(NthKind::Child),
            PseudoName::NthLastChild => nth(NthKind::LastChild),
            PseudoName::FirstOfType => Self::FirstOfType,
            PseudoName::LastOfType => Self::LastOfType,
            PseudoName::OnlyOfType => Self::OnlyOfType,
            PseudoName::NthOfType => nth(NthKind::OfType),
            PseudoName::NthLastOfType => nth(NthKind::LastOfType),
            PseudoName::Empty | PseudoName::Blank => Self::Empty,
            PseudoName::Root | PseudoName::Scope => Self::Root,
            PseudoName::Not => Self::Not(arg.map(str::to_string)),
            PseudoName::Is | PseudoName::Where => Self::Is(arg.map(str::to_string)),
            PseudoName::Has => Self::Has(arg.map(str::to_string)),
            PseudoName::Contains => Self::Contains(arg.map(|a| unquote(a).to_string())),
            PseudoName::Lang => Self::Lang(
                arg.map(|a| a.trim().replace(['"', '\''], "").to_lowercase())
                    .filter(|a| !a.is_empty()),
            ),
            PseudoName::Dir => Self::Dir(arg.map(|a| a.trim().to_ascii_lowercase())),
            PseudoName::Enabled => Self::LacksAttribute("disabled"),
            PseudoName::Disabled => Self::HasAttribute("disabled"),
            PseudoName::Checked => Self::HasAttribute("checked"),
            PseudoName::Required => Self::HasAttribute("required"),
            PseudoName::Optional => Self::LacksAttribute("required"),
            PseudoName::ReadOnly => Self::HasAttribute("readonly"),
            PseudoName::ReadWrite => Self::LacksAttribute("readonly"),
            PseudoName::Default => Self::Default,
            PseudoName::PlaceholderShown => Self::PlaceholderShown,
            PseudoName::Valid | PseudoName::InRange => Self::Constant(true),
            PseudoName::Invalid
            | PseudoName::OutOfRange
            | PseudoName::Indeterminate
            | PseudoName::Focus
            | PseudoName::FocusWithin
            | PseudoName::FocusVisible
            | PseudoName::Hover
            | PseudoName::Active
            | PseudoName::Visited
            | PseudoName::Link
            | PseudoName::AnyLink
            | PseudoName::LocalLink
            | PseudoName::Target
            | PseudoName::TargetWithin
            | PseudoName::Current
            | PseudoName::Past
            | PseudoName::Future
            | PseudoName::Playing
            | PseudoName::Paused
            | PseudoName::Seeking
            | PseudoName::Buffering
            | PseudoName::Stalled
            | PseudoName::Muted
            | PseudoName::VolumeLocked
            | PseudoName::Fullscreen
            | PseudoName::PictureInPicture
            | PseudoName::Autofill
            | PseudoName::Modal
            | PseudoName::UserInvalid
            | PseudoName::UserValid => Self::Constant(false),
        }
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}
