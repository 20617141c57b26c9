//! CSS selector compilation, caching and matching for Ladle trees.
//!
//! # Scope
//!
//! - **Grammar**: comma-separated groups of compound parts joined by the
//!   descendant, `>`, `+` and `~` combinators. Compounds take a tag or `*`,
//!   an id, classes, attribute conditions (`=`, `~=`, `|=`, `^=`, `$=`,
//!   `*=`, presence) and pseudo-classes in any order.
//! - **Pseudo-classes**: structural (`:nth-*`, `:first-child`, ...), logical
//!   (`:not`, `:is`, `:where`, `:has`), content (`:contains`, `:empty`,
//!   `:lang`, `:dir`) and form-state proxies read from attributes.
//! - **Cache**: compiled lists are memoized by their exact source string in a
//!   bounded LRU, shared process-wide or owned through [`SelectorCompiler`].
//! - **Queries**: [`select`], [`select_one`] and the ancestor variants.
//!
//! Invalid selectors never fail to compile; they degrade to whatever prefix
//! could be understood.
//!
//! ```
//! let tree = ladle_html::parse_document("<ul><li class=a>1</li><li>2</li></ul>");
//! let items = ladle_select::select(&tree, tree.root(), "li:not(.a)", None);
//! assert_eq!(items.len(), 1);
//! ```

/// Fixed-capacity least-recently-used cache.
pub mod cache;
mod compiler;
mod matcher;
/// `an+b` formulas.
pub mod nth;
mod parser;
/// Pseudo-class names and their compiled form.
pub mod pseudo;
mod query;
mod selector;

pub use cache::LruCache;
pub use compiler::{
    CacheStats, DEFAULT_CACHE_CAPACITY, SelectorCompiler, cache_stats, clear_cache, compile, global,
};
pub use matcher::matches;
pub use nth::NthFormula;
pub use parser::parse_selector_list;
pub use pseudo::{NthKind, PseudoClass, PseudoName};
pub use query::{select, select_compiled, select_one, select_parent, select_parents};
pub use selector::{AttributeSelector, Combinator, CompiledSelector, SelectorList, SelectorPart};
