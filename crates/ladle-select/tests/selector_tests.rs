//! Integration tests for selector queries over parsed documents.

use ladle_dom::{DomTree, NodeId};
use ladle_html::parse_document;
use ladle_select::{matches, select, select_one, select_parent, select_parents};

const PAGE: &str = r#"
<div id="page" class="shell">
  <header class="masthead">
    <h1 lang="en">Recipes</h1>
    <nav>
      <a href="/" class="link current">Home</a>
      <a href="/soups" class="link">Soups</a>
      <a href="/breads" class="link">Breads</a>
    </nav>
  </header>
  <main lang="fr">
    <article class="recipe" data-id="1">
      <h2>Onion soup</h2>
      <p class="intro">First slice the onions</p>
      <p>Then simmer</p>
    </article>
    <article class="recipe featured" data-id="2">
      <h2>Baguette</h2>
      <p class="intro">Knead the dough</p>
    </article>
  </main>
  <footer>
    <p>Made in a kitchen</p>
  </footer>
</div>
"#;

fn page() -> DomTree {
    parse_document(PAGE)
}

fn count(tree: &DomTree, selector: &str) -> usize {
    select(tree, tree.root(), selector, None).len()
}

fn texts(tree: &DomTree, selector: &str) -> Vec<String> {
    select(tree, tree.root(), selector, None)
        .into_iter()
        .map(|id| tree.text_content(id))
        .collect()
}

// ========== simple selectors ==========

#[test]
fn test_select_by_tag() {
    let tree = page();
    assert_eq!(count(&tree, "p"), 4);
    assert_eq!(count(&tree, "P"), 4);
    assert_eq!(count(&tree, "aside"), 0);
}

#[test]
fn test_select_by_class_and_id() {
    let tree = page();
    assert_eq!(count(&tree, ".link"), 3);
    assert_eq!(count(&tree, "#page"), 1);
    assert_eq!(count(&tree, ".recipe.featured"), 1);
    assert_eq!(count(&tree, "div#page.shell"), 1);
    assert_eq!(count(&tree, "#missing"), 0);
}

#[test]
fn test_universal_selector() {
    let tree = page();
    let elements = tree
        .descendants(NodeId::ROOT)
        .filter(|&id| tree.as_element(id).is_some())
        .count();
    assert_eq!(count(&tree, "*"), elements);
}

#[test]
fn test_select_by_attribute() {
    let tree = page();
    assert_eq!(count(&tree, "[data-id]"), 2);
    assert_eq!(count(&tree, "[data-id=\"1\"]"), 1);
    assert_eq!(count(&tree, "[data-id=2]"), 1);
    assert_eq!(count(&tree, "[href^=\"/s\"]"), 1);
    assert_eq!(count(&tree, "[href$='eads']"), 1);
    assert_eq!(count(&tree, "[href*=oup]"), 1);
    assert_eq!(count(&tree, "[class~=current]"), 1);
    assert_eq!(count(&tree, "[class~=cur]"), 0);
}

#[test]
fn test_attribute_dash_match() {
    let tree = parse_document(r#"<p lang="en">a</p><p lang="en-GB">b</p><p lang="english">c</p>"#);
    assert_eq!(texts(&tree, "p[lang|=en]"), vec!["a", "b"]);
}

// ========== combinators ==========

#[test]
fn test_descendant_and_child() {
    let tree = page();
    assert_eq!(count(&tree, "nav a"), 3);
    assert_eq!(count(&tree, "nav > a"), 3);
    assert_eq!(count(&tree, "header > a"), 0);
    assert_eq!(count(&tree, "header a"), 3);
    assert_eq!(count(&tree, "div>header"), 1);
    assert_eq!(count(&tree, "article.recipe h2"), 2);
}

#[test]
fn test_sibling_combinators() {
    let tree = page();
    assert_eq!(count(&tree, "h2 + p"), 2);
    assert_eq!(count(&tree, "h2 ~ p"), 3);
    assert_eq!(count(&tree, "h2+p+p"), 1);
    assert_eq!(count(&tree, "h1 + h2"), 0);
}

#[test]
fn test_child_of_document_does_not_match() {
    let tree = page();
    assert_eq!(count(&tree, "* > div"), 0);
}

#[test]
fn test_selector_groups() {
    let tree = page();
    assert_eq!(count(&tree, "h1, h2"), 3);
    assert_eq!(texts(&tree, "h2, h1"), vec!["Recipes", "Onion soup", "Baguette"]);
}

// ========== logical pseudo-classes ==========

#[test]
fn test_where_and_is() {
    let tree = page();
    assert_eq!(count(&tree, "article :where(.intro, h2)"), 4);
    assert_eq!(count(&tree, ":is(header, footer) > *"), 3);
    assert_eq!(count(&tree, "p:is()"), 0);
}

#[test]
fn test_not_is_complement() {
    let tree = page();
    let all = count(&tree, "a");
    let active = count(&tree, "a.current");
    let rest = count(&tree, "a:not(.current)");
    assert_eq!(active, 1);
    assert_eq!(active + rest, all);
    assert_eq!(count(&tree, "p:not()"), 4);
}

#[test]
fn test_has_variants() {
    let tree = page();
    assert_eq!(count(&tree, "article:has(> h2)"), 2);
    assert_eq!(count(&tree, "main:has(> h2)"), 0);
    assert_eq!(count(&tree, "main:has(h2)"), 1);
    assert_eq!(count(&tree, "h2:has(+ p)"), 2);
    assert_eq!(count(&tree, "h1:has(+ p)"), 0);
    assert_eq!(count(&tree, "h1:has(~ nav)"), 1);
    assert_eq!(count(&tree, "nav:has(>)"), 1);
    assert_eq!(count(&tree, "p:has()"), 0);
}

// ========== structural pseudo-classes ==========

#[test]
fn test_root_and_of_type() {
    let tree = page();
    let root = select(&tree, tree.root(), ":root", None);
    assert_eq!(root.len(), 1);
    assert_eq!(tree.tag_name(root[0]), Some("div"));
    assert_eq!(count(&tree, "p:first-of-type"), 3);
    assert_eq!(count(&tree, "p:last-child"), 3);
    assert_eq!(count(&tree, "p:only-child"), 1);
    assert_eq!(count(&tree, "h1:only-of-type"), 1);
    assert_eq!(count(&tree, "article:last-child"), 1);
    assert_eq!(count(&tree, "article:nth-of-type(2).featured"), 1);
    assert_eq!(count(&tree, "p:nth-child(2)"), 2);
}

#[test]
fn test_contains_and_lang() {
    let tree = page();
    assert_eq!(texts(&tree, "p:contains(First)"), vec!["First slice the onions"]);
    assert_eq!(count(&tree, "p:contains('the')"), 2);
    assert_eq!(texts(&tree, ":lang(en)"), vec!["Recipes"]);
    assert_eq!(count(&tree, "p:lang(fr)"), 3);
}

// ========== queries ==========

#[test]
fn test_limit() {
    let tree = page();
    assert_eq!(select(&tree, tree.root(), "p", Some(2)).len(), 2);
    assert_eq!(select(&tree, tree.root(), "p", Some(10)).len(), 4);
    assert!(select(&tree, tree.root(), "p", Some(0)).is_empty());
}

#[test]
fn test_select_one_is_first_in_document_order() {
    let tree = page();
    let first = select_one(&tree, tree.root(), "p").unwrap();
    assert_eq!(tree.text_content(first), "First slice the onions");
    assert!(select_one(&tree, tree.root(), "table").is_none());
}

#[test]
fn test_scope_is_excluded() {
    let tree = page();
    let featured = select_one(&tree, tree.root(), ".featured").unwrap();
    assert_eq!(select(&tree, featured, "p", None).len(), 1);
    assert!(select(&tree, featured, "article", None).is_empty());
}

#[test]
fn test_select_parents_nearest_first() {
    let tree = page();
    let intro = select_one(&tree, tree.root(), "p.intro").unwrap();
    let parents = select_parents(&tree, intro, "article, div, main");
    let tags: Vec<_> = parents.iter().filter_map(|&id| tree.tag_name(id)).collect();
    assert_eq!(tags, vec!["article", "main", "div"]);

    assert_eq!(
        select_parent(&tree, intro, ".shell").and_then(|id| tree.tag_name(id)),
        Some("div")
    );
    assert!(select_parent(&tree, intro, "footer").is_none());
}

#[test]
fn test_matches_free_function() {
    let tree = page();
    let div = tree.document_element().unwrap();
    assert!(matches(&tree, div, "div#page.shell"));
    assert!(matches(&tree, div, "span, .shell"));
    assert!(!matches(&tree, div, "div.masthead"));
    assert!(!matches(&tree, NodeId::ROOT, "*"));
}

#[test]
fn test_degenerate_selectors_never_panic() {
    let tree = page();
    assert_eq!(count(&tree, ""), 0);
    assert_eq!(count(&tree, ",,"), 0);
    assert_eq!(count(&tree, "p >"), 4);
    assert_eq!(count(&tree, "[unterminated"), count(&tree, "*"));
    assert_eq!(count(&tree, "p:nth-child("), 0);
    assert_eq!(count(&tree, "p:frobnicate"), 0);
}
