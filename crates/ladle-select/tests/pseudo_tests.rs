//! Integration tests for individual pseudo-classes.

use ladle_dom::DomTree;
use ladle_html::parse_document;
use ladle_select::select;

fn texts(tree: &DomTree, selector: &str) -> Vec<String> {
    select(tree, tree.root(), selector, None)
        .into_iter()
        .map(|id| tree.text_content(id))
        .collect()
}

fn list(n: usize) -> DomTree {
    let items: String = (1..=n).map(|i| format!("<li>{i}</li>")).collect();
    parse_document(&format!("<ul>{items}</ul>"))
}

// ========== :nth-* ==========

#[test]
fn test_nth_child_odd_matches_formula() {
    let tree = list(7);
    let odd = texts(&tree, "li:nth-child(odd)");
    assert_eq!(odd, vec!["1", "3", "5", "7"]);
    assert_eq!(texts(&tree, "li:nth-child(2n+1)"), odd);
    assert_eq!(texts(&tree, "li:nth-child( 2N + 1 )"), odd);
}

#[test]
fn test_nth_child_forms() {
    let tree = list(7);
    assert_eq!(texts(&tree, "li:nth-child(even)"), vec!["2", "4", "6"]);
    assert_eq!(texts(&tree, "li:nth-child(3)"), vec!["3"]);
    assert_eq!(texts(&tree, "li:nth-child(n+5)"), vec!["5", "6", "7"]);
    assert_eq!(texts(&tree, "li:nth-child(-n+2)"), vec!["1", "2"]);
    assert_eq!(texts(&tree, "li:nth-child(3n)"), vec!["3", "6"]);
    assert_eq!(texts(&tree, "li:nth-child(0)"), Vec::<String>::new());
    assert_eq!(texts(&tree, "li:nth-child(foo)"), Vec::<String>::new());
    assert_eq!(texts(&tree, "li:nth-child()"), Vec::<String>::new());
}

#[test]
fn test_nth_last_child() {
    let tree = list(5);
    assert_eq!(texts(&tree, "li:nth-last-child(1)"), vec!["5"]);
    assert_eq!(texts(&tree, "li:nth-last-child(odd)"), vec!["1", "3", "5"]);
    assert_eq!(texts(&tree, "li:last-child"), vec!["5"]);
    assert_eq!(texts(&tree, "li:first-child"), vec!["1"]);
}

#[test]
fn test_nth_of_type_skips_other_tags() {
    let tree = parse_document("<div><h3>t</h3><p>a</p><span>x</span><p>b</p><p>c</p></div>");
    assert_eq!(texts(&tree, "p:nth-of-type(2)"), vec!["b"]);
    assert_eq!(texts(&tree, "p:nth-child(2)"), vec!["a"]);
    assert_eq!(texts(&tree, "p:nth-last-of-type(1)"), vec!["c"]);
    assert_eq!(texts(&tree, "p:last-of-type"), vec!["c"]);
    assert_eq!(texts(&tree, "span:only-of-type"), vec!["x"]);
}

#[test]
fn test_text_nodes_do_not_count_as_siblings() {
    let tree = parse_document("<ul>\n  <li>1</li>\n  <li>2</li>\n</ul>");
    assert_eq!(texts(&tree, "li:first-child"), vec!["1"]);
    assert_eq!(texts(&tree, "li + li"), vec!["2"]);
}

// ========== content ==========

#[test]
fn test_empty_and_blank() {
    let tree = parse_document(
        "<div class=a></div><div class=b>  \n </div><div class=c><!-- x --></div><div class=d>t</div>",
    );
    let empty: Vec<_> = select(&tree, tree.root(), "div:empty", None)
        .into_iter()
        .filter_map(|id| tree.as_element(id)?.attr("class").map(str::to_string))
        .collect();
    assert_eq!(empty, vec!["a", "b"]);
    assert_eq!(select(&tree, tree.root(), "div:blank", None).len(), 2);
}

#[test]
fn test_contains_uses_all_descendant_text() {
    let tree = parse_document("<p>Hello <b>big</b> world</p><p>other</p>");
    assert_eq!(texts(&tree, "p:contains(\"big world\")"), vec!["Hello big world"]);
    assert!(texts(&tree, "p:contains()").is_empty());
}

#[test]
fn test_lang_inheritance() {
    let tree = parse_document(
        r#"<div lang="en-US"><p>a</p><p lang="">b</p><p xml:lang="de">c</p><p lang="English">d</p></div>"#,
    );
    assert_eq!(texts(&tree, "p:lang(en)"), vec!["a", "b"]);
    assert_eq!(texts(&tree, "p:lang('EN-us')"), vec!["a", "b"]);
    assert_eq!(texts(&tree, "p:lang(de)"), vec!["c"]);
}

#[test]
fn test_dir() {
    let tree = parse_document(r#"<div dir="RTL"><p>r</p><p dir="auto">s</p></div><p>l</p>"#);
    assert_eq!(texts(&tree, "p:dir(rtl)"), vec!["r", "s"]);
    assert_eq!(texts(&tree, "p:dir(ltr)"), vec!["l"]);
    assert!(texts(&tree, "p:dir()").is_empty());
}

// ========== form state ==========

#[test]
fn test_attribute_proxies() {
    let tree = parse_document(
        "<input name=a disabled><input name=b checked required><input name=c readonly>",
    );
    let names = |selector: &str| -> Vec<String> {
        select(&tree, tree.root(), selector, None)
            .into_iter()
            .filter_map(|id| tree.as_element(id)?.attr("name").map(str::to_string))
            .collect()
    };
    assert_eq!(names(":disabled"), vec!["a"]);
    assert_eq!(names("input:enabled"), vec!["b", "c"]);
    assert_eq!(names(":checked"), vec!["b"]);
    assert_eq!(names(":required"), vec!["b"]);
    assert_eq!(names("input:optional"), vec!["a", "c"]);
    assert_eq!(names(":read-only"), vec!["c"]);
    assert_eq!(names("input:read-write"), vec!["a", "b"]);
    assert_eq!(names(":default"), vec!["b"]);
}

#[test]
fn test_placeholder_shown() {
    let tree = parse_document(
        "<textarea placeholder=x></textarea><textarea placeholder=y>typed</textarea><textarea></textarea>",
    );
    let shown = select(&tree, tree.root(), ":placeholder-shown", None);
    assert_eq!(shown.len(), 1);
    assert_eq!(
        tree.as_element(shown[0]).and_then(|e| e.attr("placeholder")),
        Some("x")
    );
}

#[test]
fn test_constant_states() {
    let tree = parse_document("<input><a href=home>x</a>");
    assert_eq!(select(&tree, tree.root(), "input:valid", None).len(), 1);
    assert_eq!(select(&tree, tree.root(), "input:in-range", None).len(), 1);
    assert!(select(&tree, tree.root(), "input:invalid", None).is_empty());
    assert!(select(&tree, tree.root(), "a:hover", None).is_empty());
    assert!(select(&tree, tree.root(), "a:visited", None).is_empty());
    assert!(select(&tree, tree.root(), "a:HOVER", None).is_empty());
}

#[test]
fn test_nested_logical_pseudo_classes() {
    let tree = parse_document(
        "<section><p class=a>1</p><p class=b>2</p></section><section><p class=b>3</p></section>",
    );
    assert_eq!(texts(&tree, "section:not(:has(.a)) p"), vec!["3"]);
    assert_eq!(texts(&tree, "p:not(:is(.a, :first-child))"), vec!["2"]);
    assert_eq!(texts(&tree, "section:has(> p:nth-child(2)) .b"), vec!["2"]);
}
