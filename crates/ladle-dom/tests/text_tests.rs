//! Tests for text collection helpers.

use ladle_dom::{DomTree, ElementData, NodeId, NodeType, TextOptions};

/// <div><p> Hello </p><!--skip--><span>  </span><b>world</b></div>
fn sample() -> (DomTree, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let div = tree.alloc(NodeType::Element(ElementData::new("div")));
    tree.append_child(NodeId::ROOT, div);

    let p = tree.alloc(NodeType::Element(ElementData::new("p")));
    tree.append_child(div, p);
    let hello = tree.alloc(NodeType::Text(" Hello ".to_string()));
    tree.append_child(p, hello);

    let comment = tree.alloc(NodeType::Comment("skip".to_string()));
    tree.append_child(div, comment);

    let span = tree.alloc(NodeType::Element(ElementData::new("span")));
    tree.append_child(div, span);
    let blank = tree.alloc(NodeType::Text("  ".to_string()));
    tree.append_child(span, blank);

    let b = tree.alloc(NodeType::Element(ElementData::new("b")));
    tree.append_child(div, b);
    let world = tree.alloc(NodeType::Text("world".to_string()));
    tree.append_child(b, world);

    (tree, div, p)
}

#[test]
fn test_text_content_ignores_comments() {
    let (tree, div, _) = sample();
    assert_eq!(tree.text_content(div), " Hello   world");
}

#[test]
fn test_get_text_with_separator_and_strip() {
    let (tree, div, _) = sample();
    let options = TextOptions::with_separator("|").strip(true);
    assert_eq!(tree.get_text(div, &options), "Hello|world");
    assert_eq!(
        tree.get_text(div, &TextOptions::with_separator("|")),
        " Hello |  |world"
    );
}

#[test]
fn test_stripped_strings_skip_blank() {
    let (tree, div, _) = sample();
    assert_eq!(
        tree.stripped_strings(div).collect::<Vec<_>>(),
        vec!["Hello", "world"]
    );
    assert_eq!(tree.strings(div).count(), 3);
}

#[test]
fn test_get_string_follows_single_child() {
    let (tree, div, p) = sample();
    assert_eq!(tree.get_string(p), Some(" Hello "));
    assert_eq!(tree.get_string(div), None);
}
