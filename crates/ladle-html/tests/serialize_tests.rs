//! Integration tests for the serializer.

use ladle_dom::NodeId;
use ladle_html::{OutputFormat, SerializeOptions, parse_document, serialize};

fn render(html: &str, options: &SerializeOptions) -> String {
    let tree = parse_document(html);
    serialize(&tree, NodeId::ROOT, options)
}

#[test]
fn test_round_trip_well_formed() {
    let html = r#"<!DOCTYPE html><html><head><title>T</title></head><body><p class="a">x &amp; y</p><br><!-- c --></body></html>"#;
    assert_eq!(render(html, &SerializeOptions::default()), html);
}

#[test]
fn test_raw_text_not_escaped() {
    let html = "<script>if (a < b && c > d) {}</script>";
    assert_eq!(render(html, &SerializeOptions::default()), html);
}

#[test]
fn test_attribute_value_escaped() {
    let html = r#"<a title='say "hi" & bye'></a>"#;
    assert_eq!(
        render(html, &SerializeOptions::default()),
        r#"<a title="say &quot;hi&quot; &amp; bye"></a>"#
    );
}

#[test]
fn test_empty_value_is_bare() {
    let html = "<input disabled data-x=\"\">";
    assert_eq!(
        render(html, &SerializeOptions::default()),
        "<input disabled data-x>"
    );
}

#[test]
fn test_minimal_unquotes_safe_values() {
    let html = r#"<a href="/x" title="two words" class="c=d" checked></a>"#;
    assert_eq!(
        render(html, &SerializeOptions::format(OutputFormat::Minimal)),
        r#"<a href=/x title="two words" class="c=d" checked></a>"#
    );
}

#[test]
fn test_minimal_quotes_values_with_markup_or_whitespace() {
    let html = "<a title=\"x>y\" data-q=\"it's\" data-t=\"a\tb\" data-n=\"1\n2\"></a>";
    assert_eq!(
        render(html, &SerializeOptions::format(OutputFormat::Minimal)),
        "<a title=\"x&gt;y\" data-q=\"it's\" data-t=\"a\tb\" data-n=\"1\n2\"></a>"
    );
}

#[test]
fn test_html5_doctype() {
    let html = "<!doctype html PUBLIC \"x\"><p hidden>a</p>";
    assert_eq!(
        render(html, &SerializeOptions::format(OutputFormat::Html5)),
        "<!DOCTYPE html><p hidden>a</p>"
    );
}

#[test]
fn test_xhtml_output() {
    let html = "<!doctype html><p><input checked><span></span></p>";
    assert_eq!(
        render(html, &SerializeOptions::format(OutputFormat::Xhtml)),
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \
         \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">\
         <p><input checked=\"checked\" /><span /></p>"
    );
}

#[test]
fn test_self_closing_override() {
    let html = "<div><span></span></div>";
    let options = SerializeOptions::default().with_self_closing_tags(true);
    assert_eq!(render(html, &options), "<div><span /></div>");
    let xhtml = SerializeOptions::format(OutputFormat::Xhtml).with_self_closing_tags(false);
    assert_eq!(render(html, &xhtml), html);
}

#[test]
fn test_format_from_str() {
    assert_eq!("xhtml".parse::<OutputFormat>(), Ok(OutputFormat::Xhtml));
    assert_eq!("HTML5".parse::<OutputFormat>(), Ok(OutputFormat::Html5));
    assert!("fancy".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Minimal.to_string(), "minimal");
}
