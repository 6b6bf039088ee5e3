use pretty_assertions::assert_eq;
use zhtml_core::{escaped, text, Element};

fn input_with(name: &'static str, value: &str) -> Element {
    let mut input = Element::new_void("input");
    input.set_string(name, value);
    input
}

#[test]
fn escape_string_values() {
    assert_eq!(
        zhtml_ssr::render(input_with("value", "\"><div>")),
        "<input value=\"&#34;&#62;&#60;div&#62;\"/>"
    );
}

#[test]
fn escape_data_values() {
    let mut div = Element::new("div");
    div.set_data("payload", "a&b");
    assert_eq!(
        zhtml_ssr::render(div),
        "<div data-payload=\"a&#38;b\"></div>"
    );
}

#[test]
fn escape_delimited_and_style_values() {
    let mut div = Element::new("div");
    div.add_delimited("class", " ", ["<x>"]);
    div.set_kv("style", "content", "\"q\"");
    assert_eq!(
        zhtml_ssr::render(div),
        "<div class=\"&#60;x&#62;\" style=\"content:&#34;q&#34;;\"></div>"
    );
}

#[test]
fn escaped_text_and_raw_text() {
    let mut p = Element::new("p");
    p.push_child(escaped("<b>bold</b>"));
    p.push_child(text("<i>kept</i>"));
    assert_eq!(
        zhtml_ssr::render(p),
        "<p>&#60;b&#62;bold&#60;/b&#62;<i>kept</i></p>"
    );
}

#[test]
fn string_children_are_escaped() {
    let mut p = Element::new("p");
    p.push_child("1 < 2");
    assert_eq!(zhtml_ssr::render(p), "<p>1 &#60; 2</p>");
}

#[test]
fn attribute_names_that_break_the_tag_are_skipped() {
    let mut div = Element::new("div");
    div.set_string("x\" onclick=\"alert(1)", "v");
    div.set_string("title", "kept");
    div.set_bool("a b", true);
    div.set_data("k\" onmouseover=\"y", "1");
    div.set_data("row", "2");
    assert_eq!(
        zhtml_ssr::render(div),
        "<div title=\"kept\" data-row=\"2\"></div>"
    );
}

#[test]
fn non_finite_numbers_are_skipped() {
    let mut circle = Element::new("circle");
    circle.set_float("r", f64::NAN);
    circle.set_float("cx", f64::INFINITY);
    circle.set_float("cy", 1.5);
    assert_eq!(zhtml_ssr::render(circle), "<circle cy=\"1.5\"></circle>");
}
