use pretty_assertions::assert_eq;
use zhtml_core::{Element, ElementBuilder, Error, Node};

#[derive(Debug, Clone, PartialEq)]
struct Div(Element);

impl From<Div> for Node {
    fn from(div: Div) -> Self {
        div.0.into()
    }
}

impl ElementBuilder for Div {
    fn element(&self) -> &Element {
        &self.0
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.0
    }

    fn into_element(self) -> Element {
        self.0
    }
}

fn div() -> Div {
    Div(Element::new("div"))
}

fn class_tokens(div: &Div) -> Vec<&str> {
    div.element()
        .delimited_attr("class")
        .map(|class| class.iter().collect())
        .unwrap_or_default()
}

#[test]
fn attrs_sets_every_pair() {
    let div = div().attrs(["id", "main", "role", "region"]);
    assert_eq!(div.element().string_attr("id"), Some("main"));
    assert_eq!(div.element().string_attr("role"), Some("region"));
}

#[test]
#[should_panic(expected = "attrs must be a multiple of 2")]
fn attrs_panics_on_odd_count() {
    let _ = div().attrs(["a", "1", "b"]);
}

#[test]
fn try_attrs_reports_odd_count() {
    let err = div().try_attrs(["a", "1", "b"]).unwrap_err();
    assert_eq!(err, Error::OddAttributeCount(3));
}

#[test]
fn attrs_map_and_remove() {
    let div = div()
        .attrs_map([("title", "t"), ("lang", "en")])
        .attr_remove("title");
    assert!(!div.element().has_attribute("title"));
    assert_eq!(div.element().string_attr("lang"), Some("en"));
}

#[test]
fn class_appends_in_order() {
    let div = div().class(["a", "b"]).class(["c"]);
    assert_eq!(class_tokens(&div), ["a", "b", "c"]);
}

#[test]
fn class_remove_drops_tokens() {
    let div = div().class(["a", "b", "c"]).class_remove(["b"]);
    assert_eq!(class_tokens(&div), ["a", "c"]);

    let div = div.class_remove(["a", "c"]);
    assert!(!div.element().has_attribute("class"));
}

#[test]
fn if_class_is_conditional() {
    let div = div().if_class(false, ["hidden"]).if_class(true, ["shown"]);
    assert_eq!(class_tokens(&div), ["shown"]);
}

#[test]
fn style_last_write_wins() {
    let div = div()
        .style("color", "red")
        .style("margin", "0")
        .style("color", "blue");

    let style = div.element().kv_attr("style").unwrap();
    assert_eq!(style.get("color"), Some("blue"));
    assert_eq!(style.get("margin"), Some("0"));
    assert_eq!(style.to_string(), "color:blue;margin:0;");
}

#[test]
fn style_pairs_and_map() {
    let div = div()
        .style_pairs(["width", "1px", "height", "2px"])
        .style_map([("width", "3px")])
        .style_fmt("top", format_args!("{}px", 4));

    assert_eq!(
        div.element().kv_attr("style").unwrap().to_string(),
        "width:3px;height:2px;top:4px;"
    );
}

#[test]
#[should_panic(expected = "Must have an even number of pairs")]
fn style_pairs_panics_on_odd_count() {
    let _ = div().style_pairs(["color"]);
}

#[test]
fn style_remove_keeps_other_keys() {
    let div = div()
        .style("color", "red")
        .style("margin", "0")
        .style_remove(["color"]);
    assert_eq!(
        div.element().kv_attr("style").unwrap().to_string(),
        "margin:0;"
    );
}

#[test]
fn custom_data_roundtrip() {
    let div = div()
        .custom_data("id", "7")
        .custom_data_fmt("row", format_args!("{}", 3))
        .if_custom_data(false, "skip", "x");

    assert_eq!(div.element().data_attr("id"), Some("7"));
    assert_eq!(div.element().data_attr("row"), Some("3"));
    assert_eq!(div.element().data_attr("skip"), None);

    let div = div.custom_data_remove("id");
    assert!(!div.element().has_attribute("data-id"));
}

#[test]
fn conditional_setters_never_mutate_when_false() {
    let base = div().class(["a"]);
    let same = base
        .clone()
        .if_attr(false, "id", "x")
        .if_style(false, "color", "red")
        .if_text(false, "t")
        .if_escaped(false, "e")
        .if_children(false, [Node::empty()]);
    assert_eq!(base, same);
}

#[test]
fn text_is_raw_and_escaped_is_escaped() {
    let div = div()
        .text("<b>")
        .escaped("<i>")
        .text_fmt(format_args!("{}", 1));
    assert_eq!(
        div.element().children(),
        [
            Node::Raw("<b>".into()),
            Node::Escaped("<i>".into()),
            Node::Raw("1".into()),
        ]
    );
}

#[test]
fn tern_children_picks_a_branch() {
    let yes = div().tern_children(true, ["a"], ["b"]);
    let no = div().tern_children(false, ["a"], ["b"]);
    assert_eq!(yes.element().children(), [Node::Escaped("a".into())]);
    assert_eq!(no.element().children(), [Node::Escaped("b".into())]);
}
