use pretty_assertions::assert_eq;
use zhtml_core::Element;

#[test]
fn static_styles() {
    let mut div = Element::new("div");
    div.set_kv("style", "width", "100px");
    assert_eq!(
        zhtml_ssr::render(div),
        r#"<div style="width:100px;"></div>"#
    );
}

#[test]
fn overwritten_styles_keep_their_position() {
    let mut div = Element::new("div");
    div.set_kv("style", "color", "red");
    div.set_kv("style", "width", "1px");
    div.set_kv("style", "color", "blue");
    assert_eq!(
        zhtml_ssr::render(div),
        r#"<div style="color:blue;width:1px;"></div>"#
    );
}

#[test]
fn emptied_style_is_not_rendered() {
    let mut div = Element::new("div");
    div.set_kv("style", "color", "red");
    div.remove_kv_keys("style", ["color"]);
    assert_eq!(zhtml_ssr::render(div), "<div></div>");
}
