use pretty_assertions::assert_eq;
use zhtml::prelude::*;
use zhtml_ssr::render;

#[test]
fn string_setter_family() {
    let a = html::a()
        .href("/a")
        .if_download(false, "file.txt")
        .if_hreflang(true, "en")
        .title_fmt(format_args!("page {}", 2));
    assert_eq!(
        render(a.clone()),
        r#"<a href="/a" hreflang="en" title="page 2"></a>"#
    );

    let a = a.href_remove().hreflang_remove().title_remove();
    assert_eq!(render(a), "<a></a>");
}

#[test]
fn if_fmt_only_applies_when_true() {
    let img = html::img()
        .if_alt_fmt(false, format_args!("{}", "skipped"))
        .if_src_fmt(true, format_args!("/img/{}.png", 3));
    assert_eq!(render(img), r#"<img src="/img/3.png"/>"#);
}

#[test]
fn numeric_setters() {
    let td = html::td().colspan(2).rowspan(3).if_colspan(false, 9);
    assert_eq!(render(td.clone()), r#"<td colspan="2" rowspan="3"></td>"#);
    assert_eq!(render(td.colspan_remove()), r#"<td rowspan="3"></td>"#);

    let meter = html::meter().min(0.0).max(1.0).value(0.25);
    assert_eq!(
        render(meter),
        r#"<meter min="0" max="1" value="0.25"></meter>"#
    );
}

#[test]
fn bool_setters_render_bare_or_not_at_all() {
    let input = html::input().disabled(true).readonly(false).checked(true);
    assert_eq!(render(input.clone()), "<input disabled checked/>");

    let input = input.disabled_remove();
    assert_eq!(render(input), "<input checked/>");
}

#[test]
fn choice_setters_store_the_literal_value() {
    for ty in InputType::ALL {
        let input = html::input().type_attr(*ty);
        assert_eq!(render(input), format!(r#"<input type="{ty}"/>"#));
    }

    let ol = html::ol().type_attr(OlType::UpperRoman);
    assert_eq!(render(ol.type_attr_remove()), "<ol></ol>");
}

#[test]
fn list_setters_append() {
    let link = html::link()
        .rel(["preload"])
        .rel(["stylesheet"])
        .if_rel(false, ["ignored"])
        .href("/app.css");
    assert_eq!(
        render(link.clone()),
        r#"<link href="/app.css" rel="preload stylesheet"/>"#
    );
    assert_eq!(render(link.rel_remove()), r#"<link href="/app.css"/>"#);
}

#[test]
fn list_setters_use_their_delimiter() {
    let img = html::img().srcset(["a.png 1x", "b.png 2x"]);
    assert_eq!(render(img), r#"<img srcset="a.png 1x,b.png 2x"/>"#);

    let iframe = html::iframe().allow(["camera", "microphone"]);
    assert_eq!(
        render(iframe),
        r#"<iframe allow="camera;microphone"></iframe>"#
    );
}

#[test]
fn keyword_attributes_use_the_attr_suffix() {
    let label = html::label().for_attr("email");
    assert_eq!(render(label), r#"<label for="email"></label>"#);

    let script = html::script().async_attr(true).type_attr("module");
    assert_eq!(render(script), r#"<script type="module" async></script>"#);

    let video = html::video().loop_attr(true);
    assert_eq!(render(video), "<video loop></video>");

    let link = html::link().as_attr("font");
    assert_eq!(render(link), r#"<link as="font"/>"#);
}

#[test]
fn global_attributes() {
    let div = html::div()
        .id("app")
        .dir(Dir::Rtl)
        .hidden(true)
        .tabindex(-1)
        .draggable(TrueFalse::False)
        .part(["header", "title"]);
    assert_eq!(
        render(div),
        r#"<div id="app" dir="rtl" draggable="false" tabindex="-1" hidden part="header title"></div>"#
    );
}

#[test]
fn remove_after_set_leaves_attribute_absent() {
    let div = html::div().lang("en").lang_remove();
    assert!(!div.element().has_attribute("lang"));

    let circle = svg::circle().r(4.0).r_remove();
    assert!(!circle.element().has_attribute("r"));

    let mo = mathml::mo().stretchy(TrueFalse::True).stretchy_remove();
    assert!(!mo.element().has_attribute("stretchy"));
}

#[test]
fn if_true_matches_plain_setter() {
    assert_eq!(
        html::p().if_title(true, "x"),
        html::p().title("x"),
    );
    assert_eq!(
        html::p().if_dir(true, Dir::Ltr),
        html::p().dir(Dir::Ltr),
    );
    assert_eq!(html::p().if_title(false, "x"), html::p());
}

#[test]
fn attributes_are_escaped() {
    let div = html::div().title("\"><script>");
    assert_eq!(
        render(div),
        r#"<div title="&#34;&#62;&#60;script&#62;"></div>"#
    );
}

#[test]
fn common_block_mixes_with_typed_setters() {
    let div = html::div()
        .id("card")
        .class(["card"])
        .style("color", "red")
        .custom_data("id", "7")
        .attrs(["aria-label", "Card"])
        .escaped("<hi>");
    assert_eq!(
        render(div),
        r#"<div id="card" aria-label="Card" class="card" style="color:red;" data-id="7">&#60;hi&#62;</div>"#
    );
}

#[test]
fn later_setter_replaces_an_attr_of_the_same_name() {
    assert_eq!(
        render(html::div().attr("tabindex", "2").tabindex(1)),
        r#"<div tabindex="1"></div>"#
    );
    assert_eq!(
        render(html::div().attr("class", "x").class(["y"])),
        r#"<div class="y"></div>"#
    );
    assert_eq!(
        render(svg::circle().attr("r", "5").r(3.0)),
        r#"<circle r="3"></circle>"#
    );
    assert_eq!(
        render(html::div().attr("style", "color:red").style("margin", "0")),
        r#"<div style="margin:0;"></div>"#
    );
    assert_eq!(
        render(html::div().hidden(true).attr("hidden", "until-found")),
        r#"<div hidden="until-found"></div>"#
    );
    assert_eq!(
        render(html::div().attr("data-id", "1").custom_data("id", "2")),
        r#"<div data-id="2"></div>"#
    );
}

#[test]
fn unsafe_attribute_names_never_reach_the_output() {
    let div = html::div()
        .attr("x\" onclick=\"alert(1)", "v")
        .custom_data("k\" onmouseover=\"y", "1")
        .id("ok");
    assert_eq!(render(div), r#"<div id="ok"></div>"#);
}
