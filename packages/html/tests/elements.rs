use pretty_assertions::assert_eq;
use zhtml::prelude::*;
use zhtml_ssr::{render, render_document, render_pretty};

#[test]
fn constructors_set_the_tag() {
    assert_eq!(html::div().element().tag(), "div");
    assert_eq!(svg::linear_gradient().element().tag(), "linearGradient");
    assert_eq!(svg::fe_gaussian_blur().element().tag(), "feGaussianBlur");
    assert_eq!(svg::use_().element().tag(), "use");
    assert_eq!(mathml::annotation_xml().element().tag(), "annotation-xml");
}

#[test]
fn void_elements_self_close() {
    for node in [
        html::br().into_node(),
        html::hr().into_node(),
        html::img().into_node(),
        html::input().into_node(),
        html::meta().into_node(),
        html::link().into_node(),
        html::source().into_node(),
        html::col().into_node(),
        html::wbr().into_node(),
    ] {
        let out = render(node);
        assert!(out.ends_with("/>"), "{out} should self-close");
    }

    assert_eq!(render(html::div()), "<div></div>");
    assert_eq!(render(html::textarea()), "<textarea></textarea>");
    assert_eq!(render(svg::circle()), "<circle></circle>");
}

#[test]
fn nested_list() {
    let list = html::ul().children((0..3).map(|i| html::li().value(i).escaped_fmt(format_args!("item {i}"))));
    assert_eq!(
        render(list),
        r#"<ul><li value="0">item 0</li><li value="1">item 1</li><li value="2">item 2</li></ul>"#
    );
}

#[test]
fn conditional_children() {
    let logged_in = false;
    let nav = html::nav()
        .if_children(logged_in, [html::a().href("/logout").escaped("Log out")])
        .tern_children(
            logged_in,
            [html::span().escaped("Welcome back")],
            [html::span().escaped("Hello, guest")],
        );
    assert_eq!(render(nav), "<nav><span>Hello, guest</span></nav>");
}

#[test]
fn optional_child() {
    let subtitle: Option<&str> = None;
    let header = html::header()
        .child(html::h1().escaped("Title"))
        .child(subtitle.map(|s| html::h2().escaped(s)));
    assert_eq!(render(header), "<header><h1>Title</h1></header>");
}

#[test]
fn svg_filter_primitives() {
    let filter = svg::filter()
        .id("shadow")
        .filter_units(Units::UserSpaceOnUse)
        .child(
            svg::fe_gaussian_blur()
                .in_attr("SourceAlpha")
                .std_deviation("2")
                .result("blur"),
        )
        .child(svg::fe_offset().in_attr("blur").dx(1.0).dy(1.5).x("0").y("0"))
        .child(
            svg::fe_merge()
                .child(svg::fe_merge_node())
                .child(svg::fe_merge_node().in_attr("SourceGraphic")),
        );

    assert_eq!(
        render(filter),
        concat!(
            r#"<filter id="shadow" filterUnits="userSpaceOnUse">"#,
            r#"<feGaussianBlur in="SourceAlpha" stdDeviation="2" result="blur"></feGaussianBlur>"#,
            r#"<feOffset in="blur" x="0" y="0" dx="1" dy="1.5"></feOffset>"#,
            r#"<feMerge><feMergeNode></feMergeNode><feMergeNode in="SourceGraphic"></feMergeNode></feMerge>"#,
            "</filter>"
        )
    );
}

#[test]
fn svg_presentation_attributes() {
    let path = svg::path()
        .d("M0 0 L10 10")
        .stroke("red")
        .stroke_width(2.0)
        .stroke_linecap(StrokeLinecap::Round)
        .stroke_dasharray(["4", "2"])
        .fill_rule(FillRule::EvenOdd)
        .xml_space(XmlSpace::Preserve);
    assert_eq!(
        render(path),
        r#"<path d="M0 0 L10 10" stroke="red" stroke-linecap="round" fill-rule="evenodd" xml:space="preserve" stroke-width="2" stroke-dasharray="4 2"></path>"#
    );
}

#[test]
fn svg_gradient_and_pattern() {
    let defs = svg::defs()
        .child(
            svg::linear_gradient()
                .id("g")
                .gradient_units(Units::ObjectBoundingBox)
                .spread_method(SpreadMethod::Reflect)
                .child(svg::stop().offset("0%").stop_color("white"))
                .child(svg::stop().offset("100%").stop_color("black").stop_opacity(0.5)),
        )
        .child(
            svg::pattern()
                .id("p")
                .pattern_units(Units::UserSpaceOnUse)
                .width("10")
                .height("10"),
        );

    assert_eq!(
        render(defs),
        concat!(
            r#"<defs><linearGradient id="g" gradientUnits="objectBoundingBox" spreadMethod="reflect">"#,
            r#"<stop offset="0%" stop-color="white"></stop>"#,
            r#"<stop offset="100%" stop-color="black" stop-opacity="0.5"></stop>"#,
            r#"</linearGradient><pattern id="p" patternUnits="userSpaceOnUse" width="10" height="10"></pattern></defs>"#
        )
    );
}

#[test]
fn svg_animation() {
    let animate = svg::animate()
        .attribute_name("opacity")
        .values(["0", "1", "0"])
        .dur("2s")
        .repeat_count("indefinite")
        .fill(AnimationFill::Freeze);
    assert_eq!(
        render(animate),
        r#"<animate attributeName="opacity" dur="2s" repeatCount="indefinite" fill="freeze" values="0;1;0"></animate>"#
    );
}

#[test]
fn mathml_elements() {
    let expr = mathml::math().display(MathDisplay::Inline).child(
        mathml::msup()
            .child(mathml::mi().mathvariant(MathVariant::Normal).escaped("x"))
            .child(mathml::mn().escaped("2")),
    );
    assert_eq!(
        render(expr),
        r#"<math display="inline"><msup><mi mathvariant="normal">x</mi><mn>2</mn></msup></math>"#
    );

    let boxed = mathml::menclose()
        .notation(["box", "circle"])
        .child(mathml::mi().escaped("a"));
    assert_eq!(
        render(boxed),
        r#"<menclose notation="box circle"><mi>a</mi></menclose>"#
    );

    let action = mathml::maction()
        .actiontype(ActionType::Toggle)
        .selection(1)
        .mathcolor("red");
    assert_eq!(
        render(action),
        r#"<maction actiontype="toggle" mathcolor="red" selection="1"></maction>"#
    );
}

#[test]
fn z_attributes_on_any_element() {
    let row = html::tr()
        .z_req("/rows/1")
        .z_req_method(ZReqMethod::Delete)
        .z_swap("outerHTML")
        .z_swap_push(true)
        .z_req_batch(false)
        .z_trigger_fmt(format_args!("click delay:{}ms", 100));
    assert_eq!(
        render(row),
        r#"<tr z-req="/rows/1" z-req-method="delete" z-swap="outerHTML" z-trigger="click delay:100ms" z-swap-push></tr>"#
    );

    let circle = svg::circle().z_action("select").z_action_remove().z_data("{}");
    assert_eq!(render(circle), r#"<circle z-data="{}"></circle>"#);

    let mi = mathml::mi().if_z_json(true, "[1]");
    assert_eq!(render(mi), r#"<mi z-json="[1]"></mi>"#);
}

#[test]
fn full_document() {
    let page = html::html().lang("en").children([
        html::head()
            .child(html::meta().charset("utf-8"))
            .child(html::title().escaped("Hi"))
            .into_node(),
        html::body().child(html::p().escaped("Hello")).into_node(),
    ]);

    assert_eq!(
        render_document(page.clone()),
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"/><title>Hi</title></head><body><p>Hello</p></body></html>"#
    );

    assert_eq!(
        render_pretty(page),
        [
            r#"<html lang="en">"#,
            "  <head>",
            r#"    <meta charset="utf-8"/>"#,
            "    <title>Hi</title>",
            "  </head>",
            "  <body>",
            "    <p>Hello</p>",
            "  </body>",
            "</html>",
        ]
        .join("\n")
    );
}

#[test]
fn choices_parse_back() {
    assert_eq!("_blank".parse::<Target>(), Ok(Target::Blank));
    assert_eq!("userSpaceOnUse".parse::<Units>(), Ok(Units::UserSpaceOnUse));
    assert_eq!("plaintext-only".parse::<ContentEditable>(), Ok(ContentEditable::PlaintextOnly));
    assert!("nope".parse::<Preload>().is_err());

    for method in ZReqMethod::ALL {
        let rendered = render(html::form().z_req_method(*method));
        assert!(rendered.contains(&format!(r#"z-req-method="{}""#, method.as_str())));
    }
}
