//! Build a small page with a form, an inline SVG chart and a formula, then print it.
//!
//! Run with `RUST_LOG=debug` to see renderer diagnostics.

use zhtml::prelude::*;
use zhtml_ssr::Renderer;

fn main() {
    tracing_subscriber::fmt::init();

    let scores = [("alpha", 3.0), ("beta", 7.5), ("gamma", 5.0)];

    let chart = svg::svg()
        .view_box("0 0 120 40")
        .width("240")
        .children(scores.iter().enumerate().map(|(i, (name, score))| {
            svg::rect()
                .x(i as f64 * 40.0)
                .y(40.0 - score * 4.0)
                .width(30.0)
                .height(score * 4.0)
                .fill("steelblue")
                .custom_data("series", *name)
        }));

    let formula = mathml::math().display(MathDisplay::Block).child(
        mathml::mrow()
            .child(mathml::mi().escaped("x"))
            .child(mathml::mo().escaped("="))
            .child(
                mathml::mfrac()
                    .child(mathml::mn().escaped("1"))
                    .child(mathml::mn().escaped("2")),
            ),
    );

    let signup = html::form()
        .method(FormMethod::Post)
        .action("/signup")
        .z_req("/signup")
        .z_req_method(ZReqMethod::Post)
        .z_target("#result")
        .child(
            html::label()
                .for_attr("email")
                .escaped("Email"),
        )
        .child(
            html::input()
                .id("email")
                .type_attr(InputType::Email)
                .name("email")
                .required(true)
                .placeholder("you@example.com"),
        )
        .child(
            html::button()
                .type_attr(ButtonType::Submit)
                .class(["btn", "btn-primary"])
                .escaped("Sign up"),
        );

    let page = html::html().lang("en").children([
        html::head()
            .child(html::meta().charset("utf-8"))
            .child(html::title().escaped("zhtml demo"))
            .into_node(),
        html::body()
            .style("font-family", "sans-serif")
            .style_pairs(["margin", "0 auto", "max-width", "40rem"])
            .child(html::h1().escaped("Scores & formulas"))
            .child(chart)
            .child(formula)
            .child(signup)
            .child(html::div().id("result"))
            .into_node(),
    ]);

    let renderer = Renderer::new().with_pretty(true).with_doctype(true);
    tracing::debug!(indent = renderer.indent, "rendering page");
    println!("{}", renderer.render(page));
}
