//! Attribute families shared by groups of SVG and MathML elements.

use zhtml_core::ElementBuilder;

use crate::choices::*;

/// Core attributes accepted by every SVG element.
#[rustfmt::skip]
pub trait SvgCoreAttributes: ElementBuilder {
    attributes!([
        autofocus: Bool = "autofocus";
        id: Str = "id";
        lang: Str = "lang";
        tabindex: Int = "tabindex";
        xml_space: Choice(XmlSpace) = "xml:space";
    ]);
}

/// Presentation attributes for shapes, text and containers.
///
/// Each one mirrors the CSS property of the same name. Values that are lengths, colors or
/// paint servers are plain strings.
#[rustfmt::skip]
pub trait SvgPresentationAttributes: ElementBuilder {
    attributes!([
        clip_path: Str = "clip-path";
        clip_rule: Choice(FillRule) = "clip-rule";
        color: Str = "color";
        color_interpolation_filters: Choice(ColorInterpolation) = "color-interpolation-filters";
        cursor: Str = "cursor";
        display: Str = "display";
        dominant_baseline: Choice(DominantBaseline) = "dominant-baseline";
        fill: Str = "fill";
        fill_opacity: Float = "fill-opacity";
        fill_rule: Choice(FillRule) = "fill-rule";
        filter: Str = "filter";
        flood_color: Str = "flood-color";
        flood_opacity: Float = "flood-opacity";
        font_family: Str = "font-family";
        font_size: Str = "font-size";
        font_style: Str = "font-style";
        font_weight: Str = "font-weight";
        letter_spacing: Str = "letter-spacing";
        lighting_color: Str = "lighting-color";
        marker_end: Str = "marker-end";
        marker_mid: Str = "marker-mid";
        marker_start: Str = "marker-start";
        mask: Str = "mask";
        opacity: Float = "opacity";
        overflow: Choice(Overflow) = "overflow";
        pointer_events: Choice(PointerEvents) = "pointer-events";
        shape_rendering: Choice(ShapeRendering) = "shape-rendering";
        stop_color: Str = "stop-color";
        stop_opacity: Float = "stop-opacity";
        stroke: Str = "stroke";
        stroke_dasharray: List(" ") = "stroke-dasharray";
        stroke_dashoffset: Float = "stroke-dashoffset";
        stroke_linecap: Choice(StrokeLinecap) = "stroke-linecap";
        stroke_linejoin: Choice(StrokeLinejoin) = "stroke-linejoin";
        stroke_miterlimit: Float = "stroke-miterlimit";
        stroke_opacity: Float = "stroke-opacity";
        stroke_width: Float = "stroke-width";
        text_anchor: Choice(TextAnchor) = "text-anchor";
        text_decoration: Str = "text-decoration";
        /// A transform list such as `translate(10 20) rotate(45)`.
        transform: Str = "transform";
        transform_origin: Str = "transform-origin";
        vector_effect: Choice(VectorEffect) = "vector-effect";
        visibility: Choice(Visibility) = "visibility";
        word_spacing: Str = "word-spacing";
    ]);
}

/// Conditional processing attributes.
#[rustfmt::skip]
pub trait SvgConditionalAttributes: ElementBuilder {
    attributes!([
        required_extensions: List(" ") = "requiredExtensions";
        system_language: List(",") = "systemLanguage";
    ]);
}

/// Subregion and output name for filter primitives (`fe*` elements).
#[rustfmt::skip]
pub trait SvgFilterPrimitiveAttributes: ElementBuilder {
    attributes!([
        height: Str = "height";
        result: Str = "result";
        width: Str = "width";
        x: Str = "x";
        y: Str = "y";
    ]);
}

/// Component transfer functions of `feFuncR`, `feFuncG`, `feFuncB` and `feFuncA`.
#[rustfmt::skip]
pub trait SvgTransferFunctionAttributes: ElementBuilder {
    attributes!([
        amplitude: Float = "amplitude";
        exponent: Float = "exponent";
        intercept: Float = "intercept";
        offset: Float = "offset";
        slope: Float = "slope";
        table_values: List(" ") = "tableValues";
        type_attr: Choice(TransferFunctionType) = "type";
    ]);
}

/// Timing attributes of the animation elements.
#[rustfmt::skip]
pub trait SvgAnimationTimingAttributes: ElementBuilder {
    attributes!([
        begin: List(";") = "begin";
        dur: Str = "dur";
        end: List(";") = "end";
        fill: Choice(AnimationFill) = "fill";
        max: Str = "max";
        min: Str = "min";
        repeat_count: Str = "repeatCount";
        repeat_dur: Str = "repeatDur";
        restart: Choice(Restart) = "restart";
    ]);
}

/// Interpolation attributes of `animate`, `animateMotion` and `animateTransform`.
#[rustfmt::skip]
pub trait SvgAnimationValueAttributes: ElementBuilder {
    attributes!([
        accumulate: Choice(Accumulate) = "accumulate";
        additive: Choice(Additive) = "additive";
        by: Str = "by";
        calc_mode: Choice(CalcMode) = "calcMode";
        from: Str = "from";
        key_splines: List(";") = "keySplines";
        key_times: List(";") = "keyTimes";
        to: Str = "to";
        values: List(";") = "values";
    ]);
}

/// Which attribute an animation drives, and on which element.
#[rustfmt::skip]
pub trait SvgAnimationTargetAttributes: ElementBuilder {
    attributes!([
        attribute_name: Str = "attributeName";
        href: Str = "href";
    ]);
}

/// Attributes every MathML element accepts.
#[rustfmt::skip]
pub trait MathmlGlobalAttributes: ElementBuilder {
    attributes!([
        autofocus: Bool = "autofocus";
        dir: Choice(MathDir) = "dir";
        displaystyle: Choice(TrueFalse) = "displaystyle";
        id: Str = "id";
        mathbackground: Str = "mathbackground";
        mathcolor: Str = "mathcolor";
        mathsize: Str = "mathsize";
        nonce: Str = "nonce";
        /// Only `normal` is meaningful in MathML Core, on single-character `mi`.
        mathvariant: Choice(MathVariant) = "mathvariant";
        scriptlevel: Int = "scriptlevel";
        tabindex: Int = "tabindex";
    ]);
}
