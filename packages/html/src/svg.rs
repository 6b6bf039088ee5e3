//! SVG 2 elements, filter primitives and animation elements included.
//!
//! Tag names keep their SVG spelling (`linearGradient`, `feGaussianBlur`); constructors
//! use snake case. `use` is a keyword, so its constructor is [`use_()`].
//!
//! ```rust
//! use zhtml::prelude::*;
//!
//! let icon = svg::svg()
//!     .view_box("0 0 24 24")
//!     .child(svg::circle().cx(12.0).cy(12.0).r(10.0).fill("none").stroke("black"));
//!
//! assert_eq!(
//!     zhtml_ssr::render(icon),
//!     r#"<svg viewBox="0 0 24 24"><circle fill="none" stroke="black" cx="12" cy="12" r="10"></circle></svg>"#
//! );
//! ```

use crate::attribute_groups::*;
use crate::choices::*;

elements! {
    SvgCoreAttributes;

    // Structure

    svg(SvgSvgElement, "svg") [SvgPresentationAttributes, SvgConditionalAttributes] {
        height: Str = "height";
        preserve_aspect_ratio: Str = "preserveAspectRatio";
        /// `min-x min-y width height` of the user coordinate system.
        view_box: Str = "viewBox";
        width: Str = "width";
        x: Str = "x";
        xmlns: Str = "xmlns";
        y: Str = "y";
    };
    g(SvgGElement, "g") [SvgPresentationAttributes, SvgConditionalAttributes] {};
    defs(SvgDefsElement, "defs") [SvgPresentationAttributes] {};
    desc(SvgDescElement, "desc") {};
    title(SvgTitleElement, "title") {};
    metadata(SvgMetadataElement, "metadata") {};
    symbol(SvgSymbolElement, "symbol") [SvgPresentationAttributes] {
        height: Str = "height";
        preserve_aspect_ratio: Str = "preserveAspectRatio";
        ref_x: Str = "refX";
        ref_y: Str = "refY";
        view_box: Str = "viewBox";
        width: Str = "width";
        x: Str = "x";
        y: Str = "y";
    };
    /// A reference to another element, rendered as `<use>`.
    use_(SvgUseElement, "use") [SvgPresentationAttributes, SvgConditionalAttributes] {
        height: Str = "height";
        href: Str = "href";
        width: Str = "width";
        x: Str = "x";
        y: Str = "y";
    };
    switch(SvgSwitchElement, "switch") [SvgPresentationAttributes, SvgConditionalAttributes] {};
    a(SvgAElement, "a") [SvgPresentationAttributes, SvgConditionalAttributes] {
        download: Str = "download";
        href: Str = "href";
        hreflang: Str = "hreflang";
        ping: List(" ") = "ping";
        referrerpolicy: Choice(ReferrerPolicy) = "referrerpolicy";
        rel: List(" ") = "rel";
        target: Choice(Target) = "target";
        type_attr: Str = "type";
    };
    image(SvgImageElement, "image") [SvgPresentationAttributes, SvgConditionalAttributes] {
        crossorigin: Choice(CrossOrigin) = "crossorigin";
        decoding: Choice(Decoding) = "decoding";
        height: Str = "height";
        href: Str = "href";
        preserve_aspect_ratio: Str = "preserveAspectRatio";
        width: Str = "width";
        x: Str = "x";
        y: Str = "y";
    };
    foreign_object(SvgForeignObjectElement, "foreignObject") [SvgPresentationAttributes, SvgConditionalAttributes] {
        height: Str = "height";
        width: Str = "width";
        x: Str = "x";
        y: Str = "y";
    };
    view(SvgViewElement, "view") {
        preserve_aspect_ratio: Str = "preserveAspectRatio";
        view_box: Str = "viewBox";
    };
    style(SvgStyleElement, "style") {
        media: Str = "media";
        type_attr: Str = "type";
    };
    script(SvgScriptElement, "script") {
        crossorigin: Choice(CrossOrigin) = "crossorigin";
        href: Str = "href";
        type_attr: Str = "type";
    };

    // Shapes

    circle(SvgCircleElement, "circle") [SvgPresentationAttributes, SvgConditionalAttributes] {
        cx: Float = "cx";
        cy: Float = "cy";
        path_length: Float = "pathLength";
        r: Float = "r";
    };
    ellipse(SvgEllipseElement, "ellipse") [SvgPresentationAttributes, SvgConditionalAttributes] {
        cx: Float = "cx";
        cy: Float = "cy";
        path_length: Float = "pathLength";
        rx: Float = "rx";
        ry: Float = "ry";
    };
    line(SvgLineElement, "line") [SvgPresentationAttributes, SvgConditionalAttributes] {
        path_length: Float = "pathLength";
        x1: Float = "x1";
        x2: Float = "x2";
        y1: Float = "y1";
        y2: Float = "y2";
    };
    path(SvgPathElement, "path") [SvgPresentationAttributes, SvgConditionalAttributes] {
        /// Path data, for example `M 10 10 L 20 20 Z`.
        d: Str = "d";
        path_length: Float = "pathLength";
    };
    polygon(SvgPolygonElement, "polygon") [SvgPresentationAttributes, SvgConditionalAttributes] {
        path_length: Float = "pathLength";
        points: List(" ") = "points";
    };
    polyline(SvgPolylineElement, "polyline") [SvgPresentationAttributes, SvgConditionalAttributes] {
        path_length: Float = "pathLength";
        points: List(" ") = "points";
    };
    rect(SvgRectElement, "rect") [SvgPresentationAttributes, SvgConditionalAttributes] {
        height: Float = "height";
        path_length: Float = "pathLength";
        rx: Float = "rx";
        ry: Float = "ry";
        width: Float = "width";
        x: Float = "x";
        y: Float = "y";
    };

    // Text

    text(SvgTextElement, "text") [SvgPresentationAttributes, SvgConditionalAttributes] {
        dx: List(" ") = "dx";
        dy: List(" ") = "dy";
        length_adjust: Choice(LengthAdjust) = "lengthAdjust";
        rotate: List(" ") = "rotate";
        text_length: Str = "textLength";
        x: List(" ") = "x";
        y: List(" ") = "y";
    };
    tspan(SvgTspanElement, "tspan") [SvgPresentationAttributes, SvgConditionalAttributes] {
        dx: List(" ") = "dx";
        dy: List(" ") = "dy";
        length_adjust: Choice(LengthAdjust) = "lengthAdjust";
        rotate: List(" ") = "rotate";
        text_length: Str = "textLength";
        x: List(" ") = "x";
        y: List(" ") = "y";
    };
    text_path(SvgTextPathElement, "textPath") [SvgPresentationAttributes, SvgConditionalAttributes] {
        href: Str = "href";
        length_adjust: Choice(LengthAdjust) = "lengthAdjust";
        method: Choice(TextPathMethod) = "method";
        path: Str = "path";
        side: Choice(TextPathSide) = "side";
        spacing: Choice(TextPathSpacing) = "spacing";
        start_offset: Str = "startOffset";
        text_length: Str = "textLength";
    };

    // Paint servers

    linear_gradient(SvgLinearGradientElement, "linearGradient") [SvgPresentationAttributes] {
        gradient_transform: Str = "gradientTransform";
        gradient_units: Choice(Units) = "gradientUnits";
        href: Str = "href";
        spread_method: Choice(SpreadMethod) = "spreadMethod";
        x1: Str = "x1";
        x2: Str = "x2";
        y1: Str = "y1";
        y2: Str = "y2";
    };
    radial_gradient(SvgRadialGradientElement, "radialGradient") [SvgPresentationAttributes] {
        cx: Str = "cx";
        cy: Str = "cy";
        fr: Str = "fr";
        fx: Str = "fx";
        fy: Str = "fy";
        gradient_transform: Str = "gradientTransform";
        gradient_units: Choice(Units) = "gradientUnits";
        href: Str = "href";
        r: Str = "r";
        spread_method: Choice(SpreadMethod) = "spreadMethod";
    };
    stop(SvgStopElement, "stop") [SvgPresentationAttributes] {
        /// Position along the gradient vector, a number or a percentage.
        offset: Str = "offset";
    };
    pattern(SvgPatternElement, "pattern") [SvgPresentationAttributes] {
        height: Str = "height";
        href: Str = "href";
        pattern_content_units: Choice(Units) = "patternContentUnits";
        pattern_transform: Str = "patternTransform";
        pattern_units: Choice(Units) = "patternUnits";
        preserve_aspect_ratio: Str = "preserveAspectRatio";
        view_box: Str = "viewBox";
        width: Str = "width";
        x: Str = "x";
        y: Str = "y";
    };

    // Clipping, masking and markers

    clip_path(SvgClipPathElement, "clipPath") [SvgPresentationAttributes, SvgConditionalAttributes] {
        clip_path_units: Choice(Units) = "clipPathUnits";
    };
    mask(SvgMaskElement, "mask") [SvgPresentationAttributes, SvgConditionalAttributes] {
        height: Str = "height";
        mask_content_units: Choice(Units) = "maskContentUnits";
        mask_units: Choice(Units) = "maskUnits";
        width: Str = "width";
        x: Str = "x";
        y: Str = "y";
    };
    marker(SvgMarkerElement, "marker") [SvgPresentationAttributes] {
        marker_height: Str = "markerHeight";
        marker_units: Choice(MarkerUnits) = "markerUnits";
        marker_width: Str = "markerWidth";
        /// `auto`, `auto-start-reverse` or an angle.
        orient: Str = "orient";
        preserve_aspect_ratio: Str = "preserveAspectRatio";
        ref_x: Str = "refX";
        ref_y: Str = "refY";
        view_box: Str = "viewBox";
    };

    // Filters

    filter(SvgFilterElement, "filter") [SvgPresentationAttributes] {
        filter_units: Choice(Units) = "filterUnits";
        height: Str = "height";
        primitive_units: Choice(Units) = "primitiveUnits";
        width: Str = "width";
        x: Str = "x";
        y: Str = "y";
    };
    fe_blend(SvgFeBlendElement, "feBlend") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        in_attr: Str = "in";
        in2: Str = "in2";
        mode: Choice(BlendMode) = "mode";
    };
    fe_color_matrix(SvgFeColorMatrixElement, "feColorMatrix") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        in_attr: Str = "in";
        type_attr: Choice(ColorMatrixType) = "type";
        values: List(" ") = "values";
    };
    fe_component_transfer(SvgFeComponentTransferElement, "feComponentTransfer") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        in_attr: Str = "in";
    };
    fe_func_a(SvgFeFuncAElement, "feFuncA") [SvgTransferFunctionAttributes] {};
    fe_func_b(SvgFeFuncBElement, "feFuncB") [SvgTransferFunctionAttributes] {};
    fe_func_g(SvgFeFuncGElement, "feFuncG") [SvgTransferFunctionAttributes] {};
    fe_func_r(SvgFeFuncRElement, "feFuncR") [SvgTransferFunctionAttributes] {};
    fe_composite(SvgFeCompositeElement, "feComposite") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        in_attr: Str = "in";
        in2: Str = "in2";
        k1: Float = "k1";
        k2: Float = "k2";
        k3: Float = "k3";
        k4: Float = "k4";
        operator: Choice(CompositeOperator) = "operator";
    };
    fe_convolve_matrix(SvgFeConvolveMatrixElement, "feConvolveMatrix") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        bias: Float = "bias";
        divisor: Float = "divisor";
        edge_mode: Choice(EdgeMode) = "edgeMode";
        in_attr: Str = "in";
        kernel_matrix: List(" ") = "kernelMatrix";
        kernel_unit_length: Str = "kernelUnitLength";
        order: Str = "order";
        preserve_alpha: Choice(TrueFalse) = "preserveAlpha";
        target_x: Int = "targetX";
        target_y: Int = "targetY";
    };
    fe_diffuse_lighting(SvgFeDiffuseLightingElement, "feDiffuseLighting") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        diffuse_constant: Float = "diffuseConstant";
        in_attr: Str = "in";
        kernel_unit_length: Str = "kernelUnitLength";
        surface_scale: Float = "surfaceScale";
    };
    fe_displacement_map(SvgFeDisplacementMapElement, "feDisplacementMap") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        in_attr: Str = "in";
        in2: Str = "in2";
        scale: Float = "scale";
        x_channel_selector: Choice(ChannelSelector) = "xChannelSelector";
        y_channel_selector: Choice(ChannelSelector) = "yChannelSelector";
    };
    fe_distant_light(SvgFeDistantLightElement, "feDistantLight") {
        azimuth: Float = "azimuth";
        elevation: Float = "elevation";
    };
    fe_drop_shadow(SvgFeDropShadowElement, "feDropShadow") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        dx: Float = "dx";
        dy: Float = "dy";
        in_attr: Str = "in";
        std_deviation: Str = "stdDeviation";
    };
    fe_flood(SvgFeFloodElement, "feFlood") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {};
    fe_gaussian_blur(SvgFeGaussianBlurElement, "feGaussianBlur") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        edge_mode: Choice(EdgeMode) = "edgeMode";
        in_attr: Str = "in";
        /// One number, or two for separate x and y deviations.
        std_deviation: Str = "stdDeviation";
    };
    fe_image(SvgFeImageElement, "feImage") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        crossorigin: Choice(CrossOrigin) = "crossorigin";
        href: Str = "href";
        preserve_aspect_ratio: Str = "preserveAspectRatio";
    };
    fe_merge(SvgFeMergeElement, "feMerge") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {};
    fe_merge_node(SvgFeMergeNodeElement, "feMergeNode") {
        in_attr: Str = "in";
    };
    fe_morphology(SvgFeMorphologyElement, "feMorphology") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        in_attr: Str = "in";
        operator: Choice(MorphologyOperator) = "operator";
        radius: Str = "radius";
    };
    fe_offset(SvgFeOffsetElement, "feOffset") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        dx: Float = "dx";
        dy: Float = "dy";
        in_attr: Str = "in";
    };
    fe_point_light(SvgFePointLightElement, "fePointLight") {
        x: Float = "x";
        y: Float = "y";
        z: Float = "z";
    };
    fe_specular_lighting(SvgFeSpecularLightingElement, "feSpecularLighting") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        in_attr: Str = "in";
        kernel_unit_length: Str = "kernelUnitLength";
        specular_constant: Float = "specularConstant";
        specular_exponent: Float = "specularExponent";
        surface_scale: Float = "surfaceScale";
    };
    fe_spot_light(SvgFeSpotLightElement, "feSpotLight") {
        limiting_cone_angle: Float = "limitingConeAngle";
        points_at_x: Float = "pointsAtX";
        points_at_y: Float = "pointsAtY";
        points_at_z: Float = "pointsAtZ";
        specular_exponent: Float = "specularExponent";
        x: Float = "x";
        y: Float = "y";
        z: Float = "z";
    };
    fe_tile(SvgFeTileElement, "feTile") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        in_attr: Str = "in";
    };
    fe_turbulence(SvgFeTurbulenceElement, "feTurbulence") [SvgPresentationAttributes, SvgFilterPrimitiveAttributes] {
        base_frequency: Str = "baseFrequency";
        num_octaves: Int = "numOctaves";
        seed: Float = "seed";
        stitch_tiles: Choice(StitchTiles) = "stitchTiles";
        type_attr: Choice(TurbulenceType) = "type";
    };

    // Animation

    animate(SvgAnimateElement, "animate") [
        SvgAnimationTimingAttributes,
        SvgAnimationValueAttributes,
        SvgAnimationTargetAttributes,
        SvgConditionalAttributes,
    ] {};
    animate_motion(SvgAnimateMotionElement, "animateMotion") [
        SvgAnimationTimingAttributes,
        SvgAnimationValueAttributes,
        SvgConditionalAttributes,
    ] {
        href: Str = "href";
        key_points: List(";") = "keyPoints";
        path: Str = "path";
        /// `auto`, `auto-reverse` or an angle.
        rotate: Str = "rotate";
    };
    animate_transform(SvgAnimateTransformElement, "animateTransform") [
        SvgAnimationTimingAttributes,
        SvgAnimationValueAttributes,
        SvgAnimationTargetAttributes,
        SvgConditionalAttributes,
    ] {
        type_attr: Choice(TransformType) = "type";
    };
    set(SvgSetElement, "set") [
        SvgAnimationTimingAttributes,
        SvgAnimationTargetAttributes,
        SvgConditionalAttributes,
    ] {
        to: Str = "to";
    };
    mpath(SvgMpathElement, "mpath") {
        href: Str = "href";
    };
}
