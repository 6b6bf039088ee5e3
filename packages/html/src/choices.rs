//! Closed value sets for enumerated attributes.
//!
//! Tags whose attributes accept the same set of keywords share one enum. The string passed
//! to each enum header is the attribute name reported by `FromStr` errors.

choices! {
    // HTML global attributes

    Dir("dir") {
        Ltr = "ltr",
        Rtl = "rtl",
        Auto = "auto",
    }

    Autocapitalize("autocapitalize") {
        Off = "off",
        None = "none",
        On = "on",
        Sentences = "sentences",
        Words = "words",
        Characters = "characters",
    }

    ContentEditable("contenteditable") {
        True = "true",
        False = "false",
        PlaintextOnly = "plaintext-only",
    }

    /// `true`/`false` enumerated attributes such as `draggable` and `spellcheck`.
    ///
    /// Shared by many attributes, so parse errors carry a generic label.
    ///
    /// These are not boolean attributes: `false` has to be spelled out.
    TrueFalse("true/false") {
        True = "true",
        False = "false",
    }

    EnterKeyHint("enterkeyhint") {
        Enter = "enter",
        Done = "done",
        Go = "go",
        Next = "next",
        Previous = "previous",
        Search = "search",
        Send = "send",
    }

    InputMode("inputmode") {
        None = "none",
        Text = "text",
        Decimal = "decimal",
        Numeric = "numeric",
        Tel = "tel",
        Search = "search",
        Email = "email",
        Url = "url",
    }

    Popover("popover") {
        Auto = "auto",
        Manual = "manual",
        Hint = "hint",
    }

    Translate("translate") {
        Yes = "yes",
        No = "no",
    }

    // Links, media and forms

    Target("target") {
        SelfFrame = "_self",
        Blank = "_blank",
        Parent = "_parent",
        Top = "_top",
    }

    ReferrerPolicy("referrerpolicy") {
        NoReferrer = "no-referrer",
        NoReferrerWhenDowngrade = "no-referrer-when-downgrade",
        Origin = "origin",
        OriginWhenCrossOrigin = "origin-when-cross-origin",
        SameOrigin = "same-origin",
        StrictOrigin = "strict-origin",
        StrictOriginWhenCrossOrigin = "strict-origin-when-cross-origin",
        UnsafeUrl = "unsafe-url",
    }

    CrossOrigin("crossorigin") {
        Anonymous = "anonymous",
        UseCredentials = "use-credentials",
    }

    Loading("loading") {
        Eager = "eager",
        Lazy = "lazy",
    }

    Decoding("decoding") {
        Sync = "sync",
        Async = "async",
        Auto = "auto",
    }

    FetchPriority("fetchpriority") {
        High = "high",
        Low = "low",
        Auto = "auto",
    }

    Preload("preload") {
        None = "none",
        Metadata = "metadata",
        Auto = "auto",
    }

    TrackKind("kind") {
        Subtitles = "subtitles",
        Captions = "captions",
        Descriptions = "descriptions",
        Chapters = "chapters",
        Metadata = "metadata",
    }

    AreaShape("shape") {
        Rect = "rect",
        Circle = "circle",
        Poly = "poly",
        Default = "default",
    }

    ButtonType("type") {
        Submit = "submit",
        Reset = "reset",
        Button = "button",
    }

    InputType("type") {
        Button = "button",
        Checkbox = "checkbox",
        Color = "color",
        Date = "date",
        DatetimeLocal = "datetime-local",
        Email = "email",
        File = "file",
        Hidden = "hidden",
        Image = "image",
        Month = "month",
        Number = "number",
        Password = "password",
        Radio = "radio",
        Range = "range",
        Reset = "reset",
        Search = "search",
        Submit = "submit",
        Tel = "tel",
        Text = "text",
        Time = "time",
        Url = "url",
        Week = "week",
    }

    FormMethod("method") {
        Get = "get",
        Post = "post",
        Dialog = "dialog",
    }

    FormEnctype("enctype") {
        UrlEncoded = "application/x-www-form-urlencoded",
        Multipart = "multipart/form-data",
        TextPlain = "text/plain",
    }

    OnOff("autocomplete") {
        On = "on",
        Off = "off",
    }

    Capture("capture") {
        User = "user",
        Environment = "environment",
    }

    PopoverTargetAction("popovertargetaction") {
        Hide = "hide",
        Show = "show",
        Toggle = "toggle",
    }

    TextareaWrap("wrap") {
        Soft = "soft",
        Hard = "hard",
    }

    OlType("type") {
        Decimal = "1",
        LowerAlpha = "a",
        UpperAlpha = "A",
        LowerRoman = "i",
        UpperRoman = "I",
    }

    ThScope("scope") {
        Row = "row",
        Col = "col",
        RowGroup = "rowgroup",
        ColGroup = "colgroup",
    }

    HttpEquiv("http-equiv") {
        ContentSecurityPolicy = "content-security-policy",
        ContentType = "content-type",
        DefaultStyle = "default-style",
        XUaCompatible = "x-ua-compatible",
        Refresh = "refresh",
    }

    ShadowRootMode("shadowrootmode") {
        Open = "open",
        Closed = "closed",
    }

    // SVG

    XmlSpace("xml:space") {
        Default = "default",
        Preserve = "preserve",
    }

    FillRule("fill-rule") {
        NonZero = "nonzero",
        EvenOdd = "evenodd",
    }

    StrokeLinecap("stroke-linecap") {
        Butt = "butt",
        Round = "round",
        Square = "square",
    }

    StrokeLinejoin("stroke-linejoin") {
        Arcs = "arcs",
        Bevel = "bevel",
        Miter = "miter",
        MiterClip = "miter-clip",
        Round = "round",
    }

    TextAnchor("text-anchor") {
        Start = "start",
        Middle = "middle",
        End = "end",
    }

    DominantBaseline("dominant-baseline") {
        Auto = "auto",
        TextBottom = "text-bottom",
        Alphabetic = "alphabetic",
        Ideographic = "ideographic",
        Middle = "middle",
        Central = "central",
        Mathematical = "mathematical",
        Hanging = "hanging",
        TextTop = "text-top",
    }

    Visibility("visibility") {
        Visible = "visible",
        Hidden = "hidden",
        Collapse = "collapse",
    }

    Overflow("overflow") {
        Visible = "visible",
        Hidden = "hidden",
        Scroll = "scroll",
        Auto = "auto",
    }

    PointerEvents("pointer-events") {
        BoundingBox = "bounding-box",
        VisiblePainted = "visiblePainted",
        VisibleFill = "visibleFill",
        VisibleStroke = "visibleStroke",
        Visible = "visible",
        Painted = "painted",
        Fill = "fill",
        Stroke = "stroke",
        All = "all",
        None = "none",
    }

    ShapeRendering("shape-rendering") {
        Auto = "auto",
        OptimizeSpeed = "optimizeSpeed",
        CrispEdges = "crispEdges",
        GeometricPrecision = "geometricPrecision",
    }

    VectorEffect("vector-effect") {
        None = "none",
        NonScalingStroke = "non-scaling-stroke",
        NonScalingSize = "non-scaling-size",
        NonRotation = "non-rotation",
        FixedPosition = "fixed-position",
    }

    ColorInterpolation("color-interpolation-filters") {
        Auto = "auto",
        SRgb = "sRGB",
        LinearRgb = "linearRGB",
    }

    /// Coordinate systems for `gradientUnits`, `patternUnits`, `clipPathUnits`, `maskUnits`
    /// and friends.
    Units("gradientUnits") {
        UserSpaceOnUse = "userSpaceOnUse",
        ObjectBoundingBox = "objectBoundingBox",
    }

    MarkerUnits("markerUnits") {
        StrokeWidth = "strokeWidth",
        UserSpaceOnUse = "userSpaceOnUse",
    }

    SpreadMethod("spreadMethod") {
        Pad = "pad",
        Reflect = "reflect",
        Repeat = "repeat",
    }

    LengthAdjust("lengthAdjust") {
        Spacing = "spacing",
        SpacingAndGlyphs = "spacingAndGlyphs",
    }

    TextPathMethod("method") {
        Align = "align",
        Stretch = "stretch",
    }

    TextPathSpacing("spacing") {
        Auto = "auto",
        Exact = "exact",
    }

    TextPathSide("side") {
        Left = "left",
        Right = "right",
    }

    BlendMode("mode") {
        Normal = "normal",
        Multiply = "multiply",
        Screen = "screen",
        Overlay = "overlay",
        Darken = "darken",
        Lighten = "lighten",
        ColorDodge = "color-dodge",
        ColorBurn = "color-burn",
        HardLight = "hard-light",
        SoftLight = "soft-light",
        Difference = "difference",
        Exclusion = "exclusion",
        Hue = "hue",
        Saturation = "saturation",
        Color = "color",
        Luminosity = "luminosity",
    }

    ColorMatrixType("type") {
        Matrix = "matrix",
        Saturate = "saturate",
        HueRotate = "hueRotate",
        LuminanceToAlpha = "luminanceToAlpha",
    }

    CompositeOperator("operator") {
        Over = "over",
        In = "in",
        Out = "out",
        Atop = "atop",
        Xor = "xor",
        Lighter = "lighter",
        Arithmetic = "arithmetic",
    }

    EdgeMode("edgeMode") {
        Duplicate = "duplicate",
        Wrap = "wrap",
        None = "none",
    }

    ChannelSelector("xChannelSelector") {
        R = "R",
        G = "G",
        B = "B",
        A = "A",
    }

    MorphologyOperator("operator") {
        Erode = "erode",
        Dilate = "dilate",
    }

    TurbulenceType("type") {
        FractalNoise = "fractalNoise",
        Turbulence = "turbulence",
    }

    StitchTiles("stitchTiles") {
        Stitch = "stitch",
        NoStitch = "noStitch",
    }

    TransferFunctionType("type") {
        Identity = "identity",
        Table = "table",
        Discrete = "discrete",
        Linear = "linear",
        Gamma = "gamma",
    }

    AnimationFill("fill") {
        Freeze = "freeze",
        Remove = "remove",
    }

    CalcMode("calcMode") {
        Discrete = "discrete",
        Linear = "linear",
        Paced = "paced",
        Spline = "spline",
    }

    Additive("additive") {
        Replace = "replace",
        Sum = "sum",
    }

    Accumulate("accumulate") {
        None = "none",
        Sum = "sum",
    }

    Restart("restart") {
        Always = "always",
        WhenNotActive = "whenNotActive",
        Never = "never",
    }

    TransformType("type") {
        Translate = "translate",
        Scale = "scale",
        Rotate = "rotate",
        SkewX = "skewX",
        SkewY = "skewY",
    }

    // MathML

    MathDisplay("display") {
        Block = "block",
        Inline = "inline",
    }

    MathDir("dir") {
        Ltr = "ltr",
        Rtl = "rtl",
    }

    MathVariant("mathvariant") {
        Normal = "normal",
        Bold = "bold",
        Italic = "italic",
        BoldItalic = "bold-italic",
        DoubleStruck = "double-struck",
        BoldFraktur = "bold-fraktur",
        Script = "script",
        BoldScript = "bold-script",
        Fraktur = "fraktur",
        SansSerif = "sans-serif",
        BoldSansSerif = "bold-sans-serif",
        SansSerifItalic = "sans-serif-italic",
        SansSerifBoldItalic = "sans-serif-bold-italic",
        Monospace = "monospace",
        Initial = "initial",
        Tailed = "tailed",
        Looped = "looped",
        Stretched = "stretched",
    }

    MoForm("form") {
        Prefix = "prefix",
        Infix = "infix",
        Postfix = "postfix",
    }

    ColumnAlign("columnalign") {
        Left = "left",
        Center = "center",
        Right = "right",
    }

    RowAlign("rowalign") {
        Axis = "axis",
        Baseline = "baseline",
        Bottom = "bottom",
        Center = "center",
        Top = "top",
    }

    ActionType("actiontype") {
        Toggle = "toggle",
        Statusline = "statusline",
        Tooltip = "tooltip",
        Input = "input",
    }

    // z-* interactivity

    ZReqMethod("z-req-method") {
        Get = "get",
        Post = "post",
        Put = "put",
        Patch = "patch",
        Delete = "delete",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_and_display_agree() {
        for value in InputType::ALL {
            assert_eq!(value.as_str().parse::<InputType>(), Ok(*value));
            assert_eq!(value.to_string(), value.as_str());
        }
    }

    #[test]
    fn unknown_value_names_the_attribute() {
        let err = "sideways".parse::<Dir>().unwrap_err();
        assert_eq!(
            err,
            zhtml_core::Error::InvalidChoice {
                attribute: "dir",
                value: "sideways".to_string(),
            }
        );
    }

    #[test]
    fn shared_true_false_uses_a_generic_label() {
        let err = "maybe".parse::<TrueFalse>().unwrap_err();
        assert_eq!(
            err,
            zhtml_core::Error::InvalidChoice {
                attribute: "true/false",
                value: "maybe".to_string(),
            }
        );
    }

    #[test]
    fn values_are_case_sensitive() {
        assert_eq!("A".parse::<OlType>(), Ok(OlType::UpperAlpha));
        assert_eq!("a".parse::<OlType>(), Ok(OlType::LowerAlpha));
        assert!("LTR".parse::<Dir>().is_err());
    }
}
