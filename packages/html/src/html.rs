//! HTML elements, one constructor per tag of the WHATWG living standard.
//!
//! ```rust
//! use zhtml::prelude::*;
//!
//! let link = html::a()
//!     .href("/docs")
//!     .target(Target::Blank)
//!     .rel(["noopener", "noreferrer"])
//!     .escaped("Docs");
//!
//! assert_eq!(
//!     zhtml_ssr::render(link),
//!     r#"<a href="/docs" target="_blank" rel="noopener noreferrer">Docs</a>"#
//! );
//! ```

use crate::choices::*;
use crate::global_attributes::HtmlGlobalAttributes;

elements! {
    HtmlGlobalAttributes;

    // Document and metadata

    /// The root of an HTML document.
    html(HtmlElement, "html") {
        xmlns: Str = "xmlns";
    };
    head(HeadElement, "head") {};
    title(TitleElement, "title") {};
    base(BaseElement, "base", void) {
        href: Str = "href";
        target: Choice(Target) = "target";
    };
    link(LinkElement, "link", void) {
        as_attr: Str = "as";
        blocking: List(" ") = "blocking";
        color: Str = "color";
        crossorigin: Choice(CrossOrigin) = "crossorigin";
        disabled: Bool = "disabled";
        fetchpriority: Choice(FetchPriority) = "fetchpriority";
        href: Str = "href";
        hreflang: Str = "hreflang";
        imagesizes: List(",") = "imagesizes";
        imagesrcset: List(",") = "imagesrcset";
        integrity: Str = "integrity";
        media: Str = "media";
        referrerpolicy: Choice(ReferrerPolicy) = "referrerpolicy";
        rel: List(" ") = "rel";
        sizes: List(" ") = "sizes";
        type_attr: Str = "type";
    };
    meta(MetaElement, "meta", void) {
        charset: Str = "charset";
        content: Str = "content";
        http_equiv: Choice(HttpEquiv) = "http-equiv";
        media: Str = "media";
        name: Str = "name";
    };
    style(StyleElement, "style") {
        blocking: List(" ") = "blocking";
        media: Str = "media";
    };

    // Sections

    body(BodyElement, "body") {};
    article(ArticleElement, "article") {};
    section(SectionElement, "section") {};
    nav(NavElement, "nav") {};
    aside(AsideElement, "aside") {};
    h1(H1Element, "h1") {};
    h2(H2Element, "h2") {};
    h3(H3Element, "h3") {};
    h4(H4Element, "h4") {};
    h5(H5Element, "h5") {};
    h6(H6Element, "h6") {};
    hgroup(HgroupElement, "hgroup") {};
    header(HeaderElement, "header") {};
    footer(FooterElement, "footer") {};
    address(AddressElement, "address") {};

    // Grouping content

    p(PElement, "p") {};
    hr(HrElement, "hr", void) {};
    pre(PreElement, "pre") {};
    blockquote(BlockquoteElement, "blockquote") {
        cite: Str = "cite";
    };
    ol(OlElement, "ol") {
        reversed: Bool = "reversed";
        start: Int = "start";
        type_attr: Choice(OlType) = "type";
    };
    ul(UlElement, "ul") {};
    menu(MenuElement, "menu") {};
    li(LiElement, "li") {
        /// Ordinal value of the item inside an `<ol>`.
        value: Int = "value";
    };
    dl(DlElement, "dl") {};
    dt(DtElement, "dt") {};
    dd(DdElement, "dd") {};
    figure(FigureElement, "figure") {};
    figcaption(FigcaptionElement, "figcaption") {};
    main(MainElement, "main") {};
    search(SearchElement, "search") {};
    div(DivElement, "div") {};

    // Text-level semantics

    a(AElement, "a") {
        download: Str = "download";
        href: Str = "href";
        hreflang: Str = "hreflang";
        ping: List(" ") = "ping";
        referrerpolicy: Choice(ReferrerPolicy) = "referrerpolicy";
        rel: List(" ") = "rel";
        target: Choice(Target) = "target";
        type_attr: Str = "type";
    };
    em(EmElement, "em") {};
    strong(StrongElement, "strong") {};
    small(SmallElement, "small") {};
    s(SElement, "s") {};
    cite(CiteElement, "cite") {};
    q(QElement, "q") {
        cite: Str = "cite";
    };
    dfn(DfnElement, "dfn") {};
    abbr(AbbrElement, "abbr") {};
    ruby(RubyElement, "ruby") {};
    rt(RtElement, "rt") {};
    rp(RpElement, "rp") {};
    data(DataElement, "data") {
        value: Str = "value";
    };
    time(TimeElement, "time") {
        datetime: Str = "datetime";
    };
    code(CodeElement, "code") {};
    var(VarElement, "var") {};
    samp(SampElement, "samp") {};
    kbd(KbdElement, "kbd") {};
    sub(SubElement, "sub") {};
    sup(SupElement, "sup") {};
    i(IElement, "i") {};
    b(BElement, "b") {};
    u(UElement, "u") {};
    mark(MarkElement, "mark") {};
    bdi(BdiElement, "bdi") {};
    bdo(BdoElement, "bdo") {};
    span(SpanElement, "span") {};
    br(BrElement, "br", void) {};
    wbr(WbrElement, "wbr", void) {};

    // Edits

    ins(InsElement, "ins") {
        cite: Str = "cite";
        datetime: Str = "datetime";
    };
    del(DelElement, "del") {
        cite: Str = "cite";
        datetime: Str = "datetime";
    };

    // Embedded content

    picture(PictureElement, "picture") {};
    source(SourceElement, "source", void) {
        height: Int = "height";
        media: Str = "media";
        sizes: List(",") = "sizes";
        src: Str = "src";
        srcset: List(",") = "srcset";
        type_attr: Str = "type";
        width: Int = "width";
    };
    img(ImgElement, "img", void) {
        alt: Str = "alt";
        crossorigin: Choice(CrossOrigin) = "crossorigin";
        decoding: Choice(Decoding) = "decoding";
        fetchpriority: Choice(FetchPriority) = "fetchpriority";
        height: Int = "height";
        ismap: Bool = "ismap";
        loading: Choice(Loading) = "loading";
        referrerpolicy: Choice(ReferrerPolicy) = "referrerpolicy";
        sizes: List(",") = "sizes";
        src: Str = "src";
        /// Candidate images such as `small.png 480w`, joined with commas.
        srcset: List(",") = "srcset";
        usemap: Str = "usemap";
        width: Int = "width";
    };
    iframe(IframeElement, "iframe") {
        allow: List(";") = "allow";
        allowfullscreen: Bool = "allowfullscreen";
        height: Int = "height";
        loading: Choice(Loading) = "loading";
        name: Str = "name";
        referrerpolicy: Choice(ReferrerPolicy) = "referrerpolicy";
        sandbox: List(" ") = "sandbox";
        src: Str = "src";
        srcdoc: Str = "srcdoc";
        width: Int = "width";
    };
    embed(EmbedElement, "embed", void) {
        height: Int = "height";
        src: Str = "src";
        type_attr: Str = "type";
        width: Int = "width";
    };
    object(ObjectElement, "object") {
        data: Str = "data";
        form: Str = "form";
        height: Int = "height";
        name: Str = "name";
        type_attr: Str = "type";
        width: Int = "width";
    };
    video(VideoElement, "video") {
        autoplay: Bool = "autoplay";
        controls: Bool = "controls";
        crossorigin: Choice(CrossOrigin) = "crossorigin";
        height: Int = "height";
        loop_attr: Bool = "loop";
        muted: Bool = "muted";
        playsinline: Bool = "playsinline";
        poster: Str = "poster";
        preload: Choice(Preload) = "preload";
        src: Str = "src";
        width: Int = "width";
    };
    audio(AudioElement, "audio") {
        autoplay: Bool = "autoplay";
        controls: Bool = "controls";
        crossorigin: Choice(CrossOrigin) = "crossorigin";
        loop_attr: Bool = "loop";
        muted: Bool = "muted";
        preload: Choice(Preload) = "preload";
        src: Str = "src";
    };
    track(TrackElement, "track", void) {
        default: Bool = "default";
        kind: Choice(TrackKind) = "kind";
        label: Str = "label";
        src: Str = "src";
        srclang: Str = "srclang";
    };
    map(MapElement, "map") {
        name: Str = "name";
    };
    area(AreaElement, "area", void) {
        alt: Str = "alt";
        coords: List(",") = "coords";
        download: Str = "download";
        href: Str = "href";
        ping: List(" ") = "ping";
        referrerpolicy: Choice(ReferrerPolicy) = "referrerpolicy";
        rel: List(" ") = "rel";
        shape: Choice(AreaShape) = "shape";
        target: Choice(Target) = "target";
    };

    // Tabular data

    table(TableElement, "table") {};
    caption(CaptionElement, "caption") {};
    colgroup(ColgroupElement, "colgroup") {
        span: Int = "span";
    };
    col(ColElement, "col", void) {
        span: Int = "span";
    };
    tbody(TbodyElement, "tbody") {};
    thead(TheadElement, "thead") {};
    tfoot(TfootElement, "tfoot") {};
    tr(TrElement, "tr") {};
    td(TdElement, "td") {
        colspan: Int = "colspan";
        headers: List(" ") = "headers";
        rowspan: Int = "rowspan";
    };
    th(ThElement, "th") {
        abbr: Str = "abbr";
        colspan: Int = "colspan";
        headers: List(" ") = "headers";
        rowspan: Int = "rowspan";
        scope: Choice(ThScope) = "scope";
    };

    // Forms

    form(FormElement, "form") {
        accept_charset: List(" ") = "accept-charset";
        action: Str = "action";
        autocomplete: Choice(OnOff) = "autocomplete";
        enctype: Choice(FormEnctype) = "enctype";
        method: Choice(FormMethod) = "method";
        name: Str = "name";
        novalidate: Bool = "novalidate";
        rel: List(" ") = "rel";
        target: Choice(Target) = "target";
    };
    label(LabelElement, "label") {
        for_attr: Str = "for";
    };
    input(InputElement, "input", void) {
        /// Accepted file types, for example `image/*` or `.pdf`.
        accept: List(",") = "accept";
        alt: Str = "alt";
        /// Autofill detail tokens such as `shipping street-address`.
        autocomplete: List(" ") = "autocomplete";
        capture: Choice(Capture) = "capture";
        checked: Bool = "checked";
        dirname: Str = "dirname";
        disabled: Bool = "disabled";
        form: Str = "form";
        formaction: Str = "formaction";
        formenctype: Choice(FormEnctype) = "formenctype";
        formmethod: Choice(FormMethod) = "formmethod";
        formnovalidate: Bool = "formnovalidate";
        formtarget: Choice(Target) = "formtarget";
        height: Int = "height";
        list: Str = "list";
        max: Str = "max";
        maxlength: Int = "maxlength";
        min: Str = "min";
        minlength: Int = "minlength";
        multiple: Bool = "multiple";
        name: Str = "name";
        pattern: Str = "pattern";
        placeholder: Str = "placeholder";
        popovertarget: Str = "popovertarget";
        popovertargetaction: Choice(PopoverTargetAction) = "popovertargetaction";
        readonly: Bool = "readonly";
        required: Bool = "required";
        size: Int = "size";
        src: Str = "src";
        step: Str = "step";
        type_attr: Choice(InputType) = "type";
        value: Str = "value";
        width: Int = "width";
    };
    button(ButtonElement, "button") {
        disabled: Bool = "disabled";
        form: Str = "form";
        formaction: Str = "formaction";
        formenctype: Choice(FormEnctype) = "formenctype";
        formmethod: Choice(FormMethod) = "formmethod";
        formnovalidate: Bool = "formnovalidate";
        formtarget: Choice(Target) = "formtarget";
        name: Str = "name";
        popovertarget: Str = "popovertarget";
        popovertargetaction: Choice(PopoverTargetAction) = "popovertargetaction";
        type_attr: Choice(ButtonType) = "type";
        value: Str = "value";
    };
    select(SelectElement, "select") {
        autocomplete: List(" ") = "autocomplete";
        disabled: Bool = "disabled";
        form: Str = "form";
        multiple: Bool = "multiple";
        name: Str = "name";
        required: Bool = "required";
        size: Int = "size";
    };
    datalist(DatalistElement, "datalist") {};
    optgroup(OptgroupElement, "optgroup") {
        disabled: Bool = "disabled";
        label: Str = "label";
    };
    option(OptionElement, "option") {
        disabled: Bool = "disabled";
        label: Str = "label";
        selected: Bool = "selected";
        value: Str = "value";
    };
    textarea(TextareaElement, "textarea") {
        autocomplete: List(" ") = "autocomplete";
        cols: Int = "cols";
        dirname: Str = "dirname";
        disabled: Bool = "disabled";
        form: Str = "form";
        maxlength: Int = "maxlength";
        minlength: Int = "minlength";
        name: Str = "name";
        placeholder: Str = "placeholder";
        readonly: Bool = "readonly";
        required: Bool = "required";
        rows: Int = "rows";
        wrap: Choice(TextareaWrap) = "wrap";
    };
    output(OutputElement, "output") {
        for_attr: List(" ") = "for";
        form: Str = "form";
        name: Str = "name";
    };
    progress(ProgressElement, "progress") {
        max: Float = "max";
        value: Float = "value";
    };
    meter(MeterElement, "meter") {
        high: Float = "high";
        low: Float = "low";
        max: Float = "max";
        min: Float = "min";
        optimum: Float = "optimum";
        value: Float = "value";
    };
    fieldset(FieldsetElement, "fieldset") {
        disabled: Bool = "disabled";
        form: Str = "form";
        name: Str = "name";
    };
    legend(LegendElement, "legend") {};

    // Interactive elements

    details(DetailsElement, "details") {
        name: Str = "name";
        open: Bool = "open";
    };
    summary(SummaryElement, "summary") {};
    dialog(DialogElement, "dialog") {
        open: Bool = "open";
    };

    // Scripting

    script(ScriptElement, "script") {
        async_attr: Bool = "async";
        blocking: List(" ") = "blocking";
        crossorigin: Choice(CrossOrigin) = "crossorigin";
        defer: Bool = "defer";
        fetchpriority: Choice(FetchPriority) = "fetchpriority";
        integrity: Str = "integrity";
        nomodule: Bool = "nomodule";
        referrerpolicy: Choice(ReferrerPolicy) = "referrerpolicy";
        src: Str = "src";
        /// `module`, `importmap` or a JavaScript MIME type.
        type_attr: Str = "type";
    };
    noscript(NoscriptElement, "noscript") {};
    template(TemplateElement, "template") {
        shadowrootclonable: Bool = "shadowrootclonable";
        shadowrootdelegatesfocus: Bool = "shadowrootdelegatesfocus";
        shadowrootmode: Choice(ShadowRootMode) = "shadowrootmode";
        shadowrootserializable: Bool = "shadowrootserializable";
    };
    slot(SlotElement, "slot") {
        name: Str = "name";
    };
    canvas(CanvasElement, "canvas") {
        height: Int = "height";
        width: Int = "width";
    };
}
