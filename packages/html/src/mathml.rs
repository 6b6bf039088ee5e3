//! MathML Core elements, plus the `menclose` and `maction` presentation elements.
//!
//! ```rust
//! use zhtml::prelude::*;
//!
//! let half = mathml::math().display(MathDisplay::Block).child(
//!     mathml::mfrac()
//!         .child(mathml::mn().escaped("1"))
//!         .child(mathml::mn().escaped("2")),
//! );
//!
//! assert_eq!(
//!     zhtml_ssr::render(half),
//!     r#"<math display="block"><mfrac><mn>1</mn><mn>2</mn></mfrac></math>"#
//! );
//! ```

use crate::attribute_groups::MathmlGlobalAttributes;
use crate::choices::*;

elements! {
    MathmlGlobalAttributes;

    /// The top-level `<math>` element.
    math(MathMlMathElement, "math") {
        alttext: Str = "alttext";
        display: Choice(MathDisplay) = "display";
        xmlns: Str = "xmlns";
    };

    // Semantics and annotations

    semantics(MathMlSemanticsElement, "semantics") {};
    annotation(MathMlAnnotationElement, "annotation") {
        encoding: Str = "encoding";
    };
    annotation_xml(MathMlAnnotationXmlElement, "annotation-xml") {
        encoding: Str = "encoding";
    };

    // Token elements

    mi(MathMlMiElement, "mi") {};
    mn(MathMlMnElement, "mn") {};
    mo(MathMlMoElement, "mo") {
        fence: Choice(TrueFalse) = "fence";
        form: Choice(MoForm) = "form";
        largeop: Choice(TrueFalse) = "largeop";
        lspace: Str = "lspace";
        maxsize: Str = "maxsize";
        minsize: Str = "minsize";
        movablelimits: Choice(TrueFalse) = "movablelimits";
        rspace: Str = "rspace";
        separator: Choice(TrueFalse) = "separator";
        stretchy: Choice(TrueFalse) = "stretchy";
        symmetric: Choice(TrueFalse) = "symmetric";
    };
    ms(MathMlMsElement, "ms") {};
    mspace(MathMlMspaceElement, "mspace") {
        depth: Str = "depth";
        height: Str = "height";
        width: Str = "width";
    };
    mtext(MathMlMtextElement, "mtext") {};

    // General layout

    merror(MathMlMerrorElement, "merror") {};
    mfrac(MathMlMfracElement, "mfrac") {
        /// Thickness of the fraction bar; `0` hides it.
        linethickness: Str = "linethickness";
    };
    mpadded(MathMlMpaddedElement, "mpadded") {
        depth: Str = "depth";
        height: Str = "height";
        lspace: Str = "lspace";
        voffset: Str = "voffset";
        width: Str = "width";
    };
    mphantom(MathMlMphantomElement, "mphantom") {};
    mroot(MathMlMrootElement, "mroot") {};
    mrow(MathMlMrowElement, "mrow") {};
    msqrt(MathMlMsqrtElement, "msqrt") {};
    mstyle(MathMlMstyleElement, "mstyle") {};

    // Scripts and limits

    mmultiscripts(MathMlMmultiscriptsElement, "mmultiscripts") {};
    mprescripts(MathMlMprescriptsElement, "mprescripts") {};
    mover(MathMlMoverElement, "mover") {
        accent: Choice(TrueFalse) = "accent";
    };
    msub(MathMlMsubElement, "msub") {};
    msubsup(MathMlMsubsupElement, "msubsup") {};
    msup(MathMlMsupElement, "msup") {};
    munder(MathMlMunderElement, "munder") {
        accentunder: Choice(TrueFalse) = "accentunder";
    };
    munderover(MathMlMunderoverElement, "munderover") {
        accent: Choice(TrueFalse) = "accent";
        accentunder: Choice(TrueFalse) = "accentunder";
    };

    // Tabular math

    mtable(MathMlMtableElement, "mtable") {
        columnalign: List(" ") = "columnalign";
        rowalign: List(" ") = "rowalign";
    };
    mtr(MathMlMtrElement, "mtr") {
        rowalign: Choice(RowAlign) = "rowalign";
    };
    mtd(MathMlMtdElement, "mtd") {
        columnalign: Choice(ColumnAlign) = "columnalign";
        columnspan: Int = "columnspan";
        rowalign: Choice(RowAlign) = "rowalign";
        rowspan: Int = "rowspan";
    };

    // Legacy presentation

    menclose(MathMlMencloseElement, "menclose") {
        /// Notations such as `box`, `circle` or `updiagonalstrike`, space-separated.
        notation: List(" ") = "notation";
    };
    maction(MathMlMactionElement, "maction") {
        actiontype: Choice(ActionType) = "actiontype";
        selection: Int = "selection";
    };
}
