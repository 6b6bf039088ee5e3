use zhtml_core::ElementBuilder;

use crate::choices::*;

/// Attributes every HTML element accepts.
///
/// `class`, `style` and `data-*` live on [`ElementBuilder`] because SVG and MathML
/// elements take them too.
#[rustfmt::skip]
pub trait HtmlGlobalAttributes: ElementBuilder {
    attributes!([
        /// Keyboard shortcut hint. Space-separated list of single characters.
        accesskey: List(" ") = "accesskey";
        autocapitalize: Choice(Autocapitalize) = "autocapitalize";
        autofocus: Bool = "autofocus";
        contenteditable: Choice(ContentEditable) = "contenteditable";
        dir: Choice(Dir) = "dir";
        draggable: Choice(TrueFalse) = "draggable";
        enterkeyhint: Choice(EnterKeyHint) = "enterkeyhint";
        exportparts: List(",") = "exportparts";
        hidden: Bool = "hidden";
        /// Unique identifier for the element in its document.
        id: Str = "id";
        inert: Bool = "inert";
        inputmode: Choice(InputMode) = "inputmode";
        /// Name of a customized built-in element.
        is: Str = "is";
        itemid: Str = "itemid";
        itemprop: List(" ") = "itemprop";
        itemref: List(" ") = "itemref";
        itemscope: Bool = "itemscope";
        itemtype: List(" ") = "itemtype";
        lang: Str = "lang";
        nonce: Str = "nonce";
        part: List(" ") = "part";
        popover: Choice(Popover) = "popover";
        role: Str = "role";
        slot: Str = "slot";
        spellcheck: Choice(TrueFalse) = "spellcheck";
        tabindex: Int = "tabindex";
        title: Str = "title";
        translate: Choice(Translate) = "translate";
    ]);
}
