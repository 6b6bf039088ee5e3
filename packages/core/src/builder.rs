//! The builder surface shared by every element type.
//!
//! Generated element wrappers only need to hand out their inner [`Element`]; everything in
//! this trait comes for free. Methods consume the builder and return it so calls chain:
//!
//! ```rust
//! use zhtml_core::{Element, ElementBuilder, Node};
//!
//! struct Div(Element);
//!
//! impl From<Div> for Node {
//!     fn from(div: Div) -> Node {
//!         div.0.into()
//!     }
//! }
//!
//! impl ElementBuilder for Div {
//!     fn element(&self) -> &Element { &self.0 }
//!     fn element_mut(&mut self) -> &mut Element { &mut self.0 }
//!     fn into_element(self) -> Element { self.0 }
//! }
//!
//! let div = Div(Element::new("div"))
//!     .class(["card", "wide"])
//!     .style("color", "red")
//!     .custom_data("id", "7")
//!     .escaped("hello");
//!
//! assert_eq!(div.element().data_attr("id"), Some("7"));
//! ```

use std::fmt;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::nodes::Node;
use crate::sortmap::AttributeName;

const CLASS: &str = "class";
const STYLE: &str = "style";

#[rustfmt::skip]
pub trait ElementBuilder: Sized + Into<Node> {
    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    fn into_element(self) -> Element;

    /// Finish the builder and turn it into a renderable node.
    fn into_node(self) -> Node {
        self.into()
    }

    // Children

    fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.element_mut().extend_children(children);
        self
    }

    fn child(mut self, child: impl Into<Node>) -> Self {
        self.element_mut().push_child(child);
        self
    }

    fn if_children<I>(self, condition: bool, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        if condition { self.children(children) } else { self }
    }

    /// Add `if_true` when `condition` holds and `if_false` otherwise.
    fn tern_children<T, F>(self, condition: bool, if_true: T, if_false: F) -> Self
    where
        T: IntoIterator,
        T::Item: Into<Node>,
        F: IntoIterator,
        F::Item: Into<Node>,
    {
        if condition { self.children(if_true) } else { self.children(if_false) }
    }

    // Arbitrary attributes

    /// Set any attribute as a string. Escape hatch for names without a typed setter.
    fn attr(mut self, name: impl Into<AttributeName>, value: impl Into<String>) -> Self {
        self.element_mut().set_string(name, value);
        self
    }

    fn if_attr(self, condition: bool, name: impl Into<AttributeName>, value: impl Into<String>) -> Self {
        if condition { self.attr(name, value) } else { self }
    }

    /// Remove an attribute regardless of how it was stored.
    fn attr_remove(mut self, name: &str) -> Self {
        self.element_mut().remove_attribute(name);
        self
    }

    /// Set attributes from a flat `[name, value, name, value, ...]` list.
    fn try_attrs<I>(mut self, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() % 2 != 0 {
            return Err(Error::OddAttributeCount(values.len()));
        }

        let mut values = values.into_iter();
        while let (Some(name), Some(value)) = (values.next(), values.next()) {
            self.element_mut().set_string(name, value);
        }
        Ok(self)
    }

    /// Like [`try_attrs`](Self::try_attrs).
    ///
    /// # Panics
    ///
    /// Panics when given an odd number of values.
    fn attrs<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        match self.try_attrs(values) {
            Ok(this) => this,
            Err(err) => panic!("{err}"),
        }
    }

    fn attrs_map<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<AttributeName>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.element_mut().set_string(name, value);
        }
        self
    }

    // Text

    /// Append literal text. It is written verbatim, markup included.
    fn text(mut self, text: impl Into<String>) -> Self {
        self.element_mut().push_child(Node::Raw(text.into()));
        self
    }

    fn text_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.text(fmt::format(args))
    }

    fn if_text(self, condition: bool, text: impl Into<String>) -> Self {
        if condition { self.text(text) } else { self }
    }

    fn if_text_fmt(self, condition: bool, args: fmt::Arguments<'_>) -> Self {
        if condition { self.text_fmt(args) } else { self }
    }

    /// Append text that is HTML-escaped when rendered.
    fn escaped(mut self, text: impl Into<String>) -> Self {
        self.element_mut().push_child(Node::Escaped(text.into()));
        self
    }

    fn escaped_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.escaped(fmt::format(args))
    }

    fn if_escaped(self, condition: bool, text: impl Into<String>) -> Self {
        if condition { self.escaped(text) } else { self }
    }

    fn if_escaped_fmt(self, condition: bool, args: fmt::Arguments<'_>) -> Self {
        if condition { self.escaped_fmt(args) } else { self }
    }

    // data-* attributes

    /// Set `data-{key}`.
    fn custom_data(mut self, key: impl Into<AttributeName>, value: impl Into<String>) -> Self {
        self.element_mut().set_data(key, value);
        self
    }

    fn if_custom_data(self, condition: bool, key: impl Into<AttributeName>, value: impl Into<String>) -> Self {
        if condition { self.custom_data(key, value) } else { self }
    }

    fn custom_data_fmt(self, key: impl Into<AttributeName>, args: fmt::Arguments<'_>) -> Self {
        self.custom_data(key, fmt::format(args))
    }

    fn if_custom_data_fmt(self, condition: bool, key: impl Into<AttributeName>, args: fmt::Arguments<'_>) -> Self {
        if condition { self.custom_data_fmt(key, args) } else { self }
    }

    fn custom_data_remove(mut self, key: &str) -> Self {
        self.element_mut().remove_data(key);
        self
    }

    // style

    /// Set one CSS property. Setting a property twice keeps the last value.
    fn style(mut self, key: impl Into<AttributeName>, value: impl Into<String>) -> Self {
        self.element_mut().set_kv(STYLE, key, value);
        self
    }

    fn if_style(self, condition: bool, key: impl Into<AttributeName>, value: impl Into<String>) -> Self {
        if condition { self.style(key, value) } else { self }
    }

    fn style_fmt(self, key: impl Into<AttributeName>, args: fmt::Arguments<'_>) -> Self {
        self.style(key, fmt::format(args))
    }

    fn if_style_fmt(self, condition: bool, key: impl Into<AttributeName>, args: fmt::Arguments<'_>) -> Self {
        if condition { self.style_fmt(key, args) } else { self }
    }

    fn style_map<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<AttributeName>,
        V: Into<String>,
    {
        self.element_mut().kv_builder(STYLE).extend(pairs);
        self
    }

    /// Set CSS properties from a flat `[key, value, key, value, ...]` list.
    fn try_style_pairs<I>(mut self, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() % 2 != 0 {
            return Err(Error::OddStylePairs(values.len()));
        }

        let builder = self.element_mut().kv_builder(STYLE);
        let mut values = values.into_iter();
        while let (Some(key), Some(value)) = (values.next(), values.next()) {
            builder.add(key, value);
        }
        Ok(self)
    }

    /// Like [`try_style_pairs`](Self::try_style_pairs).
    ///
    /// # Panics
    ///
    /// Panics when given an odd number of values.
    fn style_pairs<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        match self.try_style_pairs(values) {
            Ok(this) => this,
            Err(err) => panic!("{err}"),
        }
    }

    fn style_remove<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.element_mut().remove_kv_keys(STYLE, keys);
        self
    }

    // class

    /// Append class names. Order is preserved in the output.
    fn class<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.element_mut().add_delimited(CLASS, " ", classes);
        self
    }

    fn if_class<I>(self, condition: bool, classes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if condition { self.class(classes) } else { self }
    }

    fn class_remove<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.element_mut().remove_delimited_values(CLASS, classes);
        self
    }
}
