//! # Typed builders for HTML, SVG and MathML
//!
//! Every tag has a constructor that returns its own builder type. Builders chain by value
//! and only expose setters for attributes the tag accepts, with enumerated attributes taking
//! a choice enum instead of a string:
//!
//! ```rust
//! use zhtml::prelude::*;
//!
//! let field = html::input()
//!     .type_attr(InputType::Email)
//!     .name("email")
//!     .required(true)
//!     .class(["field"]);
//!
//! assert_eq!(
//!     zhtml_ssr::render(field),
//!     r#"<input type="email" name="email" required class="field"/>"#
//! );
//! ```
//!
//! The setters shared by every element (children, text, `class`, `style`, `data-*` and raw
//! attributes) come from [`ElementBuilder`]. Global attributes come from the family traits
//! in [`HtmlGlobalAttributes`], [`attribute_groups`] and [`ZAttributes`]. All of them are
//! re-exported from [`prelude`].
//!
//! Builders turn into a [`Node`] tree, which `zhtml-ssr` serializes.

#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod attribute_groups;
pub mod choices;
mod global_attributes;
mod z_attributes;

pub mod html;
pub mod mathml;
pub mod svg;

pub use global_attributes::HtmlGlobalAttributes;
pub use z_attributes::ZAttributes;
pub use zhtml_core::{ElementBuilder, Node};

pub mod prelude {
    pub use crate::attribute_groups::*;
    pub use crate::choices::*;
    pub use crate::global_attributes::HtmlGlobalAttributes;
    pub use crate::z_attributes::ZAttributes;
    pub use crate::{html, mathml, svg};
    pub use zhtml_core::prelude::*;
}
