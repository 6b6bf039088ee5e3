#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations)]

mod builder;
mod builders;
mod element;
mod error;
mod nodes;
mod sortmap;

pub use crate::builder::ElementBuilder;
pub use crate::builders::{DelimitedBuilder, KVBuilder};
pub use crate::element::Element;
pub use crate::error::{Error, Result};
pub use crate::nodes::{escaped, fragment, text, Node};
pub use crate::sortmap::{AttributeName, SortMap};

/// Everything needed to build element trees by hand.
pub mod prelude {
    pub use crate::builder::ElementBuilder;
    pub use crate::nodes::{escaped, fragment, text, Node};
}
