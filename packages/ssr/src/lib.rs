#![doc = include_str!("../README.md")]

pub mod renderer;

use zhtml_core::Node;

pub use crate::renderer::{is_valid_attribute_name, Renderer};

/// An error while streaming markup into a writer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A `Display` implementation failed while formatting.
    #[error("failed to format markup")]
    Fmt(#[from] std::fmt::Error),

    /// The underlying writer returned an error.
    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience function to render a node tree to a compact string.
///
/// For other output options, configure a [`Renderer`].
pub fn render(node: impl Into<Node>) -> String {
    Renderer::new().render(node)
}

/// Render a node tree with newlines and two-space indentation between elements.
pub fn render_pretty(node: impl Into<Node>) -> String {
    Renderer::new().with_pretty(true).render(node)
}

/// Render a full page, prefixed with `<!DOCTYPE html>`.
pub fn render_document(node: impl Into<Node>) -> String {
    Renderer::new().with_doctype(true).render(node)
}
