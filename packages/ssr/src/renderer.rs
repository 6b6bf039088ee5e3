use std::fmt::{self, Write};
use std::io;

use zhtml_core::{Element, Node};

use crate::RenderError;

/// Serializes a [`Node`] tree into markup.
///
/// The renderer holds only output options, so one instance can be reused for any number
/// of trees.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// should we do our best to prettify the output?
    pub pretty: bool,

    /// Spaces per nesting level when `pretty` is set
    pub indent: usize,

    /// Write `<!DOCTYPE html>` before the root node
    pub doctype: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            doctype: false,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_doctype(mut self, doctype: bool) -> Self {
        self.doctype = doctype;
        self
    }

    pub fn render(&self, node: impl Into<Node>) -> String {
        let node = node.into();
        let mut buf = String::new();
        self.render_to(&mut buf, &node).unwrap();
        buf
    }

    pub fn render_to<W: Write + ?Sized>(&self, buf: &mut W, node: &Node) -> fmt::Result {
        if self.doctype {
            buf.write_str("<!DOCTYPE html>")?;
            if self.pretty {
                buf.write_char('\n')?;
            }
        }
        self.render_node(buf, node, 0)
    }

    /// Stream markup into an [`io::Write`] without building the whole string first.
    pub fn render_to_writer<W: io::Write + ?Sized>(
        &self,
        writer: &mut W,
        node: &Node,
    ) -> Result<(), RenderError> {
        let mut adapter = IoAdapter {
            inner: writer,
            error: None,
        };

        match self.render_to(&mut adapter, node) {
            Ok(()) => Ok(()),
            Err(err) => match adapter.error.take() {
                Some(io_err) => {
                    tracing::debug!("markup writer failed: {io_err}");
                    Err(RenderError::Io(io_err))
                }
                None => Err(RenderError::Fmt(err)),
            },
        }
    }

    fn render_node<W: Write + ?Sized>(
        &self,
        buf: &mut W,
        node: &Node,
        depth: usize,
    ) -> fmt::Result {
        match node {
            Node::Element(element) => self.render_element(buf, element, depth),
            Node::Raw(text) => buf.write_str(text),
            Node::Escaped(text) => write!(
                buf,
                "{}",
                askama_escape::escape(text, askama_escape::Html)
            ),
            Node::Fragment(nodes) => {
                for node in nodes {
                    self.render_node(buf, node, depth)?;
                }
                Ok(())
            }
        }
    }

    fn render_element<W: Write + ?Sized>(
        &self,
        buf: &mut W,
        element: &Element,
        depth: usize,
    ) -> fmt::Result {
        let tag = element.tag();
        write!(buf, "<{tag}")?;
        write_attributes(buf, element)?;

        if element.is_self_closing() {
            if !element.children().is_empty() {
                tracing::warn!(
                    "<{tag}> is a void element, dropping its {} children",
                    element.children().len()
                );
            }
            return buf.write_str("/>");
        }

        buf.write_char('>')?;

        // Only break lines around element children. Mixed text stays inline so
        // pretty output doesn't add visible whitespace to text runs.
        let children = flatten(element.children());
        let block = self.pretty && children.iter().all(|child| child.as_element().is_some());

        for child in &children {
            if block {
                self.newline(buf, depth + 1)?;
            }
            self.render_node(buf, child, depth + 1)?;
        }

        if block && !children.is_empty() {
            self.newline(buf, depth)?;
        }

        write!(buf, "</{tag}>")
    }

    fn newline<W: Write + ?Sized>(&self, buf: &mut W, depth: usize) -> fmt::Result {
        buf.write_char('\n')?;
        for _ in 0..depth * self.indent {
            buf.write_char(' ')?;
        }
        Ok(())
    }
}

/// Inline fragments so their contents are laid out as direct children.
fn flatten(nodes: &[Node]) -> Vec<&Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Fragment(inner) => out.extend(flatten(inner)),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn write_attributes<W: Write + ?Sized>(buf: &mut W, element: &Element) -> fmt::Result {
    for (name, value) in element.string_attributes() {
        if writable_name(element, name) {
            write_escaped_attribute(buf, name, value)?;
        }
    }
    for (name, value) in element.int_attributes() {
        if writable_name(element, name) {
            write!(buf, " {name}=\"{value}\"")?;
        }
    }
    for (name, value) in element.float_attributes() {
        if !value.is_finite() {
            tracing::warn!("<{}> skipping {name}, {value} is not a finite number", element.tag());
            continue;
        }
        if writable_name(element, name) {
            write!(buf, " {name}=\"{value}\"")?;
        }
    }
    for (name, value) in element.bool_attributes() {
        if *value && writable_name(element, name) {
            write!(buf, " {name}")?;
        }
    }
    for (name, value) in element.delimited_attributes() {
        if writable_name(element, name) {
            write_escaped_attribute(buf, name, &value.to_string())?;
        }
    }
    for (name, value) in element.kv_attributes() {
        if writable_name(element, name) {
            write_escaped_attribute(buf, name, &value.to_string())?;
        }
    }
    for (key, value) in element.data_attributes() {
        if writable_name(element, key) {
            write!(
                buf,
                " data-{key}=\"{}\"",
                askama_escape::escape(value, askama_escape::Html)
            )?;
        }
    }
    Ok(())
}

fn write_escaped_attribute<W: Write + ?Sized>(buf: &mut W, name: &str, value: &str) -> fmt::Result {
    write!(
        buf,
        " {name}=\"{}\"",
        askama_escape::escape(value, askama_escape::Html)
    )
}

/// Names can't be escaped, so ones that would end the name early are dropped.
fn writable_name(element: &Element, name: &str) -> bool {
    let valid = is_valid_attribute_name(name);
    if !valid {
        tracing::warn!("<{}> skipping attribute with invalid name {name:?}", element.tag());
    }
    valid
}

/// The HTML attribute-name production: no controls, whitespace, quotes, `<`, `>`, `/`, `=`
/// or noncharacters.
pub fn is_valid_attribute_name(name: &str) -> bool {
    fn is_noncharacter(c: char) -> bool {
        matches!(c, '\u{FDD0}'..='\u{FDEF}') || (c as u32 & 0xFFFE) == 0xFFFE
    }

    !name.is_empty()
        && name.chars().all(|c| {
            !(c.is_control()
                || c.is_whitespace()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
                || is_noncharacter(c))
        })
}

struct IoAdapter<'a, W: ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

#[test]
fn to_string_works() {
    use zhtml_core::{fragment, text};

    let mut list = Element::new("ul");
    for i in 0..3 {
        let mut item = Element::new("li");
        item.push_child(format!("item {i}"));
        list.push_child(item);
    }

    let mut root = Element::new("div");
    root.set_string("id", "root");
    root.push_child("Hello world 1 -->");
    root.push_child(text("<b>raw</b>"));
    root.push_child(list);
    root.push_child(fragment(["a", "b"]));

    assert_eq!(
        Renderer::new().render(root),
        "<div id=\"root\">Hello world 1 --&#62;<b>raw</b><ul><li>item 0</li><li>item 1</li><li>item 2</li></ul>ab</div>"
    );
}

#[test]
fn attribute_names() {
    assert!(is_valid_attribute_name("aria-label"));
    assert!(is_valid_attribute_name("xml:space"));
    assert!(is_valid_attribute_name("@click"));
    assert!(!is_valid_attribute_name(""));
    assert!(!is_valid_attribute_name("a b"));
    assert!(!is_valid_attribute_name("x\"y"));
    assert!(!is_valid_attribute_name("a=b"));
    assert!(!is_valid_attribute_name("a/"));
    assert!(!is_valid_attribute_name("a>"));
    assert!(!is_valid_attribute_name("\u{FFFF}"));
}

#[test]
fn empty_fragment_renders_nothing() {
    assert_eq!(Renderer::new().render(Node::empty()), "");
}
