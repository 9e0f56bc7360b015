//! Render a [`Document`] to XML text.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::node::{Document, Element, Node};
use crate::error::Result;

/// Output settings for [`write_document`].
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Indent nested elements by this many spaces. `None` writes everything
    /// on one line.
    pub indent: Option<usize>,
}

/// Write `doc` as UTF-8 XML to `out`.
///
/// The root's namespace is declared as the default namespace on the root.
/// Descendants only get an `xmlns` attribute when their namespace differs
/// from their parent's.
pub fn write_document<W: Write>(doc: &Document, out: W, config: &WriterConfig) -> Result<()> {
    let mut writer = match config.indent {
        Some(n) => Writer::new_with_indent(out, b' ', n),
        None => Writer::new(out),
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, &doc.root, None)?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Render `doc` into a `String`.
pub fn to_xml_string(doc: &Document, config: &WriterConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_document(doc, &mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    el: &Element,
    parent_ns: Option<&str>,
) -> Result<()> {
    let mut start = BytesStart::new(el.name.as_str());

    let ns = el.namespace.as_deref();
    if ns != parent_ns {
        // An unqualified child of a namespaced parent must reset the default.
        start.push_attribute(("xmlns", ns.unwrap_or("")));
    }
    for attr in &el.attributes {
        start.push_attribute((attr.name.as_str(), attr.value.as_str()));
    }

    if el.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &el.children {
        match child {
            Node::Element(e) => write_element(writer, e, ns)?,
            Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(el.name.as_str())))?;
    Ok(())
}
