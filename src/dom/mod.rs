//! In-memory XML document tree and its text writer.

mod node;
mod writer;

pub use node::{Attribute, Document, Element, Node};
pub use writer::{WriterConfig, to_xml_string, write_document};
