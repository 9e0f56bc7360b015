//! # nativexml
//!
//! Native XML export of journal submission metadata.
//!
//! ## Features
//!
//! - Builds a namespaced document tree from one or more submissions
//! - Expands locale-keyed metadata into one element per translation
//! - Pluggable public-identifier issuers (DOI, URN, ...) per journal context
//! - Writes the tree as UTF-8 XML via `quick-xml`
//!
//! ## Quick Start
//!
//! ```
//! use nativexml::{
//!     Deployment, DeploymentConfig, PluginRegistry, StoredPubIdPlugin, Submission,
//!     SubmissionSerializer, WriterConfig, to_xml_string,
//! };
//! use nativexml::model::MetadataField;
//!
//! let plugins = PluginRegistry::new().with_plugin(0, StoredPubIdPlugin::new("doi"));
//! let deployment = Deployment::new(DeploymentConfig::default(), plugins)?;
//! let serializer = SubmissionSerializer::new(deployment);
//!
//! let sub = Submission::new(42, "en_US")
//!     .with_field(MetadataField::Title, "en_US", "On Filters")
//!     .with_pub_id("doi", "10.1234/abc");
//!
//! let doc = serializer.serialize(&[sub])?;
//! let xml = to_xml_string(&doc, &WriterConfig::default())?;
//! assert!(xml.contains(r#"<id type="doi">10.1234/abc</id>"#));
//! # Ok::<(), nativexml::Error>(())
//! ```

pub mod deployment;
pub mod dom;
pub mod error;
pub mod filter;
pub mod model;
pub mod plugin;

pub use deployment::{Deployment, DeploymentConfig};
pub use dom::{Document, Element, WriterConfig, to_xml_string, write_document};
pub use error::{Error, Result};
pub use filter::{Filter, SubmissionSerializer};
pub use model::{LocalizedField, Submission};
pub use plugin::{PluginRegistry, PubIdPlugin, StoredPubIdPlugin};
