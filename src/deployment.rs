//! Export deployment: namespace, tag names, schema and plugins for one
//! journal context.

use crate::error::{Error, Result};
use crate::plugin::{PluginRegistry, PubIdPlugin};

/// Namespace used by the native import/export format.
pub const DEFAULT_NAMESPACE: &str = "http://pkp.sfu.ca";

/// Configuration for a [`Deployment`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(default))]
pub struct DeploymentConfig {
    /// Target namespace URI for every exported element.
    pub namespace: String,
    /// Tag for a single submission.
    pub submission_node_name: String,
    /// Tag wrapping several submissions.
    pub submissions_node_name: String,
    /// Schema file referenced from `xsi:schemaLocation`.
    pub schema_filename: String,
    /// Journal context whose plugins apply.
    pub context_id: u64,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            submission_node_name: "submission".to_string(),
            submissions_node_name: "submissions".to_string(),
            schema_filename: "native.xsd".to_string(),
            context_id: 0,
        }
    }
}

/// A validated export configuration together with its plugin registry.
#[derive(Debug)]
pub struct Deployment {
    config: DeploymentConfig,
    plugins: PluginRegistry,
}

impl Deployment {
    /// Validate `config` and attach `plugins`.
    ///
    /// Fails with [`Error::MissingDeployment`] naming the first blank field,
    /// or [`Error::InvalidDeployment`] when a tag name is not an XML name.
    pub fn new(config: DeploymentConfig, plugins: PluginRegistry) -> Result<Self> {
        let required = [
            ("namespace", &config.namespace),
            ("submission_node_name", &config.submission_node_name),
            ("submissions_node_name", &config.submissions_node_name),
            ("schema_filename", &config.schema_filename),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(Error::MissingDeployment(*name));
        }

        let tags = [
            ("submission_node_name", &config.submission_node_name),
            ("submissions_node_name", &config.submissions_node_name),
        ];
        if let Some((name, _)) = tags.iter().find(|(_, v)| !is_xml_name(v)) {
            return Err(Error::InvalidDeployment(*name));
        }

        Ok(Self { config, plugins })
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn submission_node_name(&self) -> &str {
        &self.config.submission_node_name
    }

    pub fn submissions_node_name(&self) -> &str {
        &self.config.submissions_node_name
    }

    pub fn schema_filename(&self) -> &str {
        &self.config.schema_filename
    }

    pub fn context_id(&self) -> u64 {
        self.config.context_id
    }

    /// Identifier plugins for this deployment's context, in registration
    /// order.
    pub fn pub_id_plugins(&self) -> impl Iterator<Item = &dyn PubIdPlugin> {
        self.plugins.for_context(self.config.context_id)
    }
}

/// Whether `name` matches the XML `Name` production.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_start = |c: char| c == '_' || c == ':' || c.is_alphabetic();
    is_start(first)
        && chars.all(|c| is_start(c) || c.is_numeric() || matches!(c, '-' | '.' | '\u{b7}'))
}
