//! Submission → native XML document conversion.

use tracing::{debug, trace};

use super::Filter;
use crate::deployment::Deployment;
use crate::dom::{Document, Element};
use crate::error::{Error, Result};
use crate::model::{LocalizedField, MetadataField, PUBLISHER_ID, Submission};

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Converts a batch of submissions into a native XML [`Document`].
///
/// Every element is created in the deployment's namespace. The serializer
/// holds no state between calls.
///
/// # Example
///
/// ```
/// use nativexml::{Deployment, DeploymentConfig, PluginRegistry, Submission, SubmissionSerializer};
/// use nativexml::model::MetadataField;
///
/// let deployment = Deployment::new(DeploymentConfig::default(), PluginRegistry::new())?;
/// let serializer = SubmissionSerializer::new(deployment);
///
/// let sub = Submission::new(7, "en").with_field(MetadataField::Title, "en", "Hello");
/// let doc = serializer.serialize(&[sub])?;
/// assert_eq!(doc.root.name, "submission");
/// # Ok::<(), nativexml::Error>(())
/// ```
#[derive(Debug)]
pub struct SubmissionSerializer {
    deployment: Deployment,
}

impl SubmissionSerializer {
    pub fn new(deployment: Deployment) -> Self {
        Self { deployment }
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Build the export document for `submissions`.
    ///
    /// A single submission becomes the root element; several are wrapped in
    /// the deployment's collection element, in input order.
    pub fn serialize(&self, submissions: &[Submission]) -> Result<Document> {
        debug!(count = submissions.len(), "serializing submissions");

        let mut root = match submissions {
            [] => return Err(Error::EmptyInput),
            [only] => self.submission_element(only)?,
            many => {
                let mut wrapper = self.element(self.deployment.submissions_node_name());
                for submission in many {
                    wrapper.push_child(self.submission_element(submission)?);
                }
                wrapper
            }
        };

        root.set_attribute("xmlns:xsi", XSI_NAMESPACE);
        root.set_attribute(
            "xsi:schemaLocation",
            format!(
                "{} {}",
                self.deployment.namespace(),
                self.deployment.schema_filename()
            ),
        );

        Ok(Document::new(root))
    }

    /// Element for one submission: identifiers first, then metadata.
    pub fn submission_element(&self, submission: &Submission) -> Result<Element> {
        let mut el = self
            .element(self.deployment.submission_node_name())
            .with_attribute("locale", submission.locale.as_str());

        for id in self.identifier_elements(submission)? {
            el.push_child(id);
        }
        for meta in self.metadata_elements(submission) {
            el.push_child(meta);
        }
        Ok(el)
    }

    /// `id` elements: internal, then public (if stored), then one per
    /// plugin that reports an identifier.
    pub fn identifier_elements(&self, submission: &Submission) -> Result<Vec<Element>> {
        let mut ids = vec![self.id_element("internal", submission.id.to_string())];

        if let Some(public) = submission.pub_id(PUBLISHER_ID) {
            ids.push(self.id_element("public", public));
        }

        let considering_unpublished = !submission.published;
        for plugin in self.deployment.pub_id_plugins() {
            let pub_id_type = plugin.pub_id_type();
            let pub_id = plugin
                .pub_id(submission, considering_unpublished)
                .map_err(|source| Error::Plugin {
                    pub_id_type: pub_id_type.to_string(),
                    source,
                })?;

            match pub_id {
                Some(value) if !value.is_empty() => {
                    trace!(submission = submission.id, pub_id_type, "adding pub-id");
                    ids.push(self.id_element(pub_id_type, value));
                }
                _ => trace!(submission = submission.id, pub_id_type, "no pub-id"),
            }
        }

        Ok(ids)
    }

    /// Localized metadata elements in [`MetadataField::ALL`] order.
    pub fn metadata_elements(&self, submission: &Submission) -> Vec<Element> {
        MetadataField::ALL
            .iter()
            .flat_map(|&field| {
                self.localized_elements(field.element_name(), submission.field(field))
            })
            .collect()
    }

    /// One `name` element per non-empty locale value, in insertion order.
    pub fn localized_elements(&self, name: &str, values: &LocalizedField) -> Vec<Element> {
        values
            .non_empty()
            .map(|(locale, value)| {
                self.element(name)
                    .with_attribute("locale", locale)
                    .with_text(value)
            })
            .collect()
    }

    fn id_element(&self, pub_id_type: &str, value: impl Into<String>) -> Element {
        self.element("id")
            .with_attribute("type", pub_id_type)
            .with_text(value)
    }

    fn element(&self, name: &str) -> Element {
        Element::new(self.deployment.namespace(), name)
    }
}

impl Filter for SubmissionSerializer {
    type Input = [Submission];
    type Output = Document;

    fn display_name(&self) -> &str {
        "Native XML export"
    }

    fn process(&self, input: &[Submission]) -> Result<Document> {
        self.serialize(input)
    }
}
