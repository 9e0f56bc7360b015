//! Public-identifier plugins and their per-context registry.

use std::fmt;

use crate::error::PluginError;
use crate::model::Submission;

/// An issuer of external identifiers (DOI, URN, ...).
///
/// Implementations may do their own I/O; the exporter calls them
/// synchronously and propagates any error unchanged.
pub trait PubIdPlugin: Send + Sync {
    /// Identifier for `submission`, if this plugin has one.
    ///
    /// `considering_unpublished` is true when the submission has not been
    /// published yet.
    fn pub_id(
        &self,
        submission: &Submission,
        considering_unpublished: bool,
    ) -> Result<Option<String>, PluginError>;

    /// Value used for the `type` attribute of the exported `id` element.
    fn pub_id_type(&self) -> &str;
}

/// Reports identifiers already stored on the submission under one type.
#[derive(Debug, Clone)]
pub struct StoredPubIdPlugin {
    pub_id_type: String,
    assign_unpublished: bool,
}

impl StoredPubIdPlugin {
    pub fn new(pub_id_type: impl Into<String>) -> Self {
        Self {
            pub_id_type: pub_id_type.into(),
            assign_unpublished: true,
        }
    }

    /// When false, unpublished submissions get no identifier.
    pub fn assign_unpublished(mut self, assign: bool) -> Self {
        self.assign_unpublished = assign;
        self
    }
}

impl PubIdPlugin for StoredPubIdPlugin {
    fn pub_id(
        &self,
        submission: &Submission,
        considering_unpublished: bool,
    ) -> Result<Option<String>, PluginError> {
        if considering_unpublished && !self.assign_unpublished {
            return Ok(None);
        }
        Ok(submission.pub_id(&self.pub_id_type).map(str::to_owned))
    }

    fn pub_id_type(&self) -> &str {
        &self.pub_id_type
    }
}

/// Plugins grouped by context, kept in registration order.
#[derive(Default)]
pub struct PluginRegistry {
    entries: Vec<(u64, Box<dyn PubIdPlugin>)>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, context_id: u64, plugin: impl PubIdPlugin + 'static) {
        self.entries.push((context_id, Box::new(plugin)));
    }

    pub fn with_plugin(mut self, context_id: u64, plugin: impl PubIdPlugin + 'static) -> Self {
        self.register(context_id, plugin);
        self
    }

    /// Plugins registered for `context_id`, in registration order.
    pub fn for_context(&self, context_id: u64) -> impl Iterator<Item = &dyn PubIdPlugin> {
        self.entries
            .iter()
            .filter(move |(ctx, _)| *ctx == context_id)
            .map(|(_, plugin)| plugin.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.entries
                    .iter()
                    .map(|(ctx, plugin)| (ctx, plugin.pub_id_type())),
            )
            .finish()
    }
}
