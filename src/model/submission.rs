//! Submission records as seen by the exporter.

use std::collections::BTreeMap;

use super::LocalizedField;

/// Stored identifier type that is exported as `id[type=public]`.
pub const PUBLISHER_ID: &str = "publisher-id";

/// The locale-keyed metadata fields carried on a submission.
///
/// [`MetadataField::ALL`] is the order in which they are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetadataField {
    Title,
    Prefix,
    Subtitle,
    Abstract,
    SubjectClass,
    CoverageGeo,
    CoverageChron,
    CoverageSample,
    Type,
    Source,
    Rights,
}

impl MetadataField {
    pub const ALL: [MetadataField; 11] = [
        MetadataField::Title,
        MetadataField::Prefix,
        MetadataField::Subtitle,
        MetadataField::Abstract,
        MetadataField::SubjectClass,
        MetadataField::CoverageGeo,
        MetadataField::CoverageChron,
        MetadataField::CoverageSample,
        MetadataField::Type,
        MetadataField::Source,
        MetadataField::Rights,
    ];

    /// Element name used in the export document.
    pub fn element_name(self) -> &'static str {
        match self {
            MetadataField::Title => "title",
            MetadataField::Prefix => "prefix",
            MetadataField::Subtitle => "subtitle",
            MetadataField::Abstract => "abstract",
            MetadataField::SubjectClass => "subject_class",
            MetadataField::CoverageGeo => "coverage_geo",
            MetadataField::CoverageChron => "coverage_chron",
            MetadataField::CoverageSample => "coverage_sample",
            MetadataField::Type => "type",
            MetadataField::Source => "source",
            MetadataField::Rights => "rights",
        }
    }
}

/// A submission (manuscript) with its exportable metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(deny_unknown_fields))]
pub struct Submission {
    pub id: u64,
    /// Primary locale, e.g. `en_US`.
    pub locale: String,
    #[cfg_attr(feature = "cli", serde(default))]
    pub published: bool,
    #[cfg_attr(feature = "cli", serde(default))]
    pub title: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default))]
    pub prefix: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default))]
    pub subtitle: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default, rename = "abstract"))]
    pub abstract_: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default))]
    pub subject_class: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default))]
    pub coverage_geo: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default))]
    pub coverage_chron: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default))]
    pub coverage_sample: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default, rename = "type"))]
    pub type_: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default))]
    pub source: LocalizedField,
    #[cfg_attr(feature = "cli", serde(default))]
    pub rights: LocalizedField,
    /// Stored public identifiers keyed by type (`publisher-id`, `doi`, ...).
    #[cfg_attr(feature = "cli", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    pub pub_ids: BTreeMap<String, String>,
}

impl Submission {
    pub fn new(id: u64, locale: impl Into<String>) -> Self {
        Self {
            id,
            locale: locale.into(),
            ..Default::default()
        }
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Set one locale value of a metadata field.
    pub fn with_field(
        mut self,
        field: MetadataField,
        locale: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.field_mut(field).insert(locale, value);
        self
    }

    pub fn with_pub_id(mut self, pub_id_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.pub_ids.insert(pub_id_type.into(), value.into());
        self
    }

    pub fn field(&self, field: MetadataField) -> &LocalizedField {
        match field {
            MetadataField::Title => &self.title,
            MetadataField::Prefix => &self.prefix,
            MetadataField::Subtitle => &self.subtitle,
            MetadataField::Abstract => &self.abstract_,
            MetadataField::SubjectClass => &self.subject_class,
            MetadataField::CoverageGeo => &self.coverage_geo,
            MetadataField::CoverageChron => &self.coverage_chron,
            MetadataField::CoverageSample => &self.coverage_sample,
            MetadataField::Type => &self.type_,
            MetadataField::Source => &self.source,
            MetadataField::Rights => &self.rights,
        }
    }

    pub fn field_mut(&mut self, field: MetadataField) -> &mut LocalizedField {
        match field {
            MetadataField::Title => &mut self.title,
            MetadataField::Prefix => &mut self.prefix,
            MetadataField::Subtitle => &mut self.subtitle,
            MetadataField::Abstract => &mut self.abstract_,
            MetadataField::SubjectClass => &mut self.subject_class,
            MetadataField::CoverageGeo => &mut self.coverage_geo,
            MetadataField::CoverageChron => &mut self.coverage_chron,
            MetadataField::CoverageSample => &mut self.coverage_sample,
            MetadataField::Type => &mut self.type_,
            MetadataField::Source => &mut self.source,
            MetadataField::Rights => &mut self.rights,
        }
    }

    /// Stored identifier of the given type. Empty values count as absent.
    pub fn pub_id(&self, pub_id_type: &str) -> Option<&str> {
        self.pub_ids
            .get(pub_id_type)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
