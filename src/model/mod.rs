//! Submission data consumed by the exporter.
//!
//! This module contains:
//! - Submission records and their stored identifiers
//! - The fixed set of locale-keyed metadata fields
//! - The ordered locale → value mapping used for every such field

mod localized;
mod submission;

pub use localized::LocalizedField;
pub use submission::{MetadataField, PUBLISHER_ID, Submission};
