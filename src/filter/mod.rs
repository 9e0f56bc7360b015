//! Import/export filters.
//!
//! A [`Filter`] turns one representation into another. The only filter
//! shipped here is [`SubmissionSerializer`], which turns submissions into a
//! native XML document tree.

mod submission;

pub use submission::SubmissionSerializer;

use crate::error::Result;

/// A named conversion step.
pub trait Filter {
    type Input: ?Sized;
    type Output;

    /// Human-readable name shown when listing available filters.
    fn display_name(&self) -> &str;

    /// Run the conversion.
    fn process(&self, input: &Self::Input) -> Result<Self::Output>;
}
