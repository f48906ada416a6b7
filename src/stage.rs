//! Core normalization stage abstraction.
//!
//! A stage transforms a code-point sequence held in a `Cow<[u32]>`. Every
//! stage pairs its transformation with a cheap quick check (`needs_apply`):
//! when the check says the input cannot change, the process skips the stage
//! and the caller's buffer is passed through without a copy.
//!
//! The engine is three stages, applied in order by [`crate::process`]:
//!
//! * [`Decompose`] – recursive canonical or compatibility decomposition
//! * [`Reorder`] – canonical ordering of combining marks
//! * [`Compose`] – canonical composition (NFC / NFKC only)

pub mod compose;
pub mod decompose;
pub mod reorder;

pub use compose::Compose;
pub use decompose::Decompose;
pub use reorder::Reorder;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
///
/// Stages are total over valid input, so the only failure is a broken
/// invariant of the property table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("property table corrupted (stage `{stage}`): {detail}")]
    DataCorruption { stage: &'static str, detail: String },
}

impl StageError {
    pub(crate) fn corruption(stage: &'static str, detail: impl Into<String>) -> Self {
        StageError::DataCorruption {
            stage,
            detail: detail.into(),
        }
    }
}

/// A single normalization step over Unicode scalar values.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Quick check. Returning `Ok(false)` guarantees `apply` would not change
    /// `text`; `Ok(true)` means it may.
    fn needs_apply(&self, text: &[u32], ctx: &Context<'_>) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, whatever
    /// `needs_apply` would have answered.
    fn apply<'a>(
        &self,
        text: Cow<'a, [u32]>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, [u32]>, StageError>;
}
