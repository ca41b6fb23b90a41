//! Error types for cofoundr-core.

use thiserror::Error;

/// All errors that can arise from assembling and validating deck input.
#[derive(Debug, Error)]
pub enum DeckError {
    /// A required field (top-level or nested) was not supplied.
    /// `field` is the dotted path, e.g. `funding.amount`.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// Fewer milestones than the deck layout consumes.
    #[error("deck requires at least {required} milestones, got {found}")]
    InsufficientMilestones { required: usize, found: usize },

    /// JSON parse error on a draft payload.
    #[error("failed to parse deck draft JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error on a draft payload.
    #[error("failed to parse deck draft YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
