//! Cofoundr core library — deck domain types, draft validation, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and validated deck input structs
//! - [`draft`] — [`DeckDraft`] parameter object and validation
//! - [`error`] — [`DeckError`]

pub mod draft;
pub mod error;
pub mod types;

pub use draft::{DeckDraft, FundingDraft, IndustryDraft, StyleDraft, TractionDraft};
pub use error::DeckError;
pub use types::{
    CompanyName, FundingAsk, IndustryContext, PitchDeckInput, StyleSpec, TractionMetrics,
    MIN_MILESTONES,
};
