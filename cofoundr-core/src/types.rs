//! Domain types for a Cofoundr pitch deck.
//!
//! Every narrative field is pre-formatted text supplied by the deck content
//! assembler; these types never derive or default values themselves.
//! All types are serializable/deserializable via serde.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum number of milestones a deck needs; only the first three render.
pub const MIN_MILESTONES: usize = 3;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed display name for the company being pitched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyName(pub String);

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CompanyName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CompanyName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Presentation tone/focus labels, as supplied (lowercase by convention).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpec {
    pub tone: String,
    pub focus: String,
}

/// Industry-specific narrative fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryContext {
    pub name: String,
    pub problem: String,
    pub tech: String,
    pub market: String,
    pub cofoundr_deliverables: String,
}

/// Funding ask narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingAsk {
    pub amount: String,
    pub runway: String,
    pub priorities: String,
    pub cofoundr_context: String,
}

/// Traction metrics, all pre-formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TractionMetrics {
    pub users: String,
    pub growth: String,
    pub revenue: String,
    pub engagement: String,
    pub platform_metrics: String,
}

/// A fully-validated pitch deck input record.
///
/// Constructed through [`crate::draft::DeckDraft::validate`]; every field is
/// guaranteed present. `milestones` holds at least [`MIN_MILESTONES`] entries
/// when built through the draft path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchDeckInput {
    pub company_name: CompanyName,
    /// One-line business idea description.
    pub idea: String,
    pub style: StyleSpec,
    pub industry_context: IndustryContext,
    pub competitive_advantage: String,
    pub funding: FundingAsk,
    pub traction: TractionMetrics,
    pub milestones: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
