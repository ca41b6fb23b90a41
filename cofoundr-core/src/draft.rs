//! Deck draft — the parameter object filled in by the deck content assembler.
//!
//! The upstream assembler hands deck content over as a JSON or YAML payload
//! (or builds it in-process with the chainable setters). Every field is
//! optional on the draft; [`DeckDraft::validate`] promotes a complete draft
//! to a [`PitchDeckInput`] or reports the first defect. There is no
//! defaulting and no partial promotion.

use serde::{Deserialize, Serialize};

use crate::error::DeckError;
use crate::types::{
    CompanyName, FundingAsk, IndustryContext, PitchDeckInput, StyleSpec, TractionMetrics,
    MIN_MILESTONES,
};

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, DeckError> {
    value.ok_or(DeckError::MissingField { field })
}

// ---------------------------------------------------------------------------
// Nested drafts
// ---------------------------------------------------------------------------

/// Draft of [`StyleSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDraft {
    pub tone: Option<String>,
    pub focus: Option<String>,
}

impl StyleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = Some(focus.into());
        self
    }

    fn validate(self) -> Result<StyleSpec, DeckError> {
        Ok(StyleSpec {
            tone: require(self.tone, "style.tone")?,
            focus: require(self.focus, "style.focus")?,
        })
    }
}

/// Draft of [`IndustryContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryDraft {
    pub name: Option<String>,
    pub problem: Option<String>,
    pub tech: Option<String>,
    pub market: Option<String>,
    pub cofoundr_deliverables: Option<String>,
}

impl IndustryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = Some(problem.into());
        self
    }

    pub fn tech(mut self, tech: impl Into<String>) -> Self {
        self.tech = Some(tech.into());
        self
    }

    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn cofoundr_deliverables(mut self, deliverables: impl Into<String>) -> Self {
        self.cofoundr_deliverables = Some(deliverables.into());
        self
    }

    fn validate(self) -> Result<IndustryContext, DeckError> {
        Ok(IndustryContext {
            name: require(self.name, "industry_context.name")?,
            problem: require(self.problem, "industry_context.problem")?,
            tech: require(self.tech, "industry_context.tech")?,
            market: require(self.market, "industry_context.market")?,
            cofoundr_deliverables: require(
                self.cofoundr_deliverables,
                "industry_context.cofoundr_deliverables",
            )?,
        })
    }
}

/// Draft of [`FundingAsk`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundingDraft {
    pub amount: Option<String>,
    pub runway: Option<String>,
    pub priorities: Option<String>,
    pub cofoundr_context: Option<String>,
}

impl FundingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn runway(mut self, runway: impl Into<String>) -> Self {
        self.runway = Some(runway.into());
        self
    }

    pub fn priorities(mut self, priorities: impl Into<String>) -> Self {
        self.priorities = Some(priorities.into());
        self
    }

    pub fn cofoundr_context(mut self, context: impl Into<String>) -> Self {
        self.cofoundr_context = Some(context.into());
        self
    }

    fn validate(self) -> Result<FundingAsk, DeckError> {
        Ok(FundingAsk {
            amount: require(self.amount, "funding.amount")?,
            runway: require(self.runway, "funding.runway")?,
            priorities: require(self.priorities, "funding.priorities")?,
            cofoundr_context: require(self.cofoundr_context, "funding.cofoundr_context")?,
        })
    }
}

/// Draft of [`TractionMetrics`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TractionDraft {
    pub users: Option<String>,
    pub growth: Option<String>,
    pub revenue: Option<String>,
    pub engagement: Option<String>,
    pub platform_metrics: Option<String>,
}

impl TractionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(mut self, users: impl Into<String>) -> Self {
        self.users = Some(users.into());
        self
    }

    pub fn growth(mut self, growth: impl Into<String>) -> Self {
        self.growth = Some(growth.into());
        self
    }

    pub fn revenue(mut self, revenue: impl Into<String>) -> Self {
        self.revenue = Some(revenue.into());
        self
    }

    pub fn engagement(mut self, engagement: impl Into<String>) -> Self {
        self.engagement = Some(engagement.into());
        self
    }

    pub fn platform_metrics(mut self, metrics: impl Into<String>) -> Self {
        self.platform_metrics = Some(metrics.into());
        self
    }

    fn validate(self) -> Result<TractionMetrics, DeckError> {
        Ok(TractionMetrics {
            users: require(self.users, "traction.users")?,
            growth: require(self.growth, "traction.growth")?,
            revenue: require(self.revenue, "traction.revenue")?,
            engagement: require(self.engagement, "traction.engagement")?,
            platform_metrics: require(self.platform_metrics, "traction.platform_metrics")?,
        })
    }
}

// ---------------------------------------------------------------------------
// DeckDraft
// ---------------------------------------------------------------------------

/// Draft of a full [`PitchDeckInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckDraft {
    pub company_name: Option<String>,
    pub idea: Option<String>,
    pub style: Option<StyleDraft>,
    pub industry_context: Option<IndustryDraft>,
    pub competitive_advantage: Option<String>,
    pub funding: Option<FundingDraft>,
    pub traction: Option<TractionDraft>,
    pub milestones: Option<Vec<String>>,
}

impl DeckDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    pub fn idea(mut self, idea: impl Into<String>) -> Self {
        self.idea = Some(idea.into());
        self
    }

    pub fn style(mut self, style: StyleDraft) -> Self {
        self.style = Some(style);
        self
    }

    pub fn industry_context(mut self, industry: IndustryDraft) -> Self {
        self.industry_context = Some(industry);
        self
    }

    pub fn competitive_advantage(mut self, advantage: impl Into<String>) -> Self {
        self.competitive_advantage = Some(advantage.into());
        self
    }

    pub fn funding(mut self, funding: FundingDraft) -> Self {
        self.funding = Some(funding);
        self
    }

    pub fn traction(mut self, traction: TractionDraft) -> Self {
        self.traction = Some(traction);
        self
    }

    pub fn milestones<I, S>(mut self, milestones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.milestones = Some(milestones.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a draft from a JSON payload.
    ///
    /// Unknown keys are ignored; absent keys stay `None` and surface later
    /// through [`DeckDraft::validate`] with their dotted path.
    pub fn from_json(payload: &str) -> Result<Self, DeckError> {
        serde_json::from_str(payload).map_err(DeckError::from)
    }

    /// Parse a draft from a YAML payload.
    pub fn from_yaml(payload: &str) -> Result<Self, DeckError> {
        serde_yaml::from_str(payload).map_err(DeckError::from)
    }

    /// Promote the draft to a validated [`PitchDeckInput`].
    ///
    /// Fails with [`DeckError::MissingField`] naming the first absent field
    /// (checked in declaration order, nested fields included), or with
    /// [`DeckError::InsufficientMilestones`] when fewer than
    /// [`MIN_MILESTONES`] milestones were supplied.
    pub fn validate(self) -> Result<PitchDeckInput, DeckError> {
        let company_name = require(self.company_name, "company_name")?;
        let idea = require(self.idea, "idea")?;
        let style = require(self.style, "style")?.validate()?;
        let industry_context = require(self.industry_context, "industry_context")?.validate()?;
        let competitive_advantage =
            require(self.competitive_advantage, "competitive_advantage")?;
        let funding = require(self.funding, "funding")?.validate()?;
        let traction = require(self.traction, "traction")?.validate()?;
        let milestones = require(self.milestones, "milestones")?;
        if milestones.len() < MIN_MILESTONES {
            return Err(DeckError::InsufficientMilestones {
                required: MIN_MILESTONES,
                found: milestones.len(),
            });
        }

        Ok(PitchDeckInput {
            company_name: CompanyName::from(company_name),
            idea,
            style,
            industry_context,
            competitive_advantage,
            funding,
            traction,
            milestones,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
