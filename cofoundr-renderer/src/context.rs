//! Deck context — serializable rendering payload built from [`PitchDeckInput`].

use serde::{Deserialize, Serialize};

use cofoundr_core::types::{PitchDeckInput, MIN_MILESTONES};

use crate::error::RenderError;

/// Rendering payload for the mock deck template.
///
/// Built from a validated input via [`DeckContext::from_input`], which
/// precomputes the title-cased tone and trims `milestones` to the three
/// entries the deck layout consumes, so the template stays substitution-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckContext {
    pub company_name: String,
    pub idea: String,
    pub style: StyleCtx,
    pub industry_context: IndustryCtx,
    pub competitive_advantage: String,
    pub funding: FundingCtx,
    pub traction: TractionCtx,
    /// Exactly the first [`MIN_MILESTONES`] milestones.
    pub milestones: Vec<String>,
}

/// Style context, tone both as supplied and title-cased for the header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleCtx {
    pub tone: String,
    pub tone_title: String,
    pub focus: String,
}

/// Industry narrative context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryCtx {
    pub name: String,
    pub problem: String,
    pub tech: String,
    pub market: String,
    pub cofoundr_deliverables: String,
}

/// Funding ask context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingCtx {
    pub amount: String,
    pub runway: String,
    pub priorities: String,
    pub cofoundr_context: String,
}

/// Traction metrics context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TractionCtx {
    pub users: String,
    pub growth: String,
    pub revenue: String,
    pub engagement: String,
    pub platform_metrics: String,
}

/// Title-case a tone label: uppercase the first letter of each alphabetic
/// run, lowercase the rest (`"bold"` → `"Bold"`, `"data-driven"` →
/// `"Data-Driven"`).
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

impl DeckContext {
    /// Build a [`DeckContext`] from a validated [`PitchDeckInput`].
    ///
    /// The caller guarantees the milestone floor; see
    /// [`crate::engine::Renderer::render_input`].
    pub fn from_input(input: &PitchDeckInput) -> Self {
        let milestones: Vec<String> = input
            .milestones
            .iter()
            .take(MIN_MILESTONES)
            .cloned()
            .collect();

        DeckContext {
            company_name: input.company_name.to_string(),
            idea: input.idea.clone(),
            style: StyleCtx {
                tone: input.style.tone.clone(),
                tone_title: title_case(&input.style.tone),
                focus: input.style.focus.clone(),
            },
            industry_context: IndustryCtx {
                name: input.industry_context.name.clone(),
                problem: input.industry_context.problem.clone(),
                tech: input.industry_context.tech.clone(),
                market: input.industry_context.market.clone(),
                cofoundr_deliverables: input.industry_context.cofoundr_deliverables.clone(),
            },
            competitive_advantage: input.competitive_advantage.clone(),
            funding: FundingCtx {
                amount: input.funding.amount.clone(),
                runway: input.funding.runway.clone(),
                priorities: input.funding.priorities.clone(),
                cofoundr_context: input.funding.cofoundr_context.clone(),
            },
            traction: TractionCtx {
                users: input.traction.users.clone(),
                growth: input.traction.growth.clone(),
                revenue: input.traction.revenue.clone(),
                engagement: input.traction.engagement.clone(),
                platform_metrics: input.traction.platform_metrics.clone(),
            },
            milestones,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cofoundr_core::types::{
        CompanyName, FundingAsk, IndustryContext, StyleSpec, TractionMetrics,
    };

    fn make_input(tone: &str, milestones: &[&str]) -> PitchDeckInput {
        PitchDeckInput {
            company_name: CompanyName::from("Acme"),
            idea: "pet food delivery".to_string(),
            style: StyleSpec {
                tone: tone.to_string(),
                focus: "growth".to_string(),
            },
            industry_context: IndustryContext {
                name: "Consumer".to_string(),
                problem: "problem".to_string(),
                tech: "tech".to_string(),
                market: "market".to_string(),
                cofoundr_deliverables: "deliverables".to_string(),
            },
            competitive_advantage: "advantage".to_string(),
            funding: FundingAsk {
                amount: "$500K".to_string(),
                runway: "18-month".to_string(),
                priorities: "priorities".to_string(),
                cofoundr_context: "context".to_string(),
            },
            traction: TractionMetrics {
                users: "1,200".to_string(),
                growth: "40% MoM".to_string(),
                revenue: "$8K MRR".to_string(),
                engagement: "engagement".to_string(),
                platform_metrics: "metrics".to_string(),
            },
            milestones: milestones.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    #[test]
    fn tone_title_cased_tone_kept_verbatim() {
        let ctx = DeckContext::from_input(&make_input("bold", &["a", "b", "c"]));
        assert_eq!(ctx.style.tone, "bold");
        assert_eq!(ctx.style.tone_title, "Bold");
    }

    #[test]
    fn multi_word_tone_title_cases_each_word() {
        let ctx = DeckContext::from_input(&make_input("bold and brash", &["a", "b", "c"]));
        assert_eq!(ctx.style.tone_title, "Bold And Brash");
    }

    #[test]
    fn title_case_handles_hyphens_and_caps() {
        assert_eq!(title_case("data-driven"), "Data-Driven");
        assert_eq!(title_case("BOLD"), "Bold");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn milestones_trimmed_to_three() {
        let ctx = DeckContext::from_input(&make_input("bold", &["a", "b", "c", "d", "e"]));
        assert_eq!(ctx.milestones, vec!["a", "b", "c"]);
    }

    #[test]
    fn to_tera_context_succeeds() {
        let ctx = DeckContext::from_input(&make_input("bold", &["a", "b", "c"]));
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        let _ = tera_ctx;
    }
}
