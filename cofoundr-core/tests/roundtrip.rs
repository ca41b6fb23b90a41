//! Serde roundtrips for the validated deck input record.

use cofoundr_core::{
    CompanyName, FundingAsk, IndustryContext, PitchDeckInput, StyleSpec, TractionMetrics,
};

fn make_input() -> PitchDeckInput {
    PitchDeckInput {
        company_name: CompanyName::from("Acme"),
        idea: "pet food delivery".to_string(),
        style: StyleSpec {
            tone: "bold".to_string(),
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
        milestones: vec!["M1".to_string(), "M2".to_string(), "M3".to_string()],
    }
}

#[test]
fn input_yaml_roundtrip() {
    let input = make_input();
    let yaml = serde_yaml::to_string(&input).expect("serialize");
    let deserialized: PitchDeckInput = serde_yaml::from_str(&yaml).expect("deserialize");
    assert_eq!(input, deserialized);
}

#[test]
fn input_json_roundtrip() {
    let input = make_input();
    let json = serde_json::to_string(&input).expect("serialize");
    let deserialized: PitchDeckInput = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(input, deserialized);
}
