//! Tera rendering engine — [`TemplateEngine`] and [`Renderer`].
//!
//! The mock deck template is baked into the binary at compile time via
//! `include_str!`; an optional user template directory may override it.
//! Rendering is atomic: validation failures surface before any output is
//! produced, and a given input always renders to byte-identical output.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use cofoundr_core::{DeckDraft, DeckError, PitchDeckInput, MIN_MILESTONES};

use crate::context::DeckContext;
use crate::error::RenderError;

/// Template name of the Cofoundr AI mock deck.
pub const DECK_TEMPLATE: &str = "deck/mock_deck.tera";

// ---------------------------------------------------------------------------
// Embedded templates
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[(DECK_TEMPLATE, include_str!("templates/mock_deck.tera"))];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

/// Recursively gather `.tera` files under `dir`, keyed by their normalised
/// path relative to `root`.
fn collect_user_templates(
    root: &Path,
    dir: &Path,
    out: &mut Vec<(String, String)>,
) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_user_templates(root, &path, out)?;
        } else if meta.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some("tera")
        {
            let rel = path.strip_prefix(root).unwrap_or(path.as_path());
            let name = normalize_template_name(rel);
            let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            out.push((name, contents));
        }
    }
    Ok(())
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        if dir.exists() {
            let mut overrides = Vec::new();
            collect_user_templates(dir, dir, &mut overrides)?;
            for (name, content) in overrides {
                templates.insert(name, content);
            }
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering the deck with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults. Template names are normalised to lowercase and relative paths;
/// an override for the mock deck lives at `deck/mock_deck.tera` under the
/// directory. Construction may read the filesystem; rendering never does.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading the embedded template plus
    /// any overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the mock deck using the supplied context.
    pub fn render(&self, ctx: &DeckContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let content = self.tera.render(DECK_TEMPLATE, &tera_ctx)?;
        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Deck renderer over the embedded template.
///
/// Create once with [`Renderer::new`] and reuse; the renderer holds no
/// mutable state and may be shared across callers.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(None)? })
    }

    /// Validate `draft` and render the mock deck document.
    ///
    /// Any missing field or a short milestone list fails here, before any
    /// output is produced.
    pub fn render(&self, draft: &DeckDraft) -> Result<String, RenderError> {
        let input = draft.clone().validate()?;
        self.render_input(&input)
    }

    /// Render the mock deck from an already-validated input record.
    ///
    /// `PitchDeckInput` has public fields, so the milestone floor is
    /// re-checked here.
    pub fn render_input(&self, input: &PitchDeckInput) -> Result<String, RenderError> {
        if input.milestones.len() < MIN_MILESTONES {
            return Err(DeckError::InsufficientMilestones {
                required: MIN_MILESTONES,
                found: input.milestones.len(),
            }
            .into());
        }
        let ctx = DeckContext::from_input(input);
        let content = self.engine.render(&ctx)?;
        tracing::debug!(
            "rendered deck for {} ({} bytes)",
            input.company_name,
            content.len()
        );
        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use cofoundr_core::{FundingDraft, IndustryDraft, StyleDraft, TractionDraft};

    fn make_draft() -> DeckDraft {
        DeckDraft::new()
            .company_name("Acme")
            .idea("pet food delivery")
            .style(StyleDraft::new().tone("bold").focus("growth"))
            .industry_context(
                IndustryDraft::new()
                    .name("Consumer")
                    .problem("problem text")
                    .tech("tech text")
                    .market("market text")
                    .cofoundr_deliverables("deliverables text"),
            )
            .competitive_advantage("advantage text")
            .funding(
                FundingDraft::new()
                    .amount("$500K")
                    .runway("18-month")
                    .priorities("priorities text")
                    .cofoundr_context("funding context"),
            )
            .traction(
                TractionDraft::new()
                    .users("1,200")
                    .growth("40% MoM")
                    .revenue("$8K MRR")
                    .engagement("engagement text")
                    .platform_metrics("metrics text"),
            )
            .milestones(["M1", "M2", "M3"])
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded template");
    }

    #[test]
    fn rendered_deck_contains_company_and_header() {
        let renderer = Renderer::new().unwrap();
        let deck = renderer.render(&make_draft()).expect("render");
        assert!(deck.contains("Launching: Acme - Complete Startup Toolkit"));
        assert!(deck.contains("Bold Approach"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = Renderer::new().unwrap();
        let first = renderer.render(&make_draft()).expect("render #1");
        let second = renderer.render(&make_draft()).expect("render #2");
        assert_eq!(first, second);
    }

    #[test]
    fn fourth_milestone_never_rendered() {
        let renderer = Renderer::new().unwrap();
        let draft = make_draft().milestones(["M1", "M2", "M3", "M4"]);
        let deck = renderer.render(&draft).expect("render");
        assert!(deck.contains("• M1"));
        assert!(deck.contains("• M3"));
        assert!(!deck.contains("M4"));
    }

    #[test]
    fn missing_field_fails_before_output() {
        let renderer = Renderer::new().unwrap();
        let mut draft = make_draft();
        draft.funding.as_mut().unwrap().amount = None;
        let err = renderer.render(&draft).unwrap_err();
        assert!(
            matches!(
                err,
                RenderError::Input(DeckError::MissingField { field: "funding.amount" })
            ),
            "got: {err}"
        );
    }

    #[test]
    fn short_milestone_input_rejected_on_direct_render() {
        let renderer = Renderer::new().unwrap();
        let mut input = make_draft().validate().expect("validate");
        input.milestones.truncate(2);
        let err = renderer.render_input(&input).unwrap_err();
        assert!(
            matches!(
                err,
                RenderError::Input(DeckError::InsufficientMilestones { required: 3, found: 2 })
            ),
            "got: {err}"
        );
    }

    #[test]
    fn no_crlf_in_rendered_output() {
        let renderer = Renderer::new().unwrap();
        let deck = renderer.render(&make_draft()).expect("render");
        assert!(!deck.contains('\r'), "rendered deck contains CR char");
    }
}
