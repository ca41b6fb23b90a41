//! # cofoundr-renderer
//!
//! Tera-based template engine that renders the Cofoundr AI mock pitch deck
//! from a structured input record.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cofoundr_core::DeckDraft;
//! use cofoundr_renderer::Renderer;
//!
//! fn render_deck(draft: &DeckDraft) {
//!     if let Ok(renderer) = Renderer::new() {
//!         match renderer.render(draft) {
//!             Ok(deck) => println!("{deck}"),
//!             Err(e) => eprintln!("deck rejected: {e}"),
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::DeckContext;
pub use engine::{Renderer, TemplateEngine, DECK_TEMPLATE};
pub use error::RenderError;
