//! Inline marker renderer for a restricted markup dialect.
//!
//! A text unit is split on spaces and every configured marker symbol is
//! resolved in its own pass with stack-based pairing. The standard dialect
//! (see [`RendererConfig::default`]) knows:
//!
//! - `_text_` → `<em>text</em>`
//! - `__text__` → `<strong>text</strong>`
//! - `'text'` → `<code>text</code>`
//! - `\_` → a literal `_`
//! - `# text` → `<h1> text </h1>`, everything else is wrapped in `<p>`
//!
//! Markers only count at token edges, so `snake_case_names` stay untouched.
//!
//! # Example
//!
//! ```
//! use mdlite_renderer::{MarkerRenderer, RendererConfig, Symbol};
//!
//! let config = RendererConfig::default().with_symbol(Symbol::new("~", "<s>", "</s>"));
//! let renderer = MarkerRenderer::new(config);
//!
//! assert_eq!(renderer.render("~gone~ now"), "<p> <s>gone</s> now </p>");
//! ```

mod config;
mod matching;
mod renderer;

pub use config::{EscapeRule, Header, RendererConfig, Symbol, TagPair};
pub use renderer::MarkerRenderer;
