//! Marker renderer.
//!
//! Rendering works on whitespace tokens. Each configured symbol gets one
//! left-to-right pass over the tokens with its own stack of open positions:
//! a token starting with the marker pushes its index, a token ending with the
//! marker pops the most recent open index and both edges are replaced by the
//! symbol's tags. Whatever is left on the stack after the pass stays literal.

use crate::config::{RendererConfig, Symbol};
use crate::matching::{ends_only_with, starts_only_with};

/// Renders single text units of the inline dialect to HTML.
///
/// The renderer holds only its configuration. Every call to
/// [`render`](Self::render) tokenizes afresh, so a single instance can be
/// shared across threads.
///
/// # Example
///
/// ```
/// use mdlite_renderer::MarkerRenderer;
///
/// let renderer = MarkerRenderer::default();
/// assert_eq!(
///     renderer.render("_This_ should be emphasized"),
///     "<p> <em>This</em> should be emphasized </p>"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct MarkerRenderer {
    config: RendererConfig,
}

impl MarkerRenderer {
    /// Create a renderer for the given configuration.
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Configuration this renderer was built with.
    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render one text unit to HTML.
    ///
    /// Never fails: unbalanced or escaped markers stay in the output as
    /// literal characters.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut tokens: Vec<String> = text.split(' ').map(str::to_owned).collect();

        for symbol in &self.config.symbols {
            if symbol.marker.is_empty() {
                continue;
            }
            self.render_symbol(&mut tokens, symbol);
        }

        self.wrap_block(&mut tokens);
        tokens.join(" ")
    }

    /// Render every line of `text` as an independent unit.
    ///
    /// Results are joined with `\n`.
    #[must_use]
    pub fn render_lines(&self, text: &str) -> String {
        text.lines()
            .map(|line| self.render(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolve all pairs of one symbol.
    fn render_symbol(&self, tokens: &mut [String], symbol: &Symbol) {
        let marker = symbol.marker.as_str();
        let escape = self.config.escape.as_str();
        let escaped_marker = format!("{escape}{marker}");
        let guarded = self.config.has_escape_rule(marker);
        let mut stack: Vec<usize> = Vec::new();

        for i in 0..tokens.len() {
            if guarded && !stack.is_empty() {
                self.escape_collisions(&mut tokens[i], marker);
            }

            if self.starts_only_with(&tokens[i], &escaped_marker) {
                tokens[i] = tokens[i][escape.len()..].to_owned();
            } else if self.starts_only_with(&tokens[i], marker) {
                stack.push(i);
            }

            if self.ends_only_with(&tokens[i], &escaped_marker) {
                let token = &tokens[i];
                let head = &token[..token.len() - escaped_marker.len()];
                tokens[i] = format!("{head}{marker}");
            } else if self.ends_only_with(&tokens[i], marker)
                && let Some(open) = stack.pop()
            {
                // A lone marker cannot both open and close its own span.
                if open == i && tokens[i].len() < 2 * marker.len() {
                    continue;
                }
                replace_pair(tokens, open, i, symbol);
            }
        }

        if !stack.is_empty() {
            tracing::trace!(
                marker,
                unmatched = stack.len(),
                "Unmatched markers left literal"
            );
        }
    }

    /// Escape markers colliding with the open `marker` at both token edges.
    fn escape_collisions(&self, token: &mut String, marker: &str) {
        let escape = self.config.escape.as_str();

        for colliding in self.config.escaped_for(marker) {
            if colliding.is_empty() {
                continue;
            }
            if self.starts_only_with(token, colliding) {
                *token = format!("{escape}{token}");
            }
            if self.ends_only_with(token, colliding) {
                let (head, tail) = token.split_at(token.len() - colliding.len());
                *token = format!("{head}{escape}{tail}");
            }
        }
    }

    /// Wrap the rendered tokens in the header or default block tags.
    fn wrap_block(&self, tokens: &mut Vec<String>) {
        match &self.config.header {
            Some(header) if tokens.first().is_some_and(|first| *first == header.marker) => {
                tokens[0].clone_from(&header.tags.open);
                tokens.push(header.tags.close.clone());
            }
            _ => {
                tokens.insert(0, self.config.wrapper.open.clone());
                tokens.push(self.config.wrapper.close.clone());
            }
        }
    }

    fn starts_only_with(&self, token: &str, prefix: &str) -> bool {
        starts_only_with(token, prefix, self.config.markers())
    }

    fn ends_only_with(&self, token: &str, suffix: &str) -> bool {
        ends_only_with(token, suffix, self.config.markers())
    }
}

/// Replace the opening marker of `tokens[open]` and the closing marker of
/// `tokens[close]` with the symbol's tags.
fn replace_pair(tokens: &mut [String], open: usize, close: usize, symbol: &Symbol) {
    let marker = symbol.marker.as_str();

    if let Some(rest) = tokens[open].strip_prefix(marker) {
        tokens[open] = format!("{}{rest}", symbol.open);
    }
    if let Some(rest) = tokens[close].strip_suffix(marker) {
        tokens[close] = format!("{rest}{}", symbol.close);
    }
}
