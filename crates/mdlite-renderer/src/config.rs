//! Renderer configuration: symbol table, escape rules and block wrappers.
//!
//! Every table here is an ordered `Vec`. Symbols are resolved one pass at a
//! time in table order, so reordering entries changes the output on inputs
//! where two markers compete for the same characters.

/// An open/close HTML tag pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagPair {
    /// Opening tag, e.g. `<p>`.
    pub open: String,
    /// Closing tag, e.g. `</p>`.
    pub close: String,
}

impl TagPair {
    /// Create a tag pair.
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// One entry of the symbol table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    /// Marker text, e.g. `_` or `__`.
    pub marker: String,
    /// Tag inserted where the span opens.
    pub open: String,
    /// Tag inserted where the span closes.
    pub close: String,
}

impl Symbol {
    /// Create a symbol entry.
    #[must_use]
    pub fn new(
        marker: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        Self {
            marker: marker.into(),
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Markers that must be escaped while a span of `symbol` is open.
///
/// Models prefix collisions such as `_` and `__`: while an `_` span is open,
/// a token edge carrying `__` gets the escape string inserted in front of it
/// so the later `__` pass leaves it alone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscapeRule {
    /// Marker whose open span triggers escaping.
    pub symbol: String,
    /// Markers escaped at token edges while `symbol` is open.
    pub escaped: Vec<String>,
}

impl EscapeRule {
    #[must_use]
    pub fn new<I, S>(symbol: impl Into<String>, escaped: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbol: symbol.into(),
            escaped: escaped.into_iter().map(Into::into).collect(),
        }
    }
}

/// Header marker and the tags it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Marker that must form the whole first token, e.g. `#`.
    pub marker: String,
    /// Tags wrapping the unit instead of the default wrapper.
    pub tags: TagPair,
}

/// Full renderer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RendererConfig {
    /// Ordered symbol table.
    pub symbols: Vec<Symbol>,
    /// Escape literal, `\` in the standard dialect.
    pub escape: String,
    /// Ordered escape table.
    pub escape_rules: Vec<EscapeRule>,
    /// Default block wrapper.
    pub wrapper: TagPair,
    /// Optional header marker.
    pub header: Option<Header>,
}

impl Default for RendererConfig {
    /// The standard dialect: `_` emphasis, `__` strong, `'` code, `\` escape,
    /// `<p>` paragraphs and `#` headers.
    fn default() -> Self {
        Self {
            symbols: vec![
                Symbol::new("_", "<em>", "</em>"),
                Symbol::new("__", "<strong>", "</strong>"),
                Symbol::new("'", "<code>", "</code>"),
            ],
            escape: "\\".to_owned(),
            escape_rules: vec![EscapeRule::new("_", ["__"])],
            wrapper: TagPair::new("<p>", "</p>"),
            header: Some(Header {
                marker: "#".to_owned(),
                tags: TagPair::new("<h1>", "</h1>"),
            }),
        }
    }
}

impl RendererConfig {
    /// Create an empty configuration: no symbols, no escape rules, no header,
    /// `\` escape and `<p>` wrapper.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            symbols: Vec::new(),
            escape: "\\".to_owned(),
            escape_rules: Vec::new(),
            wrapper: TagPair::new("<p>", "</p>"),
            header: None,
        }
    }

    /// Append a symbol to the end of the table.
    #[must_use]
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbols.push(symbol);
        self
    }

    /// Set the escape literal.
    #[must_use]
    pub fn with_escape(mut self, escape: impl Into<String>) -> Self {
        self.escape = escape.into();
        self
    }

    /// Append an escape rule.
    #[must_use]
    pub fn with_escape_rule(mut self, rule: EscapeRule) -> Self {
        self.escape_rules.push(rule);
        self
    }

    /// Set the default block wrapper.
    #[must_use]
    pub fn with_wrapper(mut self, wrapper: TagPair) -> Self {
        self.wrapper = wrapper;
        self
    }

    /// Enable header detection for `marker`.
    #[must_use]
    pub fn with_header(mut self, marker: impl Into<String>, tags: TagPair) -> Self {
        self.header = Some(Header {
            marker: marker.into(),
            tags,
        });
        self
    }

    /// Disable header detection.
    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.header = None;
        self
    }

    /// Iterate over the configured markers in table order.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.marker.as_str())
    }

    /// Markers to escape while a span of `marker` is open.
    ///
    /// Entries of every rule naming `marker` are returned in table order.
    pub(crate) fn escaped_for<'a>(&'a self, marker: &'a str) -> impl Iterator<Item = &'a str> {
        self.escape_rules
            .iter()
            .filter(move |rule| rule.symbol == marker)
            .flat_map(|rule| rule.escaped.iter().map(String::as_str))
    }

    /// Whether any escape rule exists for `marker`.
    pub(crate) fn has_escape_rule(&self, marker: &str) -> bool {
        self.escape_rules.iter().any(|rule| rule.symbol == marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbol_order() {
        let config = RendererConfig::default();
        let markers: Vec<&str> = config.markers().collect();
        assert_eq!(markers, vec!["_", "__", "'"]);
    }

    #[test]
    fn test_default_escape_rules() {
        let config = RendererConfig::default();
        assert!(config.has_escape_rule("_"));
        assert!(!config.has_escape_rule("__"));
        assert_eq!(config.escaped_for("_").collect::<Vec<_>>(), vec!["__"]);
    }

    #[test]
    fn test_escaped_for_merges_rules() {
        let config = RendererConfig::empty()
            .with_escape_rule(EscapeRule::new("*", ["**"]))
            .with_escape_rule(EscapeRule::new("_", ["__"]))
            .with_escape_rule(EscapeRule::new("*", ["***"]));
        assert_eq!(
            config.escaped_for("*").collect::<Vec<_>>(),
            vec!["**", "***"]
        );
    }

    #[test]
    fn test_builder() {
        let config = RendererConfig::empty()
            .with_symbol(Symbol::new("*", "<b>", "</b>"))
            .with_escape("!")
            .with_wrapper(TagPair::new("<div>", "</div>"))
            .with_header("=", TagPair::new("<h2>", "</h2>"));
        assert_eq!(config.symbols.len(), 1);
        assert_eq!(config.escape, "!");
        assert_eq!(config.wrapper.open, "<div>");
        assert_eq!(config.header.as_ref().map(|h| h.marker.as_str()), Some("="));
        assert!(config.without_header().header.is_none());
    }
}
