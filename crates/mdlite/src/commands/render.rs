//! `mdlite render` command implementation.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use mdlite_config::{CliSettings, Config};
use mdlite_renderer::MarkerRenderer;

use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input file (default: stdin).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdlite.toml).
    #[arg(short, long, env = "MDLITE_CONFIG")]
    config: Option<PathBuf>,

    /// Escape literal (overrides config).
    #[arg(long)]
    escape: Option<String>,

    /// Enable header detection (default: enabled).
    #[arg(long)]
    header: Option<bool>,

    /// Disable header detection.
    #[arg(long, conflicts_with = "header")]
    no_header: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or input/output cannot be
    /// read or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            escape: self.escape.clone(),
            header_enabled: self.resolve_header_enabled(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let renderer = MarkerRenderer::new(config.renderer_config());

        let source = match &self.input {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        let html = render_source(&renderer, &source);
        tracing::debug!(
            lines = source.lines().count(),
            bytes = html.len(),
            "Rendered input"
        );

        match &self.output {
            Some(path) => std::fs::write(path, html)?,
            None => std::io::stdout().lock().write_all(html.as_bytes())?,
        }

        Ok(())
    }

    /// Resolve `header_enabled` from --header/--no-header flags.
    fn resolve_header_enabled(&self) -> Option<bool> {
        self.no_header.then_some(false).or(self.header)
    }
}

/// Render every line of `source` and terminate the result with a newline.
fn render_source(renderer: &MarkerRenderer, source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }
    let mut html = renderer.render_lines(source);
    html.push('\n');
    html
}
