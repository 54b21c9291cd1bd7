//! `mdlite config` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdlite_config::Config;
use mdlite_renderer::RendererConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the config command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover mdlite.toml).
    #[arg(short, long, env = "MDLITE_CONFIG")]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute the config command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        match &config.config_path {
            Some(path) => output.highlight(&format!("Configuration: {}", path.display())),
            None => output.highlight("Configuration: standard dialect"),
        }
        for line in describe(&config.renderer_config()) {
            output.info(&line);
        }

        Ok(())
    }
}

/// Describe a renderer configuration, one line per entry.
fn describe(config: &RendererConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(config.symbols.len() + config.escape_rules.len() + 3);

    lines.push(format!("Escape: {}", config.escape));
    for (i, symbol) in config.symbols.iter().enumerate() {
        lines.push(format!(
            "Symbol {}: {} -> {} ... {}",
            i + 1,
            symbol.marker,
            symbol.open,
            symbol.close
        ));
    }
    for rule in &config.escape_rules {
        lines.push(format!(
            "Escape inside {}: {}",
            rule.symbol,
            rule.escaped.join(", ")
        ));
    }
    lines.push(format!(
        "Wrapper: {} ... {}",
        config.wrapper.open, config.wrapper.close
    ));
    match &config.header {
        Some(header) => lines.push(format!(
            "Header: {} -> {} ... {}",
            header.marker, header.tags.open, header.tags.close
        )),
        None => lines.push("Header: disabled".to_owned()),
    }

    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_describe_standard_dialect() {
        assert_eq!(
            describe(&RendererConfig::default()),
            vec![
                r"Escape: \",
                "Symbol 1: _ -> <em> ... </em>",
                "Symbol 2: __ -> <strong> ... </strong>",
                "Symbol 3: ' -> <code> ... </code>",
                "Escape inside _: __",
                "Wrapper: <p> ... </p>",
                "Header: # -> <h1> ... </h1>",
            ]
        );
    }

    #[test]
    fn test_describe_without_header() {
        let lines = describe(&RendererConfig::empty());
        assert_eq!(lines.last().map(String::as_str), Some("Header: disabled"));
    }
}
