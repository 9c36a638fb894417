use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde_json::json;
use sift_query::{parse_with, Options, ParserConfig};

pub const ENV_OUTPUT: &str = "SIFT_OUTPUT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    /// Canonical `name:"value" ... raw` form.
    Text,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => bail!("unknown output format '{other}', supported: json|text"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub parser: ParserConfig,
    pub output: OutputFormat, // json
}

impl CliConfig {
    /// - SIFT_ALLOWED, SIFT_CUT (see [`ParserConfig::from_env`])
    /// - SIFT_OUTPUT (`json` | `text`, default `json`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parser = ParserConfig::from_lookup(&lookup).context("parser configuration")?;
        let output = match lookup(ENV_OUTPUT) {
            Some(v) => v.parse::<OutputFormat>().with_context(|| format!("{ENV_OUTPUT}={v}"))?,
            None => OutputFormat::default(),
        };
        Ok(Self { parser, output })
    }
}

/// Parse one query string and format the result.
pub fn render(input: &str, options: &Options, format: OutputFormat) -> Result<String> {
    let query = parse_with(input, options);
    tracing::debug!(
        target: "sift_cli",
        "parsed {} filter(s) from {:?}",
        query.filter_count(),
        input
    );
    match format {
        OutputFormat::Text => Ok(query.to_string()),
        OutputFormat::Json => serde_json::to_string(&json!({ "query": input, "result": query }))
            .context("failed to serialize query result"),
    }
}
