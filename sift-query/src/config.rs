use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::cutset::{Cutset, DefaultCut};
use crate::error::{ConfigError, ConfigResult};

pub const ENV_ALLOWED: &str = "SIFT_ALLOWED";
pub const ENV_CUT: &str = "SIFT_CUT";

/// Parser options: which chars to strip and which filter names to recognize.
#[derive(Clone)]
pub struct Options {
    cut: Option<Arc<dyn Cutset>>,
    // lowercased; empty means every name is a filter
    allowed: BTreeSet<String>,
}

impl Options {
    /// Default cutset, every filter name allowed.
    pub fn new() -> Self {
        Self {
            cut: Some(Arc::new(DefaultCut)),
            allowed: BTreeSet::new(),
        }
    }

    /// No cutset at all.
    pub fn unfiltered() -> Self {
        Self {
            cut: None,
            allowed: BTreeSet::new(),
        }
    }

    pub fn with_cut(mut self, cut: impl Cutset + 'static) -> Self {
        self.cut = Some(Arc::new(cut));
        self
    }

    pub fn without_cut(mut self) -> Self {
        self.cut = None;
        self
    }

    /// Restrict recognized filters to `name` (plus any others already allowed).
    pub fn allow(mut self, name: impl AsRef<str>) -> Self {
        self.allowed.insert(name.as_ref().to_lowercase());
        self
    }

    pub fn with_allowed<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().fold(self, |opts, name| opts.allow(name))
    }

    pub fn cut(&self) -> Option<&dyn Cutset> {
        self.cut.as_deref()
    }

    pub fn allowed(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// Case-insensitive; always true when no allow-list is set.
    pub fn is_allowed(&self, name: &str) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&name.to_lowercase())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("cut", &self.cut.as_ref().map(|_| "<cutset>"))
            .field("allowed", &self.allowed)
            .finish()
    }
}

/// Named cutset choices for configuration sources that cannot carry a closure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CutPolicy {
    #[default]
    Default,
    None,
}

impl FromStr for CutPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(CutPolicy::Default),
            "none" | "off" => Ok(CutPolicy::None),
            _ => Err(ConfigError::UnknownCutPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for CutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutPolicy::Default => fmt::Display::fmt(&DefaultCut, f),
            CutPolicy::None => f.write_str("none"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub allowed: Vec<String>, // empty (all names)
    pub cut: CutPolicy,       // default
}

impl ParserConfig {
    /// - SIFT_ALLOWED (comma-separated filter names, default: all)
    /// - SIFT_CUT (`default` | `none`, default `default`)
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ParserConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(list) = lookup(ENV_ALLOWED).filter(|s| !s.trim().is_empty()) {
            cfg.allowed = parse_allowed(&list)?;
        }
        if let Some(policy) = lookup(ENV_CUT) {
            cfg.cut = policy.parse()?;
        }

        Ok(cfg)
    }

    pub fn options(&self) -> Options {
        let opts = match self.cut {
            CutPolicy::Default => Options::new(),
            CutPolicy::None => Options::unfiltered(),
        };
        opts.with_allowed(&self.allowed)
    }
}

fn parse_allowed(list: &str) -> ConfigResult<Vec<String>> {
    list.split(',')
        .enumerate()
        .map(|(index, name)| {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyAllowedName {
                    var: ENV_ALLOWED.to_string(),
                    index,
                });
            }
            Ok(name.to_string())
        })
        .collect()
}
