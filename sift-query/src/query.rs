use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "json")]
use serde::Serialize;

use crate::cutset::{self, Cutset};

/// Result of parsing a query string: named filters plus the leftover text.
///
/// Names are stored lowercased and every lookup lowercases its argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Query {
    raw: String,
    filters: BTreeMap<String, Vec<String>>,
}

impl Query {
    /// Text that was not consumed by any filter.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.filters.get(&name.to_lowercase()).map(Vec::as_slice)
    }

    /// Last value given for `name`, or `""` when there is none.
    /// Handy when a filter is only meant to be set once.
    pub fn get_one(&self, name: &str) -> &str {
        self.get(name)
            .and_then(|vals| vals.last())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn has(&self, name: &str) -> bool {
        self.filters.contains_key(&name.to_lowercase())
    }

    /// Filters in name order.
    pub fn filters(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct filter names.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.raw.is_empty()
    }
}

/// Canonical form: sorted `name:"value"` pairs, then the raw text.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        for (name, vals) in &self.filters {
            let mut vals: Vec<&String> = vals.iter().collect();
            vals.sort();
            parts.extend(vals.into_iter().map(|v| format!("{name}:\"{v}\"")));
        }
        if !self.raw.is_empty() {
            parts.push(self.raw.clone());
        }
        f.write_str(parts.join(" ").trim())
    }
}

/// Accumulates filters and raw text for a single parse.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    raw: String,
    filters: BTreeMap<String, Vec<String>>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a filter. Quoted values are kept whole with their quote chars
    /// removed; anything else is split on `,` with empty pieces dropped.
    /// The name entry is created even when no value survives.
    pub fn add(&mut self, name: &str, value: &str) -> &mut Self {
        let value = cutset::collapse_spaces(value);
        let vals: Vec<String> = if value.starts_with('"') {
            vec![value.replace('"', "")]
        } else if value.starts_with('\'') {
            vec![value.replace('\'', "")]
        } else {
            value
                .split(',')
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect()
        };

        self.filters
            .entry(name.to_lowercase())
            .or_insert_with(|| Vec::with_capacity(1))
            .extend(vals);
        self
    }

    pub fn push_raw(&mut self, text: &str) -> &mut Self {
        self.raw.push_str(text);
        self
    }

    /// Finalize: strip `cut` chars from the raw text (if given), collapse space
    /// runs and trim the ends.
    pub fn build(self, cut: Option<&dyn Cutset>) -> Query {
        let raw = match cut {
            Some(cut) => cutset::apply(&self.raw, cut),
            None => self.raw,
        };
        let raw = cutset::collapse_spaces(&raw)
            .trim_matches(&[' ', '\t'][..])
            .to_string();
        Query {
            raw,
            filters: self.filters,
        }
    }
}
