use crate::error::{Error, Result};
use crate::kind::ValueKind;

/// Token that switches off option recognition for the rest of the input.
pub const DEFAULT_END_OF_OPTIONS: &str = "--";

/// Prefixes that make an unknown token too suspicious to accept as positional.
pub const DEFAULT_BAD_PREFIXES: [&str; 2] = ["-", "--"];

/// Per-call knobs for [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    positional_kind: ValueKind,
    bad_prefixes: Vec<String>,
    end_of_options: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            positional_kind: ValueKind::String,
            bad_prefixes: DEFAULT_BAD_PREFIXES.iter().map(|s| s.to_string()).collect(),
            end_of_options: DEFAULT_END_OF_OPTIONS.to_string(),
        }
    }
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind every positional is coerced into. Must not be `None` or `Help`.
    pub fn positional_kind(mut self, kind: ValueKind) -> Self {
        self.positional_kind = kind;
        self
    }

    /// Replace the bad prefix list. An empty list disables ambiguity checks.
    pub fn bad_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bad_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn end_of_options(mut self, marker: impl Into<String>) -> Self {
        self.end_of_options = marker.into();
        self
    }

    pub fn positional(&self) -> ValueKind {
        self.positional_kind
    }

    pub fn prefixes(&self) -> &[String] {
        &self.bad_prefixes
    }

    pub fn end_marker(&self) -> &str {
        &self.end_of_options
    }

    /// Reject configurations the scanner cannot honor.
    pub fn validate(&self) -> Result<()> {
        if !self.positional_kind.consumes_value() {
            return Err(Error::InvalidConfig(format!(
                "positional parameters can't be of kind '{}'",
                self.positional_kind
            )));
        }
        if self.bad_prefixes.iter().any(|p| p.is_empty()) {
            return Err(Error::InvalidConfig(
                "bad prefixes can't contain empty strings".to_string(),
            ));
        }
        Ok(())
    }
}
