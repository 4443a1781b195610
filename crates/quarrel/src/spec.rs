use std::fmt;
use std::sync::Arc;

use crate::kind::ValueKind;
use crate::value::ParsedValue;

/// Post-coercion hook attached to an option.
///
/// Receives the alias exactly as typed by the user and the already coerced
/// value. Whatever it returns is stored instead, so it may validate, rewrite,
/// or change the kind of the value. Returning an error aborts the parse with
/// that error as-is.
pub type Callback = Arc<dyn Fn(&str, ParsedValue) -> anyhow::Result<ParsedValue> + Send + Sync>;

/// One recognized option, possibly reachable through several aliases.
///
/// The first alias is canonical: results are keyed by it no matter which alias
/// appeared on the command line.
#[derive(Clone)]
pub struct OptionSpec {
    aliases: Vec<String>,
    kind: ValueKind,
    callback: Option<Callback>,
    help: String,
}

impl OptionSpec {
    /// A flag (kind [`ValueKind::None`]) with the given aliases.
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            aliases: aliases.into_iter().map(Into::into).collect(),
            kind: ValueKind::None,
            callback: None,
            help: String::new(),
        }
    }

    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn callback<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, ParsedValue) -> anyhow::Result<ParsedValue> + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(f));
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The key under which this option's value is reported.
    pub fn canonical(&self) -> Option<&str> {
        self.aliases.first().map(String::as_str)
    }

    pub fn value_kind(&self) -> ValueKind {
        self.kind
    }

    pub fn help_text(&self) -> &str {
        &self.help
    }

    pub(crate) fn apply_callback(
        &self,
        alias: &str,
        value: ParsedValue,
    ) -> anyhow::Result<ParsedValue> {
        match &self.callback {
            Some(f) => f(alias, value),
            None => Ok(value),
        }
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("aliases", &self.aliases)
            .field("kind", &self.kind)
            .field("callback", &self.callback.is_some())
            .field("help", &self.help)
            .finish()
    }
}
