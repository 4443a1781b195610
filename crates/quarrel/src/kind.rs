use std::fmt;

/// What an option captures, or what positionals are coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ValueKind {
    /// A plain flag: records [`ParsedValue::Empty`](crate::ParsedValue::Empty).
    #[default]
    None,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    String,
    Boolean,
    /// Matching this option stops the parse and yields help text.
    Help,
}

impl ValueKind {
    /// Whether an option of this kind captures the following token.
    pub fn consumes_value(self) -> bool {
        !matches!(self, Self::None | Self::Help)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Help => "help",
        }
    }

    pub(crate) fn article(self) -> String {
        match self {
            Self::Int => format!("an {}", self.label()),
            _ => format!("a {}", self.label()),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::ValueKind;

    #[test]
    fn only_flags_and_help_skip_the_next_token() {
        assert!(!ValueKind::None.consumes_value());
        assert!(!ValueKind::Help.consumes_value());
        for kind in [
            ValueKind::Int,
            ValueKind::Long,
            ValueKind::Float,
            ValueKind::Double,
            ValueKind::String,
            ValueKind::Boolean,
        ] {
            assert!(kind.consumes_value(), "{kind} should consume a value");
        }
    }

    #[test]
    fn articles_read_naturally() {
        assert_eq!(ValueKind::Int.article(), "an int");
        assert_eq!(ValueKind::Long.article(), "a long");
        assert_eq!(ValueKind::Boolean.article(), "a boolean");
    }
}
