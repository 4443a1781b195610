use crate::kind::ValueKind;

/// Everything that can stop a parse.
///
/// A help request is not part of this taxonomy; see
/// [`ParseOutcome::Help`](crate::ParseOutcome::Help).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The same alias is claimed twice, within one spec or across specs.
    #[error("parameter '{alias}' repeated in input specification")]
    DuplicateAlias { alias: String },

    /// A value-taking option was the last token.
    #[error("parameter '{alias}' requires a value, but none was provided")]
    MissingValue { alias: String },

    /// A captured or positional value does not convert to its declared kind.
    ///
    /// `label` is the matched alias for option values and the 1-based token
    /// index for positionals.
    #[error("param '{label}' with value '{raw}' can't be parsed into {}", .kind.article())]
    Coercion {
        label: String,
        raw: String,
        kind: ValueKind,
    },

    /// An unknown token looks like a flag while options are still active.
    #[error(
        "found ambiguous parameter '{token}' starting with '{prefix}', put \
         '{end_of_options}' as the previous parameter if you want to force it \
         as positional parameter"
    )]
    AmbiguousPositional {
        token: String,
        prefix: String,
        end_of_options: String,
    },

    /// The option specs or the parse configuration are unusable.
    #[error("invalid parser configuration: {0}")]
    InvalidConfig(String),

    /// Returned unchanged from an option callback.
    #[error(transparent)]
    Callback(anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
