use indexmap::IndexMap;

use crate::config::ParseConfig;
use crate::error::{Error, Result};
use crate::help;
use crate::kind::ValueKind;
use crate::lookup::AliasLookup;
use crate::spec::OptionSpec;
use crate::value::{ParsedValue, coerce};

/// Values collected by a successful parse.
///
/// Options are keyed by their canonical (first) alias, whichever alias the
/// user typed. A repeated option keeps only its last value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matches {
    positionals: Vec<ParsedValue>,
    options: IndexMap<String, ParsedValue>,
}

impl Matches {
    /// Positional values in input order.
    pub fn positionals(&self) -> &[ParsedValue] {
        &self.positionals
    }

    pub fn options(&self) -> &IndexMap<String, ParsedValue> {
        &self.options
    }

    /// Value recorded for an option, looked up by canonical alias.
    pub fn get(&self, canonical: &str) -> Option<&ParsedValue> {
        self.options.get(canonical)
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.options.contains_key(canonical)
    }

    pub fn into_parts(self) -> (Vec<ParsedValue>, IndexMap<String, ParsedValue>) {
        (self.positionals, self.options)
    }
}

/// How a parse ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Matches(Matches),
    /// A help option was matched. Holds the rendered help lines; the caller
    /// decides where to print them and should then exit successfully.
    Help(Vec<String>),
}

impl ParseOutcome {
    /// The matches, or `None` if help was requested.
    pub fn matches(self) -> Option<Matches> {
        match self {
            Self::Matches(m) => Some(m),
            Self::Help(_) => None,
        }
    }
}

/// Classify `tokens` against `specs` in a single left-to-right pass.
///
/// `tokens` should not include the program name. Each token is, in order of
/// precedence while options are active:
/// - the end-of-options marker, which is dropped and disables option handling
///   for the rest of the input
/// - a known alias, recorded under its canonical alias and possibly capturing
///   the next token as its value
/// - an unknown token starting with a bad prefix, which is an error
/// - a positional, coerced into the configured positional kind
///
/// Captured option values are never checked against bad prefixes, so `-o -`
/// works. The first error aborts the whole parse.
pub fn parse<S: AsRef<str>>(
    tokens: &[S],
    specs: &[OptionSpec],
    config: &ParseConfig,
) -> Result<ParseOutcome> {
    config.validate()?;
    let lookup = AliasLookup::build(specs)?;

    tracing::debug!(
        tokens = tokens.len(),
        aliases = lookup.len(),
        positional_kind = %config.positional(),
        "parsing arguments"
    );

    let mut m = Matches {
        positionals: Vec::with_capacity(tokens.len()),
        options: IndexMap::new(),
    };
    let mut options_active = true;

    let mut i = 0usize;
    while i < tokens.len() {
        let arg = tokens[i].as_ref();

        if options_active && !arg.is_empty() {
            if arg == config.end_marker() {
                tracing::trace!(index = i, "end of options");
                options_active = false;
                i += 1;
                continue;
            }

            if let Some(spec) = lookup.get(arg) {
                let kind = spec.value_kind();
                let canonical = spec.canonical().unwrap_or(arg);

                if kind == ValueKind::Help {
                    tracing::debug!(alias = arg, "help requested");
                    return Ok(ParseOutcome::Help(help::render(specs)?));
                }

                if !kind.consumes_value() {
                    tracing::trace!(index = i, alias = arg, "flag");
                    m.options.insert(canonical.to_string(), ParsedValue::Empty);
                    i += 1;
                    continue;
                }

                let Some(raw) = tokens.get(i + 1) else {
                    return Err(Error::MissingValue {
                        alias: arg.to_string(),
                    });
                };
                let value = coerce(arg, raw.as_ref(), kind)?;
                let value = spec.apply_callback(arg, value).map_err(Error::Callback)?;
                tracing::trace!(index = i, alias = arg, kind = %value.kind(), "option value");
                m.options.insert(canonical.to_string(), value);
                i += 2;
                continue;
            }

            if let Some(prefix) = config.prefixes().iter().find(|p| arg.starts_with(p.as_str())) {
                return Err(Error::AmbiguousPositional {
                    token: arg.to_string(),
                    prefix: prefix.clone(),
                    end_of_options: config.end_marker().to_string(),
                });
            }
        }

        let label = (i + 1).to_string();
        m.positionals.push(coerce(&label, arg, config.positional())?);
        tracing::trace!(index = i, "positional");
        i += 1;
    }

    Ok(ParseOutcome::Matches(m))
}

/// [`parse`] with [`ParseConfig::default`].
pub fn parse_default<S: AsRef<str>>(
    tokens: &[S],
    specs: &[OptionSpec],
) -> Result<ParseOutcome> {
    parse(tokens, specs, &ParseConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(tokens: &[&str], specs: &[OptionSpec], config: &ParseConfig) -> Matches {
        match parse(tokens, specs, config).unwrap() {
            ParseOutcome::Matches(m) => m,
            ParseOutcome::Help(_) => panic!("expected Matches"),
        }
    }

    fn specs() -> Vec<OptionSpec> {
        vec![
            OptionSpec::new(["-a"]).kind(ValueKind::String),
            OptionSpec::new(["--aasd"]).kind(ValueKind::String),
            OptionSpec::new(["-i"]).kind(ValueKind::Int),
            OptionSpec::new(["-v", "--verbose"]),
        ]
    }

    #[test]
    fn options_and_positionals_interleave() {
        let m = matches(
            &["test", "-a", "-wo", "rd", "-v", "last"],
            &specs(),
            &ParseConfig::default(),
        );
        let pos: Vec<_> = m.positionals().iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(pos, ["test", "rd", "last"]);
        assert_eq!(m.get("-a").and_then(|v| v.as_str()), Some("-wo"));
        assert_eq!(m.get("-v"), Some(&ParsedValue::Empty));
        assert!(!m.contains("test"));
    }

    #[test]
    fn secondary_alias_reports_under_canonical() {
        let m = matches(&["--verbose"], &specs(), &ParseConfig::default());
        assert!(m.contains("-v"));
        assert!(!m.contains("--verbose"));
    }

    #[test]
    fn sentinel_is_consumed_once_and_never_reenabled() {
        let m = matches(&["--", "-i", "--", "-v"], &specs(), &ParseConfig::default());
        let pos: Vec<_> = m.positionals().iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(pos, ["-i", "--", "-v"]);
        assert!(m.options().is_empty());
    }

    #[test]
    fn custom_sentinel() {
        let config = ParseConfig::new().end_of_options("::");
        let m = matches(&["::", "-bleah"], &specs(), &config);
        assert_eq!(m.positionals()[0].as_str(), Some("-bleah"));

        let err = parse(&["--"], &specs(), &config).unwrap_err();
        assert!(matches!(err, Error::AmbiguousPositional { .. }));
    }

    #[test]
    fn first_matching_prefix_is_reported() {
        let err = parse(&["--nope"], &specs(), &ParseConfig::default()).unwrap_err();
        match err {
            Error::AmbiguousPositional {
                token,
                prefix,
                end_of_options,
            } => {
                assert_eq!(token, "--nope");
                assert_eq!(prefix, "-");
                assert_eq!(end_of_options, "--");
            }
            other => panic!("expected AmbiguousPositional, got: {other:?}"),
        }
    }

    #[test]
    fn no_prefixes_means_no_ambiguity() {
        let config = ParseConfig::new().bad_prefixes(Vec::<String>::new());
        let m = matches(&["-bleah", "--x"], &specs(), &config);
        assert_eq!(m.positionals().len(), 2);
    }

    #[test]
    fn empty_token_is_positional() {
        let config = ParseConfig::new().end_of_options("");
        let m = matches(&["", "x"], &specs(), &config);
        assert_eq!(m.positionals()[0].as_str(), Some(""));
        assert_eq!(m.positionals().len(), 2);
    }

    #[test]
    fn positional_label_is_one_based_token_index() {
        let config = ParseConfig::new().positional_kind(ValueKind::Int);
        let err = parse(&["-i", "-445", "2", "3", "4.3"], &specs(), &config).unwrap_err();
        match err {
            Error::Coercion { label, raw, .. } => {
                assert_eq!(label, "5");
                assert_eq!(raw, "4.3");
            }
            other => panic!("expected Coercion, got: {other:?}"),
        }
    }

    #[test]
    fn option_value_label_is_typed_alias() {
        let specs = vec![OptionSpec::new(["-n", "--num"]).kind(ValueKind::Int)];
        let err = parse(&["--num", "x"], &specs, &ParseConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Coercion { label, .. } if label == "--num"));
    }

    #[test]
    fn missing_value_names_typed_alias() {
        let err = parse(&["x", "-i"], &specs(), &ParseConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingValue { alias } if alias == "-i"));
    }

    #[test]
    fn help_stops_before_later_errors() {
        let mut specs = specs();
        specs.push(OptionSpec::new(["-h", "--help"]).kind(ValueKind::Help).help("Help"));
        let outcome = parse(&["--help", "-i"], &specs, &ParseConfig::default()).unwrap();
        let ParseOutcome::Help(lines) = outcome else {
            panic!("expected Help");
        };
        assert_eq!(lines[0], "Usage parameters:");
        assert_eq!(lines.len(), specs.len() + 1);
    }

    #[test]
    fn invalid_config_fails_before_scanning() {
        let config = ParseConfig::new().positional_kind(ValueKind::Help);
        let err = parse(&Vec::<String>::new(), &specs(), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn accepts_owned_tokens() {
        let tokens: Vec<String> = vec!["-i".into(), "7".into()];
        let m = parse_default(&tokens, &specs()).unwrap().matches().unwrap();
        assert_eq!(m.get("-i").and_then(|v| v.as_int()), Some(7));
    }
}
