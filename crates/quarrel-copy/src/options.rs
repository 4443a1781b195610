//! Option table for `qcp`, modelled on the flags of `cp`.

use anyhow::bail;
use quarrel::{OptionSpec, ParsedValue, ValueKind};

pub const PRESERVE_ALL: &str = "-a";
pub const FORCE: &str = "-f";
pub const FOLLOW_SOME_SYMBOLIC_LINKS: &str = "-H";
pub const INTERACTIVE: &str = "-i";
pub const FOLLOW_ALL_SYMBOLIC_LINKS: &str = "-L";
pub const NO_OVERWRITE: &str = "-n";
pub const FOLLOW_NO_SYMBOLIC_LINKS: &str = "-P";
pub const PRESERVE_ATTRIBUTES: &str = "-p";
pub const RECURSIVE: &str = "-R";
pub const VERBOSE: &str = "-v";
pub const BACKUP: &str = "--backup";
pub const JSON: &str = "--json";
pub const HELP: &str = "-h";

/// Flags reported back to the user, in display order.
pub const FLAGS: [&str; 10] = [
    PRESERVE_ALL,
    FORCE,
    FOLLOW_SOME_SYMBOLIC_LINKS,
    INTERACTIVE,
    FOLLOW_ALL_SYMBOLIC_LINKS,
    NO_OVERWRITE,
    FOLLOW_NO_SYMBOLIC_LINKS,
    PRESERVE_ATTRIBUTES,
    RECURSIVE,
    VERBOSE,
];

fn flag(alias: &str, help: impl Into<String>) -> OptionSpec {
    OptionSpec::new([alias]).help(help)
}

fn check_backup_suffix(_alias: &str, value: ParsedValue) -> anyhow::Result<ParsedValue> {
    let suffix = value.as_str().unwrap_or_default();
    if suffix.is_empty() {
        bail!("backup suffix must not be empty");
    }
    if suffix.contains(['/', '\\']) {
        bail!("backup suffix '{suffix}' must not contain path separators");
    }
    Ok(value)
}

pub fn specs() -> Vec<OptionSpec> {
    vec![
        flag(
            PRESERVE_ALL,
            format!(
                "Same as {PRESERVE_ATTRIBUTES} {FOLLOW_NO_SYMBOLIC_LINKS} {RECURSIVE} options, \
                 preserves structure and attributes of files but not directory structure"
            ),
        ),
        flag(FORCE, "Force overwrite destination files"),
        flag(
            FOLLOW_SOME_SYMBOLIC_LINKS,
            "Follow symbolic links on the command line",
        ),
        flag(INTERACTIVE, "Prompt before overwriting destination"),
        flag(FOLLOW_ALL_SYMBOLIC_LINKS, "Follow all symbolic links recursively"),
        flag(NO_OVERWRITE, "Do not overwrite destination"),
        flag(FOLLOW_NO_SYMBOLIC_LINKS, "No symbolic links are followed"),
        flag(PRESERVE_ATTRIBUTES, "Attributes are preserved to destination"),
        flag(RECURSIVE, "Follow source directories recursively"),
        OptionSpec::new([VERBOSE, "--verbose"]).help("Be verbose about actions"),
        OptionSpec::new([BACKUP])
            .kind(ValueKind::String)
            .callback(check_backup_suffix)
            .help("Back up existing destination files with this suffix"),
        flag(JSON, "Print the copy plan as JSON"),
        OptionSpec::new([HELP, "--help"])
            .kind(ValueKind::Help)
            .help("Shows this help on the commandline"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_aliases() {
        quarrel::AliasLookup::build(&specs()).unwrap();
    }

    #[test]
    fn backup_suffix_is_validated() {
        let specs = specs();
        let ok = quarrel::parse_default(&["--backup", ".bak"], &specs).unwrap();
        let m = ok.matches().unwrap();
        assert_eq!(m.get(BACKUP).and_then(|v| v.as_str()), Some(".bak"));

        let err = quarrel::parse_default(&["--backup", "a/b"], &specs).unwrap_err();
        assert!(matches!(err, quarrel::Error::Callback(_)));
        assert!(err.to_string().contains("path separators"));

        let err = quarrel::parse_default(&["--backup", ""], &specs).unwrap_err();
        assert_eq!(err.to_string(), "backup suffix must not be empty");
    }
}
