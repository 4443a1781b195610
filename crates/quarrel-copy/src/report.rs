use quarrel::{Matches, ParsedValue};
use serde::Serialize;

/// What `qcp` would do, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct CopyPlan<'a> {
    pub sources: Vec<&'a str>,
    pub destination: &'a str,
    pub flags: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_suffix: Option<&'a str>,
    pub matches: &'a Matches,
}

impl<'a> CopyPlan<'a> {
    /// Build a plan, or `None` when fewer than two paths were given.
    pub fn from_matches(m: &'a Matches, known_flags: &[&'a str]) -> Option<Self> {
        let paths: Vec<&'a str> = m
            .positionals()
            .iter()
            .filter_map(ParsedValue::as_str)
            .collect();
        let (destination, sources) = paths.split_last()?;
        if sources.is_empty() {
            return None;
        }

        Some(Self {
            sources: sources.to_vec(),
            destination: *destination,
            flags: known_flags
                .iter()
                .copied()
                .filter(|f| m.contains(f))
                .collect(),
            backup_suffix: m.get(crate::options::BACKUP).and_then(ParsedValue::as_str),
            matches: m,
        })
    }
}
