//! Plain-text help built from option specifications.

use crate::error::Result;
use crate::lookup::AliasLookup;
use crate::spec::OptionSpec;

const TITLE: &str = "Usage parameters:";

fn format_left(spec: &OptionSpec) -> String {
    let mut names: Vec<&str> = spec.aliases().iter().map(String::as_str).collect();
    names.sort_unstable();
    let mut out = names.join(", ");
    if spec.value_kind().consumes_value() {
        out.push(' ');
        out.push_str(&spec.value_kind().label().to_ascii_uppercase());
    }
    out
}

/// Render help lines: a title, then one row per distinct specification.
///
/// Rows follow the order in which each spec's first alias was seen. Fails
/// under the same conditions as [`AliasLookup::build`].
pub fn render(specs: &[OptionSpec]) -> Result<Vec<String>> {
    let lookup = AliasLookup::build(specs)?;

    let rows: Vec<(String, &str)> = lookup
        .specs()
        .into_iter()
        .map(|spec| (format_left(spec), spec.help_text().trim()))
        .collect();
    let width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(TITLE.to_string());
    for (left, help) in rows {
        if help.is_empty() {
            out.push(format!("  {left}"));
        } else {
            out.push(format!("  {:width$}  {}", left, help, width = width));
        }
    }
    Ok(out)
}

/// Render help and write it to stdout.
pub fn print(specs: &[OptionSpec]) -> Result<()> {
    for line in render(specs)? {
        println!("{line}");
    }
    Ok(())
}
